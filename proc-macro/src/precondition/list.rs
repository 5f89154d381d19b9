//! Defines a list with multiple preconditions.

use std::fmt;
use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    Token,
};

/// A comma separated list, as found in a `requires` attribute.
pub(crate) struct PreconditionList<T> {
    /// The actual list of entries.
    entries: Punctuated<T, Token![,]>,
}

impl<T: fmt::Display> fmt::Display for PreconditionList<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut first = true;

        for entry in self.entries.iter() {
            if first {
                write!(f, "{}", entry)?;

                first = false;
            } else {
                write!(f, ", {}", entry)?;
            }
        }

        Ok(())
    }
}

impl<T: Parse> Parse for PreconditionList<T> {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        Ok(PreconditionList {
            entries: Punctuated::parse_terminated(input)?,
        })
    }
}

impl<T> PreconditionList<T> {
    /// Provides an iterator over the entries.
    ///
    /// The order of the entries is the order in which they were specified.
    #[cfg(test)]
    pub(crate) fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }

    /// Returns `true` if the list has no entries.
    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> IntoIterator for PreconditionList<T> {
    type Item = T;
    type IntoIter = syn::punctuated::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use quote::quote;
    use syn::parse2;

    use super::*;
    use crate::precondition::Precondition;

    #[test]
    fn parse_correct() {
        let result: Result<PreconditionList<Precondition>, _> = parse2(quote! {
            argument(foo), state(bar)
        });

        let result = result.expect("parsing should work");

        assert_eq!(result.iter().count(), 2);
    }

    #[test]
    fn parse_correct_trailing_comma() {
        let result: Result<PreconditionList<Precondition>, _> = parse2(quote! {
            argument(foo), state(bar),
        });

        let result = result.expect("parsing should work");

        assert_eq!(result.iter().count(), 2);
    }

    #[test]
    fn parse_empty() {
        let result: Result<PreconditionList<Precondition>, _> = parse2(quote! {});

        let result = result.expect("parsing should work");

        assert!(result.is_empty());
    }

    #[test]
    fn iter_order_correct() {
        let result: Result<PreconditionList<Precondition>, _> = parse2(quote! {
            argument(a5), argument(a4), state(a3), argument(a2), state(a1)
        });

        let result = result.expect("parsing should work");

        assert_eq!(
            result.to_string(),
            "argument: `a5`, argument: `a4`, state: `a3`, argument: `a2`, state: `a1`"
        );
        assert_eq!(
            result
                .into_iter()
                .map(|precondition| format!("{:?}", precondition))
                .collect::<Vec<_>>(),
            vec!["argument(a5)", "argument(a4)", "state(a3)", "argument(a2)", "state(a1)"]
        );
    }
}
