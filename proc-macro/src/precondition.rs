//! Defines what a precondition is and how it's parsed.

use proc_macro2::{Span, TokenStream};
use quote::ToTokens;
use std::fmt;
use syn::{
    parenthesized,
    parse::{Parse, ParseStream},
    token::Paren,
};

pub(crate) use self::{kind::PreconditionKind, list::PreconditionList};
use crate::{
    check::{render_check, CheckArgs, Message},
    helpers::render_tokens,
};

mod kind;
mod list;

/// A precondition declared on a function.
///
/// Written as `argument(...)` or `state(...)`, where the parentheses contain the same arguments
/// the `check_*` macros accept.
pub(crate) struct Precondition {
    /// The kind of precondition.
    kind: PreconditionKind,
    /// The span of the keyword naming the kind.
    span: Span,
    /// The parentheses following the keyword.
    _parentheses: Paren,
    /// The condition and message of the check.
    args: CheckArgs,
}

impl fmt::Debug for Precondition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}({:?})", self.kind, self.args)
    }
}

/// Renders the precondition the way it appears in the generated documentation.
impl fmt::Display for Precondition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}: `{}`",
            self.kind,
            render_tokens(self.args.condition.to_token_stream())
        )?;

        if let Some(Message::Format { format, args }) = &self.args.message {
            if args.is_empty() {
                write!(f, " ({})", format.value())?;
            }
        }

        Ok(())
    }
}

impl Parse for Precondition {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let span = input.span();
        let content;

        Ok(Precondition {
            kind: input.parse()?,
            span,
            _parentheses: parenthesized!(content in input),
            args: content.parse()?,
        })
    }
}

impl Precondition {
    /// The span best representing this precondition.
    pub(crate) fn span(&self) -> Span {
        self.span
    }

    /// Renders the check of this precondition as an expression evaluating to its `Result`.
    pub(crate) fn render(&self) -> TokenStream {
        render_check(self.kind, &self.args)
    }
}
