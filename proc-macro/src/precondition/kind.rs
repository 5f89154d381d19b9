//! Defines the different kinds of preconditions.

use quote::format_ident;
use std::fmt;
use syn::{
    parse::{Parse, ParseStream},
    Ident,
};

/// The custom keywords used by the precondition kinds.
mod custom_keywords {
    use syn::custom_keyword;

    custom_keyword!(argument);
    custom_keyword!(state);
}

/// The different kinds of preconditions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum PreconditionKind {
    /// Requires something of the arguments passed by the caller.
    Argument,
    /// Requires something of the state of the callee.
    State,
}

impl fmt::Display for PreconditionKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PreconditionKind::Argument => write!(f, "argument"),
            PreconditionKind::State => write!(f, "state"),
        }
    }
}

impl Parse for PreconditionKind {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let lookahead = input.lookahead1();

        if lookahead.peek(custom_keywords::argument) {
            input.parse::<custom_keywords::argument>()?;

            Ok(PreconditionKind::Argument)
        } else if lookahead.peek(custom_keywords::state) {
            input.parse::<custom_keywords::state>()?;

            Ok(PreconditionKind::State)
        } else {
            Err(lookahead.error())
        }
    }
}

impl PreconditionKind {
    /// Returns the name of the runtime function checking this kind, followed by `suffix`.
    pub(crate) fn function(self, suffix: &str) -> Ident {
        format_ident!("check_{}{}", self.to_string(), suffix)
    }
}
