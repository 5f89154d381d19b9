//! Defines the arguments of a single check and how a check is rendered.

use proc_macro2::TokenStream;
use quote::{quote, quote_spanned, ToTokens};
use std::fmt;
use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    spanned::Spanned,
    Expr, ExprLit, Lit, LitStr, Token,
};

use crate::{helpers::crate_ident, precondition::PreconditionKind};

/// The arguments of a check: a condition, optionally followed by a message.
pub(crate) struct CheckArgs {
    /// The boolean expression that must hold.
    pub(crate) condition: Expr,
    /// The message used if the condition does not hold.
    pub(crate) message: Option<Message>,
}

/// The message of a check.
pub(crate) enum Message {
    /// A format string with its arguments, which is only formatted if the check fails.
    Format {
        /// The format string.
        format: LitStr,
        /// The arguments to the format string.
        args: Vec<Expr>,
    },
    /// Any other expression, which is evaluated eagerly.
    Value(Expr),
}

impl fmt::Debug for CheckArgs {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.condition.to_token_stream())?;

        match &self.message {
            Some(Message::Format { format, args }) => {
                write!(f, ", {:?}", format.value())?;

                for arg in args {
                    write!(f, ", {}", arg.to_token_stream())?;
                }

                Ok(())
            }
            Some(Message::Value(expr)) => write!(f, ", {}", expr.to_token_stream()),
            None => Ok(()),
        }
    }
}

impl Parse for CheckArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let span = input.span();
        let mut exprs = Punctuated::<Expr, Token![,]>::parse_terminated(input)?.into_iter();

        let condition = match exprs.next() {
            Some(condition) => condition,
            None => return Err(syn::Error::new(span, "expected a condition to check")),
        };

        let message = match exprs.next() {
            Some(Expr::Lit(ExprLit {
                lit: Lit::Str(format),
                ..
            })) => Some(Message::Format {
                format,
                args: exprs.collect(),
            }),
            Some(expr) => {
                if let Some(extra) = exprs.next() {
                    return Err(syn::Error::new(
                        extra.span(),
                        "format arguments require a string literal as the message",
                    ));
                }

                Some(Message::Value(expr))
            }
            None => None,
        };

        Ok(CheckArgs { condition, message })
    }
}

/// Renders the call to the runtime check of the given kind.
///
/// The rendered expression evaluates to the `Result` of the check.
pub(crate) fn render_check(kind: PreconditionKind, args: &CheckArgs) -> TokenStream {
    let crate_name = crate_ident();
    let condition = &args.condition;
    let span = condition.span();

    match &args.message {
        None => {
            let function = kind.function("");

            quote_spanned! { span=>
                ::#crate_name::preconditions::#function(#condition)
            }
        }
        Some(Message::Format { format, args }) => {
            let function = kind.function("_with");

            quote! {
                ::#crate_name::preconditions::#function(
                    #condition,
                    ::core::option::Option::Some(|| ::std::format!(#format #(, #args)*)),
                )
            }
        }
        Some(Message::Value(message)) => {
            let function = kind.function("_message");

            quote! {
                ::#crate_name::preconditions::#function(
                    #condition,
                    ::core::option::Option::Some(&(#message)),
                )
            }
        }
    }
}
