//! Procedural macro implementations for `alloy`.
//!
//! The macros only render calls to the check functions in `alloy::preconditions`, so the main
//! crate must be a dependency of any crate using them.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use proc_macro_error::proc_macro_error;
use quote::quote;
use syn::{parse_macro_input, ItemFn};

use crate::{
    check::{render_check, CheckArgs},
    precondition::{PreconditionKind, PreconditionList},
    requires_attr::{render_function, RequiresEntry},
};

mod check;
mod documentation;
mod helpers;
mod precondition;
mod requires_attr;

/// Checks that an expression about the arguments of the calling function holds.
///
/// Accepts `(condition)`, `(condition, "format", args...)` or `(condition, message)` and
/// evaluates to the `Result` of the corresponding check.
#[proc_macro]
#[proc_macro_error]
pub fn check_argument(input: TokenStream) -> TokenStream {
    let args = parse_macro_input!(input as CheckArgs);

    render_check(PreconditionKind::Argument, &args).into()
}

/// Checks that an expression about the state of the calling instance holds.
///
/// Accepts the same arguments as `check_argument!`.
#[proc_macro]
#[proc_macro_error]
pub fn check_state(input: TokenStream) -> TokenStream {
    let args = parse_macro_input!(input as CheckArgs);

    render_check(PreconditionKind::State, &args).into()
}

/// Declares the preconditions of a function and checks them when it is called.
///
/// ```rust,ignore
/// #[requires(argument(index < self.len(), "index {} out of bounds", index))]
/// #[requires(state(!self.closed))]
/// fn get(&self, index: usize) -> alloy::Result<u8> {
///     // ...
/// }
/// ```
#[proc_macro_attribute]
#[proc_macro_error]
pub fn requires(attr: TokenStream, function: TokenStream) -> TokenStream {
    let dummy_function: TokenStream2 = function.clone().into();
    proc_macro_error::set_dummy(quote! {
        #dummy_function
    });

    let first_attr = parse_macro_input!(attr as PreconditionList<RequiresEntry>);
    let function = parse_macro_input!(function as ItemFn);

    let output = render_function(first_attr, function);

    // Reset the dummy here, in case errors were emitted in `render_function`.
    // This will use the most up-to-date version of the function.
    proc_macro_error::set_dummy(quote! {
        #output
    });

    output.into()
}
