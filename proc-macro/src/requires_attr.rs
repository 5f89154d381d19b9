//! Defines the `requires` attribute and how it is handled.

use proc_macro2::{Span, TokenStream};
use proc_macro_error::{emit_error, emit_warning};
use quote::{quote, quote_spanned};
use syn::{
    parse::{Parse, ParseStream},
    parse2, ItemFn, ReturnType, Stmt,
};

use crate::{
    documentation::generate_docs,
    helpers::{is_attr, visit_matching_attrs_parsed, Parenthesized},
    precondition::{Precondition, PreconditionList},
};

/// The custom keywords used for `requires` attributes.
mod custom_keywords {
    use syn::custom_keyword;

    custom_keyword!(no_doc);
}

/// A single entry of a `requires` attribute.
pub(crate) enum RequiresEntry {
    /// A request not to generate documentation for the preconditions.
    NoDoc(custom_keywords::no_doc),
    /// A precondition that is checked when the function is called.
    Precondition(Precondition),
}

impl Parse for RequiresEntry {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        if input.peek(custom_keywords::no_doc) {
            Ok(RequiresEntry::NoDoc(input.parse()?))
        } else {
            Ok(RequiresEntry::Precondition(input.parse()?))
        }
    }
}

/// Renders the given function with the checks of all `requires` attributes inserted.
///
/// `first_attr` is the content of the attribute that invoked the macro, the remaining `requires`
/// attributes are collected from the function itself.
pub(crate) fn render_function(
    first_attr: PreconditionList<RequiresEntry>,
    mut function: ItemFn,
) -> TokenStream {
    let mut preconditions = Vec::new();
    let mut render_docs = true;

    let mut handle_entry = |entry| match entry {
        RequiresEntry::NoDoc(_) => render_docs = false,
        RequiresEntry::Precondition(precondition) => preconditions.push(precondition),
    };

    for entry in first_attr {
        handle_entry(entry);
    }

    let attr_span = visit_matching_attrs_parsed(
        &mut function.attrs,
        |attr| is_attr("requires", attr),
        |parsed_attr: Parenthesized<PreconditionList<RequiresEntry>>| {
            for entry in parsed_attr.content {
                handle_entry(entry);
            }
        },
    );

    if preconditions.is_empty() {
        emit_warning!(
            attr_span.unwrap_or_else(Span::call_site),
            "this does not do anything and is ignored";
            help = "declare a check with `argument(...)` or `state(...)`"
        );

        return quote! { #function };
    }

    if let Some(constness) = &function.sig.constness {
        emit_error!(constness, "preconditions cannot be checked in a `const fn`");

        return quote! { #function };
    }

    if let ReturnType::Default = function.sig.output {
        emit_error!(
            &function.sig,
            "functions with preconditions must return a `Result`"
        );

        return quote! { #function };
    }

    if render_docs {
        function.attrs.push(generate_docs(&preconditions));
    }

    let mut stmts = preconditions
        .iter()
        .map(|precondition| {
            let span = precondition.span();
            let check = precondition.render();

            parse2::<Stmt>(quote_spanned! { span=>
                #check?;
            })
            .expect("valid statement")
        })
        .collect::<Vec<_>>();

    stmts.append(&mut function.block.stmts);
    function.block.stmts = stmts;

    quote! { #function }
}
