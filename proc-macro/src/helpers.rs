//! Utility functions shared by the macros.

use lazy_static::lazy_static;
use proc_macro2::{Delimiter, Spacing, Span, TokenStream, TokenTree};
use proc_macro_error::{abort_call_site, emit_error};
use std::env;
use syn::{
    parenthesized,
    parse::{Parse, ParseStream},
    spanned::Spanned,
    token::Paren,
    Attribute, Ident,
};

lazy_static! {
    /// The name of the main `alloy` crate, as seen by the crate being compiled.
    pub(crate) static ref CRATE_NAME: String = resolve_crate_name();
}

/// Looks up the name under which the main crate is imported.
fn resolve_crate_name() -> String {
    let err = match proc_macro_crate::crate_name("alloy") {
        // `crate` is returned inside the main crate, where only its documentation tests expand
        // the macros. These are separate crates, so `crate` would not refer to it.
        Ok(name) if name != "crate" => return name,
        Ok(_) => String::from("the main crate itself is being compiled"),
        Err(err) => err,
    };

    match env::var("CARGO_PKG_NAME") {
        // This allows for writing documentation tests in the main crate itself.
        Ok(val) if val == "alloy" => "alloy".into(),
        _ => abort_call_site!("crate `alloy` must be imported: {}", err),
    }
}

/// Returns the name of the main crate as an identifier usable in generated paths.
pub(crate) fn crate_ident() -> Ident {
    Ident::new(&CRATE_NAME, Span::call_site())
}

/// Checks if the given attribute is an `attr_to_check` attribute of the main crate.
pub(crate) fn is_attr(attr_to_check: &str, attr: &Attribute) -> bool {
    let path = &attr.path;

    if path.is_ident(attr_to_check) {
        true
    } else if path.segments.len() == 2 {
        // Note that `Path::leading_colon` is not checked here, so paths both with and without a
        // leading colon are accepted here
        path.segments[0].ident == *CRATE_NAME && path.segments[1].ident == attr_to_check
    } else {
        false
    }
}

/// Removes matching attributes, parses them, and then allows visiting them.
///
/// This returns the most appropriate span to reference the original attributes.
pub(crate) fn visit_matching_attrs_parsed<ParsedAttr: Parse>(
    attributes: &mut Vec<Attribute>,
    mut filter: impl FnMut(&Attribute) -> bool,
    mut visit: impl FnMut(ParsedAttr),
) -> Option<Span> {
    let mut attr_span: Option<Span> = None;
    let mut i = 0;

    while i < attributes.len() {
        if filter(&attributes[i]) {
            let attr = attributes.remove(i);

            attr_span = Some(match attr_span.take() {
                Some(old_span) => old_span.join(attr.span()).unwrap_or_else(|| attr.span()),
                None => attr.span(),
            });

            match syn::parse2::<ParsedAttr>(attr.tokens) {
                Ok(parsed_attr) => visit(parsed_attr),
                Err(err) => emit_error!(err),
            }
        } else {
            i += 1;
        }
    }

    attr_span
}

/// A parsable thing surrounded by parentheses.
pub(crate) struct Parenthesized<T> {
    /// The parentheses surrounding the object.
    _parentheses: Paren,
    /// The content that was surrounded by the parentheses.
    pub(crate) content: T,
}

impl<T: Parse> Parse for Parenthesized<T> {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let content;
        let parentheses = parenthesized!(content in input);
        let content = content.parse()?;

        Ok(Parenthesized {
            _parentheses: parentheses,
            content,
        })
    }
}

/// Renders tokens the way they are usually written in source code.
///
/// The `Display` implementation of `TokenStream` separates all tokens by spaces, which reads
/// poorly in generated documentation (`self . items . len ()`).
pub(crate) fn render_tokens(tokens: TokenStream) -> String {
    let mut rendered = String::new();
    // Whether a space goes before the next token, unless that token forbids it.
    let mut space = false;
    // Whether the last token ends an operand, so a following `&`, `*`, `-` or `!` is binary.
    let mut after_operand = false;
    // Whether the last token was a punctuation character joined to the next one, as in `&&`.
    let mut joint = false;

    for token in tokens {
        match token {
            TokenTree::Punct(punct) => {
                let ch = punct.as_char();
                let continuation = joint;
                let macro_bang =
                    ch == '!' && after_operand && punct.spacing() == Spacing::Alone;
                let attach_left = continuation
                    || macro_bang
                    || matches!(ch, '.' | ',' | ';' | '?')
                    || (ch == ':' && punct.spacing() == Spacing::Joint);

                if space && !attach_left {
                    rendered.push(' ');
                }
                rendered.push(ch);

                joint = punct.spacing() == Spacing::Joint;
                let unary = !continuation && !after_operand && matches!(ch, '&' | '*' | '-');

                space = !(joint || unary || ch == '!' || ch == '.' || (ch == ':' && continuation));
                after_operand = ch == '?';
            }
            TokenTree::Group(group) => {
                let (open, close) = match group.delimiter() {
                    Delimiter::Parenthesis => ("(", ")"),
                    Delimiter::Bracket => ("[", "]"),
                    Delimiter::Brace => ("{ ", " }"),
                    Delimiter::None => ("", ""),
                };
                let attach_left = after_operand
                    && matches!(group.delimiter(), Delimiter::Parenthesis | Delimiter::Bracket);

                if space && !attach_left {
                    rendered.push(' ');
                }
                rendered.push_str(open);
                rendered.push_str(&render_tokens(group.stream()));
                rendered.push_str(close);

                space = true;
                after_operand = true;
                joint = false;
            }
            other => {
                if space {
                    rendered.push(' ');
                }
                rendered.push_str(&other.to_string());

                space = true;
                after_operand = true;
                joint = false;
            }
        }
    }

    rendered
}
