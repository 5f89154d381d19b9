//! Generates the documentation of functions with preconditions.

use syn::{parse_quote, Attribute};

use crate::precondition::Precondition;

/// Generates a doc attribute listing the given preconditions.
pub(crate) fn generate_docs(preconditions: &[Precondition]) -> Attribute {
    let mut docs = String::from("\n# Preconditions\n\n");
    docs.push_str("This function checks the following when it is called:\n\n");

    for precondition in preconditions {
        docs.push_str(&format!("- {}\n", precondition));
    }

    parse_quote! {
        #[doc = #docs]
    }
}
