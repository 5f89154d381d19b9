#[alloy::requires(no_doc, argument(start <= end))]
#[alloy::requires(argument(end <= text.len(), "range ends at {}", end))]
fn slice(text: &str, start: usize, end: usize) -> alloy::Result<&str> {
    Ok(&text[start..end])
}

fn main() {
    assert_eq!(slice("precondition", 0, 3), Ok("pre"));
    assert_eq!(
        slice("precondition", 3, 2),
        Err(alloy::PreconditionError::Argument(None))
    );
    assert_eq!(
        slice("pre", 0, 4).unwrap_err().to_string(),
        "illegal argument: range ends at 4"
    );
}
