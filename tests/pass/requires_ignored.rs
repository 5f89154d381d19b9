use alloy::requires;

// Neither attribute declares a precondition, so both functions are left as they are.
#[requires]
fn identity(x: u32) -> u32 {
    x
}

#[requires(no_doc)]
fn double(x: u32) -> u32 {
    x * 2
}

fn main() {
    assert_eq!(identity(3), 3);
    assert_eq!(double(3), 6);
}
