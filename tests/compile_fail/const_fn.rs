use alloy::requires;

#[requires(argument(x > 0))]
const fn halve(x: i32) -> alloy::Result<i32> {
    Ok(x / 2)
}

fn main() {
    let _ = halve(4);
}
