use alloy::requires;

#[requires(argument(x > 0))]
fn scale(x: i32) {
    println!("{}", x * 2);
}

fn main() {
    scale(2);
}
