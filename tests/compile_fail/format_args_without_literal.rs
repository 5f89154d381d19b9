use alloy::check_argument;

fn main() {
    let _ = check_argument!(1 > 2, String::from("too small"), 3);
}
