use alloy::{check_argument, check_state, ErrorKind, PreconditionError};

fn percentage(value: u32) -> Result<u32, PreconditionError> {
    check_argument!(value <= 100, "{} is not a percentage", value)?;

    Ok(value)
}

fn main() {
    assert_eq!(percentage(42), Ok(42));
    assert_eq!(
        percentage(101).unwrap_err().message(),
        Some("101 is not a percentage")
    );

    assert!(check_state!(true).is_ok());
    assert_eq!(
        check_state!(1 > 2, String::from("eager")).unwrap_err().kind(),
        ErrorKind::State
    );
}
