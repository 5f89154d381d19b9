//! Checks of expected input conditions.
//!
//! In general, these checks allow code of the form
//!
//! ```rust
//! # use alloy::PreconditionError;
//! # fn demo(expression: bool) -> Result<(), PreconditionError> {
//! if !expression {
//!     return Err(PreconditionError::Argument(None));
//! }
//! # Ok(())
//! # }
//! ```
//!
//! to be replaced with
//!
//! ```rust
//! # use alloy::preconditions::check_argument;
//! # fn demo(expression: bool) -> alloy::Result<()> {
//! check_argument(expression)?;
//! # Ok(())
//! # }
//! ```
//!
//! There are two families of checks. The `check_argument` family reports values the caller
//! supplied that were not acceptable, the `check_state` family reports an object or process that
//! is not in a state allowing the operation. Each family comes in three forms:
//!
//! - without a message,
//! - with a message that is already built (`*_message`),
//! - with a closure building the message (`*_with`). The closure is only called if the check
//!   fails, so prefer this form when the message is costly to build.

use std::fmt;

use crate::error::{PreconditionError, Result, NULL_MESSAGE};

/// The name reported when the message supplier of a `*_with` check is absent.
const SUPPLIER: &str = "supplier";

/// Ensures that a required value is present, returning it.
///
/// `parameter` names the value in the error returned when it is absent.
///
/// ```rust
/// # use alloy::{preconditions::check_present, ErrorKind};
/// assert_eq!(check_present(Some(4), "width"), Ok(4));
///
/// let err = check_present(None::<u32>, "width").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::NullReference);
/// ```
pub fn check_present<T>(value: Option<T>, parameter: &'static str) -> Result<T> {
    value.ok_or(PreconditionError::NullReference(parameter))
}

/// Ensures the truth of an expression involving one or more arguments of the calling function.
///
/// # Errors
/// Returns [`PreconditionError::Argument`] without a message if `expression` is false.
pub fn check_argument(expression: bool) -> Result<()> {
    if expression {
        Ok(())
    } else {
        Err(PreconditionError::Argument(None))
    }
}

/// Ensures the truth of an expression involving one or more arguments of the calling function.
///
/// If the check fails, the display form of `message` becomes the message of the error. An absent
/// message is rendered as `"null"`.
///
/// # Errors
/// Returns [`PreconditionError::Argument`] if `expression` is false.
pub fn check_argument_message<M: fmt::Display>(expression: bool, message: Option<M>) -> Result<()> {
    if expression {
        Ok(())
    } else {
        Err(PreconditionError::Argument(Some(render_message(message))))
    }
}

/// Ensures the truth of an expression involving one or more arguments of the calling function.
///
/// Preferred to [`check_argument_message`] when the message needs to be formatted or otherwise
/// processed, as `supplier` is not called if `expression` is true.
///
/// ```rust
/// # use alloy::preconditions::check_argument_with;
/// let len = 3;
/// let index = 5;
///
/// let err = check_argument_with(index < len, Some(|| format!("{} >= {}", index, len)));
/// assert_eq!(err.unwrap_err().message(), Some("5 >= 3"));
/// ```
///
/// # Errors
/// Returns [`PreconditionError::NullReference`] if `supplier` is absent, whatever the value of
/// `expression`. Otherwise returns [`PreconditionError::Argument`] if `expression` is false.
pub fn check_argument_with<F, M>(expression: bool, supplier: Option<F>) -> Result<()>
where
    F: FnOnce() -> M,
    M: fmt::Display,
{
    let supplier = check_present(supplier, SUPPLIER)?;

    if expression {
        Ok(())
    } else {
        Err(PreconditionError::Argument(Some(supplier().to_string())))
    }
}

/// Ensures the truth of an expression involving the state of the calling instance.
///
/// # Errors
/// Returns [`PreconditionError::State`] without a message if `expression` is false.
pub fn check_state(expression: bool) -> Result<()> {
    if expression {
        Ok(())
    } else {
        Err(PreconditionError::State(None))
    }
}

/// Ensures the truth of an expression involving the state of the calling instance.
///
/// If the check fails, the display form of `message` becomes the message of the error. An absent
/// message is rendered as `"null"`.
///
/// # Errors
/// Returns [`PreconditionError::State`] if `expression` is false.
pub fn check_state_message<M: fmt::Display>(expression: bool, message: Option<M>) -> Result<()> {
    if expression {
        Ok(())
    } else {
        Err(PreconditionError::State(Some(render_message(message))))
    }
}

/// Ensures the truth of an expression involving the state of the calling instance.
///
/// Preferred to [`check_state_message`] when the message needs to be formatted or otherwise
/// processed, as `supplier` is not called if `expression` is true.
///
/// # Errors
/// Returns [`PreconditionError::NullReference`] if `supplier` is absent, whatever the value of
/// `expression`. Otherwise returns [`PreconditionError::State`] if `expression` is false.
pub fn check_state_with<F, M>(expression: bool, supplier: Option<F>) -> Result<()>
where
    F: FnOnce() -> M,
    M: fmt::Display,
{
    let supplier = check_present(supplier, SUPPLIER)?;

    if expression {
        Ok(())
    } else {
        Err(PreconditionError::State(Some(supplier().to_string())))
    }
}

/// Converts an optional message into the text carried by an error.
fn render_message<M: fmt::Display>(message: Option<M>) -> String {
    match message {
        Some(message) => message.to_string(),
        None => NULL_MESSAGE.to_string(),
    }
}
