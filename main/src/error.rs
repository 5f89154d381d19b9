//! Defines the errors produced by failed checks.

use std::fmt;
use thiserror::Error;

/// Result type alias for precondition checks.
pub type Result<T> = std::result::Result<T, PreconditionError>;

/// The text used in place of a message that was absent.
pub const NULL_MESSAGE: &str = "null";

/// The error produced when a check fails.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum PreconditionError {
    /// A value supplied by the caller was not acceptable.
    #[error("illegal argument{}", render_detail(.0))]
    Argument(Option<String>),

    /// The object or process was not in a state that allows the operation.
    #[error("illegal state{}", render_detail(.0))]
    State(Option<String>),

    /// A required value was absent.
    ///
    /// The payload names the missing parameter.
    #[error("required value `{0}` was absent")]
    NullReference(&'static str),
}

/// The kind of a [`PreconditionError`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`PreconditionError::Argument`].
    Argument,
    /// See [`PreconditionError::State`].
    State,
    /// See [`PreconditionError::NullReference`].
    NullReference,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorKind::Argument => write!(f, "argument"),
            ErrorKind::State => write!(f, "state"),
            ErrorKind::NullReference => write!(f, "null reference"),
        }
    }
}

impl PreconditionError {
    /// Creates an argument error carrying the display form of `message`.
    pub fn argument<M: fmt::Display>(message: M) -> Self {
        PreconditionError::Argument(Some(message.to_string()))
    }

    /// Creates a state error carrying the display form of `message`.
    pub fn state<M: fmt::Display>(message: M) -> Self {
        PreconditionError::State(Some(message.to_string()))
    }

    /// Creates a null reference error for the parameter called `parameter`.
    pub fn null_reference(parameter: &'static str) -> Self {
        PreconditionError::NullReference(parameter)
    }

    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            PreconditionError::Argument(_) => ErrorKind::Argument,
            PreconditionError::State(_) => ErrorKind::State,
            PreconditionError::NullReference(_) => ErrorKind::NullReference,
        }
    }

    /// Returns the message attached to this error, if there is one.
    ///
    /// Null reference errors never carry a message.
    pub fn message(&self) -> Option<&str> {
        match self {
            PreconditionError::Argument(message) | PreconditionError::State(message) => {
                message.as_deref()
            }
            PreconditionError::NullReference(_) => None,
        }
    }
}

/// Renders the optional message as a suffix of the error description.
fn render_detail(message: &Option<String>) -> String {
    match message {
        Some(message) => format!(": {}", message),
        None => String::new(),
    }
}
