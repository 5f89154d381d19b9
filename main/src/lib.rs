//! Fail-fast checks of preconditions, and contracts for collections.
//!
//! Checks evaluate a boolean expression and return an error describing what went wrong if it is
//! false:
//!
//! ```rust
//! use alloy::preconditions::{check_argument_message, check_state};
//!
//! struct Buffer {
//!     open: bool,
//!     data: Vec<u8>,
//! }
//!
//! impl Buffer {
//!     fn byte(&self, index: usize) -> alloy::Result<u8> {
//!         check_state(self.open)?;
//!         check_argument_message(index < self.data.len(), Some("index out of bounds"))?;
//!
//!         Ok(self.data[index])
//!     }
//! }
//!
//! let buffer = Buffer { open: true, data: vec![1, 2, 3] };
//! assert_eq!(buffer.byte(1), Ok(2));
//! assert_eq!(
//!     buffer.byte(3).unwrap_err().to_string(),
//!     "illegal argument: index out of bounds"
//! );
//! ```
//!
//! Errors distinguish arguments the caller got wrong ([`PreconditionError::Argument`]) from an
//! invalid state of the callee ([`PreconditionError::State`]).
//!
//! # Macros
//!
//! With the default `macros` feature, [`check_argument!`] and [`check_state!`] accept a format
//! string that is only formatted if the check fails, and [`requires`] declares the checks of a
//! function next to its signature.

cfg_if::cfg_if! {
    if #[cfg(feature = "macros")] {
        /// Checks that an expression about the arguments of the calling function holds.
        ///
        /// The macro evaluates to an [`alloy::Result<()>`](crate::Result):
        ///
        /// ```rust
        /// use alloy::check_argument;
        ///
        /// fn split_at(text: &str, at: usize) -> alloy::Result<(&str, &str)> {
        ///     check_argument!(at <= text.len(), "{} is past the end of {:?}", at, text)?;
        ///
        ///     Ok(text.split_at(at))
        /// }
        ///
        /// assert_eq!(split_at("abc", 1), Ok(("a", "bc")));
        /// assert_eq!(
        ///     split_at("abc", 4).unwrap_err().message(),
        ///     Some("4 is past the end of \"abc\"")
        /// );
        /// ```
        ///
        /// A string literal message is treated as a format string and only formatted if the
        /// check fails. Any other message expression is evaluated eagerly and converted with its
        /// `Display` implementation.
        pub use alloy_proc_macro::check_argument;

        /// Checks that an expression about the state of the calling instance holds.
        ///
        /// This accepts the same forms as [`check_argument!`], but fails with
        /// [`PreconditionError::State`].
        pub use alloy_proc_macro::check_state;

        /// Declares the preconditions of a function and checks them when it is called.
        ///
        /// ```rust
        /// use alloy::requires;
        ///
        /// struct Queue {
        ///     items: Vec<u32>,
        ///     closed: bool,
        /// }
        ///
        /// impl Queue {
        ///     #[requires(state(!self.closed, "queue is closed"))]
        ///     #[requires(argument(count <= self.items.len(), "only {} items", self.items.len()))]
        ///     fn take(&mut self, count: usize) -> alloy::Result<Vec<u32>> {
        ///         Ok(self.items.drain(..count).collect())
        ///     }
        /// }
        ///
        /// let mut queue = Queue { items: vec![1, 2, 3], closed: false };
        /// assert_eq!(queue.take(2), Ok(vec![1, 2]));
        /// assert_eq!(queue.take(2).unwrap_err().message(), Some("only 1 items"));
        /// ```
        ///
        /// The checks are inserted at the start of the function body in the order they were
        /// declared and are propagated with `?`, so the error type of the function must implement
        /// `From<PreconditionError>`.
        ///
        /// Unless `no_doc` is given (`#[requires(no_doc)]`), a `Preconditions` section listing
        /// the checks is added to the documentation of the function.
        pub use alloy_proc_macro::requires;
    }
}

pub mod collections;
mod error;
pub mod preconditions;

pub use crate::error::{ErrorKind, PreconditionError, Result, NULL_MESSAGE};
