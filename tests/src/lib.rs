//! This crate defines the integration tests for the `alloy` crate.
//!
//! These are defined in a different crate, because otherwise `proc-macro-crate` cannot find the
//! main crate when expanding the macros.

#[cfg(test)]
mod tests {
    use alloy::{
        check_argument, check_state, requires, ErrorKind, PreconditionError, NULL_MESSAGE,
    };
    use std::cell::Cell;

    #[test]
    fn pass() {
        let t = trybuild::TestCases::new();
        t.pass("pass/*.rs");
    }

    #[test]
    fn compile_fail() {
        let t = trybuild::TestCases::new();
        t.compile_fail("compile_fail/*.rs");
    }

    /// Counts how often a message was formatted.
    struct Sentinel {
        calls: Cell<usize>,
    }

    impl Sentinel {
        fn new() -> Sentinel {
            Sentinel {
                calls: Cell::new(0),
            }
        }

        fn format(&self) -> String {
            self.calls.set(self.calls.get() + 1);

            format!("formatted {} times", self.calls.get())
        }
    }

    #[test]
    fn macro_without_message() {
        assert_eq!(check_argument!(2 > 1), Ok(()));
        assert_eq!(
            check_argument!(1 > 2),
            Err(PreconditionError::Argument(None))
        );
        assert_eq!(check_state!(5 == 5), Ok(()));
        assert_eq!(check_state!(5 == 6), Err(PreconditionError::State(None)));
    }

    #[test]
    fn macro_with_literal_message() {
        assert_eq!(
            check_argument!(1 > 2, "bad input"),
            Err(PreconditionError::argument("bad input"))
        );
        assert_eq!(
            check_state!(false, "not started"),
            Err(PreconditionError::state("not started"))
        );
    }

    #[test]
    fn macro_formats_lazily() {
        let sentinel = Sentinel::new();

        assert_eq!(check_argument!(true, "{}", sentinel.format()), Ok(()));
        assert_eq!(check_state!(true, "{}", sentinel.format()), Ok(()));
        assert_eq!(sentinel.calls.get(), 0);

        assert_eq!(
            check_state!(false, "{}", sentinel.format()),
            Err(PreconditionError::state("formatted 1 times"))
        );
        assert_eq!(sentinel.calls.get(), 1);
    }

    #[test]
    fn macro_inline_format_args() {
        let limit = 10;

        assert_eq!(
            check_argument!(limit < 5, "limit {limit} exceeds {max}", max = 5),
            Err(PreconditionError::argument("limit 10 exceeds 5"))
        );
    }

    #[test]
    fn macro_with_value_message() {
        let sentinel = Sentinel::new();

        assert_eq!(check_argument!(true, sentinel.format()), Ok(()));
        assert_eq!(sentinel.calls.get(), 1);

        let message: Option<&str> = None;
        let err = check_state!(false, message.unwrap_or(NULL_MESSAGE)).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::State);
        assert_eq!(err.message(), Some("null"));
    }

    struct Connection {
        open: bool,
        sent: Vec<u8>,
    }

    impl Connection {
        #[requires(state(self.open, "connection is closed"))]
        #[requires(argument(!payload.is_empty()))]
        fn send(&mut self, payload: &[u8]) -> alloy::Result<usize> {
            self.sent.extend_from_slice(payload);

            Ok(payload.len())
        }
    }

    #[test]
    fn requires_checks_in_order() {
        let mut connection = Connection {
            open: true,
            sent: Vec::new(),
        };

        assert_eq!(connection.send(b"abc"), Ok(3));
        assert_eq!(
            connection.send(b""),
            Err(PreconditionError::Argument(None))
        );

        connection.open = false;

        assert_eq!(
            connection.send(b""),
            Err(PreconditionError::state("connection is closed"))
        );
        assert_eq!(connection.sent, b"abc");
    }

    #[requires(argument(divisor != 0, "cannot divide {} by zero", dividend))]
    fn divide(dividend: i64, divisor: i64) -> alloy::Result<i64> {
        Ok(dividend / divisor)
    }

    #[test]
    fn requires_free_function() {
        assert_eq!(divide(9, 3), Ok(3));

        let err = divide(9, 0).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Argument);
        assert_eq!(err.to_string(), "illegal argument: cannot divide 9 by zero");
    }
}
