//! Error types for workdays-rs.
//!
//! Every fallible operation in the workspace returns the single
//! `thiserror`-derived [`Error`] enum defined here.  Rejecting a holiday that
//! falls on a weekend day is *not* an error; it is reported through a boolean
//! return value instead.

use thiserror::Error;

/// The top-level error type used throughout workdays-rs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Malformed date-array input: missing brackets, an unparseable date
    /// literal, or a stream that ends inside the array.
    #[error("syntax error: {0}")]
    Syntax(String),

    /// `read` was called again after the closing bracket had been consumed.
    #[error("attempt to read past the end of the date array")]
    ReadPastEnd,

    /// `write` or `commit` was called after the array had been committed.
    #[error("attempt to write after the date array was committed")]
    WriteAfterCommit,

    /// A date range whose start lies after its end.
    #[error("invalid range: start date {start} is after end date {end}")]
    InvalidRange {
        /// The start of the rejected range.
        start: String,
        /// The end of the rejected range.
        end: String,
    },

    /// A date source reported malformed underlying data.
    #[error("date source error: {0}")]
    Source(String),

    /// Date construction or arithmetic out of range.
    #[error("date error: {0}")]
    Date(String),

    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Failure of the underlying byte stream.
    #[error("i/o error: {0}")]
    Io(String),
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e.to_string())
    }
}

/// Shorthand `Result` type used throughout workdays-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use wd_core::{ensure, errors::Error};
/// fn positive(x: i32) -> wd_core::errors::Result<i32> {
///     ensure!(x > 0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1).is_ok());
/// assert_eq!(
///     positive(-1),
///     Err(Error::Precondition("x must be positive, got -1".into()))
/// );
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn syntax_message() {
        let err = Error::Syntax("expected array start".into());
        assert_eq!(err.to_string(), "syntax error: expected array start");
    }

    #[test]
    fn invalid_range_message() {
        let err = Error::InvalidRange {
            start: "2024-01-10".into(),
            end: "2024-01-01".into(),
        };
        assert_eq!(
            err.to_string(),
            "invalid range: start date 2024-01-10 is after end date 2024-01-01"
        );
    }

    #[test]
    fn io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "stream closed");
        let err: Error = io.into();
        assert_eq!(err, Error::Io("stream closed".into()));
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<Error>();
    }
}
