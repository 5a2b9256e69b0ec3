//! Error types for dotted formatting.
//!
//! Formatting itself is total for every supported category, so errors only
//! arise when a value has no dotted rendering or when the output sink fails.
//!
//! ## Error Categories
//!
//! - **Unsupported Types**: floats, booleans, maps, structs and nested sequences
//! - **Mixed Sequences**: a sequence holding both integers and strings
//! - **I/O Errors**: the sink passed to [`to_writer`](crate::to_writer) rejected a write
//!
//! ## Examples
//!
//! ```rust
//! use serde_ipfmt::{to_string, Error};
//!
//! let result = to_string(&1.5_f64);
//! assert!(matches!(result, Err(Error::UnsupportedType(_))));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur while formatting a value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// IO error while writing to the sink
    #[error("IO error: {0}")]
    Io(String),

    /// The value has no dotted rendering
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    /// A sequence held both integer and string elements
    #[error("Mixed sequence: element {index} is {found}, expected {expected}")]
    MixedSequence {
        index: usize,
        expected: &'static str,
        found: &'static str,
    },

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates an unsupported type error naming the rejected category.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_ipfmt::Error;
    ///
    /// let err = Error::unsupported_type("f64");
    /// assert_eq!(err.to_string(), "Unsupported type: f64");
    /// ```
    pub fn unsupported_type(msg: &str) -> Self {
        Error::UnsupportedType(msg.to_string())
    }

    /// Creates a mixed sequence error for the element at `index`.
    pub fn mixed_sequence(index: usize, expected: &'static str, found: &'static str) -> Self {
        Error::MixedSequence {
            index,
            expected,
            found,
        }
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_ipfmt::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for sink failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::io(&err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_sequence_message() {
        let err = Error::mixed_sequence(2, "integer", "string");
        assert_eq!(
            err.to_string(),
            "Mixed sequence: element 2 is string, expected integer"
        );
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err = Error::from(io);
        assert_eq!(err, Error::Io("pipe closed".to_string()));
    }

    #[test]
    fn test_serde_custom() {
        let err = <Error as serde::ser::Error>::custom("bad value");
        assert_eq!(err.to_string(), "Error: bad value");
    }
}
