//! Error types for siftmap.

use alloc::string::String;
use core::fmt;

/// Result type alias for siftmap operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors raised by the dynamically-checked filter-map entry points.
///
/// The typed API never produces these itself: callables are checked by the
/// compiler there, and callback failures come back as the caller's own error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A callback argument is not invocable.
    InvalidArgument {
        message: String,
    },
    /// An error raised from inside a callback body.
    Thrown {
        message: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument { message } => write!(f, "{}", message),
            Error::Thrown { message } => write!(f, "{}", message),
        }
    }
}

impl Error {
    /// Creates the error for a value that cannot be called.
    ///
    /// `value` is the host rendering of the offending argument.
    pub fn not_a_function(value: impl fmt::Display) -> Self {
        Error::InvalidArgument {
            message: alloc::format!("{} is not a function", value),
        }
    }

    /// Creates an error raised by a callback.
    pub fn thrown(message: impl Into<String>) -> Self {
        Error::Thrown {
            message: message.into(),
        }
    }

    /// Returns the human-readable message.
    pub fn message(&self) -> &str {
        match self {
            Error::InvalidArgument { message } | Error::Thrown { message } => message,
        }
    }

    /// Returns true for argument validation failures.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument { .. })
    }
}
