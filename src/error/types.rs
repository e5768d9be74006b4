//! Custom error types with exit codes

use thiserror::Error;

/// Main error type for newsdesk operations
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum NewsError {
    /// Validation Error - a record or selection failed validation
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// Storage Error - reading or writing article or index files failed
    #[error("Storage error: {message}")]
    Storage { message: String },

    /// Input Error - the terminal could not be read from or written to
    #[error("Input error: {message}")]
    Input { message: String },

    /// Input Closed - standard input reached end of file
    #[error("Input closed")]
    InputClosed,
}

impl NewsError {
    /// Get the appropriate exit code for this error type
    #[must_use]
    #[inline]
    pub const fn exit_code(&self) -> i32 {
        match *self {
            Self::Validation { .. } => 1,
            Self::Storage { .. } => 2,
            Self::Input { .. } => 3,
            Self::InputClosed => 0,
        }
    }

    /// Create a validation error
    #[inline]
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a storage error
    #[inline]
    pub fn storage<S: Into<String>>(message: S) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    /// Create an input error
    #[inline]
    pub fn input<S: Into<String>>(message: S) -> Self {
        Self::Input {
            message: message.into(),
        }
    }

    /// Whether this error means the user is gone and the session should end
    #[must_use]
    #[inline]
    pub const fn is_input_closed(&self) -> bool {
        matches!(*self, Self::InputClosed)
    }
}

/// Whether `err` is, or wraps, [`NewsError::InputClosed`]
#[must_use]
#[inline]
pub fn is_input_closed(err: &anyhow::Error) -> bool {
    err.downcast_ref::<NewsError>()
        .is_some_and(NewsError::is_input_closed)
}

/// Exit code for an error escaping the menu
#[must_use]
#[inline]
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<NewsError>()
        .map_or(1, NewsError::exit_code)
}
