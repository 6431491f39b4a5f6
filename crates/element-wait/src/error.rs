// Error types for element-wait

use crate::protocol::Locator;
use thiserror::Error;

/// Result type alias for element-wait operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when waiting for or acting on elements
#[derive(Debug, Error)]
pub enum Error {
    /// Element not found within the poll budget
    ///
    /// Raised only by the "hard" operations (`assert`, `click`). Carries the name of the
    /// operation and the locator that was sought so the failure can be attributed.
    /// The `wait` operations never produce this error; they return `None` instead.
    #[error("{operation}: Could not find {locator}")]
    ElementNotFound {
        operation: &'static str,
        locator: Locator,
    },

    /// Target was closed (page or session)
    ///
    /// Reported by page backends when the session a lookup or click runs against
    /// has gone away. Passed through untouched.
    #[error("Target closed: Cannot perform operation on closed {target_type}. {context}")]
    TargetClosed {
        target_type: String,
        context: String,
    },

    /// Invalid argument provided to method
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Error raised by a page backend
    #[error(transparent)]
    Driver(Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    /// Wraps an arbitrary backend error.
    pub fn driver<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Error::Driver(Box::new(err))
    }

    /// Returns the locator that could not be found, if this is an `ElementNotFound` error.
    pub fn missing_locator(&self) -> Option<&Locator> {
        match self {
            Error::ElementNotFound { locator, .. } => Some(locator),
            _ => None,
        }
    }
}
