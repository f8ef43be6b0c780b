//! Unified error types for Browser-Steps

use std::fmt;
use thiserror::Error;

use crate::session::SelectorKind;

/// Unified Result type
pub type Result<T> = std::result::Result<T, Error>;

/// Bound an element count was checked against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpectedCount {
    /// Inclusive lower bound
    AtLeast(usize),
    /// Exact count
    Exactly(usize),
}

impl fmt::Display for ExpectedCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpectedCount::AtLeast(n) => write!(f, "at least {}", n),
            ExpectedCount::Exactly(n) => write!(f, "find {}", n),
        }
    }
}

/// Unified error type for Browser-Steps
#[derive(Error, Debug)]
pub enum Error {
    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// No element matched a selector that required at least one
    #[error("Element matching {kind} \"{selector}\" not found.")]
    ElementNotFound { kind: SelectorKind, selector: String },

    /// Selector matched a number of elements outside the requested bound
    #[error("{found} \"{selector}\" found on the page, but should {expected}.")]
    CountMismatch {
        found: usize,
        selector: String,
        expected: ExpectedCount,
    },

    /// Client-side library injection failed
    #[error("Can not load jQuery")]
    ScriptInjection,

    /// Assertion failure raised by the web assertion façade
    #[error("{0}")]
    Assertion(String),

    /// No step definition matches the given text
    #[error("Undefined step: {0}")]
    UndefinedStep(String),

    /// Driver errors
    #[error("Driver error: {0}")]
    Driver(String),

    /// Timeout
    #[error("Operation timeout: {0}")]
    Timeout(String),

    /// Navigation failed
    #[error("Navigation failed: {0}")]
    NavigationFailed(String),

    /// Script execution failed
    #[error("Script execution failed: {0}")]
    ScriptExecutionFailed(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl Error {
    /// Create a new element not found error
    pub fn element_not_found<S: Into<String>>(kind: SelectorKind, selector: S) -> Self {
        Error::ElementNotFound {
            kind,
            selector: selector.into(),
        }
    }

    /// Create a new count mismatch error
    pub fn count_mismatch<S: Into<String>>(found: usize, selector: S, expected: ExpectedCount) -> Self {
        Error::CountMismatch {
            found,
            selector: selector.into(),
            expected,
        }
    }

    /// Create a new assertion error
    pub fn assertion<S: Into<String>>(msg: S) -> Self {
        Error::Assertion(msg.into())
    }

    /// Create a new driver error
    pub fn driver<S: Into<String>>(msg: S) -> Self {
        Error::Driver(msg.into())
    }

    /// Create a new timeout error
    pub fn timeout<S: Into<String>>(msg: S) -> Self {
        Error::Timeout(msg.into())
    }

    /// Create a new navigation failed error
    pub fn navigation_failed<S: Into<String>>(msg: S) -> Self {
        Error::NavigationFailed(msg.into())
    }

    /// Create a new script execution failed error
    pub fn script_execution_failed<S: Into<String>>(msg: S) -> Self {
        Error::ScriptExecutionFailed(msg.into())
    }

    /// Create a new configuration error
    pub fn configuration<S: Into<String>>(msg: S) -> Self {
        Error::Configuration(msg.into())
    }

    /// Whether this error means nothing matched a selector
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::ElementNotFound { .. })
    }
}

impl From<::config::ConfigError> for Error {
    fn from(err: ::config::ConfigError) -> Self {
        Error::Configuration(err.to_string())
    }
}
