//! Validation errors
//!
//! Both variants are local boundary-validation failures surfaced directly to
//! the caller; there is no transient failure mode and nothing to retry.

use std::fmt;

/// Errors produced by wheel construction and winner resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WheelError {
    /// Malformed segment/prize/palette counts or tuning values
    InvalidConfig(String),
    /// Non-finite angle or velocity input
    InvalidInput(String),
}

impl fmt::Display for WheelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WheelError::InvalidConfig(msg) => write!(f, "invalid wheel config: {msg}"),
            WheelError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

impl std::error::Error for WheelError {}
