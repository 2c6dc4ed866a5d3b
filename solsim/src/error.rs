//! Error types for the simulation core
//!
//! Zero inter-body distance is not represented here: the force loop skips
//! such pairs instead of failing.

use thiserror::Error;

/// Result alias used throughout the library
pub type SimResult<T> = Result<T, SimError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    /// Malformed initial-condition table or parameters, fatal at startup
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Caller-supplied input rejected before any state was touched
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl SimError {
    pub fn configuration(message: impl Into<String>) -> Self {
        SimError::Configuration(message.into())
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        SimError::InvalidRequest(message.into())
    }
}
