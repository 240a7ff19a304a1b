//! Error types for arena setup.

use thiserror::Error;

/// Errors that can occur while configuring or laying out the arena.
#[derive(Error, Debug)]
pub enum ArenaError {
    /// Floor shape parameters violate the layout preconditions.
    #[error("invalid shape configuration: {0}")]
    InvalidShapeConfiguration(String),

    /// Some other arena setting is out of range.
    #[error("invalid config field `{field}`: {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    /// Config file could not be read.
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid JSON for an arena config.
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ArenaError {
    pub(crate) fn invalid_shape(reason: impl Into<String>) -> Self {
        ArenaError::InvalidShapeConfiguration(reason.into())
    }

    pub(crate) fn invalid_config(field: &'static str, reason: impl Into<String>) -> Self {
        ArenaError::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }
}

/// Result type for arena operations.
pub type Result<T> = std::result::Result<T, ArenaError>;
