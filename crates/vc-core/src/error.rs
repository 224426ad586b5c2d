//! Core error type.
//!
//! Everything here is raised while loading or validating configuration.
//! Nothing in the evaluation path returns a `CoreError`.

use thiserror::Error;

use crate::ZoneId;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("zone {zone}: {field} must be between 0 and {max}, got {value}", max = u32::MAX)]
    InvalidDistance {
        zone:  ZoneId,
        field: &'static str,
        value: i64,
    },

    #[error("{field} must be > 0, got {value}")]
    NonPositive {
        field: &'static str,
        value: i64,
    },

    #[error("{field} must be at most {max}, got {value}")]
    TooLarge {
        field: &'static str,
        value: u64,
        max:   u64,
    },

    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for `vc-core`.
pub type CoreResult<T> = Result<T, CoreError>;
