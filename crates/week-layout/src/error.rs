//! Error types for week-layout operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Invalid instant '{value}': {reason}")]
    InvalidInstant { value: String, reason: String },

    #[error("Invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Event '{id}' ends before it starts")]
    InvertedRange { id: String },

    #[error("pixels_per_hour must be a positive finite number, got {0}")]
    InvalidPixelsPerHour(f64),

    #[error("Invalid events JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LayoutError>;
