//! Error taxonomy shared by every conversion engine
//!
//! All variants are serializable so a UI layer can render them directly.

use thiserror::Error;
use serde::Serialize;

#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum AppError {
    /// Unit id or name not present in the category's table
    #[error("Unknown unit: {0}")]
    UnknownUnit(String),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Both units exist but belong to different categories
    #[error("Incompatible units: {0}")]
    IncompatibleUnits(String),

    /// Date/time text that does not parse to a valid instant
    #[error("Invalid datetime: {0}")]
    InvalidDatetime(String),

    /// Non-finite or otherwise unusable numeric input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Serialization Error: {0}")]
    Serialization(String),
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
