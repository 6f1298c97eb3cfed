//! Error types for the query engine.

use luach_core::CalendarError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid civil date: {0}")]
    InvalidCivilDate(String),

    #[error("Invalid Hebrew date: {0}")]
    InvalidHebrewDate(String),

    #[error("Calendar provider error: {0}")]
    Provider(#[from] CalendarError),
}

pub type Result<T> = std::result::Result<T, EngineError>;
