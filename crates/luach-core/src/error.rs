//! Error types for luach-core operations.

use thiserror::Error;

/// Errors that can occur while constructing or converting calendar dates.
#[derive(Error, Debug)]
pub enum CalendarError {
    /// A Hebrew date that does not exist (month outside 1..=13, Adar II in
    /// a non-leap year, day beyond the month's length).
    /// Includes a rendering of the offending date.
    #[error("Invalid Hebrew date: {0}")]
    InvalidHebrewDate(String),

    /// A civil date that could not be constructed.
    #[error("Invalid civil date: {0}")]
    InvalidCivilDate(String),

    /// A year or day number outside the supported conversion range.
    #[error("Year out of supported range: {0}")]
    YearOutOfRange(i64),
}

/// Convenience alias used throughout luach-core.
pub type Result<T> = std::result::Result<T, CalendarError>;
