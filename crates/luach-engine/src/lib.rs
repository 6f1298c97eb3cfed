//! # luach-engine
//!
//! Query engine over [`luach_core`] for answering natural-language calendar
//! questions. Three operations cover what a conversational harness asks:
//!
//! - [`convert_date`] -- Gregorian/Hebrew conversion with derived metadata
//!   (season, weekly Torah reading, leap year, Rosh Chodesh).
//! - [`find_holiday`] -- fuzzy name search across a civil year, with the
//!   candle lighting and havdalah times adjacent to each match.
//! - [`list_holidays`] -- chronological listing of a whole civil year.
//!
//! The engine is stateless: every call is a pure function of its arguments.
//! Expected negative outcomes (no match, unparseable input, provider
//! rejection) come back as data in the response types, so a tool-calling
//! harness can reason about them and try another query instead of handling
//! faults.

pub mod convert;
pub mod error;
pub mod finder;
pub mod lister;
pub mod parse;

pub use convert::{convert_date, AdditionalInfo, CalendarKind, ConversionResult, HebrewDateInfo};
pub use error::{EngineError, Result};
pub use finder::{find_holiday, FindResponse, HolidayMatch, ZmanEntry};
pub use lister::{list_holidays, HolidaySummary, ListResponse};
