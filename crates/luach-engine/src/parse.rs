//! Input parsing and date formatting shared by the query modules.
//!
//! Hebrew date strings arrive from an LLM harness, so the parser accepts
//! the two shapes users actually type -- numeric `15/1/5784` and textual
//! `"15th of Nissan 5784"` -- and nothing else. Parsing only extracts a
//! day/month/year triple; range validation happens against the calendar
//! when the date is constructed.

use std::sync::OnceLock;

use chrono::NaiveDate;
use luach_core::HebrewMonth;
use regex::Regex;

/// A day/month/year triple recognized in a Hebrew date string, prior to
/// calendar validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HebrewDateParts {
    pub day: u32,
    pub month: HebrewMonth,
    pub year: i64,
}

/// Parse a Hebrew date string in either accepted shape, or `None`.
///
/// Numeric dates are `day/month/year` with slash or dash delimiters and
/// month 1 = Nissan. Textual dates are `"<day> <month name> <year>"` with
/// an optional ordinal suffix on the day and an optional "of", matched
/// case-insensitively against the usual English month transliterations.
/// A trailing `1` or `2` on the month is read as part of its name, so
/// "Adar 1" and "Adar 2" resolve like "Adar I" and "Adar II".
///
/// # Examples
/// ```
/// use luach_core::HebrewMonth;
/// use luach_engine::parse::parse_hebrew_date;
///
/// let parts = parse_hebrew_date("15th of Nissan 5784").unwrap();
/// assert_eq!(parts.day, 15);
/// assert_eq!(parts.month, HebrewMonth::Nissan);
/// assert_eq!(parts.year, 5784);
/// assert!(parse_hebrew_date("next Tuesday").is_none());
/// ```
pub fn parse_hebrew_date(input: &str) -> Option<HebrewDateParts> {
    static NUMERIC: OnceLock<Regex> = OnceLock::new();
    static TEXTUAL: OnceLock<Regex> = OnceLock::new();

    let numeric = NUMERIC.get_or_init(|| {
        Regex::new(r"^\s*(\d{1,2})[/-](\d{1,2})[/-](\d{1,5})\s*$")
            .expect("Invalid numeric date regex")
    });
    if let Some(caps) = numeric.captures(input) {
        return Some(HebrewDateParts {
            day: caps[1].parse().ok()?,
            month: HebrewMonth::from_number(caps[2].parse().ok()?).ok()?,
            year: caps[3].parse().ok()?,
        });
    }

    let textual = TEXTUAL.get_or_init(|| {
        // The `[12]` month suffix is matched lazily; "adar 15784" still
        // reads as plain Adar with a five-digit year.
        Regex::new(
            r"(?i)^\s*(\d{1,2})(?:st|nd|rd|th)?\s+(?:of\s+)?([a-z' ]+?(?:\s+[12])??)\s*(\d{1,5})\s*$",
        )
        .expect("Invalid textual date regex")
    });
    let caps = textual.captures(input)?;
    Some(HebrewDateParts {
        day: caps[1].parse().ok()?,
        month: HebrewMonth::from_name(caps[2].trim())?,
        year: caps[3].parse().ok()?,
    })
}

/// Format a civil date like "Thursday, October 3, 2024".
pub fn format_civil_full(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// Format a civil date like "Oct 3".
pub fn format_civil_short(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}
