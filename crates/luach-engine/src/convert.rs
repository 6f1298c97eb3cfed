//! Bidirectional date conversion with derived calendar metadata.

use chrono::NaiveDate;
use luach_core::hdate::{days_in_month, is_leap_year};
use luach_core::{parashat_for, CalendarError, HebrewDate};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};
use crate::parse;

/// Which calendar an input date string is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarKind {
    Gregorian,
    Hebrew,
}

/// The Hebrew side of a conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HebrewDateInfo {
    pub hebrew_day: u32,
    /// Month number, 1 = Nissan .. 13 = Adar II.
    pub hebrew_month: u32,
    pub month_name: String,
    pub hebrew_year: i64,
    /// Rendered form, e.g. "15 Nissan 5784".
    pub display: String,
}

/// Derived facts reported alongside every conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdditionalInfo {
    pub season: &'static str,
    pub is_leap_year: bool,
    pub days_in_month: u32,
    /// Torah reading of the Sabbath on or after this date, when one is
    /// scheduled (festival Sabbaths have none).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parsha: Option<String>,
    pub is_rosh_chodesh: bool,
    pub day_of_week: String,
    /// Rata Die day number, for day-distance arithmetic downstream.
    pub absolute_day: i64,
}

/// A successful conversion in either direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionResult {
    /// ISO form of the civil date, e.g. "2024-04-23".
    pub gregorian_date: String,
    pub hebrew_date: HebrewDateInfo,
    pub additional_info: AdditionalInfo,
}

/// Convert a date string between calendars.
///
/// Gregorian input is an ISO `YYYY-MM-DD` date (a trailing `T...` timestamp
/// suffix is tolerated, so `todaysDate` output can be fed straight in).
/// Hebrew input takes the two shapes accepted by
/// [`parse::parse_hebrew_date`]. Both directions return the same
/// [`ConversionResult`] record.
///
/// # Errors
/// Returns `EngineError::InvalidCivilDate` or `InvalidHebrewDate` when the
/// input does not parse or does not resolve to a real date, and
/// `EngineError::Provider` if the calendar math rejects an in-range request.
///
/// # Examples
/// ```
/// use luach_engine::convert::{convert_date, CalendarKind};
///
/// let result = convert_date("2024-10-03", CalendarKind::Gregorian)?;
/// assert_eq!(result.hebrew_date.hebrew_year, 5785);
/// assert_eq!(result.hebrew_date.display, "1 Tishrei 5785");
///
/// let back = convert_date("1 Tishrei 5785", CalendarKind::Hebrew)?;
/// assert_eq!(back.gregorian_date, "2024-10-03");
/// # Ok::<(), luach_engine::EngineError>(())
/// ```
pub fn convert_date(input: &str, from: CalendarKind) -> Result<ConversionResult> {
    match from {
        CalendarKind::Gregorian => {
            let civil = parse_civil(input)?;
            let hebrew = HebrewDate::from_civil(civil).map_err(|err| match err {
                CalendarError::YearOutOfRange(_) => EngineError::InvalidCivilDate(format!(
                    "{} is outside the supported Hebrew calendar range",
                    civil
                )),
                other => EngineError::Provider(other),
            })?;
            build_result(civil, hebrew)
        }
        CalendarKind::Hebrew => {
            let parts = parse::parse_hebrew_date(input).ok_or_else(|| {
                EngineError::InvalidHebrewDate(format!(
                    "expected \"day/month/year\" or \"15 Nissan 5784\", got {:?}",
                    input
                ))
            })?;
            let hebrew =
                HebrewDate::new(parts.year, parts.month, parts.day).map_err(|err| match err {
                    CalendarError::InvalidHebrewDate(msg) => EngineError::InvalidHebrewDate(msg),
                    CalendarError::YearOutOfRange(year) => EngineError::InvalidHebrewDate(
                        format!("year {} out of supported range", year),
                    ),
                    other => EngineError::Provider(other),
                })?;
            build_result(hebrew.to_civil(), hebrew)
        }
    }
}

fn parse_civil(input: &str) -> Result<NaiveDate> {
    let s = input.trim();
    let date_part = s.split_once('T').map_or(s, |(date, _)| date);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").map_err(|_| {
        EngineError::InvalidCivilDate(format!("expected an ISO date (YYYY-MM-DD), got {:?}", input))
    })
}

fn build_result(civil: NaiveDate, hebrew: HebrewDate) -> Result<ConversionResult> {
    // Season comes from a fixed month-number table (Nissan = 1), not from
    // the solar date.
    let season = match hebrew.month().number() {
        1..=3 => "Winter",
        4..=6 => "Spring",
        7..=9 => "Summer",
        _ => "Fall",
    };
    let parsha = parashat_for(civil)?;
    Ok(ConversionResult {
        gregorian_date: civil.format("%Y-%m-%d").to_string(),
        hebrew_date: HebrewDateInfo {
            hebrew_day: hebrew.day(),
            hebrew_month: hebrew.month().number(),
            month_name: hebrew.month_name().to_string(),
            hebrew_year: hebrew.year(),
            display: hebrew.render(),
        },
        additional_info: AdditionalInfo {
            season,
            is_leap_year: is_leap_year(hebrew.year()),
            days_in_month: days_in_month(hebrew.month(), hebrew.year()),
            parsha,
            is_rosh_chodesh: hebrew.is_rosh_chodesh(),
            day_of_week: civil.format("%A").to_string(),
            absolute_day: hebrew.to_rd(),
        },
    })
}
