//! Full-year holiday enumeration.

use chrono::NaiveDate;
use luach_core::{calendar, CalendarOptions, Location};
use serde::Serialize;

use crate::parse::format_civil_short;

/// One holiday in a year listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HolidaySummary {
    pub name: String,
    /// Short civil date, e.g. "Apr 23".
    pub date: String,
    pub hebrew_date: String,
    pub category: String,
}

/// A year's holidays in chronological order; provider failures land in
/// `error` rather than propagating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse {
    pub year: i32,
    pub total_holidays: usize,
    pub holidays: Vec<HolidaySummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Enumerate every holiday of a civil year.
///
/// Uses the plain holiday stream (no timed events) and sorts by the
/// event's actual civil date; the short "Apr 23" form is display only.
pub fn list_holidays(year: i32, location: &Location) -> ListResponse {
    let events = match calendar(year, &CalendarOptions::default(), location) {
        Ok(events) => events,
        Err(err) => {
            return ListResponse {
                year,
                total_holidays: 0,
                holidays: Vec::new(),
                error: Some(err.to_string()),
            }
        }
    };

    let mut dated: Vec<(NaiveDate, HolidaySummary)> = events
        .iter()
        .map(|e| {
            (
                e.civil,
                HolidaySummary {
                    name: e.name.clone(),
                    date: format_civil_short(e.civil),
                    hebrew_date: e.hebrew.render(),
                    category: e.category_string(),
                },
            )
        })
        .collect();
    dated.sort_by_key(|(date, _)| *date);

    let holidays: Vec<HolidaySummary> = dated.into_iter().map(|(_, summary)| summary).collect();
    ListResponse {
        year,
        total_holidays: holidays.len(),
        holidays,
        error: None,
    }
}
