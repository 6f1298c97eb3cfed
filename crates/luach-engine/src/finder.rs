//! Fuzzy holiday lookup with related zmanim aggregation.
//!
//! Holiday names arrive from an LLM harness in whatever form the user
//! typed, so matching is a deliberately loose case-insensitive substring
//! test in both directions: "Rosh Hashana" matches "Rosh Hashana 5785",
//! and "Erev Rosh Hashana tonight" matches "Erev Rosh Hashana". Candle
//! lighting and havdalah are separate events from the holiday itself, so
//! every search also gathers the timed events within two days of a match.
//!
//! Every outcome -- matches, no matches, provider failure -- is reported
//! as data in the response, never as an error the caller must catch.

use luach_core::zmanim::format_time_12h;
use luach_core::{calendar, CalendarOptions, Event, EventCategory, Location};
use serde::Serialize;

use crate::parse::format_civil_full;

/// One matched calendar event with its derived classification.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HolidayMatch {
    pub name: String,
    /// Full civil date, e.g. "Tuesday, April 23, 2024".
    pub date: String,
    pub hebrew_date: String,
    pub hebrew_year: i64,
    /// Category tags joined for display, e.g. "holiday, major".
    pub category: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
    pub event_type: &'static str,
    pub is_holiday: bool,
    pub is_major_holiday: bool,
    pub is_minor_holiday: bool,
    pub is_fast: bool,
    pub is_modern_holiday: bool,
    pub is_rosh_chodesh: bool,
    pub is_candle_lighting: bool,
    pub is_havdalah: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candle_lighting_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub havdalah_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub havdalah_mins: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fast_begins_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fast_ends_time: Option<String>,
    pub location: Location,
}

/// A timed event (candles, havdalah, fast boundary) near a matched holiday.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZmanEntry {
    pub name: String,
    pub date: String,
    pub hebrew_date: String,
    pub description: String,
    pub event_type: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candle_lighting_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub havdalah_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub havdalah_mins: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fast_begins_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fast_ends_time: Option<String>,
}

/// Outcome of a holiday search. `found: false` with a message is the
/// normal no-match case; `error` carries provider failures.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FindResponse {
    pub found: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub holidays: Vec<HolidayMatch>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub related_zmanim: Vec<ZmanEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FindResponse {
    fn not_found(message: String) -> Self {
        Self {
            found: false,
            holidays: Vec::new(),
            related_zmanim: Vec::new(),
            message: Some(message),
            error: None,
        }
    }

    fn failure(error: String) -> Self {
        Self {
            found: false,
            holidays: Vec::new(),
            related_zmanim: Vec::new(),
            message: None,
            error: Some(error),
        }
    }
}

/// Search a civil year for holidays matching `name`.
///
/// Runs the full enriched calendar for `year` at `location`, matches
/// event descriptions against `name`, and pairs the matches with every
/// candle lighting, havdalah or fast boundary event dated within two
/// days of any match. No match is a normal outcome reported with a
/// guidance message; provider failures land in the `error` field.
pub fn find_holiday(year: i32, name: &str, location: &Location) -> FindResponse {
    let needle = name.trim().to_lowercase();
    if needle.is_empty() {
        return FindResponse::not_found(format!(
            "No holiday name given. Try listJewishHolidays to see all holidays for {}.",
            year
        ));
    }

    let events = match calendar(year, &CalendarOptions::enriched(), location) {
        Ok(events) => events,
        Err(err) => return FindResponse::failure(err.to_string()),
    };

    let matched: Vec<&Event> = events
        .iter()
        .filter(|e| {
            let hay = e.description.to_lowercase();
            hay.contains(&needle) || needle.contains(&hay)
        })
        .collect();

    if matched.is_empty() {
        return FindResponse::not_found(format!(
            "No holiday found matching '{}' in {}. Try listJewishHolidays to see all holidays for that year.",
            name.trim(),
            year
        ));
    }

    let matched_days: Vec<i64> = matched.iter().map(|e| e.rd()).collect();
    let related_zmanim: Vec<ZmanEntry> = events
        .iter()
        .filter(|e| {
            e.has_category(EventCategory::Candles)
                || e.has_category(EventCategory::Havdalah)
                || e.has_category(EventCategory::Zmanim)
        })
        .filter(|e| matched_days.iter().any(|d| (e.rd() - d).abs() <= 2))
        .filter(|e| !matched.iter().any(|m| std::ptr::eq(*m, *e)))
        .map(zman_entry)
        .collect();

    FindResponse {
        found: true,
        holidays: matched
            .into_iter()
            .map(|e| holiday_match(e, location))
            .collect(),
        related_zmanim,
        message: None,
        error: None,
    }
}

fn holiday_match(event: &Event, location: &Location) -> HolidayMatch {
    use EventCategory::*;
    let times = extract_times(event);
    HolidayMatch {
        name: event.name.clone(),
        date: format_civil_full(event.civil),
        hebrew_date: event.hebrew.render(),
        hebrew_year: event.hebrew.year(),
        category: event.category_string(),
        description: event.description.clone(),
        url: event.url.clone(),
        memo: event.memo.clone(),
        event_type: classify(event),
        is_holiday: event.has_category(Holiday),
        is_major_holiday: event.has_category(Major),
        is_minor_holiday: event.has_category(Minor),
        is_fast: event.has_category(Fast),
        is_modern_holiday: event.has_category(Modern),
        is_rosh_chodesh: event.has_category(RoshChodesh),
        is_candle_lighting: event.has_category(Candles),
        is_havdalah: event.has_category(Havdalah),
        time: times.time,
        candle_lighting_time: times.candle_lighting_time,
        havdalah_time: times.havdalah_time,
        havdalah_mins: times.havdalah_mins,
        fast_begins_time: times.fast_begins_time,
        fast_ends_time: times.fast_ends_time,
        location: location.clone(),
    }
}

fn zman_entry(event: &Event) -> ZmanEntry {
    let times = extract_times(event);
    ZmanEntry {
        name: event.name.clone(),
        date: format_civil_full(event.civil),
        hebrew_date: event.hebrew.render(),
        description: event.description.clone(),
        event_type: classify(event),
        time: times.time,
        candle_lighting_time: times.candle_lighting_time,
        havdalah_time: times.havdalah_time,
        havdalah_mins: times.havdalah_mins,
        fast_begins_time: times.fast_begins_time,
        fast_ends_time: times.fast_ends_time,
    }
}

/// Coarse event type from category tags. Events without a recognized tag
/// fall back to description sniffing, a heuristic kept for provider events
/// that carry no structured category.
fn classify(event: &Event) -> &'static str {
    use EventCategory::*;
    if event.has_category(Candles) {
        return "candle_lighting";
    }
    if event.has_category(Havdalah) {
        return "havdalah";
    }
    if event.has_category(Holiday)
        || event.has_category(RoshChodesh)
        || event.has_category(Fast)
        || event.has_category(Modern)
    {
        return "holiday";
    }
    if event.description.contains("Candle lighting") {
        "candle_lighting"
    } else if event.description.contains("Havdalah") {
        "havdalah"
    } else {
        "unclassified"
    }
}

#[derive(Default)]
struct EventTimes {
    time: Option<String>,
    candle_lighting_time: Option<String>,
    havdalah_time: Option<String>,
    havdalah_mins: Option<u32>,
    fast_begins_time: Option<String>,
    fast_ends_time: Option<String>,
}

/// Pull the clock time into the field its category tag calls for, with a
/// description fallback. Fast boundaries share the zmanim tag, so begins
/// and ends are told apart by description alone.
fn extract_times(event: &Event) -> EventTimes {
    use EventCategory::*;
    let mut times = EventTimes {
        time: event.time.as_ref().map(format_time_12h),
        ..EventTimes::default()
    };
    if let Some(formatted) = times.time.clone() {
        if event.has_category(Candles) || event.description.contains("Candle lighting") {
            times.candle_lighting_time = Some(formatted);
        } else if event.has_category(Havdalah) || event.description.contains("Havdalah") {
            times.havdalah_time = Some(formatted);
            times.havdalah_mins = event.havdalah_mins;
        } else if event.description.contains("Fast begins") {
            times.fast_begins_time = Some(formatted);
        } else if event.description.contains("Fast ends") {
            times.fast_ends_time = Some(formatted);
        }
    }
    times
}
