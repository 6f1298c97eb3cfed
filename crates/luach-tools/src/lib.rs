//! Tool adapter for the calendar query engine.
//!
//! Exposes the engine to an LLM tool-calling harness as four named tools:
//! `todaysDate`, `convertDate`, `findJewishHoliday`, and `listJewishHolidays`.
//! Arguments and results cross the boundary as `serde_json::Value`; the
//! parameter structs below do the validation and `schemars` generates the
//! input schema each tool advertises in the catalog.
//!
//! Failures the harness should reason about (unknown tool name, malformed
//! arguments, a date that does not convert) come back as
//! `{"success": false, "error": ...}` values rather than panics, so the model
//! can read the message and decide on another call.

use chrono::{SecondsFormat, Utc};
use luach_core::Location;
use luach_engine::{convert_date, find_holiday, list_holidays, CalendarKind};
use schemars::{schema_for, JsonSchema};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

// ---------------------------------------------------------------------------
// Tool parameter structs (serde validation + schemars descriptions)
// ---------------------------------------------------------------------------

/// Which calendar an input date is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum CalendarParam {
    Gregorian,
    Hebrew,
}

impl From<CalendarParam> for CalendarKind {
    fn from(param: CalendarParam) -> Self {
        match param {
            CalendarParam::Gregorian => CalendarKind::Gregorian,
            CalendarParam::Hebrew => CalendarKind::Hebrew,
        }
    }
}

/// Arguments for `convertDate`.
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConvertDateParams {
    /// Date to convert: ISO `YYYY-MM-DD` for Gregorian input; `day/month/year`
    /// numerals or free text like "15 Nissan 5784" for Hebrew input.
    pub input_date: String,
    /// Calendar the input date is expressed in.
    pub from_calendar: CalendarParam,
}

/// Arguments for `findJewishHoliday`.
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FindJewishHolidayParams {
    /// Civil (Gregorian) year to search.
    pub year: i32,
    /// Holiday name or fragment; matched case-insensitively as a substring
    /// in either direction.
    pub holiday_name: String,
}

/// Arguments for `listJewishHolidays`.
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListJewishHolidaysParams {
    /// Civil (Gregorian) year to enumerate.
    pub year: i32,
}

// ---------------------------------------------------------------------------
// Tool catalog
// ---------------------------------------------------------------------------

/// One entry in the catalog handed to the harness: the name the model calls,
/// a description for the model to pick tools by, and the JSON Schema of the
/// argument object.
#[derive(Debug, Clone, Serialize)]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: Value,
}

/// The full tool catalog, in the shape LLM function-calling APIs consume.
pub fn descriptors() -> Vec<ToolDescriptor> {
    vec![
        ToolDescriptor {
            name: "todaysDate",
            description: "Get the current date and time as an ISO-8601 timestamp",
            input_schema: json!({ "type": "object", "properties": {} }),
        },
        ToolDescriptor {
            name: "convertDate",
            description: "Convert a date between the Gregorian and Hebrew calendars, \
                          with season, weekly Torah portion, and leap year details",
            input_schema: schema_value::<ConvertDateParams>(),
        },
        ToolDescriptor {
            name: "findJewishHoliday",
            description: "Find a Jewish holiday by name in a civil year, including \
                          nearby candle lighting and havdalah times",
            input_schema: schema_value::<FindJewishHolidayParams>(),
        },
        ToolDescriptor {
            name: "listJewishHolidays",
            description: "List all Jewish holidays in a civil year in chronological order",
            input_schema: schema_value::<ListJewishHolidaysParams>(),
        },
    ]
}

fn schema_value<T: JsonSchema>() -> Value {
    schema_for!(T).into()
}

// ---------------------------------------------------------------------------
// Helpers: argument validation and failure values
// ---------------------------------------------------------------------------

/// Deserialize the argument object into a parameter struct, or produce the
/// `{"success": false, ...}` value the harness gets back.
fn parse_args<T: DeserializeOwned>(name: &str, arguments: &Value) -> Result<T, Value> {
    serde_json::from_value(arguments.clone()).map_err(|err| {
        tracing::warn!("rejected arguments for {}: {}", name, err);
        failure(format!("invalid arguments for {}: {}", name, err))
    })
}

fn failure(message: String) -> Value {
    json!({ "success": false, "error": message })
}

fn to_json<T: Serialize>(value: &T) -> Value {
    match serde_json::to_value(value) {
        Ok(json) => json,
        Err(err) => failure(format!("serialization error: {}", err)),
    }
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

/// Current date and time as an RFC 3339 UTC timestamp, e.g.
/// "2024-10-03T14:30:00Z". The output feeds straight into `convertDate`.
pub fn todays_date() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Invoke a tool by name using the default location for candle lighting and
/// havdalah times.
///
/// # Examples
/// ```
/// use serde_json::json;
///
/// let result = luach_tools::dispatch(
///     "convertDate",
///     &json!({ "inputDate": "2024-10-03", "fromCalendar": "gregorian" }),
/// );
/// assert_eq!(result["hebrewDate"]["hebrewYear"], 5785);
/// assert_eq!(result["hebrewDate"]["display"], "1 Tishrei 5785");
/// ```
pub fn dispatch(name: &str, arguments: &Value) -> Value {
    dispatch_with_location(name, arguments, &Location::default())
}

/// Invoke a tool by name with an explicit location.
///
/// # Arguments
/// - `name` -- tool name from the catalog (e.g., "findJewishHoliday")
/// - `arguments` -- the argument object supplied by the harness
/// - `location` -- reference point for candle lighting and havdalah times
///
/// Unknown names and arguments that fail validation produce a
/// `{"success": false, "error": ...}` value; this function never panics.
pub fn dispatch_with_location(name: &str, arguments: &Value, location: &Location) -> Value {
    tracing::debug!("tool call: {} {}", name, arguments);
    match name {
        "todaysDate" => Value::String(todays_date()),
        "convertDate" => match parse_args::<ConvertDateParams>(name, arguments) {
            Ok(params) => match convert_date(&params.input_date, params.from_calendar.into()) {
                Ok(result) => to_json(&result),
                Err(err) => failure(err.to_string()),
            },
            Err(rejection) => rejection,
        },
        "findJewishHoliday" => match parse_args::<FindJewishHolidayParams>(name, arguments) {
            Ok(params) => to_json(&find_holiday(params.year, &params.holiday_name, location)),
            Err(rejection) => rejection,
        },
        "listJewishHolidays" => match parse_args::<ListJewishHolidaysParams>(name, arguments) {
            Ok(params) => to_json(&list_holidays(params.year, location)),
            Err(rejection) => rejection,
        },
        other => {
            tracing::warn!("unknown tool requested: {}", other);
            failure(format!("unknown tool: {}", other))
        }
    }
}
