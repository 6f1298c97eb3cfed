//! Tests for the tool catalog and the dispatch boundary.

use chrono::DateTime;
use chrono_tz::Tz;
use luach_core::Location;
use luach_tools::{descriptors, dispatch, dispatch_with_location, todays_date};
use serde_json::{json, Value};

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

#[test]
fn catalog_lists_all_four_tools() {
    let tools = descriptors();
    let names: Vec<&str> = tools.iter().map(|t| t.name).collect();
    assert_eq!(
        names,
        vec![
            "todaysDate",
            "convertDate",
            "findJewishHoliday",
            "listJewishHolidays"
        ]
    );
    assert!(tools.iter().all(|t| !t.description.is_empty()));
}

#[test]
fn schemas_declare_camel_case_properties() {
    let tools = descriptors();
    let by_name = |name: &str| -> &Value {
        &tools.iter().find(|t| t.name == name).unwrap().input_schema
    };

    let convert = by_name("convertDate");
    assert!(convert["properties"]["inputDate"].is_object());
    assert!(convert["properties"]["fromCalendar"].is_object());

    let find = by_name("findJewishHoliday");
    assert!(find["properties"]["year"].is_object());
    assert!(find["properties"]["holidayName"].is_object());

    let list = by_name("listJewishHolidays");
    assert!(list["properties"]["year"].is_object());
    let required = list["required"].as_array().unwrap();
    assert!(required.iter().any(|v| v == "year"));
}

#[test]
fn todays_date_schema_takes_no_arguments() {
    let tools = descriptors();
    let probe = tools.iter().find(|t| t.name == "todaysDate").unwrap();
    let props = probe.input_schema["properties"].as_object().unwrap();
    assert!(props.is_empty());
}

#[test]
fn descriptors_serialize_for_the_harness() {
    let tools = descriptors();
    let catalog = serde_json::to_value(&tools).unwrap();
    assert_eq!(catalog[1]["name"], "convertDate");
    assert!(catalog[1]["input_schema"]["properties"].is_object());
}

// ---------------------------------------------------------------------------
// todaysDate
// ---------------------------------------------------------------------------

#[test]
fn todays_date_is_rfc3339() {
    let stamp = todays_date();
    assert!(DateTime::parse_from_rfc3339(&stamp).is_ok());
}

#[test]
fn todays_date_output_feeds_convert_date() {
    let today = dispatch("todaysDate", &json!({}));
    let stamp = today.as_str().unwrap();

    let converted = dispatch(
        "convertDate",
        &json!({ "inputDate": stamp, "fromCalendar": "gregorian" }),
    );
    assert!(converted["hebrewDate"]["hebrewYear"].as_i64().unwrap() > 5780);
}

// ---------------------------------------------------------------------------
// convertDate dispatch
// ---------------------------------------------------------------------------

#[test]
fn convert_gregorian_to_hebrew() {
    let result = dispatch(
        "convertDate",
        &json!({ "inputDate": "2024-10-03", "fromCalendar": "gregorian" }),
    );
    assert_eq!(result["hebrewDate"]["hebrewYear"], 5785);
    assert_eq!(result["hebrewDate"]["display"], "1 Tishrei 5785");
    assert!(result["additionalInfo"]["season"].is_string());
}

#[test]
fn convert_hebrew_to_gregorian() {
    let result = dispatch(
        "convertDate",
        &json!({ "inputDate": "15 Nissan 5784", "fromCalendar": "hebrew" }),
    );
    assert_eq!(result["gregorianDate"], "2024-04-23");
}

#[test]
fn unparseable_civil_date_reports_failure_data() {
    let result = dispatch(
        "convertDate",
        &json!({ "inputDate": "not-a-date", "fromCalendar": "gregorian" }),
    );
    assert_eq!(result["success"], false);
    assert!(result["error"]
        .as_str()
        .unwrap()
        .contains("Invalid civil date"));
}

#[test]
fn out_of_range_hebrew_day_reports_failure_data() {
    let result = dispatch(
        "convertDate",
        &json!({ "inputDate": "40 Tishrei 5785", "fromCalendar": "hebrew" }),
    );
    assert_eq!(result["success"], false);
}

// ---------------------------------------------------------------------------
// findJewishHoliday / listJewishHolidays dispatch
// ---------------------------------------------------------------------------

#[test]
fn find_holiday_through_dispatch() {
    let result = dispatch(
        "findJewishHoliday",
        &json!({ "year": 2024, "holidayName": "Chanukah" }),
    );
    assert_eq!(result["found"], true);
    let holidays = result["holidays"].as_array().unwrap();
    assert!(!holidays.is_empty());
    assert!(holidays[0]["name"].as_str().unwrap().contains("Chanukah"));
    assert_eq!(
        holidays[0]["location"]["timezone"],
        Tz::America__New_York.name()
    );
}

#[test]
fn find_miss_points_at_the_lister() {
    let result = dispatch(
        "findJewishHoliday",
        &json!({ "year": 2024, "holidayName": "Festivus" }),
    );
    assert_eq!(result["found"], false);
    assert!(result["message"]
        .as_str()
        .unwrap()
        .contains("listJewishHolidays"));
}

#[test]
fn list_holidays_through_dispatch() {
    let result = dispatch("listJewishHolidays", &json!({ "year": 2024 }));
    assert_eq!(result["year"], 2024);
    let total = result["totalHolidays"].as_u64().unwrap();
    assert!(total > 0);
    assert_eq!(result["holidays"].as_array().unwrap().len() as u64, total);
}

#[test]
fn list_failure_is_reported_as_data() {
    let result = dispatch("listJewishHolidays", &json!({ "year": 10000 }));
    assert_eq!(result["totalHolidays"], 0);
    assert!(result["error"].is_string());
}

#[test]
fn explicit_location_reaches_the_results() {
    let jerusalem = Location::new("Jerusalem", 31.7683, 35.2137, Tz::Asia__Jerusalem);
    let result = dispatch_with_location(
        "findJewishHoliday",
        &json!({ "year": 2024, "holidayName": "Passover" }),
        &jerusalem,
    );
    assert_eq!(result["found"], true);
    let holidays = result["holidays"].as_array().unwrap();
    assert_eq!(holidays[0]["location"]["name"], "Jerusalem");
}

// ---------------------------------------------------------------------------
// Rejected calls
// ---------------------------------------------------------------------------

#[test]
fn missing_argument_is_rejected_as_data() {
    let result = dispatch("convertDate", &json!({ "inputDate": "2024-10-03" }));
    assert_eq!(result["success"], false);
    assert!(result["error"]
        .as_str()
        .unwrap()
        .contains("invalid arguments for convertDate"));
}

#[test]
fn wrong_argument_type_is_rejected_as_data() {
    let result = dispatch(
        "findJewishHoliday",
        &json!({ "year": "twenty twenty four", "holidayName": "Purim" }),
    );
    assert_eq!(result["success"], false);
}

#[test]
fn unknown_calendar_variant_is_rejected_as_data() {
    let result = dispatch(
        "convertDate",
        &json!({ "inputDate": "2024-10-03", "fromCalendar": "julian" }),
    );
    assert_eq!(result["success"], false);
}

#[test]
fn unknown_tool_is_rejected_as_data() {
    let result = dispatch("orderPizza", &json!({}));
    assert_eq!(result["success"], false);
    assert!(result["error"].as_str().unwrap().contains("unknown tool"));
}
