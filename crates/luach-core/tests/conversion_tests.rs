//! Tests for civil <-> Hebrew date conversion against published anchors.

use chrono::{Datelike, NaiveDate, Weekday};
use luach_core::hdate::{days_in_month, days_in_year, months_in_year};
use luach_core::{is_leap_year, HebrewDate, HebrewMonth};

fn civil(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ---------------------------------------------------------------------------
// Known anchor dates
// ---------------------------------------------------------------------------

#[test]
fn rosh_hashana_5785_is_october_3_2024() {
    let rh = HebrewDate::new(5785, HebrewMonth::Tishrei, 1).unwrap();
    assert_eq!(rh.to_civil(), civil(2024, 10, 3));
    assert_eq!(rh.to_civil().weekday(), Weekday::Thu);
}

#[test]
fn rosh_hashana_5784_falls_on_shabbat() {
    let rh = HebrewDate::new(5784, HebrewMonth::Tishrei, 1).unwrap();
    assert_eq!(rh.to_civil(), civil(2023, 9, 16));
    assert_eq!(rh.to_civil().weekday(), Weekday::Sat);
}

#[test]
fn rosh_hashana_5786_is_september_23_2025() {
    let rh = HebrewDate::new(5786, HebrewMonth::Tishrei, 1).unwrap();
    assert_eq!(rh.to_civil(), civil(2025, 9, 23));
    assert_eq!(rh.to_civil().weekday(), Weekday::Tue);
}

#[test]
fn first_day_of_passover_5784_is_april_23_2024() {
    let pesach = HebrewDate::new(5784, HebrewMonth::Nissan, 15).unwrap();
    assert_eq!(pesach.to_civil(), civil(2024, 4, 23));
}

#[test]
fn civil_date_resolves_to_hebrew_date() {
    let h = HebrewDate::from_civil(civil(2024, 10, 3)).unwrap();
    assert_eq!(h.year(), 5785);
    assert_eq!(h.month(), HebrewMonth::Tishrei);
    assert_eq!(h.day(), 1);
}

#[test]
fn end_of_2024_lands_in_kislev() {
    // Dec 31, 2024 was the sixth day of Chanukah.
    let h = HebrewDate::from_civil(civil(2024, 12, 31)).unwrap();
    assert_eq!(h.year(), 5785);
    assert_eq!(h.month(), HebrewMonth::Kislev);
    assert_eq!(h.day(), 30);
}

// ---------------------------------------------------------------------------
// Leap years and year lengths
// ---------------------------------------------------------------------------

#[test]
fn leap_year_flags_match_the_metonic_cycle() {
    assert!(is_leap_year(5782));
    assert!(!is_leap_year(5783));
    assert!(is_leap_year(5784));
    assert!(!is_leap_year(5785));
    assert!(!is_leap_year(5786));
    assert!(is_leap_year(5787));
}

#[test]
fn year_lengths_match_known_years() {
    assert_eq!(days_in_year(5784), 383);
    assert_eq!(days_in_year(5785), 355);
}

#[test]
fn month_counts_follow_leap_years() {
    assert_eq!(months_in_year(5784), 13);
    assert_eq!(months_in_year(5785), 12);
}

#[test]
fn variable_month_lengths_follow_year_type() {
    // 5785 is complete (355 days): both Cheshvan and Kislev run long.
    assert_eq!(days_in_month(HebrewMonth::Cheshvan, 5785), 30);
    assert_eq!(days_in_month(HebrewMonth::Kislev, 5785), 30);
    // 5784 is deficient (383 days): both run short.
    assert_eq!(days_in_month(HebrewMonth::Cheshvan, 5784), 29);
    assert_eq!(days_in_month(HebrewMonth::Kislev, 5784), 29);
    // First Adar has 30 days only when it is genuinely Adar I.
    assert_eq!(days_in_month(HebrewMonth::Adar1, 5784), 30);
    assert_eq!(days_in_month(HebrewMonth::Adar1, 5785), 29);
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

#[test]
fn adar_ii_rejected_outside_leap_years() {
    assert!(HebrewDate::new(5784, HebrewMonth::Adar2, 1).is_ok());
    assert!(HebrewDate::new(5785, HebrewMonth::Adar2, 1).is_err());
}

#[test]
fn day_must_fit_the_month() {
    assert!(HebrewDate::new(5785, HebrewMonth::Tishrei, 30).is_ok());
    assert!(HebrewDate::new(5785, HebrewMonth::Tishrei, 31).is_err());
    assert!(HebrewDate::new(5785, HebrewMonth::Tishrei, 0).is_err());
    assert!(HebrewDate::new(5785, HebrewMonth::Cheshvan, 30).is_ok());
    assert!(HebrewDate::new(5784, HebrewMonth::Cheshvan, 30).is_err());
}

#[test]
fn years_outside_supported_range_rejected() {
    assert!(HebrewDate::new(0, HebrewMonth::Tishrei, 1).is_err());
    assert!(HebrewDate::new(30001, HebrewMonth::Tishrei, 1).is_err());
    assert!(HebrewDate::from_rd(-1_400_000).is_err());
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

#[test]
fn renders_day_month_year() {
    let d = HebrewDate::new(5784, HebrewMonth::Nissan, 15).unwrap();
    assert_eq!(d.render(), "15 Nissan 5784");
    assert_eq!(d.to_string(), "15 Nissan 5784");
}

#[test]
fn adar_naming_depends_on_leap_year() {
    assert_eq!(
        HebrewDate::new(5784, HebrewMonth::Adar1, 1).unwrap().month_name(),
        "Adar I"
    );
    assert_eq!(
        HebrewDate::new(5784, HebrewMonth::Adar2, 1).unwrap().month_name(),
        "Adar II"
    );
    assert_eq!(
        HebrewDate::new(5785, HebrewMonth::Adar1, 1).unwrap().month_name(),
        "Adar"
    );
}

#[test]
fn month_names_resolve_from_variants() {
    assert_eq!(HebrewMonth::from_name("Nisan"), Some(HebrewMonth::Nissan));
    assert_eq!(HebrewMonth::from_name("nissan"), Some(HebrewMonth::Nissan));
    assert_eq!(HebrewMonth::from_name("Tishri"), Some(HebrewMonth::Tishrei));
    assert_eq!(
        HebrewMonth::from_name("Marcheshvan"),
        Some(HebrewMonth::Cheshvan)
    );
    assert_eq!(HebrewMonth::from_name("Sh'vat"), Some(HebrewMonth::Shvat));
    assert_eq!(HebrewMonth::from_name("Adar"), Some(HebrewMonth::Adar1));
    assert_eq!(
        HebrewMonth::from_name("Adar Sheni"),
        Some(HebrewMonth::Adar2)
    );
    assert_eq!(HebrewMonth::from_name("Adar 2"), Some(HebrewMonth::Adar2));
    assert_eq!(HebrewMonth::from_name("Brumaire"), None);
}

#[test]
fn rosh_chodesh_flag_covers_first_and_thirtieth() {
    assert!(HebrewDate::new(5785, HebrewMonth::Cheshvan, 1)
        .unwrap()
        .is_rosh_chodesh());
    assert!(HebrewDate::new(5785, HebrewMonth::Cheshvan, 30)
        .unwrap()
        .is_rosh_chodesh());
    assert!(!HebrewDate::new(5785, HebrewMonth::Cheshvan, 15)
        .unwrap()
        .is_rosh_chodesh());
}
