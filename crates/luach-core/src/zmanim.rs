//! Solar arithmetic and halachic times.
//!
//! Sunrise and sunset come from the standard solar-position approximation
//! (mean anomaly + equation of center + hour angle at -0.833 degrees), good
//! to a couple of minutes at mid latitudes. Candle lighting, havdalah and
//! fast boundaries are fixed offsets from those instants, evaluated in the
//! observer's IANA timezone so DST falls out correctly.

use chrono::{DateTime, Datelike, Duration, NaiveDate, Timelike, Utc};
use chrono_tz::Tz;

use crate::location::Location;

const J2000: f64 = 2_451_545.0;
const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Sunrise and sunset for one civil date at one location.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarDay {
    pub sunrise: DateTime<Tz>,
    pub sunset: DateTime<Tz>,
}

/// Compute sunrise and sunset for `date` at `location`.
///
/// Returns `None` inside polar day or polar night, where the sun never
/// crosses the horizon.
pub fn solar_day(date: NaiveDate, location: &Location) -> Option<SolarDay> {
    // Julian day at 12:00 UTC of this civil date.
    let jd_noon = date.num_days_from_ce() as f64 + 1_721_425.0;
    let n = jd_noon - J2000 + 0.0008;

    // Mean solar noon at the observer's longitude (west positive).
    let lw = -location.longitude;
    let jstar = n + lw / 360.0;

    // Solar mean anomaly and equation of center, in degrees.
    let m = (357.5291 + 0.985_600_28 * jstar).rem_euclid(360.0);
    let mr = m.to_radians();
    let c = 1.9148 * mr.sin() + 0.0200 * (2.0 * mr).sin() + 0.0003 * (3.0 * mr).sin();

    // Ecliptic longitude and solar transit.
    let lambda = (m + c + 180.0 + 102.9372).rem_euclid(360.0);
    let lr = lambda.to_radians();
    let j_transit = J2000 + jstar + 0.0053 * mr.sin() - 0.0069 * (2.0 * lr).sin();

    // Declination and hour angle at the standard -0.833 degree altitude
    // (refraction plus solar disc radius).
    let sin_decl = lr.sin() * 23.4397_f64.to_radians().sin();
    let decl = sin_decl.asin();
    let phi = location.latitude.to_radians();
    let cos_hour = ((-0.833_f64).to_radians().sin() - phi.sin() * decl.sin())
        / (phi.cos() * decl.cos());
    if !(-1.0..=1.0).contains(&cos_hour) {
        return None;
    }
    let hour_angle = cos_hour.acos().to_degrees();

    let sunrise = jd_to_local(j_transit - hour_angle / 360.0, location.timezone)?;
    let sunset = jd_to_local(j_transit + hour_angle / 360.0, location.timezone)?;
    Some(SolarDay { sunrise, sunset })
}

fn jd_to_local(jd: f64, tz: Tz) -> Option<DateTime<Tz>> {
    let unix = (jd - UNIX_EPOCH_JD) * 86_400.0;
    let utc = DateTime::<Utc>::from_timestamp(unix.round() as i64, 0)?;
    Some(utc.with_timezone(&tz))
}

/// Sunset for `date` at `location`, if the sun sets that day.
pub fn sunset(date: NaiveDate, location: &Location) -> Option<DateTime<Tz>> {
    solar_day(date, location).map(|s| s.sunset)
}

/// Sunrise for `date` at `location`, if the sun rises that day.
pub fn sunrise(date: NaiveDate, location: &Location) -> Option<DateTime<Tz>> {
    solar_day(date, location).map(|s| s.sunrise)
}

/// Candle lighting time: `offset_mins` before sunset.
pub fn candle_lighting(
    date: NaiveDate,
    location: &Location,
    offset_mins: u32,
) -> Option<DateTime<Tz>> {
    Some(sunset(date, location)? - Duration::minutes(offset_mins as i64))
}

/// Havdalah (and fast end) time: `mins` after sunset.
pub fn havdalah(date: NaiveDate, location: &Location, mins: u32) -> Option<DateTime<Tz>> {
    Some(sunset(date, location)? + Duration::minutes(mins as i64))
}

/// Dawn for fast starts: 72 minutes before sunrise.
pub fn fast_dawn(date: NaiveDate, location: &Location) -> Option<DateTime<Tz>> {
    Some(sunrise(date, location)? - Duration::minutes(72))
}

/// Render a local time as e.g. "7:08 PM".
pub fn format_time_12h(time: &DateTime<Tz>) -> String {
    let (pm, hour) = time.hour12();
    format!(
        "{}:{:02} {}",
        hour,
        time.minute(),
        if pm { "PM" } else { "AM" }
    )
}
