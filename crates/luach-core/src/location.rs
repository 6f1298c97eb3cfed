//! Observer locations for zmanim computation.

use chrono_tz::Tz;
use serde::Serialize;

/// A place on Earth with an IANA timezone, used to anchor solar times.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(serialize_with = "serialize_tz")]
    pub timezone: Tz,
}

fn serialize_tz<S: serde::Serializer>(tz: &Tz, s: S) -> std::result::Result<S::Ok, S::Error> {
    s.serialize_str(tz.name())
}

impl Location {
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64, timezone: Tz) -> Self {
        Self {
            name: name.into(),
            latitude,
            longitude,
            timezone,
        }
    }

    /// The default reference location: New York City.
    pub fn nyc() -> Self {
        Self::new("New York", 40.7128, -74.0060, chrono_tz::America::New_York)
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::nyc()
    }
}
