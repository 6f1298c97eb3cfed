//! Calendar events -- holidays, fasts, candle times, readings -- and the
//! options that control which of them a calendar run emits.

use chrono::{DateTime, NaiveDate};
use chrono_tz::Tz;
use serde::Serialize;

use crate::hdate::HebrewDate;

/// Category tags attached to an event. An event carries one or more.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EventCategory {
    Holiday,
    Major,
    Minor,
    Fast,
    Modern,
    RoshChodesh,
    Candles,
    Havdalah,
    Zmanim,
    Parashat,
    Omer,
    Molad,
}

impl EventCategory {
    /// Lowercase wire name, matching the serialized form.
    pub fn name(self) -> &'static str {
        use EventCategory::*;
        match self {
            Holiday => "holiday",
            Major => "major",
            Minor => "minor",
            Fast => "fast",
            Modern => "modern",
            RoshChodesh => "roshchodesh",
            Candles => "candles",
            Havdalah => "havdalah",
            Zmanim => "zmanim",
            Parashat => "parashat",
            Omer => "omer",
            Molad => "molad",
        }
    }
}

/// A single dated calendar event.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    /// Short English name, e.g. "Passover I" or "Candle lighting".
    pub name: String,
    /// Rendered description. Timed events append the clock time,
    /// e.g. "Candle lighting: 7:08 PM".
    pub description: String,
    pub civil: NaiveDate,
    pub hebrew: HebrewDate,
    pub categories: Vec<EventCategory>,
    /// Local wall-clock instant for candle lighting, havdalah and fast
    /// boundary events.
    pub time: Option<DateTime<Tz>>,
    /// Minutes after sunset used for this havdalah time, when applicable.
    pub havdalah_mins: Option<u32>,
    /// Link to background reading for major holidays.
    pub url: Option<String>,
    /// One-line explanation for major holidays.
    pub memo: Option<String>,
}

impl Event {
    pub(crate) fn new(
        name: impl Into<String>,
        civil: NaiveDate,
        hebrew: HebrewDate,
        categories: Vec<EventCategory>,
    ) -> Self {
        let name = name.into();
        Self {
            description: name.clone(),
            name,
            civil,
            hebrew,
            categories,
            time: None,
            havdalah_mins: None,
            url: None,
            memo: None,
        }
    }

    pub(crate) fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub(crate) fn with_memo(mut self, memo: impl Into<String>) -> Self {
        self.memo = Some(memo.into());
        self
    }

    /// Attach a wall-clock instant and fold it into the description.
    pub(crate) fn with_time(mut self, time: DateTime<Tz>) -> Self {
        self.description = format!("{}: {}", self.name, crate::zmanim::format_time_12h(&time));
        self.time = Some(time);
        self
    }

    pub fn has_category(&self, category: EventCategory) -> bool {
        self.categories.contains(&category)
    }

    /// Category tags joined for display, e.g. "holiday, major".
    pub fn category_string(&self) -> String {
        self.categories
            .iter()
            .map(|c| c.name())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Rata Die day number of the event's civil date.
    pub fn rd(&self) -> i64 {
        crate::hdate::civil_to_rd(self.civil)
    }
}

/// Switches for the optional event streams a calendar run can include.
///
/// The default produces holidays only (majors, minors, fasts, modern
/// observances and Rosh Chodesh) with no location-dependent times.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarOptions {
    /// Emit candle lighting, havdalah and fast boundary times.
    pub candle_lighting: bool,
    /// Minutes before sunset for candle lighting.
    pub candle_offset_mins: u32,
    /// Minutes after sunset for havdalah and fast end.
    pub havdalah_mins: u32,
    /// Emit the weekly Torah reading on Saturdays.
    pub sedrot: bool,
    /// Emit the nightly Omer count between Passover and Shavuot.
    pub omer: bool,
    /// Emit the molad announcement on the Shabbat before each new month.
    pub molad: bool,
}

impl Default for CalendarOptions {
    fn default() -> Self {
        Self {
            candle_lighting: false,
            candle_offset_mins: 18,
            havdalah_mins: 42,
            sedrot: false,
            omer: false,
            molad: false,
        }
    }
}

impl CalendarOptions {
    /// Everything on: the full event stream used for holiday search.
    pub fn enriched() -> Self {
        Self {
            candle_lighting: true,
            sedrot: true,
            omer: true,
            molad: true,
            ..Self::default()
        }
    }
}
