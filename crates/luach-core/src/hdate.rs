//! Hebrew calendar date arithmetic -- conversions between civil and Hebrew dates.
//!
//! Implements the fixed (arithmetic) Hebrew calendar: the 19-year Metonic leap
//! cycle, molad-based year lengths with the four postponement rules, and the
//! resulting month tables. All conversions go through Rata Die day numbers
//! (proleptic Gregorian day 1 = January 1, 1 CE), which line up with chrono's
//! `num_days_from_ce`.

use chrono::{Datelike, NaiveDate};

use crate::error::{CalendarError, Result};

/// Rata Die day number of the day before 1 Tishrei, year 1.
pub const HEBREW_EPOCH: i64 = -1_373_428;

/// Months of the Hebrew year, numbered from Nissan per biblical convention.
///
/// The civil year begins at Tishrei (month 7). `Adar1` doubles as plain Adar
/// in non-leap years; `Adar2` exists only in leap years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum HebrewMonth {
    Nissan = 1,
    Iyyar = 2,
    Sivan = 3,
    Tammuz = 4,
    Av = 5,
    Elul = 6,
    Tishrei = 7,
    Cheshvan = 8,
    Kislev = 9,
    Tevet = 10,
    Shvat = 11,
    Adar1 = 12,
    Adar2 = 13,
}

impl HebrewMonth {
    /// Numeric form (Nissan = 1 .. Adar II = 13).
    pub fn number(self) -> u32 {
        self as u32
    }

    /// Month from its numeric form.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidHebrewDate` if `n` is outside 1..=13.
    pub fn from_number(n: u32) -> Result<Self> {
        use HebrewMonth::*;
        Ok(match n {
            1 => Nissan,
            2 => Iyyar,
            3 => Sivan,
            4 => Tammuz,
            5 => Av,
            6 => Elul,
            7 => Tishrei,
            8 => Cheshvan,
            9 => Kislev,
            10 => Tevet,
            11 => Shvat,
            12 => Adar1,
            13 => Adar2,
            _ => {
                return Err(CalendarError::InvalidHebrewDate(format!(
                    "month number {} out of range 1..=13",
                    n
                )))
            }
        })
    }

    /// Resolve an English month name, tolerating common transliterations.
    ///
    /// Bare "Adar" resolves to [`HebrewMonth::Adar1`], which renders as plain
    /// Adar in non-leap years.
    pub fn from_name(name: &str) -> Option<Self> {
        use HebrewMonth::*;
        let folded: String = name
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || *c == ' ')
            .collect();
        let key = folded.split_whitespace().collect::<Vec<_>>().join(" ");
        Some(match key.as_str() {
            "nissan" | "nisan" | "nison" => Nissan,
            "iyyar" | "iyar" | "iar" => Iyyar,
            "sivan" | "siwan" => Sivan,
            "tammuz" | "tamuz" => Tammuz,
            "av" | "ab" => Av,
            "elul" => Elul,
            "tishrei" | "tishrey" | "tishri" | "tishre" => Tishrei,
            "cheshvan" | "heshvan" | "chesvan" | "marcheshvan" | "marheshvan" => Cheshvan,
            "kislev" | "kislew" => Kislev,
            "tevet" | "teves" | "tebeth" => Tevet,
            "shvat" | "shevat" | "shbat" | "sebat" => Shvat,
            "adar" | "adar i" | "adar 1" | "adar aleph" | "adar rishon" => Adar1,
            "adar ii" | "adar 2" | "adar bet" | "adar beis" | "adar sheni" => Adar2,
            _ => return None,
        })
    }
}

/// Whether a Hebrew year is a leap year (7 of every 19 years).
pub fn is_leap_year(year: i64) -> bool {
    (7 * year + 1).rem_euclid(19) < 7
}

/// Number of months in a Hebrew year: 12, or 13 in leap years.
pub fn months_in_year(year: i64) -> u32 {
    if is_leap_year(year) {
        13
    } else {
        12
    }
}

/// Lunar months elapsed from the calendar epoch to Tishrei of `year`.
pub(crate) fn months_elapsed(year: i64) -> i64 {
    let prev = year - 1;
    235 * (prev / 19) + 12 * (prev % 19) + (7 * (prev % 19) + 1) / 19
}

/// Days from the epoch to 1 Tishrei of `year`, applying the molad and the
/// four postponement rules (Rosh Hashana never falls Sunday, Wednesday or
/// Friday; two further rules keep year lengths legal).
fn elapsed_days(year: i64) -> i64 {
    let months_elapsed = months_elapsed(year);
    let parts_elapsed = 204 + 793 * (months_elapsed % 1080);
    let hours_elapsed =
        5 + 12 * months_elapsed + 793 * (months_elapsed / 1080) + parts_elapsed / 1080;
    let day = 1 + 29 * months_elapsed + hours_elapsed / 24;
    let parts = (hours_elapsed % 24) * 1080 + parts_elapsed % 1080;

    let alt_day = if parts >= 19_440
        || (day % 7 == 2 && parts >= 9_924 && !is_leap_year(year))
        || (day % 7 == 1 && parts >= 16_789 && is_leap_year(year - 1))
    {
        day + 1
    } else {
        day
    };

    match alt_day % 7 {
        0 | 3 | 5 => alt_day + 1,
        _ => alt_day,
    }
}

/// Length of a Hebrew year in days: 353, 354, 355, 383, 384 or 385.
pub fn days_in_year(year: i64) -> i64 {
    elapsed_days(year + 1) - elapsed_days(year)
}

/// Whether Cheshvan has 30 days in `year` (a "complete" year).
pub fn long_cheshvan(year: i64) -> bool {
    days_in_year(year) % 10 == 5
}

/// Whether Kislev has 29 days in `year` (a "deficient" year).
pub fn short_kislev(year: i64) -> bool {
    days_in_year(year) % 10 == 3
}

/// Number of days in a given month of a given Hebrew year.
pub fn days_in_month(month: HebrewMonth, year: i64) -> u32 {
    use HebrewMonth::*;
    match month {
        Iyyar | Tammuz | Elul | Tevet | Adar2 => 29,
        Nissan | Sivan | Av | Tishrei | Shvat => 30,
        Cheshvan => {
            if long_cheshvan(year) {
                30
            } else {
                29
            }
        }
        Kislev => {
            if short_kislev(year) {
                29
            } else {
                30
            }
        }
        Adar1 => {
            if is_leap_year(year) {
                30
            } else {
                29
            }
        }
    }
}

/// English name of a month, resolving the Adar ambiguity for the given year.
pub fn month_name(month: HebrewMonth, year: i64) -> &'static str {
    use HebrewMonth::*;
    match month {
        Nissan => "Nissan",
        Iyyar => "Iyyar",
        Sivan => "Sivan",
        Tammuz => "Tammuz",
        Av => "Av",
        Elul => "Elul",
        Tishrei => "Tishrei",
        Cheshvan => "Cheshvan",
        Kislev => "Kislev",
        Tevet => "Tevet",
        Shvat => "Shvat",
        Adar1 => {
            if is_leap_year(year) {
                "Adar I"
            } else {
                "Adar"
            }
        }
        Adar2 => "Adar II",
    }
}

/// Position of a month within its year's calendar order, 0 = Tishrei.
pub(crate) fn month_position(month: HebrewMonth, year: i64) -> Option<u32> {
    year_months(year)
        .iter()
        .position(|m| *m == month)
        .map(|p| p as u32)
}

/// Months of a Hebrew year in calendar order (Tishrei first, Elul last),
/// skipping Adar II in non-leap years.
pub fn year_months(year: i64) -> Vec<HebrewMonth> {
    use HebrewMonth::*;
    if is_leap_year(year) {
        vec![
            Tishrei, Cheshvan, Kislev, Tevet, Shvat, Adar1, Adar2, Nissan, Iyyar, Sivan, Tammuz,
            Av, Elul,
        ]
    } else {
        vec![
            Tishrei, Cheshvan, Kislev, Tevet, Shvat, Adar1, Nissan, Iyyar, Sivan, Tammuz, Av, Elul,
        ]
    }
}

/// A validated Hebrew calendar date.
///
/// # Examples
/// ```
/// use luach_core::hdate::{HebrewDate, HebrewMonth};
///
/// let rh = HebrewDate::new(5785, HebrewMonth::Tishrei, 1)?;
/// assert_eq!(rh.to_civil().to_string(), "2024-10-03");
/// # Ok::<(), luach_core::CalendarError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HebrewDate {
    year: i64,
    month: HebrewMonth,
    day: u32,
}

impl HebrewDate {
    /// Construct a Hebrew date, validating month and day against the year.
    ///
    /// # Errors
    /// Returns `CalendarError::YearOutOfRange` for years before 1 or after
    /// 30000, and `CalendarError::InvalidHebrewDate` for Adar II in a
    /// non-leap year or a day outside the month.
    pub fn new(year: i64, month: HebrewMonth, day: u32) -> Result<Self> {
        if !(1..=30000).contains(&year) {
            return Err(CalendarError::YearOutOfRange(year));
        }
        if month == HebrewMonth::Adar2 && !is_leap_year(year) {
            return Err(CalendarError::InvalidHebrewDate(format!(
                "Adar II does not exist in non-leap year {}",
                year
            )));
        }
        let max = days_in_month(month, year);
        if day == 0 || day > max {
            return Err(CalendarError::InvalidHebrewDate(format!(
                "{} {} has {} days, got day {}",
                month_name(month, year),
                year,
                max,
                day
            )));
        }
        Ok(Self { year, month, day })
    }

    pub fn year(&self) -> i64 {
        self.year
    }

    pub fn month(&self) -> HebrewMonth {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// English month name, with plain "Adar" in non-leap years.
    pub fn month_name(&self) -> &'static str {
        month_name(self.month, self.year)
    }

    /// Render as e.g. "15 Nissan 5784".
    pub fn render(&self) -> String {
        format!("{} {} {}", self.day, self.month_name(), self.year)
    }

    /// Whether this date is Rosh Chodesh (day 1, or day 30 of the prior month).
    pub fn is_rosh_chodesh(&self) -> bool {
        self.day == 1 || self.day == 30
    }

    /// Rata Die day number of this date.
    pub fn to_rd(&self) -> i64 {
        use HebrewMonth::*;
        let mut days: i64 = 0;
        let m = self.month.number();
        if m >= Tishrei.number() {
            // Tishrei up to (not including) this month.
            for month in year_months(self.year) {
                if month.number() >= Tishrei.number() && month.number() < m {
                    days += days_in_month(month, self.year) as i64;
                }
            }
        } else {
            // All of Tishrei..Adar, then Nissan up to this month.
            for month in year_months(self.year) {
                if month.number() >= Tishrei.number() || month.number() < m {
                    days += days_in_month(month, self.year) as i64;
                }
            }
        }
        HEBREW_EPOCH + elapsed_days(self.year) + days + self.day as i64 - 1
    }

    /// Hebrew date for a Rata Die day number.
    ///
    /// # Errors
    /// Returns `CalendarError::YearOutOfRange` for days before the epoch or
    /// past Hebrew year 30000.
    pub fn from_rd(rd: i64) -> Result<Self> {
        if rd <= HEBREW_EPOCH {
            return Err(CalendarError::YearOutOfRange(rd));
        }
        // First approximation, then settle on the year whose Rosh Hashana
        // does not exceed rd.
        let mut year = ((rd - HEBREW_EPOCH) as f64 / 365.2468) as i64 + 1;
        if year < 1 {
            year = 1;
        }
        while year > 1 && rd < HEBREW_EPOCH + elapsed_days(year) {
            year -= 1;
        }
        while rd >= HEBREW_EPOCH + elapsed_days(year + 1) {
            year += 1;
        }
        if year > 30000 {
            return Err(CalendarError::YearOutOfRange(year));
        }

        let mut month = HebrewMonth::Tishrei;
        let mut first = HEBREW_EPOCH + elapsed_days(year);
        for m in year_months(year) {
            let len = days_in_month(m, year) as i64;
            if rd < first + len {
                month = m;
                break;
            }
            first += len;
            month = m;
        }
        let day = (rd - first + 1) as u32;
        Self::new(year, month, day)
    }

    /// Civil (proleptic Gregorian) date of this Hebrew date.
    pub fn to_civil(&self) -> NaiveDate {
        // Hebrew years 1..=30000 sit comfortably inside NaiveDate's range.
        NaiveDate::from_num_days_from_ce_opt(self.to_rd() as i32)
            .unwrap_or(NaiveDate::MIN)
    }

    /// Hebrew date of a civil date.
    ///
    /// # Errors
    /// Returns `CalendarError::YearOutOfRange` for civil dates before the
    /// Hebrew epoch.
    pub fn from_civil(date: NaiveDate) -> Result<Self> {
        Self::from_rd(date.num_days_from_ce() as i64)
    }
}

impl std::fmt::Display for HebrewDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render())
    }
}

/// Rata Die day number of a civil date.
pub fn civil_to_rd(date: NaiveDate) -> i64 {
    date.num_days_from_ce() as i64
}

/// Civil date of a Rata Die day number, clamped to chrono's range.
pub fn rd_to_civil(rd: i64) -> NaiveDate {
    NaiveDate::from_num_days_from_ce_opt(rd as i32).unwrap_or(NaiveDate::MIN)
}

/// Day of week for a Rata Die day number: 0 = Sunday .. 6 = Saturday.
pub fn rd_weekday(rd: i64) -> i64 {
    rd.rem_euclid(7)
}

/// Latest Rata Die day on or before `rd` that falls on `weekday`
/// (0 = Sunday .. 6 = Saturday).
pub fn rd_on_or_before(weekday: i64, rd: i64) -> i64 {
    rd - (rd - weekday).rem_euclid(7)
}
