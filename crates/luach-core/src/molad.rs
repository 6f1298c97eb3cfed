//! Molad -- the mean lunar conjunction announced before each new month.
//!
//! The molad advances by exactly 29 days, 12 hours and 793 chalakim
//! (1 hour = 1080 chalakim) per lunar month from the epoch conjunction.
//! Hours follow the traditional count from 6 PM of the prior evening.

use crate::error::{CalendarError, Result};
use crate::hdate::{self, HebrewMonth};

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// The mean conjunction instant for one Hebrew month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Molad {
    pub year: i64,
    pub month: HebrewMonth,
    /// 0 = Sunday .. 6 = Saturday.
    pub weekday: u32,
    /// Hours 0..=23 counted from 6 PM the prior evening.
    pub hours: u32,
    pub minutes: u32,
    /// Remaining chalakim 0..=17 (18 chalakim per minute).
    pub chalakim: u32,
}

impl Molad {
    /// Compute the molad of `month` in `year`.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidHebrewDate` if the month does not
    /// exist in the year (Adar II outside leap years).
    pub fn new(year: i64, month: HebrewMonth) -> Result<Self> {
        let offset = hdate::month_position(month, year).ok_or_else(|| {
            CalendarError::InvalidHebrewDate(format!(
                "month {:?} does not occur in year {}",
                month, year
            ))
        })?;
        let months = hdate::months_elapsed(year) + offset as i64;
        let parts_elapsed = 204 + 793 * (months % 1080);
        let hours_elapsed = 5 + 12 * months + 793 * (months / 1080) + parts_elapsed / 1080;
        let day = 1 + 29 * months + hours_elapsed / 24;
        let parts = parts_elapsed % 1080;
        Ok(Self {
            year,
            month,
            weekday: day.rem_euclid(7) as u32,
            hours: (hours_elapsed % 24) as u32,
            minutes: (parts / 18) as u32,
            chalakim: (parts % 18) as u32,
        })
    }

    /// Render in the traditional announcement form, e.g.
    /// "Thu, 21 minutes and 13 chalakim after 9:00".
    pub fn render(&self) -> String {
        format!(
            "{}, {} minutes and {} chalakim after {}:00",
            WEEKDAYS[self.weekday as usize], self.minutes, self.chalakim, self.hours
        )
    }
}
