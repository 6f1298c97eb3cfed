//! Civil-year event enumeration -- the provider's main entry point.
//!
//! A civil year straddles two Hebrew years, so the run merges both years'
//! holiday tables, then layers on the optional streams: weekly readings,
//! the Omer count, molad announcements, and location-dependent candle,
//! havdalah and fast boundary times. Days where the sun never crosses the
//! horizon simply emit no timed events.

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::error::{CalendarError, Result};
use crate::event::{CalendarOptions, Event, EventCategory};
use crate::hdate::{
    civil_to_rd, rd_on_or_before, rd_to_civil, rd_weekday, year_months, HebrewDate, HebrewMonth,
};
use crate::holidays::holidays_for;
use crate::location::Location;
use crate::molad::Molad;
use crate::sedra::Sedra;
use crate::zmanim;

const FRIDAY: i64 = 5;
const SATURDAY: i64 = 6;

fn ordinal(n: u32) -> String {
    let suffix = if (11..=13).contains(&(n % 100)) {
        "th"
    } else {
        match n % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        }
    };
    format!("{}{}", n, suffix)
}

/// All events of one civil year, per `options`, timed against `location`.
///
/// # Errors
/// Returns `CalendarError::YearOutOfRange` for civil years outside
/// 1..=9999.
pub fn calendar(
    civil_year: i32,
    options: &CalendarOptions,
    location: &Location,
) -> Result<Vec<Event>> {
    if !(1..=9999).contains(&civil_year) {
        return Err(CalendarError::YearOutOfRange(civil_year as i64));
    }
    let jan1 = NaiveDate::from_ymd_opt(civil_year, 1, 1)
        .ok_or_else(|| CalendarError::InvalidCivilDate(format!("{}-01-01", civil_year)))?;
    let dec31 = NaiveDate::from_ymd_opt(civil_year, 12, 31)
        .ok_or_else(|| CalendarError::InvalidCivilDate(format!("{}-12-31", civil_year)))?;
    let window = civil_to_rd(jan1)..=civil_to_rd(dec31);

    let first_year = HebrewDate::from_civil(jan1)?.year();
    let last_year = HebrewDate::from_civil(dec31)?.year();

    let mut holidays: Vec<Event> = Vec::new();
    for year in first_year..=last_year {
        holidays.extend(holidays_for(year)?);
    }

    // Days bearing festival candle obligations: every Major holiday.
    let chag: HashSet<i64> = holidays
        .iter()
        .filter(|e| e.has_category(EventCategory::Major))
        .map(Event::rd)
        .collect();

    let mut events: Vec<Event> = holidays
        .iter()
        .filter(|e| window.contains(&e.rd()))
        .cloned()
        .collect();

    if options.sedrot {
        for year in first_year..=last_year {
            let sedra = Sedra::new(year)?;
            let mut sat = rd_on_or_before(SATURDAY, *window.start() + 6);
            while sat <= *window.end() {
                if let Some(parsha) = sedra.lookup(sat) {
                    events.push(Event::new(
                        format!("Parashat {}", parsha),
                        rd_to_civil(sat),
                        HebrewDate::from_rd(sat)?,
                        vec![EventCategory::Parashat],
                    ));
                }
                sat += 7;
            }
        }
    }

    if options.omer {
        for year in first_year..=last_year {
            let first_night = HebrewDate::new(year, HebrewMonth::Nissan, 16)?.to_rd();
            for count in 1..=49u32 {
                let rd = first_night + count as i64 - 1;
                if window.contains(&rd) {
                    events.push(Event::new(
                        format!("{} day of the Omer", ordinal(count)),
                        rd_to_civil(rd),
                        HebrewDate::from_rd(rd)?,
                        vec![EventCategory::Omer],
                    ));
                }
            }
        }
    }

    if options.molad {
        for year in first_year..=last_year {
            for month in year_months(year) {
                // No molad announcement for Tishrei.
                if month == HebrewMonth::Tishrei {
                    continue;
                }
                let first = HebrewDate::new(year, month, 1)?.to_rd();
                let announce_sat = rd_on_or_before(SATURDAY, first - 1);
                if window.contains(&announce_sat) {
                    let molad = Molad::new(year, month)?;
                    let name = format!("Molad {}", crate::hdate::month_name(month, year));
                    let mut ev = Event::new(
                        name.clone(),
                        rd_to_civil(announce_sat),
                        HebrewDate::from_rd(announce_sat)?,
                        vec![EventCategory::Molad],
                    );
                    ev.description = format!("{}: {}", name, molad.render());
                    events.push(ev);
                }
            }
        }
    }

    if options.candle_lighting {
        for rd in window.clone() {
            let date = rd_to_civil(rd);
            let weekday = rd_weekday(rd);
            let today_chag = chag.contains(&rd);
            let tomorrow_chag = chag.contains(&(rd + 1));

            if weekday == FRIDAY || tomorrow_chag {
                // Erev Shabbat and erev chag light before sunset; a chag or
                // Shabbat that runs into another chag lights after nightfall
                // from an existing flame.
                let time = if weekday == FRIDAY {
                    zmanim::candle_lighting(date, location, options.candle_offset_mins)
                } else if today_chag || weekday == SATURDAY {
                    zmanim::havdalah(date, location, options.havdalah_mins)
                } else {
                    zmanim::candle_lighting(date, location, options.candle_offset_mins)
                };
                if let Some(t) = time {
                    events.push(
                        Event::new(
                            "Candle lighting",
                            date,
                            HebrewDate::from_rd(rd)?,
                            vec![EventCategory::Candles],
                        )
                        .with_time(t),
                    );
                }
            } else if (weekday == SATURDAY || today_chag) && !tomorrow_chag {
                if let Some(t) = zmanim::havdalah(date, location, options.havdalah_mins) {
                    let mut ev = Event::new(
                        "Havdalah",
                        date,
                        HebrewDate::from_rd(rd)?,
                        vec![EventCategory::Havdalah],
                    )
                    .with_time(t);
                    ev.havdalah_mins = Some(options.havdalah_mins);
                    events.push(ev);
                }
            }
        }

        // Fast boundaries. Yom Kippur's are covered by its candle lighting
        // and havdalah; Tisha B'Av starts at sundown the prior evening,
        // the minor fasts at dawn.
        let fasts: Vec<Event> = events
            .iter()
            .filter(|e| e.has_category(EventCategory::Fast) && e.name != "Yom Kippur")
            .cloned()
            .collect();
        for fast in fasts {
            let rd = fast.rd();
            let begins = if fast.name == "Tisha B'Av" {
                zmanim::sunset(rd_to_civil(rd - 1), location).map(|t| (rd - 1, t))
            } else {
                zmanim::fast_dawn(fast.civil, location).map(|t| (rd, t))
            };
            if let Some((begin_rd, t)) = begins {
                if window.contains(&begin_rd) {
                    events.push(
                        Event::new(
                            "Fast begins",
                            rd_to_civil(begin_rd),
                            HebrewDate::from_rd(begin_rd)?,
                            vec![EventCategory::Zmanim],
                        )
                        .with_time(t),
                    );
                }
            }
            if let Some(t) = zmanim::havdalah(fast.civil, location, options.havdalah_mins) {
                events.push(
                    Event::new(
                        "Fast ends",
                        fast.civil,
                        HebrewDate::from_rd(rd)?,
                        vec![EventCategory::Zmanim],
                    )
                    .with_time(t),
                );
            }
        }
    }

    events.sort_by(|a, b| a.rd().cmp(&b.rd()).then_with(|| a.time.cmp(&b.time)));
    Ok(events)
}
