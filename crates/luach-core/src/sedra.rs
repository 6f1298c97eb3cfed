//! Weekly Torah reading schedule (Diaspora cycle).
//!
//! The annual cycle restarts with Bereshit on the first Shabbat after
//! Simchat Torah and must land fixed anchors on the way round: a valid
//! portion on the Shabbat before Pesach, Devarim on the Shabbat before
//! Tisha B'Av, and Nitzavim on the Shabbat before the next Rosh Hashana.
//! Rather than table lookups per year type, the schedule is built
//! constructively: count the available Shabbatot in each stretch, activate
//! just enough of the seven permitted double portions to make the count
//! fit, then walk the Saturdays assigning readings and skipping festival
//! Shabbatot where a holiday reading displaces the weekly portion.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::error::Result;
use crate::hdate::{civil_to_rd, rd_on_or_before, HebrewDate, HebrewMonth};

const SATURDAY: i64 = 6;

/// The 53 portions of the annual cycle in reading order. Vezot Haberakhah
/// is read on Simchat Torah rather than a Shabbat and is not listed.
pub const PARSHIYOT: [&str; 53] = [
    "Bereshit",
    "Noach",
    "Lech-Lecha",
    "Vayera",
    "Chayei Sara",
    "Toldot",
    "Vayetzei",
    "Vayishlach",
    "Vayeshev",
    "Miketz",
    "Vayigash",
    "Vayechi",
    "Shemot",
    "Vaera",
    "Bo",
    "Beshalach",
    "Yitro",
    "Mishpatim",
    "Terumah",
    "Tetzaveh",
    "Ki Tisa",
    "Vayakhel",
    "Pekudei",
    "Vayikra",
    "Tzav",
    "Shmini",
    "Tazria",
    "Metzora",
    "Achrei Mot",
    "Kedoshim",
    "Emor",
    "Behar",
    "Bechukotai",
    "Bamidbar",
    "Nasso",
    "Beha'alotcha",
    "Sh'lach",
    "Korach",
    "Chukat",
    "Balak",
    "Pinchas",
    "Matot",
    "Masei",
    "Devarim",
    "Vaetchanan",
    "Eikev",
    "Re'eh",
    "Shoftim",
    "Ki Teitzei",
    "Ki Tavo",
    "Nitzavim",
    "Vayeilech",
    "Ha'azinu",
];

/// Reading schedule for the Saturdays of one Hebrew year.
#[derive(Debug, Clone)]
pub struct Sedra {
    year: i64,
    readings: HashMap<i64, String>,
}

impl Sedra {
    /// Build the schedule for a Hebrew year.
    ///
    /// # Errors
    /// Returns `CalendarError::YearOutOfRange` if the year (or its
    /// successor) falls outside the supported range.
    pub fn new(year: i64) -> Result<Self> {
        let rh = HebrewDate::new(year, HebrewMonth::Tishrei, 1)?.to_rd();
        let rh_next = HebrewDate::new(year + 1, HebrewMonth::Tishrei, 1)?.to_rd();
        let rh_weekday = rh.rem_euclid(7);
        let simchat_torah = HebrewDate::new(year, HebrewMonth::Tishrei, 23)?.to_rd();
        let pesach = HebrewDate::new(year, HebrewMonth::Nissan, 15)?.to_rd();
        let shavuot = HebrewDate::new(year, HebrewMonth::Sivan, 6)?.to_rd();
        let av9 = HebrewDate::new(year, HebrewMonth::Av, 9)?.to_rd();

        let mut readings = HashMap::new();

        // Tishrei prefix: the portions left over from the previous cycle.
        // Shabbat Shuva reads Vayeilech when it was not already doubled with
        // Nitzavim before Rosh Hashana, which is the case for Monday and
        // Tuesday Rosh Hashana.
        let mut sat = rd_on_or_before(SATURDAY, rh + 6);
        let bereshit_sat = rd_on_or_before(SATURDAY, simchat_torah + 7);
        while sat < bereshit_sat {
            let tishrei_day = sat - rh + 1;
            match tishrei_day {
                3..=9 => {
                    let idx = if rh_weekday == 1 || rh_weekday == 2 {
                        51
                    } else {
                        52
                    };
                    readings.insert(sat, PARSHIYOT[idx].to_string());
                }
                11..=14 => {
                    readings.insert(sat, PARSHIYOT[52].to_string());
                }
                // Rosh Hashana, Yom Kippur, Sukkot and Shmini Atzeret take
                // festival readings; no weekly portion.
                _ => {}
            }
            sat += 7;
        }

        // Festival Shabbatot that displace the weekly portion for the rest
        // of the year: Pesach I..VIII and both days of Shavuot.
        let displaced =
            |rd: i64| (pesach..=pesach + 7).contains(&rd) || rd == shavuot || rd == shavuot + 1;

        // Count the Shabbatot available in each stretch of the cycle.
        let count_sats = |from: i64, to: i64| -> i64 {
            let mut n = 0;
            let mut s = rd_on_or_before(SATURDAY, from + 6);
            while s <= to {
                if !displaced(s) {
                    n += 1;
                }
                s += 7;
            }
            n
        };

        // Bereshit through the Shabbat before Pesach. One permitted double
        // (Vayakhel-Pekudei) absorbs the short non-leap years; the final
        // reading here lands on Tzav, Metzora or Achrei Mot.
        let seg1_slots = count_sats(bereshit_sat, pesach - 1);
        let (pre_pesach, double_vayakhel) = if seg1_slots >= 25 {
            (seg1_slots - 1, false)
        } else {
            (seg1_slots, true)
        };

        // Pesach through the Shabbat before Shavuot. Three permitted
        // doubles; in non-leap years all three fire so Bamidbar still
        // precedes Shavuot.
        let seg2_slots = count_sats(pesach + 8, shavuot - 1);
        let seg2_doubles = (33 - pre_pesach - seg2_slots).clamp(0, 3);
        let seg2_end = pre_pesach + seg2_slots + seg2_doubles;

        // Shavuot through Shabbat Chazon (Devarim, on or before 9 Av).
        // Matot-Masei doubles first; Chukat-Balak joins only when Shavuot II
        // lands on Shabbat and eats a slot.
        let chazon_sat = rd_on_or_before(SATURDAY, av9);
        let seg3_slots = count_sats(shavuot + 2, chazon_sat);
        let seg3_doubles = (43 - seg2_end - seg3_slots).clamp(0, 2);

        // Nitzavim-Vayeilech double whenever the coming year has no Shabbat
        // between Rosh Hashana and Yom Kippur free for Vayeilech, i.e. next
        // Rosh Hashana falls Thursday or Saturday.
        let next_rh_weekday = rh_next.rem_euclid(7);
        let double_nitzavim = next_rh_weekday == 4 || next_rh_weekday == 6;

        let mut doubled = [false; 53];
        doubled[21] = double_vayakhel;
        doubled[26] = seg2_doubles >= 1;
        doubled[28] = seg2_doubles >= 2;
        doubled[31] = seg2_doubles >= 3;
        doubled[41] = seg3_doubles >= 1;
        doubled[38] = seg3_doubles >= 2;
        doubled[50] = double_nitzavim;

        // Walk the Saturdays from Bereshit to the year's end.
        let mut pos: usize = 0;
        sat = bereshit_sat;
        while sat < rh_next && pos < 53 {
            if displaced(sat) {
                sat += 7;
                continue;
            }
            if doubled[pos] && pos + 1 < 53 {
                readings.insert(sat, format!("{}-{}", PARSHIYOT[pos], PARSHIYOT[pos + 1]));
                pos += 2;
            } else {
                readings.insert(sat, PARSHIYOT[pos].to_string());
                pos += 1;
            }
            sat += 7;
        }

        Ok(Self { year, readings })
    }

    pub fn year(&self) -> i64 {
        self.year
    }

    /// Reading for the Saturday with this Rata Die day number. `None` for
    /// festival Shabbatot and for days that are not Saturdays of this year.
    pub fn lookup(&self, rd: i64) -> Option<&str> {
        self.readings.get(&rd).map(String::as_str)
    }
}

/// Portion read on the Shabbat on or after `date`, if that Shabbat carries
/// a weekly portion rather than a festival reading.
///
/// # Errors
/// Returns `CalendarError::YearOutOfRange` if the date falls outside the
/// supported range.
pub fn parashat_for(date: NaiveDate) -> Result<Option<String>> {
    let sat = rd_on_or_before(SATURDAY, civil_to_rd(date) + 6);
    let year = HebrewDate::from_rd(sat)?.year();
    let sedra = Sedra::new(year)?;
    Ok(sedra.lookup(sat).map(str::to_string))
}
