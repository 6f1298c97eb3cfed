//! Holiday table for a Hebrew year, following the Diaspora scheme
//! (two-day festivals, Shushan Purim, fast postponements off Shabbat).

use crate::error::Result;
use crate::event::{Event, EventCategory};
use crate::hdate::{
    days_in_month, is_leap_year, month_name, rd_to_civil, rd_weekday, year_months, HebrewDate,
    HebrewMonth,
};

use EventCategory::{Fast, Holiday, Major, Minor, Modern, RoshChodesh};

const SATURDAY: i64 = 6;
const HOLIDAY_URL_BASE: &str = "https://www.hebcal.com/holidays";

fn event(rd: i64, name: impl Into<String>, categories: &[EventCategory]) -> Result<Event> {
    let hebrew = HebrewDate::from_rd(rd)?;
    Ok(Event::new(
        name,
        rd_to_civil(rd),
        hebrew,
        categories.to_vec(),
    ))
}

/// Minor fasts move off Shabbat: Gedaliah and Tammuz slide to Sunday,
/// Esther pulls back to the preceding Thursday.
fn off_shabbat_forward(rd: i64) -> i64 {
    if rd_weekday(rd) == SATURDAY {
        rd + 1
    } else {
        rd
    }
}

fn off_shabbat_back_to_thursday(rd: i64) -> i64 {
    if rd_weekday(rd) == SATURDAY {
        rd - 2
    } else {
        rd
    }
}

/// All holidays, fasts, modern observances and Rosh Chodesh days of one
/// Hebrew year, in calendar order.
///
/// # Errors
/// Returns `CalendarError::YearOutOfRange` if the year falls outside the
/// supported range.
pub fn holidays_for(year: i64) -> Result<Vec<Event>> {
    let rd_of = |month: HebrewMonth, day: u32| -> Result<i64> {
        Ok(HebrewDate::new(year, month, day)?.to_rd())
    };
    let mut events: Vec<Event> = Vec::new();

    // --- Tishrei ---
    events.push(
        event(
            rd_of(HebrewMonth::Tishrei, 1)?,
            format!("Rosh Hashana {}", year),
            &[Holiday, Major],
        )?
        .with_memo("The Jewish New Year")
        .with_url(format!("{}/rosh-hashana", HOLIDAY_URL_BASE)),
    );
    events.push(
        event(rd_of(HebrewMonth::Tishrei, 2)?, "Rosh Hashana II", &[Holiday, Major])?
            .with_memo("The Jewish New Year")
            .with_url(format!("{}/rosh-hashana", HOLIDAY_URL_BASE)),
    );
    events.push(event(
        off_shabbat_forward(rd_of(HebrewMonth::Tishrei, 3)?),
        "Tzom Gedaliah",
        &[Fast],
    )?);
    events.push(event(
        rd_of(HebrewMonth::Tishrei, 9)?,
        "Erev Yom Kippur",
        &[Holiday, Minor],
    )?);
    events.push(
        event(rd_of(HebrewMonth::Tishrei, 10)?, "Yom Kippur", &[Holiday, Major, Fast])?
            .with_memo("Day of Atonement")
            .with_url(format!("{}/yom-kippur", HOLIDAY_URL_BASE)),
    );
    events.push(event(
        rd_of(HebrewMonth::Tishrei, 14)?,
        "Erev Sukkot",
        &[Holiday, Minor],
    )?);
    events.push(
        event(rd_of(HebrewMonth::Tishrei, 15)?, "Sukkot I", &[Holiday, Major])?
            .with_memo("Feast of Tabernacles")
            .with_url(format!("{}/sukkot", HOLIDAY_URL_BASE)),
    );
    events.push(
        event(rd_of(HebrewMonth::Tishrei, 16)?, "Sukkot II", &[Holiday, Major])?
            .with_memo("Feast of Tabernacles")
            .with_url(format!("{}/sukkot", HOLIDAY_URL_BASE)),
    );
    for (i, roman) in ["III", "IV", "V", "VI"].iter().enumerate() {
        events.push(event(
            rd_of(HebrewMonth::Tishrei, 17 + i as u32)?,
            format!("Sukkot {} (CH''M)", roman),
            &[Holiday, Minor],
        )?);
    }
    events.push(event(
        rd_of(HebrewMonth::Tishrei, 21)?,
        "Sukkot VII (Hoshana Raba)",
        &[Holiday, Minor],
    )?);
    events.push(
        event(rd_of(HebrewMonth::Tishrei, 22)?, "Shmini Atzeret", &[Holiday, Major])?
            .with_memo("Eighth Day of Assembly")
            .with_url(format!("{}/shmini-atzeret", HOLIDAY_URL_BASE)),
    );
    events.push(
        event(rd_of(HebrewMonth::Tishrei, 23)?, "Simchat Torah", &[Holiday, Major])?
            .with_memo("Rejoicing of the Torah")
            .with_url(format!("{}/simchat-torah", HOLIDAY_URL_BASE)),
    );

    // --- Kislev / Tevet ---
    // Chanukah runs eight days from 25 Kislev; short Kislev years roll the
    // tail into Tevet, which from_rd resolves on its own.
    let chanukah_start = rd_of(HebrewMonth::Kislev, 25)?;
    for day in 0..8i64 {
        events.push(
            event(
                chanukah_start + day,
                format!("Chanukah: Day {}", day + 1),
                &[Holiday, Minor],
            )?
            .with_memo("The Festival of Lights")
            .with_url(format!("{}/chanukah", HOLIDAY_URL_BASE)),
        );
    }
    events.push(event(
        rd_of(HebrewMonth::Tevet, 10)?,
        "Asara B'Tevet",
        &[Fast],
    )?);

    // --- Shvat / Adar ---
    events.push(
        event(rd_of(HebrewMonth::Shvat, 15)?, "Tu BiShvat", &[Holiday, Minor])?
            .with_memo("New Year for Trees")
            .with_url(format!("{}/tu-bishvat", HOLIDAY_URL_BASE)),
    );
    let purim_month = if is_leap_year(year) {
        HebrewMonth::Adar2
    } else {
        HebrewMonth::Adar1
    };
    if is_leap_year(year) {
        events.push(event(
            rd_of(HebrewMonth::Adar1, 14)?,
            "Purim Katan",
            &[Holiday, Minor],
        )?);
    }
    events.push(event(
        off_shabbat_back_to_thursday(rd_of(purim_month, 13)?),
        "Ta'anit Esther",
        &[Fast],
    )?);
    events.push(
        event(rd_of(purim_month, 14)?, "Purim", &[Holiday, Minor])?
            .with_memo("Celebration of deliverance from the plot of Haman")
            .with_url(format!("{}/purim", HOLIDAY_URL_BASE)),
    );
    events.push(event(
        rd_of(purim_month, 15)?,
        "Shushan Purim",
        &[Holiday, Minor],
    )?);

    // --- Nissan ---
    events.push(event(
        rd_of(HebrewMonth::Nissan, 14)?,
        "Erev Passover",
        &[Holiday, Minor],
    )?);
    events.push(
        event(rd_of(HebrewMonth::Nissan, 15)?, "Passover I", &[Holiday, Major])?
            .with_memo("Festival of freedom commemorating the Exodus from Egypt")
            .with_url(format!("{}/pesach", HOLIDAY_URL_BASE)),
    );
    events.push(
        event(rd_of(HebrewMonth::Nissan, 16)?, "Passover II", &[Holiday, Major])?
            .with_memo("Festival of freedom commemorating the Exodus from Egypt")
            .with_url(format!("{}/pesach", HOLIDAY_URL_BASE)),
    );
    for (i, roman) in ["III", "IV", "V", "VI"].iter().enumerate() {
        events.push(event(
            rd_of(HebrewMonth::Nissan, 17 + i as u32)?,
            format!("Passover {} (CH''M)", roman),
            &[Holiday, Minor],
        )?);
    }
    events.push(
        event(rd_of(HebrewMonth::Nissan, 21)?, "Passover VII", &[Holiday, Major])?
            .with_url(format!("{}/pesach", HOLIDAY_URL_BASE)),
    );
    events.push(
        event(rd_of(HebrewMonth::Nissan, 22)?, "Passover VIII", &[Holiday, Major])?
            .with_url(format!("{}/pesach", HOLIDAY_URL_BASE)),
    );

    // --- Modern observances ---
    if year >= 5711 {
        // 27 Nissan; a Friday start pulls back to Thursday, a Sunday start
        // defers to Monday (Knesset rule).
        let mut shoah = rd_of(HebrewMonth::Nissan, 27)?;
        match rd_weekday(shoah) {
            5 => shoah -= 1,
            0 => shoah += 1,
            _ => {}
        }
        events.push(event(shoah, "Yom HaShoah", &[Modern])?.with_memo("Holocaust Remembrance Day"));
    }
    if year >= 5708 {
        // 5 Iyyar, pulled back to Thursday when it lands Friday or Shabbat;
        // since 2004 a Monday observance defers to Tuesday.
        let base = rd_of(HebrewMonth::Iyyar, 5)?;
        let atzmaut = match rd_weekday(base) {
            5 => base - 1,
            6 => base - 2,
            1 if year >= 5764 => base + 1,
            _ => base,
        };
        events.push(
            event(atzmaut - 1, "Yom HaZikaron", &[Modern])?.with_memo("Israeli Memorial Day"),
        );
        events.push(
            event(atzmaut, "Yom HaAtzmaut", &[Modern])?
                .with_memo("Israeli Independence Day")
                .with_url(format!("{}/yom-haatzmaut", HOLIDAY_URL_BASE)),
        );
    }
    if year >= 5727 {
        events.push(
            event(rd_of(HebrewMonth::Iyyar, 28)?, "Yom Yerushalayim", &[Modern])?
                .with_memo("Jerusalem Day"),
        );
    }

    // --- Iyyar / Sivan ---
    events.push(event(
        rd_of(HebrewMonth::Iyyar, 14)?,
        "Pesach Sheni",
        &[Holiday, Minor],
    )?);
    events.push(
        event(rd_of(HebrewMonth::Iyyar, 18)?, "Lag BaOmer", &[Holiday, Minor])?
            .with_memo("33rd day of the Omer count")
            .with_url(format!("{}/lag-baomer", HOLIDAY_URL_BASE)),
    );
    events.push(event(
        rd_of(HebrewMonth::Sivan, 5)?,
        "Erev Shavuot",
        &[Holiday, Minor],
    )?);
    events.push(
        event(rd_of(HebrewMonth::Sivan, 6)?, "Shavuot I", &[Holiday, Major])?
            .with_memo("Festival of Weeks, commemorating the giving of the Torah")
            .with_url(format!("{}/shavuot", HOLIDAY_URL_BASE)),
    );
    events.push(
        event(rd_of(HebrewMonth::Sivan, 7)?, "Shavuot II", &[Holiday, Major])?
            .with_memo("Festival of Weeks, commemorating the giving of the Torah")
            .with_url(format!("{}/shavuot", HOLIDAY_URL_BASE)),
    );

    // --- Tammuz / Av / Elul ---
    events.push(event(
        off_shabbat_forward(rd_of(HebrewMonth::Tammuz, 17)?),
        "Tzom Tammuz",
        &[Fast],
    )?);
    events.push(
        event(
            off_shabbat_forward(rd_of(HebrewMonth::Av, 9)?),
            "Tisha B'Av",
            &[Fast],
        )?
        .with_memo("Fast commemorating the destruction of the two Temples")
        .with_url(format!("{}/tisha-bav", HOLIDAY_URL_BASE)),
    );
    events.push(event(
        rd_of(HebrewMonth::Av, 15)?,
        "Tu B'Av",
        &[Holiday, Minor],
    )?);
    events.push(event(
        rd_of(HebrewMonth::Elul, 29)?,
        "Erev Rosh Hashana",
        &[Holiday, Minor],
    )?);

    // --- Rosh Chodesh ---
    // Day 1 of every month except Tishrei, plus day 30 of the preceding
    // month when it has one.
    let months = year_months(year);
    for (i, month) in months.iter().enumerate() {
        if *month == HebrewMonth::Tishrei {
            continue;
        }
        let name = format!("Rosh Chodesh {}", month_name(*month, year));
        events.push(event(rd_of(*month, 1)?, name.clone(), &[RoshChodesh])?);
        let prev = months[i - 1];
        if days_in_month(prev, year) == 30 {
            events.push(event(rd_of(prev, 30)?, name, &[RoshChodesh])?);
        }
    }

    events.sort_by_key(Event::rd);
    Ok(events)
}
