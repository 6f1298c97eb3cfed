//! `luach` CLI -- query the Hebrew calendar tools from the command line.
//!
//! A stand-in for the LLM tool-calling harness: every subcommand goes through
//! the same dispatch boundary the harness uses and prints the JSON it would
//! receive. Negative outcomes (`found: false`, `success: false`) are data,
//! not process failures, and exit 0.
//!
//! ## Usage
//!
//! ```sh
//! # Current timestamp, as the harness sees it
//! luach today
//!
//! # Convert a civil date to the Hebrew calendar
//! luach convert 2024-10-03
//!
//! # Convert a Hebrew date back (quote multi-word dates)
//! luach convert --from hebrew "15 Nissan 5784"
//!
//! # Find a holiday with nearby candle lighting and havdalah times
//! luach find 2024 Passover
//!
//! # List every holiday in a civil year
//! luach list 2024
//!
//! # Print the tool catalog handed to the harness
//! luach tools
//!
//! # Compute zmanim for a different location
//! luach find 2024 "Rosh Hashana" --place Jerusalem --latitude 31.7683 \
//!   --longitude 35.2137 --timezone Asia/Jerusalem
//! ```

use anyhow::{Context, Result};
use chrono_tz::Tz;
use clap::{Args, Parser, Subcommand};
use luach_core::Location;
use serde_json::{json, Value};

#[derive(Parser)]
#[command(name = "luach", version, about = "Hebrew calendar query tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the current date and time (RFC 3339)
    Today,
    /// Convert a date between the Gregorian and Hebrew calendars
    Convert {
        /// The date: ISO `YYYY-MM-DD`, numeric `day/month/year`, or free text
        /// like "15 Nissan 5784"
        date: String,
        /// Calendar the input date is expressed in
        #[arg(long, value_parser = ["gregorian", "hebrew"], default_value = "gregorian")]
        from: String,
    },
    /// Find a holiday by name within a civil year
    Find {
        /// Civil year to search
        year: i32,
        /// Holiday name or fragment (quote multi-word names)
        name: String,
        #[command(flatten)]
        location: LocationArgs,
    },
    /// List all holidays in a civil year
    List {
        /// Civil year to enumerate
        year: i32,
        #[command(flatten)]
        location: LocationArgs,
    },
    /// Print the tool catalog handed to the LLM harness
    Tools,
}

/// Location override for candle lighting and havdalah computation.
#[derive(Args)]
struct LocationArgs {
    /// Place name attached to results
    #[arg(long, default_value = "New York")]
    place: String,
    /// Latitude in decimal degrees, north positive
    #[arg(long, default_value_t = 40.7128, allow_negative_numbers = true)]
    latitude: f64,
    /// Longitude in decimal degrees, east positive
    #[arg(long, default_value_t = -74.0060, allow_negative_numbers = true)]
    longitude: f64,
    /// IANA timezone name
    #[arg(long, default_value = "America/New_York")]
    timezone: String,
}

impl LocationArgs {
    fn resolve(&self) -> Result<Location> {
        let tz: Tz = self
            .timezone
            .parse()
            .map_err(|_| anyhow::anyhow!("Unknown timezone: '{}'", self.timezone))?;
        Ok(Location::new(
            self.place.clone(),
            self.latitude,
            self.longitude,
            tz,
        ))
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Today => println!("{}", luach_tools::todays_date()),
        Commands::Convert { date, from } => {
            let args = json!({ "inputDate": date, "fromCalendar": from });
            print_json(&luach_tools::dispatch("convertDate", &args))?;
        }
        Commands::Find {
            year,
            name,
            location,
        } => {
            let place = location.resolve()?;
            let args = json!({ "year": year, "holidayName": name });
            print_json(&luach_tools::dispatch_with_location(
                "findJewishHoliday",
                &args,
                &place,
            ))?;
        }
        Commands::List { year, location } => {
            let place = location.resolve()?;
            let args = json!({ "year": year });
            print_json(&luach_tools::dispatch_with_location(
                "listJewishHolidays",
                &args,
                &place,
            ))?;
        }
        Commands::Tools => {
            let catalog = serde_json::to_value(luach_tools::descriptors())
                .context("Failed to serialize the tool catalog")?;
            print_json(&catalog)?;
        }
    }

    Ok(())
}

/// Pretty-print a JSON value to stdout.
fn print_json(value: &Value) -> Result<()> {
    let pretty = serde_json::to_string_pretty(value).context("Failed to render JSON output")?;
    println!("{}", pretty);
    Ok(())
}
