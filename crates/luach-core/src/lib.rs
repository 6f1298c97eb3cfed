//! # luach-core
//!
//! Hebrew calendar arithmetic, holidays, Torah readings, and halachic times.
//!
//! Luach-core provides the deterministic calendar mathematics that LLMs
//! cannot reliably perform via inference: the fixed Hebrew calendar with
//! its Metonic leap cycle and postponement rules, the Diaspora holiday
//! scheme, the weekly Torah reading cycle, and solar-anchored candle
//! lighting and havdalah times via `chrono-tz`.
//!
//! ## Modules
//!
//! - [`hdate`] -- civil date <-> Hebrew date conversions over Rata Die days
//! - [`holidays`] -- holiday, fast and Rosh Chodesh table per Hebrew year
//! - [`calendar`] -- civil-year event enumeration with optional streams
//! - [`sedra`] -- weekly Torah reading schedule (Diaspora cycle)
//! - [`molad`] -- mean lunar conjunction announcements
//! - [`zmanim`] -- sunrise, sunset and the times derived from them
//! - [`event`] -- event and option types shared by the streams
//! - [`location`] -- observer locations for timed events
//! - [`error`] -- error types

pub mod calendar;
pub mod error;
pub mod event;
pub mod hdate;
pub mod holidays;
pub mod location;
pub mod molad;
pub mod sedra;
pub mod zmanim;

pub use calendar::calendar;
pub use error::CalendarError;
pub use event::{CalendarOptions, Event, EventCategory};
pub use hdate::{is_leap_year, HebrewDate, HebrewMonth};
pub use location::Location;
pub use molad::Molad;
pub use sedra::{parashat_for, Sedra};
