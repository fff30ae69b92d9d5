//! Calendar date handling and Julian Date conversion.
//!
//! This crate provides:
//! - Proleptic Gregorian → Julian Day Number (integer floor arithmetic)
//! - Julian Day Number + time of day → Julian Date
//! - `CalendarDateTime`, a validated, parseable date/time value

pub mod calendar;
pub mod error;
pub mod julian;

pub use calendar::CalendarDateTime;
pub use error::TimeError;
pub use julian::{
    HOURS_PER_DAY, MINUTES_PER_DAY, SECONDS_PER_DAY, gregorian_to_julian_date, julian_date,
    julian_day_number,
};
