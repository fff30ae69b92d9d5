//! Lunar phase classification from calendar dates.
//!
//! This crate provides:
//! - Julian Date → phase bucket (0-8) using the mean synodic month
//! - Phase names and icon keys, with New Moon as the fallback
//! - Calendar-level helpers, including "tonight" (noon of the next day)
//!
//! # Quick start
//!
//! ```
//! use lunar_phase::{PhaseWrap, phase_on};
//! use lunar_time::CalendarDateTime;
//!
//! let dt: CalendarDateTime = "2000-01-20T12:00:00".parse().unwrap();
//! let info = phase_on(&dt, PhaseWrap::SingleCycle);
//! assert_eq!(info.name(), "Full Moon");
//! ```

pub mod classify;
pub mod phase;
pub mod phase_types;

pub use classify::{
    EPOCH_NEW_MOON, FALLBACK_BUCKET, PHASE_BOUNDARIES, SYNODIC_MONTH, bucket_from_offset,
    cycle_offset, phase_from_julian_date, phase_from_julian_date_with, phase_info, phase_on,
    phase_tonight,
};
pub use phase::{ALL_PHASES, LunarPhase, phase_icon_key, phase_name};
pub use phase_types::{PhaseInfo, PhaseWrap};

// Re-export the conversion entry points so callers need only this crate.
pub use lunar_time::{CalendarDateTime, gregorian_to_julian_date};
