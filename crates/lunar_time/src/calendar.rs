//! Calendar date/time as supplied by the caller.
//!
//! `CalendarDateTime` carries plain proleptic Gregorian fields with no
//! timezone. The caller decides which clock and offset the fields refer to.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::TimeError;
use crate::julian::{julian_date, julian_day_number};

/// Calendar date with whole-second time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarDateTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl CalendarDateTime {
    /// Build a validated date/time.
    ///
    /// Accepts month 1-12, day 1-31, hour 0-23, minute and second 0-59.
    /// Day is not checked against the month length.
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<Self, TimeError> {
        let dt = Self::new_unchecked(year, month, day, hour, minute, second);
        dt.validate()?;
        Ok(dt)
    }

    /// Build a date/time without range checks.
    pub const fn new_unchecked(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Midnight at the start of a calendar day, validated.
    pub fn date(year: i32, month: u32, day: u32) -> Result<Self, TimeError> {
        Self::new(year, month, day, 0, 0, 0)
    }

    /// Check every field against its accepted range.
    pub fn validate(&self) -> Result<(), TimeError> {
        check("month", self.month, 1, 12)?;
        check("day", self.day, 1, 31)?;
        check("hour", self.hour, 0, 23)?;
        check("minute", self.minute, 0, 59)?;
        check("second", self.second, 0, 59)
    }

    /// Julian Day Number of the calendar day.
    pub fn julian_day_number(&self) -> i64 {
        julian_day_number(self.month, self.day, self.year)
    }

    /// Julian Date of this instant.
    pub fn julian_date(&self) -> f64 {
        julian_date(self.julian_day_number(), self.hour, self.minute, self.second)
    }

    /// Julian Date of 12:00:00 on the following calendar day.
    ///
    /// This is the instant evaluated for "tonight's" moon: midnight GMT
    /// following the given day, on the half-day-shifted Julian axis.
    pub fn tonight(&self) -> f64 {
        julian_date(self.julian_day_number() + 1, 12, 0, 0)
    }

    /// `YYYY-MM-DD`, with a leading `-` and four year digits before year 0.
    pub fn date_string(&self) -> String {
        let year = if self.year < 0 {
            format!("-{:04}", self.year.unsigned_abs())
        } else {
            format!("{:04}", self.year)
        };
        format!("{year}-{:02}-{:02}", self.month, self.day)
    }
}

fn check(field: &'static str, value: u32, min: u32, max: u32) -> Result<(), TimeError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(TimeError::InvalidDateComponent { field, value })
    }
}

impl Display for CalendarDateTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}T{:02}:{:02}:{:02}",
            self.date_string(),
            self.hour,
            self.minute,
            self.second
        )
    }
}

impl CalendarDateTime {
    /// Parse without range checks.
    ///
    /// Accepts `YYYY-MM-DD`, `YYYY-MM-DDThh:mm:ss` and an optional trailing
    /// `Z`. A leading `-` marks a BCE (astronomical) year.
    pub fn parse_unchecked(s: &str) -> Result<Self, TimeError> {
        let s = s.trim().trim_end_matches('Z');
        let (date, time) = match s.split_once('T') {
            Some((d, t)) => (d, Some(t)),
            None => (s, None),
        };

        let (negative, date) = match date.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, date),
        };
        let date_parts: Vec<&str> = date.split('-').collect();
        if date_parts.len() != 3 {
            return Err(TimeError::Parse(format!("expected YYYY-MM-DD, got {s}")));
        }
        let year: i32 = date_parts[0].parse()?;
        let year = if negative { -year } else { year };
        let month: u32 = date_parts[1].parse()?;
        let day: u32 = date_parts[2].parse()?;

        let (hour, minute, second): (u32, u32, u32) = match time {
            None => (0, 0, 0),
            Some(t) => {
                let time_parts: Vec<&str> = t.split(':').collect();
                if time_parts.len() != 3 {
                    return Err(TimeError::Parse(format!("expected hh:mm:ss, got {t}")));
                }
                (
                    time_parts[0].parse()?,
                    time_parts[1].parse()?,
                    time_parts[2].parse()?,
                )
            }
        };

        Ok(Self::new_unchecked(year, month, day, hour, minute, second))
    }
}

impl FromStr for CalendarDateTime {
    type Err = TimeError;

    /// Parse and validate. See [`CalendarDateTime::parse_unchecked`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let dt = Self::parse_unchecked(s)?;
        dt.validate()?;
        Ok(dt)
    }
}
