//! Gregorian calendar → Julian Day Number → Julian Date.
//!
//! Uses the civil-calendar JDN formula anchored at March 1, 4801 BCE
//! (proleptic Gregorian). Counting from March puts the leap day at the end
//! of the "year", so the month lengths repeat in groups of five and can be
//! summed with `(153m + 2) / 5`.
//!
//! Every division here is a floor division. Real division silently corrupts
//! the result for some month/year combinations.

/// Hours in a day.
pub const HOURS_PER_DAY: f64 = 24.0;

/// Minutes in a day.
pub const MINUTES_PER_DAY: f64 = 1440.0;

/// Seconds in a day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Days between the March 1, 4801 BCE anchor and the Julian epoch.
const ANCHOR_OFFSET_DAYS: i64 = 32_045;

/// Julian Day Number of a proleptic Gregorian calendar date.
///
/// No range checks: out-of-range fields give a meaningless but finite result.
/// The formula is linear in `day`, so `day + 1` past the end of a month lands
/// on the first of the next month.
pub fn julian_day_number(month: u32, day: u32, year: i32) -> i64 {
    let month = i64::from(month);
    let day = i64::from(day);
    let year = i64::from(year);

    // 1 for January/February, 0 otherwise
    let a = (14 - month).div_euclid(12);
    let y = year + 4800 - a;
    let m = month + 12 * a - 3;

    let days_since_march = (153 * m + 2).div_euclid(5);
    let leap_days = y.div_euclid(4) - y.div_euclid(100) + y.div_euclid(400);

    day + days_since_march + 365 * y + leap_days - ANCHOR_OFFSET_DAYS
}

/// Julian Date from a Julian Day Number plus a time of day.
pub fn julian_date(jdn: i64, hour: u32, minute: u32, second: u32) -> f64 {
    jdn as f64
        + f64::from(hour) / HOURS_PER_DAY
        + f64::from(minute) / MINUTES_PER_DAY
        + f64::from(second) / SECONDS_PER_DAY
}

/// Julian Date of a Gregorian calendar date and time.
pub fn gregorian_to_julian_date(
    month: u32,
    day: u32,
    year: i32,
    hour: u32,
    minute: u32,
    second: u32,
) -> f64 {
    julian_date(julian_day_number(month, day, year), hour, minute, second)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jdn_epoch_new_moon_day() {
        assert_eq!(julian_day_number(1, 6, 2000), 2_451_550);
    }

    #[test]
    fn jdn_unix_epoch() {
        assert_eq!(julian_day_number(1, 1, 1970), 2_440_588);
    }

    #[test]
    fn jdn_gregorian_reform() {
        // 1582-10-15, first day of the Gregorian calendar
        assert_eq!(julian_day_number(10, 15, 1582), 2_299_161);
    }

    #[test]
    fn jdn_leap_day() {
        let feb29 = julian_day_number(2, 29, 2024);
        let mar1 = julian_day_number(3, 1, 2024);
        assert_eq!(mar1 - feb29, 1);
    }

    #[test]
    fn jdn_century_non_leap() {
        // 1900 is not a leap year: Feb 28 → Mar 1 is one day
        let feb28 = julian_day_number(2, 28, 1900);
        let mar1 = julian_day_number(3, 1, 1900);
        assert_eq!(mar1 - feb28, 1);
    }

    #[test]
    fn jdn_year_lengths() {
        assert_eq!(julian_day_number(1, 1, 2001) - julian_day_number(1, 1, 2000), 366);
        assert_eq!(julian_day_number(1, 1, 2002) - julian_day_number(1, 1, 2001), 365);
    }

    #[test]
    fn jdn_day_overflow_rolls_into_next_month() {
        assert_eq!(julian_day_number(1, 32, 2024), julian_day_number(2, 1, 2024));
        assert_eq!(julian_day_number(12, 32, 2023), julian_day_number(1, 1, 2024));
    }

    #[test]
    fn jdn_proleptic_start_of_julian_period() {
        // Proleptic Gregorian -4713-11-24 is JDN 0
        assert_eq!(julian_day_number(11, 24, -4713), 0);
    }

    #[test]
    fn jdn_before_anchor_uses_floor_division() {
        // Year -4801 makes y negative; consecutive days must stay consecutive
        let d1 = julian_day_number(6, 1, -4801);
        let d2 = julian_day_number(6, 2, -4801);
        assert_eq!(d2 - d1, 1);
        assert_eq!(julian_day_number(1, 1, -4800) - julian_day_number(1, 1, -4801), 365);
    }

    #[test]
    fn julian_date_noon_is_half_day() {
        let jdn = 2_451_550;
        assert_eq!(julian_date(jdn, 12, 0, 0), jdn as f64 + 0.5);
    }

    #[test]
    fn julian_date_fractions() {
        let jd = julian_date(0, 6, 30, 36);
        let expected = 0.25 + 30.0 / 1440.0 + 36.0 / 86_400.0;
        assert!((jd - expected).abs() < 1e-15);
    }

    #[test]
    fn gregorian_composition() {
        let jd = gregorian_to_julian_date(1, 6, 2000, 12, 0, 0);
        assert_eq!(jd, 2_451_550.5);
    }
}
