//! `Date` type.
//!
//! Dates are represented as a serial number of days since an epoch, plus a
//! second-of-day component.  The epoch is **December 31, 1800** (serial 1 =
//! January 1, 1801), chosen so that every historical validity window of the
//! French holiday rules (the earliest starts in 1802) is representable.
//!
//! # Serial number convention
//! * Serial 1 = January 1, 1801.
//! * The valid date range is 1801-01-01 to 2399-12-31.
//! * The proleptic Gregorian leap rules apply over the whole range.
//!
//! Arithmetic operates at day resolution and preserves the time-of-day;
//! [`Date::midnight`] clears it and [`Date::end_of_day`] sets 23:59:59 (the
//! expiry time of a jour-franc deadline).  `==` compares the full timestamp;
//! [`Date::same_day`] compares by calendar value only.

use crate::weekday::Weekday;
use jf_core::errors::{Error, Result};

/// Number of seconds in a day.
const SECONDS_PER_DAY: u32 = 86_400;

/// A calendar date with a second-of-day component.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date {
    /// Days since the epoch (serial 1 = 1801-01-01).
    serial: i32,
    /// Seconds since midnight (0 ..= 86_399).
    second_of_day: u32,
}

impl Date {
    /// First representable year.
    pub const MIN_YEAR: u16 = 1801;

    /// Last representable year.
    pub const MAX_YEAR: u16 = 2399;

    /// Serial of the minimum valid date, January 1, 1801.
    const MIN_SERIAL: i32 = 1;

    /// Serial of the maximum valid date, December 31, 2399.
    const MAX_SERIAL: i32 = 218_780;

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date at midnight from year, month (1–12), and day-of-month.
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        if !(Self::MIN_YEAR..=Self::MAX_YEAR).contains(&year) {
            return Err(Error::Date(format!(
                "year {year} out of range [{}, {}]",
                Self::MIN_YEAR,
                Self::MAX_YEAR
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {days_in}] for {year}-{month:02}"
            )));
        }
        Ok(Date {
            serial: serial_from_ymd(year, month, day),
            second_of_day: 0,
        })
    }

    /// Create a date with a time-of-day.
    pub fn from_ymd_hms(year: u16, month: u8, day: u8, h: u8, m: u8, s: u8) -> Result<Self> {
        if h >= 24 || m >= 60 || s >= 60 {
            return Err(Error::Date(format!(
                "time {h:02}:{m:02}:{s:02} out of range"
            )));
        }
        let date = Self::from_ymd(year, month, day)?;
        Ok(Date {
            second_of_day: u32::from(h) * 3600 + u32::from(m) * 60 + u32::from(s),
            ..date
        })
    }

    /// Create a date at midnight from a serial number.
    ///
    /// Returns an error if `serial` is outside the valid range.
    pub fn from_serial(serial: i32) -> Result<Self> {
        if !(Self::MIN_SERIAL..=Self::MAX_SERIAL).contains(&serial) {
            return Err(Error::Date(format!(
                "serial {serial} out of range [{}, {}]",
                Self::MIN_SERIAL,
                Self::MAX_SERIAL
            )));
        }
        Ok(Date {
            serial,
            second_of_day: 0,
        })
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(&self) -> i32 {
        self.serial
    }

    /// Return the year (1801–2399).
    pub fn year(&self) -> u16 {
        ymd_from_serial(self.serial).0
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        ymd_from_serial(self.serial).1
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        ymd_from_serial(self.serial).2
    }

    /// Return the weekday (ISO numbering).
    pub fn weekday(&self) -> Weekday {
        // Serial 1 (1801-01-01) is a Thursday (ordinal 4).
        let w = ((self.serial + 2).rem_euclid(7) + 1) as u8;
        Weekday::from_ordinal(w).expect("rem_euclid always in 1..=7")
    }

    /// Return the seconds elapsed since midnight (0 ..= 86_399).
    pub fn second_of_day(&self) -> u32 {
        self.second_of_day
    }

    /// Return the time-of-day as (hour, minute, second).
    pub fn hms(&self) -> (u8, u8, u8) {
        let h = self.second_of_day / 3600;
        let m = (self.second_of_day % 3600) / 60;
        let s = self.second_of_day % 60;
        (h as u8, m as u8, s as u8)
    }

    // ── Normalization ─────────────────────────────────────────────────────────

    /// Return the same calendar day with the time-of-day cleared to midnight.
    pub fn midnight(self) -> Self {
        Date {
            second_of_day: 0,
            ..self
        }
    }

    /// Return the same calendar day at 23:59:59.
    pub fn end_of_day(self) -> Self {
        Date {
            second_of_day: SECONDS_PER_DAY - 1,
            ..self
        }
    }

    /// Return `true` if `self` and `other` fall on the same calendar day,
    /// ignoring the time-of-day.
    pub fn same_day(&self, other: Date) -> bool {
        self.serial == other.serial
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days (backwards if negative), preserving the
    /// time-of-day.  Returns an error if the result is out of range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        let serial = self.serial + n;
        if !(Self::MIN_SERIAL..=Self::MAX_SERIAL).contains(&serial) {
            return Err(Error::Date(format!(
                "date arithmetic: result serial {serial} out of range"
            )));
        }
        Ok(Date { serial, ..self })
    }

    /// Return the number of calendar days between `self` and `other`.
    /// Positive if `other > self`.
    pub fn days_between(self, other: Date) -> i32 {
        other.serial - self.serial
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Add<i32> for Date {
    type Output = Self;
    fn add(self, rhs: i32) -> Self {
        self.add_days(rhs).expect("date addition overflow")
    }
}

impl std::ops::Sub<i32> for Date {
    type Output = Self;
    fn sub(self, rhs: i32) -> Self {
        self.add_days(-rhs).expect("date subtraction underflow")
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.serial - rhs.serial
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.serial);
        write!(f, "{y:04}-{m:02}-{d:02}")?;
        if self.second_of_day != 0 {
            let (h, min, s) = self.hms();
            write!(f, " {h:02}:{min:02}:{s:02}")?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({})", self)
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year (Gregorian rules).
pub fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => unreachable!(),
    }
}

/// Number of leap years in [1, year].
fn leap_years_through(year: i32) -> i32 {
    year / 4 - year / 100 + year / 400
}

/// Convert (year, month, day) to a serial number (serial 1 = 1801-01-01).
fn serial_from_ymd(year: u16, month: u8, day: u8) -> i32 {
    let y = i32::from(year);
    let m = usize::from(month);

    // Days in years 1801..year
    let mut serial = (y - 1801) * 365;
    // Leap years in [1801, year)
    serial += leap_years_through(y - 1) - leap_years_through(1800);
    // Days in months 1..month of the current year
    serial += i32::from(MONTH_OFFSET[m - 1]);
    if month > 2 && is_leap_year(year) {
        serial += 1;
    }
    serial + i32::from(day)
}

/// Decompose a serial number into (year, month, day).
fn ymd_from_serial(serial: i32) -> (u16, u8, u8) {
    // Estimate year, then adjust until serial falls within it
    let mut y = (serial / 365 + 1801) as u16;
    loop {
        if serial < serial_from_ymd(y, 1, 1) {
            y -= 1;
        } else if y < Date::MAX_YEAR && serial >= serial_from_ymd(y + 1, 1, 1) {
            y += 1;
        } else {
            break;
        }
    }
    let doy = serial - serial_from_ymd(y, 1, 1) + 1; // 1-based
    let mut m = 1u8;
    let mut remaining = doy;
    loop {
        let days = i32::from(days_in_month(y, m));
        if remaining <= days {
            break;
        }
        remaining -= days;
        m += 1;
    }
    (y, m, remaining as u8)
}

/// Cumulative day-of-year offset at the start of each month (non-leap).
const MONTH_OFFSET: [u16; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn epoch() {
        let d = Date::from_ymd(1801, 1, 1).unwrap();
        assert_eq!(d.serial(), 1);
        assert_eq!(d.weekday(), Weekday::Thursday);
    }

    #[test]
    fn max_date() {
        let d = Date::from_ymd(2399, 12, 31).unwrap();
        assert_eq!(d.serial(), Date::MAX_SERIAL);
        assert!(d.add_days(1).is_err());
    }

    #[test]
    fn ymd_roundtrip() {
        let dates = [
            (1801, 1, 1),
            (1802, 8, 15),
            (1900, 2, 28), // non-leap century
            (2000, 2, 29), // leap century
            (2017, 12, 20),
            (2399, 12, 31),
        ];
        for (y, m, d) in dates {
            let date = Date::from_ymd(y, m, d).unwrap();
            assert_eq!(date.year(), y, "year mismatch for {y}-{m:02}-{d:02}");
            assert_eq!(date.month(), m, "month mismatch for {y}-{m:02}-{d:02}");
            assert_eq!(date.day_of_month(), d, "day mismatch for {y}-{m:02}-{d:02}");
        }
    }

    #[test]
    fn weekdays() {
        // 2024-01-01 is a Monday
        assert_eq!(Date::from_ymd(2024, 1, 1).unwrap().weekday(), Weekday::Monday);
        // 2017-12-20 is a Wednesday
        assert_eq!(
            Date::from_ymd(2017, 12, 20).unwrap().weekday(),
            Weekday::Wednesday
        );
        // 2020-12-19 is a Saturday
        assert_eq!(
            Date::from_ymd(2020, 12, 19).unwrap().weekday(),
            Weekday::Saturday
        );
    }

    #[test]
    fn invalid_components() {
        assert!(Date::from_ymd(1800, 12, 31).is_err());
        assert!(Date::from_ymd(2400, 1, 1).is_err());
        assert!(Date::from_ymd(2023, 13, 1).is_err());
        assert!(Date::from_ymd(2023, 2, 29).is_err());
        assert!(Date::from_ymd_hms(2023, 1, 1, 24, 0, 0).is_err());
    }

    #[test]
    fn time_of_day() {
        let d = Date::from_ymd_hms(2020, 12, 28, 23, 59, 59).unwrap();
        assert_eq!(d.hms(), (23, 59, 59));
        let midnight = d.midnight();
        assert_eq!(midnight.second_of_day(), 0);
        assert_ne!(d, midnight);
        assert!(d.same_day(midnight));
        assert_eq!(midnight.end_of_day(), d);
    }

    #[test]
    fn arithmetic_preserves_time() {
        let d = Date::from_ymd_hms(2019, 12, 25, 12, 0, 0).unwrap();
        let next = d.add_days(7).unwrap();
        assert_eq!(next.hms(), (12, 0, 0));
        assert_eq!(next.day_of_month(), 1);
        assert_eq!(next.month(), 1);
        assert_eq!(next.year(), 2020);
    }

    #[test]
    fn operators() {
        let d = Date::from_ymd(2017, 12, 20).unwrap();
        assert_eq!(d + 10, Date::from_ymd(2017, 12, 30).unwrap());
        assert_eq!((d + 10) - d, 10);
        assert_eq!(d - 20, Date::from_ymd(2017, 11, 30).unwrap());
        assert_eq!(d.days_between(d + 10), 10);
        assert_eq!(d.days_between(d - 20), -20);
    }

    proptest! {
        #[test]
        fn serial_roundtrip(serial in 1i32..=Date::MAX_SERIAL) {
            let d = Date::from_serial(serial).unwrap();
            let (y, m, dd) = (d.year(), d.month(), d.day_of_month());
            prop_assert_eq!(Date::from_ymd(y, m, dd).unwrap().serial(), serial);
        }

        #[test]
        fn add_then_sub_is_identity(
            serial in 40_000i32..180_000,
            n in -10_000i32..10_000,
        ) {
            let d = Date::from_serial(serial).unwrap();
            let there = d.add_days(n).unwrap();
            prop_assert_eq!(there.add_days(-n).unwrap(), d);
        }

        #[test]
        fn weekday_advances_cyclically(serial in 1i32..Date::MAX_SERIAL) {
            let d = Date::from_serial(serial).unwrap();
            let next = d.add_days(1).unwrap();
            prop_assert_eq!(next.weekday().ordinal(), d.weekday().ordinal() % 7 + 1);
        }
    }
}
