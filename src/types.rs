use crate::DateError;
use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_LEAP_YEAR, DAYS_IN_YEAR, ESFAND, ESFAND_DAYS, ESFAND_DAYS_LEAP,
    FEBRUARY, FEBRUARY_DAYS_LEAP, FIRST_HALF_MONTH_DAYS, GREGORIAN_CYCLE,
    GREGORIAN_DAYS_IN_MONTH, JALALI_LEAP_CYCLE, JALALI_LEAP_REMAINDERS, LEAP_YEAR_CYCLE,
    MAX_MONTH, MAX_YEAR, MEHR, MIN_YEAR, PERSIAN_WEEKDAYS, PERSIAN_WEEKDAYS_SHORT, SECOND_HALF_MONTH_DAYS,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Day of the week in Persian order: the week starts on Saturday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Saturday,
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    /// All weekdays, Saturday first
    pub const ALL: [Self; 7] = [
        Self::Saturday,
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
    ];

    /// Index in the Persian week, Saturday = 0 through Friday = 6
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Inverse of [`Weekday::index`]
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(usize::from(index)).copied()
    }

    /// Weekday of a day counted from 1970-01-01, which was a Thursday
    pub(crate) const fn from_days_since_epoch(days: i64) -> Self {
        let index = (days + Self::Thursday as i64).rem_euclid(7);
        Self::ALL[index as usize]
    }

    /// Full Persian name
    pub const fn name(self) -> &'static str {
        PERSIAN_WEEKDAYS[self as usize]
    }

    /// Single-letter label
    pub const fn short_name(self) -> &'static str {
        PERSIAN_WEEKDAYS_SHORT[self as usize]
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// Helper functions

/// Narrows a computed year back to `i32`, rejecting anything outside `MIN_YEAR..=MAX_YEAR`.
pub(crate) fn check_year(year: i64) -> Result<i32, DateError> {
    if year < i64::from(MIN_YEAR) || year > i64::from(MAX_YEAR) {
        return Err(DateError::YearOutOfRange(year));
    }
    #[allow(clippy::cast_possible_truncation)]
    Ok(year as i32)
}

/// Jalali leap rule: a year is leap when its position in the 33-year cycle is one of
/// [`JALALI_LEAP_REMAINDERS`].
///
/// This is the simplified cycle, not the astronomical equinox rule, and it disagrees
/// with the official calendar in some years.
pub fn is_leap_year(year: i32) -> bool {
    JALALI_LEAP_REMAINDERS.contains(&year.rem_euclid(JALALI_LEAP_CYCLE))
}

/// Length of a Jalali month. `month` must already be validated.
pub(crate) fn jalali_days_in_month(year: i32, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month < MEHR {
        FIRST_HALF_MONTH_DAYS
    } else if month < ESFAND {
        SECOND_HALF_MONTH_DAYS
    } else if is_leap_year(year) {
        ESFAND_DAYS_LEAP
    } else {
        ESFAND_DAYS
    }
}

/// Checked variant of [`jalali_days_in_month`] for caller-supplied months.
pub(crate) fn checked_jalali_days_in_month(year: i32, month: u8) -> Result<u8, DateError> {
    if month == 0 || month > MAX_MONTH {
        return Err(DateError::InvalidMonth(month));
    }
    Ok(jalali_days_in_month(year, month))
}

/// Proleptic Gregorian leap rule
pub const fn is_gregorian_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn gregorian_days_in_month(year: i32, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_gregorian_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        GREGORIAN_DAYS_IN_MONTH[month as usize]
    }
}

pub const fn gregorian_days_in_year(year: i32) -> u16 {
    if is_gregorian_leap_year(year) {
        DAYS_IN_LEAP_YEAR
    } else {
        DAYS_IN_YEAR
    }
}
