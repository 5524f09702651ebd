//! Proleptic Gregorian calendar dates.
//!
//! Day arithmetic goes through a count of days since 1970-01-01 using the
//! era-based civil algorithms, so adding days never walks month by month.

use std::str::FromStr;

use crate::consts::{DATE_SEPARATOR, JANUARY, MAX_MONTH, MIN_DAY};
use crate::prelude::*;
use crate::types::{
    Weekday, check_year, gregorian_days_in_month, gregorian_days_in_year, is_gregorian_leap_year,
};
use crate::{DateError, JalaliDate, convert};

const DAYS_PER_ERA: i64 = 146_097;
/// Days from 0000-03-01 to 1970-01-01
const EPOCH_SHIFT: i64 = 719_468;
/// Coarse bound past which no day count can map into `MIN_YEAR..=MAX_YEAR`,
/// with room for the Jalali offset
const MAX_EPOCH_DAYS: u64 = 400_000_000;

/// A date in the proleptic Gregorian calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", year, month, day)]
pub struct GregorianDate {
    year:  i32,
    month: u8,
    day:   u8,
}

impl GregorianDate {
    /// Creates a new date, validating the month and the day against the month length.
    ///
    /// # Errors
    /// Returns `DateError::YearOutOfRange`, `DateError::InvalidMonth` or
    /// `DateError::InvalidDay` for components outside the calendar.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, DateError> {
        check_year(i64::from(year))?;
        if month == 0 || month > MAX_MONTH {
            return Err(DateError::InvalidMonth(month));
        }
        if day < MIN_DAY || day > gregorian_days_in_month(year, month) {
            return Err(DateError::InvalidDay { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    /// Builds a date whose components are already known to be valid.
    pub(crate) const fn from_ymd_unchecked(year: i32, month: u8, day: u8) -> Self {
        debug_assert!(month >= JANUARY && month <= MAX_MONTH);
        debug_assert!(day >= MIN_DAY && day <= gregorian_days_in_month(year, month));
        Self { year, month, day }
    }

    /// Resolves a 1-based day-of-year into a date. `ordinal` must not exceed the year length.
    pub(crate) fn from_day_of_year(year: i32, ordinal: u16) -> Self {
        debug_assert!(ordinal >= 1 && ordinal <= gregorian_days_in_year(year));

        let mut remaining = ordinal;
        let mut month = JANUARY;
        while month < MAX_MONTH {
            let length = u16::from(gregorian_days_in_month(year, month));
            if remaining <= length {
                break;
            }
            remaining -= length;
            month += 1;
        }
        #[allow(clippy::cast_possible_truncation)]
        Self::from_ymd_unchecked(year, month, remaining as u8)
    }

    /// Builds a date from a count of days since 1970-01-01.
    ///
    /// # Errors
    /// Returns `DateError::YearOutOfRange` if the resulting year is outside `MIN_YEAR..=MAX_YEAR`.
    pub fn from_days_since_epoch(days: i64) -> Result<Self, DateError> {
        let date = Self::from_days_since_epoch_unbounded(days)?;
        check_year(i64::from(date.year))?;
        Ok(date)
    }

    /// Like [`GregorianDate::from_days_since_epoch`] but without the year window.
    ///
    /// Jalali arithmetic steps through Gregorian years up to 622 past the
    /// window and checks the Jalali result instead.
    pub(crate) fn from_days_since_epoch_unbounded(days: i64) -> Result<Self, DateError> {
        if days.unsigned_abs() > MAX_EPOCH_DAYS {
            return Err(DateError::YearOutOfRange(days / 365));
        }
        let (year, month, day) = civil_from_days(days);
        let year = i32::try_from(year).map_err(|_| DateError::YearOutOfRange(year))?;
        Ok(Self::from_ymd_unchecked(year, month, day))
    }

    /// Gregorian year, astronomical numbering
    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Month, 1 (January) through 12
    #[inline]
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Day of the month, starting at 1
    #[inline]
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Whether this date's year has a February 29
    pub const fn is_leap_year(&self) -> bool {
        is_gregorian_leap_year(self.year)
    }

    /// 1-based ordinal of this date within its year
    pub fn day_of_year(&self) -> u16 {
        (JANUARY..self.month)
            .map(|m| u16::from(gregorian_days_in_month(self.year, m)))
            .sum::<u16>()
            + u16::from(self.day)
    }

    /// Days since 1970-01-01, negative before it
    pub fn days_since_epoch(&self) -> i64 {
        days_from_civil(i64::from(self.year), i64::from(self.month), i64::from(self.day))
    }

    /// Day of the week
    pub fn weekday(&self) -> Weekday {
        Weekday::from_days_since_epoch(self.days_since_epoch())
    }

    /// Moves the date by `days` calendar days, rolling over months and years.
    ///
    /// # Errors
    /// Returns `DateError::YearOutOfRange` if the result leaves the supported year range.
    pub fn add_days(&self, days: i64) -> Result<Self, DateError> {
        let target = self
            .days_since_epoch()
            .checked_add(days)
            .ok_or(DateError::YearOutOfRange(i64::from(self.year)))?;
        Self::from_days_since_epoch(target)
    }

    /// Converts to the Jalali calendar.
    pub fn to_jalali(&self) -> JalaliDate {
        convert::to_jalali(*self)
    }
}

fn days_from_civil(year: i64, month: i64, day: i64) -> i64 {
    // Years start in March so the leap day is the last day of the computational year.
    let year = if month <= 2 { year - 1 } else { year };
    let era = year.div_euclid(400);
    let year_of_era = year - era * 400;
    let shifted_month = (month + 9) % 12;
    let day_of_year = (153 * shifted_month + 2) / 5 + day - 1;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;
    era * DAYS_PER_ERA + day_of_era - EPOCH_SHIFT
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn civil_from_days(days: i64) -> (i64, u8, u8) {
    let days = days + EPOCH_SHIFT;
    let era = days.div_euclid(DAYS_PER_ERA);
    let day_of_era = days - era * DAYS_PER_ERA;
    let year_of_era =
        (day_of_era - day_of_era / 1460 + day_of_era / 36_524 - day_of_era / 146_096) / 365;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let shifted_month = (5 * day_of_year + 2) / 153;
    let day = day_of_year - (153 * shifted_month + 2) / 5 + 1;
    let month = if shifted_month < 10 { shifted_month + 3 } else { shifted_month - 9 };
    let year = year_of_era + era * 400 + i64::from(month <= 2);
    (year, month as u8, day as u8)
}

impl FromStr for GregorianDate {
    type Err = DateError;

    /// Parses `YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::EmptyInput);
        }
        let (year, month, day) = crate::split_date(trimmed, &[DATE_SEPARATOR])?;
        Self::new(year, month, day)
    }
}

impl serde::Serialize for GregorianDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for GregorianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(feature = "chrono")]
mod chrono_impls {
    use chrono::{Datelike, NaiveDate};

    use super::GregorianDate;
    use crate::DateError;

    impl From<NaiveDate> for GregorianDate {
        #[allow(clippy::cast_possible_truncation)]
        fn from(date: NaiveDate) -> Self {
            // chrono's year range is far inside MIN_YEAR..=MAX_YEAR.
            Self::from_ymd_unchecked(date.year(), date.month() as u8, date.day() as u8)
        }
    }

    impl TryFrom<GregorianDate> for NaiveDate {
        type Error = DateError;

        fn try_from(date: GregorianDate) -> Result<Self, Self::Error> {
            Self::from_ymd_opt(date.year(), u32::from(date.month()), u32::from(date.day()))
                .ok_or(DateError::YearOutOfRange(i64::from(date.year())))
        }
    }
}
