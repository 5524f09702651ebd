//! Jalali (solar Hijri) calendar dates.
//!
//! Converts between Gregorian and Jalali calendar-date triples with a fixed
//! Nowruz offset, applies the simplified 33-year leap cycle, and renders
//! dates with Persian digits and month names. The [`selection`], [`calendar`]
//! and [`config`] modules hold the UI-independent state of a date picker.

pub mod calendar;
pub mod config;
mod consts;
mod convert;
mod digits;
mod gregorian;
mod prelude;
pub mod selection;
#[cfg(test)]
mod test_utils;
mod types;

pub use calendar::{MonthView, year_span};
pub use config::PickerConfig;
pub use consts::{
    DATE_SEPARATOR, DEFAULT_YEAR_PICKER_SPAN, ESFAND, ESFAND_DAYS, ESFAND_DAYS_LEAP, FARVARDIN,
    FIRST_HALF_MONTH_DAYS, JALALI_LEAP_REMAINDERS, LIST_SEPARATOR, MAX_MONTH, MAX_YEAR, MEHR, MIN_DAY,
    MIN_YEAR, NOWRUZ_DAY_OF_YEAR, NUMERIC_DATE_SEPARATOR, PERSIAN_DIGITS, PERSIAN_MONTHS,
    PERSIAN_WEEKDAYS, PERSIAN_WEEKDAYS_SHORT, RANGE_SEPARATOR, SECOND_HALF_MONTH_DAYS,
};
pub use digits::{to_ascii_digits, to_localized_digits};
pub use gregorian::GregorianDate;
pub use selection::{DateRange, Selection, SelectionError, SelectionMode, SelectionState};
pub use types::{Weekday, is_gregorian_leap_year, is_leap_year};

use crate::prelude::*;
use std::str::FromStr;
use types::{check_year, checked_jalali_days_in_month, jalali_days_in_month};

/// A date in the Jalali calendar.
///
/// Ordering is lexicographic on `(year, month, day)`. Values are immutable;
/// the arithmetic methods return new dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", year, month, day)]
pub struct JalaliDate {
    year:  i32,
    month: u8,
    day:   u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum DateError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: i32, month: u8, day: u8 },
    #[display(fmt = "Year out of range: {} (must be {} to {})", "_0", MIN_YEAR, MAX_YEAR)]
    YearOutOfRange(i64),
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for DateError {}

/// Converts a Gregorian date to the Jalali calendar.
///
/// # Errors
/// Returns `DateError` if the Gregorian components are not a valid date.
pub fn gregorian_to_jalali(year: i32, month: u8, day: u8) -> Result<JalaliDate, DateError> {
    Ok(GregorianDate::new(year, month, day)?.to_jalali())
}

/// Converts a Jalali date to the Gregorian calendar.
///
/// # Errors
/// Returns `DateError` if the Jalali components are not a valid date.
pub fn jalali_to_gregorian(year: i32, month: u8, day: u8) -> Result<GregorianDate, DateError> {
    Ok(JalaliDate::new(year, month, day)?.to_gregorian())
}

/// Number of days in a Jalali month.
///
/// # Errors
/// Returns `DateError::InvalidMonth` if `month` is outside 1-12.
pub fn days_in_month(year: i32, month: u8) -> Result<u8, DateError> {
    checked_jalali_days_in_month(year, month)
}

impl JalaliDate {
    /// Creates a new date, validating the month and the day against the month length.
    ///
    /// # Errors
    /// Returns `DateError::YearOutOfRange`, `DateError::InvalidMonth` or
    /// `DateError::InvalidDay` for components outside the calendar.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, DateError> {
        check_year(i64::from(year))?;
        let max_day = checked_jalali_days_in_month(year, month)?;
        if day < MIN_DAY || day > max_day {
            return Err(DateError::InvalidDay { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    /// Builds a date whose components are already known to be valid.
    pub(crate) fn from_ymd_unchecked(year: i32, month: u8, day: u8) -> Self {
        debug_assert!((FARVARDIN..=ESFAND).contains(&month));
        debug_assert!(day >= MIN_DAY && day <= jalali_days_in_month(year, month));
        Self { year, month, day }
    }

    /// Converts a Gregorian date, rolling Esfand 30 seam days forward
    pub fn from_gregorian(date: GregorianDate) -> Self {
        convert::to_jalali(date)
    }

    /// Converts to the proleptic Gregorian calendar
    pub fn to_gregorian(&self) -> GregorianDate {
        convert::to_gregorian(*self)
    }

    /// Jalali year
    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Month, 1 (Farvardin) through 12 (Esfand)
    #[inline]
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Day of the month, starting at 1
    #[inline]
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Whether this date's year is leap under the 33-year cycle
    pub fn is_leap_year(&self) -> bool {
        is_leap_year(self.year)
    }

    /// Length of this date's month
    pub fn days_in_month(&self) -> u8 {
        jalali_days_in_month(self.year, self.month)
    }

    /// 1-based ordinal of this date within its Jalali year
    pub fn day_of_year(&self) -> u16 {
        convert::offset_in_year(self.month, self.day) + 1
    }

    pub const fn first_day_of_month(&self) -> Self {
        Self {
            day: MIN_DAY,
            ..*self
        }
    }

    pub fn last_day_of_month(&self) -> Self {
        Self {
            day: self.days_in_month(),
            ..*self
        }
    }

    /// Persian name of this date's month
    pub fn month_name(&self) -> &'static str {
        PERSIAN_MONTHS[usize::from(self.month - FARVARDIN)]
    }

    /// Weekday, derived from the Gregorian equivalent
    pub fn day_of_week(&self) -> Weekday {
        self.to_gregorian().weekday()
    }

    /// Persian name of the weekday
    pub fn day_of_week_name(&self) -> &'static str {
        self.day_of_week().name()
    }

    /// Moves the date by `days` calendar days through the Gregorian calendar.
    ///
    /// # Errors
    /// Returns `DateError::YearOutOfRange` if the result leaves the supported year range.
    pub fn add_days(&self, days: i64) -> Result<Self, DateError> {
        let target = self
            .to_gregorian()
            .days_since_epoch()
            .checked_add(days)
            .ok_or(DateError::YearOutOfRange(i64::from(self.year)))?;
        let moved = GregorianDate::from_days_since_epoch_unbounded(target)?.to_jalali();
        check_year(i64::from(moved.year))?;
        Ok(moved)
    }

    /// Moves the date by `months` Jalali months. The day is clamped to the
    /// length of the target month rather than spilling into the next one.
    ///
    /// # Errors
    /// Returns `DateError::YearOutOfRange` if the result leaves the supported year range.
    pub fn add_months(&self, months: i32) -> Result<Self, DateError> {
        let months_per_year = i64::from(MAX_MONTH);
        let total = i64::from(self.year) * months_per_year
            + i64::from(self.month - FARVARDIN)
            + i64::from(months);
        let year = check_year(total.div_euclid(months_per_year))?;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let month = total.rem_euclid(months_per_year) as u8 + FARVARDIN;
        let day = self.day.min(jalali_days_in_month(year, month));
        Ok(Self::from_ymd_unchecked(year, month, day))
    }

    /// Same month and day in another year, clamping Esfand 30 to 29 in common years.
    ///
    /// # Errors
    /// Returns `DateError::YearOutOfRange` if `year` is outside the supported range.
    pub fn with_year(&self, year: i32) -> Result<Self, DateError> {
        let year = check_year(i64::from(year))?;
        let day = self.day.min(jalali_days_in_month(year, self.month));
        Ok(Self::from_ymd_unchecked(year, self.month, day))
    }

    pub fn is_before(&self, other: &Self) -> bool {
        self < other
    }

    pub fn is_after(&self, other: &Self) -> bool {
        self > other
    }

    pub fn is_same_day(&self, other: &Self) -> bool {
        self == other
    }

    /// `"{day} {month name} {year}"` with Persian digits, e.g. `۲۵ تیر ۱۴۰۳`
    pub fn formatted_date(&self) -> String {
        format!(
            "{} {} {}",
            to_localized_digits(&self.day),
            self.month_name(),
            to_localized_digits(&self.year)
        )
    }

    /// `"{year}/{month:02}/{day:02}"` with Persian digits, e.g. `۱۴۰۳/۰۴/۲۵`
    pub fn numeric_formatted_date(&self) -> String {
        to_localized_digits(&format!(
            "{}{NUMERIC_DATE_SEPARATOR}{:02}{NUMERIC_DATE_SEPARATOR}{:02}",
            self.year, self.month, self.day
        ))
    }

    /// Both formats on two lines
    pub fn full_formatted_date(&self) -> String {
        format!("{}\n{}", self.formatted_date(), self.numeric_formatted_date())
    }
}

impl From<GregorianDate> for JalaliDate {
    fn from(date: GregorianDate) -> Self {
        Self::from_gregorian(date)
    }
}

impl From<JalaliDate> for GregorianDate {
    fn from(date: JalaliDate) -> Self {
        date.to_gregorian()
    }
}

/// Splits `year<sep>month<sep>day` on exactly one of the allowed separators.
///
/// A leading `-` belongs to the year, so negative years printed by `Display`
/// parse back.
pub(crate) fn split_date(s: &str, separators: &[char]) -> Result<(i32, u8, u8), DateError> {
    let (negative, body) = s.strip_prefix('-').map_or((false, s), |rest| (true, rest));

    let present: Vec<char> = separators.iter().copied().filter(|c| body.contains(*c)).collect();
    let separator = match present.as_slice() {
        [one] => *one,
        [] => return Err(DateError::InvalidFormat(format!("No date separator in {s}"))),
        _ => return Err(DateError::InvalidFormat(format!("Mixed delimiters in {s}"))),
    };

    let parts: Vec<&str> = body.split(separator).map(str::trim).collect();
    let [year, month, day] = parts.as_slice() else {
        return Err(DateError::InvalidFormat(format!(
            "Expected year{separator}month{separator}day, found {} parts",
            parts.len()
        )));
    };
    let year: i32 = parse_component(year)?;
    let year = if negative { -year } else { year };
    Ok((year, parse_component(month)?, parse_component(day)?))
}

fn parse_component<T: FromStr>(s: &str) -> Result<T, DateError> {
    s.parse::<T>()
        .map_err(|_| DateError::InvalidFormat(s.to_owned()))
}

impl FromStr for JalaliDate {
    type Err = DateError;

    /// Parses `YYYY-MM-DD` or `YYYY/MM/DD`, with ASCII or Persian digits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::EmptyInput);
        }
        let ascii = to_ascii_digits(trimmed);
        let (year, month, day) = split_date(&ascii, &[DATE_SEPARATOR, NUMERIC_DATE_SEPARATOR])?;
        Self::new(year, month, day)
    }
}

impl serde::Serialize for JalaliDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for JalaliDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(feature = "chrono")]
impl From<chrono::NaiveDate> for JalaliDate {
    fn from(date: chrono::NaiveDate) -> Self {
        GregorianDate::from(date).to_jalali()
    }
}

#[cfg(feature = "chrono")]
impl TryFrom<JalaliDate> for chrono::NaiveDate {
    type Error = DateError;

    fn try_from(date: JalaliDate) -> Result<Self, Self::Error> {
        Self::try_from(date.to_gregorian())
    }
}
