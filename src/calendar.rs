//! Month grids for a Saturday-first week.

use std::ops::RangeInclusive;

use crate::consts::{MAX_YEAR, MIN_YEAR};
use crate::{DateError, JalaliDate, Weekday};

const DAYS_PER_WEEK: usize = Weekday::ALL.len();

/// One Jalali month laid out on a week grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthView {
    first: JalaliDate,
}

impl MonthView {
    /// Grid for `month` of `year`.
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` or `DateError::YearOutOfRange` for bad input.
    pub fn new(year: i32, month: u8) -> Result<Self, DateError> {
        Ok(Self {
            first: JalaliDate::new(year, month, 1)?,
        })
    }

    /// The month containing `date`
    pub const fn containing(date: JalaliDate) -> Self {
        Self {
            first: date.first_day_of_month(),
        }
    }

    /// Jalali year of the month shown
    pub const fn year(&self) -> i32 {
        self.first.year()
    }

    /// Month number, 1 through 12
    pub const fn month(&self) -> u8 {
        self.first.month()
    }

    /// Persian month name for the header
    pub fn month_name(&self) -> &'static str {
        self.first.month_name()
    }

    /// Days in the month, including Esfand 30 in leap years
    pub fn days_in_month(&self) -> u8 {
        self.first.days_in_month()
    }

    /// Empty cells before day 1, i.e. the weekday index of the first day
    pub fn leading_blanks(&self) -> usize {
        usize::from(self.first.day_of_week().index())
    }

    /// Every date of the month in order
    pub fn days(&self) -> impl Iterator<Item = JalaliDate> + '_ {
        let (year, month) = (self.year(), self.month());
        (1..=self.days_in_month()).map(move |day| JalaliDate::from_ymd_unchecked(year, month, day))
    }

    /// Leading blanks as `None`, then one `Some` per day
    pub fn cells(&self) -> impl Iterator<Item = Option<JalaliDate>> + '_ {
        std::iter::repeat_n(None, self.leading_blanks()).chain(self.days().map(Some))
    }

    /// Rows of seven cells; the last row is padded with `None`.
    pub fn weeks(&self) -> Vec<[Option<JalaliDate>; DAYS_PER_WEEK]> {
        let mut weeks = Vec::new();
        let mut row = [None; DAYS_PER_WEEK];
        for (i, cell) in self.cells().enumerate() {
            row[i % DAYS_PER_WEEK] = cell;
            if i % DAYS_PER_WEEK == DAYS_PER_WEEK - 1 {
                weeks.push(row);
                row = [None; DAYS_PER_WEEK];
            }
        }
        if row.iter().any(Option::is_some) {
            weeks.push(row);
        }
        weeks
    }

    /// # Errors
    /// Returns `DateError::YearOutOfRange` past the last supported year.
    pub fn next(&self) -> Result<Self, DateError> {
        self.first.add_months(1).map(Self::containing)
    }

    /// # Errors
    /// Returns `DateError::YearOutOfRange` before the first supported year.
    pub fn previous(&self) -> Result<Self, DateError> {
        self.first.add_months(-1).map(Self::containing)
    }
}

/// Years offered by a year picker: `span` years either side of `current`,
/// clipped to the supported range.
pub fn year_span(current: i32, span: u16) -> RangeInclusive<i32> {
    let span = i32::from(span);
    let start = current.saturating_sub(span).max(MIN_YEAR);
    let end = current.saturating_add(span).min(MAX_YEAR);
    start..=end
}
