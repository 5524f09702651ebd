//! Date-picker selection: the three modes, the inclusive Jalali date range,
//! the result sum type and the state that accumulates picks.

use std::{collections::BTreeSet, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{DateError, JalaliDate, LIST_SEPARATOR, RANGE_SEPARATOR, prelude::*};

/// How picked dates accumulate into a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
pub enum SelectionMode {
    #[display(fmt = "single")]
    Single,
    #[display(fmt = "multiple")]
    Multiple,
    #[default]
    #[display(fmt = "range")]
    Range,
}

/// An inclusive range of Jalali dates.
/// The start date must be less than or equal to the end date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{start}/{end}")]
pub struct DateRange {
    start: JalaliDate,
    end:   JalaliDate,
}

/// Error type for date range and selection operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    /// Start date is after end date.
    #[error("Invalid date range: start ({start}) is after end ({end})")]
    InvalidRange { start: JalaliDate, end: JalaliDate },

    /// Error parsing or validating a date component.
    #[error(transparent)]
    Date(#[from] DateError),

    /// Invalid range format.
    #[error("Invalid range format: {0}")]
    InvalidFormat(String),

    /// Initial selection does not fit the configured mode.
    #[error("Initial selection does not fit {mode} mode: {reason}")]
    ModeMismatch { mode: SelectionMode, reason: String },
}

impl DateRange {
    /// Creates a new date range with validation.
    ///
    /// # Errors
    /// Returns `SelectionError::InvalidRange` if start > end.
    pub fn new(start: JalaliDate, end: JalaliDate) -> Result<Self, SelectionError> {
        if start > end {
            return Err(SelectionError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Orders two dates into a range, whichever comes first.
    pub fn between(a: JalaliDate, b: JalaliDate) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    /// Returns the start date
    pub const fn start(&self) -> JalaliDate {
        self.start
    }

    /// Returns the end date
    pub const fn end(&self) -> JalaliDate {
        self.end
    }

    /// Returns both start and end dates as a tuple
    pub const fn dates(&self) -> (JalaliDate, JalaliDate) {
        (self.start, self.end)
    }

    /// Checks if a date falls within the range, both ends included
    pub fn contains(&self, date: &JalaliDate) -> bool {
        self.start <= *date && *date <= self.end
    }

    /// Checks if this range shares at least one day with another range
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Checks if this range is completely contained within another range
    pub fn is_within(&self, other: &Self) -> bool {
        other.start <= self.start && self.end <= other.end
    }

    /// Number of days in the range, both ends included
    pub fn len_days(&self) -> i64 {
        self.end.to_gregorian().days_since_epoch() - self.start.to_gregorian().days_since_epoch()
            + 1
    }

    /// Every date from start to end in order.
    pub fn iter_days(&self) -> impl Iterator<Item = JalaliDate> + '_ {
        let end = self.end;
        std::iter::successors(Some(self.start), move |d| {
            d.add_days(1).ok().filter(|next| *next <= end)
        })
    }
}

impl FromStr for DateRange {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        // ISO 8601 extended format: use RANGE_SEPARATOR to separate start/end
        let Some((start_str, end_str)) = trimmed.split_once(RANGE_SEPARATOR) else {
            return Err(SelectionError::InvalidFormat(format!(
                "No range separator found (expected '{RANGE_SEPARATOR}'): {s}"
            )));
        };
        if end_str.contains(RANGE_SEPARATOR) {
            return Err(SelectionError::InvalidFormat(format!(
                "Too many '{RANGE_SEPARATOR}' separators: expected 1, found {}",
                trimmed.matches(RANGE_SEPARATOR).count()
            )));
        }

        let start = start_str.trim().parse::<JalaliDate>()?;
        let end = end_str.trim().parse::<JalaliDate>()?;

        Self::new(start, end)
    }
}

impl Serialize for DateRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for DateRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// The confirmed result of a picker.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "mode", content = "value", rename_all = "snake_case")]
pub enum Selection {
    Single(JalaliDate),
    /// Sorted, without duplicates when built through `From` or deserialized
    #[serde(deserialize_with = "deserialize_sorted")]
    Multiple(Vec<JalaliDate>),
    Range(DateRange),
}

fn sorted_dates(mut dates: Vec<JalaliDate>) -> Vec<JalaliDate> {
    dates.sort_unstable();
    dates.dedup();
    dates
}

fn deserialize_sorted<'de, D>(deserializer: D) -> Result<Vec<JalaliDate>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Vec::<JalaliDate>::deserialize(deserializer).map(sorted_dates)
}

impl From<JalaliDate> for Selection {
    fn from(date: JalaliDate) -> Self {
        Self::Single(date)
    }
}

impl From<Vec<JalaliDate>> for Selection {
    fn from(dates: Vec<JalaliDate>) -> Self {
        Self::Multiple(sorted_dates(dates))
    }
}

impl From<DateRange> for Selection {
    fn from(range: DateRange) -> Self {
        Self::Range(range)
    }
}

impl Selection {
    /// Mode that produced this result
    pub const fn mode(&self) -> SelectionMode {
        match self {
            Self::Single(_) => SelectionMode::Single,
            Self::Multiple(_) => SelectionMode::Multiple,
            Self::Range(_) => SelectionMode::Range,
        }
    }

    /// Whether `date` is part of this selection
    pub fn contains(&self, date: &JalaliDate) -> bool {
        match self {
            Self::Single(selected) => selected == date,
            Self::Multiple(dates) => dates.contains(date),
            Self::Range(range) => range.contains(date),
        }
    }

    /// Human-readable Persian summary of the selection
    pub fn summary(&self) -> String {
        match self {
            Self::Single(date) => date.formatted_date(),
            Self::Multiple(dates) => join_numeric(dates.iter().collect::<BTreeSet<_>>().into_iter()),
            Self::Range(range) => range_summary(&range.start, Some(&range.end)),
        }
    }
}

fn join_numeric<'a>(dates: impl Iterator<Item = &'a JalaliDate>) -> String {
    dates
        .map(JalaliDate::numeric_formatted_date)
        .collect::<Vec<_>>()
        .join(LIST_SEPARATOR)
}

fn range_summary(start: &JalaliDate, end: Option<&JalaliDate>) -> String {
    match end {
        Some(end) => format!("از: {}\nتا: {}", start.formatted_date(), end.formatted_date()),
        None => format!("از: {}", start.formatted_date()),
    }
}

/// Picks accumulated so far, one variant per mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionState {
    Single(Option<JalaliDate>),
    Multiple(BTreeSet<JalaliDate>),
    Range {
        start: Option<JalaliDate>,
        end:   Option<JalaliDate>,
    },
}

impl SelectionState {
    /// Empty state for `mode`
    pub const fn new(mode: SelectionMode) -> Self {
        match mode {
            SelectionMode::Single => Self::Single(None),
            SelectionMode::Multiple => Self::Multiple(BTreeSet::new()),
            SelectionMode::Range => Self::Range {
                start: None,
                end:   None,
            },
        }
    }

    pub const fn mode(&self) -> SelectionMode {
        match self {
            Self::Single(_) => SelectionMode::Single,
            Self::Multiple(_) => SelectionMode::Multiple,
            Self::Range { .. } => SelectionMode::Range,
        }
    }

    /// Applies a tap on `date`.
    ///
    /// Single replaces the pick, multiple toggles membership, and range sets
    /// the start, then the end (swapping if it precedes the start), then
    /// starts over.
    pub fn pick(&mut self, date: JalaliDate) {
        match self {
            Self::Single(selected) => *selected = Some(date),
            Self::Multiple(dates) => {
                if !dates.remove(&date) {
                    dates.insert(date);
                }
            },
            Self::Range { start, end } => match (*start, *end) {
                (Some(first), None) => {
                    let range = DateRange::between(first, date);
                    *start = Some(range.start());
                    *end = Some(range.end());
                },
                _ => {
                    *start = Some(date);
                    *end = None;
                },
            },
        }
        tracing::trace!(mode = %self.mode(), %date, "date picked");
    }

    /// Drops every pick, keeping the mode
    pub fn clear(&mut self) {
        *self = Self::new(self.mode());
    }

    pub fn is_selected(&self, date: &JalaliDate) -> bool {
        match self {
            Self::Single(selected) => selected.as_ref() == Some(date),
            Self::Multiple(dates) => dates.contains(date),
            Self::Range { start, end } => {
                start.as_ref() == Some(date) || end.as_ref() == Some(date) || self.is_in_range(date)
            },
        }
    }

    pub fn is_range_start(&self, date: &JalaliDate) -> bool {
        matches!(self, Self::Range { start: Some(start), .. } if start == date)
    }

    pub fn is_range_end(&self, date: &JalaliDate) -> bool {
        matches!(self, Self::Range { end: Some(end), .. } if end == date)
    }

    /// Strictly between a complete range's start and end
    pub fn is_in_range(&self, date: &JalaliDate) -> bool {
        match self {
            Self::Range {
                start: Some(start),
                end: Some(end),
            } => start < date && date < end,
            _ => false,
        }
    }

    /// Whether [`SelectionState::finish`] would produce a result
    pub fn can_confirm(&self) -> bool {
        match self {
            Self::Single(selected) => selected.is_some(),
            Self::Multiple(dates) => !dates.is_empty(),
            Self::Range { start, end } => start.is_some() && end.is_some(),
        }
    }

    /// The confirmed result, or `None` while the selection is incomplete.
    pub fn finish(&self) -> Option<Selection> {
        match self {
            Self::Single(selected) => selected.map(Selection::Single),
            Self::Multiple(dates) if !dates.is_empty() => {
                Some(Selection::Multiple(dates.iter().copied().collect()))
            },
            Self::Multiple(_) => None,
            Self::Range {
                start: Some(start),
                end: Some(end),
            } => Some(Selection::Range(DateRange::between(*start, *end))),
            Self::Range { .. } => None,
        }
    }

    /// Summary of the picks so far; empty when nothing is picked.
    pub fn summary(&self) -> String {
        match self {
            Self::Single(selected) => selected.map(|d| d.formatted_date()).unwrap_or_default(),
            Self::Multiple(dates) => join_numeric(dates.iter()),
            Self::Range { start, end } => start
                .as_ref()
                .map(|start| range_summary(start, end.as_ref()))
                .unwrap_or_default(),
        }
    }
}

impl From<Selection> for SelectionState {
    fn from(selection: Selection) -> Self {
        match selection {
            Selection::Single(date) => Self::Single(Some(date)),
            Selection::Multiple(dates) => Self::Multiple(dates.into_iter().collect()),
            Selection::Range(range) => Self::Range {
                start: Some(range.start()),
                end:   Some(range.end()),
            },
        }
    }
}
