//! Fixed-offset conversion between the Gregorian and Jalali calendars.
//!
//! Nowruz is pinned to Gregorian day-of-year 80 every year, and the Jalali
//! year runs from that day to the day before the next one. Astronomical
//! Nowruz moves between days 79 and 81, so dates next to the year boundary
//! can be off by one in some years.

use crate::consts::{
    ESFAND, FARVARDIN, FIRST_HALF_DAYS, FIRST_HALF_MONTH_DAYS, JALALI_YEAR_OFFSET, MEHR, MIN_DAY,
    NOWRUZ_DAY_OF_YEAR, SECOND_HALF_MONTH_DAYS,
};
use crate::gregorian::GregorianDate;
use crate::types::{gregorian_days_in_year, jalali_days_in_month};
use crate::JalaliDate;

/// Zero-based day offset of a Jalali month/day from Farvardin 1.
pub(crate) fn offset_in_year(month: u8, day: u8) -> u16 {
    let day = u16::from(day - MIN_DAY);
    if month < MEHR {
        u16::from(month - FARVARDIN) * u16::from(FIRST_HALF_MONTH_DAYS) + day
    } else {
        FIRST_HALF_DAYS + u16::from(month - MEHR) * u16::from(SECOND_HALF_MONTH_DAYS) + day
    }
}

/// Splits a zero-based offset from Farvardin 1 into (month, day).
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn month_day_from_offset(offset: u16) -> (u8, u8) {
    let first_half = u16::from(FIRST_HALF_MONTH_DAYS);
    let second_half = u16::from(SECOND_HALF_MONTH_DAYS);
    if offset < FIRST_HALF_DAYS {
        ((offset / first_half) as u8 + FARVARDIN, (offset % first_half) as u8 + MIN_DAY)
    } else {
        let rest = offset - FIRST_HALF_DAYS;
        ((rest / second_half) as u8 + MEHR, (rest % second_half) as u8 + MIN_DAY)
    }
}

pub(crate) fn to_jalali(date: GregorianDate) -> JalaliDate {
    let ordinal = date.day_of_year();
    let (year, offset) = if ordinal < NOWRUZ_DAY_OF_YEAR {
        // Still in the Jalali year that began in the previous Gregorian year.
        let previous = gregorian_days_in_year(date.year() - 1);
        (date.year() - JALALI_YEAR_OFFSET - 1, ordinal + previous - NOWRUZ_DAY_OF_YEAR)
    } else {
        (date.year() - JALALI_YEAR_OFFSET, ordinal - NOWRUZ_DAY_OF_YEAR)
    };

    let (month, day) = month_day_from_offset(offset);
    if day > jalali_days_in_month(year, month) {
        // Only Esfand 30 of a common year can land here.
        debug_assert_eq!(month, ESFAND);
        tracing::debug!(
            gregorian = %date,
            jalali_year = year,
            "Esfand 30 does not exist in a common year, rolling over to Nowruz"
        );
        return JalaliDate::from_ymd_unchecked(year + 1, FARVARDIN, MIN_DAY);
    }
    JalaliDate::from_ymd_unchecked(year, month, day)
}

pub(crate) fn to_gregorian(date: JalaliDate) -> GregorianDate {
    let year = date.year() + JALALI_YEAR_OFFSET;
    let ordinal = NOWRUZ_DAY_OF_YEAR + offset_in_year(date.month(), date.day());
    let length = gregorian_days_in_year(year);
    if ordinal <= length {
        GregorianDate::from_day_of_year(year, ordinal)
    } else {
        GregorianDate::from_day_of_year(year + 1, ordinal - length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{gregorian, jalali};
    use crate::types::{is_gregorian_leap_year, is_leap_year};

    /// Esfand 30 dates where the Gregorian year length and the 33-year rule disagree.
    fn is_seam(date: JalaliDate) -> bool {
        date.month() == ESFAND
            && date.day() == 30
            && is_leap_year(date.year())
                != is_gregorian_leap_year(date.year() + JALALI_YEAR_OFFSET)
    }

    #[test]
    fn test_offset_in_year() {
        assert_eq!(offset_in_year(1, 1), 0);
        assert_eq!(offset_in_year(6, 31), 185);
        assert_eq!(offset_in_year(7, 1), 186);
        assert_eq!(offset_in_year(12, 29), 364);
        assert_eq!(offset_in_year(12, 30), 365);
    }

    #[test]
    fn test_month_day_from_offset_inverts_offset_in_year() {
        for offset in 0..=365 {
            let (month, day) = month_day_from_offset(offset);
            assert_eq!(offset_in_year(month, day), offset, "offset {offset}");
        }
    }

    #[test]
    fn test_known_conversions() {
        struct TestCase {
            gregorian:   GregorianDate,
            jalali:      JalaliDate,
            description: &'static str,
        }

        let cases = [
            TestCase {
                gregorian:   gregorian(2024, 3, 20),
                jalali:      jalali(1403, 1, 1),
                description: "Nowruz 1403, day-of-year 80 of a leap year",
            },
            TestCase {
                gregorian:   gregorian(2023, 3, 21),
                jalali:      jalali(1402, 1, 1),
                description: "Nowruz 1402, day-of-year 80 of a common year",
            },
            TestCase {
                gregorian:   gregorian(2024, 3, 19),
                jalali:      jalali(1402, 12, 29),
                description: "day before Nowruz, previous year is common",
            },
            TestCase {
                gregorian:   gregorian(2024, 7, 15),
                jalali:      jalali(1403, 4, 25),
                description: "mid-year",
            },
            TestCase {
                gregorian:   gregorian(2024, 9, 21),
                jalali:      jalali(1403, 6, 31),
                description: "last 31-day month",
            },
            TestCase {
                gregorian:   gregorian(2024, 9, 22),
                jalali:      jalali(1403, 7, 1),
                description: "first 30-day month",
            },
            TestCase {
                gregorian:   gregorian(2024, 1, 1),
                jalali:      jalali(1402, 10, 11),
                description: "Gregorian new year",
            },
        ];

        for case in &cases {
            assert_eq!(to_jalali(case.gregorian), case.jalali, "to_jalali: {}", case.description);
            assert_eq!(
                to_gregorian(case.jalali),
                case.gregorian,
                "to_gregorian: {}",
                case.description
            );
        }
    }

    #[test]
    fn test_before_nowruz_uses_previous_year_length() {
        // 2020 is leap, so the Jalali year 1399 spans 366 Gregorian days.
        assert_eq!(to_jalali(gregorian(2021, 3, 20)), jalali(1399, 12, 30));
        assert_eq!(to_jalali(gregorian(2021, 3, 21)), jalali(1400, 1, 1));
    }

    #[test]
    fn test_seam_rolls_over_to_nowruz() {
        // 2024 and 1403 are both leap, so Esfand 30 1403 exists.
        assert_eq!(to_jalali(gregorian(2025, 3, 20)), jalali(1403, 12, 30));

        // 1407 is common in the 33-year rule while 2028 is a leap Gregorian year.
        assert!(!is_leap_year(1407));
        assert!(is_gregorian_leap_year(2028));
        assert_eq!(to_jalali(gregorian(2029, 3, 19)), jalali(1407, 12, 29));
        assert_eq!(to_jalali(gregorian(2029, 3, 20)), jalali(1408, 1, 1));
    }

    #[test]
    fn test_overflow_into_next_gregorian_year() {
        assert_eq!(to_gregorian(jalali(1402, 10, 11)), gregorian(2024, 1, 1));
        assert_eq!(to_gregorian(jalali(1402, 12, 29)), gregorian(2024, 3, 19));
    }

    #[test]
    fn test_jalali_round_trip_outside_seam() {
        let mut date = jalali(1300, 1, 1);
        while date.year() < 1500 {
            let back = to_jalali(to_gregorian(date));
            if is_seam(date) {
                assert_eq!(back, jalali(date.year() + 1, 1, 1), "seam {date}");
            } else {
                assert_eq!(back, date, "round trip {date}");
            }
            date = date.add_days(1).unwrap();
        }
    }

    #[test]
    fn test_gregorian_round_trip_outside_seam() {
        let mut date = gregorian(1921, 1, 1);
        while date.year() < 2121 {
            let converted = to_jalali(date);
            let back = to_gregorian(converted);
            if back != date {
                // Only the day before Nowruz after a leap Gregorian year, when the
                // matching Jalali year is common, can fail to come back.
                assert_eq!(date.day_of_year(), NOWRUZ_DAY_OF_YEAR - 1, "{date}");
                assert!(is_gregorian_leap_year(date.year() - 1), "{date}");
                assert_eq!((converted.month(), converted.day()), (1, 1), "{date}");
            }
            date = date.add_days(1).unwrap();
        }
    }

    #[test]
    fn test_conversion_is_monotonic() {
        let mut date = gregorian(1990, 1, 1);
        let mut previous = to_jalali(date);
        while date.year() < 2060 {
            date = date.add_days(1).unwrap();
            let current = to_jalali(date);
            assert!(previous <= current, "{date}: {previous} > {current}");
            previous = current;
        }
    }
}
