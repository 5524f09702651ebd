use crate::{DateRange, GregorianDate, JalaliDate};

pub fn jalali(year: i32, month: u8, day: u8) -> JalaliDate {
    JalaliDate::new(year, month, day).expect("valid Jalali date")
}

pub fn gregorian(year: i32, month: u8, day: u8) -> GregorianDate {
    GregorianDate::new(year, month, day).expect("valid Gregorian date")
}

pub fn range(start: (i32, u8, u8), end: (i32, u8, u8)) -> DateRange {
    DateRange::new(jalali(start.0, start.1, start.2), jalali(end.0, end.1, end.2))
        .expect("valid date range")
}
