/// Smallest year accepted by the date constructors
pub const MIN_YEAR: i32 = -1_000_000;
/// Largest year accepted by the date constructors
pub const MAX_YEAR: i32 = 1_000_000;

/// Months per year, shared by both calendars
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for Farvardin (first Jalali month)
pub const FARVARDIN: u8 = 1;
/// Month number for Mehr (first 30-day Jalali month)
pub const MEHR: u8 = 7;
/// Month number for Esfand (last Jalali month)
pub const ESFAND: u8 = 12;

/// Length of Farvardin through Shahrivar
pub const FIRST_HALF_MONTH_DAYS: u8 = 31;
/// Length of Mehr through Bahman
pub const SECOND_HALF_MONTH_DAYS: u8 = 30;
/// Esfand in a common year
pub const ESFAND_DAYS: u8 = 29;
/// Esfand in a leap year
pub const ESFAND_DAYS_LEAP: u8 = 30;
/// Days covered by the six 31-day months
pub(crate) const FIRST_HALF_DAYS: u16 = 186;

/// Gregorian day-of-year (1-based) that is taken to be Nowruz, March 21 in a common year
pub const NOWRUZ_DAY_OF_YEAR: u16 = 80;
/// Jalali year = Gregorian year - 621 from Nowruz onward
pub(crate) const JALALI_YEAR_OFFSET: i32 = 621;

/// Length of the simplified Jalali leap cycle
pub(crate) const JALALI_LEAP_CYCLE: i32 = 33;
/// Positions inside the 33-year cycle that are leap years
pub const JALALI_LEAP_REMAINDERS: [i32; 8] = [1, 5, 9, 13, 17, 22, 26, 30];

/// Month number for January
pub(crate) const JANUARY: u8 = 1;
/// Month number for February
pub(crate) const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub(crate) const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each Gregorian month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub(crate) const GREGORIAN_DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_gregorian_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Days in a common Gregorian year
pub(crate) const DAYS_IN_YEAR: u16 = 365;
/// Days in a leap Gregorian year
pub(crate) const DAYS_IN_LEAP_YEAR: u16 = 366;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Jalali month names, indexed by `month - 1`
pub const PERSIAN_MONTHS: [&str; 12] = [
    "فروردین",
    "اردیبهشت",
    "خرداد",
    "تیر",
    "مرداد",
    "شهریور",
    "مهر",
    "آبان",
    "آذر",
    "دی",
    "بهمن",
    "اسفند",
];

/// Weekday names, Saturday first
pub const PERSIAN_WEEKDAYS: [&str; 7] = [
    "شنبه",
    "یکشنبه",
    "دوشنبه",
    "سه\u{200c}شنبه",
    "چهارشنبه",
    "پنج\u{200c}شنبه",
    "جمعه",
];

/// Single-letter weekday labels for grid headers, Saturday first
pub const PERSIAN_WEEKDAYS_SHORT: [&str; 7] = ["ش", "ی", "د", "س", "چ", "پ", "ج"];

/// Extended Arabic-Indic (Persian) digits ۰ through ۹
pub const PERSIAN_DIGITS: [char; 10] = ['۰', '۱', '۲', '۳', '۴', '۵', '۶', '۷', '۸', '۹'];

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Separator used by the localized numeric format
pub const NUMERIC_DATE_SEPARATOR: char = '/';
/// Range separator (ISO 8601 extended format)
pub const RANGE_SEPARATOR: char = '/';
/// Separator between dates in a multiple-selection summary
pub const LIST_SEPARATOR: &str = "، ";

/// Years shown on either side of the current year by the year picker
pub const DEFAULT_YEAR_PICKER_SPAN: u16 = 20;
