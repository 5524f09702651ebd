//! Digit substitution between ASCII and Persian numerals.

use std::fmt;

use crate::consts::PERSIAN_DIGITS;

/// First code point of the Arabic-Indic digit block (٠)
const ARABIC_INDIC_ZERO: u32 = 0x0660;

/// Replaces every ASCII digit in the rendered `value` with its Persian digit.
///
/// Works on anything with a `Display` form, so integers and strings go
/// through the same path. Non-digit characters are left untouched.
///
/// ```
/// assert_eq!(jalali_date::to_localized_digits(&1403), "۱۴۰۳");
/// assert_eq!(jalali_date::to_localized_digits("1403/04/25"), "۱۴۰۳/۰۴/۲۵");
/// ```
pub fn to_localized_digits<T: fmt::Display + ?Sized>(value: &T) -> String {
    value.to_string().chars().map(localize_char).collect()
}

/// Maps Persian and Arabic-Indic digits back to ASCII, leaving everything else as is.
pub fn to_ascii_digits(value: &str) -> String {
    value.chars().map(delocalize_char).collect()
}

fn localize_char(c: char) -> char {
    if c.is_ascii_digit() {
        PERSIAN_DIGITS[usize::from(c as u8 - b'0')]
    } else {
        c
    }
}

fn delocalize_char(c: char) -> char {
    if let Some(d) = PERSIAN_DIGITS.iter().position(|&p| p == c) {
        return char::from(b'0' + d as u8);
    }
    let code = u32::from(c);
    if (ARABIC_INDIC_ZERO..ARABIC_INDIC_ZERO + 10).contains(&code) {
        return char::from_digit(code - ARABIC_INDIC_ZERO, 10).unwrap_or(c);
    }
    c
}
