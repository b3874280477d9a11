//! Display formatting for amounts.
//!
//! Matches the ru-RU locale conventions the catalog UI renders with:
//! thousands grouped by a non-breaking space, comma as the decimal
//! separator, currency shown in whole rubles. Formatting is cosmetic only;
//! it never feeds back into calculation precision.

/// Non-breaking space used both as the group separator and before the
/// currency sign.
const NBSP: char = '\u{a0}';

/// Formats an amount as whole rubles, e.g. `1 000 000 ₽`.
///
/// The amount is rounded to whole currency units for display; the caller's
/// value keeps its two-decimal precision.
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return format!("{amount}{NBSP}₽");
    }

    let units = amount.round() as i64;
    let grouped = group_thousands(&units.unsigned_abs().to_string());
    if units < 0 {
        format!("-{grouped}{NBSP}₽")
    } else {
        format!("{grouped}{NBSP}₽")
    }
}

/// Formats a number with thousands separators, e.g. `250 000` or `9,9`.
///
/// At most three fractional digits are kept, trailing zeros trimmed.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let scaled = (value.abs() * 1000.0).round() as u64;
    let grouped = group_thousands(&(scaled / 1000).to_string());

    let mut out = String::new();
    if value.is_sign_negative() && scaled != 0 {
        out.push('-');
    }
    out.push_str(&grouped);

    let fraction = scaled % 1000;
    if fraction != 0 {
        let digits = format!("{fraction:03}");
        out.push(',');
        out.push_str(digits.trim_end_matches('0'));
    }
    out
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - offset) % 3 == 0 {
            out.push(NBSP);
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, "0\u{a0}₽")]
    #[case(999.0, "999\u{a0}₽")]
    #[case(1_000.0, "1\u{a0}000\u{a0}₽")]
    #[case(1_000_000.0, "1\u{a0}000\u{a0}000\u{a0}₽")]
    #[case(88_848.79, "88\u{a0}849\u{a0}₽")]
    #[case(-15_000.0, "-15\u{a0}000\u{a0}₽")]
    fn currency_formatting(#[case] amount: f64, #[case] expected: &str) {
        assert_eq!(format_currency(amount), expected);
    }

    #[rstest]
    #[case(0.0, "0")]
    #[case(250_000.0, "250\u{a0}000")]
    #[case(12.0, "12")]
    #[case(9.9, "9,9")]
    #[case(1_056.88, "1\u{a0}056,88")]
    #[case(-1_234.5, "-1\u{a0}234,5")]
    fn number_formatting(#[case] value: f64, #[case] expected: &str) {
        assert_eq!(format_number(value), expected);
    }

    #[test]
    fn currency_rounds_to_whole_units_for_display_only() {
        assert_eq!(format_currency(1_000.49), "1\u{a0}000\u{a0}₽");
        assert_eq!(format_currency(1_000.5), "1\u{a0}001\u{a0}₽");
    }
}
