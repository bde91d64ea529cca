//! Display formatting for money and dates.
//!
//! Dates display as `DD/MM/YYYY` and persist as ISO 8601; money displays
//! with grouped thousands and exactly two decimal places, with the
//! separator pair chosen per locale.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::quote::round_half_up;

/// Decimal/grouping separator convention for money display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeparatorStyle {
    /// `1,234.56` — decimal point, comma grouping.
    #[default]
    DotDecimal,
    /// `1.234,56` — decimal comma, dot grouping.
    CommaDecimal,
}

/// Format an amount for display: grouped thousands, exactly 2 decimal
/// places, rounded half-up.
pub fn format_money(amount: Decimal, style: SeparatorStyle) -> String {
    let rounded = round_half_up(amount, 2);
    let plain = format!("{rounded:.2}");

    let (sign, digits) = match plain.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", plain.as_str()),
    };
    // "{:.2}" always yields integer part, '.', two fraction digits.
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits, "00"));

    let (group_sep, decimal_sep) = match style {
        SeparatorStyle::DotDecimal => (',', '.'),
        SeparatorStyle::CommaDecimal => ('.', ','),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(group_sep);
        }
        grouped.push(ch);
    }

    format!("{sign}{grouped}{decimal_sep}{frac_part}")
}

/// Format a date for display: `DD/MM/YYYY`.
pub fn format_display_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Format a date for storage: ISO 8601 calendar date (`YYYY-MM-DD`).
pub fn storage_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn money_grouping() {
        assert_eq!(format_money(dec!(0), SeparatorStyle::DotDecimal), "0.00");
        assert_eq!(format_money(dec!(42.5), SeparatorStyle::DotDecimal), "42.50");
        assert_eq!(
            format_money(dec!(1234.56), SeparatorStyle::DotDecimal),
            "1,234.56"
        );
        assert_eq!(
            format_money(dec!(1234567.891), SeparatorStyle::DotDecimal),
            "1,234,567.89"
        );
    }

    #[test]
    fn money_comma_decimal() {
        assert_eq!(
            format_money(dec!(1234.56), SeparatorStyle::CommaDecimal),
            "1.234,56"
        );
        assert_eq!(format_money(dec!(24.95), SeparatorStyle::CommaDecimal), "24,95");
    }

    #[test]
    fn money_half_up() {
        assert_eq!(format_money(dec!(2.005), SeparatorStyle::DotDecimal), "2.01");
        assert_eq!(format_money(dec!(2.004), SeparatorStyle::DotDecimal), "2.00");
    }

    #[test]
    fn date_formats() {
        let d = NaiveDate::from_ymd_opt(2025, 2, 5).unwrap();
        assert_eq!(format_display_date(d), "05/02/2025");
        assert_eq!(storage_date(d), "2025-02-05");
    }
}
