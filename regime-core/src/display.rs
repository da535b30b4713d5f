//! Currency and percentage formatting shared by summaries and the CLI.

use rust_decimal::{Decimal, RoundingStrategy};

pub const RUPEE: &str = "₹";

/// Formats an amount as rupees with thousands separators and two decimals,
/// e.g. `₹1,234,567.89`. Negative amounts keep the sign after the symbol.
pub fn format_currency(amount: Decimal) -> String {
    format!("{RUPEE}{}", format_grouped(round_to(amount, 2), 2))
}

/// Formats an amount as whole rupees, e.g. `₹23,400`.
pub fn format_currency_whole(amount: Decimal) -> String {
    format!("{RUPEE}{}", format_grouped(round_to(amount, 0), 0))
}

/// Formats a percentage with one decimal place, e.g. `2.9%`.
pub fn format_percent(rate: Decimal) -> String {
    let mut rounded = round_to(rate, 1);
    rounded.rescale(1);
    format!("{}%", strip_negative_zero(rounded))
}

fn format_grouped(
    value: Decimal,
    dp: u32,
) -> String {
    let mut value = value;
    value.rescale(dp);

    let negative = value.is_sign_negative() && !value.is_zero();
    let text = value.abs().to_string();
    let (integer, fraction) = match text.split_once('.') {
        Some((integer, fraction)) => (integer.to_string(), Some(fraction.to_string())),
        None => (text, None),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (idx, ch) in integer.chars().enumerate() {
        if idx > 0 && (integer.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    match fraction {
        Some(fraction) => format!("{sign}{grouped}.{fraction}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Half-up rounding (midpoints away from zero), the convention for money.
pub fn round_to(
    value: Decimal,
    dp: u32,
) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

fn strip_negative_zero(value: Decimal) -> Decimal {
    if value.is_zero() { value.abs() } else { value }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn format_currency_groups_thousands() {
        assert_eq!(format_currency(dec!(23400)), "₹23,400.00");
        assert_eq!(format_currency(dec!(1234567.891)), "₹1,234,567.89");
        assert_eq!(format_currency(dec!(999)), "₹999.00");
        assert_eq!(format_currency(dec!(100000)), "₹100,000.00");
    }

    #[test]
    fn format_currency_rounds_half_up() {
        assert_eq!(format_currency(dec!(0.026)), "₹0.03");
        assert_eq!(format_currency(dec!(0.005)), "₹0.01");
    }

    #[test]
    fn round_to_moves_midpoints_away_from_zero() {
        assert_eq!(round_to(dec!(123.455), 2), dec!(123.46));
        assert_eq!(round_to(dec!(-123.455), 2), dec!(-123.46));
        assert_eq!(round_to(dec!(999999.999), 2), dec!(1000000.00));
    }

    #[test]
    fn format_currency_zero() {
        assert_eq!(format_currency(Decimal::ZERO), "₹0.00");
    }

    #[test]
    fn format_currency_negative_keeps_sign() {
        assert_eq!(format_currency(dec!(-100000)), "₹-100,000.00");
    }

    #[test]
    fn format_currency_whole_drops_decimals() {
        assert_eq!(format_currency_whole(dec!(23400.49)), "₹23,400");
        assert_eq!(format_currency_whole(dec!(36400.5)), "₹36,401");
    }

    #[test]
    fn format_percent_one_decimal() {
        assert_eq!(format_percent(dec!(2.925)), "2.9%");
        assert_eq!(format_percent(dec!(4.55)), "4.6%");
        assert_eq!(format_percent(dec!(0)), "0.0%");
        assert_eq!(format_percent(dec!(30)), "30.0%");
    }
}
