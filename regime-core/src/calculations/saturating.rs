//! Decimal arithmetic that clamps to `Decimal::MAX` / `Decimal::MIN`
//! instead of panicking when a result leaves the representable range.
//!
//! The calculators accept any amounts, so every step of the formulas goes
//! through these helpers.

use rust_decimal::Decimal;

fn bound(positive: bool) -> Decimal {
    if positive { Decimal::MAX } else { Decimal::MIN }
}

pub fn add(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    // Overflow needs both operands on the same side of zero.
    a.checked_add(b).unwrap_or_else(|| bound(a.is_sign_positive()))
}

pub fn sub(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    a.checked_sub(b).unwrap_or_else(|| bound(a > b))
}

pub fn mul(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    a.checked_mul(b)
        .unwrap_or_else(|| bound(a.is_sign_positive() == b.is_sign_positive()))
}

/// `b` must be non-zero.
pub fn div(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    a.checked_div(b)
        .unwrap_or_else(|| bound(a.is_sign_positive() == b.is_sign_positive()))
}
