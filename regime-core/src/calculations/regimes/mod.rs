//! Per-regime liability calculators.
//!
//! Both calculators are total functions: they accept any amounts, never
//! fail, and hold no state between calls.

pub mod legacy;
pub mod simplified;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::calculations::saturating;

pub use legacy::compute_legacy_regime;
pub use simplified::compute_simplified_regime;

/// Health and education cess added on top of slab tax under both regimes.
pub const CESS_RATE: Decimal = dec!(0.04);

/// Adds the 4% cess to slab tax.
pub fn apply_cess(tax: Decimal) -> Decimal {
    saturating::add(tax, saturating::mul(tax, CESS_RATE))
}
