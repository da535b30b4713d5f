//! Legacy (old) regime calculator.
//!
//! # Steps
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Clamp the 80C investment to [`SECTION_80C_CAP`] |
//! | 2    | Taxable income = salary - 80C - HRA - standard deduction - other deductions |
//! | 3    | Slab tax from [`SlabSchedule::legacy`] |
//! | 4    | Add 4% cess |
//!
//! Taxable income is not floored at zero. A negative value lands in the
//! first slab and is taxed at zero.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use regime_core::compute_legacy_regime;
//!
//! let result = compute_legacy_regime(
//!     dec!(800000),
//!     dec!(150000),
//!     dec!(50000),
//!     dec!(50000),
//!     dec!(0),
//! );
//!
//! assert_eq!(result.taxable_income, dec!(550000));
//! assert_eq!(result.tax_payable, dec!(23400.00));
//! ```

use rust_decimal::Decimal;
use tracing::trace;

use super::apply_cess;
use crate::calculations::saturating;
use crate::calculations::slabs::SlabSchedule;
use crate::{Regime, RegimeResult, SECTION_80C_CAP};

/// Computes legacy-regime taxable income and cess-inclusive tax.
pub fn compute_legacy_regime(
    salary: Decimal,
    investment_80c: Decimal,
    hra: Decimal,
    standard_deduction: Decimal,
    other_deductions: Decimal,
) -> RegimeResult {
    let effective_investment = investment_80c.min(SECTION_80C_CAP);
    let taxable_income = [effective_investment, hra, standard_deduction, other_deductions]
        .into_iter()
        .fold(salary, saturating::sub);

    let slab_tax = SlabSchedule::legacy().tax_on(taxable_income);
    let tax_payable = apply_cess(slab_tax);

    trace!(
        %effective_investment,
        %taxable_income,
        %slab_tax,
        %tax_payable,
        "legacy regime computed"
    );

    RegimeResult {
        regime: Regime::Legacy,
        taxable_income,
        tax_payable,
    }
}
