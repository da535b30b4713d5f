//! Simplified (new) regime calculator.
//!
//! No deductions are recognised: gross salary is the taxable income. Slab
//! tax comes from [`SlabSchedule::simplified`], then the 4% cess is added.

use rust_decimal::Decimal;
use tracing::trace;

use super::apply_cess;
use crate::calculations::slabs::SlabSchedule;
use crate::{Regime, RegimeResult};

/// Computes simplified-regime taxable income and cess-inclusive tax.
pub fn compute_simplified_regime(salary: Decimal) -> RegimeResult {
    let taxable_income = salary;
    let slab_tax = SlabSchedule::simplified().tax_on(taxable_income);
    let tax_payable = apply_cess(slab_tax);

    trace!(%taxable_income, %slab_tax, %tax_payable, "simplified regime computed");

    RegimeResult {
        regime: Regime::Simplified,
        taxable_income,
        tax_payable,
    }
}
