//! Comparison metrics derived from the two regime results.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::debug;

use super::regimes::{compute_legacy_regime, compute_simplified_regime};
use super::saturating;
use crate::{Regime, RegimeResult, TaxComparison, TaxInputs};

/// Tax as a percentage of gross salary. Zero salary yields exactly zero.
pub fn effective_rate(
    tax: Decimal,
    salary: Decimal,
) -> Decimal {
    if salary.is_zero() {
        return Decimal::ZERO;
    }
    saturating::mul(saturating::div(tax, salary), dec!(100))
}

/// Picks the regime with the strictly lower tax; a tie goes to legacy.
///
/// Every place that reports a "better regime" goes through this function
/// so the label never disagrees with itself.
pub fn better_regime(
    legacy_tax: Decimal,
    simplified_tax: Decimal,
) -> Regime {
    if simplified_tax < legacy_tax {
        Regime::Simplified
    } else {
        Regime::Legacy
    }
}

/// Builds the comparison between a legacy and a simplified result.
pub fn compare(
    legacy: RegimeResult,
    simplified: RegimeResult,
    salary: Decimal,
) -> TaxComparison {
    let savings = saturating::sub(legacy.tax_payable, simplified.tax_payable).abs();
    let better_regime = better_regime(legacy.tax_payable, simplified.tax_payable);
    let legacy_effective_rate = effective_rate(legacy.tax_payable, salary);
    let simplified_effective_rate = effective_rate(simplified.tax_payable, salary);

    TaxComparison {
        legacy,
        simplified,
        savings,
        better_regime,
        legacy_effective_rate,
        simplified_effective_rate,
    }
}

/// Runs both calculators on `inputs` and compares them.
pub fn compute_tax(inputs: &TaxInputs) -> TaxComparison {
    let legacy = compute_legacy_regime(
        inputs.annual_salary,
        inputs.section_80c_investment,
        inputs.hra_exemption,
        inputs.standard_deduction,
        inputs.other_deductions,
    );
    let simplified = compute_simplified_regime(inputs.annual_salary);

    let comparison = compare(legacy, simplified, inputs.annual_salary);

    debug!(
        legacy_tax = %comparison.legacy.tax_payable,
        simplified_tax = %comparison.simplified.tax_payable,
        savings = %comparison.savings,
        better = %comparison.better_regime,
        "regimes compared"
    );

    comparison
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn result(
        regime: Regime,
        tax: Decimal,
    ) -> RegimeResult {
        RegimeResult {
            regime,
            taxable_income: dec!(0),
            tax_payable: tax,
        }
    }

    // =========================================================================
    // effective_rate tests
    // =========================================================================

    #[test]
    fn effective_rate_is_percentage_of_salary() {
        assert_eq!(effective_rate(dec!(23400), dec!(800000)), dec!(2.925));
        assert_eq!(effective_rate(dec!(36400), dec!(800000)), dec!(4.55));
    }

    #[test]
    fn effective_rate_zero_salary_returns_zero() {
        assert_eq!(effective_rate(dec!(0), dec!(0)), Decimal::ZERO);
        assert_eq!(effective_rate(dec!(5000), dec!(0)), Decimal::ZERO);
    }

    // =========================================================================
    // better_regime tests
    // =========================================================================

    #[test]
    fn better_regime_picks_lower_tax() {
        assert_eq!(better_regime(dec!(23400), dec!(36400)), Regime::Legacy);
        assert_eq!(better_regime(dec!(36400), dec!(23400)), Regime::Simplified);
    }

    #[test]
    fn better_regime_tie_goes_to_legacy() {
        assert_eq!(better_regime(dec!(15600), dec!(15600)), Regime::Legacy);
        assert_eq!(better_regime(dec!(0), dec!(0)), Regime::Legacy);
    }

    // =========================================================================
    // compare tests
    // =========================================================================

    #[test]
    fn compare_reference_scenario() {
        let comparison = compare(
            result(Regime::Legacy, dec!(23400)),
            result(Regime::Simplified, dec!(36400)),
            dec!(800000),
        );

        assert_eq!(comparison.savings, dec!(13000));
        assert_eq!(comparison.better_regime, Regime::Legacy);
        assert_eq!(comparison.better().tax_payable, dec!(23400));
    }

    #[test]
    fn compare_savings_is_absolute() {
        let comparison = compare(
            result(Regime::Legacy, dec!(50000)),
            result(Regime::Simplified, dec!(20000)),
            dec!(1000000),
        );

        assert_eq!(comparison.savings, dec!(30000));
        assert_eq!(comparison.better_regime, Regime::Simplified);
        assert_eq!(comparison.legacy_effective_rate, dec!(5));
        assert_eq!(comparison.simplified_effective_rate, dec!(2));
    }

    #[test]
    fn compare_with_zero_salary_has_zero_rates() {
        let comparison = compare(
            result(Regime::Legacy, dec!(0)),
            result(Regime::Simplified, dec!(0)),
            dec!(0),
        );

        assert_eq!(comparison.savings, dec!(0));
        assert_eq!(comparison.better_regime, Regime::Legacy);
        assert_eq!(comparison.legacy_effective_rate, dec!(0));
        assert_eq!(comparison.simplified_effective_rate, dec!(0));
    }

    // =========================================================================
    // compute_tax tests
    // =========================================================================

    #[test]
    fn compute_tax_runs_both_regimes() {
        let inputs = TaxInputs {
            annual_salary: dec!(800000),
            section_80c_investment: dec!(150000),
            hra_exemption: dec!(50000),
            standard_deduction: dec!(50000),
            other_deductions: dec!(0),
        };

        let comparison = compute_tax(&inputs);

        assert_eq!(comparison.legacy.taxable_income, dec!(550000));
        assert_eq!(comparison.legacy.tax_payable, dec!(23400));
        assert_eq!(comparison.simplified.taxable_income, dec!(800000));
        assert_eq!(comparison.simplified.tax_payable, dec!(36400));
        assert_eq!(comparison.savings, dec!(13000));
        assert_eq!(comparison.better_regime, Regime::Legacy);
        assert_eq!(comparison.result(Regime::Simplified).regime, Regime::Simplified);
    }

    #[test]
    fn compute_tax_without_deductions_favours_simplified() {
        let inputs = TaxInputs {
            annual_salary: dec!(1000000),
            ..TaxInputs::default()
        };

        let comparison = compute_tax(&inputs);

        // legacy: 112500 * 1.04 = 117000; simplified: 60000 * 1.04 = 62400
        assert_eq!(comparison.legacy.tax_payable, dec!(117000));
        assert_eq!(comparison.simplified.tax_payable, dec!(62400));
        assert_eq!(comparison.better_regime, Regime::Simplified);
        assert_eq!(comparison.savings, dec!(54600));
    }

    #[test]
    fn compute_tax_zero_salary() {
        let comparison = compute_tax(&TaxInputs::default());

        assert_eq!(comparison.simplified.tax_payable, dec!(0));
        assert_eq!(comparison.simplified_effective_rate, dec!(0));
        assert_eq!(comparison.legacy_effective_rate, dec!(0));
    }

    #[test]
    fn compute_tax_saturates_rate_for_tiny_salary_and_huge_negative_deduction() {
        let inputs = TaxInputs {
            annual_salary: dec!(0.01),
            other_deductions: Decimal::from_scientific("-1e28").unwrap(),
            ..TaxInputs::default()
        };

        let comparison = compute_tax(&inputs);

        assert!(comparison.legacy.tax_payable > Decimal::from_scientific("1e27").unwrap());
        assert_eq!(comparison.legacy_effective_rate, Decimal::MAX);
        assert_eq!(comparison.simplified_effective_rate, Decimal::ZERO);
        assert_eq!(comparison.better_regime, Regime::Simplified);
    }

    #[test]
    fn effective_rate_saturates_instead_of_overflowing() {
        assert_eq!(effective_rate(Decimal::MAX, dec!(0.5)), Decimal::MAX);
        assert_eq!(effective_rate(Decimal::MAX, dec!(-0.5)), Decimal::MIN);
    }
}
