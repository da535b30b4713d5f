//! Plain-text summaries of a comparison, handed to the advisor and shown
//! to the user.

use std::fmt::Write;

use crate::display::{format_currency, format_percent};
use crate::{Regime, TaxComparison, TaxInputs};

/// Shown in place of a generated recommendation when the advisor is
/// unavailable.
pub const GENERAL_RECOMMENDATION: &str = "\
General Recommendation
- Compare your tax liability under both regimes
- Consider your deductions and exemptions
- Choose the regime that results in lower tax liability";

/// Builds the financial context describing every input and output of a
/// comparison.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use regime_core::{TaxInputs, compute_tax};
/// use regime_core::summary::summarize;
///
/// let inputs = TaxInputs {
///     annual_salary: dec!(800000),
///     section_80c_investment: dec!(150000),
///     hra_exemption: dec!(50000),
///     standard_deduction: dec!(50000),
///     other_deductions: dec!(0),
/// };
/// let text = summarize(&inputs, &compute_tax(&inputs));
///
/// assert!(text.contains("- Old Regime Tax: ₹23,400.00"));
/// assert!(text.contains("Better Regime: Old Regime"));
/// ```
pub fn summarize(
    inputs: &TaxInputs,
    comparison: &TaxComparison,
) -> String {
    let mut text = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(text, "Financial Information:");
    let _ = writeln!(text, "- Annual Salary: {}", format_currency(inputs.annual_salary));
    let _ = writeln!(
        text,
        "- Section 80C Investments: {}",
        format_currency(inputs.section_80c_investment)
    );
    let _ = writeln!(text, "- HRA Exemption: {}", format_currency(inputs.hra_exemption));
    let _ = writeln!(
        text,
        "- Standard Deduction: {}",
        format_currency(inputs.standard_deduction)
    );
    let _ = writeln!(
        text,
        "- Other Deductions: {}",
        format_currency(inputs.other_deductions)
    );
    let _ = writeln!(text);
    let _ = writeln!(text, "Tax Calculations:");
    for regime in Regime::all() {
        let _ = writeln!(
            text,
            "- {} Tax: {}",
            regime.long_label(),
            format_currency(comparison.result(*regime).tax_payable)
        );
    }
    let _ = writeln!(text, "- Tax Savings: {}", format_currency(comparison.savings));
    for regime in Regime::all() {
        let _ = writeln!(
            text,
            "- {} Effective Rate: {}",
            regime.long_label(),
            format_percent(comparison.effective_rate(*regime))
        );
    }
    let _ = writeln!(text);
    let _ = write!(text, "Better Regime: {}", comparison.better_regime.long_label());

    text
}

/// Context for answering a free-text question about the user's situation.
pub fn question_context(
    inputs: &TaxInputs,
    comparison: &TaxComparison,
    question: &str,
) -> String {
    format!(
        "Based on the user's financial information:\n\
         - Annual Salary: {}\n\
         - Current Tax Regime: {}\n\
         - Tax Savings: {}\n\
         \n\
         Question: {}",
        format_currency(inputs.annual_salary),
        comparison.better_regime.label(),
        format_currency(comparison.savings),
        question.trim()
    )
}

/// One-line verdict naming the better regime and the annual saving.
pub fn recommendation_message(comparison: &TaxComparison) -> String {
    let better = comparison.better_regime;
    format!(
        "The {} Tax Regime is better for you. You save {} annually compared to the {}.",
        better.label(),
        format_currency(comparison.savings),
        better.other().long_label()
    )
}
