//! Renders comparisons for the terminal or as JSON.

use std::fmt::Write;

use clap::ValueEnum;
use serde::Serialize;

use regime_core::display::{format_currency, format_percent};
use regime_core::summary::recommendation_message;
use regime_core::{Recommendation, Regime, TaxComparison, TaxInputs};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// JSON shape of one comparison.
#[derive(Debug, Serialize)]
pub struct ComparisonReport<'a> {
    pub inputs: &'a TaxInputs,
    pub comparison: &'a TaxComparison,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<&'a Recommendation>,
}

impl<'a> ComparisonReport<'a> {
    pub fn new(
        inputs: &'a TaxInputs,
        comparison: &'a TaxComparison,
        recommendation: Option<&'a Recommendation>,
    ) -> Self {
        Self {
            inputs,
            comparison,
            message: recommendation_message(comparison),
            recommendation,
        }
    }
}

/// Side-by-side table of both regimes followed by the verdict.
pub fn render_text(
    inputs: &TaxInputs,
    comparison: &TaxComparison,
) -> String {
    let mut out = String::new();
    let salary = inputs.annual_salary;

    let _ = writeln!(out, "Annual salary: {}", format_currency(salary));
    let _ = writeln!(out);
    let _ = writeln!(out, "{:<18}{:>20}{:>20}", "", "Old Regime", "New Regime");

    let row = |label: &str, f: &dyn Fn(Regime) -> String| {
        format!(
            "{:<18}{:>20}{:>20}",
            label,
            f(Regime::Legacy),
            f(Regime::Simplified)
        )
    };
    let lines = [
        row("Taxable income", &|r| format_currency(comparison.result(r).taxable_income)),
        row("Tax payable", &|r| format_currency(comparison.result(r).tax_payable)),
        row("Take-home", &|r| format_currency(comparison.result(r).take_home(salary))),
        row("Effective rate", &|r| format_percent(comparison.effective_rate(r))),
    ];
    for line in lines {
        let _ = writeln!(out, "{line}");
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Better regime: {}", comparison.better_regime);
    let _ = writeln!(out, "Savings: {}", format_currency(comparison.savings));
    let _ = write!(out, "{}", recommendation_message(comparison));
    out
}

pub fn render_recommendation(recommendation: &Recommendation) -> String {
    let source = if recommendation.generated {
        "Personalized recommendation"
    } else {
        "General recommendation"
    };
    format!("{source}:\n{}", recommendation.details)
}

pub fn render_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}
