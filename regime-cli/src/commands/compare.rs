use anyhow::Result;
use tracing::info;

use regime_core::advisor::recommend;
use regime_core::{RegimeAdvisor, TaxInputs, compute_tax};

use crate::report::{
    ComparisonReport, OutputFormat, render_json, render_recommendation, render_text,
};

/// Runs the comparison and, when `advisor` is given, asks it to explain
/// the result.
pub async fn run(
    inputs: &TaxInputs,
    format: OutputFormat,
    advisor: Option<&dyn RegimeAdvisor>,
) -> Result<String> {
    let comparison = compute_tax(inputs);
    info!(
        better = %comparison.better_regime,
        savings = %comparison.savings,
        "comparison complete"
    );

    let recommendation = match advisor {
        Some(advisor) => Some(recommend(advisor, inputs, &comparison).await),
        None => None,
    };

    let output = match format {
        OutputFormat::Json => render_json(&ComparisonReport::new(
            inputs,
            &comparison,
            recommendation.as_ref(),
        ))?,
        OutputFormat::Text => {
            let mut text = render_text(inputs, &comparison);
            if let Some(recommendation) = &recommendation {
                text.push_str("\n\n");
                text.push_str(&render_recommendation(recommendation));
            }
            text
        }
    };
    Ok(output)
}
