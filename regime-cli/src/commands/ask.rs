use anyhow::{Context, Result};

use regime_core::qa::ask_question;
use regime_core::{QuestionRepository, RegimeAdvisor, TaxInputs, compute_tax};

/// Answers `question` and logs it. Nothing is logged when the advisor fails.
pub async fn run(
    advisor: &dyn RegimeAdvisor,
    repo: &dyn QuestionRepository,
    inputs: &TaxInputs,
    question: &str,
) -> Result<String> {
    let comparison = compute_tax(inputs);
    let entry = ask_question(advisor, repo, inputs, &comparison, question)
        .await
        .context("unable to process your question")?;

    Ok(entry.answer)
}
