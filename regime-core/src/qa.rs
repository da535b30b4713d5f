//! Free-text questions about the comparison.
//!
//! A question is answered by the advisor in the context of the user's
//! comparison, then logged with its answer and the time it was asked.
//! Nothing is logged when the advisor fails.

use chrono::Utc;
use thiserror::Error;
use tracing::{error, info};

use crate::advisor::{AdvisorError, RegimeAdvisor};
use crate::db::repository::{QuestionRepository, RepositoryError};
use crate::summary::question_context;
use crate::{NewQuestionLogEntry, QuestionLogEntry, TaxComparison, TaxInputs};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuestionError {
    #[error("question is empty")]
    EmptyQuestion,

    #[error("unable to answer question: {0}")]
    Advisor(#[from] AdvisorError),

    #[error("unable to log question: {0}")]
    Repository(#[from] RepositoryError),
}

/// Answers `question` and records it in `repo`.
pub async fn ask_question(
    advisor: &dyn RegimeAdvisor,
    repo: &dyn QuestionRepository,
    inputs: &TaxInputs,
    comparison: &TaxComparison,
    question: &str,
) -> Result<QuestionLogEntry, QuestionError> {
    let question = question.trim();
    if question.is_empty() {
        return Err(QuestionError::EmptyQuestion);
    }

    let context = question_context(inputs, comparison, question);
    let answer = advisor.answer(&context).await.inspect_err(|e| {
        error!(error = %e, "advisor failed to answer question");
    })?;

    let entry = repo
        .log_question(NewQuestionLogEntry {
            question: question.to_string(),
            answer,
            asked_at: Utc::now(),
        })
        .await?;

    info!(id = entry.id, "question logged");
    Ok(entry)
}
