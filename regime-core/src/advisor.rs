//! Natural-language explanation of a comparison.
//!
//! The engine never talks to a text-generation service directly. It hands a
//! plain-text context (see [`crate::summary`]) to a [`RegimeAdvisor`] and
//! falls back to a fixed recommendation when the advisor fails.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::summary::{GENERAL_RECOMMENDATION, recommendation_message, summarize};
use crate::{TaxComparison, TaxInputs};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AdvisorError {
    #[error("API key not found in environment variable '{0}'")]
    MissingApiKey(String),

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("advisor returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("advisor returned no content")]
    EmptyResponse,
}

/// A service that turns a financial context into advice.
#[async_trait]
pub trait RegimeAdvisor: Send + Sync {
    /// Explains which regime suits the taxpayer described by `financial_context`.
    async fn recommend(
        &self,
        financial_context: &str,
    ) -> Result<String, AdvisorError>;

    /// Answers a free-text question. `question_context` already embeds the
    /// question alongside the taxpayer's situation.
    async fn answer(
        &self,
        question_context: &str,
    ) -> Result<String, AdvisorError>;
}

/// What the user sees under the comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Verdict computed locally; always present.
    pub headline: String,

    /// Advisor reply, or [`GENERAL_RECOMMENDATION`] when it failed.
    pub details: String,

    /// True when `details` came from the advisor.
    pub generated: bool,
}

/// Asks `advisor` to explain `comparison`, degrading to the general
/// recommendation on any advisor error.
pub async fn recommend(
    advisor: &dyn RegimeAdvisor,
    inputs: &TaxInputs,
    comparison: &TaxComparison,
) -> Recommendation {
    let headline = recommendation_message(comparison);
    let context = summarize(inputs, comparison);

    debug!(better = %comparison.better_regime, "requesting recommendation");
    match advisor.recommend(&context).await {
        Ok(details) => Recommendation {
            headline,
            details,
            generated: true,
        },
        Err(error) => {
            warn!(%error, "advisor unavailable, using general recommendation");
            Recommendation {
                headline,
                details: GENERAL_RECOMMENDATION.to_string(),
                generated: false,
            }
        }
    }
}
