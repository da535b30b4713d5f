use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::{debug, warn};

use regime_advisor::{AdvisorConfig, ChatCompletionAdvisor};
use regime_core::db::{DbConfig, RepositoryRegistry};
use regime_core::{AdvisorError, QuestionRepository, RegimeAdvisor};
use regime_db_sqlite::SqliteRepositoryFactory;

use crate::cli::{Cli, Command};
use crate::commands::{self, parse_income};
use crate::config::AppConfig;

/// Create a [`RepositoryRegistry`] with every backend compiled into this
/// binary.
pub fn build_registry() -> RepositoryRegistry {
    let mut registry = RepositoryRegistry::new();
    registry.register(Box::new(SqliteRepositoryFactory));
    registry
}

pub async fn open_repository(config: &DbConfig) -> Result<Box<dyn QuestionRepository>> {
    debug!(backend = %config.backend, "opening question log");
    build_registry()
        .create(config)
        .await
        .with_context(|| format!("failed to open question log '{}'", config.connection_string))
}

/// Stands in for the real advisor when it cannot be constructed, so every
/// request fails with the construction error and callers take their
/// fallback path.
struct UnavailableAdvisor(AdvisorError);

#[async_trait]
impl RegimeAdvisor for UnavailableAdvisor {
    async fn recommend(
        &self,
        _financial_context: &str,
    ) -> Result<String, AdvisorError> {
        Err(self.0.clone())
    }

    async fn answer(
        &self,
        _question_context: &str,
    ) -> Result<String, AdvisorError> {
        Err(self.0.clone())
    }
}

pub fn build_advisor(config: &AdvisorConfig) -> Box<dyn RegimeAdvisor> {
    match ChatCompletionAdvisor::from_env(config.clone()) {
        Ok(advisor) => Box::new(advisor),
        Err(error) => {
            warn!(%error, "advisor not configured");
            Box::new(UnavailableAdvisor(error))
        }
    }
}

/// Dispatches the parsed command and returns what to print.
pub async fn run(
    cli: Cli,
    config: &AppConfig,
) -> Result<String> {
    match cli.command {
        Command::Compare {
            income,
            explain,
            format,
        } => {
            let inputs = parse_income(&income.to_form())?;
            let advisor = explain.then(|| build_advisor(&config.advisor));
            commands::compare::run(&inputs, format, advisor.as_deref()).await
        }
        Command::Batch { file, format } => commands::batch::run(&file, format),
        Command::Ask { question, income } => {
            let inputs = parse_income(&income.to_form())?;
            // Without an advisor nothing can be logged, so leave the log untouched.
            let advisor = ChatCompletionAdvisor::from_env(config.advisor.clone())
                .context("unable to process your question")?;
            let repo = open_repository(&config.database).await?;
            commands::ask::run(&advisor, repo.as_ref(), &inputs, &question).await
        }
        Command::History { limit } => {
            let repo = open_repository(&config.database).await?;
            commands::history::run(repo.as_ref(), limit).await
        }
    }
}
