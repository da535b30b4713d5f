use async_trait::async_trait;
use thiserror::Error;

use crate::models::{NewQuestionLogEntry, QuestionLogEntry};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Record not found")]
    NotFound,

    #[error("Database error: {0}")]
    Database(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Store for questions asked through the Q&A flow and the answers given.
///
/// Calculation results are never persisted; only free text is.
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    async fn log_question(
        &self,
        entry: NewQuestionLogEntry,
    ) -> Result<QuestionLogEntry, RepositoryError>;

    async fn get_question(&self, id: i64) -> Result<QuestionLogEntry, RepositoryError>;

    /// Most recent first. `None` returns everything.
    async fn list_questions(
        &self,
        limit: Option<u32>,
    ) -> Result<Vec<QuestionLogEntry>, RepositoryError>;

    async fn delete_question(&self, id: i64) -> Result<(), RepositoryError>;
}
