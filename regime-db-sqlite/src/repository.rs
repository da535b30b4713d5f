use std::str::FromStr;

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use regime_core::{NewQuestionLogEntry, QuestionLogEntry, QuestionRepository, RepositoryError};
use sqlx::Row;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::debug;

pub struct SqliteRepository {
    pool: SqlitePool,
}

impl SqliteRepository {
    /// Connect to `database_url`, creating the database file if needed.
    ///
    /// Accepts sqlx URLs (`sqlite:questions.db`), bare paths
    /// (`questions.db`) and `:memory:`.
    pub async fn new(database_url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)
            .with_context(|| format!("Invalid database URL: {}", database_url))?
            .create_if_missing(true);

        // Every in-memory connection is its own database.
        let in_memory = database_url.contains(":memory:") || database_url.contains("mode=memory");
        let mut pool_options = SqlitePoolOptions::new();
        if in_memory {
            pool_options = pool_options.max_connections(1).idle_timeout(None).max_lifetime(None);
        }

        let pool = pool_options
            .connect_with(options)
            .await
            .with_context(|| format!("Failed to connect to database: {}", database_url))?;
        Ok(Self { pool })
    }

    pub async fn new_with_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .context("Failed to run database migrations")?;
        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

fn row_to_question(row: &sqlx::sqlite::SqliteRow) -> Result<QuestionLogEntry, RepositoryError> {
    Ok(QuestionLogEntry {
        id: row
            .try_get("id")
            .map_err(|e| RepositoryError::Database(e.to_string()))?,
        question: row
            .try_get("question")
            .map_err(|e| RepositoryError::Database(e.to_string()))?,
        answer: row
            .try_get("answer")
            .map_err(|e| RepositoryError::Database(e.to_string()))?,
        asked_at: row
            .try_get::<DateTime<Utc>, _>("asked_at")
            .map_err(|e| RepositoryError::Database(format!("Failed to get asked_at: {}", e)))?,
    })
}

#[async_trait]
impl QuestionRepository for SqliteRepository {
    async fn log_question(
        &self,
        entry: NewQuestionLogEntry,
    ) -> Result<QuestionLogEntry, RepositoryError> {
        let result =
            sqlx::query("INSERT INTO questions (question, answer, asked_at) VALUES (?, ?, ?)")
                .bind(&entry.question)
                .bind(&entry.answer)
                .bind(entry.asked_at)
                .execute(&self.pool)
                .await
                .map_err(|e| RepositoryError::Database(e.to_string()))?;

        let id = result.last_insert_rowid();
        debug!(id, "question inserted");
        self.get_question(id).await
    }

    async fn get_question(
        &self,
        id: i64,
    ) -> Result<QuestionLogEntry, RepositoryError> {
        let row = sqlx::query("SELECT id, question, answer, asked_at FROM questions WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?
            .ok_or(RepositoryError::NotFound)?;

        row_to_question(&row)
    }

    async fn list_questions(
        &self,
        limit: Option<u32>,
    ) -> Result<Vec<QuestionLogEntry>, RepositoryError> {
        // SQLite treats a negative LIMIT as "no limit".
        let limit = limit.map(i64::from).unwrap_or(-1);

        let rows = sqlx::query(
            "SELECT id, question, answer, asked_at FROM questions
             ORDER BY asked_at DESC, id DESC
             LIMIT ?",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::Database(e.to_string()))?;

        rows.iter().map(row_to_question).collect()
    }

    async fn delete_question(
        &self,
        id: i64,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM questions WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
