use async_trait::async_trait;
use tracing::info;

use regime_core::db::{DbConfig, RepositoryFactory};
use regime_core::{QuestionRepository, RepositoryError};

use crate::repository::SqliteRepository;

/// [`RepositoryFactory`] for SQLite.
///
/// Register this with a [`regime_core::db::RepositoryRegistry`] to make the
/// `"sqlite"` backend available:
///
/// ```rust,no_run
/// use regime_core::db::RepositoryRegistry;
/// use regime_db_sqlite::SqliteRepositoryFactory;
///
/// let mut registry = RepositoryRegistry::new();
/// registry.register(Box::new(SqliteRepositoryFactory));
/// ```
pub struct SqliteRepositoryFactory;

#[async_trait]
impl RepositoryFactory for SqliteRepositoryFactory {
    fn backend_name(&self) -> &'static str {
        "sqlite"
    }

    /// Open the database described by `config.connection_string` and run
    /// the embedded migrations.
    ///
    /// Accepted connection-string values:
    /// * A bare file path, e.g. `"questions.db"`.  The file is created if it
    ///   does not exist.
    /// * A sqlx URL, e.g. `"sqlite:questions.db"`.
    /// * `":memory:"`, an ephemeral in-memory database (useful for tests).
    async fn create(
        &self,
        config: &DbConfig,
    ) -> Result<Box<dyn QuestionRepository>, RepositoryError> {
        let repo = SqliteRepository::new(&config.connection_string)
            .await
            .map_err(|e| RepositoryError::Connection(format!("{e:#}")))?;
        repo.run_migrations()
            .await
            .map_err(|e| RepositoryError::Database(format!("{e:#}")))?;

        info!(connection = %config.connection_string, "sqlite question log ready");
        Ok(Box::new(repo))
    }
}
