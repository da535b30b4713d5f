use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::repository::{QuestionRepository, RepositoryError};

/// Which question-log backend to open and how to reach it.
///
/// The `connection_string` is handed to the backend untouched; for SQLite
/// it is a file path, a `sqlite:` URL or `:memory:`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DbConfig {
    pub backend: String,
    pub connection_string: String,
}

impl DbConfig {
    pub fn sqlite(connection_string: impl Into<String>) -> Self {
        Self {
            backend: "sqlite".to_string(),
            connection_string: connection_string.into(),
        }
    }
}

impl Default for DbConfig {
    fn default() -> Self {
        Self::sqlite(":memory:")
    }
}

/// Opens repositories for one backend.
#[async_trait]
pub trait RepositoryFactory: Send + Sync {
    /// Name matched against [`DbConfig::backend`].
    fn backend_name(&self) -> &'static str;

    /// Connect and prepare (migrate) a repository.
    async fn create(
        &self,
        config: &DbConfig,
    ) -> Result<Box<dyn QuestionRepository>, RepositoryError>;
}

/// Backends compiled into the running binary, looked up by name.
#[derive(Default)]
pub struct RepositoryRegistry {
    factories: BTreeMap<&'static str, Box<dyn RepositoryFactory>>,
}

impl RepositoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `factory`, replacing any earlier one with the same name.
    pub fn register(
        &mut self,
        factory: Box<dyn RepositoryFactory>,
    ) {
        self.factories.insert(factory.backend_name(), factory);
    }

    /// Registered backend names in alphabetical order.
    pub fn available_backends(&self) -> Vec<&'static str> {
        self.factories.keys().copied().collect()
    }

    /// Opens a repository with the factory named by `config.backend`.
    ///
    /// Fails with [`RepositoryError::Configuration`] for an unknown backend;
    /// factory errors are passed through.
    pub async fn create(
        &self,
        config: &DbConfig,
    ) -> Result<Box<dyn QuestionRepository>, RepositoryError> {
        let Some(factory) = self.factories.get(config.backend.as_str()) else {
            return Err(RepositoryError::Configuration(format!(
                "unknown backend '{}'; available: {}",
                config.backend,
                self.available_backends().join(", ")
            )));
        };

        debug!(backend = factory.backend_name(), "creating question repository");
        factory.create(config).await
    }
}
