pub mod advisor;
pub mod calculations;
pub mod db;
pub mod display;
pub mod models;
pub mod qa;
pub mod summary;

pub use advisor::{AdvisorError, Recommendation, RegimeAdvisor};
pub use calculations::{compare, compute_legacy_regime, compute_simplified_regime, compute_tax};
pub use db::repository::{QuestionRepository, RepositoryError};
pub use models::*;
