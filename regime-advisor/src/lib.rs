//! Chat-completion backed [`regime_core::RegimeAdvisor`].
//!
//! Talks to any OpenAI-compatible `chat/completions` endpoint (Groq by
//! default). The API key always comes from the environment.

pub mod client;
pub mod config;
pub mod prompts;

pub use client::ChatCompletionAdvisor;
pub use config::AdvisorConfig;
