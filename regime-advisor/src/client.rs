use std::time::Duration;

use async_trait::async_trait;
use regime_core::{AdvisorError, RegimeAdvisor};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::AdvisorConfig;
use crate::prompts::{
    QUESTION_SYSTEM_PROMPT, RECOMMENDATION_SYSTEM_PROMPT, question_prompt, recommendation_prompt,
};

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ReplyMessage,
}

#[derive(Debug, Deserialize)]
struct ReplyMessage {
    #[serde(default)]
    content: Option<String>,
}

/// [`RegimeAdvisor`] backed by an OpenAI-compatible chat endpoint.
pub struct ChatCompletionAdvisor {
    client: reqwest::Client,
    config: AdvisorConfig,
    api_key: String,
}

impl ChatCompletionAdvisor {
    /// Builds an advisor whose key is read from `config.api_key_env`.
    pub fn from_env(config: AdvisorConfig) -> Result<Self, AdvisorError> {
        let api_key = std::env::var(&config.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| AdvisorError::MissingApiKey(config.api_key_env.clone()))?;
        Self::with_api_key(config, api_key)
    }

    pub fn with_api_key(
        config: AdvisorConfig,
        api_key: impl Into<String>,
    ) -> Result<Self, AdvisorError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AdvisorError::Http(e.to_string()))?;

        Ok(Self {
            client,
            config,
            api_key: api_key.into(),
        })
    }

    pub fn config(&self) -> &AdvisorConfig {
        &self.config
    }

    async fn complete(&self, system: &str, prompt: &str) -> Result<String, AdvisorError> {
        let request = ChatRequest {
            model: &self.config.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        };

        let url = self.config.completions_url();
        debug!(%url, model = %self.config.model, "sending chat completion");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| AdvisorError::Http(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AdvisorError::Http(e.to_string()))?;

        if !status.is_success() {
            warn!(status = status.as_u16(), "chat completion rejected");
            return Err(AdvisorError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatResponse =
            serde_json::from_str(&body).map_err(|e| AdvisorError::Http(e.to_string()))?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .filter(|content| !content.is_empty())
            .ok_or(AdvisorError::EmptyResponse)
    }
}

#[async_trait]
impl RegimeAdvisor for ChatCompletionAdvisor {
    async fn recommend(&self, financial_context: &str) -> Result<String, AdvisorError> {
        self.complete(
            RECOMMENDATION_SYSTEM_PROMPT,
            &recommendation_prompt(financial_context),
        )
        .await
    }

    async fn answer(&self, question_context: &str) -> Result<String, AdvisorError> {
        self.complete(QUESTION_SYSTEM_PROMPT, &question_prompt(question_context))
            .await
    }
}

#[cfg(test)]
mod tests {
    use httpmock::Method::POST;
    use httpmock::MockServer;
    use pretty_assertions::assert_eq;

    use super::*;

    fn advisor_for(server: &MockServer) -> ChatCompletionAdvisor {
        let config = AdvisorConfig {
            base_url: server.url("/v1"),
            model: "test-model".to_string(),
            ..AdvisorConfig::default()
        };
        ChatCompletionAdvisor::with_api_key(config, "test-key").expect("client builds")
    }

    #[tokio::test]
    async fn recommend_returns_first_choice() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/v1/chat/completions")
                    .header("authorization", "Bearer test-key")
                    .body_contains("\"model\":\"test-model\"")
                    .body_contains("\"max_tokens\":1000")
                    .body_contains("Better Regime: Old Regime");
                then.status(200).body(
                    r#"{"choices":[{"message":{"role":"assistant","content":"  Keep the old regime.\n"}}]}"#,
                );
            })
            .await;

        let advisor = advisor_for(&server);
        let reply = advisor.recommend("Better Regime: Old Regime").await;

        mock.assert_async().await;
        assert_eq!(reply, Ok("Keep the old regime.".to_string()));
    }

    #[tokio::test]
    async fn answer_uses_question_system_prompt() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/v1/chat/completions")
                    .body_contains("Provide accurate, helpful answers")
                    .body_contains("Question: Is HRA exempt?\\n\\nProvide a clear");
                then.status(200)
                    .body(r#"{"choices":[{"message":{"content":"Partly."}}]}"#);
            })
            .await;

        let advisor = advisor_for(&server);
        let reply = advisor.answer("Question: Is HRA exempt?").await;

        mock.assert_async().await;
        assert_eq!(reply, Ok("Partly.".to_string()));
    }

    #[tokio::test]
    async fn non_success_status_is_reported() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/v1/chat/completions");
                then.status(401).body("invalid api key");
            })
            .await;

        let reply = advisor_for(&server).recommend("context").await;

        assert_eq!(
            reply,
            Err(AdvisorError::Status {
                status: 401,
                body: "invalid api key".to_string()
            })
        );
    }

    #[tokio::test]
    async fn empty_choices_is_empty_response() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/v1/chat/completions");
                then.status(200).body(r#"{"choices":[]}"#);
            })
            .await;

        let reply = advisor_for(&server).recommend("context").await;

        assert_eq!(reply, Err(AdvisorError::EmptyResponse));
    }

    #[tokio::test]
    async fn malformed_body_is_http_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/v1/chat/completions");
                then.status(200).body("<html>gateway</html>");
            })
            .await;

        let reply = advisor_for(&server).recommend("context").await;

        assert!(matches!(reply, Err(AdvisorError::Http(_))));
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_http_error() {
        let config = AdvisorConfig {
            base_url: "http://127.0.0.1:9/v1".to_string(),
            timeout_secs: 2,
            ..AdvisorConfig::default()
        };
        let advisor = ChatCompletionAdvisor::with_api_key(config, "k").expect("client builds");

        let reply = advisor.answer("context").await;

        assert!(matches!(reply, Err(AdvisorError::Http(_))));
    }

    #[test]
    fn missing_key_variable_is_reported() {
        let config = AdvisorConfig {
            api_key_env: "REGIME_ADVISOR_TEST_KEY_THAT_IS_NEVER_SET".to_string(),
            ..AdvisorConfig::default()
        };

        let result = ChatCompletionAdvisor::from_env(config);

        assert!(matches!(
            result,
            Err(AdvisorError::MissingApiKey(name)) if name == "REGIME_ADVISOR_TEST_KEY_THAT_IS_NEVER_SET"
        ));
    }
}
