pub mod prompt_builder;
pub(crate) mod types;

pub use prompt_builder::OpenAiPromptBuilder;

use anyhow::{anyhow, Context, Result};
use tracing::debug;

use crate::traits::Agent;
use types::{ChatRequest, ChatResponse};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Handle on one chat model. Cloning shares the underlying connection pool.
#[derive(Clone)]
pub struct OpenAi {
    http: reqwest::Client,
    api_key: String,
    model: String,
    endpoint: String,
}

impl OpenAi {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            model: model.into(),
            endpoint: completions_endpoint(DEFAULT_BASE_URL),
        }
    }

    /// Point at another OpenAI-compatible server, e.g. `http://localhost:8080/v1`.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.endpoint = completions_endpoint(&url.into());
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// POST one request and pull the text of the first choice.
    pub(crate) async fn complete(&self, request: &ChatRequest) -> Result<String> {
        debug!(model = %request.model, "OpenAI chat request");

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await
            .context("chat completion request failed")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow!("OpenAI API error ({status}): {body}"));
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .context("malformed chat completion response")?;

        parsed
            .first_content()
            .ok_or_else(|| anyhow!("No choices in response"))
    }
}

fn completions_endpoint(base: &str) -> String {
    format!("{}/chat/completions", base.trim_end_matches('/'))
}

impl Agent for OpenAi {
    type PromptBuilder = OpenAiPromptBuilder;

    fn prompt(&self, input: impl Into<String>) -> OpenAiPromptBuilder {
        OpenAiPromptBuilder::new(self.clone(), input.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoint() {
        let ai = OpenAi::new("sk-test", "gpt-4o");
        assert_eq!(ai.model(), "gpt-4o");
        assert_eq!(ai.endpoint, "https://api.openai.com/v1/chat/completions");
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let ai = OpenAi::new("sk-test", "gpt-4o").with_base_url("http://localhost:8080/v1/");
        assert_eq!(ai.endpoint, "http://localhost:8080/v1/chat/completions");
    }
}
