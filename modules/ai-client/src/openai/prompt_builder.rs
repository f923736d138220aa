use anyhow::{anyhow, Result};
use async_trait::async_trait;

use crate::traits::PromptBuilder;

use super::types::*;
use super::OpenAi;

pub struct OpenAiPromptBuilder {
    agent: OpenAi,
    input: String,
    preamble: Option<String>,
    temperature: Option<f32>,
    max_tokens: Option<u32>,
}

impl OpenAiPromptBuilder {
    pub(crate) fn new(agent: OpenAi, input: String) -> Self {
        Self {
            agent,
            input,
            preamble: None,
            temperature: None,
            max_tokens: None,
        }
    }

    fn build_request(&self) -> ChatRequest {
        let mut request = ChatRequest::new(self.agent.model());

        if let Some(ref preamble) = self.preamble {
            request.messages.push(WireMessage::system(preamble));
        }
        if !self.input.is_empty() {
            request.messages.push(WireMessage::user(&self.input));
        }

        request.temperature = self.temperature;
        match self.max_tokens {
            Some(max) => request.token_limit(max),
            None => request,
        }
    }
}

#[async_trait]
impl PromptBuilder for OpenAiPromptBuilder {
    fn preamble(mut self, preamble: impl Into<String>) -> Self {
        self.preamble = Some(preamble.into());
        self
    }

    fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    async fn send(self) -> Result<String> {
        if self.input.trim().is_empty() {
            return Err(anyhow!("Prompt input is empty"));
        }
        let request = self.build_request();
        self.agent.complete(&request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::Agent;

    #[test]
    fn test_preamble_precedes_input() {
        let request = OpenAi::new("sk-test", "gpt-4o-mini")
            .prompt("final question")
            .preamble("system rules")
            .build_request();

        let roles: Vec<Role> = request.messages.iter().map(|m| m.role).collect();
        assert_eq!(roles, vec![Role::System, Role::User]);
        assert_eq!(request.messages[1].content, "final question");
    }

    #[test]
    fn test_temperature_and_token_limit() {
        let request = OpenAi::new("sk-test", "gpt-4o-mini")
            .prompt("hi")
            .temperature(0.3)
            .max_tokens(200)
            .build_request();
        assert_eq!(request.temperature, Some(0.3));
        assert_eq!(request.max_tokens, Some(200));
    }

    #[test]
    fn test_unset_knobs_stay_unset() {
        let request = OpenAi::new("sk-test", "gpt-4o-mini").prompt("hi").build_request();
        assert_eq!(request.temperature, None);
        assert_eq!(request.max_tokens, None);
        assert_eq!(request.max_completion_tokens, None);
    }
}
