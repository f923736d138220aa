//! Optional prose explanation of a verdict from a chat-completion model.
//!
//! Explanations are best effort: a failure never affects the
//! classification result, it only swaps in [`EXPLANATION_UNAVAILABLE`].

use ai_client::{Agent, OpenAi, PromptBuilder};
use anyhow::Result;
use async_trait::async_trait;
use tracing::warn;

use verity_common::Label;

pub const EXPLANATION_UNAVAILABLE: &str = "Explanation not available.";

/// Longest slice of the submitted text embedded in a prompt, in bytes.
pub const MAX_PROMPT_TEXT_BYTES: usize = 4000;

const SYSTEM_PROMPT: &str = "You are a careful news fact-checking assistant. \
Answer in plain prose, at most five sentences, without markdown.";

#[async_trait]
pub trait Explainer: Send + Sync {
    async fn explain(&self, text: &str, label: Label) -> Result<String>;
}

/// Prompt embedding the predicted label and the user's text.
pub fn build_prompt(text: &str, label: Label) -> String {
    let text = clip_to_bytes(text.trim(), MAX_PROMPT_TEXT_BYTES);
    format!(
        "A machine-learning classifier labeled the following news text as {label}.\n\
         Explain briefly why this news might be {label}, pointing at concrete \
         signals in the text.\n\nNews text:\n{text}"
    )
}

/// Longest prefix of `text` within `max_bytes` that ends on a char boundary.
fn clip_to_bytes(text: &str, max_bytes: usize) -> &str {
    let end = text
        .char_indices()
        .map(|(i, c)| i + c.len_utf8())
        .take_while(|&end| end <= max_bytes)
        .last()
        .unwrap_or(0);
    &text[..end]
}

/// Ask the explainer, falling back to the fixed unavailable message.
pub async fn explain_or_fallback(explainer: &dyn Explainer, text: &str, label: Label) -> String {
    match explainer.explain(text, label).await {
        Ok(explanation) if !explanation.trim().is_empty() => explanation.trim().to_string(),
        Ok(_) => {
            warn!("Explainer returned an empty response");
            EXPLANATION_UNAVAILABLE.to_string()
        }
        Err(e) => {
            warn!(error = %e, "Explanation request failed");
            EXPLANATION_UNAVAILABLE.to_string()
        }
    }
}

// --- OpenAI-backed explainer ---

pub struct OpenAiExplainer {
    agent: OpenAi,
}

impl OpenAiExplainer {
    pub fn new(agent: OpenAi) -> Self {
        Self { agent }
    }
}

#[async_trait]
impl Explainer for OpenAiExplainer {
    async fn explain(&self, text: &str, label: Label) -> Result<String> {
        self.agent
            .prompt(build_prompt(text, label))
            .preamble(SYSTEM_PROMPT)
            .temperature(0.3)
            .max_tokens(300)
            .send()
            .await
    }
}
