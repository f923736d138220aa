//! One-shot chat completion client for OpenAI-compatible endpoints.
//!
//! ```ignore
//! let text = OpenAi::new(key, "gpt-4o-mini")
//!     .prompt("Why might this headline be misleading?")
//!     .preamble("You are a fact checker.")
//!     .send()
//!     .await?;
//! ```

pub mod openai;
mod traits;

pub use openai::{OpenAi, OpenAiPromptBuilder};
pub use traits::{Agent, PromptBuilder};
