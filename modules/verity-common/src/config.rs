use std::env;
use std::path::PathBuf;

use crate::error::VerityError;

pub const DEFAULT_MODEL_PATH: &str = "fake_news_model.json";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    // Classifier artifact
    pub model_path: PathBuf,

    // Web server
    pub web_host: String,
    pub web_port: u16,

    // Explanations (optional)
    pub openai_api_key: Option<String>,
    pub openai_model: String,
    pub openai_base_url: Option<String>,
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, VerityError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, VerityError> {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let web_port = match non_empty("WEB_PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| VerityError::Config(format!("WEB_PORT must be a number, got {raw:?}")))?,
            None => 3000,
        };

        Ok(Self {
            model_path: non_empty("MODEL_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_MODEL_PATH)),
            web_host: non_empty("WEB_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            web_port,
            openai_api_key: non_empty("OPENAI_API_KEY"),
            openai_model: non_empty("OPENAI_MODEL")
                .unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string()),
            openai_base_url: non_empty("OPENAI_BASE_URL"),
        })
    }
}
