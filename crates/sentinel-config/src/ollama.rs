//! Ollama inference endpoint configuration.

use serde::{Deserialize, Serialize};

fn default_base_url() -> String {
    "http://localhost:11434".to_string()
}

/// Receive timeout for `/api/generate`, in seconds.
const fn default_timeout_secs() -> u64 {
    300
}

/// Timeout for the `/api/tags` model listing, in seconds.
const fn default_tags_timeout_secs() -> u64 {
    2
}

fn default_model_filters() -> Vec<String> {
    ["deepseek", "qwen", "mistral", "llama"]
        .into_iter()
        .map(String::from)
        .collect()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OllamaConfig {
    /// Base URL of the Ollama server.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_tags_timeout_secs")]
    pub tags_timeout_secs: u64,

    /// Substrings a model name must contain (any of) to be offered for selection.
    /// Empty means every installed model is offered.
    #[serde(default = "default_model_filters")]
    pub model_filters: Vec<String>,
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            tags_timeout_secs: default_tags_timeout_secs(),
            model_filters: default_model_filters(),
        }
    }
}
