//! Ollama HTTP client.

use std::time::Duration;

use sentinel_config::OllamaConfig;
use sentinel_core::outcome::AnalysisResult;
use serde::{Deserialize, Serialize};

use crate::Analyzer;
use crate::error::AnalysisError;
use crate::http::check_response;
use crate::prompt::build_prompt;

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: String,
}

#[derive(Deserialize)]
struct TagsResponse {
    #[serde(default)]
    models: Vec<TagEntry>,
}

#[derive(Deserialize)]
struct TagEntry {
    name: String,
}

/// Client for a local Ollama server.
#[derive(Debug, Clone)]
pub struct OllamaClient {
    http: reqwest::Client,
    base_url: String,
    timeout: Duration,
    tags_timeout: Duration,
    model_filters: Vec<String>,
}

impl OllamaClient {
    /// Build a client from the `[ollama]` configuration section.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::Http`] if the underlying `reqwest::Client`
    /// cannot be built.
    pub fn new(config: &OllamaConfig) -> Result<Self, AnalysisError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("netsentinel/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(config.timeout_secs),
            tags_timeout: Duration::from_secs(config.tags_timeout_secs),
            model_filters: config.model_filters.clone(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Installed models whose names match the configured filters.
    ///
    /// Any failure (server down, non-200, bad JSON) is logged and yields an
    /// empty list, which callers treat as "offline".
    pub async fn list_models(&self) -> Vec<String> {
        match self.fetch_tags().await {
            Ok(names) => names
                .into_iter()
                .filter(|name| self.accepts_model(name))
                .collect(),
            Err(error) => {
                tracing::warn!(base_url = %self.base_url, %error, "model listing failed");
                Vec::new()
            }
        }
    }

    async fn fetch_tags(&self) -> Result<Vec<String>, AnalysisError> {
        let url = format!("{}/api/tags", self.base_url);
        let resp = self
            .http
            .get(&url)
            .timeout(self.tags_timeout)
            .send()
            .await?;
        let resp = check_response(resp).await?;
        let tags: TagsResponse = resp
            .json()
            .await
            .map_err(|e| AnalysisError::Decode(e.to_string()))?;
        Ok(tags.models.into_iter().map(|m| m.name).collect())
    }

    fn accepts_model(&self, name: &str) -> bool {
        self.model_filters.is_empty()
            || self
                .model_filters
                .iter()
                .any(|filter| name.contains(filter.as_str()))
    }

    /// One non-streaming generation call. Returns the trimmed response text.
    async fn generate(&self, prompt: &str, model: &str) -> Result<String, AnalysisError> {
        let url = format!("{}/api/generate", self.base_url);
        let body = GenerateRequest {
            model,
            prompt,
            stream: false,
        };
        let resp = self
            .http
            .post(&url)
            .timeout(self.timeout)
            .json(&body)
            .send()
            .await?;
        let resp = check_response(resp).await?;
        let bytes = resp.bytes().await?;
        let decoded: GenerateResponse =
            serde_json::from_slice(&bytes).map_err(|e| AnalysisError::Decode(e.to_string()))?;
        Ok(decoded.response.trim().to_string())
    }
}

impl Analyzer for OllamaClient {
    async fn analyze(&self, combined_transcript: &str, model: &str) -> AnalysisResult {
        let prompt = build_prompt(combined_transcript);
        tracing::info!(model, prompt_bytes = prompt.len(), "submitting batch analysis");

        let result = match self.generate(&prompt, model).await {
            Ok(text) if text.is_empty() => AnalysisResult::empty_response(),
            Ok(text) => AnalysisResult::report_generated(text),
            Err(error) => {
                tracing::warn!(model, %error, "analysis call failed");
                error.classify(self.timeout.as_secs())
            }
        };
        tracing::info!(model, status = result.status.as_str(), "analysis finished");
        result
    }
}
