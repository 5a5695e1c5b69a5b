//! Analysis error types.
//!
//! These never leave the crate as errors: [`crate::OllamaClient`] folds each
//! one into a classified `AnalysisResult`.

use sentinel_core::outcome::AnalysisResult;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The inference server returned a non-success status code.
    #[error("API error ({status}): {body}")]
    Api { status: u16, body: String },

    /// The response body was not the expected JSON shape.
    #[error("decode error: {0}")]
    Decode(String),
}

impl AnalysisError {
    /// Map onto the analysis status vocabulary.
    ///
    /// `limit_secs` is the receive budget reported on timeouts.
    #[must_use]
    pub fn classify(&self, limit_secs: u64) -> AnalysisResult {
        match self {
            Self::Http(e) if e.is_timeout() => AnalysisResult::timeout(limit_secs),
            Self::Http(e) if e.is_decode() => AnalysisResult::exception(&e.to_string()),
            Self::Http(e) if e.is_connect() || e.is_request() || e.is_body() => {
                AnalysisResult::connection_error(&e.to_string())
            }
            Self::Http(e) => AnalysisResult::exception(&e.to_string()),
            Self::Api { status, body } => AnalysisResult::api_error(*status, body),
            Self::Decode(msg) => AnalysisResult::exception(msg),
        }
    }
}
