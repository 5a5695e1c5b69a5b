//! # sentinel-analysis
//!
//! Inference client for NetSentinel batch analysis.
//!
//! [`OllamaClient`] lists installed models and submits the combined transcript
//! of a run in a single non-streaming generation call. Every outcome of that
//! call, including transport failures and timeouts, comes back as a classified
//! `AnalysisResult`; nothing is raised past [`Analyzer::analyze`].

mod client;
mod error;
mod http;
mod prompt;

use std::future::Future;

use sentinel_core::outcome::AnalysisResult;

pub use client::OllamaClient;
pub use error::AnalysisError;
pub use prompt::build_prompt;

/// Turns a combined transcript into a classified analysis result.
pub trait Analyzer: Send + Sync {
    fn analyze(
        &self,
        combined_transcript: &str,
        model: &str,
    ) -> impl Future<Output = AnalysisResult> + Send;
}
