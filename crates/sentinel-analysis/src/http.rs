//! Shared HTTP response helpers.

use crate::error::AnalysisError;

/// Return the response unchanged on success, otherwise
/// [`AnalysisError::Api`] with the status code and raw body.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, AnalysisError> {
    if !resp.status().is_success() {
        return Err(AnalysisError::Api {
            status: resp.status().as_u16(),
            body: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}
