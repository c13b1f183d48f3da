//! Fetching the compiled news document

use reqwest::header;
use thiserror::Error;

use crate::content::{NewsDocument, Post};

/// Failure modes when loading the news document.
///
/// These go to the diagnostic log only; the end user sees the fixed
/// placeholder text, never raw error detail.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("unexpected status {0}")]
    Status(reqwest::StatusCode),

    #[error("invalid news document: {0}")]
    Invalid(#[from] serde_json::Error),
}

/// Fetch the news document, bypassing caches.
///
/// One GET per call, no retries, no timeout. A hung request simply never
/// resolves, which is acceptable for non-critical content.
pub async fn fetch_posts(url: &str) -> Result<Vec<Post>, FetchError> {
    let response = reqwest::Client::new()
        .get(url)
        .header(header::CACHE_CONTROL, "no-store")
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(FetchError::Status(response.status()));
    }

    let text = response.text().await?;
    let document: NewsDocument = serde_json::from_str(&text)?;

    Ok(document.into_posts())
}
