//! AI-suggested app descriptions.
//!
//! Handlers depend on [`DescriptionGenerator`] so the live Gemini client can
//! be swapped for a stub in tests.

pub mod gemini;

use async_trait::async_trait;

pub use gemini::GeminiDescriber;

/// Error type for description generation failures.
#[derive(Debug, thiserror::Error)]
pub enum DescribeError {
    /// The underlying HTTP request failed (network, DNS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The remote server returned a non-2xx status code.
    #[error("Generation API returned HTTP {0}")]
    HttpStatus(u16),

    /// The response did not contain a usable description.
    #[error("Malformed generation response: {0}")]
    Malformed(String),
}

/// Produces a short description for a web app.
#[async_trait]
pub trait DescriptionGenerator: Send + Sync {
    async fn describe(&self, app_name: &str, url: &str) -> Result<String, DescribeError>;
}
