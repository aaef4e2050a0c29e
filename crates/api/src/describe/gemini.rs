//! Gemini `generateContent` client.
//!
//! Asks for a JSON answer shaped `{ "description": string }` and reads the
//! first text part of the first candidate.

use std::time::Duration;

use async_trait::async_trait;
use launchpad_core::describe::{build_prompt, parse_description};
use serde::Deserialize;
use serde_json::{json, Value};

use super::{DescribeError, DescriptionGenerator};
use crate::config::GeminiConfig;

/// HTTP request timeout for a single generation call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

// ---------------------------------------------------------------------------
// Response shape
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

// ---------------------------------------------------------------------------
// GeminiDescriber
// ---------------------------------------------------------------------------

pub struct GeminiDescriber {
    client: reqwest::Client,
    config: GeminiConfig,
}

impl GeminiDescriber {
    pub fn new(config: GeminiConfig) -> Result<Self, DescribeError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { client, config })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }
}

/// Request body for a description prompt with a JSON response schema.
pub fn request_body(app_name: &str, url: &str) -> Value {
    json!({
        "contents": [{
            "parts": [{ "text": build_prompt(app_name, url) }]
        }],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": {
                "type": "OBJECT",
                "properties": {
                    "description": { "type": "STRING" }
                },
                "required": ["description"]
            }
        }
    })
}

/// Pull the description out of a raw `generateContent` response.
pub fn extract_description(body: &str) -> Result<String, DescribeError> {
    let response: GenerateResponse =
        serde_json::from_str(body).map_err(|e| DescribeError::Malformed(e.to_string()))?;

    let text = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .and_then(|c| c.parts.into_iter().next())
        .and_then(|p| p.text)
        .ok_or_else(|| DescribeError::Malformed("response has no text part".into()))?;

    parse_description(&text)
        .ok_or_else(|| DescribeError::Malformed("text is not a description payload".into()))
}

#[async_trait]
impl DescriptionGenerator for GeminiDescriber {
    async fn describe(&self, app_name: &str, url: &str) -> Result<String, DescribeError> {
        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.config.api_key)
            .json(&request_body(app_name, url))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(DescribeError::HttpStatus(response.status().as_u16()));
        }

        let body = response.text().await?;
        extract_description(&body)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
