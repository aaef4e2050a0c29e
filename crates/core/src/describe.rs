//! Prompt and response handling for AI-suggested app descriptions.
//!
//! The HTTP client lives in the API crate; this module only knows what to ask
//! and how to read the answer.

use serde::Deserialize;

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Upper bound on the suggested description, in words.
pub const MAX_DESCRIPTION_WORDS: usize = 15;

#[derive(Debug, Deserialize)]
struct DescriptionPayload {
    description: String,
}

/// Build the prompt asking for a short description of an app.
pub fn build_prompt(app_name: &str, url: &str) -> String {
    format!(
        "I am adding a web application to my dashboard.\n\
         App Name: \"{app_name}\"\n\
         App URL: \"{url}\"\n\n\
         Please generate a short, catchy description (max {MAX_DESCRIPTION_WORDS} words)."
    )
}

/// Read a `{ "description": "..." }` answer.
///
/// Returns `None` for malformed JSON or a blank description.
pub fn parse_description(text: &str) -> Option<String> {
    let payload: DescriptionPayload = serde_json::from_str(text.trim()).ok()?;
    let description = payload.description.trim();
    if description.is_empty() {
        None
    } else {
        Some(description.to_string())
    }
}
