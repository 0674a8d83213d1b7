//! AI suggestions: asks the generation API for wellness suggestions and pulls
//! the JSON object out of its free-form answer.
//!
//! Failures never escape this module: a failed call or an unusable answer is
//! logged and replaced with a fixed placeholder `AiSuggestion`.

use async_trait::async_trait;
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{info, warn};

use crate::analysis::models::AiSuggestion;
use crate::analysis::prompts::build_suggestion_prompt;
use crate::llm_client::LlmError;

pub const UNAVAILABLE_ANALYSIS: &str = "AI suggestion unavailable due to error.";
pub const UNPARSABLE_ANALYSIS: &str = "Could not parse Gemini response.";

/// Sends a prompt to a text-generation backend and returns the raw answer.
///
/// Carried in `AppState` as `Arc<dyn SuggestionFetcher>`; `LlmClient` is the
/// production implementation.
#[async_trait]
pub trait SuggestionFetcher: Send + Sync {
    async fn fetch(&self, prompt: &str) -> Result<String, LlmError>;
}

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("no JSON object found in response")]
    NoObject,

    #[error("JSON object does not match the suggestion shape: {0}")]
    Shape(#[from] serde_json::Error),
}

/// Builds the prompt for `journal_text`, calls the fetcher and extracts the
/// suggestion object. Always returns a value.
pub async fn fetch_suggestions(
    fetcher: &dyn SuggestionFetcher,
    journal_text: &str,
) -> AiSuggestion {
    let prompt = build_suggestion_prompt(journal_text);

    let raw = match fetcher.fetch(&prompt).await {
        Ok(raw) => raw,
        Err(e) => {
            warn!("Gemini request failed: {e}");
            return AiSuggestion::placeholder(UNAVAILABLE_ANALYSIS);
        }
    };

    info!("Raw Gemini response: {raw}");

    match parse_suggestion(&raw) {
        Ok(suggestion) => suggestion,
        Err(e) => {
            warn!("Failed to parse Gemini response: {e}");
            AiSuggestion::placeholder(UNPARSABLE_ANALYSIS)
        }
    }
}

/// Reads the first embedded JSON object that has the `AiSuggestion` shape.
///
/// Objects whose known fields have the wrong types are skipped in favour of
/// later ones; the last shape error is reported if none fits.
pub fn parse_suggestion(raw: &str) -> Result<AiSuggestion, ExtractError> {
    let mut shape_error = None;

    for object in json_objects(raw) {
        match serde_json::from_value(Value::Object(object)) {
            Ok(suggestion) => return Ok(suggestion),
            Err(e) => shape_error = Some(e),
        }
    }

    Err(shape_error.map_or(ExtractError::NoObject, ExtractError::Shape))
}

/// Returns every top-level JSON object embedded in `text`, in order.
///
/// No fence stripping is needed: scanning starts at each `{`, and the parser
/// stops at the object's matching close brace, so leading prose, markdown
/// fences and trailing text are ignored. Scanning resumes after a parsed
/// object, so objects nested inside it are never returned on their own.
/// Braces that do not open a valid object are skipped.
pub fn json_objects(text: &str) -> Vec<Map<String, Value>> {
    let mut objects = Vec::new();
    let mut pos = 0;

    while let Some(offset) = text[pos..].find('{') {
        let start = pos + offset;
        let mut stream = serde_json::Deserializer::from_str(&text[start..]).into_iter::<Value>();

        match stream.next() {
            Some(Ok(Value::Object(object))) => {
                objects.push(object);
                pos = start + stream.byte_offset();
            }
            _ => pos = start + 1,
        }
    }

    objects
}
