use std::sync::Arc;

use crate::analysis::suggestions::SuggestionFetcher;
use crate::sentiment::SentimentScorer;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only after startup; cloning only bumps the reference counts.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable polarity scorer. Default: LexiconScorer.
    pub scorer: Arc<dyn SentimentScorer>,
    /// Generation backend for wellness suggestions. Default: LlmClient (Gemini).
    pub fetcher: Arc<dyn SuggestionFetcher>,
}
