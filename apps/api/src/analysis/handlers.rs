//! Axum route handler for journal analysis.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use tracing::info;

use crate::analysis::models::{AnalyzeResponse, JournalEntry};
use crate::analysis::suggestions::fetch_suggestions;
use crate::errors::AppError;
use crate::sentiment::analyze_sentiment;
use crate::state::AppState;

/// POST /analyze
///
/// Scores the entry's sentiment and attaches AI wellness suggestions.
/// Only a malformed body fails; AI errors are folded into `ai_analysis`.
pub async fn handle_analyze(
    State(state): State<AppState>,
    payload: Result<Json<JournalEntry>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let Json(entry) = payload?;
    let text = entry.text.trim();
    info!("Received journal entry: {text:?}");

    let sentiment = analyze_sentiment(state.scorer.as_ref(), text);
    info!(
        "Computed sentiment: {:?} (polarity {})",
        sentiment.sentiment, sentiment.polarity
    );

    let ai_analysis = fetch_suggestions(state.fetcher.as_ref(), text).await;

    let response = AnalyzeResponse {
        sentiment,
        ai_analysis,
    };
    info!(
        "Analysis payload: {}",
        serde_json::to_string(&response).unwrap_or_default()
    );

    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::analysis::suggestions::SuggestionFetcher;
    use crate::llm_client::LlmError;
    use crate::routes::build_router;
    use crate::sentiment::{LexiconScorer, SentimentScorer};
    use crate::state::AppState;

    struct FixedScorer(f64);

    impl SentimentScorer for FixedScorer {
        fn polarity(&self, _text: &str) -> f64 {
            self.0
        }
    }

    /// Records every prompt it receives and answers with `reply`, or fails when `None`.
    struct StubFetcher {
        reply: Option<String>,
        prompts: Mutex<Vec<String>>,
    }

    impl StubFetcher {
        fn replying(reply: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Some(reply.to_string()),
                prompts: Mutex::new(Vec::new()),
            })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self {
                reply: None,
                prompts: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl SuggestionFetcher for StubFetcher {
        async fn fetch(&self, prompt: &str) -> Result<String, LlmError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.reply.clone().ok_or(LlmError::EmptyContent)
        }
    }

    fn app_state(
        scorer: Arc<dyn SentimentScorer>,
        fetcher: Arc<dyn SuggestionFetcher>,
    ) -> AppState {
        AppState { scorer, fetcher }
    }

    async fn post_analyze(state: AppState, body: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri("/analyze")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let response = build_router(state).oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    const VALID_REPLY: &str = r#"Of course! {"analysis": "You sound upbeat.", "suggestions": ["Share the news", "Plan a treat"], "time_estimate": "1 hour", "follow_up_question": "What made today special?"}"#;

    #[tokio::test]
    async fn test_positive_polarity_with_embedded_json() {
        let state = app_state(
            Arc::new(FixedScorer(0.5)),
            StubFetcher::replying(VALID_REPLY),
        );

        let (status, body) = post_analyze(state, r#"{"text": "I love this!"}"#).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "sentiment": "positive",
                "polarity": 0.5,
                "ai_analysis": {
                    "analysis": "You sound upbeat.",
                    "suggestions": ["Share the news", "Plan a treat"],
                    "time_estimate": "1 hour",
                    "follow_up_question": "What made today special?"
                }
            })
        );
    }

    #[tokio::test]
    async fn test_fetch_error_still_returns_ok_with_placeholder() {
        let state = app_state(Arc::new(FixedScorer(-0.6)), StubFetcher::failing());

        let (status, body) = post_analyze(state, r#"{"text": "Awful week."}"#).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["sentiment"], "negative");
        assert_eq!(
            body["ai_analysis"],
            json!({
                "analysis": "AI suggestion unavailable due to error.",
                "suggestions": [],
                "time_estimate": "",
                "follow_up_question": ""
            })
        );
    }

    #[tokio::test]
    async fn test_reply_without_json_gives_parse_placeholder() {
        let state = app_state(
            Arc::new(FixedScorer(0.0)),
            StubFetcher::replying("I'd suggest a short walk."),
        );

        let (status, body) = post_analyze(state, r#"{"text": "Ordinary day."}"#).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["sentiment"], "neutral");
        assert_eq!(
            body["ai_analysis"],
            json!({
                "analysis": "Could not parse Gemini response.",
                "suggestions": [],
                "time_estimate": "",
                "follow_up_question": ""
            })
        );
    }

    #[tokio::test]
    async fn test_empty_text_is_neutral_zero() {
        let state = app_state(Arc::new(LexiconScorer::new()), StubFetcher::replying("{}"));

        let (status, body) = post_analyze(state, r#"{"text": ""}"#).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["sentiment"], "neutral");
        assert_eq!(body["polarity"], 0.0);
    }

    #[tokio::test]
    async fn test_boundary_polarities_are_neutral() {
        for polarity in [0.2, -0.2] {
            let state = app_state(Arc::new(FixedScorer(polarity)), StubFetcher::replying("{}"));
            let (_, body) = post_analyze(state, r#"{"text": "meh"}"#).await;
            assert_eq!(body["sentiment"], "neutral", "polarity {polarity}");
        }
    }

    #[tokio::test]
    async fn test_prompt_contains_trimmed_text() {
        let fetcher = StubFetcher::replying(VALID_REPLY);
        let state = app_state(Arc::new(LexiconScorer::new()), fetcher.clone());

        post_analyze(state, r#"{"text": "   Felt great after the run.  \n"}"#).await;

        let prompts = fetcher.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("\nFelt great after the run.\n"));
    }

    #[tokio::test]
    async fn test_lexicon_scorer_end_to_end() {
        let state = app_state(Arc::new(LexiconScorer::new()), StubFetcher::failing());

        let (_, body) = post_analyze(state, r#"{"text": "I am so happy and grateful today"}"#).await;

        assert_eq!(body["sentiment"], "positive");
        assert!(body["polarity"].as_f64().unwrap() > 0.2);
    }

    #[tokio::test]
    async fn test_missing_text_field_is_client_error() {
        let state = app_state(Arc::new(FixedScorer(0.0)), StubFetcher::failing());

        let (status, body) = post_analyze(state, r#"{"entry": "wrong field"}"#).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], "UNPROCESSABLE_ENTITY");
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let state = app_state(Arc::new(FixedScorer(0.0)), StubFetcher::failing());

        let (status, body) = post_analyze(state, "{not json").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "BAD_REQUEST");
    }
}
