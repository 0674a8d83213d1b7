//! Sentiment scoring: pluggable, trait-based polarity scorer plus the fixed
//! classification thresholds applied to its output.
//!
//! Default: `LexiconScorer` (VADER lexicon via `vader_sentiment`, deterministic, no I/O).
//!
//! `AppState` holds an `Arc<dyn SentimentScorer>`, so handler tests can swap in a stub.

pub mod lexicon;

use serde::{Deserialize, Serialize};

pub use lexicon::LexiconScorer;

/// Polarity strictly above this is positive.
pub const POSITIVE_THRESHOLD: f64 = 0.2;
/// Polarity strictly below this is negative.
pub const NEGATIVE_THRESHOLD: f64 = -0.2;

/// Scores a piece of text on a [-1, 1] polarity scale.
pub trait SentimentScorer: Send + Sync {
    fn polarity(&self, text: &str) -> f64;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    /// Maps a polarity score onto a label. Exactly ±0.2 is neutral.
    pub fn classify(polarity: f64) -> Self {
        if polarity > POSITIVE_THRESHOLD {
            Sentiment::Positive
        } else if polarity < NEGATIVE_THRESHOLD {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    pub sentiment: Sentiment,
    pub polarity: f64,
}

/// Runs the scorer and classifies its output.
pub fn analyze_sentiment(scorer: &dyn SentimentScorer, text: &str) -> SentimentResult {
    let polarity = scorer.polarity(text);
    SentimentResult {
        sentiment: Sentiment::classify(polarity),
        polarity,
    }
}
