//! Lexicon scorer backed by VADER (`vader_sentiment`): a fixed, human-rated
//! word-valence dictionary with rules for negation, intensifiers, punctuation
//! emphasis and contrastive "but". The compound score is already in [-1, 1].

use vader_sentiment::SentimentIntensityAnalyzer;

use super::SentimentScorer;

/// Dictionary-based polarity scorer. Built once at startup and shared read-only.
pub struct LexiconScorer {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

impl LexiconScorer {
    pub fn new() -> Self {
        Self {
            analyzer: SentimentIntensityAnalyzer::new(),
        }
    }
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentScorer for LexiconScorer {
    fn polarity(&self, text: &str) -> f64 {
        if text.trim().is_empty() {
            return 0.0;
        }

        self.analyzer
            .polarity_scores(text)
            .get("compound")
            .copied()
            .unwrap_or(0.0)
            .clamp(-1.0, 1.0)
    }
}
