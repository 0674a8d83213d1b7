use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::sentiment::SentimentResult;

/// POST /analyze request body.
#[derive(Debug, Clone, Deserialize)]
pub struct JournalEntry {
    pub text: String,
}

/// Wellness suggestions produced by the generation API.
///
/// Fields the model leaves out (or sends as `null`) default to empty values.
/// Any additional fields it returns are carried through untouched in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AiSuggestion {
    #[serde(default, deserialize_with = "null_as_default")]
    pub analysis: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub suggestions: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub time_estimate: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub follow_up_question: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AiSuggestion {
    /// Fallback carrying only a human-readable `analysis` line.
    pub fn placeholder(analysis: &str) -> Self {
        Self {
            analysis: analysis.to_string(),
            ..Self::default()
        }
    }
}

/// POST /analyze response body: `{sentiment, polarity, ai_analysis}`.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeResponse {
    #[serde(flatten)]
    pub sentiment: SentimentResult,
    pub ai_analysis: AiSuggestion,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
