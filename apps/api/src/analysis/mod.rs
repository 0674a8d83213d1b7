// Journal analysis: sentiment scoring plus AI wellness suggestions.
// All Gemini calls go through llm_client via the SuggestionFetcher trait.

pub mod handlers;
pub mod models;
pub mod prompts;
pub mod suggestions;
