//! Prompt construction for sentiment analysis.

use super::completer::CompletionRequest;

/// System instruction sent with every analysis.
pub const SYSTEM_PROMPT: &str =
    "You are a sentiment analysis expert. Always respond with valid JSON.";

/// Low temperature keeps structured output stable.
pub const TEMPERATURE: f32 = 0.3;

pub const MAX_TOKENS: u32 = 500;

/// Build the user prompt that embeds the text to analyze.
pub fn build_prompt(text: &str) -> String {
    format!(
        r#"Analyze the sentiment and extract keywords from the following text.
Respond with a JSON object containing:
- sentiment: a float between -1 (very negative) and 1 (very positive)
- sentiment_label: one of "positive", "negative", or "neutral"
- keywords: a list of 3-5 important keywords or topics
- confidence: a float between 0 and 1 indicating confidence in the analysis
- emotion_scores: a dictionary with emotion names as keys and scores 0-1 as values. Include these emotions: "joy", "sadness", "anger", "fear", "surprise", "disgust"

Text to analyze: "{text}"

Respond only with valid JSON, no other text."#
    )
}

/// Build the full completion request for a piece of text.
pub fn completion_request(text: &str) -> CompletionRequest {
    CompletionRequest {
        system: SYSTEM_PROMPT.to_string(),
        prompt: build_prompt(text),
        temperature: TEMPERATURE,
        max_tokens: MAX_TOKENS,
        json_response: true,
    }
}
