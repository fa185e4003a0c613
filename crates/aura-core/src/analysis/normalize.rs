//! Repair and normalization of raw model output.
//!
//! Whatever the model returns is turned into an [`AnalysisResult`] whose
//! fields all sit inside their declared ranges. Unparsable output is replaced
//! by a fixed neutral placeholder instead of failing the request.

use serde_json::{json, Map, Value};
use std::collections::BTreeMap;
use tracing::error;

use super::model::{AnalysisResult, Emotion, SentimentLabel, MAX_KEYWORDS};

const DEFAULT_SENTIMENT: f64 = 0.0;
const DEFAULT_CONFIDENCE: f64 = 0.5;
const DEFAULT_EMOTION_SCORE: f64 = 0.1;

const JSON_FENCE_OPEN: &str = "```json";
const FENCE_CLOSE: &str = "```";

/// Strip a leading "```json" and a trailing "```" from a completion.
pub fn strip_code_fence(raw: &str) -> &str {
    let mut text = raw.trim();
    if let Some(rest) = text.strip_prefix(JSON_FENCE_OPEN) {
        text = rest;
    }
    if let Some(rest) = text.strip_suffix(FENCE_CLOSE) {
        text = rest;
    }
    text.trim()
}

/// Placeholder used when the model output cannot be parsed.
pub fn fallback_fields() -> Map<String, Value> {
    let value = json!({
        "sentiment": 0.0,
        "sentiment_label": "neutral",
        "keywords": ["unknown"],
        "confidence": 0.5,
        "emotion_scores": {
            "joy": 0.2,
            "sadness": 0.2,
            "anger": 0.2,
            "fear": 0.2,
            "surprise": 0.1,
            "disgust": 0.1
        }
    });
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

/// Parse a completion into a JSON object, falling back to [`fallback_fields`].
///
/// Anything other than a JSON object (invalid syntax, truncated output, a bare
/// array or scalar) takes the fallback path and is logged.
pub fn parse_completion(raw: &str) -> Map<String, Value> {
    let cleaned = strip_code_fence(raw);
    match serde_json::from_str::<Value>(cleaned) {
        Ok(Value::Object(map)) => map,
        Ok(other) => {
            error!(response = %cleaned, kind = json_kind(&other), "Completion is not a JSON object");
            fallback_fields()
        }
        Err(e) => {
            error!(response = %cleaned, error = %e, "Failed to parse JSON response");
            fallback_fields()
        }
    }
}

/// Clamp, default and relabel parsed fields into a valid result.
pub fn normalize(fields: &Map<String, Value>) -> AnalysisResult {
    let sentiment = fields
        .get("sentiment")
        .and_then(as_number)
        .unwrap_or(DEFAULT_SENTIMENT)
        .clamp(-1.0, 1.0);

    // The model's own label is ignored; the score is the source of truth.
    let sentiment_label = SentimentLabel::from_score(sentiment);

    let confidence = fields
        .get("confidence")
        .and_then(as_number)
        .unwrap_or(DEFAULT_CONFIDENCE)
        .clamp(0.0, 1.0);

    AnalysisResult {
        sentiment,
        sentiment_label,
        keywords: normalize_keywords(fields.get("keywords")),
        confidence,
        emotion_scores: normalize_emotions(fields.get("emotion_scores")),
    }
}

fn normalize_keywords(value: Option<&Value>) -> Vec<String> {
    match value {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items.iter().take(MAX_KEYWORDS).map(display).collect(),
        Some(other) => vec![display(other)],
    }
}

fn normalize_emotions(value: Option<&Value>) -> BTreeMap<String, f64> {
    let mut scores = BTreeMap::new();

    if let Some(Value::Object(map)) = value {
        for (name, score) in map {
            // Non-numeric extras are dropped; required ones get defaulted below.
            if let Some(score) = as_number(score) {
                scores.insert(name.clone(), score.clamp(0.0, 1.0));
            }
        }
    }

    for emotion in Emotion::ALL {
        scores
            .entry(emotion.as_str().to_string())
            .or_insert(DEFAULT_EMOTION_SCORE);
    }

    scores
}

/// Numeric view of a JSON value. Numeric strings are accepted, NaN is not.
fn as_number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    }?;
    (!n.is_nan()).then_some(n)
}

fn display(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
