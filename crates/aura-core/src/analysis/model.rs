//! Analysis domain models.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Sentiment above this is labelled positive.
pub const POSITIVE_THRESHOLD: f64 = 0.1;

/// Sentiment below this is labelled negative.
pub const NEGATIVE_THRESHOLD: f64 = -0.1;

/// Maximum number of keywords returned to the caller.
pub const MAX_KEYWORDS: usize = 5;

/// Text submitted for analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub text: String,
}

impl AnalysisRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// True when the text is empty after trimming whitespace.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Polarity bucket derived from the numeric sentiment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// Label a sentiment score. Both thresholds are exclusive, so 0.1 is neutral.
    pub fn from_score(sentiment: f64) -> Self {
        if sentiment > POSITIVE_THRESHOLD {
            Self::Positive
        } else if sentiment < NEGATIVE_THRESHOLD {
            Self::Negative
        } else {
            Self::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The emotions every result must score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Emotion {
    Joy,
    Sadness,
    Anger,
    Fear,
    Surprise,
    Disgust,
}

impl Emotion {
    pub const ALL: [Emotion; 6] = [
        Emotion::Joy,
        Emotion::Sadness,
        Emotion::Anger,
        Emotion::Fear,
        Emotion::Surprise,
        Emotion::Disgust,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Joy => "joy",
            Self::Sadness => "sadness",
            Self::Anger => "anger",
            Self::Fear => "fear",
            Self::Surprise => "surprise",
            Self::Disgust => "disgust",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated analysis returned to the caller.
///
/// Every numeric field is within its range and `emotion_scores` holds at least
/// the six [`Emotion`] keys. Extra emotions reported by the model are kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Polarity in [-1.0, 1.0].
    pub sentiment: f64,
    pub sentiment_label: SentimentLabel,
    pub keywords: Vec<String>,
    /// Model's self-reported certainty in [0.0, 1.0].
    pub confidence: f64,
    pub emotion_scores: BTreeMap<String, f64>,
}

impl AnalysisResult {
    /// Score for one of the required emotions.
    pub fn emotion(&self, emotion: Emotion) -> f64 {
        self.emotion_scores
            .get(emotion.as_str())
            .copied()
            .unwrap_or_default()
    }

    /// Render the emotion scores as `joy: 0.80, sadness: 0.10, ...`.
    pub fn emotion_summary(&self) -> String {
        self.emotion_scores
            .iter()
            .map(|(name, score)| format!("{}: {:.2}", name, score))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
