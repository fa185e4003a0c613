//! Sentiment Aura Core Library
//!
//! Domain models, prompt construction and response normalization for
//! LLM-backed sentiment analysis.

pub mod analysis;
pub mod config;
pub mod error;

pub use analysis::completer::{CompletionRequest, Completer};
pub use analysis::model::{AnalysisRequest, AnalysisResult, Emotion, SentimentLabel};
pub use analysis::Analyzer;
pub use config::Settings;
pub use error::{AuraError, AuraResult};
