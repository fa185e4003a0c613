//! Text analysis pipeline.
//!
//! Validates the request, asks the completion provider for a JSON analysis,
//! and normalizes whatever comes back into an [`AnalysisResult`].

pub mod completer;
pub mod model;
pub mod normalize;
pub mod prompt;

use std::sync::Arc;
use tracing::debug;

use crate::error::{AuraError, AuraResult};
use completer::Completer;
use model::{AnalysisRequest, AnalysisResult};

/// Runs sentiment analyses against an injected completion provider.
#[derive(Clone)]
pub struct Analyzer {
    completer: Arc<dyn Completer>,
}

impl Analyzer {
    pub fn new(completer: Arc<dyn Completer>) -> Self {
        Self { completer }
    }

    /// Analyze one piece of text.
    ///
    /// Blank text fails with [`AuraError::EmptyText`] before the provider is
    /// called. Provider failures surface as [`AuraError::Completion`]; output
    /// that is not valid JSON never does.
    pub async fn analyze(&self, request: &AnalysisRequest) -> AuraResult<AnalysisResult> {
        if request.is_blank() {
            return Err(AuraError::EmptyText);
        }

        let completion = prompt::completion_request(&request.text);
        let raw = self
            .completer
            .complete(&completion)
            .await
            .map_err(|e| {
                debug!(error = %format!("{e:#}"), "Completion request failed");
                AuraError::completion(e)
            })?;

        debug!(chars = raw.len(), "Received completion");

        let fields = normalize::parse_completion(&raw);
        let result = normalize::normalize(&fields);

        debug!(
            sentiment = result.sentiment,
            label = %result.sentiment_label,
            keywords = result.keywords.len(),
            "Analysis complete"
        );

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::completer::CompletionRequest;
    use crate::analysis::model::{Emotion, SentimentLabel};
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Returns a canned reply and records every request it sees.
    struct StubCompleter {
        reply: Result<String, String>,
        seen: Mutex<Vec<CompletionRequest>>,
    }

    impl StubCompleter {
        fn replying(reply: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Ok(reply.to_string()),
                seen: Mutex::new(Vec::new()),
            })
        }

        fn failing(message: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Err(message.to_string()),
                seen: Mutex::new(Vec::new()),
            })
        }

        fn calls(&self) -> usize {
            self.seen.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl Completer for StubCompleter {
        async fn complete(&self, request: &CompletionRequest) -> anyhow::Result<String> {
            self.seen.lock().unwrap().push(request.clone());
            self.reply.clone().map_err(anyhow::Error::msg)
        }
    }

    #[tokio::test]
    async fn test_blank_text_skips_provider() {
        let stub = StubCompleter::replying("{}");
        let analyzer = Analyzer::new(stub.clone());

        let err = analyzer
            .analyze(&AnalysisRequest::new("   \n"))
            .await
            .unwrap_err();

        assert!(matches!(err, AuraError::EmptyText));
        assert_eq!(stub.calls(), 0);
    }

    #[tokio::test]
    async fn test_love_scenario_normalizes_stubbed_reply() {
        let stub = StubCompleter::replying(
            r#"{
                "sentiment": 0.92,
                "sentiment_label": "neutral",
                "keywords": ["love", "this"],
                "confidence": 0.95,
                "emotion_scores": {"joy": 0.9, "surprise": 0.3}
            }"#,
        );
        let analyzer = Analyzer::new(stub.clone());

        let result = analyzer
            .analyze(&AnalysisRequest::new("I love this!"))
            .await
            .unwrap();

        assert_eq!(result.sentiment, 0.92);
        assert_eq!(result.sentiment_label, SentimentLabel::Positive);
        assert_eq!(result.keywords, vec!["love", "this"]);
        assert_eq!(result.confidence, 0.95);
        assert_eq!(result.emotion(Emotion::Joy), 0.9);
        assert_eq!(result.emotion(Emotion::Anger), 0.1);

        let seen = stub.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert!(seen[0].prompt.contains("\"I love this!\""));
        assert!(seen[0].json_response);
    }

    #[tokio::test]
    async fn test_unparsable_reply_is_not_an_error() {
        let analyzer = Analyzer::new(StubCompleter::replying("Sure! The sentiment is positive."));

        let result = analyzer
            .analyze(&AnalysisRequest::new("hello"))
            .await
            .unwrap();

        assert_eq!(result.keywords, vec!["unknown"]);
        assert_eq!(result.confidence, 0.5);
        assert_eq!(result.sentiment_label, SentimentLabel::Neutral);
    }

    #[tokio::test]
    async fn test_provider_failure_surfaces_message() {
        let analyzer = Analyzer::new(StubCompleter::failing("invalid api key"));

        let err = analyzer
            .analyze(&AnalysisRequest::new("hello"))
            .await
            .unwrap_err();

        assert!(matches!(err, AuraError::Completion(_)));
        assert_eq!(err.to_string(), "invalid api key");
    }
}
