//! Groq HTTP client for chat completions.
//!
//! Talks to any OpenAI-compatible `/chat/completions` endpoint; Groq is the
//! default provider.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use aura_core::{Completer, CompletionRequest, Settings};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Chat-completion client bound to one API key and model.
#[derive(Clone)]
pub struct GroqClient {
    base_url: String,
    api_key: String,
    model: String,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f32,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ReplyMessage,
}

#[derive(Deserialize)]
struct ReplyMessage {
    content: Option<String>,
}

impl GroqClient {
    /// Create a client for the given endpoint base, key and model.
    pub fn new(base_url: &str, api_key: &str, model: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("Failed to build HTTP client")?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
            client,
        })
    }

    /// Create a client from loaded settings.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Self::new(
            &settings.api_url,
            &settings.groq_api_key,
            &settings.model,
            settings.llm_timeout,
        )
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send one chat completion and return the reply text.
    pub async fn chat(&self, request: &CompletionRequest) -> Result<String> {
        let body = ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: &request.system,
                },
                ChatMessage {
                    role: "user",
                    content: &request.prompt,
                },
            ],
            temperature: request.temperature,
            max_tokens: request.max_tokens,
            response_format: request
                .json_response
                .then_some(ResponseFormat { kind: "json_object" }),
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .context("Failed to connect to completion API")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Completion API error ({}): {}", status, body);
        }

        let result: ChatResponse = response
            .json()
            .await
            .context("Failed to parse completion response")?;

        let content = result
            .choices
            .into_iter()
            .next()
            .context("Completion response has no choices")?
            .message
            .content
            .context("Completion response has no content")?;

        debug!(model = %self.model, chars = content.len(), "Received chat completion");

        Ok(content.trim().to_string())
    }
}

#[async_trait]
impl Completer for GroqClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String> {
        self.chat(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serde_json::json;

    fn request() -> CompletionRequest {
        CompletionRequest {
            system: "Always respond with valid JSON.".to_string(),
            prompt: "Analyze: hello".to_string(),
            temperature: 0.3,
            max_tokens: 500,
            json_response: true,
        }
    }

    #[tokio::test]
    async fn test_chat_sends_openai_shaped_request() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/chat/completions")
            .match_header("authorization", "Bearer gsk_test")
            .match_body(Matcher::PartialJson(json!({
                "model": "openai/gpt-oss-20b",
                "messages": [
                    {"role": "system", "content": "Always respond with valid JSON."},
                    {"role": "user", "content": "Analyze: hello"}
                ],
                "max_tokens": 500,
                "response_format": {"type": "json_object"}
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "id": "chatcmpl-1",
                    "choices": [
                        {"index": 0, "message": {"role": "assistant", "content": "  {\"sentiment\": 0.4}\n"}}
                    ]
                })
                .to_string(),
            )
            .create_async()
            .await;

        let client = GroqClient::new(&server.url(), "gsk_test", "openai/gpt-oss-20b", None).unwrap();
        let text = client.complete(&request()).await.unwrap();

        assert_eq!(text, "{\"sentiment\": 0.4}");
        mock.assert_async().await;
    }

    #[test]
    fn test_response_format_omitted_when_not_requested() {
        let body = ChatRequest {
            model: "m",
            messages: [
                ChatMessage { role: "system", content: "s" },
                ChatMessage { role: "user", content: "u" },
            ],
            temperature: 0.3,
            max_tokens: 500,
            response_format: None,
        };
        let value = serde_json::to_value(&body).unwrap();

        assert!(value.get("response_format").is_none());
        assert_eq!(value["messages"][1]["role"], "user");
    }

    #[tokio::test]
    async fn test_error_status_carries_body() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/chat/completions")
            .with_status(401)
            .with_body(r#"{"error": {"message": "Invalid API Key"}}"#)
            .create_async()
            .await;

        let client = GroqClient::new(&server.url(), "bad", "m", None).unwrap();
        let err = client.complete(&request()).await.unwrap_err();
        let message = format!("{err:#}");

        assert!(message.contains("401"), "{message}");
        assert!(message.contains("Invalid API Key"), "{message}");
    }

    #[tokio::test]
    async fn test_empty_choices_is_an_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_body(r#"{"choices": []}"#)
            .create_async()
            .await;

        let client = GroqClient::new(&server.url(), "k", "m", None).unwrap();
        let err = client.complete(&request()).await.unwrap_err();
        assert!(err.to_string().contains("no choices"));
    }

    #[tokio::test]
    async fn test_null_content_is_an_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_body(r#"{"choices": [{"message": {"role": "assistant", "content": null}}]}"#)
            .create_async()
            .await;

        let client = GroqClient::new(&server.url(), "k", "m", None).unwrap();
        let err = client.complete(&request()).await.unwrap_err();
        assert!(err.to_string().contains("no content"));
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = GroqClient::new("https://api.groq.com/openai/v1/", "k", "m", None).unwrap();
        assert_eq!(client.base_url, "https://api.groq.com/openai/v1");
        assert_eq!(client.model(), "m");
    }
}
