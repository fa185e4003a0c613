//! Runtime settings read from the environment.

use std::time::Duration;
use tracing::debug;

use crate::error::{AuraError, AuraResult};

pub const GROQ_API_KEY: &str = "GROQ_API_KEY";
pub const DEEPGRAM_API_KEY: &str = "DEEPGRAM_API_KEY";
pub const MODEL: &str = "AURA_MODEL";
pub const API_URL: &str = "GROQ_API_URL";
pub const CORS_ORIGINS: &str = "AURA_CORS_ORIGINS";
pub const LLM_TIMEOUT_SECS: &str = "AURA_LLM_TIMEOUT_SECS";

/// Default chat model.
pub const DEFAULT_MODEL: &str = "openai/gpt-oss-20b";

/// Default OpenAI-compatible endpoint base.
pub const DEFAULT_API_URL: &str = "https://api.groq.com/openai/v1";

/// Local frontend dev servers allowed by default.
pub const DEFAULT_CORS_ORIGINS: [&str; 4] = [
    "http://localhost:3000",
    "http://127.0.0.1:3000",
    "http://localhost:5173",
    "http://127.0.0.1:5173",
];

/// Service settings.
#[derive(Clone)]
pub struct Settings {
    pub groq_api_key: String,
    /// Reserved for the speech-transcription client; unused by analysis.
    pub deepgram_api_key: Option<String>,
    pub model: String,
    pub api_url: String,
    pub cors_origins: Vec<String>,
    /// No explicit timeout on the completion call when `None`.
    pub llm_timeout: Option<Duration>,
}

impl Settings {
    /// Load settings from process environment variables.
    pub fn from_env() -> AuraResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load settings through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> AuraResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let groq_api_key = non_empty(GROQ_API_KEY)
            .ok_or_else(|| AuraError::config(format!("{} environment variable not set", GROQ_API_KEY)))?;

        let llm_timeout = match non_empty(LLM_TIMEOUT_SECS) {
            Some(raw) => {
                let secs: u64 = raw.trim().parse().map_err(|_| {
                    AuraError::config(format!("Invalid {} value: {}", LLM_TIMEOUT_SECS, raw))
                })?;
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        let cors_origins = match non_empty(CORS_ORIGINS) {
            Some(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect(),
            None => DEFAULT_CORS_ORIGINS.iter().map(|s| s.to_string()).collect(),
        };

        let settings = Self {
            groq_api_key,
            deepgram_api_key: non_empty(DEEPGRAM_API_KEY),
            model: non_empty(MODEL).unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            api_url: non_empty(API_URL).unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            cors_origins,
            llm_timeout,
        };

        debug!(
            model = %settings.model,
            api_url = %settings.api_url,
            deepgram = settings.deepgram_api_key.is_some(),
            "Settings loaded"
        );

        Ok(settings)
    }
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("groq_api_key", &"<redacted>")
            .field("deepgram_api_key", &self.deepgram_api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("api_url", &self.api_url)
            .field("cors_origins", &self.cors_origins)
            .field("llm_timeout", &self.llm_timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::from_lookup(lookup(&[(GROQ_API_KEY, "gsk_test")])).unwrap();
        assert_eq!(settings.groq_api_key, "gsk_test");
        assert_eq!(settings.deepgram_api_key, None);
        assert_eq!(settings.model, DEFAULT_MODEL);
        assert_eq!(settings.api_url, DEFAULT_API_URL);
        assert_eq!(settings.cors_origins.len(), 4);
        assert_eq!(settings.llm_timeout, None);
    }

    #[test]
    fn test_missing_api_key() {
        let err = Settings::from_lookup(lookup(&[])).unwrap_err();
        assert!(matches!(err, AuraError::Config(_)));

        let err = Settings::from_lookup(lookup(&[(GROQ_API_KEY, "  ")])).unwrap_err();
        assert!(err.to_string().contains(GROQ_API_KEY));
    }

    #[test]
    fn test_overrides() {
        let settings = Settings::from_lookup(lookup(&[
            (GROQ_API_KEY, "gsk_test"),
            (DEEPGRAM_API_KEY, "dg_test"),
            (MODEL, "llama-3.1-8b-instant"),
            (CORS_ORIGINS, "https://aura.example.com, http://localhost:4000,"),
            (LLM_TIMEOUT_SECS, "15"),
        ]))
        .unwrap();

        assert_eq!(settings.deepgram_api_key.as_deref(), Some("dg_test"));
        assert_eq!(settings.model, "llama-3.1-8b-instant");
        assert_eq!(
            settings.cors_origins,
            vec!["https://aura.example.com", "http://localhost:4000"]
        );
        assert_eq!(settings.llm_timeout, Some(Duration::from_secs(15)));
    }

    #[test]
    fn test_invalid_timeout() {
        let err = Settings::from_lookup(lookup(&[
            (GROQ_API_KEY, "gsk_test"),
            (LLM_TIMEOUT_SECS, "soon"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("Invalid AURA_LLM_TIMEOUT_SECS"));
    }

    #[test]
    fn test_debug_redacts_keys() {
        let settings = Settings::from_lookup(lookup(&[(GROQ_API_KEY, "gsk_secret")])).unwrap();
        assert!(!format!("{:?}", settings).contains("gsk_secret"));
    }
}
