//! # Aura LLM
//!
//! Chat-completion client used by the analysis pipeline.

pub mod groq;

pub use groq::GroqClient;
