//! Application state.

use aura_core::Analyzer;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Analyzer,
    pub cors_origins: Vec<String>,
}

impl AppState {
    pub fn new(analyzer: Analyzer, cors_origins: Vec<String>) -> Self {
        Self {
            analyzer,
            cors_origins,
        }
    }
}
