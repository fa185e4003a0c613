//! Text analysis route handlers.

use aura_core::{AnalysisRequest, AnalysisResult};
use axum::{extract::rejection::JsonRejection, extract::State, Json};
use tracing::{error, info, warn};

use crate::error::ApiError;
use crate::state::AppState;

/// `POST /process_text`: analyze the submitted text.
pub async fn process_text(
    State(state): State<AppState>,
    payload: Result<Json<AnalysisRequest>, JsonRejection>,
) -> Result<Json<AnalysisResult>, ApiError> {
    let Json(req) = payload.map_err(|rejection| {
        warn!(error = %rejection.body_text(), "Rejected analysis request body");
        ApiError::from(rejection)
    })?;

    info!(chars = req.text.chars().count(), "Analyzing text");

    match state.analyzer.analyze(&req).await {
        Ok(result) => Ok(Json(result)),
        Err(e) if e.is_invalid_input() => {
            warn!(error = %e, "Rejected analysis request");
            Err(e.into())
        }
        Err(e) => {
            error!(error = %e, "Error processing text");
            Err(e.into())
        }
    }
}
