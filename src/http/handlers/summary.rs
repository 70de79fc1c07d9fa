use axum::{extract::State, http::StatusCode, response::Json};

use crate::{
    state::AppState,
    summary::{MatchSummary, upcoming_matches},
};

pub async fn get_summary_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<MatchSummary>>, (StatusCode, String)> {
    let summary = upcoming_matches(state.store.as_ref(), state.clock.as_ref())
        .await
        .map_err(|e| {
            tracing::error!("Failed to build summary: {}", e);
            e.to_response()
        })?;

    Ok(Json(summary))
}
