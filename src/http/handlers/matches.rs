use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use rand::{SeedableRng, rngs::StdRng};
use serde::Deserialize;

use crate::{
    assignment::{MatchOutcome, generate_for_matches, generate_volunteering_requests},
    errors::AppError,
    models::{MatchVolunteeringRequest, RequestDetail},
    state::AppState,
};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequestsPayload {
    pub match_ids: Vec<i32>,
}

pub async fn generate_requests_handler(
    State(state): State<AppState>,
    Json(payload): Json<GenerateRequestsPayload>,
) -> Result<Json<Vec<MatchOutcome>>, (StatusCode, String)> {
    if payload.match_ids.is_empty() {
        return Err(AppError::BadRequest("No match selected".into()).to_response());
    }

    let mut rng = StdRng::from_os_rng();
    let outcomes = generate_for_matches(
        state.store.as_ref(),
        state.clock.as_ref(),
        &payload.match_ids,
        &mut rng,
    )
    .await;

    Ok(Json(outcomes))
}

pub async fn generate_requests_for_match_handler(
    State(state): State<AppState>,
    Path(match_id): Path<i32>,
) -> Result<Json<Vec<MatchVolunteeringRequest>>, (StatusCode, String)> {
    let game = state
        .store
        .match_by_id(match_id)
        .await
        .and_then(|game| {
            game.ok_or_else(|| AppError::NotFound(format!("Match {} not found", match_id)))
        })
        .map_err(|e| e.to_response())?;

    let mut rng = StdRng::from_os_rng();
    match generate_volunteering_requests(
        state.store.as_ref(),
        state.clock.as_ref(),
        &game,
        &mut rng,
    )
    .await
    {
        Ok(created) => Ok(Json(created)),
        Err(err) => {
            tracing::error!("Error generating requests for match {}: {}", match_id, err);
            Err(err.to_response())
        }
    }
}

pub async fn get_match_requests_handler(
    State(state): State<AppState>,
    Path(match_id): Path<i32>,
) -> Result<Json<Vec<RequestDetail>>, (StatusCode, String)> {
    let requests = state
        .store
        .requests_for_match(match_id)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get requests for match {}: {}", match_id, e);
            e.to_response()
        })?;

    Ok(Json(requests))
}
