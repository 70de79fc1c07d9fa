use axum::{
    Router,
    routing::{get, post},
};

use crate::{
    http::handlers::{
        generate_requests_for_match_handler, generate_requests_handler, get_match_requests_handler,
        get_summary_handler,
    },
    state::AppState,
};

pub fn create_http_routes(state: AppState) -> Router {
    Router::new()
        .route("/summary", get(get_summary_handler))
        .route("/matches/generate-requests", post(generate_requests_handler))
        .route(
            "/matches/{id}/generate-requests",
            post(generate_requests_for_match_handler),
        )
        .route("/matches/{id}/requests", get(get_match_requests_handler))
        .with_state(state)
}
