use axum::http::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Expected exactly one season {start}/{stop}, found {found}")]
    SeasonLookup { start: i32, stop: i32, found: usize },

    #[error(
        "Not enough volunteers for match {match_id}: {needed} roles to fill, {available} candidates"
    )]
    InsufficientCandidates {
        match_id: i32,
        needed: usize,
        available: usize,
    },

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Env error: {0}")]
    EnvError(String),

    #[error("Internal server error")]
    InternalError,
}

impl AppError {
    pub fn to_response(&self) -> (StatusCode, String) {
        match self {
            AppError::SeasonLookup { .. } => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
            AppError::InsufficientCandidates { .. } => (StatusCode::CONFLICT, self.to_string()),
            AppError::DatabaseError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::EnvError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
            AppError::InternalError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Unexpected server error".into(),
            ),
        }
    }
}
