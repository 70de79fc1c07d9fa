use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::{errors::AppError, models::Match};

pub async fn get_match_by_id(id: i32, postgres: &PgPool) -> Result<Option<Match>, AppError> {
    sqlx::query_as::<_, Match>(
        "SELECT id, competitor, season_id, section_id, starting_datetime, home
			FROM matches
			WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch match {}: {}", id, e)))
}

pub async fn get_matches_since(
    season_id: i32,
    since: DateTime<Utc>,
    postgres: &PgPool,
) -> Result<Vec<Match>, AppError> {
    sqlx::query_as::<_, Match>(
        "SELECT id, competitor, season_id, section_id, starting_datetime, home
			FROM matches
			WHERE season_id = $1 AND starting_datetime >= $2
			ORDER BY starting_datetime, section_id",
    )
    .bind(season_id)
    .bind(since)
    .fetch_all(postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch matches: {}", e)))
}
