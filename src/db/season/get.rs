use sqlx::PgPool;

use crate::{errors::AppError, models::Season};

pub async fn get_seasons_by_years(
    start: i32,
    stop: i32,
    postgres: &PgPool,
) -> Result<Vec<Season>, AppError> {
    sqlx::query_as::<_, Season>(
        "SELECT id, start, stop
			FROM seasons
			WHERE start = $1 AND stop = $2",
    )
    .bind(start)
    .bind(stop)
    .fetch_all(postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch season: {}", e)))
}
