use sqlx::PgPool;

use crate::{
    errors::AppError,
    models::{Role, Volunteer},
};

/// Volunteers of `season_id` in one of `section_ids` holding `role`, fewest
/// points first, at most `limit` rows.
pub async fn get_candidate_volunteers(
    season_id: i32,
    section_ids: &[i32],
    role: Role,
    limit: i64,
    postgres: &PgPool,
) -> Result<Vec<Volunteer>, AppError> {
    sqlx::query_as::<_, Volunteer>(
        "SELECT id, first_name, last_name, email, phone, birthdate, role, section_id, season_id, points
			FROM volunteers
			WHERE season_id = $1 AND section_id = ANY($2) AND role = $3
			ORDER BY points ASC, id ASC
			LIMIT $4",
    )
    .bind(season_id)
    .bind(section_ids)
    .bind(role)
    .bind(limit)
    .fetch_all(postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch volunteers: {}", e)))
}
