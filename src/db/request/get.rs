use sqlx::PgPool;

use crate::{errors::AppError, models::RequestDetail};

pub async fn get_requests_for_match(
    match_id: i32,
    postgres: &PgPool,
) -> Result<Vec<RequestDetail>, AppError> {
    sqlx::query_as::<_, RequestDetail>(
        "SELECT r.id, r.section_id, r.volunteer_id, r.role_id, r.match_id, r.status,
				r.creation_date, r.update_date,
				v.first_name || ' ' || v.last_name AS volunteer_name,
				vr.name AS role_name
			FROM match_volunteering_requests r
			JOIN volunteers v ON v.id = r.volunteer_id
			JOIN volunteering_roles vr ON vr.id = r.role_id
			WHERE r.match_id = $1
			ORDER BY r.role_id, r.id",
    )
    .bind(match_id)
    .fetch_all(postgres)
    .await
    .map_err(|e| {
        AppError::DatabaseError(format!("Failed to fetch requests for match {}: {}", match_id, e))
    })
}
