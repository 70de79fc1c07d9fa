use sqlx::PgPool;

use crate::{
    errors::AppError,
    models::{MatchVolunteeringRequest, NewVolunteeringRequest},
};

/// Inserts the whole batch in one transaction. If any insert fails the
/// transaction is dropped before commit and nothing is kept.
pub async fn create_requests(
    batch: Vec<NewVolunteeringRequest>,
    postgres: &PgPool,
) -> Result<Vec<MatchVolunteeringRequest>, AppError> {
    let mut tx = postgres
        .begin()
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to start transaction: {}", e)))?;

    let mut created = Vec::with_capacity(batch.len());

    for request in batch {
        let row = sqlx::query_as::<_, MatchVolunteeringRequest>(
            "INSERT INTO match_volunteering_requests (section_id, volunteer_id, role_id, match_id, status)
			VALUES ($1, $2, $3, $4, $5)
			RETURNING id, section_id, volunteer_id, role_id, match_id, status, creation_date, update_date",
        )
        .bind(request.section_id)
        .bind(request.volunteer_id)
        .bind(request.role_id)
        .bind(request.match_id)
        .bind(request.status)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to create request: {}", e)))?;

        created.push(row);
    }

    tx.commit()
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to commit requests: {}", e)))?;

    Ok(created)
}
