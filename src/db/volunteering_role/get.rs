use sqlx::PgPool;

use crate::{errors::AppError, models::VolunteeringRole};

pub async fn count_volunteering_roles(postgres: &PgPool) -> Result<i64, AppError> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM volunteering_roles")
        .fetch_one(postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to count volunteering roles: {}", e)))
}

pub async fn get_volunteering_roles_by_tier(
    senior: bool,
    postgres: &PgPool,
) -> Result<Vec<VolunteeringRole>, AppError> {
    sqlx::query_as::<_, VolunteeringRole>(
        "SELECT id, name, reward, senior
			FROM volunteering_roles
			WHERE senior = $1
			ORDER BY id",
    )
    .bind(senior)
    .fetch_all(postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch volunteering roles: {}", e)))
}
