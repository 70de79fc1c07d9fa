use sqlx::PgPool;

use crate::{errors::AppError, models::Section};

pub async fn get_section_by_id(id: i32, postgres: &PgPool) -> Result<Option<Section>, AppError> {
    sqlx::query_as::<_, Section>("SELECT id, name, senior FROM sections WHERE id = $1")
        .bind(id)
        .fetch_optional(postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to fetch section {}: {}", id, e)))
}

pub async fn get_sections_by_name_excluding(
    names: &[&str],
    exclude_id: i32,
    postgres: &PgPool,
) -> Result<Vec<Section>, AppError> {
    let names: Vec<String> = names.iter().map(|name| name.to_string()).collect();

    sqlx::query_as::<_, Section>(
        "SELECT id, name, senior
			FROM sections
			WHERE name = ANY($1) AND id <> $2
			ORDER BY id",
    )
    .bind(&names)
    .bind(exclude_id)
    .fetch_all(postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch sections: {}", e)))
}
