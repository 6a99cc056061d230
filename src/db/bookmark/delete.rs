use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;

/// Remove a bookmark. Only its owner may remove it.
pub async fn delete_bookmark(
    bookmark_id: Uuid,
    requester_id: Uuid,
    postgres: PgPool,
) -> Result<(), AppError> {
    let owner = sqlx::query_scalar::<_, Uuid>(
        "SELECT user_id FROM bookmark WHERE bookmark_id = $1",
    )
    .bind(bookmark_id)
    .fetch_optional(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch bookmark: {}", e)))?
    .ok_or_else(|| AppError::NotFound("Bookmark not found".into()))?;

    if owner != requester_id {
        return Err(AppError::Forbidden(
            "Only the owner can delete this bookmark".into(),
        ));
    }

    sqlx::query("DELETE FROM bookmark WHERE bookmark_id = $1")
        .bind(bookmark_id)
        .execute(&postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to delete bookmark: {}", e)))?;

    tracing::info!("User {} deleted bookmark {}", requester_id, bookmark_id);

    Ok(())
}
