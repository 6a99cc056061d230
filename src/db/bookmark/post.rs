use sqlx::PgPool;
use uuid::Uuid;

use crate::{db::user::get::get_user_by_id, errors::AppError};

/// Bookmark a lot for a user. At most one bookmark per (user, lot).
pub async fn add_bookmark(user_id: Uuid, p_id: Uuid, postgres: PgPool) -> Result<Uuid, AppError> {
    get_user_by_id(user_id, postgres.clone()).await?;

    let lot = sqlx::query_scalar::<_, Uuid>("SELECT p_id FROM parking_lot WHERE p_id = $1")
        .bind(p_id)
        .fetch_optional(&postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to fetch parking lot: {}", e)))?;

    lot.ok_or_else(|| AppError::NotFound("Parking lot not found".into()))?;

    let existing = sqlx::query_scalar::<_, Uuid>(
        "SELECT bookmark_id FROM bookmark WHERE user_id = $1 AND p_id = $2",
    )
    .bind(user_id)
    .bind(p_id)
    .fetch_optional(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to check existing bookmark: {}", e)))?;

    if existing.is_some() {
        return Err(AppError::Conflict(
            "This parking lot is already bookmarked".into(),
        ));
    }

    let bookmark_id = sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO bookmark (user_id, p_id)
        VALUES ($1, $2)
        RETURNING bookmark_id",
    )
    .bind(user_id)
    .bind(p_id)
    .fetch_one(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to insert bookmark: {}", e)))?;

    tracing::info!("User {} bookmarked parking lot {}", user_id, p_id);

    Ok(bookmark_id)
}
