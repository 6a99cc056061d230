use sqlx::PgPool;
use uuid::Uuid;

use crate::{db::rating::aggregate::refresh_aggregate, errors::AppError};

/// Delete an account. The user's ratings go with it (FK cascade), so every
/// lot they had rated gets its aggregate refreshed inside the same
/// transaction.
pub async fn delete_user(user_id: Uuid, postgres: PgPool) -> Result<(), AppError> {
    let mut tx = postgres
        .begin()
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to begin transaction: {}", e)))?;

    let rated_lots = sqlx::query_scalar::<_, Uuid>(
        "SELECT DISTINCT p_id FROM rating WHERE user_id = $1",
    )
    .bind(user_id)
    .fetch_all(&mut *tx)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch rated lots: {}", e)))?;

    // Lock the affected lots so the post-cascade refreshes serialize with
    // concurrent rating mutations.
    if !rated_lots.is_empty() {
        sqlx::query("SELECT p_id FROM parking_lot WHERE p_id = ANY($1) FOR UPDATE")
            .bind(&rated_lots)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Failed to lock parking lots: {}", e)))?;
    }

    let deleted = sqlx::query("DELETE FROM users WHERE user_id = $1")
        .bind(user_id)
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to delete user: {}", e)))?;

    if deleted.rows_affected() == 0 {
        return Err(AppError::NotFound("User not found".into()));
    }

    for p_id in rated_lots {
        refresh_aggregate(&mut tx, p_id).await?;
    }

    tx.commit()
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to commit user delete: {}", e)))?;

    tracing::info!("Deleted user {}", user_id);

    Ok(())
}
