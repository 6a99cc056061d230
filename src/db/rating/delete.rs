use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::rating::aggregate::{lock_lot, refresh_aggregate},
    errors::AppError,
    models::rating::Rating,
};

/// Delete a rating and refresh the lot's aggregate as one atomic unit.
/// Only the author may delete. Removing the lot's last rating leaves the
/// zero-state aggregate behind.
pub async fn delete_rating(
    rating_id: Uuid,
    requester_id: Uuid,
    postgres: PgPool,
) -> Result<(), AppError> {
    let mut tx = postgres
        .begin()
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to begin transaction: {}", e)))?;

    let rating = sqlx::query_as::<_, Rating>(
        "SELECT rating_id, user_id, p_id, score, created_at, updated_at
        FROM rating
        WHERE rating_id = $1",
    )
    .bind(rating_id)
    .fetch_optional(&mut *tx)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch rating: {}", e)))?
    .ok_or_else(|| AppError::NotFound("Rating not found".into()))?;

    if rating.user_id != requester_id {
        return Err(AppError::Forbidden(
            "Only the author can delete this rating".into(),
        ));
    }

    lock_lot(&mut tx, rating.p_id).await?;

    let deleted = sqlx::query("DELETE FROM rating WHERE rating_id = $1")
        .bind(rating_id)
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to delete rating: {}", e)))?;

    if deleted.rows_affected() == 0 {
        return Err(AppError::NotFound("Rating not found".into()));
    }

    refresh_aggregate(&mut tx, rating.p_id).await?;

    tx.commit()
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to commit rating delete: {}", e)))?;

    tracing::info!("User {} deleted rating {}", requester_id, rating_id);

    Ok(())
}

/// Admin removal of any rating, same atomic refresh without the ownership
/// check.
pub async fn admin_delete_rating(rating_id: Uuid, postgres: PgPool) -> Result<(), AppError> {
    let mut tx = postgres
        .begin()
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to begin transaction: {}", e)))?;

    let p_id = sqlx::query_scalar::<_, Uuid>("SELECT p_id FROM rating WHERE rating_id = $1")
        .bind(rating_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to fetch rating: {}", e)))?
        .ok_or_else(|| AppError::NotFound("Rating not found".into()))?;

    lock_lot(&mut tx, p_id).await?;

    let deleted = sqlx::query("DELETE FROM rating WHERE rating_id = $1")
        .bind(rating_id)
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to delete rating: {}", e)))?;

    if deleted.rows_affected() == 0 {
        return Err(AppError::NotFound("Rating not found".into()));
    }

    refresh_aggregate(&mut tx, p_id).await?;

    tx.commit()
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to commit rating delete: {}", e)))?;

    tracing::info!("Admin deleted rating {}", rating_id);

    Ok(())
}
