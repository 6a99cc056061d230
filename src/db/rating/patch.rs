use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::rating::aggregate::{lock_lot, refresh_aggregate},
    errors::AppError,
    models::rating::{Rating, validate_score},
};

/// Update a rating's score and refresh the lot's aggregate as one atomic
/// unit. Only the author may update.
pub async fn update_rating(
    rating_id: Uuid,
    requester_id: Uuid,
    new_score: f64,
    postgres: PgPool,
) -> Result<(), AppError> {
    validate_score(new_score)?;

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
            "Only the author can update this rating".into(),
        ));
    }

    lock_lot(&mut tx, rating.p_id).await?;

    // Re-checked under the lot lock: the row may have been deleted between
    // the read above and taking the lock.
    let updated = sqlx::query("UPDATE rating SET score = $2, updated_at = NOW() WHERE rating_id = $1")
        .bind(rating_id)
        .bind(new_score)
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to update rating: {}", e)))?;

    if updated.rows_affected() == 0 {
        return Err(AppError::NotFound("Rating not found".into()));
    }

    refresh_aggregate(&mut tx, rating.p_id).await?;

    tx.commit()
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to commit rating update: {}", e)))?;

    tracing::info!(
        "User {} updated rating {} to {}",
        requester_id,
        rating_id,
        new_score
    );

    Ok(())
}
