use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::rating::aggregate::{lock_lot, refresh_aggregate},
    errors::AppError,
    models::rating::validate_score,
};

/// Insert a rating and refresh the lot's aggregate as one atomic unit.
/// Returns the created rating id.
pub async fn add_rating(
    user_id: Uuid,
    p_id: Uuid,
    score: f64,
    postgres: PgPool,
) -> Result<Uuid, AppError> {
    validate_score(score)?;

    let mut tx = postgres
        .begin()
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to begin transaction: {}", e)))?;

    let author = sqlx::query_scalar::<_, Uuid>("SELECT user_id FROM users WHERE user_id = $1")
        .bind(user_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to fetch user: {}", e)))?;

    author.ok_or_else(|| AppError::NotFound("User not found".into()))?;

    lock_lot(&mut tx, p_id).await?;

    let existing = sqlx::query_scalar::<_, Uuid>(
        "SELECT rating_id FROM rating WHERE user_id = $1 AND p_id = $2",
    )
    .bind(user_id)
    .bind(p_id)
    .fetch_optional(&mut *tx)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to check existing rating: {}", e)))?;

    if existing.is_some() {
        return Err(AppError::Conflict(
            "You have already rated this parking lot".into(),
        ));
    }

    let rating_id = sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO rating (user_id, p_id, score)
        VALUES ($1, $2, $3)
        RETURNING rating_id",
    )
    .bind(user_id)
    .bind(p_id)
    .bind(score)
    .fetch_one(&mut *tx)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to insert rating: {}", e)))?;

    refresh_aggregate(&mut tx, p_id).await?;

    tx.commit()
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to commit rating: {}", e)))?;

    tracing::info!("User {} rated parking lot {} with {}", user_id, p_id, score);

    Ok(rating_id)
}
