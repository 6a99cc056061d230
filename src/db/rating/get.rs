use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::user::get::get_user_by_id,
    errors::AppError,
    models::rating::RatingResponse,
};

/// Ratings written by one user, newest first.
pub async fn get_ratings_for_user(
    user_id: Uuid,
    postgres: PgPool,
) -> Result<Vec<RatingResponse>, AppError> {
    // 404 for a missing user, not an empty list
    get_user_by_id(user_id, postgres.clone()).await?;

    let ratings = sqlx::query_as::<_, RatingResponse>(
        "SELECT r.rating_id, u.nickname AS user_name, p.name AS p_name, r.score, r.created_at
        FROM rating r
        JOIN users u ON u.user_id = r.user_id
        JOIN parking_lot p ON p.p_id = r.p_id
        WHERE r.user_id = $1
        ORDER BY r.created_at DESC",
    )
    .bind(user_id)
    .fetch_all(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch ratings: {}", e)))?;

    Ok(ratings)
}

/// Every rating in the system, for the admin list view.
pub async fn get_all_ratings(postgres: PgPool) -> Result<Vec<RatingResponse>, AppError> {
    let ratings = sqlx::query_as::<_, RatingResponse>(
        "SELECT r.rating_id, u.nickname AS user_name, p.name AS p_name, r.score, r.created_at
        FROM rating r
        JOIN users u ON u.user_id = r.user_id
        JOIN parking_lot p ON p.p_id = r.p_id
        ORDER BY r.created_at DESC",
    )
    .fetch_all(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch ratings: {}", e)))?;

    Ok(ratings)
}
