use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    errors::AppError,
    models::{User, user::PreferredFactor},
};

/// Update the acting user's profile. Absent fields keep their current
/// value.
pub async fn update_mypage(
    user_id: Uuid,
    nickname: Option<String>,
    preferred_factor: Option<PreferredFactor>,
    postgres: PgPool,
) -> Result<User, AppError> {
    sqlx::query_as::<_, User>(
        "UPDATE users
        SET nickname = COALESCE($2, nickname),
            preferred_factor = COALESCE($3, preferred_factor)
        WHERE user_id = $1
        RETURNING user_id, email, nickname, preferred_factor, created_at",
    )
    .bind(user_id)
    .bind(nickname)
    .bind(preferred_factor)
    .fetch_optional(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to update user: {}", e)))?
    .ok_or_else(|| AppError::NotFound("User not found".into()))
}
