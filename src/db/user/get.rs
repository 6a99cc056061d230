use sqlx::PgPool;
use uuid::Uuid;

use crate::{errors::AppError, models::User};

pub async fn get_user_by_id(user_id: Uuid, postgres: PgPool) -> Result<User, AppError> {
    sqlx::query_as::<_, User>(
        "SELECT user_id, email, nickname, preferred_factor, created_at
        FROM users
        WHERE user_id = $1",
    )
    .bind(user_id)
    .fetch_optional(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch user: {}", e)))?
    .ok_or_else(|| AppError::NotFound("User not found".into()))
}

pub async fn get_user_by_email(email: &str, postgres: PgPool) -> Result<User, AppError> {
    sqlx::query_as::<_, User>(
        "SELECT user_id, email, nickname, preferred_factor, created_at
        FROM users
        WHERE email = $1",
    )
    .bind(email)
    .fetch_optional(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch user: {}", e)))?
    .ok_or_else(|| AppError::NotFound(format!("User not found for email: {}", email)))
}

pub async fn get_all_users(postgres: PgPool) -> Result<Vec<User>, AppError> {
    let users = sqlx::query_as::<_, User>(
        "SELECT user_id, email, nickname, preferred_factor, created_at
        FROM users
        ORDER BY created_at DESC",
    )
    .fetch_all(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch users: {}", e)))?;

    Ok(users)
}
