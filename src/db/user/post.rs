use sqlx::PgPool;

use crate::{
    auth::generate_jwt,
    db::user::get::get_user_by_email,
    errors::AppError,
    models::{User, user::PreferredFactor},
};

/// Register a new account and hand back a session token. Email is the
/// account key; a taken email is a conflict, not a silent re-login.
pub async fn create_user(
    email: String,
    nickname: String,
    preferred_factor: PreferredFactor,
    postgres: PgPool,
) -> Result<String, AppError> {
    let existing = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users WHERE email = $1")
        .bind(&email)
        .fetch_one(&postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to query user: {}", e)))?;

    if existing > 0 {
        return Err(AppError::Conflict(format!(
            "Email '{}' is already registered",
            email
        )));
    }

    let user = sqlx::query_as::<_, User>(
        "INSERT INTO users (email, nickname, preferred_factor)
        VALUES ($1, $2, $3)
        RETURNING user_id, email, nickname, preferred_factor, created_at",
    )
    .bind(&email)
    .bind(&nickname)
    .bind(preferred_factor)
    .fetch_one(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to create user: {}", e)))?;

    tracing::info!("Created new user: {} (ID: {})", user.email, user.user_id);

    generate_jwt(&user)
}

/// Token issuance for an existing account. Credential verification lives at
/// the identity boundary, outside this core.
pub async fn login_user(email: String, postgres: PgPool) -> Result<String, AppError> {
    let user = get_user_by_email(&email, postgres).await?;

    generate_jwt(&user)
}
