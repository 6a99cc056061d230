use axum::{Json, extract::State, http::StatusCode};
use serde::Deserialize;

use crate::{
    auth::AuthClaims,
    db::user::{
        delete::delete_user,
        get::get_user_by_id,
        patch::update_mypage,
        post::{create_user, login_user},
    },
    models::{User, user::PreferredFactor},
    state::AppState,
};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterPayload {
    pub email: String,
    pub nickname: String,
    pub preferred_factor: PreferredFactor,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginPayload {
    pub email: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MypageUpdatePayload {
    pub nickname: Option<String>,
    pub preferred_factor: Option<PreferredFactor>,
}

pub async fn register_handler(
    State(state): State<AppState>,
    Json(payload): Json<RegisterPayload>,
) -> Result<(StatusCode, Json<String>), (StatusCode, String)> {
    match create_user(
        payload.email.clone(),
        payload.nickname,
        payload.preferred_factor,
        state.postgres.clone(),
    )
    .await
    {
        Ok(token) => {
            tracing::info!("User registered with email: {}", payload.email);
            Ok((StatusCode::CREATED, Json(token)))
        }
        Err(err) => {
            tracing::error!("Error registering user: {}", err);
            Err(err.to_response())
        }
    }
}

pub async fn login_handler(
    State(state): State<AppState>,
    Json(payload): Json<LoginPayload>,
) -> Result<Json<String>, (StatusCode, String)> {
    match login_user(payload.email.clone(), state.postgres.clone()).await {
        Ok(token) => {
            tracing::info!("User logged in with email: {}", payload.email);
            Ok(Json(token))
        }
        Err(err) => {
            tracing::error!("Error logging in user: {}", err);
            Err(err.to_response())
        }
    }
}

pub async fn mypage_handler(
    State(state): State<AppState>,
    claims: AuthClaims,
) -> Result<Json<User>, (StatusCode, String)> {
    let user_id = claims.user_id()?;

    let user = get_user_by_id(user_id, state.postgres.clone())
        .await
        .map_err(|e| {
            tracing::error!("Error retrieving user: {}", e);
            e.to_response()
        })?;

    Ok(Json(user))
}

pub async fn update_mypage_handler(
    State(state): State<AppState>,
    claims: AuthClaims,
    Json(payload): Json<MypageUpdatePayload>,
) -> Result<Json<User>, (StatusCode, String)> {
    let user_id = claims.user_id()?;

    let user = update_mypage(
        user_id,
        payload.nickname,
        payload.preferred_factor,
        state.postgres.clone(),
    )
    .await
    .map_err(|e| {
        tracing::error!("Error updating user profile: {}", e);
        e.to_response()
    })?;

    tracing::info!("User {} updated their profile", user_id);

    Ok(Json(user))
}

pub async fn delete_user_handler(
    State(state): State<AppState>,
    claims: AuthClaims,
) -> Result<StatusCode, (StatusCode, String)> {
    let user_id = claims.user_id()?;

    delete_user(user_id, state.postgres.clone())
        .await
        .map_err(|e| {
            tracing::error!("Error deleting user: {}", e);
            e.to_response()
        })?;

    Ok(StatusCode::OK)
}
