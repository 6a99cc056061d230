use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    auth::AuthClaims,
    db::rating::{
        delete::delete_rating, get::get_ratings_for_user, patch::update_rating, post::add_rating,
    },
    models::rating::RatingResponse,
    state::AppState,
};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddRatingPayload {
    pub p_id: Uuid,
    pub score: f64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRatingPayload {
    pub rating_id: Uuid,
    pub score: f64,
}

pub async fn get_ratings_handler(
    State(state): State<AppState>,
    claims: AuthClaims,
) -> Result<Json<Vec<RatingResponse>>, (StatusCode, String)> {
    let user_id = claims.user_id()?;

    let ratings = get_ratings_for_user(user_id, state.postgres.clone())
        .await
        .map_err(|e| {
            tracing::error!("Error retrieving ratings: {}", e);
            e.to_response()
        })?;

    Ok(Json(ratings))
}

pub async fn add_rating_handler(
    State(state): State<AppState>,
    claims: AuthClaims,
    Json(payload): Json<AddRatingPayload>,
) -> Result<(StatusCode, Json<Uuid>), (StatusCode, String)> {
    let user_id = claims.user_id()?;

    match add_rating(user_id, payload.p_id, payload.score, state.postgres.clone()).await {
        Ok(rating_id) => Ok((StatusCode::CREATED, Json(rating_id))),
        Err(err) => {
            tracing::error!("Error adding rating: {}", err);
            Err(err.to_response())
        }
    }
}

pub async fn update_rating_handler(
    State(state): State<AppState>,
    claims: AuthClaims,
    Json(payload): Json<UpdateRatingPayload>,
) -> Result<StatusCode, (StatusCode, String)> {
    let user_id = claims.user_id()?;

    match update_rating(
        payload.rating_id,
        user_id,
        payload.score,
        state.postgres.clone(),
    )
    .await
    {
        Ok(()) => Ok(StatusCode::OK),
        Err(err) => {
            tracing::error!("Error updating rating: {}", err);
            Err(err.to_response())
        }
    }
}

pub async fn delete_rating_handler(
    State(state): State<AppState>,
    claims: AuthClaims,
    Path(rating_id): Path<Uuid>,
) -> Result<StatusCode, (StatusCode, String)> {
    let user_id = claims.user_id()?;

    match delete_rating(rating_id, user_id, state.postgres.clone()).await {
        Ok(()) => Ok(StatusCode::OK),
        Err(err) => {
            tracing::error!("Error deleting rating: {}", err);
            Err(err.to_response())
        }
    }
}
