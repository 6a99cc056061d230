use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    db::{
        parking_lot::{
            delete::delete_parking_lot,
            get::get_lots_with_avg,
            patch::update_parking_lot,
            post::add_parking_lot,
        },
        rating::{delete::admin_delete_rating, get::get_all_ratings},
        user::{delete::delete_user, get::get_all_users},
    },
    models::{
        User,
        parking_lot::{LotWithAvg, ParkingLot},
        rating::RatingResponse,
    },
    state::AppState,
};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddLotPayload {
    pub name: String,
    pub address: String,
    pub fee: i32,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLotPayload {
    pub p_id: Uuid,
    pub name: String,
    pub address: String,
    pub fee: i32,
    pub latitude: f64,
    pub longitude: f64,
}

pub async fn admin_users_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<User>>, (StatusCode, String)> {
    let users = get_all_users(state.postgres.clone()).await.map_err(|e| {
        tracing::error!("Error retrieving users: {}", e);
        e.to_response()
    })?;

    Ok(Json(users))
}

pub async fn admin_delete_user_handler(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<StatusCode, (StatusCode, String)> {
    match delete_user(user_id, state.postgres.clone()).await {
        Ok(()) => Ok(StatusCode::OK),
        Err(err) => {
            tracing::error!("Error deleting user: {}", err);
            Err(err.to_response())
        }
    }
}

pub async fn admin_lots_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<LotWithAvg>>, (StatusCode, String)> {
    let lots = get_lots_with_avg(state.postgres.clone())
        .await
        .map_err(|e| {
            tracing::error!("Error retrieving parking lots: {}", e);
            e.to_response()
        })?;

    Ok(Json(lots))
}

pub async fn admin_add_lot_handler(
    State(state): State<AppState>,
    Json(payload): Json<AddLotPayload>,
) -> Result<(StatusCode, Json<ParkingLot>), (StatusCode, String)> {
    match add_parking_lot(
        payload.name,
        payload.address,
        payload.fee,
        payload.latitude,
        payload.longitude,
        state.postgres.clone(),
    )
    .await
    {
        Ok(lot) => Ok((StatusCode::CREATED, Json(lot))),
        Err(err) => {
            tracing::error!("Error registering parking lot: {}", err);
            Err(err.to_response())
        }
    }
}

pub async fn admin_update_lot_handler(
    State(state): State<AppState>,
    Json(payload): Json<UpdateLotPayload>,
) -> Result<Json<ParkingLot>, (StatusCode, String)> {
    match update_parking_lot(
        payload.p_id,
        payload.name,
        payload.address,
        payload.fee,
        payload.latitude,
        payload.longitude,
        state.postgres.clone(),
    )
    .await
    {
        Ok(lot) => {
            tracing::info!("Updated parking lot: {} (ID: {})", lot.name, lot.p_id);
            Ok(Json(lot))
        }
        Err(err) => {
            tracing::error!("Error updating parking lot: {}", err);
            Err(err.to_response())
        }
    }
}

pub async fn admin_delete_lot_handler(
    State(state): State<AppState>,
    Path(p_id): Path<Uuid>,
) -> Result<StatusCode, (StatusCode, String)> {
    match delete_parking_lot(p_id, state.postgres.clone()).await {
        Ok(()) => Ok(StatusCode::OK),
        Err(err) => {
            tracing::error!("Error deleting parking lot: {}", err);
            Err(err.to_response())
        }
    }
}

pub async fn admin_ratings_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<RatingResponse>>, (StatusCode, String)> {
    let ratings = get_all_ratings(state.postgres.clone()).await.map_err(|e| {
        tracing::error!("Error retrieving ratings: {}", e);
        e.to_response()
    })?;

    Ok(Json(ratings))
}

pub async fn admin_delete_rating_handler(
    State(state): State<AppState>,
    Path(rating_id): Path<Uuid>,
) -> Result<StatusCode, (StatusCode, String)> {
    match admin_delete_rating(rating_id, state.postgres.clone()).await {
        Ok(()) => Ok(StatusCode::OK),
        Err(err) => {
            tracing::error!("Error deleting rating: {}", err);
            Err(err.to_response())
        }
    }
}
