use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    auth::AuthClaims,
    db::{
        parking_lot::get::{get_lot_detail, search_lots},
        rating::aggregate::get_aggregate,
    },
    models::{
        parking_lot::LotWithAvg,
        rating::RatingAggregate,
        recommendation::RankedLot,
    },
    recommend::recommend_nearby,
    state::AppState,
};

#[derive(Deserialize)]
pub struct SearchParams {
    pub keyword: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NearbyPayload {
    pub latitude: f64,
    pub longitude: f64,
    pub weekday: u8,
    pub hour: u8,
}

pub async fn detail_handler(
    State(state): State<AppState>,
    Path(p_id): Path<Uuid>,
) -> Result<Json<LotWithAvg>, (StatusCode, String)> {
    let lot = get_lot_detail(p_id, state.postgres.clone())
        .await
        .map_err(|e| {
            tracing::error!("Error retrieving parking lot: {}", e);
            e.to_response()
        })?;

    Ok(Json(lot))
}

pub async fn lot_rating_handler(
    State(state): State<AppState>,
    Path(p_id): Path<Uuid>,
) -> Result<Json<RatingAggregate>, (StatusCode, String)> {
    let aggregate = get_aggregate(p_id, state.postgres.clone())
        .await
        .map_err(|e| {
            tracing::error!("Error retrieving rating aggregate: {}", e);
            e.to_response()
        })?;

    Ok(Json(aggregate))
}

pub async fn search_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<LotWithAvg>>, (StatusCode, String)> {
    let lots = search_lots(&params.keyword, state.postgres.clone())
        .await
        .map_err(|e| {
            tracing::error!("Error searching parking lots: {}", e);
            e.to_response()
        })?;

    tracing::info!("Search for '{}' matched {} lots", params.keyword, lots.len());

    Ok(Json(lots))
}

pub async fn nearby_handler(
    State(state): State<AppState>,
    claims: AuthClaims,
    Json(payload): Json<NearbyPayload>,
) -> Result<Json<Vec<RankedLot>>, (StatusCode, String)> {
    let user_id = claims.user_id()?;

    match recommend_nearby(
        user_id,
        payload.latitude,
        payload.longitude,
        payload.weekday,
        payload.hour,
        state.postgres.clone(),
        state.scoring.as_ref(),
    )
    .await
    {
        Ok(ranked) => {
            tracing::info!(
                "Recommended {} parking lots for user {}",
                ranked.len(),
                user_id
            );
            Ok(Json(ranked))
        }
        Err(err) => {
            tracing::error!("Error recommending parking lots: {}", err);
            Err(err.to_response())
        }
    }
}
