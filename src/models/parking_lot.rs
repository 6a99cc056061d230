use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ParkingLot {
    pub p_id: Uuid,
    pub name: String,
    pub address: String,
    pub fee: i32,
    pub latitude: f64,
    pub longitude: f64,
    pub created_at: DateTime<Utc>,
}

/// Lot row joined with its current average score, as served by detail,
/// search and admin listings and fed into the recommendation pipeline.
/// Lots without ratings carry an average of 0.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct LotWithAvg {
    pub p_id: Uuid,
    pub name: String,
    pub address: String,
    pub fee: i32,
    pub latitude: f64,
    pub longitude: f64,
    pub avg_score: f64,
}
