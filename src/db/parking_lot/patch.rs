use sqlx::PgPool;
use uuid::Uuid;

use crate::{errors::AppError, models::parking_lot::ParkingLot};

/// Admin update of a lot's fixed attributes. Ratings and the aggregate are
/// untouched.
pub async fn update_parking_lot(
    p_id: Uuid,
    name: String,
    address: String,
    fee: i32,
    latitude: f64,
    longitude: f64,
    postgres: PgPool,
) -> Result<ParkingLot, AppError> {
    sqlx::query_as::<_, ParkingLot>(
        "UPDATE parking_lot
        SET name = $2, address = $3, fee = $4, latitude = $5, longitude = $6
        WHERE p_id = $1
        RETURNING p_id, name, address, fee, latitude, longitude, created_at",
    )
    .bind(p_id)
    .bind(&name)
    .bind(&address)
    .bind(fee)
    .bind(latitude)
    .bind(longitude)
    .fetch_optional(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to update parking lot: {}", e)))?
    .ok_or_else(|| AppError::NotFound("Parking lot not found".into()))
}
