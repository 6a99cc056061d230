use sqlx::PgPool;

use crate::{errors::AppError, models::parking_lot::ParkingLot};

/// Admin registration of a new lot. Lot names are unique.
pub async fn add_parking_lot(
    name: String,
    address: String,
    fee: i32,
    latitude: f64,
    longitude: f64,
    postgres: PgPool,
) -> Result<ParkingLot, AppError> {
    let existing = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM parking_lot WHERE name = $1")
        .bind(&name)
        .fetch_one(&postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to query parking lot: {}", e)))?;

    if existing > 0 {
        return Err(AppError::Conflict(format!(
            "Parking lot '{}' is already registered",
            name
        )));
    }

    let lot = sqlx::query_as::<_, ParkingLot>(
        "INSERT INTO parking_lot (name, address, fee, latitude, longitude)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING p_id, name, address, fee, latitude, longitude, created_at",
    )
    .bind(&name)
    .bind(&address)
    .bind(fee)
    .bind(latitude)
    .bind(longitude)
    .fetch_one(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to create parking lot: {}", e)))?;

    tracing::info!("Registered parking lot: {} (ID: {})", lot.name, lot.p_id);

    Ok(lot)
}
