use sqlx::PgPool;
use uuid::Uuid;

use crate::{errors::AppError, models::parking_lot::LotWithAvg};

const LOT_WITH_AVG: &str = "SELECT p.p_id, p.name, p.address, p.fee, p.latitude, p.longitude,
        COALESCE(a.avg_score, 0) AS avg_score
    FROM parking_lot p
    LEFT JOIN parking_lot_avg_rating a ON a.p_id = p.p_id";

/// Lot detail with its current average score.
pub async fn get_lot_detail(p_id: Uuid, postgres: PgPool) -> Result<LotWithAvg, AppError> {
    sqlx::query_as::<_, LotWithAvg>(&format!("{} WHERE p.p_id = $1", LOT_WITH_AVG))
        .bind(p_id)
        .fetch_optional(&postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to fetch parking lot: {}", e)))?
        .ok_or_else(|| AppError::NotFound("Parking lot not found".into()))
}

/// Keyword search over lot names and addresses.
pub async fn search_lots(keyword: &str, postgres: PgPool) -> Result<Vec<LotWithAvg>, AppError> {
    let lots = sqlx::query_as::<_, LotWithAvg>(&format!(
        "{} WHERE p.name ILIKE '%' || $1 || '%' OR p.address ILIKE '%' || $1 || '%'
        ORDER BY p.name",
        LOT_WITH_AVG
    ))
    .bind(keyword)
    .fetch_all(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to search parking lots: {}", e)))?;

    Ok(lots)
}

/// Every lot with its current average, for the admin list and the geo
/// radius filter.
pub async fn get_lots_with_avg(postgres: PgPool) -> Result<Vec<LotWithAvg>, AppError> {
    let lots = sqlx::query_as::<_, LotWithAvg>(&format!("{} ORDER BY p.name", LOT_WITH_AVG))
        .fetch_all(&postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to fetch parking lots: {}", e)))?;

    Ok(lots)
}
