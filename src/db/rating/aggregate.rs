use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::{errors::AppError, models::rating::RatingAggregate};

/// Current aggregate for a lot, or the zero-state if the lot has never been
/// rated. Never an error for an unrated lot.
pub async fn get_aggregate(p_id: Uuid, postgres: PgPool) -> Result<RatingAggregate, AppError> {
    let aggregate = sqlx::query_as::<_, RatingAggregate>(
        "SELECT p_id, total_score, rating_count, avg_score
        FROM parking_lot_avg_rating
        WHERE p_id = $1",
    )
    .bind(p_id)
    .fetch_optional(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch rating aggregate: {}", e)))?;

    Ok(aggregate.unwrap_or_else(|| RatingAggregate::zero(p_id)))
}

/// Take the lot-level write lock that serializes aggregate refreshes for
/// one lot. Doubles as the lot existence check.
pub async fn lock_lot(tx: &mut Transaction<'_, Postgres>, p_id: Uuid) -> Result<(), AppError> {
    let locked = sqlx::query_scalar::<_, Uuid>(
        "SELECT p_id FROM parking_lot WHERE p_id = $1 FOR UPDATE",
    )
    .bind(p_id)
    .fetch_optional(&mut **tx)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to lock parking lot: {}", e)))?;

    locked.ok_or_else(|| AppError::NotFound("Parking lot not found".into()))?;

    Ok(())
}

/// Recompute a lot's aggregate from its rating rows and write the full
/// snapshot. Runs inside the caller's transaction, after `lock_lot`, so the
/// aggregate never reflects a row the transaction did not commit and
/// concurrent refreshes for one lot cannot interleave.
///
/// Always a full recompute, never a delta against the previous row: a
/// skipped or reordered delta cannot corrupt the aggregate, and repeated
/// recomputation over the same rows is bit-identical.
pub async fn refresh_aggregate(
    tx: &mut Transaction<'_, Postgres>,
    p_id: Uuid,
) -> Result<RatingAggregate, AppError> {
    let scores =
        sqlx::query_scalar::<_, f64>("SELECT score FROM rating WHERE p_id = $1 ORDER BY rating_id")
            .bind(p_id)
            .fetch_all(&mut **tx)
            .await
            .map_err(|e| {
                AppError::DatabaseError(format!("Failed to fetch rating scores: {}", e))
            })?;

    let aggregate = RatingAggregate::recompute(p_id, &scores);

    sqlx::query(
        "INSERT INTO parking_lot_avg_rating (p_id, total_score, rating_count, avg_score)
        VALUES ($1, $2, $3, $4)
        ON CONFLICT (p_id) DO UPDATE
        SET total_score = EXCLUDED.total_score,
            rating_count = EXCLUDED.rating_count,
            avg_score = EXCLUDED.avg_score",
    )
    .bind(aggregate.p_id)
    .bind(aggregate.total_score)
    .bind(aggregate.rating_count)
    .bind(aggregate.avg_score)
    .execute(&mut **tx)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to write rating aggregate: {}", e)))?;

    Ok(aggregate)
}
