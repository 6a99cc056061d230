use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;

/// Admin removal of a lot. Its ratings, aggregate row and bookmarks go with
/// it via FK cascade.
pub async fn delete_parking_lot(p_id: Uuid, postgres: PgPool) -> Result<(), AppError> {
    let deleted = sqlx::query("DELETE FROM parking_lot WHERE p_id = $1")
        .bind(p_id)
        .execute(&postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to delete parking lot: {}", e)))?;

    if deleted.rows_affected() == 0 {
        return Err(AppError::NotFound("Parking lot not found".into()));
    }

    tracing::info!("Deleted parking lot {}", p_id);

    Ok(())
}
