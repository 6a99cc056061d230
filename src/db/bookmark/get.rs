use sqlx::PgPool;
use uuid::Uuid;

use crate::{errors::AppError, models::bookmark::BookmarkResponse};

/// Bookmarks of one user with the bookmarked lot joined in, newest first.
pub async fn get_bookmarks_for_user(
    user_id: Uuid,
    postgres: PgPool,
) -> Result<Vec<BookmarkResponse>, AppError> {
    let bookmarks = sqlx::query_as::<_, BookmarkResponse>(
        "SELECT b.bookmark_id, p.p_id, p.name, p.address, p.fee, b.created_at
        FROM bookmark b
        JOIN parking_lot p ON p.p_id = b.p_id
        WHERE b.user_id = $1
        ORDER BY b.created_at DESC",
    )
    .bind(user_id)
    .fetch_all(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch bookmarks: {}", e)))?;

    Ok(bookmarks)
}
