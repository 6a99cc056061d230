use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    pub bookmark_id: Uuid,
    pub user_id: Uuid,
    pub p_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Bookmark row joined with the bookmarked lot, for the list view.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkResponse {
    pub bookmark_id: Uuid,
    pub p_id: Uuid,
    pub name: String,
    pub address: String,
    pub fee: i32,
    pub created_at: DateTime<Utc>,
}
