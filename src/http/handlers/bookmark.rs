use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    auth::AuthClaims,
    db::bookmark::{delete::delete_bookmark, get::get_bookmarks_for_user, post::add_bookmark},
    models::bookmark::BookmarkResponse,
    state::AppState,
};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddBookmarkPayload {
    pub p_id: Uuid,
}

pub async fn get_bookmarks_handler(
    State(state): State<AppState>,
    claims: AuthClaims,
) -> Result<Json<Vec<BookmarkResponse>>, (StatusCode, String)> {
    let user_id = claims.user_id()?;

    let bookmarks = get_bookmarks_for_user(user_id, state.postgres.clone())
        .await
        .map_err(|e| {
            tracing::error!("Error retrieving bookmarks: {}", e);
            e.to_response()
        })?;

    Ok(Json(bookmarks))
}

pub async fn add_bookmark_handler(
    State(state): State<AppState>,
    claims: AuthClaims,
    Json(payload): Json<AddBookmarkPayload>,
) -> Result<(StatusCode, Json<Uuid>), (StatusCode, String)> {
    let user_id = claims.user_id()?;

    match add_bookmark(user_id, payload.p_id, state.postgres.clone()).await {
        Ok(bookmark_id) => Ok((StatusCode::CREATED, Json(bookmark_id))),
        Err(err) => {
            tracing::error!("Error adding bookmark: {}", err);
            Err(err.to_response())
        }
    }
}

pub async fn delete_bookmark_handler(
    State(state): State<AppState>,
    claims: AuthClaims,
    Path(bookmark_id): Path<Uuid>,
) -> Result<StatusCode, (StatusCode, String)> {
    let user_id = claims.user_id()?;

    match delete_bookmark(bookmark_id, user_id, state.postgres.clone()).await {
        Ok(()) => Ok(StatusCode::OK),
        Err(err) => {
            tracing::error!("Error deleting bookmark: {}", err);
            Err(err.to_response())
        }
    }
}
