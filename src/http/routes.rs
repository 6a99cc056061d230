use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::{http::handlers, state::AppState};

pub fn create_http_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/users/register", post(handlers::register_handler))
        .route("/api/users/login", post(handlers::login_handler))
        .route(
            "/api/users/mypage",
            get(handlers::mypage_handler).patch(handlers::update_mypage_handler),
        )
        .route("/api/users", delete(handlers::delete_user_handler))
        .route(
            "/api/ratings",
            get(handlers::get_ratings_handler)
                .post(handlers::add_rating_handler)
                .patch(handlers::update_rating_handler),
        )
        .route("/api/ratings/{id}", delete(handlers::delete_rating_handler))
        .route("/api/parking-lots/search", get(handlers::search_handler))
        .route("/api/parking-lots/nearby", post(handlers::nearby_handler))
        .route("/api/parking-lots/{p_id}", get(handlers::detail_handler))
        .route(
            "/api/parking-lots/{p_id}/rating",
            get(handlers::lot_rating_handler),
        )
        .route(
            "/api/bookmarks",
            get(handlers::get_bookmarks_handler).post(handlers::add_bookmark_handler),
        )
        .route(
            "/api/bookmarks/{id}",
            delete(handlers::delete_bookmark_handler),
        )
        .route("/api/admin/users", get(handlers::admin_users_handler))
        .route(
            "/api/admin/users/{id}",
            delete(handlers::admin_delete_user_handler),
        )
        .route(
            "/api/admin/parking-lots",
            get(handlers::admin_lots_handler)
                .post(handlers::admin_add_lot_handler)
                .patch(handlers::admin_update_lot_handler),
        )
        .route(
            "/api/admin/parking-lots/{id}",
            delete(handlers::admin_delete_lot_handler),
        )
        .route("/api/admin/ratings", get(handlers::admin_ratings_handler))
        .route(
            "/api/admin/ratings/{id}",
            delete(handlers::admin_delete_rating_handler),
        )
        .with_state(state)
}
