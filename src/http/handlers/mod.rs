pub mod admin;
pub mod bookmark;
pub mod parking_lot;
pub mod rating;
pub mod user;

pub use admin::{
    admin_add_lot_handler, admin_delete_lot_handler, admin_delete_rating_handler,
    admin_delete_user_handler, admin_lots_handler, admin_ratings_handler,
    admin_update_lot_handler, admin_users_handler,
};

pub use bookmark::{add_bookmark_handler, delete_bookmark_handler, get_bookmarks_handler};

pub use parking_lot::{detail_handler, lot_rating_handler, nearby_handler, search_handler};

pub use rating::{
    add_rating_handler, delete_rating_handler, get_ratings_handler, update_rating_handler,
};

pub use user::{
    delete_user_handler, login_handler, mypage_handler, register_handler, update_mypage_handler,
};
