//! Route definitions for the `/users` resource and its friendship
//! sub-resources.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::user;
use crate::state::AppState;

/// Routes mounted at `/users`.
///
/// ```text
/// GET    /                                  -> list
/// POST   /                                  -> create
/// PUT    /                                  -> update
/// GET    /{id}                              -> get_by_id
/// GET    /{id}/friends                      -> friends
/// GET    /{id}/friends/confirmed            -> confirmed_friends
/// GET    /{id}/friends/pending              -> pending_requests
/// GET    /{id}/friends/common/{other_id}    -> common_friends
/// PUT    /{id}/friends/{friend_id}          -> add_friend
/// DELETE /{id}/friends/{friend_id}          -> remove_friend
/// PUT    /{id}/friends/{friend_id}/confirm  -> confirm_friend
/// GET    /{id}/friends/{friend_id}/status   -> friendship_status
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(user::list).post(user::create).put(user::update))
        .route("/{id}", get(user::get_by_id))
        .route("/{id}/friends", get(user::friends))
        .route("/{id}/friends/confirmed", get(user::confirmed_friends))
        .route("/{id}/friends/pending", get(user::pending_requests))
        .route("/{id}/friends/common/{other_id}", get(user::common_friends))
        .route(
            "/{id}/friends/{friend_id}",
            put(user::add_friend).delete(user::remove_friend),
        )
        .route("/{id}/friends/{friend_id}/confirm", put(user::confirm_friend))
        .route("/{id}/friends/{friend_id}/status", get(user::friendship_status))
}
