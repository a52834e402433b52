//! Route definitions for the `/films` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::film;
use crate::state::AppState;

/// Routes mounted at `/films`.
///
/// ```text
/// GET    /                     -> list
/// POST   /                     -> create
/// PUT    /                     -> update
/// GET    /popular              -> popular
/// GET    /{id}                 -> get_by_id
/// GET    /{id}/likes           -> likes_count
/// PUT    /{id}/like/{user_id}  -> add_like
/// DELETE /{id}/like/{user_id}  -> remove_like
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(film::list).post(film::create).put(film::update))
        .route("/popular", get(film::popular))
        .route("/{id}", get(film::get_by_id))
        .route("/{id}/likes", get(film::likes_count))
        .route(
            "/{id}/like/{user_id}",
            put(film::add_like).delete(film::remove_like),
        )
}
