pub mod films;
pub mod health;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /films                                   list, create, update
/// /films/popular                           popularity ranking
/// /films/{id}                              get by id
/// /films/{id}/likes                        like count
/// /films/{id}/like/{user_id}               like, unlike
///
/// /users                                   list, create, update
/// /users/{id}                              get by id
/// /users/{id}/friends                      all friends
/// /users/{id}/friends/confirmed            confirmed friends
/// /users/{id}/friends/pending              pending requests
/// /users/{id}/friends/common/{other_id}    common confirmed friends
/// /users/{id}/friends/{friend_id}          request, remove
/// /users/{id}/friends/{friend_id}/confirm  confirm
/// /users/{id}/friends/{friend_id}/status   relation status
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/films", films::router())
        .nest("/users", users::router())
}
