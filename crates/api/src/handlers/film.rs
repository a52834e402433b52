//! Handlers for the `/films` resource: catalog CRUD, likes, popularity.
//!
//! Every handler validates caller-supplied data and referenced
//! identifiers before any state is mutated, so a failed request leaves
//! the stores untouched.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use cinemate_core::error::CoreError;
use cinemate_core::film::{Film, NewFilm};
use cinemate_core::types::EntityId;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/v1/films
pub async fn list(State(state): State<AppState>) -> Json<Vec<Film>> {
    let films = state.films.find_all();
    tracing::debug!(count = films.len(), "listing films");
    Json(films)
}

/// POST /api/v1/films
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<NewFilm>,
) -> AppResult<(StatusCode, Json<Film>)> {
    input.validate()?;
    let film = state.films.create(input);
    tracing::info!(film_id = film.id, "film created");
    Ok((StatusCode::CREATED, Json(film)))
}

/// PUT /api/v1/films
///
/// Full-record update; the identifier comes from the body and must
/// already exist.
pub async fn update(
    State(state): State<AppState>,
    Json(input): Json<Film>,
) -> AppResult<Json<Film>> {
    input.validate()?;
    let film = state.films.update(input)?;
    tracing::info!(film_id = film.id, "film updated");
    Ok(Json(film))
}

/// GET /api/v1/films/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<Json<Film>> {
    let film = state
        .films
        .find_by_id(id)
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Film", id }))?;
    Ok(Json(film))
}

/// Query parameters for the popularity ranking (`?count=`).
#[derive(Debug, Deserialize)]
pub struct PopularParams {
    #[serde(default = "default_popular_count")]
    pub count: usize,
}

fn default_popular_count() -> usize {
    10
}

/// GET /api/v1/films/popular?count=
pub async fn popular(
    State(state): State<AppState>,
    Query(params): Query<PopularParams>,
) -> Json<Vec<Film>> {
    Json(state.ranking.popular_films(params.count))
}

/// PUT /api/v1/films/{id}/like/{user_id}
pub async fn add_like(
    State(state): State<AppState>,
    Path((id, user_id)): Path<(EntityId, EntityId)>,
) -> AppResult<StatusCode> {
    state.likes.add_like(id, user_id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/films/{id}/like/{user_id}
pub async fn remove_like(
    State(state): State<AppState>,
    Path((id, user_id)): Path<(EntityId, EntityId)>,
) -> AppResult<StatusCode> {
    state.likes.remove_like(id, user_id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Like-count response body.
#[derive(Debug, Serialize)]
pub struct LikesCount {
    pub film_id: EntityId,
    pub count: usize,
}

/// GET /api/v1/films/{id}/likes
pub async fn likes_count(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<Json<LikesCount>> {
    let count = state.likes.likes_count(id)?;
    Ok(Json(LikesCount { film_id: id, count }))
}
