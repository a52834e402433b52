//! Handlers for the `/users` resource and its friendship sub-resources.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use cinemate_core::error::CoreError;
use cinemate_core::friendship::FriendshipStatus;
use cinemate_core::types::EntityId;
use cinemate_core::user::{NewUser, User};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/v1/users
pub async fn list(State(state): State<AppState>) -> Json<Vec<User>> {
    let users = state.users.find_all();
    tracing::debug!(count = users.len(), "listing users");
    Json(users)
}

/// POST /api/v1/users
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<NewUser>,
) -> AppResult<(StatusCode, Json<User>)> {
    input.validate()?;
    let user = state.users.create(input);
    tracing::info!(user_id = user.id, "user created");
    Ok((StatusCode::CREATED, Json(user)))
}

/// PUT /api/v1/users
///
/// Full-record update; the identifier comes from the body and must
/// already exist. A blank display name falls back to the login, exactly
/// as on creation.
pub async fn update(
    State(state): State<AppState>,
    Json(mut input): Json<User>,
) -> AppResult<Json<User>> {
    input.validate()?;
    input.apply_name_default();
    let user = state.users.update(input)?;
    tracing::info!(user_id = user.id, "user updated");
    Ok(Json(user))
}

/// GET /api/v1/users/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<Json<User>> {
    let user = state
        .users
        .find_by_id(id)
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;
    Ok(Json(user))
}

/// PUT /api/v1/users/{id}/friends/{friend_id}
pub async fn add_friend(
    State(state): State<AppState>,
    Path((id, friend_id)): Path<(EntityId, EntityId)>,
) -> AppResult<StatusCode> {
    state.friends.add_friend(id, friend_id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/v1/users/{id}/friends/{friend_id}/confirm
pub async fn confirm_friend(
    State(state): State<AppState>,
    Path((id, friend_id)): Path<(EntityId, EntityId)>,
) -> AppResult<StatusCode> {
    state.friends.confirm_friend(id, friend_id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/users/{id}/friends/{friend_id}
pub async fn remove_friend(
    State(state): State<AppState>,
    Path((id, friend_id)): Path<(EntityId, EntityId)>,
) -> AppResult<StatusCode> {
    state.friends.remove_friend(id, friend_id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/users/{id}/friends
pub async fn friends(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<Json<Vec<User>>> {
    Ok(Json(state.friends.friends(id)?))
}

/// GET /api/v1/users/{id}/friends/confirmed
pub async fn confirmed_friends(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<Json<Vec<User>>> {
    Ok(Json(state.friends.confirmed_friends(id)?))
}

/// GET /api/v1/users/{id}/friends/pending
pub async fn pending_requests(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<Json<Vec<User>>> {
    Ok(Json(state.friends.pending_requests(id)?))
}

/// GET /api/v1/users/{id}/friends/common/{other_id}
pub async fn common_friends(
    State(state): State<AppState>,
    Path((id, other_id)): Path<(EntityId, EntityId)>,
) -> AppResult<Json<Vec<User>>> {
    Ok(Json(state.friends.common_friends(id, other_id)?))
}

/// GET /api/v1/users/{id}/friends/{friend_id}/status
///
/// `null` when no relation exists.
pub async fn friendship_status(
    State(state): State<AppState>,
    Path((id, friend_id)): Path<(EntityId, EntityId)>,
) -> AppResult<Json<Option<FriendshipStatus>>> {
    Ok(Json(state.friends.friendship_status(id, friend_id)?))
}
