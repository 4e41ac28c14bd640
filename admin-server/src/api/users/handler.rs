//! User API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use shared::models::{UserCreate, UserResponse, UserUpdate};

use crate::core::ServerState;
use crate::db::repository::user;
use crate::utils::password::HashError;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_PASSWORD_LEN, validate_email, validate_optional_email,
    validate_required_text, validate_text_update,
};
use crate::utils::{AppError, AppResult, ErrorCode, OrNotFound};

const RESOURCE: &str = "users";

#[derive(Debug, Default, Deserialize)]
pub struct UserQuery {
    pub username: Option<String>,
}

/// GET /api/users - 获取用户列表 (可按用户名精确匹配)
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<UserQuery>,
) -> AppResult<Json<Vec<UserResponse>>> {
    let users: Vec<_> = match &query.username {
        Some(username) => user::find_by_username(&state.store, username)
            .into_iter()
            .collect(),
        None => user::find_all(&state.store),
    };
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// GET /api/users/:id - 获取单个用户
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<UserResponse>> {
    let user = user::find_by_id(&state.store, id).or_not_found(ErrorCode::UserNotFound, id)?;
    Ok(Json(user.into()))
}

/// GET /api/users/by-email/:email - 按邮箱查找用户 (首个匹配)
pub async fn get_by_email(
    State(state): State<ServerState>,
    Path(email): Path<String>,
) -> AppResult<Json<UserResponse>> {
    let user = user::find_by_email(&state.store, &email).ok_or_else(|| {
        AppError::new(ErrorCode::UserNotFound).with_detail("email", email.clone())
    })?;
    Ok(Json(user.into()))
}

/// POST /api/users - 创建用户
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<UserCreate>,
) -> AppResult<Json<UserResponse>> {
    validate_required_text(&payload.username, "username", MAX_NAME_LEN)?;
    validate_email(&payload.email, "email")?;
    validate_required_text(&payload.password, "password", MAX_PASSWORD_LEN)?;

    let user = user::create(&state.store, payload).map_err(hash_failed)?;
    state.bump_version(RESOURCE);
    Ok(Json(user.into()))
}

/// PUT /api/users/:id - 更新用户
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<UserUpdate>,
) -> AppResult<Json<UserResponse>> {
    validate_text_update(&payload.username, "username", MAX_NAME_LEN)?;
    validate_optional_email(&payload.email, "email")?;
    validate_text_update(&payload.password, "password", MAX_PASSWORD_LEN)?;

    let user = user::update(&state.store, id, payload)
        .map_err(hash_failed)?
        .or_not_found(ErrorCode::UserNotFound, id)?;
    state.bump_version(RESOURCE);
    Ok(Json(user.into()))
}

fn hash_failed(e: HashError) -> AppError {
    tracing::error!(error = %e, "Failed to hash password");
    AppError::new(ErrorCode::InternalError)
}

/// DELETE /api/users/:id - 删除用户
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i64>) -> AppResult<Json<bool>> {
    let result = user::delete(&state.store, id);
    if result {
        state.bump_version(RESOURCE);
    }
    Ok(Json(result))
}
