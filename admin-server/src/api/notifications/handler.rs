//! Notification API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::{Notification, NotificationCreate, NotificationUpdate};

use crate::core::ServerState;
use crate::db::repository::notification;
use crate::utils::validation::{
    MAX_MESSAGE_LEN, MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_optional_text,
    validate_required_text, validate_text_update,
};
use crate::utils::{AppResult, ErrorCode, OrNotFound};

const RESOURCE: &str = "notifications";

/// GET /api/notifications - 获取通知列表
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Notification>>> {
    Ok(Json(notification::find_all(&state.store)))
}

/// GET /api/notifications/:id - 获取单个通知
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Notification>> {
    let notification = notification::find_by_id(&state.store, id)
        .or_not_found(ErrorCode::NotificationNotFound, id)?;
    Ok(Json(notification))
}

/// POST /api/notifications - 发送通知
///
/// 只记录通知，投递与已读计数由调用方维护
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<NotificationCreate>,
) -> AppResult<Json<Notification>> {
    validate_required_text(&payload.title, "title", MAX_NAME_LEN)?;
    validate_required_text(&payload.message, "message", MAX_MESSAGE_LEN)?;
    validate_optional_text(&payload.kind, "type", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.recipient_type, "recipientType", MAX_SHORT_TEXT_LEN)?;

    let notification = notification::create(&state.store, payload);
    state.bump_version(RESOURCE);
    Ok(Json(notification))
}

/// PUT /api/notifications/:id - 更新通知
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<NotificationUpdate>,
) -> AppResult<Json<Notification>> {
    validate_text_update(&payload.title, "title", MAX_NAME_LEN)?;
    validate_text_update(&payload.message, "message", MAX_MESSAGE_LEN)?;
    validate_optional_text(&payload.kind, "type", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.recipient_type, "recipientType", MAX_SHORT_TEXT_LEN)?;

    let notification = notification::update(&state.store, id, payload)
        .or_not_found(ErrorCode::NotificationNotFound, id)?;
    state.bump_version(RESOURCE);
    Ok(Json(notification))
}

/// DELETE /api/notifications/:id - 删除通知
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i64>) -> AppResult<Json<bool>> {
    let result = notification::delete(&state.store, id);
    if result {
        state.bump_version(RESOURCE);
    }
    Ok(Json(result))
}
