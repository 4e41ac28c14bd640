//! Complaint API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use shared::models::{Complaint, ComplaintCreate, ComplaintStats, ComplaintStatus, ComplaintUpdate};
use shared::types::UnvalidatedForeignKey;

use crate::core::ServerState;
use crate::db::repository::complaint;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, validate_complaint_rating, validate_optional_text,
    validate_required_text, validate_resolved_at, validate_text_update,
};
use crate::utils::{AppResult, ErrorCode, OrNotFound};

const RESOURCE: &str = "complaints";

/// 列表过滤条件，多个条件同时生效
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplaintQuery {
    pub status: Option<ComplaintStatus>,
    pub engineer_id: Option<UnvalidatedForeignKey>,
    pub customer_id: Option<UnvalidatedForeignKey>,
}

impl ComplaintQuery {
    fn matches(&self, c: &Complaint) -> bool {
        self.status.is_none_or(|s| c.status == s)
            && self.engineer_id.is_none_or(|e| c.engineer_id == Some(e))
            && self.customer_id.is_none_or(|id| c.customer_id == id)
    }
}

/// GET /api/complaints - 获取投诉列表
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ComplaintQuery>,
) -> AppResult<Json<Vec<Complaint>>> {
    let store = &state.store;
    let mut complaints = if let Some(engineer_id) = query.engineer_id {
        complaint::find_by_engineer(store, engineer_id)
    } else if let Some(customer_id) = query.customer_id {
        complaint::find_by_customer(store, customer_id)
    } else if let Some(status) = query.status {
        complaint::find_by_status(store, status)
    } else {
        complaint::find_all(store)
    };
    complaints.retain(|c| query.matches(c));
    Ok(Json(complaints))
}

/// GET /api/complaints/stats - 投诉统计
pub async fn stats(State(state): State<ServerState>) -> AppResult<Json<ComplaintStats>> {
    Ok(Json(complaint::stats(&state.store)))
}

/// GET /api/complaints/:id - 获取单个投诉
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Complaint>> {
    let complaint = complaint::find_by_id(&state.store, id)
        .or_not_found(ErrorCode::ComplaintNotFound, id)?;
    Ok(Json(complaint))
}

/// POST /api/complaints - 创建投诉
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ComplaintCreate>,
) -> AppResult<Json<Complaint>> {
    validate_required_text(&payload.title, "title", MAX_NAME_LEN)?;
    validate_required_text(&payload.description, "description", MAX_NOTE_LEN)?;
    validate_required_text(&payload.location, "location", MAX_NAME_LEN)?;
    validate_optional_text(&payload.resolution, "resolution", MAX_NOTE_LEN)?;
    validate_optional_text(&payload.feedback, "feedback", MAX_NOTE_LEN)?;
    validate_complaint_rating(payload.rating)?;
    validate_resolved_at(payload.resolved_at, shared::util::now_millis())?;

    let complaint = complaint::create(&state.store, payload);
    state.bump_version(RESOURCE);
    Ok(Json(complaint))
}

/// PUT /api/complaints/:id - 更新投诉
///
/// 状态改为 resolved 时不会自动写入 resolvedAt，需要调用方一并提交
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<ComplaintUpdate>,
) -> AppResult<Json<Complaint>> {
    validate_text_update(&payload.title, "title", MAX_NAME_LEN)?;
    validate_text_update(&payload.description, "description", MAX_NOTE_LEN)?;
    validate_text_update(&payload.location, "location", MAX_NAME_LEN)?;
    validate_optional_text(&payload.resolution, "resolution", MAX_NOTE_LEN)?;
    validate_optional_text(&payload.feedback, "feedback", MAX_NOTE_LEN)?;
    validate_complaint_rating(payload.rating)?;
    if payload.resolved_at.is_some() {
        let existing = complaint::find_by_id(&state.store, id)
            .or_not_found(ErrorCode::ComplaintNotFound, id)?;
        validate_resolved_at(payload.resolved_at, existing.created_at)?;
    }

    let complaint = complaint::update(&state.store, id, payload)
        .or_not_found(ErrorCode::ComplaintNotFound, id)?;
    state.bump_version(RESOURCE);
    Ok(Json(complaint))
}

/// DELETE /api/complaints/:id - 删除投诉
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i64>) -> AppResult<Json<bool>> {
    let result = complaint::delete(&state.store, id);
    if result {
        state.bump_version(RESOURCE);
    }
    Ok(Json(result))
}
