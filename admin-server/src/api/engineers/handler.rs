//! Engineer API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use shared::models::{Engineer, EngineerCreate, EngineerUpdate};

use crate::core::ServerState;
use crate::db::repository::engineer;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_email, validate_engineer_rating,
    validate_non_negative, validate_optional_email, validate_required_text, validate_text_update,
};
use crate::utils::{AppResult, ErrorCode, OrNotFound};

const RESOURCE: &str = "engineers";

#[derive(Debug, Default, Deserialize)]
pub struct EngineerQuery {
    pub location: Option<String>,
}

/// GET /api/engineers - 获取工程师列表 (可按区域过滤)
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<EngineerQuery>,
) -> AppResult<Json<Vec<Engineer>>> {
    let engineers = match &query.location {
        Some(location) => engineer::find_by_location(&state.store, location),
        None => engineer::find_all(&state.store),
    };
    Ok(Json(engineers))
}

/// GET /api/engineers/:id - 获取单个工程师
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Engineer>> {
    let engineer = engineer::find_by_id(&state.store, id).or_not_found(ErrorCode::EngineerNotFound, id)?;
    Ok(Json(engineer))
}

/// POST /api/engineers - 创建工程师
///
/// 未提供的 rating / completedJobs / activeJobs 默认 0，isActive 默认 true
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<EngineerCreate>,
) -> AppResult<Json<Engineer>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_email(&payload.email, "email")?;
    validate_required_text(&payload.phone, "phone", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&payload.location, "location", MAX_NAME_LEN)?;
    validate_required_text(&payload.specialization, "specialization", MAX_NAME_LEN)?;
    validate_engineer_rating(payload.rating)?;
    validate_non_negative(payload.completed_jobs, "completedJobs")?;
    validate_non_negative(payload.active_jobs, "activeJobs")?;

    let engineer = engineer::create(&state.store, payload);
    state.bump_version(RESOURCE);
    Ok(Json(engineer))
}

/// PUT /api/engineers/:id - 更新工程师
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<EngineerUpdate>,
) -> AppResult<Json<Engineer>> {
    validate_text_update(&payload.name, "name", MAX_NAME_LEN)?;
    validate_optional_email(&payload.email, "email")?;
    validate_text_update(&payload.phone, "phone", MAX_SHORT_TEXT_LEN)?;
    validate_text_update(&payload.location, "location", MAX_NAME_LEN)?;
    validate_text_update(&payload.specialization, "specialization", MAX_NAME_LEN)?;
    validate_engineer_rating(payload.rating)?;

    let engineer = engineer::update(&state.store, id, payload)
        .or_not_found(ErrorCode::EngineerNotFound, id)?;
    state.bump_version(RESOURCE);
    Ok(Json(engineer))
}

/// DELETE /api/engineers/:id - 删除工程师
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i64>) -> AppResult<Json<bool>> {
    let result = engineer::delete(&state.store, id);
    if result {
        state.bump_version(RESOURCE);
    }
    Ok(Json(result))
}
