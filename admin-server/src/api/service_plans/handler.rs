//! Service Plan API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use shared::models::{ServicePlan, ServicePlanCreate, ServicePlanUpdate};

use crate::core::ServerState;
use crate::db::repository::service_plan;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, validate_optional_text, validate_plan_terms,
    validate_required_text, validate_text_update,
};
use crate::utils::{AppResult, ErrorCode, OrNotFound};

const RESOURCE: &str = "service_plans";

#[derive(Debug, Default, Deserialize)]
pub struct ServicePlanQuery {
    pub provider: Option<String>,
}

/// GET /api/service-plans - 获取套餐列表 (可按运营商过滤)
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ServicePlanQuery>,
) -> AppResult<Json<Vec<ServicePlan>>> {
    let plans = match &query.provider {
        Some(provider) => service_plan::find_by_provider(&state.store, provider),
        None => service_plan::find_all(&state.store),
    };
    Ok(Json(plans))
}

/// GET /api/service-plans/:id - 获取单个套餐
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ServicePlan>> {
    let plan = service_plan::find_by_id(&state.store, id)
        .or_not_found(ErrorCode::ServicePlanNotFound, id)?;
    Ok(Json(plan))
}

/// POST /api/service-plans - 创建套餐
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ServicePlanCreate>,
) -> AppResult<Json<ServicePlan>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_required_text(&payload.provider, "provider", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&payload.speed, "speed", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.description, "description", MAX_NOTE_LEN)?;
    validate_plan_terms(Some(payload.price), Some(payload.validity))?;

    let plan = service_plan::create(&state.store, payload);
    state.bump_version(RESOURCE);
    Ok(Json(plan))
}

/// PUT /api/service-plans/:id - 更新套餐
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<ServicePlanUpdate>,
) -> AppResult<Json<ServicePlan>> {
    validate_text_update(&payload.name, "name", MAX_NAME_LEN)?;
    validate_text_update(&payload.provider, "provider", MAX_SHORT_TEXT_LEN)?;
    validate_text_update(&payload.speed, "speed", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.description, "description", MAX_NOTE_LEN)?;
    validate_plan_terms(payload.price, payload.validity)?;

    let plan = service_plan::update(&state.store, id, payload)
        .or_not_found(ErrorCode::ServicePlanNotFound, id)?;
    state.bump_version(RESOURCE);
    Ok(Json(plan))
}

/// DELETE /api/service-plans/:id - 删除套餐
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i64>) -> AppResult<Json<bool>> {
    let result = service_plan::delete(&state.store, id);
    if result {
        state.bump_version(RESOURCE);
    }
    Ok(Json(result))
}
