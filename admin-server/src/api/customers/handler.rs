//! Customer API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use shared::models::{Customer, CustomerCreate, CustomerUpdate};

use crate::core::ServerState;
use crate::db::repository::customer;
use crate::utils::validation::{
    MAX_ADDRESS_LEN, MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_email, validate_optional_email,
    validate_optional_text, validate_required_text, validate_text_update,
};
use crate::utils::{AppResult, ErrorCode, OrNotFound};

const RESOURCE: &str = "customers";

#[derive(Debug, Default, Deserialize)]
pub struct CustomerQuery {
    pub provider: Option<String>,
    pub location: Option<String>,
}

/// GET /api/customers - 获取客户列表 (可按运营商/区域过滤)
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<CustomerQuery>,
) -> AppResult<Json<Vec<Customer>>> {
    let customers = match (&query.provider, &query.location) {
        (Some(provider), location) => {
            let mut customers = customer::find_by_provider(&state.store, provider);
            if let Some(location) = location {
                customers.retain(|c| &c.location == location);
            }
            customers
        }
        (None, Some(location)) => customer::find_by_location(&state.store, location),
        (None, None) => customer::find_all(&state.store),
    };
    Ok(Json(customers))
}

/// GET /api/customers/:id - 获取单个客户
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Customer>> {
    let customer = customer::find_by_id(&state.store, id).or_not_found(ErrorCode::CustomerNotFound, id)?;
    Ok(Json(customer))
}

/// POST /api/customers - 创建客户
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<CustomerCreate>,
) -> AppResult<Json<Customer>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_email(&payload.email, "email")?;
    validate_required_text(&payload.phone, "phone", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&payload.address, "address", MAX_ADDRESS_LEN)?;
    validate_required_text(&payload.location, "location", MAX_NAME_LEN)?;
    validate_optional_text(&payload.service_provider, "serviceProvider", MAX_SHORT_TEXT_LEN)?;

    let customer = customer::create(&state.store, payload);
    state.bump_version(RESOURCE);
    Ok(Json(customer))
}

/// PUT /api/customers/:id - 更新客户
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<CustomerUpdate>,
) -> AppResult<Json<Customer>> {
    validate_text_update(&payload.name, "name", MAX_NAME_LEN)?;
    validate_optional_email(&payload.email, "email")?;
    validate_text_update(&payload.phone, "phone", MAX_SHORT_TEXT_LEN)?;
    validate_text_update(&payload.address, "address", MAX_ADDRESS_LEN)?;
    validate_text_update(&payload.location, "location", MAX_NAME_LEN)?;
    validate_optional_text(&payload.service_provider, "serviceProvider", MAX_SHORT_TEXT_LEN)?;

    let customer = customer::update(&state.store, id, payload)
        .or_not_found(ErrorCode::CustomerNotFound, id)?;
    state.bump_version(RESOURCE);
    Ok(Json(customer))
}

/// DELETE /api/customers/:id - 删除客户
///
/// 不存在的 id 返回 `false`
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i64>) -> AppResult<Json<bool>> {
    let result = customer::delete(&state.store, id);
    if result {
        state.bump_version(RESOURCE);
    }
    Ok(Json(result))
}
