//! Support Ticket API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use shared::models::{SupportTicket, SupportTicketCreate, SupportTicketUpdate, TicketStatus};
use shared::types::UnvalidatedForeignKey;

use crate::core::ServerState;
use crate::db::repository::support_ticket;
use crate::utils::validation::{
    MAX_MESSAGE_LEN, MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, validate_optional_text,
    validate_required_text, validate_text_update,
};
use crate::utils::{AppResult, ErrorCode, OrNotFound};

const RESOURCE: &str = "support_tickets";

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportTicketQuery {
    pub status: Option<TicketStatus>,
    pub customer_id: Option<UnvalidatedForeignKey>,
}

/// GET /api/support-tickets - 获取工单列表
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<SupportTicketQuery>,
) -> AppResult<Json<Vec<SupportTicket>>> {
    let tickets = match (query.customer_id, query.status) {
        (Some(customer_id), status) => {
            let mut tickets = support_ticket::find_by_customer(&state.store, customer_id);
            if let Some(status) = status {
                tickets.retain(|t| t.status == status);
            }
            tickets
        }
        (None, Some(status)) => support_ticket::find_by_status(&state.store, status),
        (None, None) => support_ticket::find_all(&state.store),
    };
    Ok(Json(tickets))
}

/// GET /api/support-tickets/:id - 获取单个工单
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<SupportTicket>> {
    let ticket = support_ticket::find_by_id(&state.store, id)
        .or_not_found(ErrorCode::SupportTicketNotFound, id)?;
    Ok(Json(ticket))
}

/// POST /api/support-tickets - 创建工单
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<SupportTicketCreate>,
) -> AppResult<Json<SupportTicket>> {
    validate_required_text(&payload.subject, "subject", MAX_NAME_LEN)?;
    validate_required_text(&payload.message, "message", MAX_MESSAGE_LEN)?;
    validate_optional_text(&payload.category, "category", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.response, "response", MAX_NOTE_LEN)?;

    let ticket = support_ticket::create(&state.store, payload);
    state.bump_version(RESOURCE);
    Ok(Json(ticket))
}

/// PUT /api/support-tickets/:id - 更新工单
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<SupportTicketUpdate>,
) -> AppResult<Json<SupportTicket>> {
    validate_text_update(&payload.subject, "subject", MAX_NAME_LEN)?;
    validate_text_update(&payload.message, "message", MAX_MESSAGE_LEN)?;
    validate_text_update(&payload.category, "category", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.response, "response", MAX_NOTE_LEN)?;

    let ticket = support_ticket::update(&state.store, id, payload)
        .or_not_found(ErrorCode::SupportTicketNotFound, id)?;
    state.bump_version(RESOURCE);
    Ok(Json(ticket))
}

/// DELETE /api/support-tickets/:id - 删除工单
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i64>) -> AppResult<Json<bool>> {
    let result = support_ticket::delete(&state.store, id);
    if result {
        state.bump_version(RESOURCE);
    }
    Ok(Json(result))
}
