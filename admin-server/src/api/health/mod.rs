//! 健康检查路由
//!
//! # 路由列表
//!
//! | 路径 | 方法 | 说明 | 认证 |
//! |------|------|------|------|
//! | /health | GET | 健康检查 + 记录数 | 无 |
//!
//! # 响应示例
//!
//! ```json
//! {
//!   "status": "healthy",
//!   "version": "0.1.0",
//!   "environment": "development",
//!   "startedAt": "2025-01-01T08:00:00+00:00",
//!   "uptimeSeconds": 42,
//!   "counts": { "users": 3, "complaints": 3, ... }
//! }
//! ```

use axum::{Json, Router, extract::State, routing::get};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::core::ServerState;
use crate::db::TableCounts;

pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// 状态 (healthy)
    status: &'static str,
    /// 版本号
    version: &'static str,
    environment: String,
    /// 启动时间 (RFC 3339)
    started_at: String,
    /// 运行时间 (秒)
    uptime_seconds: u64,
    /// 各表记录数
    counts: TableCounts,
}

// 服务器启动时间 (懒加载静态变量)
static START_TIME: std::sync::OnceLock<DateTime<Utc>> = std::sync::OnceLock::new();

/// 记录启动时间，启动时调用一次
pub fn mark_start() {
    START_TIME.get_or_init(Utc::now);
}

fn start_time() -> DateTime<Utc> {
    *START_TIME.get_or_init(Utc::now)
}

fn get_uptime_seconds() -> u64 {
    u64::try_from((Utc::now() - start_time()).num_seconds()).unwrap_or(0)
}

/// 健康检查
pub async fn health(State(state): State<ServerState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        environment: state.config.environment.clone(),
        started_at: start_time().to_rfc3339(),
        uptime_seconds: get_uptime_seconds(),
        counts: state.store.counts(),
    })
}
