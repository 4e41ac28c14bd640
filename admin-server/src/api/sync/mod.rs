//! 资源版本同步接口
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/sync/versions | GET | 各资源当前版本号 |

use axum::{Json, Router, extract::State, routing::get};

use crate::core::{ResourceVersion, ServerState};

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/sync/versions", get(versions))
}

/// GET /api/sync/versions
pub async fn versions(State(state): State<ServerState>) -> Json<Vec<ResourceVersion>> {
    Json(state.resource_versions.snapshot())
}
