// 健康检查

use axum::{extract::State, Json};
use serde::Serialize;

use crate::kitchen::PoolStats;
use crate::server::AppState;

/// 健康检查响应
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    /// 厨师池状态
    pub chefs: PoolStats,
}

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: "pizza-shop".to_string(),
        chefs: state.pool.stats(),
    })
}
