// 厨师管理 API 处理器

use axum::{extract::State, http::StatusCode};
use tracing::info;

use crate::server::AppState;

/// POST /chef
/// 增加一名厨师（厨师池容量 +1）
pub async fn add_chef(State(state): State<AppState>) -> (StatusCode, &'static str) {
    let capacity = state.pool.grow();
    info!("API: 新增厨师，当前厨师数: {}", capacity);
    (StatusCode::ACCEPTED, "New chef added")
}
