// 菜单 API 处理器

use axum::{extract::State, Json};

use crate::kitchen::Menu;
use crate::server::AppState;

/// GET /menus
/// 获取菜单
pub async fn list_menus(State(state): State<AppState>) -> Json<Menu> {
    Json(state.menu.as_ref().clone())
}
