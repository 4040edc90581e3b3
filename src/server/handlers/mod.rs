// API处理器模块

pub mod chef;
pub mod health;
pub mod menu;
pub mod order;

pub use chef::add_chef;
pub use health::{health_check, HealthResponse};
pub use menu::list_menus;
pub use order::{decode_order, place_order, OrderRequest};

use crate::server::error::ApiError;

/// 路由存在但请求方法不被支持
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
