// 路由构建

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, on, post, MethodFilter},
    Router,
};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use super::handlers;
use super::AppState;

/// 构建完整应用路由
///
/// * `/chef`   - POST 扩容厨师池
/// * `/menus`  - GET 获取菜单
/// * `/orders` - POST 下单
/// * `/health` - GET 健康检查
pub fn build_router(state: AppState, request_timeout: Duration) -> Router {
    let max_order_bytes = state.max_order_bytes;

    // 配置中间件层
    let middleware = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http()) // HTTP 请求日志
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TimeoutLayer::new(request_timeout));

    Router::new()
        .route(
            "/chef",
            post(handlers::add_chef).fallback(handlers::method_not_allowed),
        )
        .route(
            "/menus",
            // 只接受 GET（get() 会同时响应 HEAD）
            on(MethodFilter::GET, handlers::list_menus).fallback(handlers::method_not_allowed),
        )
        .route(
            "/orders",
            post(handlers::place_order)
                .fallback(handlers::method_not_allowed)
                .layer(DefaultBodyLimit::max(max_order_bytes)),
        )
        .route("/health", get(handlers::health_check))
        .with_state(state)
        .layer(middleware)
}
