use pizza_shop::{build_router, logging, AppConfig, AppState};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 日志配置来自配置文件，加载结果在日志系统初始化后再记录
    let config_path = AppConfig::config_path();
    let loaded = AppConfig::load_from_file(&config_path).await;
    let config = loaded.as_ref().cloned().unwrap_or_default();

    // 🔥 初始化日志系统（必须保持 _log_guard 存活）
    let _log_guard = logging::init_logging(&config.log);

    info!("Pizza Shop v{} 启动中...", env!("CARGO_PKG_VERSION"));
    match &loaded {
        Ok(_) => info!("配置文件加载成功: {}", config_path),
        Err(e) => warn!("配置文件加载失败，使用默认配置: {:#}", e),
    }
    info!(
        "配置: 初始厨师数={}, 菜单项={}, 订单上限={} 字节",
        config.kitchen.initial_chefs,
        config.menu.len(),
        config.kitchen.max_order_bytes
    );

    // 创建应用状态
    let app_state = AppState::new(&config);
    info!("应用状态初始化完成");

    let app = build_router(app_state.clone(), config.server.request_timeout());

    let addr = config.server.addr();
    info!("服务器启动在: http://{}", addr);
    info!("健康检查: http://{}/health", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    // 🔥 使用 select! 监听关闭信号，支持优雅关闭
    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("服务器错误: {}", e);
            }
        }
        _ = tokio::signal::ctrl_c() => {
            info!("收到 Ctrl+C，开始关闭...");
        }
    }

    info!("厨师池最终状态: {:?}", app_state.pool.stats());
    info!("应用已安全退出");

    Ok(())
}
