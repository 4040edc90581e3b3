// Pizza Shop
// 披萨店订单服务核心库

// 配置管理模块
pub mod config;

// 日志模块
pub mod logging;

// 厨房模块（厨师池、订单执行器、菜单）
pub mod kitchen;

// Web服务器模块
pub mod server;

// 导出常用类型
pub use config::AppConfig;
pub use kitchen::{Chef, ChefPool, ChefSlot, Menu, MenuItem, PoolStats, RealChef};
pub use server::{build_router, AppState};
