// 应用状态

use crate::config::AppConfig;
use crate::kitchen::{Chef, ChefPool, Menu, RealChef};
use std::sync::Arc;

/// 应用全局状态
#[derive(Clone)]
pub struct AppState {
    /// 厨师池
    pub pool: ChefPool,
    /// 菜单（启动后只读）
    pub menu: Arc<Menu>,
    /// 订单请求体最大字节数
    pub max_order_bytes: usize,
}

impl AppState {
    /// 按配置创建应用状态（使用 RealChef）
    pub fn new(config: &AppConfig) -> Self {
        let menu = Arc::new(Menu::from_config(&config.menu));
        let chef = Arc::new(RealChef::with_time_unit(
            Arc::clone(&menu),
            config.kitchen.time_unit(),
        ));
        Self::with_chef(config, menu, chef)
    }

    /// 使用自定义订单执行器创建应用状态
    pub fn with_chef(config: &AppConfig, menu: Arc<Menu>, chef: Arc<dyn Chef>) -> Self {
        Self {
            pool: ChefPool::new(chef, config.kitchen.initial_chefs),
            menu,
            max_order_bytes: config.kitchen.max_order_bytes,
        }
    }
}
