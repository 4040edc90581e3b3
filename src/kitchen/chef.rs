// 厨师（订单执行器）

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

use super::menu::Menu;

/// 订单执行器
///
/// 池中所有槽位共享同一个执行器实例，实现必须可重入，
/// 不得依赖池内部状态。
#[async_trait]
pub trait Chef: Send + Sync {
    /// 按菜品代码制作一份订单
    async fn cook(&self, code: &str);
}

/// 按菜单制作披萨的厨师
///
/// 制作时长 = 菜单中的 process_time × time_unit
pub struct RealChef {
    menu: Arc<Menu>,
    time_unit: Duration,
}

impl RealChef {
    /// 指定时间单位（生产环境为 1 秒，测试或演示时可缩短制作时长）
    pub fn with_time_unit(menu: Arc<Menu>, time_unit: Duration) -> Self {
        Self { menu, time_unit }
    }
}

#[async_trait]
impl Chef for RealChef {
    async fn cook(&self, code: &str) {
        match self.menu.get(code) {
            Some(pizza) => {
                info!("开始制作: {}，耗时 {} 秒", pizza.name, pizza.process_time);
                let units = u32::try_from(pizza.process_time).unwrap_or(u32::MAX);
                tokio::time::sleep(self.time_unit.saturating_mul(units)).await;
            }
            None => {
                warn!("未知菜品代码，忽略: {}", code);
            }
        }
    }
}
