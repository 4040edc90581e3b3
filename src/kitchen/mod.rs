// 厨房模块：厨师池、订单执行器与菜单

pub mod chef;
pub mod menu;
pub mod pool;

pub use chef::{Chef, RealChef};
pub use menu::{Menu, MenuItem};
pub use pool::{ChefPool, ChefSlot, PoolStats};
