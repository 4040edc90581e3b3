//! 厨师池管理模块
//!
//! 控制同时制作订单的厨师数量，支持运行时扩容。
//! - 容量只增不减，每次扩容 +1
//! - 已在等待的请求会被扩容立即唤醒，不必等待其他订单完成
//! - 槽位归还后唤醒一个等待者
//!
//! 容量与占用数由同一把锁保护，等待者通过 `Notify` 唤醒，
//! 在任意时刻都满足 `in_use <= capacity`。

use parking_lot::Mutex;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::Notify;
use tracing::{debug, info};

use super::chef::Chef;

/// 池计数器
#[derive(Debug)]
struct PoolCounters {
    /// 当前容量（只增不减）
    capacity: usize,
    /// 已借出的槽位数
    in_use: usize,
    /// 正在等待槽位的请求数
    waiting: usize,
}

struct PoolShared {
    counters: Mutex<PoolCounters>,
    wakeup: Notify,
    chef: Arc<dyn Chef>,
}

impl PoolShared {
    /// 归还一个槽位并唤醒一个等待者
    fn release_one(&self) {
        {
            let mut counters = self.counters.lock();
            debug_assert!(counters.in_use > 0, "归还的槽位多于借出的槽位");
            counters.in_use = counters.in_use.saturating_sub(1);
            debug!(
                "归还厨师槽位: in_use={}, capacity={}",
                counters.in_use, counters.capacity
            );
        }
        self.wakeup.notify_one();
    }
}

/// 厨师池状态快照
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PoolStats {
    pub capacity: usize,
    pub in_use: usize,
    pub available: usize,
    pub waiting: usize,
}

/// 厨师池
///
/// 克隆得到的句柄共享同一个池
#[derive(Clone)]
pub struct ChefPool {
    shared: Arc<PoolShared>,
}

impl ChefPool {
    /// 创建新的厨师池，所有槽位立即可用
    pub fn new(chef: Arc<dyn Chef>, initial_capacity: usize) -> Self {
        info!("创建厨师池，初始厨师数: {}", initial_capacity);

        Self {
            shared: Arc::new(PoolShared {
                counters: Mutex::new(PoolCounters {
                    capacity: initial_capacity,
                    in_use: 0,
                    waiting: 0,
                }),
                wakeup: Notify::new(),
                chef,
            }),
        }
    }

    /// 获取一个厨师槽位
    ///
    /// 没有空闲槽位时挂起，直到有槽位归还或池被扩容。
    /// 取消（丢弃 future）是安全的：未返回的调用不会占用槽位。
    pub async fn acquire(&self) -> ChefSlot {
        loop {
            let notified = self.shared.wakeup.notified();
            tokio::pin!(notified);

            let _waiting = {
                let mut counters = self.shared.counters.lock();
                if let Some(slot) = self.take_slot(&mut counters) {
                    return slot;
                }
                // 持锁注册等待，避免错过释放锁之后的唤醒
                notified.as_mut().enable();
                counters.waiting += 1;
                WaitingGuard {
                    counters: &self.shared.counters,
                }
            };

            notified.await;
        }
    }

    /// 尝试获取槽位，不等待
    pub fn try_acquire(&self) -> Option<ChefSlot> {
        let mut counters = self.shared.counters.lock();
        self.take_slot(&mut counters)
    }

    fn take_slot(&self, counters: &mut PoolCounters) -> Option<ChefSlot> {
        if counters.in_use >= counters.capacity {
            return None;
        }
        counters.in_use += 1;
        debug!(
            "分配厨师槽位: in_use={}, capacity={}",
            counters.in_use, counters.capacity
        );
        Some(ChefSlot {
            shared: Arc::clone(&self.shared),
        })
    }

    /// 归还槽位
    ///
    /// 等价于直接丢弃 `slot`
    pub fn release(&self, slot: ChefSlot) {
        drop(slot);
    }

    /// 扩容一个厨师
    ///
    /// # Returns
    /// 扩容后的容量
    pub fn grow(&self) -> usize {
        let (old, new) = {
            let mut counters = self.shared.counters.lock();
            let old = counters.capacity;
            counters.capacity = old.saturating_add(1);
            (old, counters.capacity)
        };
        self.shared.wakeup.notify_one();

        info!("✅ 厨师池扩容: {} -> {}", old, new);
        new
    }

    /// 当前容量
    pub fn capacity(&self) -> usize {
        self.shared.counters.lock().capacity
    }

    /// 获取池状态快照
    pub fn stats(&self) -> PoolStats {
        let counters = self.shared.counters.lock();
        PoolStats {
            capacity: counters.capacity,
            in_use: counters.in_use,
            available: counters.capacity - counters.in_use,
            waiting: counters.waiting,
        }
    }
}

impl std::fmt::Debug for ChefPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChefPool").field("stats", &self.stats()).finish()
    }
}

/// 等待计数守卫（等待结束或被取消时递减）
struct WaitingGuard<'a> {
    counters: &'a Mutex<PoolCounters>,
}

impl Drop for WaitingGuard<'_> {
    fn drop(&mut self) {
        let mut counters = self.counters.lock();
        counters.waiting = counters.waiting.saturating_sub(1);
    }
}

/// 厨师槽位
///
/// 持有者可以调用共享的订单执行器；丢弃时自动归还到池中，
/// 每个槽位恰好归还一次。
pub struct ChefSlot {
    shared: Arc<PoolShared>,
}

impl ChefSlot {
    /// 使用该槽位制作订单
    pub async fn cook(&self, code: &str) {
        self.shared.chef.cook(code).await;
    }
}

impl Drop for ChefSlot {
    fn drop(&mut self) {
        self.shared.release_one();
    }
}

impl std::fmt::Debug for ChefSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChefSlot").finish_non_exhaustive()
    }
}
