// 菜单目录

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

use crate::config::MenuItemConfig;

/// 菜单项
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    /// 展示名称
    pub name: String,
    /// 标称制作时长（秒）
    pub process_time: u64,
}

/// 菜单（启动时构建，之后只读）
///
/// 序列化为以菜品代码为键的 JSON 对象，键按字典序排列
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Menu {
    items: BTreeMap<String, MenuItem>,
}

impl Menu {
    /// 从配置构建菜单
    ///
    /// 重复的菜品代码以后出现的为准
    pub fn from_config(entries: &[MenuItemConfig]) -> Self {
        let mut items = BTreeMap::new();
        for entry in entries {
            let item = MenuItem {
                name: entry.name.clone(),
                process_time: entry.process_time,
            };
            if items.insert(entry.code.clone(), item).is_some() {
                warn!("菜单代码重复，使用后出现的配置: {}", entry.code);
            }
        }
        Self { items }
    }

    /// 查找菜品
    pub fn get(&self, code: &str) -> Option<&MenuItem> {
        self.items.get(code)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.items.contains_key(code)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// 按代码顺序遍历
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MenuItem)> {
        self.items.iter().map(|(code, item)| (code.as_str(), item))
    }
}
