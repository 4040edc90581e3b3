// 配置管理模块

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use tokio::fs;

/// 默认配置文件路径
pub const DEFAULT_CONFIG_PATH: &str = "config/app.toml";

/// 覆盖配置文件路径的环境变量
pub const CONFIG_PATH_ENV: &str = "PIZZA_SHOP_CONFIG";

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,
    /// 厨房配置
    #[serde(default)]
    pub kitchen: KitchenConfig,
    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
    /// 菜单
    #[serde(default = "default_menu")]
    pub menu: Vec<MenuItemConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            kitchen: KitchenConfig::default(),
            log: LogConfig::default(),
            menu: default_menu(),
        }
    }
}

/// 服务器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,
    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,
    /// 单个请求的最长处理时间（秒）
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_request_timeout_secs() -> u64 {
    20
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl ServerConfig {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// 厨房配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KitchenConfig {
    /// 启动时的厨师数量
    #[serde(default = "default_initial_chefs")]
    pub initial_chefs: usize,
    /// 订单请求体最大字节数（默认 1MB）
    #[serde(default = "default_max_order_bytes")]
    pub max_order_bytes: usize,
    /// 制作时长的时间单位（毫秒，默认 1 秒）
    #[serde(default = "default_time_unit_ms")]
    pub time_unit_ms: u64,
}

fn default_initial_chefs() -> usize {
    1
}

fn default_max_order_bytes() -> usize {
    1024 * 1024 // 1MB
}

fn default_time_unit_ms() -> u64 {
    1000
}

impl Default for KitchenConfig {
    fn default() -> Self {
        Self {
            initial_chefs: default_initial_chefs(),
            max_order_bytes: default_max_order_bytes(),
            time_unit_ms: default_time_unit_ms(),
        }
    }
}

impl KitchenConfig {
    pub fn time_unit(&self) -> Duration {
        Duration::from_millis(self.time_unit_ms)
    }
}

/// 菜单项配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItemConfig {
    /// 菜品代码（下单时使用）
    pub code: String,
    /// 展示名称
    pub name: String,
    /// 制作时长（秒）
    pub process_time: u64,
}

/// 默认菜单
pub fn default_menu() -> Vec<MenuItemConfig> {
    vec![
        MenuItemConfig {
            code: "pizza-bbq".to_string(),
            name: "Pizza BBQ".to_string(),
            process_time: 5,
        },
        MenuItemConfig {
            code: "pizza-cheese".to_string(),
            name: "Pizza Cheese".to_string(),
            process_time: 3,
        },
    ]
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// 是否启用日志文件持久化
    #[serde(default = "default_log_enabled")]
    pub enabled: bool,
    /// 日志文件保存目录
    #[serde(default = "default_log_dir")]
    pub log_dir: PathBuf,
    /// 日志保留天数（默认 7 天）
    #[serde(default = "default_log_retention_days")]
    pub retention_days: u32,
    /// 日志级别（默认 info）
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_enabled() -> bool {
    false
}

fn default_log_dir() -> PathBuf {
    PathBuf::from("logs")
}

fn default_log_retention_days() -> u32 {
    7
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            enabled: default_log_enabled(),
            log_dir: default_log_dir(),
            retention_days: default_log_retention_days(),
            level: default_log_level(),
        }
    }
}

impl AppConfig {
    /// 配置文件路径（环境变量优先）
    pub fn config_path() -> String {
        std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string())
    }

    /// 从文件加载配置
    pub async fn load_from_file(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .context("Failed to read config file")?;

        let config: AppConfig = toml::from_str(&content).context("Failed to parse config file")?;

        config.validate().context("配置校验失败")?;

        Ok(config)
    }

    /// 校验配置
    pub fn validate(&self) -> Result<()> {
        if self.kitchen.max_order_bytes == 0 {
            anyhow::bail!("kitchen.max_order_bytes 必须大于 0");
        }
        if self.kitchen.time_unit_ms == 0 {
            anyhow::bail!("kitchen.time_unit_ms 必须大于 0");
        }
        if let Some(item) = self.menu.iter().find(|item| item.code.trim().is_empty()) {
            anyhow::bail!("菜单项代码不能为空: name={}", item.name);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.addr(), "0.0.0.0:8080");
        assert_eq!(config.server.request_timeout(), Duration::from_secs(20));
        assert_eq!(config.kitchen.initial_chefs, 1);
        assert_eq!(config.kitchen.max_order_bytes, 1_048_576);
        assert_eq!(config.kitchen.time_unit(), Duration::from_secs(1));
        assert!(!config.log.enabled);
        assert_eq!(config.log.level, "info");
        assert_eq!(config.menu, default_menu());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_partial_config_uses_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [server]
            port = 9090

            [kitchen]
            initial_chefs = 3
            "#,
        )
        .unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.kitchen.initial_chefs, 3);
        assert_eq!(config.kitchen.max_order_bytes, 1_048_576);
        assert_eq!(config.menu, default_menu());
    }

    #[test]
    fn test_parse_custom_menu() {
        let config: AppConfig = toml::from_str(
            r#"
            [[menu]]
            code = "pizza-hawaii"
            name = "Pizza Hawaii"
            process_time = 4
            "#,
        )
        .unwrap();

        assert_eq!(config.menu.len(), 1);
        assert_eq!(config.menu[0].code, "pizza-hawaii");
        assert_eq!(config.menu[0].process_time, 4);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = AppConfig::default();
        config.kitchen.max_order_bytes = 0;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.kitchen.time_unit_ms = 0;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.menu.push(MenuItemConfig {
            code: "  ".to_string(),
            name: "Nameless".to_string(),
            process_time: 1,
        });
        assert!(config.validate().is_err());
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
            [server]
            host = "127.0.0.1"
            port = 3000

            [log]
            level = "debug"
            "#
        )
        .unwrap();

        let path = file.path().to_str().unwrap().to_string();
        let config = AppConfig::load_from_file(&path).await.unwrap();
        assert_eq!(config.server.addr(), "127.0.0.1:3000");
        assert_eq!(config.log.level, "debug");
        assert_eq!(config.menu.len(), 2);
    }

    #[tokio::test]
    async fn test_load_from_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        assert!(AppConfig::load_from_file(path.to_str().unwrap()).await.is_err());
    }

    #[tokio::test]
    async fn test_load_from_invalid_file_fails() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[kitchen]\nmax_order_bytes = 0").unwrap();

        let path = file.path().to_str().unwrap().to_string();
        let err = AppConfig::load_from_file(&path).await.unwrap_err();
        assert!(format!("{:#}", err).contains("max_order_bytes"));
    }
}
