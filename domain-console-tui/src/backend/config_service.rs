//! 配置服务

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use domain_console_core::{SortMode, DEFAULT_BASE_URL};

/// 配置文件名
const CONFIG_FILE: &str = "config.toml";

/// 应用目录名
pub const APP_DIR: &str = "domain-console";

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// 数据服务根地址
    pub base_url: String,
    /// 启动时的排序方式
    pub default_sort: SortMode,
    /// 通知显示时长（秒）
    pub notification_secs: u64,
    /// 请求超时（秒），不设置则不限制
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
    /// 日志级别（`RUST_LOG` 优先）
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            default_sort: SortMode::Newest,
            notification_secs: 3,
            request_timeout_secs: None,
            log_level: "info".to_string(),
        }
    }
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig>;

    /// 保存配置
    fn save(&self, config: &AppConfig) -> Result<()>;
}

/// 基于 TOML 文件的配置服务
pub struct FileConfigService {
    path: PathBuf,
}

impl FileConfigService {
    /// `<config_dir>/domain-console/config.toml`
    pub fn new() -> Result<Self> {
        let dir = dirs::config_dir().context("Could not determine the configuration directory")?;
        Ok(Self::with_path(dir.join(APP_DIR).join(CONFIG_FILE)))
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigService for FileConfigService {
    fn load(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            return Ok(AppConfig::default());
        }

        let text = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        let config = toml::from_str(&text)
            .with_context(|| format!("Invalid configuration in {}", self.path.display()))?;
        Ok(config)
    }

    fn save(&self, config: &AppConfig) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let text = toml::to_string_pretty(config)?;
        fs::write(&self.path, text)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        Ok(())
    }
}
