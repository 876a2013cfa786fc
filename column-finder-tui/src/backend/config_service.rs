//! 配置服务
//!
//! 使用 JSON 文件存储应用配置

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::view::theme::Theme;

/// 获取配置目录路径
fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("column-finder")
}

/// 获取配置文件路径
fn config_file() -> PathBuf {
    config_dir().join("config.json")
}

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// 主题
    pub theme: Theme,
    /// HTTP 数据源地址（子节点 URL 相对它解析）
    pub server_url: Option<String>,
    /// 文件数据源路径（优先于 HTTP）
    pub data_file: Option<PathBuf>,
    /// 根层数据地址
    pub root_url: String,
    /// 是否启用横向滚动
    pub horizontal_scroll: bool,
    /// 等待子节点数据时是否显示加载标记
    pub loading: bool,
    /// 是否缓存响应
    pub cache: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            server_url: None,
            data_file: None,
            root_url: "/".to_string(),
            horizontal_scroll: true,
            loading: true,
            cache: true,
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

/// 本地配置服务
pub struct LocalConfigService;

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig> {
        let path = config_file();
        if !path.exists() {
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(&path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    fn save(&self, config: &AppConfig) -> Result<()> {
        fs::create_dir_all(config_dir())?;
        let content = serde_json::to_string_pretty(config)?;
        fs::write(config_file(), content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_enables_scroll_loading_and_cache() {
        let config = AppConfig::default();

        assert!(config.horizontal_scroll);
        assert!(config.loading);
        assert!(config.cache);
        assert_eq!(config.root_url, "/");
        assert!(config.server_url.is_none());
        assert!(config.data_file.is_none());
    }

    #[test]
    fn partial_config_files_fall_back_to_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{"horizontal_scroll": false}"#).unwrap();

        assert!(!config.horizontal_scroll);
        assert!(config.cache);
        assert_eq!(config.root_url, "/");
    }
}
