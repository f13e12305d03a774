//! Application configuration module / 应用配置模块
//!
//! Manages application configuration loaded from config.json
//! Creates default config file on first run / 首次运行时创建默认配置文件

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration / 应用配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Server configuration / 服务器配置
    pub server: ServerConfig,
    /// Catalog database configuration / 数据库配置
    pub database: DatabaseConfig,
    /// Language resource configuration / 语言资源配置
    pub nlp: NlpConfig,
    /// Query log configuration / 查询日志配置
    pub query_log: QueryLogConfig,
    /// Search defaults / 搜索默认值
    pub search: SearchConfig,
}

/// Server configuration / 服务器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server host address / 服务器监听地址
    pub host: String,
    /// Server port / 服务器端口
    pub port: u16,
}

/// Database configuration / 数据库配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Data directory path / 数据目录路径
    pub data_dir: String,
    /// Catalog database file (relative to data_dir) / 商品数据库文件
    pub db_file: String,
}

/// Language resource configuration / 语言资源配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NlpConfig {
    /// Directory with stopwords.txt and lemma_exceptions.txt; empty uses the bundled set
    /// 资源目录，为空时使用内置资源
    pub resource_dir: String,
}

/// Query log configuration / 查询日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryLogConfig {
    pub enabled: bool,
    /// Log file path (relative to the working directory) / 日志文件路径
    pub file: String,
}

/// Search defaults / 搜索默认值
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Page size when the request does not give one / 默认每页条数
    pub default_items_per_page: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            data_dir: "data".to_string(),
            db_file: "catalog.db".to_string(),
        }
    }
}

impl Default for QueryLogConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            file: "query_logs.log".to_string(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_items_per_page: 12,
        }
    }
}

impl AppConfig {
    /// Get the full database URL / 获取完整的数据库URL
    pub fn get_database_url(&self) -> String {
        let db_path = Path::new(&self.database.data_dir).join(&self.database.db_file);
        format!("sqlite:{}?mode=rwc", db_path.to_string_lossy())
    }

    /// Get the full data directory path / 获取完整的数据目录路径
    pub fn get_data_dir(&self) -> PathBuf {
        PathBuf::from(&self.database.data_dir)
    }

    /// Language resource directory, `None` for the bundled set / 语言资源目录
    pub fn get_resource_dir(&self) -> Option<&str> {
        let dir = self.nlp.resource_dir.trim();
        if dir.is_empty() {
            None
        } else {
            Some(dir)
        }
    }

    /// Query log file, `None` when disabled / 查询日志文件
    pub fn get_query_log_path(&self) -> Option<PathBuf> {
        if self.query_log.enabled && !self.query_log.file.trim().is_empty() {
            Some(PathBuf::from(self.query_log.file.trim()))
        } else {
            None
        }
    }

    /// Get the server bind address / 获取服务器绑定地址
    pub fn get_bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

/// Get the config file path / 获取配置文件路径
pub fn get_config_path() -> PathBuf {
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join("config.json")
}

/// Load configuration from the default path / 加载配置文件
pub fn load_config() -> Result<AppConfig, String> {
    load_config_from(&get_config_path())
}

/// Load configuration from file, or create default if not exists / 加载配置文件，不存在则创建默认配置
pub fn load_config_from(config_path: &Path) -> Result<AppConfig, String> {
    if config_path.exists() {
        // Load existing config / 加载现有配置
        let content = std::fs::read_to_string(config_path)
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        let config: AppConfig = serde_json::from_str(&content)
            .map_err(|e| format!("Failed to parse config file: {}", e))?;

        tracing::info!("Loaded configuration from {:?}", config_path);
        Ok(config)
    } else {
        // Create default config / 创建默认配置
        let config = AppConfig::default();
        save_config_to(&config, config_path)?;
        tracing::info!("Created default configuration at {:?}", config_path);
        Ok(config)
    }
}

/// Save configuration to file / 保存配置到文件
pub fn save_config_to(config: &AppConfig, config_path: &Path) -> Result<(), String> {
    let content = serde_json::to_string_pretty(config)
        .map_err(|e| format!("Failed to serialize config: {}", e))?;

    std::fs::write(config_path, content)
        .map_err(|e| format!("Failed to write config file: {}", e))?;

    Ok(())
}
