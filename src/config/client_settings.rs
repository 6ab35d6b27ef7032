// ==========================================
// 生产管理控制台 - 客户端设置
// ==========================================
// 职责: 服务地址、请求超时、界面语言的加载
// 来源优先级: 环境变量 > 配置文件 > 内置默认值
// 存储: JSON 文件（用户配置目录）
// ==========================================

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

// 环境变量名
const ENV_SERVER: &str = "PRODUCTION_CONSOLE_SERVER";
const ENV_TIMEOUT_SECS: &str = "PRODUCTION_CONSOLE_TIMEOUT_SECS";
const ENV_LOCALE: &str = "PRODUCTION_CONSOLE_LOCALE";

fn default_server_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_locale() -> String {
    "zh-CN".to_string()
}

// ==========================================
// ClientSettings - 客户端设置
// ==========================================

/// 客户端设置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientSettings {
    /// 后端服务地址, 如 `http://127.0.0.1:8000`
    #[serde(default = "default_server_url")]
    pub server_url: String,

    /// 单次请求超时（秒）
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// 界面语言（"zh-CN" 或 "en"）
    #[serde(default = "default_locale")]
    pub locale: String,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
            timeout_secs: default_timeout_secs(),
            locale: default_locale(),
        }
    }
}

impl ClientSettings {
    /// 默认配置文件路径: `{用户配置目录}/production-console/config.json`
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("production-console").join("config.json"))
    }

    /// 加载设置
    ///
    /// 默认路径存在则读取文件, 否则使用内置默认值;
    /// 最后应用环境变量覆盖。
    pub fn load() -> Result<Self> {
        let mut settings = match Self::default_config_path() {
            Some(path) if path.exists() => Self::read_file(&path)?,
            _ => Self::default(),
        };
        settings.apply_env()?;
        Ok(settings)
    }

    /// 从指定文件加载设置（同样应用环境变量覆盖）
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut settings = Self::read_file(path)?;
        settings.apply_env()?;
        Ok(settings)
    }

    fn read_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("读取配置文件失败: {}", path.display()))?;
        let settings: Self = serde_json::from_str(&raw)
            .with_context(|| format!("配置文件格式错误: {}", path.display()))?;
        debug!(path = %path.display(), "已加载客户端配置");
        Ok(settings)
    }

    /// 应用环境变量覆盖
    fn apply_env(&mut self) -> Result<()> {
        if let Ok(server) = std::env::var(ENV_SERVER) {
            if !server.trim().is_empty() {
                self.server_url = server;
            }
        }
        if let Ok(timeout) = std::env::var(ENV_TIMEOUT_SECS) {
            self.timeout_secs = timeout
                .parse()
                .with_context(|| format!("{} 必须是正整数: {}", ENV_TIMEOUT_SECS, timeout))?;
        }
        if let Ok(locale) = std::env::var(ENV_LOCALE) {
            if !locale.trim().is_empty() {
                self.locale = locale;
            }
        }
        Ok(())
    }
}
