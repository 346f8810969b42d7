use serde::Deserialize;
use std::path::Path;

use crate::error::ConfigError;

/// 程序配置
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 问答服务地址
    pub api_base_url: String,
    /// 问答接口路径
    pub ask_path: String,
    /// 请求失败时是否在页面上提示
    pub show_errors: bool,
    /// 侧边栏是否折叠
    pub sidebar_collapsed: bool,
    /// 日志过滤规则（EnvFilter 语法）
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "http://127.0.0.1:8000".to_string(),
            ask_path: "/ask".to_string(),
            show_errors: false,
            sidebar_collapsed: false,
            log_filter: "info".to_string(),
        }
    }
}

impl Config {
    /// 完整的问答接口 URL
    pub fn ask_url(&self) -> String {
        let base = self.api_base_url.trim_end_matches('/');
        if self.ask_path.starts_with('/') {
            format!("{}{}", base, self.ask_path)
        } else {
            format!("{}/{}", base, self.ask_path)
        }
    }

    /// 仅从环境变量加载（缺省值兜底）
    pub fn from_env() -> Self {
        Self::default().with_env(|name| std::env::var(name).ok())
    }

    /// 加载配置：默认值 → `CODEPREP_CONFIG` 指定的 TOML 文件 → 环境变量
    pub fn load() -> Result<Self, ConfigError> {
        match std::env::var("CODEPREP_CONFIG") {
            Ok(path) => Ok(Self::from_toml_file(Path::new(&path))?
                .with_env(|name| std::env::var(name).ok())),
            Err(_) => Ok(Self::from_env()),
        }
    }

    /// 从 TOML 文件加载，文件中未出现的字段取默认值
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
            path: path.display().to_string(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::TomlParseFailed {
            path: path.display().to_string(),
            source: e,
        })
    }

    /// 用环境变量覆盖当前配置
    ///
    /// 布尔值解析失败时保留原值
    pub fn with_env<F>(self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            api_base_url: lookup("CODEPREP_API_BASE_URL").unwrap_or(self.api_base_url),
            ask_path: lookup("CODEPREP_ASK_PATH").unwrap_or(self.ask_path),
            show_errors: lookup("CODEPREP_SHOW_ERRORS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(self.show_errors),
            sidebar_collapsed: lookup("CODEPREP_SIDEBAR_COLLAPSED")
                .and_then(|v| v.parse().ok())
                .unwrap_or(self.sidebar_collapsed),
            log_filter: lookup("CODEPREP_LOG").unwrap_or(self.log_filter),
        }
    }
}
