use thiserror::Error;

/// 问答请求错误
///
/// 在 `QueryController::submit` 内部被捕获并记录，不会继续向上传播
#[derive(Debug, Error)]
pub enum AskError {
    /// 网络层失败（连接被拒绝、DNS 解析失败、连接中断等）
    #[error("请求问答服务失败 ({endpoint}): {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    /// 服务返回非 2xx 状态码
    #[error("问答服务返回错误状态 ({endpoint}): {status}")]
    Status {
        endpoint: String,
        status: reqwest::StatusCode,
    },
    /// 响应体不是合法 JSON
    #[error("响应体解析失败: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
    },
    /// 响应中缺少字符串类型的 `answer` 字段
    #[error("响应中缺少 answer 字段")]
    MissingAnswer,
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 读取配置文件失败
    #[error("读取配置文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// TOML 解析失败
    #[error("TOML解析失败 ({path}): {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
    /// 终端读写错误
    #[error("终端读写失败: {0}")]
    Io(#[from] std::io::Error),
    /// 示例问题编号超出范围
    #[error("示例问题编号 {index} 超出范围 [1, {max}]")]
    SampleOutOfRange { index: usize, max: usize },
    /// 日志初始化失败
    #[error("日志初始化失败: {0}")]
    Logger(String),
}

// ========== 便捷构造函数 ==========

impl AskError {
    /// 创建网络层错误
    pub fn transport(endpoint: impl Into<String>, source: reqwest::Error) -> Self {
        AskError::Transport {
            endpoint: endpoint.into(),
            source,
        }
    }

    /// 创建状态码错误
    pub fn status(endpoint: impl Into<String>, status: reqwest::StatusCode) -> Self {
        AskError::Status {
            endpoint: endpoint.into(),
            status,
        }
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
