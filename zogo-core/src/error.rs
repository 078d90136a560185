use thiserror::Error;

/// 核心错误类型
///
/// 覆盖日志初始化、配置解析和 JSON 解码三类失败，校验失败本身不在此列。
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Failed to initialize logging: {0}")]
    LoggingInitFailed(String),

    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),

    #[error("Invalid log format: {0}")]
    InvalidLogFormat(String),

    #[error("Failed to decode JSON input: {0}")]
    Json(#[from] serde_json::Error),
}

pub type CoreResult<T> = Result<T, CoreError>;
