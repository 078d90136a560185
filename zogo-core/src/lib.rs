// zogo-core: 校验库的基础设施
//
// 提供：
// - 无类型值模型（解码后的 JSON 等半结构化输入）
// - 核心错误类型
// - 基于 tracing-subscriber 的日志配置

pub mod error;
pub mod logging;
pub mod value;

pub use error::{CoreError, CoreResult};
pub use logging::{LogFormat, LogLevel, LoggingConfig};
pub use value::{Map, Value};

/// Prelude 模块，包含常用类型
pub mod prelude {
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::logging::{LogFormat, LogLevel, LoggingConfig};
    pub use crate::value::{Map, Value};
}
