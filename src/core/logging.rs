//! 日志初始化
//!
//! 基于`tracing-subscriber`的fmt输出。`RUST_LOG`环境变量优先，
//! 未设置时使用配置中的日志级别。

use crate::config::{LogLevel, LoggingConfig};
use tracing_subscriber::EnvFilter;

impl LogLevel {
    /// 转换为`EnvFilter`指令字符串
    pub fn as_directive(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// 初始化日志系统
///
/// 重复调用是安全的：全局订阅者已存在时静默返回。
pub fn init_logging(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.as_directive()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.with_target)
        .try_init();
}
