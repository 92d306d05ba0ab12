use super::{ConfigError, ConfigResult};
use crate::impl_default;
use serde::{Deserialize, Serialize};

/// 运行配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuntimeConfig {
    /// 主循环运行的tick数
    pub ticks: u64,

    /// 每隔多少tick输出一次统计日志（0表示不输出）
    pub report_interval: u64,

    /// 多线程配置
    #[serde(default)]
    pub threading: ThreadingConfig,
}

impl_default!(RuntimeConfig {
    ticks: 600,
    report_interval: 60,
    threading: ThreadingConfig::default(),
});

impl RuntimeConfig {
    /// 验证配置
    pub fn validate(&self) -> ConfigResult<()> {
        if self.threading.worker_threads > 1024 {
            return Err(ConfigError::ValidationError(format!(
                "Too many worker threads: {}",
                self.threading.worker_threads
            )));
        }
        Ok(())
    }
}

/// 多线程配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreadingConfig {
    /// 工作线程数（0表示自动）
    pub worker_threads: usize,

    /// 是否并行更新粒子
    pub parallel: bool,
}

impl_default!(ThreadingConfig {
    worker_threads: 0, // 自动
    parallel: true,
});
