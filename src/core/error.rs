//! 统一错误处理模块
//!
//! ## 错误类型分层
//!
//! - **配置错误** (`config::ConfigError`): 文件读取、解析和参数校验
//! - **模拟错误** (`SimError`): 主循环中不可恢复的失败（非有限坐标、线程池构建失败）
//!
//! 调用方的契约违例（粒子下标越界、种子数量与网格不符）不属于这里的错误类型，
//! 它们在检测点直接 panic。

use crate::config::ConfigError;
use thiserror::Error;

/// 模拟核心错误类型
#[derive(Error, Debug)]
pub enum SimError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// 某个tick产生了NaN或无穷大坐标，模拟无法继续
    #[error("Non-finite particle positions at tick {tick}: {count} particle(s)")]
    NonFinite { tick: u64, count: usize },

    #[error("Thread pool error: {0}")]
    ThreadPool(String),
}

impl From<rayon::ThreadPoolBuildError> for SimError {
    fn from(err: rayon::ThreadPoolBuildError) -> Self {
        SimError::ThreadPool(err.to_string())
    }
}

pub type SimResult<T> = Result<T, SimError>;
