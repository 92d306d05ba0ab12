//! 核心模块
//!
//! 包含模拟的宿主功能：
//! - `engine` - 模拟主体和运行循环
//! - `error` - 错误类型定义
//! - `logging` - 日志初始化
//! - `macros` - 配置默认值宏

pub mod engine;
pub mod error;
pub mod logging;
#[macro_use]
pub mod macros;

// 重新导出错误类型
pub use error::{SimError, SimResult};

// 重新导出主要类型
pub use engine::{RunSummary, Simulation};
pub use logging::init_logging;
