/// 统一配置系统
///
/// 提供TOML/JSON配置文件、环境变量覆盖和参数校验
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub mod physics;
pub mod runtime;
pub mod seeding;

pub use physics::{GridConfig, PhysicsConfig};
pub use runtime::{RuntimeConfig, ThreadingConfig};
pub use seeding::SeedingConfig;

use crate::impl_default;
use crate::simulation::SurfaceConfig;

/// 配置错误
#[derive(Error, Debug)]
pub enum ConfigError {
    /// 文件读取错误
    #[error("Config file error: {0}")]
    FileError(#[from] std::io::Error),
    /// 解析错误
    #[error("Config parse error: {0}")]
    ParseError(String),
    /// 验证错误
    #[error("Config validation error: {0}")]
    ValidationError(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// 模拟主配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// 粒子网格
    #[serde(default)]
    pub grid: GridConfig,

    /// 物理参数
    #[serde(default)]
    pub physics: PhysicsConfig,

    /// 地面
    #[serde(default)]
    pub surface: SurfaceConfig,

    /// 初始分布
    #[serde(default)]
    pub seeding: SeedingConfig,

    /// 运行参数
    #[serde(default)]
    pub runtime: RuntimeConfig,

    /// 日志配置
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl_default!(SimulationConfig {
    grid: GridConfig::default(),
    physics: PhysicsConfig::default(),
    surface: SurfaceConfig::default(),
    seeding: SeedingConfig::default(),
    runtime: RuntimeConfig::default(),
    logging: LoggingConfig::default(),
});

impl SimulationConfig {
    /// 创建默认配置
    pub fn new() -> Self {
        Self::default()
    }

    /// 从TOML文件加载配置
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(ConfigError::FileError)?;
        Self::from_toml_str(&content)
    }

    /// 从TOML字符串解析配置
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// 从JSON文件加载配置
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(ConfigError::FileError)?;
        Self::from_json_str(&content)
    }

    /// 从JSON字符串解析配置
    pub fn from_json_str(content: &str) -> ConfigResult<Self> {
        serde_json::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// 保存为TOML文件
    pub fn save_toml<P: AsRef<Path>>(&self, path: P) -> ConfigResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        fs::write(path, content).map_err(ConfigError::FileError)
    }

    /// 保存为JSON文件
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> ConfigResult<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;
        fs::write(path, content).map_err(ConfigError::FileError)
    }

    /// 从环境变量覆盖配置
    ///
    /// 无法解析的值会被忽略并记录警告。
    pub fn apply_env_overrides(&mut self) {
        override_from_env("FLUID_GRID_SIDE", &mut self.grid.side);
        override_from_env("FLUID_DAMPING", &mut self.physics.damping);
        override_from_env("FLUID_GRAVITY", &mut self.physics.gravity);
        override_from_env("FLUID_TICKS", &mut self.runtime.ticks);
        override_from_env(
            "FLUID_WORKER_THREADS",
            &mut self.runtime.threading.worker_threads,
        );
    }

    /// 验证配置
    pub fn validate(&self) -> ConfigResult<()> {
        self.grid.validate()?;
        self.physics.validate()?;
        self.seeding.validate()?;
        self.runtime.validate()?;
        Ok(())
    }

    /// 自动查找并加载配置文件
    ///
    /// 按以下顺序查找：
    /// 1. `FLUID_CONFIG`环境变量指定的文件
    /// 2. ./fluid.toml
    /// 3. ./fluid.json
    /// 4. ~/.config/verlet_fluid/fluid.toml
    /// 5. 使用默认配置
    pub fn load_or_default() -> Self {
        for path in Self::candidate_paths() {
            let loaded = match path.extension().and_then(|e| e.to_str()) {
                Some("json") => Self::from_json_file(&path),
                _ => Self::from_toml_file(&path),
            };
            match loaded {
                Ok(config) => {
                    tracing::info!(target: "config", "Loaded config from {}", path.display());
                    return config;
                }
                Err(ConfigError::FileError(_)) => continue,
                Err(e) => {
                    tracing::warn!(target: "config", "Ignoring {}: {}", path.display(), e);
                }
            }
        }

        tracing::info!(target: "config", "Using default configuration");
        Self::default()
    }

    fn candidate_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();
        if let Some(explicit) = env::var_os("FLUID_CONFIG") {
            paths.push(PathBuf::from(explicit));
        }
        paths.push(PathBuf::from("fluid.toml"));
        paths.push(PathBuf::from("fluid.json"));
        if let Some(home) = env::var_os("HOME") {
            paths.push(
                PathBuf::from(home)
                    .join(".config")
                    .join("verlet_fluid")
                    .join("fluid.toml"),
            );
        }
        paths
    }
}

fn override_from_env<T: std::str::FromStr>(key: &str, slot: &mut T) {
    if let Ok(val) = env::var(key) {
        match val.parse() {
            Ok(parsed) => *slot = parsed,
            Err(_) => tracing::warn!(target: "config", "Ignoring unparsable {}={}", key, val),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// 日志级别
    pub level: LogLevel,

    /// 是否输出日志target
    pub with_target: bool,
}

impl_default!(LoggingConfig {
    level: LogLevel::Info,
    with_target: true,
});

/// 日志级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// 跟踪
    Trace,
    /// 调试
    Debug,
    /// 信息
    Info,
    /// 警告
    Warn,
    /// 错误
    Error,
}
