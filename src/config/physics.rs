use super::{ConfigError, ConfigResult};
use crate::impl_default;
use crate::simulation::StepParams;
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// 粒子网格配置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    /// 网格边长，粒子数为边长的平方
    pub side: usize,
}

impl_default!(GridConfig { side: 256 });

impl GridConfig {
    /// 粒子数量
    pub fn particle_count(&self) -> usize {
        self.side * self.side
    }

    /// 验证配置
    pub fn validate(&self) -> ConfigResult<()> {
        if self.side == 0 {
            return Err(ConfigError::ValidationError(
                "Grid side must be positive".to_string(),
            ));
        }
        if self.side.checked_mul(self.side).is_none() {
            return Err(ConfigError::ValidationError(format!(
                "Grid side {} overflows particle count",
                self.side
            )));
        }
        Ok(())
    }
}

/// 物理参数配置
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicsConfig {
    /// 每tick的重力位移大小，方向朝下
    pub gravity: f32,

    /// 反射阻尼
    pub damping: f32,

    /// 地面采样偏移
    pub ground_offset: Vec3,

    /// 水平碰撞区域半宽
    pub horizontal_bound: f32,
}

impl_default!(PhysicsConfig {
    gravity: 5e-5,
    damping: 0.6,
    ground_offset: Vec3::new(0.0, 0.2, 0.2),
    horizontal_bound: 0.45,
});

impl PhysicsConfig {
    /// 验证配置
    pub fn validate(&self) -> ConfigResult<()> {
        if !self.gravity.is_finite() || self.gravity < 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "Gravity magnitude must be finite and non-negative, got {}",
                self.gravity
            )));
        }
        if !(self.damping > 0.0 && self.damping < 1.0) {
            return Err(ConfigError::ValidationError(format!(
                "Damping must lie in (0, 1), got {}",
                self.damping
            )));
        }
        if !self.ground_offset.is_finite() {
            return Err(ConfigError::ValidationError(
                "Ground offset must be finite".to_string(),
            ));
        }
        if !self.horizontal_bound.is_finite() || self.horizontal_bound <= 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "Horizontal bound must be positive, got {}",
                self.horizontal_bound
            )));
        }
        Ok(())
    }

    /// 转换为更新核使用的步进参数
    pub fn step_params(&self) -> StepParams {
        StepParams {
            gravity: Vec3::new(0.0, -self.gravity, 0.0),
            damping: self.damping,
            ground_offset: self.ground_offset,
            horizontal_bound: self.horizontal_bound,
        }
    }
}
