use super::{ConfigError, ConfigResult};
use crate::impl_default;
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// 初始粒子分布配置
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeedingConfig {
    /// 初始球体半径
    pub point_radius: f32,

    /// 球心位置
    pub center_offset: Vec3,

    /// 每帧初始竖直位移（负值表示下落）
    pub initial_speed: f32,

    /// 所有槽位共有的竖直抬升
    pub upward_bias: f32,

    /// 随机数种子
    pub rng_seed: u64,
}

impl_default!(SeedingConfig {
    point_radius: 0.3,
    center_offset: Vec3::new(0.0, 0.1, 0.2),
    initial_speed: -0.003,
    upward_bias: 0.2,
    rng_seed: 0x5eed,
});

impl SeedingConfig {
    /// 验证配置
    pub fn validate(&self) -> ConfigResult<()> {
        if !self.point_radius.is_finite() || self.point_radius < 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "Seed radius must be finite and non-negative, got {}",
                self.point_radius
            )));
        }
        if !self.center_offset.is_finite()
            || !self.initial_speed.is_finite()
            || !self.upward_bias.is_finite()
        {
            return Err(ConfigError::ValidationError(
                "Seed offsets must be finite".to_string(),
            ));
        }
        Ok(())
    }
}
