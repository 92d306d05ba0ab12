//! 初始粒子分布
//!
//! 粒子均匀分布在一个实心球内，随后整体平移到地面上方。

use crate::config::SeedingConfig;
use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::TAU;

/// 假定的初始运动：每一帧的竖直位移和所有槽位共有的抬升量
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InitialMotion {
    pub initial_speed: f32,
    pub upward_bias: f32,
}

impl Default for InitialMotion {
    fn default() -> Self {
        Self {
            initial_speed: -0.003,
            upward_bias: 0.2,
        }
    }
}

impl From<&SeedingConfig> for InitialMotion {
    fn from(config: &SeedingConfig) -> Self {
        Self {
            initial_speed: config.initial_speed,
            upward_bias: config.upward_bias,
        }
    }
}

/// 在球内采样`count`个种子位置
///
/// 方向在单位球面上均匀分布，半径取`sqrt(u) * point_radius`，
/// 因此粒子向球心略微聚集。相同的`rng_seed`总是产生相同的分布。
pub fn spherical_seeds(count: usize, config: &SeedingConfig) -> Vec<Vec3> {
    let mut rng = StdRng::seed_from_u64(config.rng_seed);

    (0..count)
        .map(|_| {
            let radius = rng.gen::<f32>().sqrt() * config.point_radius;
            random_unit_vector(&mut rng) * radius + config.center_offset
        })
        .collect()
}

fn random_unit_vector<R: Rng>(rng: &mut R) -> Vec3 {
    let y: f32 = rng.gen_range(-1.0..=1.0);
    let theta: f32 = rng.gen_range(0.0..TAU);
    let ring = (1.0 - y * y).max(0.0).sqrt();
    Vec3::new(ring * theta.cos(), y, ring * theta.sin())
}

/// 在`x/z`平面上按行主序排列的规则网格种子，主要用于测试和基准
pub fn grid_seeds(side: usize, spacing: f32, center: Vec3) -> Vec<Vec3> {
    let half = (side as f32 - 1.0) * 0.5;
    (0..side * side)
        .map(|i| {
            let row = (i / side) as f32;
            let col = (i % side) as f32;
            center + Vec3::new((col - half) * spacing, 0.0, (row - half) * spacing)
        })
        .collect()
}
