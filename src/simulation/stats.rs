//! 每tick统计
//!
//! 统计量在并行更新中逐粒子产生，再用满足结合律的`merge`归约，
//! 因此与线程数和任务划分无关。

use super::kernel::ParticleStep;

/// 一个tick的汇总
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickStats {
    /// 执行更新时的tick
    pub tick: u64,
    /// 处理的粒子数
    pub particles: usize,
    /// 进入碰撞分支的粒子数
    pub collisions: usize,
    /// 写出非有限坐标的粒子数
    pub non_finite: usize,
    /// 新位置的最小y
    pub min_y: f32,
    /// 新位置的最大y
    pub max_y: f32,
}

impl TickStats {
    /// 归约的单位元
    pub fn empty(tick: u64) -> Self {
        Self {
            tick,
            particles: 0,
            collisions: 0,
            non_finite: 0,
            min_y: f32::INFINITY,
            max_y: f32::NEG_INFINITY,
        }
    }

    /// 单个粒子的统计
    pub fn from_step(tick: u64, step: &ParticleStep) -> Self {
        let finite = step.position.is_finite();
        let (min_y, max_y) = if finite {
            (step.position.y, step.position.y)
        } else {
            (f32::INFINITY, f32::NEG_INFINITY)
        };

        Self {
            tick,
            particles: 1,
            collisions: step.collided() as usize,
            non_finite: (!finite) as usize,
            min_y,
            max_y,
        }
    }

    pub fn merge(self, other: Self) -> Self {
        Self {
            tick: self.tick,
            particles: self.particles + other.particles,
            collisions: self.collisions + other.collisions,
            non_finite: self.non_finite + other.non_finite,
            min_y: self.min_y.min(other.min_y),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// 是否所有粒子都保持有限
    pub fn is_finite(&self) -> bool {
        self.non_finite == 0
    }
}
