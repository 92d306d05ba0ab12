//! 面向渲染器的只读视图
//!
//! 渲染器只需要当前帧位置和上一帧位置，用二者的竖直差作为着色用的速度标量。
//! 这里不做任何颜色映射。

use super::ring::{Role, StateRing};
use glam::Vec3;

/// 某个tick的只读快照
#[derive(Debug, Clone, Copy)]
pub struct ParticleView<'a> {
    tick: u64,
    side: usize,
    previous: &'a [Vec3],
    current: &'a [Vec3],
}

impl<'a> ParticleView<'a> {
    /// 状态环当前tick的视图
    pub fn new(ring: &'a StateRing) -> Self {
        Self::at(ring, ring.tick())
    }

    /// 任意tick的视图
    pub fn at(ring: &'a StateRing, tick: u64) -> Self {
        Self {
            tick,
            side: ring.side(),
            previous: ring.read(tick, Role::Previous),
            current: ring.read(tick, Role::Current),
        }
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn side(&self) -> usize {
        self.side
    }

    pub fn len(&self) -> usize {
        self.current.len()
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    /// 当前帧位置
    pub fn positions(&self) -> &'a [Vec3] {
        self.current
    }

    /// 上一帧位置
    pub fn previous_positions(&self) -> &'a [Vec3] {
        self.previous
    }

    /// 当前帧位置的原始字节，按`[x, y, z]` f32紧密排列
    pub fn position_bytes(&self) -> &'a [u8] {
        bytemuck::cast_slice(self.current)
    }

    /// 单个粒子的竖直速度`previous.y - current.y`（下落为正）
    ///
    /// # Panics
    ///
    /// 下标越界时panic。
    pub fn vertical_speed(&self, index: usize) -> f32 {
        assert!(
            index < self.len(),
            "particle index {index} out of range for {} particles",
            self.len()
        );
        self.previous[index].y - self.current[index].y
    }

    /// 所有粒子的竖直速度
    pub fn vertical_speeds(&self) -> Vec<f32> {
        self.previous
            .iter()
            .zip(self.current)
            .map(|(p, c)| p.y - c.y)
            .collect()
    }

    /// 粒子的网格纹理坐标`(col / side, row / side)`
    ///
    /// # Panics
    ///
    /// 下标越界时panic。
    pub fn grid_coordinate(&self, index: usize) -> [f32; 2] {
        assert!(
            index < self.len(),
            "particle index {index} out of range for {} particles",
            self.len()
        );
        let side = self.side as f32;
        [
            (index % self.side) as f32 / side,
            (index / self.side) as f32 / side,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::seeding::{grid_seeds, InitialMotion};

    fn ring() -> StateRing {
        let motion = InitialMotion {
            initial_speed: -0.01,
            upward_bias: 0.0,
        };
        StateRing::new(2, &grid_seeds(2, 0.1, Vec3::Y), motion)
    }

    #[test]
    fn test_vertical_speed_positive_when_falling() {
        let ring = ring();
        let view = ParticleView::new(&ring);
        assert_eq!(view.len(), 4);
        for speed in view.vertical_speeds() {
            assert!((speed - 0.01).abs() < 1e-6);
        }
        assert!((view.vertical_speed(2) - 0.01).abs() < 1e-6);
    }

    #[test]
    fn test_view_is_idempotent() {
        let ring = ring();
        let first = ParticleView::new(&ring).positions().to_vec();
        let second = ParticleView::new(&ring).positions().to_vec();
        assert_eq!(first, second);
    }

    #[test]
    fn test_position_bytes_layout() {
        let ring = ring();
        let view = ParticleView::new(&ring);
        let bytes = view.position_bytes();
        assert_eq!(bytes.len(), 4 * 12);
        let y = f32::from_ne_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]);
        assert_eq!(y, view.positions()[0].y);
    }

    #[test]
    fn test_grid_coordinate() {
        let ring = ring();
        let view = ParticleView::new(&ring);
        assert_eq!(view.grid_coordinate(3), [0.5, 0.5]);
        assert_eq!(view.grid_coordinate(1), [0.5, 0.0]);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_grid_coordinate_rejects_out_of_range() {
        let ring = ring();
        ParticleView::new(&ring).grid_coordinate(10);
    }
}
