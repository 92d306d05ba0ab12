//! 单粒子更新核
//!
//! 位置历史代替显式速度场：速度由两帧之差推导，再叠加重力得到候选位置。
//! 候选位置落入地面以下且处于水平碰撞区域内时，沿地面法线做阻尼反射，
//! 最后做单向的穿透修正（只会把粒子向上推，从不向下拉）。
//!
//! 每个粒子的计算只依赖自身的两帧历史、tick和只读参数，粒子之间没有共享可变状态。

use super::surface::SurfaceFunction;
use glam::Vec3;

/// 每tick的只读步进参数
///
/// 显式传入每一次更新调用，不依赖任何进程级隐藏状态。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepParams {
    /// 每tick叠加的重力位移（通常只有负的y分量）
    pub gravity: Vec3,
    /// 反射阻尼，取值于(0, 1)
    pub damping: f32,
    /// 地面采样坐标系相对粒子坐标系的偏移
    pub ground_offset: Vec3,
    /// 水平碰撞区域半宽，`|x|`和`|z|`都必须小于它才会发生碰撞
    pub horizontal_bound: f32,
}

impl Default for StepParams {
    fn default() -> Self {
        Self {
            gravity: Vec3::new(0.0, -5e-5, 0.0),
            damping: 0.6,
            ground_offset: Vec3::new(0.0, 0.2, 0.2),
            horizontal_bound: 0.45,
        }
    }
}

/// 单个粒子一次更新的结果
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleStep {
    /// 写入`Next`槽位的位置
    pub position: Vec3,
    /// 含重力的入射速度
    pub velocity: Vec3,
    /// 碰撞分支中的阻尼反射速度；未碰撞时为`None`
    pub reflected: Option<Vec3>,
    /// 在地面采样点处的地面高度
    pub surface_height: f32,
}

impl ParticleStep {
    pub fn collided(&self) -> bool {
        self.reflected.is_some()
    }
}

/// 向量关于单位法线的镜像：`v - 2(v·n)n`
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// 归一化；零长度或非有限输入返回零向量
pub fn normalize_or_zero(v: Vec3) -> Vec3 {
    v.normalize_or_zero()
}

/// 隐式曲面`y = height(x, z)`朝上的单位法线
///
/// 梯度非有限时返回零向量。
pub fn surface_normal<S: SurfaceFunction + ?Sized>(surface: &S, at: Vec3, tick: u64) -> Vec3 {
    let dx = surface.d_height_dx(at.x, at.z, tick);
    let dz = surface.d_height_dz(at.x, at.z, tick);
    normalize_or_zero(Vec3::new(-dx, 1.0, -dz))
}

/// 粒子更新核
pub struct ParticleKernel;

impl ParticleKernel {
    /// 由上一帧和当前帧位置计算下一帧位置
    ///
    /// 法线退化为零向量时（梯度非有限），本tick跳过反射分支，
    /// 粒子按自由下落的候选位置前进。
    pub fn step<S: SurfaceFunction + ?Sized>(
        previous: Vec3,
        current: Vec3,
        tick: u64,
        params: &StepParams,
        surface: &S,
    ) -> ParticleStep {
        let velocity = current - previous + params.gravity;
        let mut position = current + velocity;

        let ground_point = position + params.ground_offset;
        let surface_height = surface.height(ground_point.x, ground_point.z, tick);

        let below = ground_point.y < surface_height;
        let inside = position.x.abs() < params.horizontal_bound
            && position.z.abs() < params.horizontal_bound;

        let mut reflected = None;
        if below && inside {
            let normal = surface_normal(surface, ground_point, tick);
            if normal != Vec3::ZERO {
                let bounce = params.damping * reflect(velocity, normal);
                position = current + bounce;
                position.y += (surface_height - params.ground_offset.y - position.y).max(0.0);
                reflected = Some(bounce);
            }
        }

        ParticleStep {
            position,
            velocity,
            reflected,
            surface_height,
        }
    }
}
