//! 解析地面函数
//!
//! 地面是隐式曲面`y = height(x, z, tick)`。碰撞求解和（外部的）地面渲染共用
//! 同一个纯函数：相同输入永远得到相同输出。

use serde::{Deserialize, Serialize};

/// 随时间缓慢变化的高度场及其解析偏导数
pub trait SurfaceFunction: Send + Sync {
    /// 地面高度
    fn height(&self, x: f32, z: f32, tick: u64) -> f32;

    /// ∂height/∂x
    fn d_height_dx(&self, x: f32, z: f32, tick: u64) -> f32;

    /// ∂height/∂z
    fn d_height_dz(&self, x: f32, z: f32, tick: u64) -> f32;
}

/// 带涟漪的碗形地面
///
/// `height = curvature * (x² + z²) + ripple_amplitude * sin(ripple_frequency * x + ripple_speed * tick)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RippleBowl {
    pub curvature: f32,
    pub ripple_amplitude: f32,
    pub ripple_frequency: f32,
    pub ripple_speed: f32,
}

impl Default for RippleBowl {
    fn default() -> Self {
        Self {
            curvature: 1.0,
            ripple_amplitude: 0.01,
            ripple_frequency: 20.0,
            ripple_speed: 0.2,
        }
    }
}

impl RippleBowl {
    fn phase(&self, x: f32, tick: u64) -> f32 {
        self.ripple_frequency * x + tick as f32 * self.ripple_speed
    }
}

impl SurfaceFunction for RippleBowl {
    fn height(&self, x: f32, z: f32, tick: u64) -> f32 {
        self.curvature * (x * x + z * z) + self.ripple_amplitude * self.phase(x, tick).sin()
    }

    fn d_height_dx(&self, x: f32, _z: f32, tick: u64) -> f32 {
        2.0 * self.curvature * x
            + self.ripple_amplitude * self.ripple_frequency * self.phase(x, tick).cos()
    }

    fn d_height_dz(&self, _x: f32, z: f32, _tick: u64) -> f32 {
        2.0 * self.curvature * z
    }
}

/// 水平地面
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FlatGround {
    pub height: f32,
}

impl SurfaceFunction for FlatGround {
    fn height(&self, _x: f32, _z: f32, _tick: u64) -> f32 {
        self.height
    }

    fn d_height_dx(&self, _x: f32, _z: f32, _tick: u64) -> f32 {
        0.0
    }

    fn d_height_dz(&self, _x: f32, _z: f32, _tick: u64) -> f32 {
        0.0
    }
}

/// 可序列化的地面选择
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SurfaceConfig {
    Bowl(RippleBowl),
    Flat(FlatGround),
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        SurfaceConfig::Bowl(RippleBowl::default())
    }
}

impl SurfaceFunction for SurfaceConfig {
    fn height(&self, x: f32, z: f32, tick: u64) -> f32 {
        match self {
            SurfaceConfig::Bowl(s) => s.height(x, z, tick),
            SurfaceConfig::Flat(s) => s.height(x, z, tick),
        }
    }

    fn d_height_dx(&self, x: f32, z: f32, tick: u64) -> f32 {
        match self {
            SurfaceConfig::Bowl(s) => s.d_height_dx(x, z, tick),
            SurfaceConfig::Flat(s) => s.d_height_dx(x, z, tick),
        }
    }

    fn d_height_dz(&self, x: f32, z: f32, tick: u64) -> f32 {
        match self {
            SurfaceConfig::Bowl(s) => s.d_height_dz(x, z, tick),
            SurfaceConfig::Flat(s) => s.d_height_dz(x, z, tick),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn central_difference<F: Fn(f32) -> f32>(f: F, at: f32) -> f32 {
        let h = 1e-3;
        (f(at + h) - f(at - h)) / (2.0 * h)
    }

    #[test]
    fn test_bowl_height_at_origin() {
        let bowl = RippleBowl::default();
        assert_eq!(bowl.height(0.0, 0.0, 0), 0.0);
        assert!((bowl.height(0.3, 0.4, 0) - (0.25 + 0.01 * 6.0f32.sin())).abs() < 1e-6);
    }

    #[test]
    fn test_bowl_gradient_matches_finite_difference() {
        let bowl = RippleBowl::default();
        let (x, z, tick) = (0.12, -0.3, 17);

        let dx = central_difference(|x| bowl.height(x, z, tick), x);
        let dz = central_difference(|z| bowl.height(x, z, tick), z);
        assert!((bowl.d_height_dx(x, z, tick) - dx).abs() < 1e-2);
        assert!((bowl.d_height_dz(x, z, tick) - dz).abs() < 1e-2);
    }

    #[test]
    fn test_bowl_is_pure() {
        let bowl = RippleBowl::default();
        assert_eq!(bowl.height(0.1, 0.2, 42), bowl.height(0.1, 0.2, 42));
        assert_ne!(bowl.height(0.1, 0.2, 0), bowl.height(0.1, 0.2, 5));
    }

    #[test]
    fn test_flat_ground() {
        let flat = FlatGround { height: -0.5 };
        assert_eq!(flat.height(3.0, -2.0, 99), -0.5);
        assert_eq!(flat.d_height_dx(3.0, -2.0, 99), 0.0);
        assert_eq!(flat.d_height_dz(3.0, -2.0, 99), 0.0);
    }

    #[test]
    fn test_surface_config_delegates() {
        let config = SurfaceConfig::Flat(FlatGround { height: 1.5 });
        assert_eq!(config.height(0.0, 0.0, 0), 1.5);

        let bowl = SurfaceConfig::default();
        assert_eq!(bowl.d_height_dz(0.0, 0.25, 3), 0.5);
    }

    #[test]
    fn test_surface_config_toml_tagged() {
        let parsed: SurfaceConfig = toml::from_str("kind = \"flat\"\nheight = 0.25\n").unwrap();
        assert_eq!(parsed, SurfaceConfig::Flat(FlatGround { height: 0.25 }));
    }
}
