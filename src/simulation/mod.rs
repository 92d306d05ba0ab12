//! 粒子模拟核心
//!
//! ## 数据流
//!
//! ```text
//! ┌─────────────┐  previous + current  ┌──────────────────┐
//! │  StateRing  │─────────────────────►│  ParticleKernel  │◄── SurfaceFunction
//! │  (3 slots)  │◄─────────────────────│  (per particle)  │
//! └─────────────┘        next          └──────────────────┘
//!        │
//!        │ advance()：角色轮换
//!        ▼
//!  ParticleView（外部渲染器读取 current + previous）
//! ```
//!
//! 粒子之间没有相互作用：“流体”效果来自大量独立粒子与同一个地面的碰撞。
//!
//! ## 使用示例
//!
//! ```rust
//! use verlet_fluid::simulation::{
//!     grid_seeds, InitialMotion, RippleBowl, StateRing, StepParams, TickDispatcher,
//! };
//! use glam::Vec3;
//!
//! let seeds = grid_seeds(8, 0.05, Vec3::new(0.0, 0.5, -0.2));
//! let mut ring = StateRing::new(8, &seeds, InitialMotion::default());
//! let dispatcher = TickDispatcher::sequential();
//!
//! let stats = dispatcher.tick(&mut ring, &StepParams::default(), &RippleBowl::default());
//! assert_eq!(stats.particles, 64);
//! assert_eq!(ring.tick(), 1);
//! ```

pub mod dispatch;
pub mod kernel;
pub mod ring;
pub mod seeding;
pub mod stats;
pub mod surface;
pub mod view;

#[cfg(test)]
mod tests;

pub use dispatch::{tick, ExecutionMode, TickDispatcher};
pub use kernel::{normalize_or_zero, reflect, surface_normal, ParticleKernel, ParticleStep, StepParams};
pub use ring::{Role, StateRing, StateSlot, SLOT_COUNT};
pub use seeding::{grid_seeds, spherical_seeds, InitialMotion};
pub use stats::TickStats;
pub use surface::{FlatGround, RippleBowl, SurfaceConfig, SurfaceFunction};
pub use view::ParticleView;
