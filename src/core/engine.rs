//! 模拟主循环
//!
//! `Simulation`持有状态环、步进参数、地面和调度器。所有每帧需要的参数在构造时
//! 固定下来，之后以不可变引用传入每一次更新。

use crate::config::SimulationConfig;
use crate::core::error::{SimError, SimResult};
use crate::core::logging::init_logging;
use crate::simulation::{
    spherical_seeds, InitialMotion, ParticleView, StateRing, StepParams, SurfaceConfig,
    TickDispatcher, TickStats,
};
use glam::Vec3;
use std::time::Instant;

/// 一次运行的汇总
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    /// 本次运行执行的tick数
    pub ticks: u64,
    /// 累计碰撞次数
    pub total_collisions: u64,
    /// 最后一个tick的统计
    pub last: Option<TickStats>,
}

/// 模拟主体
pub struct Simulation {
    config: SimulationConfig,
    ring: StateRing,
    params: StepParams,
    surface: SurfaceConfig,
    dispatcher: TickDispatcher,
}

impl Simulation {
    /// 根据配置创建模拟
    ///
    /// 验证配置、采样初始位置、构建状态环和调度器。
    ///
    /// # 错误
    ///
    /// 配置无效或线程池构建失败时返回错误。
    pub fn new(config: SimulationConfig) -> SimResult<Self> {
        config.validate()?;

        let seeds = spherical_seeds(config.grid.particle_count(), &config.seeding);
        Self::build(config, &seeds)
    }

    /// 使用给定的种子位置创建模拟
    ///
    /// # Panics
    ///
    /// 种子数量与`grid.side²`不一致，或种子含非有限坐标时panic。
    pub fn with_seeds(config: SimulationConfig, seeds: &[Vec3]) -> SimResult<Self> {
        config.validate()?;
        Self::build(config, seeds)
    }

    /// 配置已验证
    fn build(config: SimulationConfig, seeds: &[Vec3]) -> SimResult<Self> {
        let ring = StateRing::new(config.grid.side, seeds, InitialMotion::from(&config.seeding));
        let dispatcher = TickDispatcher::from_config(&config.runtime.threading)?;
        let params = config.physics.step_params();
        let surface = config.surface;

        tracing::info!(
            target: "simulation",
            "Simulation ready: {} particles ({}x{}), {:?} dispatch",
            ring.particle_count(),
            config.grid.side,
            config.grid.side,
            dispatcher.mode()
        );

        Ok(Self {
            config,
            ring,
            params,
            surface,
            dispatcher,
        })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn params(&self) -> &StepParams {
        &self.params
    }

    pub fn surface(&self) -> &SurfaceConfig {
        &self.surface
    }

    pub fn ring(&self) -> &StateRing {
        &self.ring
    }

    /// 当前tick
    pub fn tick(&self) -> u64 {
        self.ring.tick()
    }

    /// 渲染器读取接口
    pub fn view(&self) -> ParticleView<'_> {
        ParticleView::new(&self.ring)
    }

    /// 执行一个tick
    ///
    /// # 错误
    ///
    /// 任意粒子写出非有限坐标时返回`SimError::NonFinite`，模拟不应继续。
    pub fn step(&mut self) -> SimResult<TickStats> {
        let stats = self
            .dispatcher
            .tick(&mut self.ring, &self.params, &self.surface);

        if !stats.is_finite() {
            tracing::error!(
                target: "simulation",
                "Tick {} produced {} non-finite position(s)",
                stats.tick,
                stats.non_finite
            );
            return Err(SimError::NonFinite {
                tick: stats.tick,
                count: stats.non_finite,
            });
        }
        Ok(stats)
    }

    /// 连续执行多个tick
    pub fn run(&mut self, ticks: u64) -> SimResult<RunSummary> {
        let interval = self.config.runtime.report_interval;
        let mut summary = RunSummary {
            ticks: 0,
            total_collisions: 0,
            last: None,
        };

        for _ in 0..ticks {
            let stats = self.step()?;
            summary.ticks += 1;
            summary.total_collisions += stats.collisions as u64;
            summary.last = Some(stats);

            if interval > 0 && (stats.tick + 1) % interval == 0 {
                tracing::debug!(
                    target: "simulation",
                    "tick {}: {} collisions, y in [{:.4}, {:.4}]",
                    stats.tick,
                    stats.collisions,
                    stats.min_y,
                    stats.max_y
                );
            }
        }
        Ok(summary)
    }

    /// 按配置完整运行一次：加载配置、初始化日志、执行配置的tick数
    pub fn run_from_env() -> SimResult<RunSummary> {
        let mut config = SimulationConfig::load_or_default();
        config.apply_env_overrides();
        init_logging(&config.logging);

        let ticks = config.runtime.ticks;
        let mut simulation = Simulation::new(config)?;

        let start = Instant::now();
        let summary = simulation.run(ticks)?;
        let elapsed = start.elapsed();

        tracing::info!(
            target: "simulation",
            "Ran {} ticks in {:.2?} ({:.1} ticks/s), {} collisions total",
            summary.ticks,
            elapsed,
            summary.ticks as f64 / elapsed.as_secs_f64().max(f64::EPSILON),
            summary.total_collisions
        );
        Ok(summary)
    }
}
