//! Tick调度
//!
//! 每个tick对所有粒子各调用一次更新核。粒子之间相互独立，
//! 可以顺序执行，也可以在rayon线程池上并行执行；两种方式结果逐位一致。
//!
//! 唯一需要的同步是tick粒度的屏障：`tick`返回时`Next`槽位已全部写完，
//! 之后才推进tick计数，使该槽位成为下一个tick的`Current`。

use super::kernel::{ParticleKernel, StepParams};
use super::ring::StateRing;
use super::stats::TickStats;
use super::surface::SurfaceFunction;
use crate::config::ThreadingConfig;
use crate::core::SimResult;
use rayon::prelude::*;
use rayon::ThreadPool;

/// 执行方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionMode {
    /// 在调用线程上顺序执行
    Sequential,
    /// 在专用线程池上并行执行
    Parallel,
}

/// Tick调度器
pub struct TickDispatcher {
    mode: ExecutionMode,
    pool: Option<ThreadPool>,
}

impl TickDispatcher {
    /// 顺序调度器
    pub fn sequential() -> Self {
        Self {
            mode: ExecutionMode::Sequential,
            pool: None,
        }
    }

    /// 并行调度器
    ///
    /// `worker_threads`为0时使用逻辑CPU数量。
    pub fn parallel(worker_threads: usize) -> SimResult<Self> {
        let threads = if worker_threads == 0 {
            num_cpus::get()
        } else {
            worker_threads
        };

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("fluid-worker-{i}"))
            .build()?;

        tracing::info!(target: "dispatch", "Parallel dispatcher with {} worker thread(s)", threads);

        Ok(Self {
            mode: ExecutionMode::Parallel,
            pool: Some(pool),
        })
    }

    /// 根据线程配置创建
    pub fn from_config(config: &ThreadingConfig) -> SimResult<Self> {
        if config.parallel {
            Self::parallel(config.worker_threads)
        } else {
            Ok(Self::sequential())
        }
    }

    pub fn mode(&self) -> ExecutionMode {
        self.mode
    }

    /// 工作线程数
    pub fn worker_threads(&self) -> usize {
        self.pool
            .as_ref()
            .map(ThreadPool::current_num_threads)
            .unwrap_or(1)
    }

    /// 执行一个tick并推进状态环
    pub fn tick<S: SurfaceFunction + ?Sized>(
        &self,
        ring: &mut StateRing,
        params: &StepParams,
        surface: &S,
    ) -> TickStats {
        let stats = match &self.pool {
            Some(pool) => pool.install(|| update_parallel(ring, params, surface)),
            None => update_sequential(ring, params, surface),
        };
        ring.advance();

        tracing::trace!(
            target: "dispatch",
            tick = stats.tick,
            collisions = stats.collisions,
            "tick complete"
        );
        stats
    }
}

impl Default for TickDispatcher {
    fn default() -> Self {
        Self::sequential()
    }
}

/// 在rayon全局线程池上执行一个tick并推进状态环
pub fn tick<S: SurfaceFunction + ?Sized>(
    ring: &mut StateRing,
    params: &StepParams,
    surface: &S,
) -> TickStats {
    let stats = update_parallel(ring, params, surface);
    ring.advance();
    stats
}

fn update_parallel<S: SurfaceFunction + ?Sized>(
    ring: &mut StateRing,
    params: &StepParams,
    surface: &S,
) -> TickStats {
    let tick = ring.tick();
    let (previous, current, next) = ring.split_roles();

    next.par_iter_mut()
        .zip(previous.par_iter())
        .zip(current.par_iter())
        .map(|((out, &prev), &curr)| {
            let step = ParticleKernel::step(prev, curr, tick, params, surface);
            *out = step.position;
            TickStats::from_step(tick, &step)
        })
        .reduce(|| TickStats::empty(tick), TickStats::merge)
}

fn update_sequential<S: SurfaceFunction + ?Sized>(
    ring: &mut StateRing,
    params: &StepParams,
    surface: &S,
) -> TickStats {
    let tick = ring.tick();
    let (previous, current, next) = ring.split_roles();

    next.iter_mut()
        .zip(previous.iter())
        .zip(current.iter())
        .map(|((out, &prev), &curr)| {
            let step = ParticleKernel::step(prev, curr, tick, params, surface);
            *out = step.position;
            TickStats::from_step(tick, &step)
        })
        .fold(TickStats::empty(tick), TickStats::merge)
}
