//! # Verlet Fluid
//!
//! A fully data-parallel particle simulation that approximates fluid by bouncing
//! independent particles off a deformable analytic ground.
//!
//! ## Features
//!
//! - **Triple-buffered state**: three position snapshots rotate roles every tick, so
//!   velocity is derived from history instead of being stored
//! - **Analytic collisions**: damped reflection about the implicit surface normal,
//!   followed by a one-sided penetration correction
//! - **Parallel dispatch**: per-particle updates on a rayon pool, bit-identical to the
//!   sequential path
//! - **Configuration**: TOML/JSON files plus environment overrides
//!
//! ## Architecture Design
//!
//! - **State**: [`simulation::StateRing`] owns the three slots
//! - **Kernel**: [`simulation::ParticleKernel`] is a pure function of two snapshots
//! - **Host**: [`core::Simulation`] wires config, ring, surface and dispatcher together
//!
//! ### Example
//!
//! ```rust
//! use verlet_fluid::config::SimulationConfig;
//! use verlet_fluid::core::Simulation;
//!
//! let mut config = SimulationConfig::default();
//! config.grid.side = 16;
//! config.runtime.threading.parallel = false;
//!
//! let mut simulation = Simulation::new(config).unwrap();
//! simulation.run(10).unwrap();
//! assert_eq!(simulation.view().len(), 256);
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Host loop, errors and logging
//! - [`config`]: Configuration system
//! - [`simulation`]: State ring, surface, kernel and dispatch

/// Host loop, error types and logging initialisation
pub mod core;
/// Configuration system
pub mod config;
/// Particle simulation core
pub mod simulation;
