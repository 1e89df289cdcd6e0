//! Aqua - 2D smoothed-particle hydrodynamics for Bevy
//!
//! This library simulates a small 2D fluid as a set of interacting particles:
//! gravity plus pressure forces derived from a kernel-estimated density
//! field, constrained inside a rectangular domain.
//!
//! # Features
//!
//! - **SPH solver**: brute-force all-pairs density estimation and
//!   symmetrized pressure forces
//! - **Deterministic**: seeded RNG for spawn jitter and degenerate-case
//!   fallbacks, so runs reproduce exactly
//! - **Interactive**: pause, reset and stiffness-tuning commands
//! - **Easy integration**: a single Bevy plugin plus an engine-agnostic core
//!   that tests drive without an `App`
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use bevy::prelude::*;
//! use aqua::prelude::*;
//!
//! fn main() {
//!     App::new()
//!         .add_plugins(DefaultPlugins)
//!         .add_plugins(FluidPlugin::default())
//!         .run();
//! }
//! ```
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//!
//! - [`fluid`]: core fluid simulation module
//!   - [`fluid::params`]: simulation parameters
//!   - [`fluid::particle`]: spawn layout
//!   - [`fluid::solver`]: kernels, density and pressure forces
//!   - [`fluid::simulation`]: tick orchestration and commands
//!   - [`fluid::boundary`]: boundary collision response
//!   - [`fluid::render`]: particle rendering
//!   - [`fluid::plugin`]: Bevy plugin

pub mod fluid;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::fluid::prelude::*;
}
