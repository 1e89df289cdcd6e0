//! Smoothed-particle hydrodynamics (SPH) fluid simulation.
//!
//! The simulation treats a 2D fluid as a fixed set of interacting particles:
//! a kernel-weighted density field is estimated over the set, a linear
//! equation of state converts density errors to pressures, and symmetrized
//! pairwise pressure forces plus gravity drive a semi-implicit Euler
//! integrator inside a rectangular domain.
//!
//! # Architecture
//!
//! - [`params`]: simulation parameters and startup validation
//! - [`particle`]: spawn region and grid-fill seeding
//! - [`solver`]: kernels, density estimation and pressure forces
//! - [`simulation`]: particle state, tick orchestration and commands
//! - [`boundary`]: domain boundary collision response
//! - [`render`]: particle rendering (2D circle meshes)
//! - [`plugin`]: Bevy plugin for easy integration
//!
//! # Example
//!
//! ```rust,no_run
//! use bevy::prelude::*;
//! use aqua::fluid::prelude::*;
//!
//! fn main() {
//!     App::new()
//!         .add_plugins(DefaultPlugins)
//!         .add_plugins(FluidPlugin::default())
//!         .run();
//! }
//! ```

pub mod boundary;
pub mod params;
pub mod particle;
pub mod plugin;
pub mod render;
pub mod simulation;
pub mod solver;

/// Prelude for convenient imports.
pub mod prelude {
    pub use super::boundary::*;
    pub use super::params::*;
    pub use super::particle::*;
    pub use super::plugin::*;
    pub use super::render::*;
    pub use super::simulation::*;
    pub use super::solver::*;
}
