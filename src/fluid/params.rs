//! Fluid simulation parameters.
//!
//! These parameters control the behavior of the fluid simulation. They can be
//! modified at runtime through the Bevy resource system; the stiffness-tuning
//! commands do exactly that.

use std::error::Error;
use std::fmt;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Parameters controlling the fluid simulation behavior.
///
/// The defaults are tuned for a small, watery demo in a 1200×900 domain.
/// The simulation domain is an axis-aligned rectangle centered on the origin,
/// spanning `[-bounds / 2, bounds / 2]` on each axis.
#[derive(Resource, Clone, Debug, Reflect, Serialize, Deserialize)]
#[reflect(Resource)]
pub struct FluidParams {
    /// Domain extents (width, height) in world units.
    pub bounds: Vec2,

    /// Particle radius for rendering and boundary collision.
    /// Decoupled from `smoothing_radius`.
    pub particle_radius: f32,

    /// Smoothing kernel influence radius.
    /// Larger values = smoother density field but a wider force reach.
    pub smoothing_radius: f32,

    /// Mass of every particle. Uniform across the set for a whole run.
    pub particle_mass: f32,

    /// Gravity acceleration vector. The default pulls toward the domain
    /// floor (negative y).
    pub gravity: Vec2,

    /// Simulation time step per tick.
    pub dt: f32,

    /// Velocity retained after a boundary bounce, in (0, 1].
    pub collision_damping: f32,

    /// Rest density: the local density at which pressure is zero.
    pub target_density: f32,

    /// Pressure multiplier (stiffness). Higher values push density errors
    /// back toward the rest density harder.
    pub pressure_multiplier: f32,

    /// Look-ahead interval for the predictor pass: densities are sampled at
    /// `position + velocity * interval` instead of the current position,
    /// which reduces lag in the pressure response. `None` disables the pass.
    pub prediction_interval: Option<f32>,

    /// Factor applied by the stiffness-tuning commands
    /// (× to increase, ÷ to decrease).
    pub stiffness_step: f32,

    /// Seed for the simulation's random number generator (spawn jitter and
    /// the fallback direction for coincident particles).
    pub rng_seed: u64,
}

impl Default for FluidParams {
    fn default() -> Self {
        Self {
            bounds: Vec2::new(1200.0, 900.0),
            particle_radius: 8.0,
            smoothing_radius: 160.0,
            particle_mass: 1.0,
            gravity: Vec2::new(0.0, -0.005),
            dt: 2.0,
            collision_damping: 0.95,
            target_density: 0.1,
            pressure_multiplier: 0.03,
            prediction_interval: Some(1.0 / 120.0),
            stiffness_step: 10.0,
            rng_seed: 42,
        }
    }
}

impl FluidParams {
    /// Parameters for watery behavior.
    pub fn water() -> Self {
        Self::default()
    }

    /// Half-extents of the domain rectangle.
    pub fn half_bounds(&self) -> Vec2 {
        self.bounds * 0.5
    }

    /// Checks the startup preconditions.
    ///
    /// A failure here is fatal misconfiguration: the run must not start.
    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.bounds.x <= 0.0 || self.bounds.y <= 0.0 {
            return Err(ParamsError::NonPositiveBounds);
        }
        if self.particle_radius <= 0.0 || self.smoothing_radius <= 0.0 {
            return Err(ParamsError::NonPositiveRadius);
        }
        if self.particle_mass <= 0.0 {
            return Err(ParamsError::NonPositiveMass);
        }
        if self.dt <= 0.0 {
            return Err(ParamsError::NonPositiveTimeStep);
        }
        if self.collision_damping <= 0.0 || self.collision_damping > 1.0 {
            return Err(ParamsError::DampingOutOfRange);
        }
        Ok(())
    }
}

/// Reasons a simulation refuses to start.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParamsError {
    /// The requested particle count was zero.
    NoParticles,
    /// A domain extent was not strictly positive.
    NonPositiveBounds,
    /// The particle or smoothing radius was not strictly positive.
    NonPositiveRadius,
    /// The particle mass was not strictly positive.
    NonPositiveMass,
    /// The time step was not strictly positive.
    NonPositiveTimeStep,
    /// The collision damping factor was outside (0, 1].
    DampingOutOfRange,
}

impl fmt::Display for ParamsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Self::NoParticles => "particle count must be at least 1",
            Self::NonPositiveBounds => "domain extents must be strictly positive",
            Self::NonPositiveRadius => "particle and smoothing radii must be strictly positive",
            Self::NonPositiveMass => "particle mass must be strictly positive",
            Self::NonPositiveTimeStep => "time step must be strictly positive",
            Self::DampingOutOfRange => "collision damping must lie in (0, 1]",
        };
        f.write_str(message)
    }
}

impl Error for ParamsError {}
