//! Fluid simulation core: particle state, tick orchestration and commands.
//!
//! The simulation owns the particle buffers (structure of arrays) and runs a
//! fixed phase order every tick:
//!
//! 1. gravity to all velocities;
//! 2. predicted positions for all particles (optional look-ahead);
//! 3. density for all particles from that single position snapshot;
//! 4. pressure force and velocity update for all particles;
//! 5. position integration and boundary resolution per particle.
//!
//! Densities and forces for the whole set complete before any position
//! mutates, so pair forces stay symmetric regardless of particle order.

use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::boundary;
use super::params::{FluidParams, ParamsError};
use super::particle::{spawn_layout, SpawnRegion};
use super::solver;

/// Control commands dispatched from input handling.
///
/// Each command has its own handler; none falls through into another.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FluidCommand {
    /// Freeze or unfreeze all particle motion, starting at the next tick.
    TogglePause,
    /// Restore the startup layout with zero velocities. Neither the particle
    /// count nor the pause state changes.
    Reset,
    /// Multiply the pressure multiplier by the configured stiffness step.
    IncreaseStiffness,
    /// Divide the pressure multiplier by the configured stiffness step.
    DecreaseStiffness,
}

/// Particle state and the Running/Paused tick state machine.
///
/// Exclusively owned by whichever system drives [`Self::step`]; rendering
/// reads [`Self::positions`] between ticks.
#[derive(Resource)]
pub struct FluidSimulation {
    positions: Vec<Vec2>,
    velocities: Vec<Vec2>,
    /// Density sample points for the current tick.
    predicted_positions: Vec<Vec2>,
    densities: Vec<f32>,
    /// Startup layout, retained so a reset restores it exactly.
    spawn_positions: Vec<Vec2>,
    paused: bool,
    rng: StdRng,
}

impl FluidSimulation {
    /// Seeds `particle_count` particles inside `spawn_region` with zero
    /// velocities.
    ///
    /// Rejects misconfiguration before the run starts; see
    /// [`FluidParams::validate`].
    pub fn new(
        particle_count: usize,
        spawn_region: SpawnRegion,
        params: &FluidParams,
    ) -> Result<Self, ParamsError> {
        params.validate()?;
        if particle_count == 0 {
            return Err(ParamsError::NoParticles);
        }

        let mut rng = StdRng::seed_from_u64(params.rng_seed);
        let spawn_positions = spawn_layout(particle_count, spawn_region, &mut rng);

        info!("seeded {particle_count} fluid particles");

        Ok(Self {
            positions: spawn_positions.clone(),
            velocities: vec![Vec2::ZERO; particle_count],
            predicted_positions: spawn_positions.clone(),
            densities: vec![0.0; particle_count],
            spawn_positions,
            paused: false,
            rng,
        })
    }

    /// Builds a simulation from an explicit particle layout; the layout
    /// becomes the reset target.
    pub fn from_positions(
        positions: Vec<Vec2>,
        params: &FluidParams,
    ) -> Result<Self, ParamsError> {
        params.validate()?;
        if positions.is_empty() {
            return Err(ParamsError::NoParticles);
        }

        let count = positions.len();
        Ok(Self {
            predicted_positions: positions.clone(),
            velocities: vec![Vec2::ZERO; count],
            densities: vec![0.0; count],
            spawn_positions: positions.clone(),
            positions,
            paused: false,
            rng: StdRng::seed_from_u64(params.rng_seed),
        })
    }

    /// Number of particles. Fixed for the lifetime of the run.
    pub fn num_particles(&self) -> usize {
        self.positions.len()
    }

    /// Read-only position snapshot, ordered by particle index.
    pub fn positions(&self) -> &[Vec2] {
        &self.positions
    }

    /// Read-only velocity snapshot.
    pub fn velocities(&self) -> &[Vec2] {
        &self.velocities
    }

    /// Densities from the most recent tick.
    pub fn densities(&self) -> &[f32] {
        &self.densities
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Applies one control command. Stiffness changes take effect on the
    /// next tick.
    pub fn apply(&mut self, command: FluidCommand, params: &mut FluidParams) {
        match command {
            FluidCommand::TogglePause => {
                self.paused = !self.paused;
                info!("simulation {}", if self.paused { "paused" } else { "resumed" });
            }
            FluidCommand::Reset => {
                self.reset();
            }
            FluidCommand::IncreaseStiffness => {
                params.pressure_multiplier *= params.stiffness_step;
                info!("pressure multiplier raised to {}", params.pressure_multiplier);
            }
            FluidCommand::DecreaseStiffness => {
                params.pressure_multiplier /= params.stiffness_step;
                info!("pressure multiplier lowered to {}", params.pressure_multiplier);
            }
        }
    }

    /// Restores the startup layout and zero velocities. The particle count
    /// and the pause state are untouched.
    pub fn reset(&mut self) {
        self.positions.copy_from_slice(&self.spawn_positions);
        self.predicted_positions.copy_from_slice(&self.spawn_positions);
        self.velocities.fill(Vec2::ZERO);
        self.densities.fill(0.0);
        info!("simulation reset to the startup layout");
    }

    /// Advances the simulation by one tick. A no-op while paused.
    pub fn step(&mut self, params: &FluidParams) {
        if self.paused {
            return;
        }

        // 1. External force
        self.apply_gravity(params);

        // 2. Density sample points (optional look-ahead)
        self.predict_positions(params);

        // 3. Density field over the full set
        self.compute_densities(params);

        // 4. Pressure forces and velocity updates from the same snapshot
        self.apply_pressure_forces(params);

        // 5. Position integration and boundary response
        self.integrate_and_collide(params);
    }

    fn apply_gravity(&mut self, params: &FluidParams) {
        for velocity in &mut self.velocities {
            *velocity += params.gravity * params.dt;
        }
    }

    fn predict_positions(&mut self, params: &FluidParams) {
        match params.prediction_interval {
            Some(lookahead) => {
                for i in 0..self.positions.len() {
                    self.predicted_positions[i] =
                        self.positions[i] + self.velocities[i] * lookahead;
                }
            }
            None => self.predicted_positions.copy_from_slice(&self.positions),
        }
    }

    fn compute_densities(&mut self, params: &FluidParams) {
        for i in 0..self.predicted_positions.len() {
            self.densities[i] = solver::calculate_density(
                self.predicted_positions[i],
                &self.predicted_positions,
                params,
            );
        }
    }

    fn apply_pressure_forces(&mut self, params: &FluidParams) {
        for i in 0..self.positions.len() {
            let force =
                solver::pressure_force(i, &self.positions, &self.densities, params, &mut self.rng);
            let density = self.densities[i];
            // Zero local density carries no pressure response.
            let acceleration = if density > 0.0 { force / density } else { Vec2::ZERO };
            self.velocities[i] += acceleration * params.dt;
        }
    }

    fn integrate_and_collide(&mut self, params: &FluidParams) {
        for i in 0..self.positions.len() {
            self.positions[i] += self.velocities[i] * params.dt;
            boundary::resolve_collisions(&mut self.positions[i], &mut self.velocities[i], params);
        }
    }
}
