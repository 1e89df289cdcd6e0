//! Bevy plugin for the fluid simulation.

use bevy::prelude::*;

use super::params::FluidParams;
use super::particle::SpawnRegion;
use super::render;
use super::simulation::FluidSimulation;

/// Plugin that owns the simulation resources and schedules the tick.
///
/// The tick system runs in `Update`; the sprite sync runs strictly after it,
/// so rendering only ever observes a completed snapshot.
///
/// # Example
///
/// ```rust,ignore
/// use bevy::prelude::*;
/// use aqua::fluid::plugin::FluidPlugin;
///
/// fn main() {
///     App::new()
///         .add_plugins(DefaultPlugins)
///         .add_plugins(FluidPlugin::default())
///         .run();
/// }
/// ```
pub struct FluidPlugin {
    /// Simulation parameters inserted as a resource.
    pub params: FluidParams,
    /// Number of particles to seed. Fixed for the run.
    pub particle_count: usize,
    /// Region the startup layout fills.
    pub spawn_region: SpawnRegion,
}

impl Default for FluidPlugin {
    fn default() -> Self {
        Self {
            params: FluidParams::default(),
            particle_count: 30,
            spawn_region: SpawnRegion::new(Vec2::new(-300.0, -420.0), Vec2::new(0.0, 420.0)),
        }
    }
}

impl Plugin for FluidPlugin {
    fn build(&self, app: &mut App) {
        let simulation =
            match FluidSimulation::new(self.particle_count, self.spawn_region, &self.params) {
                Ok(simulation) => simulation,
                // Misconfiguration is fatal: the run must not start.
                Err(err) => panic!("fluid simulation rejected its configuration: {err}"),
            };

        app.register_type::<FluidParams>();

        app.insert_resource(self.params.clone());
        app.insert_resource(simulation);

        app.add_systems(Startup, render::spawn_particle_sprites);
        app.add_systems(
            Update,
            (run_simulation, render::sync_particle_sprites).chain(),
        );
    }
}

/// System that advances the simulation once per frame with the configured
/// time step.
fn run_simulation(params: Res<FluidParams>, mut simulation: ResMut<FluidSimulation>) {
    simulation.step(&params);
}
