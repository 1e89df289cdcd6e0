//! Particle rendering.
//!
//! One 2D circle mesh per particle, spawned at startup and moved to the
//! position snapshot after each tick. The particle count never changes during
//! a run, so the sprite set is spawned exactly once.

use bevy::prelude::*;

use super::params::FluidParams;
use super::simulation::FluidSimulation;

/// Water-blue particle color.
pub const PARTICLE_COLOR: Color = Color::srgb(0.2, 0.6, 1.0);

/// Index of the particle this sprite mirrors.
#[derive(Component, Clone, Copy, Debug)]
pub struct ParticleSprite(pub usize);

/// Spawns one circle mesh per particle.
pub fn spawn_particle_sprites(
    mut commands: Commands,
    simulation: Res<FluidSimulation>,
    params: Res<FluidParams>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    let mesh = meshes.add(Circle::new(params.particle_radius));
    let material = materials.add(PARTICLE_COLOR);

    for (index, position) in simulation.positions().iter().enumerate() {
        commands.spawn((
            Mesh2d(mesh.clone()),
            MeshMaterial2d(material.clone()),
            Transform::from_translation(position.extend(0.0)),
            ParticleSprite(index),
        ));
    }
}

/// Copies the position snapshot into the sprite transforms.
pub fn sync_particle_sprites(
    simulation: Res<FluidSimulation>,
    mut sprites: Query<(&ParticleSprite, &mut Transform)>,
) {
    let positions = simulation.positions();
    for (sprite, mut transform) in &mut sprites {
        if let Some(position) = positions.get(sprite.0) {
            transform.translation = position.extend(0.0);
        }
    }
}
