//! Domain boundary collision response.
//!
//! The domain is an axis-aligned rectangle centered on the origin, inset by
//! the particle radius on every side so a particle's visual disk never leaves
//! the domain.

use bevy::prelude::*;

use super::params::FluidParams;

/// Half-extents of the reachable area: the domain rectangle inset by the
/// particle radius.
#[inline]
pub fn half_extents(params: &FluidParams) -> Vec2 {
    params.half_bounds() - Vec2::splat(params.particle_radius)
}

/// Clamps `position` into the inset rectangle and reflects the offending
/// velocity component, scaled by the collision damping factor.
///
/// Both axes are checked unconditionally, so a corner violation resolves on
/// both axes within the same call.
pub fn resolve_collisions(position: &mut Vec2, velocity: &mut Vec2, params: &FluidParams) {
    let half = half_extents(params);

    if position.x.abs() > half.x {
        position.x = half.x.copysign(position.x);
        velocity.x *= -params.collision_damping;
    }
    if position.y.abs() > half.y {
        position.y = half.y.copysign(position.y);
        velocity.y *= -params.collision_damping;
    }
}
