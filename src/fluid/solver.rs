//! Brute-force SPH solver: kernel functions, density estimation and pressure
//! forces.
//!
//! Densities are kernel-weighted sums over the whole particle set and pressure
//! follows a linear equation of state, with pair forces symmetrized through a
//! shared pressure term (Müller et al. 2003 style). Every function here is a
//! total function over its valid inputs: coincident particles and zero
//! densities are handled by substitution, never by a fault.
//!
//! All loops are all-pairs, O(N) per particle and O(N²) per tick. That is the
//! intended scope; a neighbor structure could later replace the inner loops
//! behind the same signatures.

use std::f32::consts::{PI, TAU};

use bevy::prelude::*;
use rand::Rng;

use super::params::FluidParams;

/// SPH kernel functions.
pub struct SphKernels;

impl SphKernels {
    /// Spike kernel for density estimation, normalized over the 2D disk.
    /// W(d, r) = (6 / πr⁴) · (r − d)² for d < r, else 0.
    ///
    /// Precondition: `radius > 0` (validated at initialization).
    #[inline]
    pub fn spiky(distance: f32, radius: f32) -> f32 {
        if distance >= radius {
            return 0.0;
        }
        let volume = PI * radius.powi(4) / 6.0;
        let diff = radius - distance;
        diff * diff / volume
    }

    /// Derivative of [`Self::spiky`] with respect to distance.
    /// dW/dd = (12 / πr⁴) · (d − r) for d < r, else 0.
    #[inline]
    pub fn spiky_derivative(distance: f32, radius: f32) -> f32 {
        if distance >= radius {
            return 0.0;
        }
        let scale = 12.0 / (PI * radius.powi(4));
        (distance - radius) * scale
    }
}

/// Kernel-weighted density of the particle field at `sample_point`.
///
/// Sums over every particle, including one sitting exactly on the sample
/// point (distance 0 is valid kernel input). An empty set has zero density
/// everywhere.
pub fn calculate_density(sample_point: Vec2, positions: &[Vec2], params: &FluidParams) -> f32 {
    let mut density = 0.0;
    for position in positions {
        let distance = position.distance(sample_point);
        density += params.particle_mass * SphKernels::spiky(distance, params.smoothing_radius);
    }
    density
}

/// Linear equation of state: pressure from density error.
///
/// Negative below the rest density; that is the expected attractive-like
/// correction pulling sparse regions back together, not an error.
#[inline]
pub fn density_to_pressure(density: f32, params: &FluidParams) -> f32 {
    (density - params.target_density) * params.pressure_multiplier
}

/// Mean of the two particles' pressures.
///
/// Both sides of a pair use the same value, which keeps the force pair equal
/// and opposite even though the individual pressures differ.
#[inline]
pub fn shared_pressure(density_a: f32, density_b: f32, params: &FluidParams) -> f32 {
    (density_to_pressure(density_a, params) + density_to_pressure(density_b, params)) / 2.0
}

/// Pressure force on particle `index` from every other particle.
///
/// A coincident pair has no separation direction; a pseudo-random unit vector
/// drawn from the caller's seeded `rng` substitutes, so the pair does not stay
/// coincident forever.
pub fn pressure_force(
    index: usize,
    positions: &[Vec2],
    densities: &[f32],
    params: &FluidParams,
    rng: &mut impl Rng,
) -> Vec2 {
    let mut force = Vec2::ZERO;

    for j in 0..positions.len() {
        if j == index {
            continue;
        }

        let offset = positions[j] - positions[index];
        let distance = offset.length();
        let direction = if distance == 0.0 {
            random_unit_direction(rng)
        } else {
            offset / distance
        };

        let density = densities[j];
        if density <= 0.0 {
            // Every particle contributes to its own density, so this only
            // guards densities that never came from `calculate_density`.
            continue;
        }

        let slope = SphKernels::spiky_derivative(distance, params.smoothing_radius);
        let shared = shared_pressure(density, densities[index], params);
        force += shared * direction * slope * params.particle_mass / density;
    }

    -force
}

/// Uniformly distributed unit vector.
pub fn random_unit_direction(rng: &mut impl Rng) -> Vec2 {
    let angle = rng.random_range(0.0..TAU);
    Vec2::new(angle.cos(), angle.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn kernel_vanishes_at_and_beyond_radius() {
        let radius = 160.0;
        assert_eq!(SphKernels::spiky(radius, radius), 0.0);
        assert_eq!(SphKernels::spiky(radius * 2.0, radius), 0.0);
        assert_eq!(SphKernels::spiky_derivative(radius, radius), 0.0);
        assert_eq!(SphKernels::spiky_derivative(radius * 10.0, radius), 0.0);
    }

    #[test]
    fn kernel_is_finite_positive_and_decreasing_inside() {
        let radius = 160.0;
        let w_0 = SphKernels::spiky(0.0, radius);
        let w_half = SphKernels::spiky(radius / 2.0, radius);
        let w_near_edge = SphKernels::spiky(radius * 0.99, radius);

        assert!(w_0.is_finite() && w_0 > 0.0);
        assert!(w_half.is_finite() && w_half > 0.0);
        assert!(w_near_edge.is_finite() && w_near_edge >= 0.0);
        assert!(w_0 > w_half);
        assert!(w_half > w_near_edge);
    }

    #[test]
    fn kernel_derivative_is_non_positive_inside() {
        let radius = 160.0;
        for step in 0..10 {
            let distance = radius * step as f32 / 10.0;
            let slope = SphKernels::spiky_derivative(distance, radius);
            assert!(slope.is_finite());
            assert!(slope <= 0.0, "slope {slope} at distance {distance}");
        }
    }

    #[test]
    fn density_of_empty_set_is_zero() {
        let params = FluidParams::default();
        assert_eq!(calculate_density(Vec2::new(3.0, -4.0), &[], &params), 0.0);
    }

    #[test]
    fn density_includes_particle_on_the_sample_point() {
        let params = FluidParams::default();
        let point = Vec2::new(10.0, 10.0);
        let density = calculate_density(point, &[point], &params);
        assert!(density > 0.0);
        assert!(density.is_finite());
    }

    #[test]
    fn pressure_is_negative_below_rest_density() {
        let params = FluidParams::default();
        assert!(density_to_pressure(params.target_density / 2.0, &params) < 0.0);
        assert!(density_to_pressure(params.target_density * 2.0, &params) > 0.0);
        assert_eq!(density_to_pressure(params.target_density, &params), 0.0);
    }

    #[test]
    fn shared_pressure_is_the_mean() {
        let params = FluidParams::default();
        let a = 0.3;
        let b = 0.05;
        let expected = (density_to_pressure(a, &params) + density_to_pressure(b, &params)) / 2.0;
        assert_eq!(shared_pressure(a, b, &params), expected);
        assert_eq!(shared_pressure(a, b, &params), shared_pressure(b, a, &params));
    }

    #[test]
    fn coincident_particles_get_a_finite_force() {
        let params = FluidParams::default();
        let point = Vec2::new(0.0, 0.0);
        let positions = [point, point];
        let densities = [
            calculate_density(point, &positions, &params),
            calculate_density(point, &positions, &params),
        ];

        let mut rng = rng();
        let f_0 = pressure_force(0, &positions, &densities, &params, &mut rng);
        let f_1 = pressure_force(1, &positions, &densities, &params, &mut rng);

        assert!(f_0.is_finite(), "force on particle 0 was {f_0}");
        assert!(f_1.is_finite(), "force on particle 1 was {f_1}");
    }

    #[test]
    fn pair_forces_are_equal_and_opposite() {
        let params = FluidParams::default();
        let positions = [Vec2::new(-30.0, 5.0), Vec2::new(25.0, -10.0)];
        let densities = [
            calculate_density(positions[0], &positions, &params),
            calculate_density(positions[1], &positions, &params),
        ];
        assert_eq!(densities[0], densities[1]);

        let mut rng = rng();
        let f_0 = pressure_force(0, &positions, &densities, &params, &mut rng);
        let f_1 = pressure_force(1, &positions, &densities, &params, &mut rng);

        assert!((f_0 + f_1).length() < 1e-6, "f_0 = {f_0}, f_1 = {f_1}");
    }

    #[test]
    fn random_direction_is_unit_length_and_seeded() {
        let mut a = rng();
        let mut b = rng();
        for _ in 0..16 {
            let dir_a = random_unit_direction(&mut a);
            let dir_b = random_unit_direction(&mut b);
            assert!((dir_a.length() - 1.0).abs() < 1e-5);
            assert_eq!(dir_a, dir_b);
        }
    }
}
