//! Particle seeding.
//!
//! The particle set is fixed at startup: a grid-fill layout inside a spawn
//! rectangle, with a little horizontal jitter so columns do not start
//! perfectly stacked. The layout is produced once and retained by the
//! simulation so a reset can restore it exactly.

use bevy::prelude::*;
use rand::Rng;

/// Axis-aligned rectangle the initial particle layout fills.
#[derive(Clone, Copy, Debug, Reflect)]
pub struct SpawnRegion {
    /// Minimum corner.
    pub min: Vec2,
    /// Maximum corner.
    pub max: Vec2,
}

impl SpawnRegion {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Region extents (width, height).
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// Whether `point` lies inside the closed rectangle.
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }
}

/// Grid-fills `region` with exactly `count` positions.
///
/// Particles sit at the cell centers of a near-square grid covering the
/// region, bottom row first, jittered horizontally by up to a quarter cell.
/// Every position lies inside the region.
pub fn spawn_layout(count: usize, region: SpawnRegion, rng: &mut impl Rng) -> Vec<Vec2> {
    let size = region.size();
    let aspect = if size.y > 0.0 { size.x / size.y } else { 1.0 };
    let columns = ((count as f32 * aspect).sqrt().ceil() as usize).max(1);
    let rows = count.div_ceil(columns);

    let cell = Vec2::new(size.x / columns as f32, size.y / rows as f32);

    let mut positions = Vec::with_capacity(count);
    for i in 0..count {
        let column = i % columns;
        let row = i / columns;
        let jitter = rng.random_range(0.0..0.25) * cell.x;
        positions.push(Vec2::new(
            region.min.x + (column as f32 + 0.5) * cell.x + jitter,
            region.min.y + (row as f32 + 0.5) * cell.y,
        ));
    }
    positions
}
