//! # World Point Module
//!
//! This module defines [`WorldPoint`], a continuous position inside a world.
//! Points are what entities and containment queries work with; the grid only
//! enters the picture when a point is rasterized to its containing cell.

use cgmath::{Point3, Vector3};

use super::{floor_point, GridCell, WorldId};

/// A continuous (floating-point) position within a world.
///
/// Unlike [`GridCell`], a point can sit anywhere inside a block, which makes
/// it the right type for entity locations and translation targets. Points
/// from different worlds are never comparable in any spatial sense.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WorldPoint {
    /// The world this point belongs to.
    pub world: WorldId,
    /// The continuous coordinates of this point.
    pub pos: Point3<f64>,
}

impl WorldPoint {
    /// Creates a point at the given continuous coordinates.
    ///
    /// # Arguments
    /// * `world` - The world the point belongs to
    /// * `x`, `y`, `z` - Continuous coordinates
    pub fn new(world: WorldId, x: f64, y: f64, z: f64) -> Self {
        WorldPoint {
            world,
            pos: Point3::new(x, y, z),
        }
    }

    /// Rasterizes this point to the grid cell containing it.
    ///
    /// Each axis is floored, so negative fractional coordinates land in the
    /// cell below: `(-0.5, 0.0, 0.0)` rasterizes to cell `(-1, 0, 0)`.
    pub fn cell(&self) -> GridCell {
        GridCell {
            world: self.world,
            pos: floor_point(self.pos),
        }
    }

    /// Returns this point shifted by a continuous offset, staying in the
    /// same world.
    pub fn translated(&self, offset: Vector3<f64>) -> WorldPoint {
        WorldPoint {
            world: self.world,
            pos: self.pos + offset,
        }
    }
}
