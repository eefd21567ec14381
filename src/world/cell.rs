//! # Grid Cell Module
//!
//! This module defines [`GridCell`], the discrete unit of world space: one
//! block of the grid, identified by its integer coordinates and the world it
//! belongs to.

use cgmath::{Point3, Vector3};

use super::{floor_vector, WorldId, WorldPoint};

/// A single cell of a world's block grid.
///
/// A cell is an immutable value: two cells are equal iff they are in the same
/// world and have the same three coordinates. Cells hash by value, so they
/// can key hash sets and maps directly.
///
/// The cell `(x, y, z)` covers the half-open box
/// `[x, x+1) x [y, y+1) x [z, z+1)` in continuous space; [`corner`] and
/// [`center`] give the two most useful points of that box.
///
/// [`corner`]: GridCell::corner
/// [`center`]: GridCell::center
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct GridCell {
    /// The world this cell belongs to.
    pub world: WorldId,
    /// The integer grid coordinates of this cell.
    pub pos: Point3<i32>,
}

impl GridCell {
    /// Creates a cell at the given grid coordinates.
    ///
    /// # Arguments
    /// * `world` - The world the cell belongs to
    /// * `x`, `y`, `z` - Integer grid coordinates
    pub fn new(world: WorldId, x: i32, y: i32, z: i32) -> Self {
        GridCell {
            world,
            pos: Point3::new(x, y, z),
        }
    }

    /// Returns the lower (most negative) corner of this cell as a continuous
    /// point.
    pub fn corner(&self) -> WorldPoint {
        WorldPoint {
            world: self.world,
            pos: Point3::new(self.pos.x as f64, self.pos.y as f64, self.pos.z as f64),
        }
    }

    /// Returns the center of this cell as a continuous point.
    pub fn center(&self) -> WorldPoint {
        WorldPoint {
            world: self.world,
            pos: Point3::new(
                self.pos.x as f64 + 0.5,
                self.pos.y as f64 + 0.5,
                self.pos.z as f64 + 0.5,
            ),
        }
    }

    /// Returns the cell reached by shifting this cell's corner by a
    /// continuous offset and rasterizing the result.
    ///
    /// Because cell corners sit on integer coordinates, this is equivalent to
    /// offsetting by the floored vector: a shift of `(0.9, 0.0, -0.1)` moves
    /// the cell by `(0, 0, -1)`.
    pub fn translated(&self, offset: Vector3<f64>) -> GridCell {
        self.offset(floor_vector(offset))
    }

    /// Returns the cell offset from this one by whole grid steps.
    pub fn offset(&self, offset: Vector3<i32>) -> GridCell {
        GridCell {
            world: self.world,
            pos: self.pos + offset,
        }
    }
}
