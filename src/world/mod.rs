//! # World Module
//!
//! This module provides the grid-space value types shared by the whole crate:
//! world identities, discrete grid cells, and continuous points.
//!
//! ## Coordinate Model
//!
//! A game server hosts one or more *worlds*, each an independent spatial
//! partition. Positions are always world-qualified: a cell or point carries
//! the [`WorldId`] it belongs to, and positions from different worlds never
//! compare equal. Within a world there are two coordinate spaces:
//!
//! * **Grid space** ([`GridCell`]): integer coordinates, one unit per block.
//!   The cell `(x, y, z)` occupies the half-open box
//!   `[x, x+1) x [y, y+1) x [z, z+1)`.
//! * **Continuous space** ([`WorldPoint`]): floating-point coordinates used
//!   for entity placement, containment queries, and translation vectors.
//!
//! Converting a continuous point to the cell that contains it ("rasterizing")
//! floors each axis, so `-0.5` lands in cell `-1`, not cell `0`.

use std::fmt;

use cgmath::{Point3, Vector3};

pub mod cell;
pub mod point;

pub use cell::GridCell;
pub use point::WorldPoint;

/// Opaque identity of a world (a spatial partition on the host server).
///
/// `WorldId` is a cheap `Copy` handle: two ids are the same world iff they
/// are equal. The crate never interprets the raw value; the host environment
/// decides how ids map to its own world objects.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WorldId(u64);

impl WorldId {
    /// Creates a `WorldId` from a host-assigned raw value.
    pub fn new(raw: u64) -> Self {
        WorldId(raw)
    }

    /// Returns the raw value this id was created from.
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for WorldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "world#{}", self.0)
    }
}

/// Floors a continuous point down to the integer coordinates of the grid
/// cell containing it.
pub(crate) fn floor_point(pos: Point3<f64>) -> Point3<i32> {
    Point3::new(
        pos.x.floor() as i32,
        pos.y.floor() as i32,
        pos.z.floor() as i32,
    )
}

/// Floors a continuous translation vector to its grid-aligned equivalent.
///
/// Shifting a cell by a continuous offset means shifting its corner and
/// rasterizing the result; since cell corners are integers, that is the same
/// as shifting by the floored offset.
pub(crate) fn floor_vector(offset: Vector3<f64>) -> Vector3<i32> {
    Vector3::new(
        offset.x.floor() as i32,
        offset.y.floor() as i32,
        offset.z.floor() as i32,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn world_ids_compare_by_value() {
        assert_eq!(WorldId::new(7), WorldId::new(7));
        assert_ne!(WorldId::new(7), WorldId::new(8));
        assert_eq!(WorldId::new(42).raw(), 42);
    }

    #[test]
    fn flooring_rounds_toward_negative_infinity() {
        assert_eq!(
            floor_point(Point3::new(1.9, -0.5, 0.0)),
            Point3::new(1, -1, 0)
        );
        assert_eq!(
            floor_vector(Vector3::new(-2.1, 3.99, -0.0)),
            Vector3::new(-3, 3, 0)
        );
    }
}
