//! # Cuboid Region Module
//!
//! This module provides [`CuboidRegion`], the axis-aligned box shape. It is
//! the cheapest region representation: two corners describe the whole
//! volume, containment is a per-axis bound check, and overlap against
//! another cuboid needs no iteration at all.

use cgmath::Vector3;
use log::trace;

use crate::world::{floor_vector, GridCell, WorldId, WorldPoint};

use super::iteration::{Blocks, CuboidBlocks};
use super::{BoundingBox, Region, RegionError};

/// An axis-aligned box of cells between two corners.
///
/// A cuboid is never empty - spanning a cell with itself gives a region of
/// exactly that one cell - and always knows its world, so unlike the
/// set-backed shapes its world and bounds accessors are total.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CuboidRegion {
    world: WorldId,
    bounds: BoundingBox,
}

impl CuboidRegion {
    /// Creates the cuboid spanning two opposite corner cells, in any order.
    ///
    /// # Errors
    /// Fails with [`RegionError::CrossWorld`] if the corners are in
    /// different worlds.
    pub fn span(a: &GridCell, b: &GridCell) -> Result<Self, RegionError> {
        if a.world != b.world {
            return Err(RegionError::CrossWorld {
                expected: a.world,
                found: b.world,
            });
        }
        Ok(CuboidRegion {
            world: a.world,
            bounds: BoundingBox::span(a.pos, b.pos),
        })
    }

    /// Creates the cuboid spanning the cells containing two continuous
    /// points.
    ///
    /// # Errors
    /// Fails with [`RegionError::CrossWorld`] if the points are in
    /// different worlds.
    pub fn from_points(a: &WorldPoint, b: &WorldPoint) -> Result<Self, RegionError> {
        Self::span(&a.cell(), &b.cell())
    }

    /// Creates the cuboid covering a single cell.
    pub fn single_cell(cell: &GridCell) -> Self {
        CuboidRegion {
            world: cell.world,
            bounds: BoundingBox::of_cell(cell.pos),
        }
    }

    /// The world this cuboid lives in.
    pub fn world(&self) -> WorldId {
        self.world
    }

    /// The corner pair describing this cuboid.
    pub fn bounds(&self) -> BoundingBox {
        self.bounds
    }

    /// The most negative cell of this cuboid.
    pub fn start(&self) -> GridCell {
        GridCell {
            world: self.world,
            pos: self.bounds.start,
        }
    }

    /// The most positive cell of this cuboid.
    pub fn max_cell(&self) -> GridCell {
        GridCell::new(
            self.world,
            self.bounds.end.x - 1,
            self.bounds.end.y - 1,
            self.bounds.end.z - 1,
        )
    }

    /// The edge lengths of this cuboid along each axis.
    pub fn size(&self) -> Vector3<i32> {
        self.bounds.size()
    }

    /// Checks whether the cell containing `point` lies inside the box.
    pub fn contains_point(&self, point: &WorldPoint) -> bool {
        self.contains_cell(&point.cell())
    }

    /// Checks whether `cell` lies inside the box. O(1).
    pub fn contains_cell(&self, cell: &GridCell) -> bool {
        cell.world == self.world && self.bounds.contains(cell.pos)
    }

    /// The number of cells in the box: the product of the three axis
    /// extents.
    pub fn block_volume(&self) -> u64 {
        self.bounds.block_volume()
    }

    /// The continuous volume; equal to [`block_volume`] since the box is
    /// grid-aligned.
    ///
    /// [`block_volume`]: CuboidRegion::block_volume
    pub fn volume(&self) -> f64 {
        self.block_volume() as f64
    }

    /// Always `false`: two corners fully describe this shape.
    pub fn is_multi(&self) -> bool {
        false
    }

    /// Shifts the box by a continuous offset, rasterized to the grid.
    pub fn translate(&mut self, offset: Vector3<f64>) {
        self.translate_blocks(floor_vector(offset));
    }

    /// Shifts the box by whole grid steps.
    pub fn translate_blocks(&mut self, offset: Vector3<i32>) {
        self.bounds = self.bounds.offset(offset);
        trace!("cuboid moved by {:?}, now {:?}", offset, self.bounds);
    }

    /// Checks whether this cuboid shares at least one cell with `other`.
    pub fn overlaps(&self, other: &Region) -> bool {
        if other.world() != Some(self.world) {
            return false;
        }
        match other {
            Region::Cuboid(other) => self.bounds.intersects(&other.bounds),
            // Bound checks here are O(1), so walking the other shape's
            // cells is far cheaper than walking this whole box.
            _ => other.blocks().any(|cell| self.contains_cell(&cell)),
        }
    }

    /// Returns a lazy iterator over every cell in the box.
    pub fn blocks(&self) -> Blocks<'_> {
        Blocks::Cuboid(CuboidBlocks::new(self.world, self.bounds))
    }

    /// Calls `visitor` for every cell in the box.
    pub fn for_each_block<F: FnMut(GridCell)>(&self, visitor: F) {
        self.blocks().for_each(visitor);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn world() -> WorldId {
        WorldId::new(1)
    }

    fn region(ax: i32, ay: i32, az: i32, bx: i32, by: i32, bz: i32) -> CuboidRegion {
        CuboidRegion::span(
            &GridCell::new(world(), ax, ay, az),
            &GridCell::new(world(), bx, by, bz),
        )
        .unwrap()
    }

    #[test]
    fn span_accepts_corners_in_any_order() {
        let a = region(3, 1, -2, 0, 4, 2);
        let b = region(0, 1, 2, 3, 4, -2);
        assert_eq!(a, b);
        assert_eq!(a.start().pos, cgmath::Point3::new(0, 1, -2));
        assert_eq!(a.max_cell().pos, cgmath::Point3::new(3, 4, 2));
    }

    #[test]
    fn span_rejects_cross_world_corners() {
        let err = CuboidRegion::span(
            &GridCell::new(WorldId::new(1), 0, 0, 0),
            &GridCell::new(WorldId::new(2), 1, 1, 1),
        )
        .unwrap_err();
        assert_eq!(
            err,
            RegionError::CrossWorld {
                expected: WorldId::new(1),
                found: WorldId::new(2),
            }
        );
    }

    #[test]
    fn volume_is_the_product_of_extents() {
        assert_eq!(region(0, 0, 0, 1, 2, 3).block_volume(), 2 * 3 * 4);
        assert_eq!(
            CuboidRegion::single_cell(&GridCell::new(world(), 5, 5, 5)).block_volume(),
            1
        );
        assert_eq!(region(0, 0, 0, 0, 0, 0).volume(), 1.0);
    }

    #[test]
    fn containment_is_inclusive_of_both_corner_cells() {
        let r = region(0, 0, 0, 2, 2, 2);
        assert!(r.contains_cell(&GridCell::new(world(), 0, 0, 0)));
        assert!(r.contains_cell(&GridCell::new(world(), 2, 2, 2)));
        assert!(!r.contains_cell(&GridCell::new(world(), 3, 0, 0)));
        assert!(!r.contains_cell(&GridCell::new(world(), -1, 0, 0)));
    }

    #[test]
    fn point_containment_rasterizes_first() {
        let r = region(0, 0, 0, 2, 2, 2);
        assert!(r.contains_point(&WorldPoint::new(world(), 2.999, 0.5, 1.0)));
        assert!(!r.contains_point(&WorldPoint::new(world(), 3.0, 0.5, 1.0)));
        assert!(!r.contains_point(&WorldPoint::new(world(), -0.001, 0.0, 0.0)));
        // Same coordinates, different world.
        assert!(!r.contains_point(&WorldPoint::new(WorldId::new(9), 1.0, 1.0, 1.0)));
    }

    #[test]
    fn translation_shifts_corners_and_preserves_volume() {
        let mut r = region(0, 0, 0, 2, 2, 2);
        let volume = r.block_volume();
        r.translate_blocks(Vector3::new(10, -5, 0));
        assert_eq!(r.block_volume(), volume);
        assert!(r.contains_cell(&GridCell::new(world(), 10, -5, 0)));
        assert!(!r.contains_cell(&GridCell::new(world(), 0, 0, 0)));
    }

    #[test]
    fn continuous_translation_floors_the_offset() {
        let mut r = region(0, 0, 0, 1, 1, 1);
        r.translate(Vector3::new(1.75, 0.25, -0.25));
        assert_eq!(r.start().pos, cgmath::Point3::new(1, 0, -1));
    }

    #[test]
    fn cuboids_overlap_by_interval_intersection() {
        let a: Region = region(0, 0, 0, 1, 1, 1).into();
        let adjacent: Region = region(2, 0, 0, 3, 1, 1).into();
        let crossing: Region = region(1, 0, 0, 4, 1, 1).into();
        assert!(!a.overlaps(&adjacent));
        assert!(a.overlaps(&crossing));
        assert!(crossing.overlaps(&adjacent));
    }

    #[test]
    fn block_iteration_covers_the_box_exactly_once() {
        let r = region(-1, 0, 0, 1, 1, 0);
        let cells: Vec<GridCell> = r.blocks().collect();
        assert_eq!(cells.len() as u64, r.block_volume());
        let distinct: HashSet<GridCell> = cells.iter().copied().collect();
        assert_eq!(distinct.len(), cells.len());
        assert!(distinct.contains(&GridCell::new(world(), -1, 0, 0)));
        assert!(distinct.contains(&GridCell::new(world(), 1, 1, 0)));
    }
}
