//! # Region Module
//!
//! This module provides the region family: bounded 3D volumes of block-grid
//! space, used by plugins to describe protected areas, selections, arenas,
//! and any other named chunk of a world.
//!
//! ## Representations
//!
//! There is one closed set of shapes, each trading memory for generality:
//!
//! * [`CuboidRegion`] - an axis-aligned box described by two corners.
//!   Containment checks are O(1) and storage is constant, but only box
//!   shapes can be expressed.
//! * [`BlockSetRegion`] - an explicit hash set of cells. Any shape can be
//!   expressed, at O(n) memory in the cell count; containment stays O(1)
//!   average through the hash set.
//! * [`MultiRegion`] - a composite of other regions, answering queries by
//!   delegating to its members.
//!
//! [`Region`] is the tagged union over the three. Code that works with "some
//! region" takes a `Region`; code that needs one specific representation
//! uses the concrete type and converts with `From` when handing it off.
//!
//! ## Shared Contract
//!
//! Every shape answers the same capability set: exact point/cell
//! containment, discrete and continuous volume, translation (with continuous
//! offsets rasterized to the grid), overlap against any other region, deep
//! cloning, world lookup, and complete duplicate-free block iteration. All
//! operations are synchronous and single-threaded; callers needing shared
//! access serialize externally (typically on the host's tick executor).
//!
//! Mutations validate world consistency: every path that introduces a cell
//! into a region fails with [`RegionError::CrossWorld`] if the cell belongs
//! to a different world than the region, leaving the region untouched.
//! Queries are gentler - asking whether a region contains a point from some
//! other world is simply answered "no".

use cgmath::{Point3, Vector3};
use thiserror::Error;

use crate::world::{GridCell, WorldId, WorldPoint};

pub mod block_set;
pub mod cuboid;
pub mod iteration;
pub mod multi;

pub use block_set::BlockSetRegion;
pub use cuboid::CuboidRegion;
pub use iteration::Blocks;
pub use multi::MultiRegion;

/// Errors raised by region mutators.
///
/// All mutations either fully succeed or fail with one of these, leaving
/// the region unchanged; there are no partial-failure states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RegionError {
    /// A cell, point, or member region from one world was handed to a
    /// region established in another world.
    #[error("cannot mix worlds in one region: got {found}, region is in {expected}")]
    CrossWorld {
        /// The world the region is established in.
        expected: WorldId,
        /// The world of the offending cell, point, or member.
        found: WorldId,
    },
    /// An empty region (which has no world yet) was added to a composite.
    #[error("cannot add an empty region to a composite region")]
    EmptyMember,
}

/// An axis-aligned box of grid cells, described by an inclusive `start`
/// corner and an exclusive `end` corner.
///
/// Every region keeps a bounding box covering all of its occupied cells.
/// For a cuboid the box *is* the shape; for the other variants it may
/// over-approximate (after removals, for instance), which is fine because
/// containment always consults the actual shape, never the box alone.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BoundingBox {
    /// The most negative corner, inclusive.
    pub start: Point3<i32>,
    /// The most positive corner, exclusive.
    pub end: Point3<i32>,
}

impl BoundingBox {
    /// Returns the box covering exactly one cell.
    pub fn of_cell(pos: Point3<i32>) -> Self {
        BoundingBox {
            start: pos,
            end: Point3::new(pos.x + 1, pos.y + 1, pos.z + 1),
        }
    }

    /// Returns the box spanning two opposite corner cells, in any order.
    ///
    /// Both cells are inside the resulting box; spanning a cell with itself
    /// gives a box of volume 1.
    pub fn span(a: Point3<i32>, b: Point3<i32>) -> Self {
        BoundingBox {
            start: Point3::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z)),
            end: Point3::new(
                a.x.max(b.x) + 1,
                a.y.max(b.y) + 1,
                a.z.max(b.z) + 1,
            ),
        }
    }

    /// Grows the box just enough to cover the given cell.
    pub fn expand_to(&mut self, pos: Point3<i32>) {
        self.start.x = self.start.x.min(pos.x);
        self.start.y = self.start.y.min(pos.y);
        self.start.z = self.start.z.min(pos.z);
        self.end.x = self.end.x.max(pos.x + 1);
        self.end.y = self.end.y.max(pos.y + 1);
        self.end.z = self.end.z.max(pos.z + 1);
    }

    /// Checks whether the cell at `pos` lies inside the box.
    pub fn contains(&self, pos: Point3<i32>) -> bool {
        pos.x >= self.start.x
            && pos.x < self.end.x
            && pos.y >= self.start.y
            && pos.y < self.end.y
            && pos.z >= self.start.z
            && pos.z < self.end.z
    }

    /// Checks whether two boxes share at least one cell.
    ///
    /// Two boxes intersect iff their extents intersect along every axis;
    /// boxes that merely touch faces share no cell and do not intersect.
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        self.start.x < other.end.x
            && other.start.x < self.end.x
            && self.start.y < other.end.y
            && other.start.y < self.end.y
            && self.start.z < other.end.z
            && other.start.z < self.end.z
    }

    /// Returns the union of two boxes: the smallest box covering both.
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        BoundingBox {
            start: Point3::new(
                self.start.x.min(other.start.x),
                self.start.y.min(other.start.y),
                self.start.z.min(other.start.z),
            ),
            end: Point3::new(
                self.end.x.max(other.end.x),
                self.end.y.max(other.end.y),
                self.end.z.max(other.end.z),
            ),
        }
    }

    /// Returns the edge lengths of the box along each axis.
    pub fn size(&self) -> Vector3<i32> {
        self.end - self.start
    }

    /// Returns the number of cells the box covers.
    pub fn block_volume(&self) -> u64 {
        let size = self.size();
        size.x as u64 * size.y as u64 * size.z as u64
    }

    /// Returns the box shifted by whole grid steps.
    pub fn offset(&self, offset: Vector3<i32>) -> BoundingBox {
        BoundingBox {
            start: self.start + offset,
            end: self.end + offset,
        }
    }
}

/// A bounded 3D volume of block-grid space, polymorphic over its
/// representation.
///
/// `Region` is the type plugin code passes around; the concrete variants do
/// the actual work. Cloning a region is a deep copy - mutating the clone
/// never affects the original's storage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Region {
    /// An axis-aligned box described by two corners.
    Cuboid(CuboidRegion),
    /// An explicit set of cells.
    BlockSet(BlockSetRegion),
    /// A composite of other regions.
    Multi(MultiRegion),
}

impl Region {
    /// Checks whether the cell containing `point` lies within this region's
    /// actual shape (not merely its bounding box).
    ///
    /// A point from a different world is never contained.
    pub fn contains_point(&self, point: &WorldPoint) -> bool {
        match self {
            Region::Cuboid(region) => region.contains_point(point),
            Region::BlockSet(region) => region.contains_point(point),
            Region::Multi(region) => region.contains_point(point),
        }
    }

    /// Checks whether `cell` lies within this region's actual shape.
    pub fn contains_cell(&self, cell: &GridCell) -> bool {
        match self {
            Region::Cuboid(region) => region.contains_cell(cell),
            Region::BlockSet(region) => region.contains_cell(cell),
            Region::Multi(region) => region.contains_cell(cell),
        }
    }

    /// Returns the number of cells this region occupies.
    ///
    /// Exact for every variant: a composite counts each distinct cell once
    /// even where its members overlap.
    pub fn block_volume(&self) -> u64 {
        match self {
            Region::Cuboid(region) => region.block_volume(),
            Region::BlockSet(region) => region.block_volume(),
            Region::Multi(region) => region.block_volume(),
        }
    }

    /// Returns the continuous volume of this region.
    ///
    /// Grid-discrete shapes have no fractional cells, so this equals
    /// [`block_volume`](Region::block_volume) for every variant.
    pub fn volume(&self) -> f64 {
        match self {
            Region::Cuboid(region) => region.volume(),
            Region::BlockSet(region) => region.volume(),
            Region::Multi(region) => region.volume(),
        }
    }

    /// Returns `true` for every shape that cannot be described by two
    /// corners alone and therefore needs per-cell iteration.
    pub fn is_multi(&self) -> bool {
        match self {
            Region::Cuboid(region) => region.is_multi(),
            Region::BlockSet(region) => region.is_multi(),
            Region::Multi(region) => region.is_multi(),
        }
    }

    /// Returns the world all of this region's cells belong to, or `None`
    /// for a region that has never had a cell added.
    pub fn world(&self) -> Option<WorldId> {
        match self {
            Region::Cuboid(region) => Some(region.world()),
            Region::BlockSet(region) => region.world(),
            Region::Multi(region) => region.world(),
        }
    }

    /// Returns the current bounding corners, or `None` for an empty region.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        match self {
            Region::Cuboid(region) => Some(region.bounds()),
            Region::BlockSet(region) => region.bounding_box(),
            Region::Multi(region) => region.bounding_box(),
        }
    }

    /// Shifts every occupied cell by a continuous offset, rasterized to the
    /// grid.
    ///
    /// Cell count and relative structure are preserved, and the bounding
    /// corners are recomputed from the translated shape. Integer offsets
    /// round-trip exactly: translating by `v` and then by `-v` restores the
    /// original occupied set.
    pub fn translate(&mut self, offset: Vector3<f64>) {
        match self {
            Region::Cuboid(region) => region.translate(offset),
            Region::BlockSet(region) => region.translate(offset),
            Region::Multi(region) => region.translate(offset),
        }
    }

    /// Shifts every occupied cell by whole grid steps.
    pub fn translate_blocks(&mut self, offset: Vector3<i32>) {
        match self {
            Region::Cuboid(region) => region.translate_blocks(offset),
            Region::BlockSet(region) => region.translate_blocks(offset),
            Region::Multi(region) => region.translate_blocks(offset),
        }
    }

    /// Checks whether any cell of this region is contained by `other`.
    ///
    /// Regions in different worlds never overlap, and an empty region
    /// overlaps nothing. The result is symmetric even though each variant
    /// is free to test in whichever direction is cheaper.
    pub fn overlaps(&self, other: &Region) -> bool {
        match self {
            Region::Cuboid(region) => region.overlaps(other),
            Region::BlockSet(region) => region.overlaps(other),
            Region::Multi(region) => region.overlaps(other),
        }
    }

    /// Returns a lazy iterator over every occupied cell.
    ///
    /// The traversal is finite and complete - each occupied cell exactly
    /// once, in no particular order.
    pub fn blocks(&self) -> Blocks<'_> {
        match self {
            Region::Cuboid(region) => region.blocks(),
            Region::BlockSet(region) => region.blocks(),
            Region::Multi(region) => region.blocks(),
        }
    }

    /// Calls `visitor` for every occupied cell; the eager counterpart of
    /// [`blocks`](Region::blocks).
    pub fn for_each_block<F: FnMut(GridCell)>(&self, visitor: F) {
        self.blocks().for_each(visitor);
    }
}

impl From<CuboidRegion> for Region {
    fn from(region: CuboidRegion) -> Self {
        Region::Cuboid(region)
    }
}

impl From<BlockSetRegion> for Region {
    fn from(region: BlockSetRegion) -> Self {
        Region::BlockSet(region)
    }
}

impl From<MultiRegion> for Region {
    fn from(region: MultiRegion) -> Self {
        Region::Multi(region)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::WorldId;

    fn cell(world: WorldId, x: i32, y: i32, z: i32) -> GridCell {
        GridCell::new(world, x, y, z)
    }

    #[test]
    fn bounding_box_span_normalizes_corners() {
        let bounds = BoundingBox::span(Point3::new(4, -1, 7), Point3::new(-2, 3, 7));
        assert_eq!(bounds.start, Point3::new(-2, -1, 7));
        assert_eq!(bounds.end, Point3::new(5, 4, 8));
        assert_eq!(bounds.block_volume(), 7 * 5);
    }

    #[test]
    fn bounding_box_contains_is_end_exclusive() {
        let bounds = BoundingBox::span(Point3::new(0, 0, 0), Point3::new(1, 1, 1));
        assert!(bounds.contains(Point3::new(0, 0, 0)));
        assert!(bounds.contains(Point3::new(1, 1, 1)));
        assert!(!bounds.contains(Point3::new(2, 1, 1)));
        assert!(!bounds.contains(Point3::new(-1, 0, 0)));
    }

    #[test]
    fn face_touching_boxes_do_not_intersect() {
        let a = BoundingBox::span(Point3::new(0, 0, 0), Point3::new(1, 1, 1));
        let b = BoundingBox::span(Point3::new(2, 0, 0), Point3::new(3, 1, 1));
        let c = BoundingBox::span(Point3::new(1, 0, 0), Point3::new(4, 1, 1));
        assert!(!a.intersects(&b));
        assert!(!b.intersects(&a));
        assert!(a.intersects(&c));
        assert!(c.intersects(&b));
    }

    #[test]
    fn expand_to_tracks_both_corners() {
        let mut bounds = BoundingBox::of_cell(Point3::new(0, 0, 0));
        bounds.expand_to(Point3::new(-3, 2, 0));
        bounds.expand_to(Point3::new(1, -1, 5));
        assert_eq!(bounds.start, Point3::new(-3, -1, 0));
        assert_eq!(bounds.end, Point3::new(2, 3, 6));
    }

    #[test]
    fn overlap_between_block_set_regions() {
        // One region with a single shared cell, one with the shared cell
        // plus an outlier, and a third off on its own.
        let w = WorldId::new(1);
        let a: Region = BlockSetRegion::from_cells([cell(w, 0, 0, 0)])
            .unwrap()
            .into();
        let b: Region = BlockSetRegion::from_cells([cell(w, 0, 0, 0), cell(w, 5, 5, 5)])
            .unwrap()
            .into();
        let c: Region = BlockSetRegion::from_cells([cell(w, 9, 9, 9)])
            .unwrap()
            .into();

        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
        assert!(!c.overlaps(&b));
    }

    #[test]
    fn nonempty_region_overlaps_its_own_clone() {
        let w = WorldId::new(1);
        let region: Region = BlockSetRegion::from_cells([cell(w, 2, 3, 4)])
            .unwrap()
            .into();
        assert!(region.overlaps(&region.clone()));
    }

    #[test]
    fn empty_region_overlaps_nothing() {
        let w = WorldId::new(1);
        let empty: Region = BlockSetRegion::new().into();
        let filled: Region = BlockSetRegion::from_cells([cell(w, 0, 0, 0)])
            .unwrap()
            .into();
        assert!(!empty.overlaps(&filled));
        assert!(!filled.overlaps(&empty));
        assert!(!empty.overlaps(&empty.clone()));
    }

    #[test]
    fn regions_in_different_worlds_never_overlap() {
        let a: Region = BlockSetRegion::from_cells([cell(WorldId::new(1), 0, 0, 0)])
            .unwrap()
            .into();
        let b: Region = BlockSetRegion::from_cells([cell(WorldId::new(2), 0, 0, 0)])
            .unwrap()
            .into();
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn overlap_across_representations() {
        let w = WorldId::new(1);
        let cuboid: Region = CuboidRegion::span(&cell(w, 0, 0, 0), &cell(w, 3, 3, 3))
            .unwrap()
            .into();
        let inside: Region = BlockSetRegion::from_cells([cell(w, 2, 2, 2)])
            .unwrap()
            .into();
        let outside: Region = BlockSetRegion::from_cells([cell(w, 4, 0, 0)])
            .unwrap()
            .into();

        assert!(cuboid.overlaps(&inside));
        assert!(inside.overlaps(&cuboid));
        assert!(!cuboid.overlaps(&outside));
        assert!(!outside.overlaps(&cuboid));
    }

    #[test]
    fn variant_tags_report_shape_generality() {
        let w = WorldId::new(1);
        let cuboid: Region = CuboidRegion::span(&cell(w, 0, 0, 0), &cell(w, 1, 1, 1))
            .unwrap()
            .into();
        let set: Region = BlockSetRegion::from_cells([cell(w, 0, 0, 0)])
            .unwrap()
            .into();
        let multi: Region = MultiRegion::from_regions([cuboid.clone()]).unwrap().into();

        assert!(!cuboid.is_multi());
        assert!(set.is_multi());
        assert!(multi.is_multi());
    }
}
