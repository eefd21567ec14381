//! # Multi Region Module
//!
//! This module provides [`MultiRegion`], the composite shape: a collection
//! of member regions answering every query together. It is the cheap way to
//! describe a large irregular volume - a handful of cuboids costs a few
//! corner pairs where an explicit set would cost one entry per cell.
//!
//! Members may overlap freely; volume and iteration count each distinct
//! cell once regardless.

use cgmath::Vector3;
use log::warn;

use crate::world::{GridCell, WorldId, WorldPoint};

use super::iteration::{Blocks, MultiBlocks};
use super::{BoundingBox, Region, RegionError};

/// A region composed of other regions, all in one world.
///
/// Members can be any shape, including other composites. An empty composite
/// belongs to no world, like an empty [`BlockSetRegion`]; the first member
/// establishes the world.
///
/// [`BlockSetRegion`]: super::BlockSetRegion
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MultiRegion {
    regions: Vec<Region>,
}

impl MultiRegion {
    /// Creates an empty composite with no members and no world.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a composite from an initial collection of member regions.
    ///
    /// # Errors
    /// Fails with [`RegionError::CrossWorld`] if the members disagree about
    /// their world, or [`RegionError::EmptyMember`] if any member is empty.
    pub fn from_regions(regions: impl IntoIterator<Item = Region>) -> Result<Self, RegionError> {
        let mut multi = Self::new();
        for region in regions {
            multi.add_region(region)?;
        }
        Ok(multi)
    }

    /// Adds a member region to the composite.
    ///
    /// The first member establishes the composite's world.
    ///
    /// # Errors
    /// Fails with [`RegionError::EmptyMember`] if the member has no cells
    /// (and therefore no world), or [`RegionError::CrossWorld`] if it is in
    /// a different world than the composite; the member list is left
    /// untouched on failure.
    pub fn add_region(&mut self, region: Region) -> Result<(), RegionError> {
        let Some(found) = region.world() else {
            return Err(RegionError::EmptyMember);
        };
        if let Some(expected) = self.world() {
            if expected != found {
                warn!(
                    "rejected member region from {}: composite is in {}",
                    found, expected
                );
                return Err(RegionError::CrossWorld { expected, found });
            }
        }
        self.regions.push(region);
        Ok(())
    }

    /// The member regions, in insertion order.
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Checks whether any member contains the cell holding `point`.
    pub fn contains_point(&self, point: &WorldPoint) -> bool {
        self.regions.iter().any(|r| r.contains_point(point))
    }

    /// Checks whether any member contains `cell`.
    pub fn contains_cell(&self, cell: &GridCell) -> bool {
        self.regions.iter().any(|r| r.contains_cell(cell))
    }

    /// The number of distinct cells covered by the members.
    ///
    /// Overlapping members are not double counted, which makes this O(n) in
    /// the total cell count rather than a sum of member volumes.
    pub fn block_volume(&self) -> u64 {
        self.blocks().count() as u64
    }

    /// The continuous volume; equals [`block_volume`](Self::block_volume)
    /// for grid-discrete members.
    pub fn volume(&self) -> f64 {
        self.block_volume() as f64
    }

    /// Always `true`: a composite is not describable by two corners.
    pub fn is_multi(&self) -> bool {
        true
    }

    /// The world shared by all members, or `None` for an empty composite.
    pub fn world(&self) -> Option<WorldId> {
        self.regions.first().and_then(|r| r.world())
    }

    /// The union of the members' bounding boxes, or `None` when empty.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        self.regions
            .iter()
            .filter_map(|r| r.bounding_box())
            .reduce(|a, b| a.union(&b))
    }

    /// Shifts every member by a continuous offset, rasterized to the grid.
    pub fn translate(&mut self, offset: Vector3<f64>) {
        for region in &mut self.regions {
            region.translate(offset);
        }
    }

    /// Shifts every member by whole grid steps.
    pub fn translate_blocks(&mut self, offset: Vector3<i32>) {
        for region in &mut self.regions {
            region.translate_blocks(offset);
        }
    }

    /// Checks whether any member shares a cell with `other`.
    pub fn overlaps(&self, other: &Region) -> bool {
        self.regions.iter().any(|r| r.overlaps(other))
    }

    /// Returns a lazy iterator over every distinct cell of every member.
    pub fn blocks(&self) -> Blocks<'_> {
        Blocks::Multi(MultiBlocks::new(&self.regions))
    }

    /// Calls `visitor` once per distinct cell of every member.
    pub fn for_each_block<F: FnMut(GridCell)>(&self, visitor: F) {
        self.blocks().for_each(visitor);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region::{BlockSetRegion, CuboidRegion};
    use std::collections::HashSet;

    fn world() -> WorldId {
        WorldId::new(1)
    }

    fn cell(x: i32, y: i32, z: i32) -> GridCell {
        GridCell::new(world(), x, y, z)
    }

    fn cuboid(ax: i32, ay: i32, az: i32, bx: i32, by: i32, bz: i32) -> Region {
        CuboidRegion::span(
            &GridCell::new(world(), ax, ay, az),
            &GridCell::new(world(), bx, by, bz),
        )
        .unwrap()
        .into()
    }

    #[test]
    fn contains_delegates_to_any_member() {
        let multi =
            MultiRegion::from_regions([cuboid(0, 0, 0, 1, 1, 1), cuboid(5, 5, 5, 6, 6, 6)])
                .unwrap();
        assert!(multi.contains_cell(&cell(0, 1, 0)));
        assert!(multi.contains_cell(&cell(6, 5, 6)));
        assert!(!multi.contains_cell(&cell(3, 3, 3)));
    }

    #[test]
    fn overlapping_members_are_not_double_counted() {
        // Two 2x2x2 boxes sharing a 1x2x2 slab: 8 + 8 - 4 distinct cells.
        let multi =
            MultiRegion::from_regions([cuboid(0, 0, 0, 1, 1, 1), cuboid(1, 0, 0, 2, 1, 1)])
                .unwrap();
        assert_eq!(multi.block_volume(), 12);

        let distinct: HashSet<GridCell> = multi.blocks().collect();
        assert_eq!(distinct.len(), 12);
        let listed: Vec<GridCell> = multi.blocks().collect();
        assert_eq!(listed.len(), 12);
    }

    #[test]
    fn members_must_share_one_world() {
        let mut multi = MultiRegion::new();
        multi.add_region(cuboid(0, 0, 0, 1, 1, 1)).unwrap();

        let other_world = CuboidRegion::span(
            &GridCell::new(WorldId::new(2), 0, 0, 0),
            &GridCell::new(WorldId::new(2), 1, 1, 1),
        )
        .unwrap();
        let err = multi.add_region(other_world.into()).unwrap_err();
        assert_eq!(
            err,
            RegionError::CrossWorld {
                expected: world(),
                found: WorldId::new(2),
            }
        );
        assert_eq!(multi.regions().len(), 1);
    }

    #[test]
    fn empty_members_are_rejected() {
        let mut multi = MultiRegion::new();
        let err = multi
            .add_region(BlockSetRegion::new().into())
            .unwrap_err();
        assert_eq!(err, RegionError::EmptyMember);
    }

    #[test]
    fn empty_composite_has_no_world_and_no_bounds() {
        let multi = MultiRegion::new();
        assert_eq!(multi.world(), None);
        assert_eq!(multi.bounding_box(), None);
        assert_eq!(multi.block_volume(), 0);
        assert_eq!(multi.blocks().count(), 0);
    }

    #[test]
    fn bounding_box_is_the_union_of_member_boxes() {
        let multi =
            MultiRegion::from_regions([cuboid(0, 0, 0, 1, 1, 1), cuboid(5, -2, 0, 6, 0, 3)])
                .unwrap();
        let bounds = multi.bounding_box().unwrap();
        assert_eq!(bounds.start, cgmath::Point3::new(0, -2, 0));
        assert_eq!(bounds.end, cgmath::Point3::new(7, 2, 4));
    }

    #[test]
    fn translation_moves_every_member_together() {
        let mut multi =
            MultiRegion::from_regions([cuboid(0, 0, 0, 0, 0, 0), cuboid(2, 0, 0, 2, 0, 0)])
                .unwrap();
        let volume = multi.block_volume();
        multi.translate_blocks(Vector3::new(0, 10, 0));
        assert_eq!(multi.block_volume(), volume);
        assert!(multi.contains_cell(&cell(0, 10, 0)));
        assert!(multi.contains_cell(&cell(2, 10, 0)));
        assert!(!multi.contains_cell(&cell(0, 0, 0)));
    }

    #[test]
    fn overlap_checks_members_against_the_other_region() {
        let multi: Region =
            MultiRegion::from_regions([cuboid(0, 0, 0, 1, 1, 1), cuboid(8, 8, 8, 9, 9, 9)])
                .unwrap()
                .into();
        let near: Region = BlockSetRegion::from_cells([cell(9, 8, 9)]).unwrap().into();
        let far: Region = BlockSetRegion::from_cells([cell(4, 4, 4)]).unwrap().into();
        assert!(multi.overlaps(&near));
        assert!(near.overlaps(&multi));
        assert!(!multi.overlaps(&far));
        assert!(!far.overlaps(&multi));
    }

    #[test]
    fn composites_can_nest() {
        let inner = MultiRegion::from_regions([cuboid(0, 0, 0, 1, 1, 1)]).unwrap();
        let outer =
            MultiRegion::from_regions([inner.into(), cuboid(3, 0, 0, 3, 0, 0)]).unwrap();
        assert_eq!(outer.block_volume(), 9);
        assert!(outer.contains_cell(&cell(1, 1, 1)));
        assert!(outer.contains_cell(&cell(3, 0, 0)));
    }
}
