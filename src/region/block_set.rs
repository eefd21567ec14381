//! # Block Set Region Module
//!
//! This module provides [`BlockSetRegion`], the explicit-set shape: a hash
//! set of occupied cells. It expresses arbitrary shapes - hollow shells,
//! scattered outposts, flood-fill results - at the cost of memory
//! proportional to the cell count. Faster per query but heavier than a
//! composite of cuboids.
//!
//! ## Storage
//!
//! All cells of a region share one world (mixing worlds is rejected at every
//! insertion path), so the world is stored once next to the set instead of
//! inside every cell. The set itself keys on the bare integer coordinates,
//! which keeps membership tests a single hash lookup.

use std::collections::HashSet;

use cgmath::{Point3, Vector3};
use log::warn;

use crate::world::{floor_vector, GridCell, WorldId, WorldPoint};

use super::iteration::{Blocks, SetBlocks};
use super::{BoundingBox, Region, RegionError};

/// A region made of an explicit, unordered set of cells.
///
/// A fresh region is empty and belongs to no world; the first cell added
/// establishes the world, and every later mutation must agree with it.
/// Removing cells never un-establishes the world.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BlockSetRegion {
    cells: HashSet<Point3<i32>>,
    world: Option<WorldId>,
    bounds: Option<BoundingBox>,
}

impl BlockSetRegion {
    /// Creates an empty region with no world established yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a region from an initial collection of cells.
    ///
    /// Every cell goes through the same path as [`add`](Self::add), so the
    /// first cell establishes the world and the rest must match it.
    ///
    /// # Errors
    /// Fails with [`RegionError::CrossWorld`] on the first cell from a
    /// different world than the first one.
    pub fn from_cells(cells: impl IntoIterator<Item = GridCell>) -> Result<Self, RegionError> {
        let mut region = Self::new();
        for cell in cells {
            region.add(cell)?;
        }
        Ok(region)
    }

    /// Creates a region from grid-aligned points, rasterizing each one.
    ///
    /// # Errors
    /// Fails with [`RegionError::CrossWorld`] on the first point from a
    /// different world than the first one.
    pub fn from_points(points: impl IntoIterator<Item = WorldPoint>) -> Result<Self, RegionError> {
        let mut region = Self::new();
        for point in points {
            region.add_point(&point)?;
        }
        Ok(region)
    }

    /// Adds a cell to the region.
    ///
    /// The first cell added establishes the region's world and initializes
    /// the bounding corners to that cell's box. Adding a cell that is
    /// already present is a no-op. The bounding corners are maintained as
    /// the true running min/max over all additions.
    ///
    /// # Errors
    /// Fails with [`RegionError::CrossWorld`] if the cell belongs to a
    /// different world than the region; the occupied set is left untouched.
    pub fn add(&mut self, cell: GridCell) -> Result<(), RegionError> {
        match self.world {
            None => {
                self.world = Some(cell.world);
                self.bounds = Some(BoundingBox::of_cell(cell.pos));
            }
            Some(world) if world != cell.world => {
                warn!(
                    "rejected cell {:?} from {}: region is in {}",
                    cell.pos, cell.world, world
                );
                return Err(RegionError::CrossWorld {
                    expected: world,
                    found: cell.world,
                });
            }
            Some(_) => {
                if let Some(bounds) = &mut self.bounds {
                    bounds.expand_to(cell.pos);
                }
            }
        }
        self.cells.insert(cell.pos);
        Ok(())
    }

    /// Rasterizes a point and adds the containing cell.
    ///
    /// # Errors
    /// Fails with [`RegionError::CrossWorld`] if the point belongs to a
    /// different world than the region.
    pub fn add_point(&mut self, point: &WorldPoint) -> Result<(), RegionError> {
        self.add(point.cell())
    }

    /// Removes a cell from the region, returning whether it was present.
    ///
    /// Removing an absent cell (or one from another world, which can never
    /// be present) is a harmless no-op. The bounding corners are not shrunk;
    /// they may over-approximate afterwards, which containment never
    /// notices because it tests the set itself.
    pub fn remove(&mut self, cell: &GridCell) -> bool {
        if self.world != Some(cell.world) {
            return false;
        }
        self.cells.remove(&cell.pos)
    }

    /// Rasterizes a point and removes the containing cell, returning
    /// whether it was present.
    pub fn remove_point(&mut self, point: &WorldPoint) -> bool {
        self.remove(&point.cell())
    }

    /// Checks whether the cell containing `point` is in the set. O(1)
    /// average.
    pub fn contains_point(&self, point: &WorldPoint) -> bool {
        self.contains_cell(&point.cell())
    }

    /// Checks whether `cell` is in the set. O(1) average.
    pub fn contains_cell(&self, cell: &GridCell) -> bool {
        self.world == Some(cell.world) && self.cells.contains(&cell.pos)
    }

    /// The number of cells in the set.
    pub fn block_volume(&self) -> u64 {
        self.cells.len() as u64
    }

    /// The continuous volume; a set of whole cells has no fractional part,
    /// so this equals [`block_volume`](Self::block_volume).
    pub fn volume(&self) -> f64 {
        self.cells.len() as f64
    }

    /// Whether the set currently holds no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Always `true`: an explicit set is not describable by two corners.
    pub fn is_multi(&self) -> bool {
        true
    }

    /// The world all cells belong to, or `None` if no cell was ever added.
    pub fn world(&self) -> Option<WorldId> {
        self.world
    }

    /// The current bounding corners, or `None` if no cell was ever added.
    ///
    /// Exact after additions and translations; possibly over-approximate
    /// after removals.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        self.bounds
    }

    /// Shifts every cell by a continuous offset, rasterized to the grid.
    pub fn translate(&mut self, offset: Vector3<f64>) {
        self.translate_blocks(floor_vector(offset));
    }

    /// Shifts every cell by whole grid steps.
    ///
    /// The set is rebuilt with every cell offset, preserving cell count and
    /// relative structure, and the bounding corners are recomputed as the
    /// true min/max of the translated set.
    pub fn translate_blocks(&mut self, offset: Vector3<i32>) {
        if self.cells.is_empty() {
            return;
        }
        let mut bounds: Option<BoundingBox> = None;
        let moved: HashSet<Point3<i32>> = self
            .cells
            .iter()
            .map(|&pos| {
                let moved = pos + offset;
                match &mut bounds {
                    Some(bounds) => bounds.expand_to(moved),
                    None => bounds = Some(BoundingBox::of_cell(moved)),
                }
                moved
            })
            .collect();
        self.cells = moved;
        self.bounds = bounds;
    }

    /// Checks whether any cell of this region is contained by `other`.
    pub fn overlaps(&self, other: &Region) -> bool {
        if self.world.is_none() || self.world != other.world() {
            return false;
        }
        self.blocks().any(|cell| other.contains_cell(&cell))
    }

    /// Returns a lazy iterator over the occupied cells, in no particular
    /// order.
    pub fn blocks(&self) -> Blocks<'_> {
        match self.world {
            Some(world) => Blocks::Set(SetBlocks::new(world, self.cells.iter())),
            None => Blocks::Empty,
        }
    }

    /// Calls `visitor` for every occupied cell.
    pub fn for_each_block<F: FnMut(GridCell)>(&self, visitor: F) {
        self.blocks().for_each(visitor);
    }
}
