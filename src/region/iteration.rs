//! # Region Iteration Module
//!
//! This module provides the block iterators behind [`Region::blocks`] and
//! `for_each_block`. Each shape walks its cells its own way - a cuboid
//! counts through its bounds, a block set walks its hash set, a composite
//! chains its members while skipping cells it has already yielded - and
//! [`Blocks`] is the single iterator type wrapping all of them.
//!
//! All of them share the same guarantees: the traversal is finite, yields
//! every occupied cell exactly once, and promises no particular order.
//!
//! [`Region::blocks`]: super::Region::blocks

use std::collections::hash_set;
use std::collections::HashSet;

use cgmath::Point3;

use crate::world::{GridCell, WorldId};

use super::{BoundingBox, Region};

/// An iterator over the occupied cells of a region.
///
/// Obtained from `blocks()` on a region or one of the concrete shapes.
/// Restartable in the sense that calling `blocks()` again begins a fresh
/// traversal.
pub enum Blocks<'a> {
    /// A region with no cells yields nothing.
    Empty,
    /// Walks the cells of a cuboid's bounds.
    Cuboid(CuboidBlocks),
    /// Walks the cells of an explicit set.
    Set(SetBlocks<'a>),
    /// Walks the distinct cells of a composite's members.
    Multi(MultiBlocks<'a>),
}

impl<'a> Iterator for Blocks<'a> {
    type Item = GridCell;

    fn next(&mut self) -> Option<GridCell> {
        match self {
            Blocks::Empty => None,
            Blocks::Cuboid(iter) => iter.next(),
            Blocks::Set(iter) => iter.next(),
            Blocks::Multi(iter) => iter.next(),
        }
    }
}

/// Iterates the cells of an axis-aligned box in row-major order
/// (x fastest, then y, then z).
pub struct CuboidBlocks {
    world: WorldId,
    bounds: BoundingBox,
    /// The next cell to yield.
    cursor: Point3<i32>,
    /// Set once the cursor has wrapped past the last cell.
    done: bool,
}

impl CuboidBlocks {
    pub(crate) fn new(world: WorldId, bounds: BoundingBox) -> Self {
        let size = bounds.size();
        CuboidBlocks {
            world,
            bounds,
            cursor: bounds.start,
            done: size.x <= 0 || size.y <= 0 || size.z <= 0,
        }
    }
}

impl Iterator for CuboidBlocks {
    type Item = GridCell;

    fn next(&mut self) -> Option<GridCell> {
        if self.done {
            return None;
        }
        let cell = GridCell {
            world: self.world,
            pos: self.cursor,
        };

        // Advance x first; carry into y and then z at each edge.
        self.cursor.x += 1;
        if self.cursor.x == self.bounds.end.x {
            self.cursor.x = self.bounds.start.x;
            self.cursor.y += 1;
            if self.cursor.y == self.bounds.end.y {
                self.cursor.y = self.bounds.start.y;
                self.cursor.z += 1;
                if self.cursor.z == self.bounds.end.z {
                    self.done = true;
                }
            }
        }

        Some(cell)
    }
}

/// Iterates the cells of an explicit set, in the set's own (arbitrary)
/// order.
pub struct SetBlocks<'a> {
    world: WorldId,
    inner: hash_set::Iter<'a, Point3<i32>>,
}

impl<'a> SetBlocks<'a> {
    pub(crate) fn new(world: WorldId, inner: hash_set::Iter<'a, Point3<i32>>) -> Self {
        SetBlocks { world, inner }
    }
}

impl<'a> Iterator for SetBlocks<'a> {
    type Item = GridCell;

    fn next(&mut self) -> Option<GridCell> {
        let world = self.world;
        self.inner.next().map(|&pos| GridCell { world, pos })
    }
}

/// Iterates the distinct cells of a composite's members.
///
/// Members are walked in order, each through its own `blocks()` iterator; a
/// seen-set suppresses cells an earlier member already yielded. All members
/// share one world, so deduplication keys on the bare coordinates.
pub struct MultiBlocks<'a> {
    members: &'a [Region],
    next_member: usize,
    current: Option<Box<Blocks<'a>>>,
    seen: HashSet<Point3<i32>>,
}

impl<'a> MultiBlocks<'a> {
    pub(crate) fn new(members: &'a [Region]) -> Self {
        MultiBlocks {
            members,
            next_member: 0,
            current: None,
            seen: HashSet::new(),
        }
    }
}

impl<'a> Iterator for MultiBlocks<'a> {
    type Item = GridCell;

    fn next(&mut self) -> Option<GridCell> {
        loop {
            if let Some(iter) = &mut self.current {
                for cell in iter.by_ref() {
                    if self.seen.insert(cell.pos) {
                        return Some(cell);
                    }
                }
            }
            // Current member exhausted; move on to the next one.
            let member = self.members.get(self.next_member)?;
            self.next_member += 1;
            self.current = Some(Box::new(member.blocks()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cuboid_iteration_is_row_major_and_complete() {
        let world = WorldId::new(1);
        let bounds = BoundingBox::span(Point3::new(0, 0, 0), Point3::new(1, 1, 0));
        let cells: Vec<Point3<i32>> = CuboidBlocks::new(world, bounds).map(|c| c.pos).collect();
        assert_eq!(
            cells,
            vec![
                Point3::new(0, 0, 0),
                Point3::new(1, 0, 0),
                Point3::new(0, 1, 0),
                Point3::new(1, 1, 0),
            ]
        );
    }

    #[test]
    fn single_cell_cuboid_yields_one_cell() {
        let world = WorldId::new(1);
        let bounds = BoundingBox::of_cell(Point3::new(-5, 3, 9));
        let cells: Vec<GridCell> = CuboidBlocks::new(world, bounds).collect();
        assert_eq!(cells, vec![GridCell::new(world, -5, 3, 9)]);
    }

    #[test]
    fn iteration_restarts_from_the_beginning() {
        let world = WorldId::new(1);
        let bounds = BoundingBox::span(Point3::new(0, 0, 0), Point3::new(2, 0, 0));
        let first: Vec<GridCell> = CuboidBlocks::new(world, bounds).collect();
        let second: Vec<GridCell> = CuboidBlocks::new(world, bounds).collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 3);
    }
}
