//! # Hologram Module
//!
//! This module provides [`Hologram`], a block of floating text built from
//! invisible marker entities - one per line, stacked downward from an
//! origin point.
//!
//! ## Durability
//!
//! The marker entities live in the host's world and survive this library's
//! restarts, so a hologram handle must be recoverable from world state
//! alone. Every marker is tagged with its hologram's nonzero group id
//! through the host's [`TagStore`]; [`Hologram::find_at`] scans the chunk
//! around a point for tagged markers and reassembles the handle from them.
//!
//! ## Line Stacking
//!
//! Lines are kept as an ordered list of marker handles, top line first.
//! Structural edits (insert, remove, respacing, moving) go through
//! [`Hologram::restack`], which despawns every marker and respawns the
//! lines from the origin - simpler and more robust than nudging individual
//! markers into place.

use cgmath::{MetricSpace, Vector3};
use log::debug;

use crate::core::StResource;
use crate::host::{EntityHost, EntityId, TagStore};
use crate::world::WorldPoint;

/// Default vertical distance between consecutive lines, in world units.
pub const DEFAULT_LINE_SPACING: f64 = 0.35;

/// How close (in squared distance) the nearest tagged marker must be for
/// [`Hologram::find_at`] to consider it part of a hologram at that point.
const FIND_RANGE_SQUARED: f64 = 0.6;

/// A number of floating text lines displayed as one unit.
///
/// The hologram holds its host capabilities behind a shared
/// [`StResource`] handle, so any number of holograms can drive the same
/// host adapter from the tick thread.
pub struct Hologram<H: EntityHost + TagStore> {
    host: StResource<H>,
    id: i32,
    /// Marker entities, top line first.
    stands: Vec<EntityId>,
    /// Where the top line sits.
    origin: WorldPoint,
    line_spacing: f64,
}

impl<H: EntityHost + TagStore> Hologram<H> {
    /// Creates a hologram at the given point, one marker per line.
    ///
    /// A random nonzero group id is chosen and recorded on every spawned
    /// marker, so the hologram can later be recovered with
    /// [`find_at`](Self::find_at).
    ///
    /// # Arguments
    /// * `host` - Shared handle to the host capabilities
    /// * `at` - Position of the top line
    /// * `lines` - Text lines, top to bottom
    pub fn create<'a>(
        host: StResource<H>,
        at: WorldPoint,
        lines: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        let mut hologram = Hologram {
            host,
            id: fastrand::i32(1..),
            stands: Vec::new(),
            origin: at,
            line_spacing: DEFAULT_LINE_SPACING,
        };
        for line in lines {
            hologram.append(line);
        }
        debug!(
            "created hologram {} with {} lines at {:?}",
            hologram.id,
            hologram.stands.len(),
            at.pos
        );
        hologram
    }

    /// Attempts to recover the hologram nearest to a point.
    ///
    /// Loads the chunk containing `at`, collects its tagged markers, and
    /// takes the one closest to `at`. If even the closest is too far away
    /// (squared distance above 0.6) there is no hologram here. Otherwise
    /// every marker sharing that marker's group id becomes a line, ordered
    /// top to bottom by height.
    ///
    /// # Returns
    /// The recovered hologram, or `None` if no tagged marker sits close
    /// enough to `at`.
    pub fn find_at(host: StResource<H>, at: &WorldPoint) -> Option<Self> {
        let (id, stands, origin) = {
            let mut h = host.get_mut();
            h.load_chunk(at);
            let tagged: Vec<EntityId> = h
                .markers_in_chunk(at)
                .into_iter()
                .filter(|&stand| h.tag(stand) != 0)
                .collect();

            // Closest tagged marker decides which hologram (if any) we hit.
            let mut closest: Option<(EntityId, f64)> = None;
            for &stand in &tagged {
                let Some(location) = h.marker_location(stand) else {
                    continue;
                };
                let distance = location.pos.distance2(at.pos);
                if closest.map_or(true, |(_, best)| distance < best) {
                    closest = Some((stand, distance));
                }
            }
            let (closest, distance) = closest?;
            if distance > FIND_RANGE_SQUARED {
                return None;
            }

            let id = h.tag(closest);
            let mut group: Vec<(EntityId, WorldPoint)> = tagged
                .into_iter()
                .filter(|&stand| h.tag(stand) == id)
                .filter_map(|stand| h.marker_location(stand).map(|loc| (stand, loc)))
                .collect();
            group.sort_by(|a, b| b.1.pos.y.total_cmp(&a.1.pos.y));

            let origin = group.first()?.1;
            let stands: Vec<EntityId> = group.into_iter().map(|(stand, _)| stand).collect();
            (id, stands, origin)
        };
        debug!("recovered hologram {} with {} lines", id, stands.len());
        Some(Hologram {
            host,
            id,
            stands,
            origin,
            line_spacing: DEFAULT_LINE_SPACING,
        })
    }

    /// The nonzero group id shared by this hologram's markers.
    pub fn id(&self) -> i32 {
        self.id
    }

    /// The number of lines.
    pub fn size(&self) -> usize {
        self.stands.len()
    }

    /// The position of the top line.
    pub fn location(&self) -> WorldPoint {
        self.origin
    }

    /// The marker entities backing the lines, top line first.
    pub fn stands(&self) -> &[EntityId] {
        &self.stands
    }

    /// The vertical distance between consecutive lines.
    pub fn line_spacing(&self) -> f64 {
        self.line_spacing
    }

    /// Sets the vertical distance between consecutive lines and restacks.
    pub fn set_line_spacing(&mut self, spacing: f64) {
        self.line_spacing = spacing;
        self.restack();
    }

    /// Returns the text of one line, or `None` if the index is out of
    /// range or the marker no longer exists.
    pub fn line(&self, line: usize) -> Option<String> {
        let &stand = self.stands.get(line)?;
        self.host.get().marker_text(stand)
    }

    /// Returns the text of every line, top to bottom. A line whose marker
    /// has vanished reads as empty.
    pub fn lines(&self) -> Vec<String> {
        let host = self.host.get();
        self.stands
            .iter()
            .map(|&stand| host.marker_text(stand).unwrap_or_default())
            .collect()
    }

    /// Replaces the text of one line in place.
    ///
    /// # Panics
    /// Panics if `line` is out of range.
    pub fn set_line(&mut self, line: usize, text: &str) {
        let stand = self.stands[line];
        self.host.get_mut().set_marker_text(stand, text);
    }

    /// Adds a line at the bottom.
    pub fn append(&mut self, text: &str) {
        let stand = self.spawn_line(self.stands.len(), text);
        self.stands.push(stand);
    }

    /// Adds a line at the top.
    pub fn prepend(&mut self, text: &str) {
        self.insert(0, text);
    }

    /// Inserts a line at the given position and restacks.
    ///
    /// # Panics
    /// Panics if `line` is greater than the current number of lines.
    pub fn insert(&mut self, line: usize, text: &str) {
        let stand = self.spawn_line(line, text);
        self.stands.insert(line, stand);
        self.restack();
    }

    /// Removes one line, despawning its marker, and restacks.
    ///
    /// # Panics
    /// Panics if `line` is out of range.
    pub fn remove_line(&mut self, line: usize) {
        let stand = self.stands.remove(line);
        self.host.get_mut().remove_marker(stand);
        self.restack();
    }

    /// Despawns every marker, leaving the hologram empty.
    ///
    /// The origin and group id are kept, so lines appended afterwards
    /// rebuild the display in place.
    pub fn clear(&mut self) {
        {
            let mut host = self.host.get_mut();
            for &stand in &self.stands {
                host.remove_marker(stand);
            }
        }
        self.stands.clear();
    }

    /// Moves the hologram so its top line sits at `at`.
    pub fn move_to(&mut self, at: WorldPoint) {
        self.origin = at;
        self.restack();
    }

    /// Despawns and respawns every line from the origin.
    ///
    /// Structural edits funnel through this to keep line positions exact;
    /// it also heals markers that drifted or went stale.
    pub fn restack(&mut self) {
        if self.stands.is_empty() {
            return;
        }
        let lines = self.lines();
        self.clear();
        for line in &lines {
            self.append(line);
        }
    }

    /// Spawns the marker for a line at its stacked position and tags it.
    fn spawn_line(&self, line: usize, text: &str) -> EntityId {
        let base = {
            let host = self.host.get();
            self.stands
                .first()
                .and_then(|&top| host.marker_location(top))
        }
        .unwrap_or(self.origin);
        let at = base.translated(Vector3::new(0.0, -(self.line_spacing * line as f64), 0.0));

        let mut host = self.host.get_mut();
        let stand = host.spawn_text_marker(&at, text);
        host.set_tag(stand, self.id);
        stand
    }
}
