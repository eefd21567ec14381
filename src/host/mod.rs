//! # Host Module
//!
//! This module defines the trait surface through which the crate talks to
//! the game server it is loaded into. The server's entity, chunk, and
//! tag-storage machinery is opaque to this crate: everything it needs is
//! expressed as a capability trait here, implemented once by the host
//! adapter and handed in explicitly at construction time.
//!
//! Keeping the surface behind traits (rather than global singletons or
//! lazily-initialized statics) means every consumer chooses its own
//! backing - the real server in production, a hash-map mock in tests.

use crate::world::WorldPoint;

/// Opaque handle to an entity owned by the host server.
///
/// The crate never interprets the raw value; it only passes handles back to
/// the host that issued them. Handles compare and hash by value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct EntityId(u64);

impl EntityId {
    /// Creates a handle from a host-assigned raw value.
    pub fn new(raw: u64) -> Self {
        EntityId(raw)
    }

    /// Returns the raw value this handle was created from.
    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Entity operations the host server provides.
///
/// A "text marker" is the invisible, gravity-free, non-colliding marker
/// entity game servers use to float a line of text in the air; spawning one
/// includes that standard setup, so callers only supply a position and the
/// text.
pub trait EntityHost {
    /// Spawns a text marker at the given point and returns its handle.
    fn spawn_text_marker(&mut self, at: &WorldPoint, text: &str) -> EntityId;

    /// Removes a marker entity from the world. Removing an already-gone
    /// marker is a no-op.
    fn remove_marker(&mut self, id: EntityId);

    /// Returns the marker's displayed text, or `None` if the entity no
    /// longer exists.
    fn marker_text(&self, id: EntityId) -> Option<String>;

    /// Replaces the marker's displayed text. Setting text on a gone marker
    /// is a no-op.
    fn set_marker_text(&mut self, id: EntityId, text: &str);

    /// Returns the marker's current position, or `None` if the entity no
    /// longer exists.
    fn marker_location(&self, id: EntityId) -> Option<WorldPoint>;

    /// Ensures the chunk containing `at` is loaded, so its entities can be
    /// enumerated.
    fn load_chunk(&mut self, at: &WorldPoint);

    /// Lists the marker entities in the chunk containing `at`.
    fn markers_in_chunk(&self, at: &WorldPoint) -> Vec<EntityId>;
}

/// Durable integer tags keyed by entity identity.
///
/// The host backs this with whatever survives restarts on its side (a
/// scoreboard objective, typically). A tag of `0` means "untagged" - the
/// store's default for entities never written to - so meaningful tags are
/// always nonzero.
pub trait TagStore {
    /// Returns the tag recorded for an entity, or `0` if none was ever set.
    fn tag(&self, entity: EntityId) -> i32;

    /// Records a tag for an entity, replacing any previous value.
    fn set_tag(&mut self, entity: EntityId, tag: i32);
}
