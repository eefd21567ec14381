#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::invalid_rust_codeblocks)]

//! # Voxel Plugin Util
//!
//! Utility library for voxel-game server plugins, providing spatial region
//! abstractions over the block grid and floating-text holograms backed by
//! host marker entities.
//!
//! ## Key Modules
//!
//! * `world` - World identities, grid cells, and continuous points
//! * `region` - The region family: cuboid, block-set, and composite volumes
//! * `host` - The trait surface the host game server implements
//! * `hologram` - Floating text displays built on the host traits
//! * `core` - Shared single-threaded resource plumbing
//!
//! ## Architecture
//!
//! The crate is split along one seam: everything spatial (`world`,
//! `region`) is pure in-memory computation with no host involvement, while
//! everything entity-shaped (`hologram`) reaches the server exclusively
//! through the capability traits in `host`. Plugins construct a host
//! adapter once, share it through [`core::StResource`], and hand it to
//! whatever needs it; tests substitute a mock adapter the same way.
//!
//! ## Usage
//!
//! ```rust
//! use voxel_plugin_util::region::{BlockSetRegion, Region};
//! use voxel_plugin_util::world::{GridCell, WorldId, WorldPoint};
//!
//! # fn main() -> Result<(), voxel_plugin_util::region::RegionError> {
//! let overworld = WorldId::new(0);
//! let dig_site = BlockSetRegion::from_cells([
//!     GridCell::new(overworld, 0, 64, 0),
//!     GridCell::new(overworld, 1, 64, 0),
//! ])?;
//!
//! assert_eq!(dig_site.block_volume(), 2);
//! assert!(dig_site.contains_point(&WorldPoint::new(overworld, 1.5, 64.9, 0.2)));
//!
//! // Any shape can be handed around behind the common Region type.
//! let region: Region = dig_site.into();
//! assert!(region.is_multi());
//! # Ok(())
//! # }
//! ```
//!
//! ## Concurrency
//!
//! Everything here is synchronous and single-threaded by design: region
//! operations are plain in-memory computation, and host calls are expected
//! to run on the server's tick thread. Callers needing shared access
//! serialize externally.

pub mod core;
pub mod hologram;
pub mod host;
pub mod region;
pub mod world;

pub use hologram::Hologram;
pub use region::{BlockSetRegion, CuboidRegion, MultiRegion, Region, RegionError};
pub use world::{GridCell, WorldId, WorldPoint};
