//! # Core Module
//!
//! This module provides the shared resource plumbing the rest of the crate
//! builds on. The library runs entirely on the host server's main tick
//! thread, so the one primitive needed is a single-threaded shared handle:
//! several holograms hold the same host adapter without any of them owning
//! it exclusively.
//!
//! ## Key Components
//! - `StResource`: single-threaded reference-counted resource with interior
//!   mutability

pub mod st_resource;

// Re-export for easier access
pub use st_resource::StResource;
