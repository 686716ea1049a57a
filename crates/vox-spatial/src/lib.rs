//! Spatial primitives for voxel-grid pathfinding.
//!
//! This crate provides the foundational types the `pathing` crates build on:
//!
//! - [`VoxelPos`] - Unsigned voxel coordinates with an invalid sentinel
//! - [`VoxelGrid`] - Dense, bounds-checked 3D occupancy grid
//! - [`Passability`] - The oracle trait search algorithms query
//! - [`SpatialError`] - Grid construction errors
//!
//! # Coordinate model
//!
//! Coordinates are `u32` triples. A grid of dimensions `(x, y, z)` holds the
//! voxels `0..x × 0..y × 0..z`; anything outside reads as blocked. Neighbour
//! arithmetic is *wrapping*: stepping below zero produces a huge coordinate
//! that the bounds check rejects, so callers can probe off-grid cells freely
//! without pre-validating. The all-`u32::MAX` position doubles as the
//! "no position" sentinel ([`VoxelPos::INVALID`]).
//!
//! # Example
//!
//! ```
//! use vox_spatial::{Passability, VoxelGrid, VoxelPos};
//!
//! let mut grid = VoxelGrid::open(4, 4, 4);
//! grid.set(2, 2, 2, false);
//!
//! assert!(grid.passable(0, 0, 0));
//! assert!(!grid.passable(2, 2, 2));
//! // Out of bounds is blocked, not an error.
//! assert!(!grid.passable(9, 0, 0));
//!
//! // Wrapped underflow lands out of bounds and reads as blocked too.
//! let below = VoxelPos::new(0, 0, 0).offset(-1, 0, 0);
//! assert!(!grid.passable_pos(below));
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod coord;
mod error;
mod grid;

pub use coord::VoxelPos;
pub use error::SpatialError;
pub use grid::{Passability, VoxelGrid};

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
