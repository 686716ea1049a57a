//! Domain types for 3D jump point search.
//!
//! This crate defines the vocabulary shared by the pathfinding crates:
//!
//! - [`Direction`] - A movement direction with components in `{-1, 0, +1}`
//! - [`DirectionKind`] - Axis, face-diagonal or volume-diagonal classification
//! - [`DiagonalPolicy`] - When a diagonal step is admissible
//! - [`SearchConfig`] - Policy and stride configuration for a search
//!
//! # Example
//!
//! ```
//! use jump_types::{DiagonalPolicy, Direction, DirectionKind, SearchConfig};
//! use vox_spatial::VoxelPos;
//!
//! let dir = Direction::between(VoxelPos::new(0, 0, 0), VoxelPos::new(4, 0, 4));
//! assert_eq!(dir, Direction::new(1, 0, 1));
//! assert_eq!(dir.kind(), Some(DirectionKind::FaceDiagonal));
//!
//! let config = SearchConfig::default()
//!     .with_policy(DiagonalPolicy::AllPassable)
//!     .with_skip(2);
//! assert_eq!(config.skip(), 2);
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod config;
mod direction;
mod policy;

pub use config::SearchConfig;
pub use direction::{Direction, DirectionKind};
pub use policy::DiagonalPolicy;
