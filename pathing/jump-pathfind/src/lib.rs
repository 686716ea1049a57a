//! 3D jump point search over voxel occupancy grids.
//!
//! Jump point search is an optimised A* for uniform-cost grids: instead of
//! placing every neighbour on the open list, it slides along straight lines
//! and only surfaces *jump points* — the goal, cells with forced
//! neighbours, and branching points whose sub-directions admit jumps. This
//! crate lifts the classic 2D formulation to the 26-connected voxel
//! lattice: 6 axis directions, 12 face-diagonals and 8 volume-diagonals,
//! each with its own pruning and slide rules.
//!
//! # Quick start
//!
//! ```
//! use jump_pathfind::JumpPointSearcher;
//! use vox_spatial::{VoxelGrid, VoxelPos};
//!
//! let mut grid = VoxelGrid::open(3, 3, 3);
//! grid.set(1, 1, 1, false);
//!
//! let mut searcher = JumpPointSearcher::new(&grid);
//! let path = searcher.find_path(VoxelPos::new(0, 0, 0), VoxelPos::new(2, 2, 2));
//!
//! assert!(!path.is_empty());
//! assert_eq!(path[0], VoxelPos::new(0, 0, 0));
//! assert_eq!(*path.last().unwrap(), VoxelPos::new(2, 2, 2));
//! ```
//!
//! The result holds jump points only; use
//! [`path::expand_jump_path`] to recover the full voxel sequence.
//!
//! # Components
//!
//! - [`search::JumpPointSearcher`]: the best-first driver owning all search
//!   state
//! - [`node`]: the per-voxel state arena with stable ids
//! - [`open_list`]: a min-heap on `f` with O(N) rebuild after decrease-key
//! - [`heuristics`]: Manhattan `h` and rounded Euclidean step costs
//! - [`path`]: interpolation and validation over returned jump points
//!
//! The neighbour pruner and the jump routines are internal; their contract
//! surface is [`JumpPointSearcher::find_path`] plus the
//! [`jump_types::DiagonalPolicy`] and stride configuration.
//!
//! # Configuration
//!
//! ```
//! use jump_pathfind::JumpPointSearcher;
//! use jump_types::{DiagonalPolicy, SearchConfig};
//! use vox_spatial::{VoxelGrid, VoxelPos};
//!
//! let grid = VoxelGrid::open(3, 3, 1);
//! let config = SearchConfig::default().with_policy(DiagonalPolicy::Never);
//! let mut searcher = JumpPointSearcher::with_config(&grid, config);
//!
//! // Axis moves only: a dogleg instead of the diagonal.
//! let path = searcher.find_path(VoxelPos::new(0, 0, 0), VoxelPos::new(2, 2, 0));
//! assert_eq!(path.len(), 5);
//! ```

#![doc(html_root_url = "https://docs.rs/jump-pathfind/0.1.0")]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod heuristics;
mod jump;
mod neighbors;
pub mod node;
pub mod open_list;
pub mod path;
pub mod search;

pub use heuristics::{euclidean, manhattan};
pub use path::{expand_jump_path, is_segment_clear};
pub use search::JumpPointSearcher;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod integration_tests {
    use super::*;
    use jump_types::{DiagonalPolicy, SearchConfig};
    use vox_spatial::{Passability, VoxelGrid, VoxelPos};

    fn pos(x: u32, y: u32, z: u32) -> VoxelPos {
        VoxelPos::new(x, y, z)
    }

    /// Asserts the jump-point path is internally consistent: correct
    /// endpoints, passable positions, clear straight segments.
    fn assert_path_valid(grid: &VoxelGrid, path: &[VoxelPos], start: VoxelPos, finish: VoxelPos, stride: u32) {
        assert!(!path.is_empty(), "expected a path");
        assert_eq!(path[0], start.align_down(stride));
        assert_eq!(*path.last().unwrap(), finish.align_down(stride));
        for p in path {
            assert!(grid.passable_pos(*p), "path visits blocked cell {p}");
        }
        for pair in path.windows(2) {
            assert!(
                is_segment_clear(grid, pair[0], pair[1], stride),
                "segment {} -> {} crosses a blocked cell",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_two_cube_direct_volume_jump() {
        let grid = VoxelGrid::open(2, 2, 2);
        let mut searcher = JumpPointSearcher::new(&grid);
        let path = searcher.find_path(pos(0, 0, 0), pos(1, 1, 1));
        assert_eq!(path, vec![pos(0, 0, 0), pos(1, 1, 1)]);
    }

    #[test]
    fn test_three_cube_single_slide() {
        let grid = VoxelGrid::open(3, 3, 3);
        let mut searcher = JumpPointSearcher::new(&grid);
        let path = searcher.find_path(pos(0, 0, 0), pos(2, 2, 2));
        assert_eq!(path, vec![pos(0, 0, 0), pos(2, 2, 2)]);
    }

    #[test]
    fn test_straight_corridor() {
        let grid = VoxelGrid::open(3, 1, 1);
        let mut searcher = JumpPointSearcher::new(&grid);
        let path = searcher.find_path(pos(0, 0, 0), pos(2, 0, 0));
        assert_eq!(path, vec![pos(0, 0, 0), pos(2, 0, 0)]);
    }

    #[test]
    fn test_routes_around_central_blocker() {
        let mut grid = VoxelGrid::open(3, 3, 1);
        grid.set(1, 1, 0, false);
        let mut searcher = JumpPointSearcher::new(&grid);
        let path = searcher.find_path(pos(0, 0, 0), pos(2, 2, 0));

        assert_path_valid(&grid, &path, pos(0, 0, 0), pos(2, 2, 0), 1);
        assert!(path.len() >= 3, "path must detour, got {path:?}");
        assert!(!path.contains(&pos(1, 1, 0)));
    }

    #[test]
    fn test_blocked_finish_is_empty() {
        let mut grid = VoxelGrid::open(2, 2, 2);
        grid.set(1, 1, 1, false);
        let mut searcher = JumpPointSearcher::new(&grid);
        assert!(searcher.find_path(pos(0, 0, 0), pos(1, 1, 1)).is_empty());
    }

    #[test]
    fn test_blocked_start_is_empty() {
        let mut grid = VoxelGrid::open(2, 2, 2);
        grid.set(0, 0, 0, false);
        let mut searcher = JumpPointSearcher::new(&grid);
        assert!(searcher.find_path(pos(0, 0, 0), pos(1, 1, 1)).is_empty());
    }

    #[test]
    fn test_out_of_bounds_endpoint_is_empty() {
        let grid = VoxelGrid::open(2, 2, 2);
        let mut searcher = JumpPointSearcher::new(&grid);
        assert!(searcher.find_path(pos(0, 0, 0), pos(5, 5, 5)).is_empty());
    }

    #[test]
    fn test_start_equals_finish() {
        let grid = VoxelGrid::open(2, 2, 2);
        let mut searcher = JumpPointSearcher::new(&grid);
        assert_eq!(searcher.find_path(pos(1, 1, 0), pos(1, 1, 0)), vec![pos(1, 1, 0)]);

        let mut blocked = VoxelGrid::open(2, 2, 2);
        blocked.set(1, 1, 0, false);
        let mut searcher = JumpPointSearcher::new(&blocked);
        assert!(searcher.find_path(pos(1, 1, 0), pos(1, 1, 0)).is_empty());
    }

    #[test]
    fn test_no_path_through_blocked_corridor() {
        let mut grid = VoxelGrid::open(5, 1, 1);
        grid.set(2, 0, 0, false);
        let mut searcher = JumpPointSearcher::new(&grid);
        assert!(searcher.find_path(pos(0, 0, 0), pos(4, 0, 0)).is_empty());
    }

    #[test]
    fn test_skip_aligns_endpoints_and_stride() {
        let grid = VoxelGrid::open(4, 4, 4);
        let mut searcher = JumpPointSearcher::new(&grid);
        searcher.set_skip(2);

        let path = searcher.find_path(pos(0, 0, 0), pos(3, 3, 3));
        assert_eq!(path, vec![pos(0, 0, 0), pos(2, 2, 2)]);
        for p in &path {
            assert_eq!(p.x % 2, 0);
            assert_eq!(p.y % 2, 0);
            assert_eq!(p.z % 2, 0);
        }
    }

    #[test]
    fn test_skip_aligns_both_endpoints_down() {
        let grid = VoxelGrid::open(4, 4, 1);
        let mut searcher = JumpPointSearcher::new(&grid);
        searcher.set_skip(2);

        let path = searcher.find_path(pos(1, 1, 0), pos(3, 3, 0));
        assert_path_valid(&grid, &path, pos(1, 1, 0), pos(3, 3, 0), 2);
        assert_eq!(path[0], pos(0, 0, 0));
        assert_eq!(*path.last().unwrap(), pos(2, 2, 0));
    }

    #[test]
    fn test_skip_alignment_onto_blocked_cell_is_empty() {
        let mut grid = VoxelGrid::open(4, 4, 1);
        grid.set(0, 0, 0, false);
        let mut searcher = JumpPointSearcher::new(&grid);
        searcher.set_skip(2);

        // (1, 1, 0) is passable but floors onto the blocked origin.
        assert!(searcher.find_path(pos(1, 1, 0), pos(3, 3, 0)).is_empty());
    }

    fn walled_grid() -> VoxelGrid {
        // A wall at x = 3 spanning the whole yz extent, except one gap.
        let mut grid = VoxelGrid::open(6, 6, 3);
        for z in 0..3 {
            for y in 0..6 {
                grid.set(3, y, z, false);
            }
        }
        grid.set(3, 4, 1, true);
        grid
    }

    #[test]
    fn test_path_through_wall_gap_is_valid() {
        let grid = walled_grid();
        let mut searcher = JumpPointSearcher::new(&grid);
        let path = searcher.find_path(pos(0, 0, 0), pos(5, 0, 0));

        assert_path_valid(&grid, &path, pos(0, 0, 0), pos(5, 0, 0), 1);
        assert!(path.contains(&pos(3, 4, 1)), "path must use the gap: {path:?}");

        // The expanded path visits only passable voxels as well.
        for p in expand_jump_path(&path, 1) {
            assert!(grid.passable_pos(p));
        }
    }

    #[test]
    fn test_deterministic_across_free_memory() {
        let grid = walled_grid();
        let mut searcher = JumpPointSearcher::new(&grid);

        let first = searcher.find_path(pos(0, 0, 0), pos(5, 0, 0));
        searcher.free_memory();
        let second = searcher.find_path(pos(0, 0, 0), pos(5, 0, 0));
        assert_eq!(first, second);
    }

    #[test]
    fn test_searcher_reuse_without_free() {
        let grid = walled_grid();
        let mut searcher = JumpPointSearcher::new(&grid);

        let forward = searcher.find_path(pos(0, 0, 0), pos(5, 0, 0));
        assert_path_valid(&grid, &forward, pos(0, 0, 0), pos(5, 0, 0), 1);

        let back = searcher.find_path(pos(5, 0, 0), pos(0, 0, 0));
        assert_path_valid(&grid, &back, pos(5, 0, 0), pos(0, 0, 0), 1);
    }

    #[test]
    fn test_steps_telemetry() {
        let grid = VoxelGrid::open(3, 3, 3);
        let mut searcher = JumpPointSearcher::new(&grid);
        searcher.find_path(pos(0, 0, 0), pos(2, 2, 2));
        assert!(searcher.steps_traversed() > 0);

        searcher.free_memory();
        assert_eq!(searcher.steps_traversed(), 0);
    }

    #[test]
    fn test_policy_never_walks_axes_only() {
        let mut grid = VoxelGrid::open(3, 3, 1);
        grid.set(1, 1, 0, false);
        let config = SearchConfig::default().with_policy(DiagonalPolicy::Never);
        let mut searcher = JumpPointSearcher::with_config(&grid, config);

        let path = searcher.find_path(pos(0, 0, 0), pos(2, 2, 0));
        assert_path_valid(&grid, &path, pos(0, 0, 0), pos(2, 2, 0), 1);
        assert_eq!(path.len(), 5);
        for pair in path.windows(2) {
            assert_eq!(manhattan(pair[0], pair[1]), 1, "non-axis step in {path:?}");
        }
    }

    #[test]
    fn test_policy_matrix_on_cut_corner() {
        // Both flanks of the diagonal are blocked.
        let mut grid = VoxelGrid::open(2, 2, 1);
        grid.set(1, 0, 0, false);
        grid.set(0, 1, 0, false);

        let run = |policy| {
            let config = SearchConfig::default().with_policy(policy);
            let mut searcher = JumpPointSearcher::with_config(&grid, config);
            searcher.find_path(pos(0, 0, 0), pos(1, 1, 0))
        };

        assert_eq!(run(DiagonalPolicy::Always), vec![pos(0, 0, 0), pos(1, 1, 0)]);
        assert!(run(DiagonalPolicy::AtLeastOnePassable).is_empty());
        assert!(run(DiagonalPolicy::AllPassable).is_empty());
        assert!(run(DiagonalPolicy::Never).is_empty());
    }

    #[test]
    fn test_policy_one_flank_open() {
        // Only one flank of the diagonal is blocked.
        let mut grid = VoxelGrid::open(2, 2, 1);
        grid.set(1, 0, 0, false);

        let run = |policy| {
            let config = SearchConfig::default().with_policy(policy);
            let mut searcher = JumpPointSearcher::with_config(&grid, config);
            searcher.find_path(pos(0, 0, 0), pos(1, 1, 0))
        };

        // One open flank admits the diagonal for the permissive policies.
        assert_eq!(run(DiagonalPolicy::Always).len(), 2);
        assert_eq!(run(DiagonalPolicy::AtLeastOnePassable).len(), 2);
        // The strict policy detours through the open flank.
        assert_eq!(
            run(DiagonalPolicy::AllPassable),
            vec![pos(0, 0, 0), pos(0, 1, 0), pos(1, 1, 0)]
        );
        assert_eq!(run(DiagonalPolicy::Never).len(), 3);
    }

    #[test]
    fn test_forced_neighbour_creates_jump_point() {
        // Sliding +x past a blocker above forces a stop next to it.
        let mut grid = VoxelGrid::open(4, 3, 1);
        grid.set(1, 1, 0, false);
        let mut searcher = JumpPointSearcher::new(&grid);

        let path = searcher.find_path(pos(0, 0, 0), pos(3, 2, 0));
        assert_path_valid(&grid, &path, pos(0, 0, 0), pos(3, 2, 0), 1);
        assert!(!path.contains(&pos(1, 1, 0)));
    }

    #[test]
    fn test_vertical_3d_detour() {
        // A full wall in the middle layer forces the path over the top.
        let mut grid = VoxelGrid::open(3, 3, 3);
        for y in 0..3 {
            for z in 0..2 {
                grid.set(1, y, z, false);
            }
        }
        let mut searcher = JumpPointSearcher::new(&grid);
        let path = searcher.find_path(pos(0, 0, 0), pos(2, 0, 0));

        assert_path_valid(&grid, &path, pos(0, 0, 0), pos(2, 0, 0), 1);
        assert!(path.iter().any(|p| p.z == 2), "path must climb: {path:?}");
    }
}
