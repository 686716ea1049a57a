//! Utilities over jump-point paths.
//!
//! [`JumpPointSearcher`](crate::JumpPointSearcher) returns only jump points;
//! the straight segment between consecutive points is collision-free by
//! construction but not spelled out. These helpers interpolate the full
//! voxel sequence and re-verify segment passability (the latter mostly
//! serves tests and debug tooling).

use jump_types::Direction;
use vox_spatial::{Passability, VoxelPos};

/// Expands a jump-point path into the full voxel sequence.
///
/// Consecutive jump points must be connected by a straight axis-aligned or
/// diagonal segment whose per-axis spans are equal multiples of `stride`,
/// which is what the searcher guarantees for the stride it ran with.
///
/// # Example
///
/// ```
/// use jump_pathfind::path::expand_jump_path;
/// use vox_spatial::VoxelPos;
///
/// let jumps = vec![VoxelPos::new(0, 0, 0), VoxelPos::new(2, 2, 0), VoxelPos::new(2, 4, 0)];
/// let full = expand_jump_path(&jumps, 1);
/// assert_eq!(
///     full,
///     vec![
///         VoxelPos::new(0, 0, 0),
///         VoxelPos::new(1, 1, 0),
///         VoxelPos::new(2, 2, 0),
///         VoxelPos::new(2, 3, 0),
///         VoxelPos::new(2, 4, 0),
///     ]
/// );
/// ```
#[must_use]
pub fn expand_jump_path(path: &[VoxelPos], stride: u32) -> Vec<VoxelPos> {
    let stride = stride.max(1);
    if path.len() <= 1 {
        return path.to_vec();
    }

    let mut full = Vec::with_capacity(path.len());
    for pair in path.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        let (step, count) = segment_step(a, b, stride);
        let mut cur = a;
        for _ in 0..count {
            full.push(cur);
            cur = cur.offset(step.0, step.1, step.2);
        }
    }
    if let Some(&last) = path.last() {
        full.push(last);
    }
    full
}

/// Checks that every voxel on the straight segment from `a` to `b`
/// (inclusive, stepping by `stride`) is passable.
///
/// # Example
///
/// ```
/// use jump_pathfind::path::is_segment_clear;
/// use vox_spatial::{VoxelGrid, VoxelPos};
///
/// let mut grid = VoxelGrid::open(4, 4, 1);
/// assert!(is_segment_clear(&grid, VoxelPos::new(0, 0, 0), VoxelPos::new(3, 3, 0), 1));
///
/// grid.set(2, 2, 0, false);
/// assert!(!is_segment_clear(&grid, VoxelPos::new(0, 0, 0), VoxelPos::new(3, 3, 0), 1));
/// ```
#[must_use]
pub fn is_segment_clear<G: Passability>(grid: &G, a: VoxelPos, b: VoxelPos, stride: u32) -> bool {
    let stride = stride.max(1);
    let (step, count) = segment_step(a, b, stride);
    let mut cur = a;
    for _ in 0..count {
        if !grid.passable_pos(cur) {
            return false;
        }
        cur = cur.offset(step.0, step.1, step.2);
    }
    grid.passable_pos(b)
}

/// Per-axis step and step count for the straight segment `a -> b`.
fn segment_step(a: VoxelPos, b: VoxelPos, stride: u32) -> ((i32, i32, i32), u64) {
    let dir = Direction::between(a, b);
    let span_x = axis_span(a.x, b.x);
    let span_y = axis_span(a.y, b.y);
    let span_z = axis_span(a.z, b.z);
    let span = span_x.max(span_y).max(span_z);

    debug_assert!(
        (span_x == 0 || span_x == span)
            && (span_y == 0 || span_y == span)
            && (span_z == 0 || span_z == span),
        "segment is neither axis-aligned nor diagonal"
    );
    debug_assert!(span % u64::from(stride) == 0, "segment spans off-stride");

    #[allow(clippy::cast_possible_wrap)]
    let s = stride as i32;
    ((dir.dx * s, dir.dy * s, dir.dz * s), span / u64::from(stride))
}

fn axis_span(from: u32, to: u32) -> u64 {
    u64::from(from.abs_diff(to))
}

#[cfg(test)]
mod tests {
    use super::*;
    use vox_spatial::VoxelGrid;

    #[test]
    fn test_expand_trivial_paths() {
        assert!(expand_jump_path(&[], 1).is_empty());
        let single = [VoxelPos::new(2, 2, 2)];
        assert_eq!(expand_jump_path(&single, 1), single.to_vec());
    }

    #[test]
    fn test_expand_volume_diagonal() {
        let jumps = [VoxelPos::new(0, 0, 0), VoxelPos::new(3, 3, 3)];
        let full = expand_jump_path(&jumps, 1);
        assert_eq!(full.len(), 4);
        assert_eq!(full[1], VoxelPos::new(1, 1, 1));
        assert_eq!(full[3], VoxelPos::new(3, 3, 3));
    }

    #[test]
    fn test_expand_respects_stride() {
        let jumps = [VoxelPos::new(0, 0, 0), VoxelPos::new(4, 4, 0)];
        let full = expand_jump_path(&jumps, 2);
        assert_eq!(
            full,
            vec![
                VoxelPos::new(0, 0, 0),
                VoxelPos::new(2, 2, 0),
                VoxelPos::new(4, 4, 0)
            ]
        );
    }

    #[test]
    fn test_segment_clear_checks_endpoints() {
        let mut grid = VoxelGrid::open(4, 1, 1);
        grid.set(3, 0, 0, false);
        assert!(!is_segment_clear(
            &grid,
            VoxelPos::new(0, 0, 0),
            VoxelPos::new(3, 0, 0),
            1
        ));
        assert!(is_segment_clear(
            &grid,
            VoxelPos::new(0, 0, 0),
            VoxelPos::new(2, 0, 0),
            1
        ));
    }

    #[test]
    fn test_segment_clear_zero_length() {
        let grid = VoxelGrid::open(2, 2, 2);
        let p = VoxelPos::new(1, 1, 1);
        assert!(is_segment_clear(&grid, p, p, 1));
    }
}
