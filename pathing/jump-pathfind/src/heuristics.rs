//! Distance functions for the search driver.
//!
//! Costs are unsigned integers: Manhattan distance is the `h` term of
//! `f = g + h`, and rounded Euclidean distance is the incremental step cost
//! between a jump-point parent and its child. Coordinates are widened to
//! signed integers before subtracting, so the functions are symmetric and
//! safe for any pair of valid positions.

use vox_spatial::VoxelPos;

/// Manhattan distance: `|dx| + |dy| + |dz|`.
///
/// A lower bound on path cost under 6-connected movement, used as the
/// heuristic term of `f`.
///
/// # Example
///
/// ```
/// use jump_pathfind::heuristics::manhattan;
/// use vox_spatial::VoxelPos;
///
/// let d = manhattan(VoxelPos::new(0, 0, 0), VoxelPos::new(3, 4, 5));
/// assert_eq!(d, 12);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn manhattan(a: VoxelPos, b: VoxelPos) -> u32 {
    let (dx, dy, dz) = deltas(a, b);
    (dx.unsigned_abs() + dy.unsigned_abs() + dz.unsigned_abs()) as u32
}

/// Euclidean distance rounded to the nearest integer:
/// `round(sqrt(dx² + dy² + dz²))`.
///
/// Used as the step cost between consecutive jump points.
///
/// # Example
///
/// ```
/// use jump_pathfind::heuristics::euclidean;
/// use vox_spatial::VoxelPos;
///
/// assert_eq!(euclidean(VoxelPos::new(0, 0, 0), VoxelPos::new(3, 4, 0)), 5);
/// // sqrt(3) rounds to 2
/// assert_eq!(euclidean(VoxelPos::new(0, 0, 0), VoxelPos::new(1, 1, 1)), 2);
/// ```
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
pub fn euclidean(a: VoxelPos, b: VoxelPos) -> u32 {
    let (dx, dy, dz) = deltas(a, b);
    let sq = (dx * dx + dy * dy + dz * dz) as f64;
    sq.sqrt().round() as u32
}

fn deltas(a: VoxelPos, b: VoxelPos) -> (i64, i64, i64) {
    (
        i64::from(a.x) - i64::from(b.x),
        i64::from(a.y) - i64::from(b.y),
        i64::from(a.z) - i64::from(b.z),
    )
}
