//! Movement directions on the 26-connected voxel lattice.

use vox_spatial::VoxelPos;

/// Classification of a non-zero direction by how many components are
/// non-zero.
///
/// The 26 directions of the voxel lattice split into 6 axis moves, 12
/// face-diagonals and 8 volume-diagonals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DirectionKind {
    /// One non-zero component, e.g. `(+1, 0, 0)`.
    Axis,
    /// Two non-zero components, e.g. `(+1, -1, 0)`.
    FaceDiagonal,
    /// Three non-zero components, e.g. `(+1, +1, -1)`.
    VolumeDiagonal,
}

/// A movement direction with each component in `{-1, 0, +1}`.
///
/// Directions are unit steps on the lattice; search code scales them by the
/// grid stride at the point of use.
///
/// # Example
///
/// ```
/// use jump_types::{Direction, DirectionKind};
///
/// let d = Direction::new(1, -1, 0);
/// assert_eq!(d.kind(), Some(DirectionKind::FaceDiagonal));
/// assert_eq!(Direction::ZERO.kind(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Direction {
    /// Sign of movement along x.
    pub dx: i32,
    /// Sign of movement along y.
    pub dy: i32,
    /// Sign of movement along z.
    pub dz: i32,
}

impl Direction {
    /// The zero direction (no movement).
    pub const ZERO: Self = Self::new(0, 0, 0);

    /// Creates a direction from raw components.
    ///
    /// Components outside `{-1, 0, +1}` are clamped to their sign.
    #[must_use]
    pub const fn new(dx: i32, dy: i32, dz: i32) -> Self {
        Self {
            dx: clamp_sign(dx),
            dy: clamp_sign(dy),
            dz: clamp_sign(dz),
        }
    }

    /// The direction of travel from `src` to `dst`, each component clamped
    /// to its sign.
    ///
    /// # Example
    ///
    /// ```
    /// use jump_types::Direction;
    /// use vox_spatial::VoxelPos;
    ///
    /// let d = Direction::between(VoxelPos::new(5, 5, 5), VoxelPos::new(9, 5, 2));
    /// assert_eq!(d, Direction::new(1, 0, -1));
    /// ```
    #[must_use]
    pub fn between(src: VoxelPos, dst: VoxelPos) -> Self {
        Self {
            dx: sign_delta(src.x, dst.x),
            dy: sign_delta(src.y, dst.y),
            dz: sign_delta(src.z, dst.z),
        }
    }

    /// Classifies the direction, or `None` for the zero direction.
    #[must_use]
    pub const fn kind(self) -> Option<DirectionKind> {
        match (self.dx != 0, self.dy != 0, self.dz != 0) {
            (false, false, false) => None,
            (true, false, false) | (false, true, false) | (false, false, true) => {
                Some(DirectionKind::Axis)
            }
            (true, true, false) | (true, false, true) | (false, true, true) => {
                Some(DirectionKind::FaceDiagonal)
            }
            (true, true, true) => Some(DirectionKind::VolumeDiagonal),
        }
    }

    /// Returns `true` for the zero direction.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.dx == 0 && self.dy == 0 && self.dz == 0
    }
}

const fn clamp_sign(v: i32) -> i32 {
    if v > 0 {
        1
    } else if v < 0 {
        -1
    } else {
        0
    }
}

fn sign_delta(from: u32, to: u32) -> i32 {
    match to.cmp(&from) {
        std::cmp::Ordering::Greater => 1,
        std::cmp::Ordering::Less => -1,
        std::cmp::Ordering::Equal => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_clamps_components() {
        let d = Direction::new(5, -7, 0);
        assert_eq!(d, Direction::new(1, -1, 0));
    }

    #[test]
    fn test_between_uses_matching_axes() {
        // Each component must come from its own axis pair.
        let src = VoxelPos::new(3, 10, 0);
        let dst = VoxelPos::new(3, 4, 9);
        let d = Direction::between(src, dst);
        assert_eq!(d, Direction::new(0, -1, 1));
    }

    #[test]
    fn test_between_long_deltas() {
        let d = Direction::between(VoxelPos::new(0, 0, 0), VoxelPos::new(100, 0, 100));
        assert_eq!(d, Direction::new(1, 0, 1));
    }

    #[test]
    fn test_kind_partition() {
        let mut axis = 0;
        let mut face = 0;
        let mut volume = 0;
        for dx in -1..=1 {
            for dy in -1..=1 {
                for dz in -1..=1 {
                    match Direction::new(dx, dy, dz).kind() {
                        Some(DirectionKind::Axis) => axis += 1,
                        Some(DirectionKind::FaceDiagonal) => face += 1,
                        Some(DirectionKind::VolumeDiagonal) => volume += 1,
                        None => assert!(dx == 0 && dy == 0 && dz == 0),
                    }
                }
            }
        }
        assert_eq!((axis, face, volume), (6, 12, 8));
    }

    #[test]
    fn test_zero() {
        assert!(Direction::ZERO.is_zero());
        assert_eq!(Direction::ZERO.kind(), None);
        let same = VoxelPos::new(2, 2, 2);
        assert!(Direction::between(same, same).is_zero());
    }
}
