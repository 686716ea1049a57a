//! Diagonal movement admissibility.

/// Rule deciding whether a diagonal step may pass between its flanking
/// axis cells.
///
/// A face-diagonal step projects onto two axis neighbours in its plane; a
/// volume-diagonal step subsumes three axis neighbours and three
/// face-diagonals. The policy decides how many of those flanks must be
/// passable for the diagonal itself to be admissible.
///
/// # Example
///
/// ```
/// use jump_types::DiagonalPolicy;
///
/// // One flank open, one blocked:
/// assert!(DiagonalPolicy::Always.admits_face(true, false));
/// assert!(DiagonalPolicy::AtLeastOnePassable.admits_face(true, false));
/// assert!(!DiagonalPolicy::AllPassable.admits_face(true, false));
/// assert!(!DiagonalPolicy::Never.admits_face(true, true));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DiagonalPolicy {
    /// Diagonal moves are never blocked by their flanking cells.
    #[default]
    Always,

    /// A diagonal is admissible if at least one flanking cell is passable.
    AtLeastOnePassable,

    /// A diagonal is admissible only if every flanking cell is passable.
    AllPassable,

    /// Only axis-aligned moves; diagonals are never admissible.
    Never,
}

impl DiagonalPolicy {
    /// Returns `true` if any diagonal movement is admissible at all.
    #[must_use]
    pub const fn allows_diagonals(self) -> bool {
        !matches!(self, Self::Never)
    }

    /// Admissibility of a face-diagonal given its two flanking axis cells.
    #[must_use]
    pub const fn admits_face(self, side_a: bool, side_b: bool) -> bool {
        match self {
            Self::Always => true,
            Self::AtLeastOnePassable => side_a || side_b,
            Self::AllPassable => side_a && side_b,
            Self::Never => false,
        }
    }

    /// Admissibility of a volume-diagonal given its six flanks: the three
    /// axis neighbours and the three face-diagonals it subsumes.
    #[must_use]
    pub const fn admits_volume(self, flanks: [bool; 6]) -> bool {
        let [a, b, c, d, e, f] = flanks;
        match self {
            Self::Always => true,
            Self::AtLeastOnePassable => a || b || c || d || e || f,
            Self::AllPassable => a && b && c && d && e && f,
            Self::Never => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_always() {
        assert_eq!(DiagonalPolicy::default(), DiagonalPolicy::Always);
    }

    #[test]
    fn test_allows_diagonals() {
        assert!(DiagonalPolicy::Always.allows_diagonals());
        assert!(DiagonalPolicy::AtLeastOnePassable.allows_diagonals());
        assert!(DiagonalPolicy::AllPassable.allows_diagonals());
        assert!(!DiagonalPolicy::Never.allows_diagonals());
    }

    #[test]
    fn test_admits_face_truth_table() {
        use DiagonalPolicy::{AllPassable, AtLeastOnePassable, Always, Never};

        for (a, b) in [(false, false), (false, true), (true, false), (true, true)] {
            assert!(Always.admits_face(a, b));
            assert!(!Never.admits_face(a, b));
            assert_eq!(AtLeastOnePassable.admits_face(a, b), a || b);
            assert_eq!(AllPassable.admits_face(a, b), a && b);
        }
    }

    #[test]
    fn test_admits_volume() {
        let one_open = [false, false, true, false, false, false];
        let all_open = [true; 6];
        let none_open = [false; 6];

        assert!(DiagonalPolicy::Always.admits_volume(none_open));
        assert!(DiagonalPolicy::AtLeastOnePassable.admits_volume(one_open));
        assert!(!DiagonalPolicy::AtLeastOnePassable.admits_volume(none_open));
        assert!(DiagonalPolicy::AllPassable.admits_volume(all_open));
        assert!(!DiagonalPolicy::AllPassable.admits_volume(one_open));
        assert!(!DiagonalPolicy::Never.admits_volume(all_open));
    }
}
