//! Search configuration.

use crate::DiagonalPolicy;

/// Configuration for a jump point search.
///
/// # Example
///
/// ```
/// use jump_types::{DiagonalPolicy, SearchConfig};
///
/// let config = SearchConfig::default()
///     .with_policy(DiagonalPolicy::AtLeastOnePassable)
///     .with_skip(4);
///
/// assert_eq!(config.policy(), DiagonalPolicy::AtLeastOnePassable);
/// assert_eq!(config.skip(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Diagonal admissibility rule.
    policy: DiagonalPolicy,
    /// Grid stride: all movement offsets are multiples of this, and
    /// endpoints are floor-aligned to it before searching.
    skip: u32,
}

impl SearchConfig {
    /// Creates a configuration with default settings.
    ///
    /// Defaults:
    /// - Policy: [`DiagonalPolicy::Always`]
    /// - Skip: 1 (every voxel considered)
    #[must_use]
    pub fn new() -> Self {
        Self {
            policy: DiagonalPolicy::Always,
            skip: 1,
        }
    }

    /// Sets the diagonal movement policy.
    #[must_use]
    pub const fn with_policy(mut self, policy: DiagonalPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Sets the grid stride.
    ///
    /// Values below 1 clamp to 1. Strides above 1 trade completeness on
    /// fine obstacles for traversal speed on sparse grids.
    #[must_use]
    pub const fn with_skip(mut self, skip: u32) -> Self {
        self.skip = if skip < 1 { 1 } else { skip };
        self
    }

    /// The diagonal movement policy.
    #[must_use]
    pub const fn policy(&self) -> DiagonalPolicy {
        self.policy
    }

    /// The grid stride, always ≥ 1.
    #[must_use]
    pub const fn skip(&self) -> u32 {
        self.skip
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new()
    }
}
