//! Error types for grid construction.

/// Errors that can occur while building a grid.
///
/// Queries never error: an out-of-bounds probe simply reads as blocked.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum SpatialError {
    /// The cell slice does not match the requested dimensions.
    #[error("expected {expected} cells for the given dimensions, got {actual}")]
    CellCountMismatch {
        /// Number of cells the dimensions require.
        expected: usize,
        /// Number of cells actually supplied.
        actual: usize,
    },

    /// The grid dimensions overflow addressable memory.
    #[error("grid dimensions {x}x{y}x{z} overflow usize")]
    DimensionsTooLarge {
        /// Width dimension.
        x: u32,
        /// Depth dimension.
        y: u32,
        /// Height dimension.
        z: u32,
    },
}
