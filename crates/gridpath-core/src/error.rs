//! Construction errors for grid models.

use thiserror::Error;

/// A grid description that cannot be turned into a [`WalkMask`](crate::WalkMask).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },

    #[error("walkability mask has {actual} cells, expected {expected}")]
    MaskLength { expected: usize, actual: usize },

    #[error("row {row} has {actual} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("unknown cell glyph {glyph:?} at ({x}, {y})")]
    UnknownGlyph { glyph: char, x: usize, y: usize },
}
