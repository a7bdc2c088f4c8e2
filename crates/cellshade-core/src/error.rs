//! Error types for cellshade-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in cellshade-core
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid cell address format
    #[error("Invalid cell address: {0}")]
    InvalidAddress(String),

    /// Invalid cell range format
    #[error("Invalid cell range: {0}")]
    InvalidRange(String),

    /// Invalid color format
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// Row index out of bounds
    #[error("Row index {0} out of bounds (max: {1})")]
    RowOutOfBounds(u32, u32),

    /// Column index out of bounds
    #[error("Column index {0} out of bounds (max: {1})")]
    ColumnOutOfBounds(u16, u16),

    /// A selection must contain at least one region
    #[error("Selection is empty")]
    EmptySelection,

    /// Regions in a selection must be pairwise disjoint
    #[error("Overlapping regions in selection: {0} and {1}")]
    OverlappingRegions(String, String),
}
