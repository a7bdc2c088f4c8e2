//! Core value types for cellshade.
//!
//! This crate has no I/O and no host dependencies: it defines colors, fill
//! states, cell addresses, rectangular regions, and multi-region selections,
//! plus the parsing and validation rules for each.

pub mod address;
pub mod color;
pub mod error;
pub mod fill;
pub mod region;

pub use address::CellAddress;
pub use color::Color;
pub use error::{Error, Result};
pub use fill::{FillState, PatternType};
pub use region::{Region, Selection};

/// Maximum number of rows in a sheet (Excel limit)
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in a sheet (Excel limit, A-XFD)
pub const MAX_COLS: u16 = 16_384;
