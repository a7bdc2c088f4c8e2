//! Fill/background state types

use std::fmt;

use crate::color::Color;

/// Fill state of a cell background.
///
/// This is the whole contract the ribbon commands operate on: either a solid
/// color or no fill at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FillState {
    /// No fill (transparent)
    #[default]
    None,

    /// Solid color fill
    Solid(Color),
}

impl FillState {
    /// Create a solid fill with the given color
    pub fn solid(color: Color) -> Self {
        FillState::Solid(color)
    }

    /// Check if this is "no fill"
    pub fn is_none(&self) -> bool {
        matches!(self, FillState::None)
    }
}

impl fmt::Display for FillState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FillState::None => write!(f, "none"),
            FillState::Solid(c) => write!(f, "{c}"),
        }
    }
}

/// Pattern fill types understood by the host.
///
/// The explicit `None` pattern doubles as the fallback clear technique when a
/// host rejects the direct clear operation on a selection handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PatternType {
    /// No pattern (clears the fill)
    #[default]
    None,
    /// Solid (100% foreground)
    Solid,
}
