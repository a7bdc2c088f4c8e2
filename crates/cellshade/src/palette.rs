//! Fill color palette configuration

use cellshade_core::Color;
use serde::Deserialize;

use crate::action::Action;

/// The three preset fill colors.
///
/// The gray value varies across deployments (`#A9A9A9` and `#D3D3D3` are
/// both in use), so it is configuration, not a contract; the default is the
/// lighter variant. Deserializes from hex strings:
///
/// ```json
/// { "yellow": "#FFFF00", "orange": "#FFA500", "gray": "#A9A9A9" }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Palette {
    pub yellow: Color,
    pub orange: Color,
    pub gray: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            yellow: Color::YELLOW,
            orange: Color::ORANGE,
            gray: Color::LIGHT_GRAY,
        }
    }
}

impl Palette {
    /// The fill color for an action, or `None` for the clear action.
    pub fn color_for(&self, action: Action) -> Option<Color> {
        match action {
            Action::FillYellow => Some(self.yellow),
            Action::FillOrange => Some(self.orange),
            Action::FillGray => Some(self.gray),
            Action::ClearFill => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let palette = Palette::default();
        assert_eq!(palette.yellow.to_hex(), "#FFFF00");
        assert_eq!(palette.orange.to_hex(), "#FFA500");
        assert_eq!(palette.gray.to_hex(), "#D3D3D3");
        assert_eq!(palette.color_for(Action::ClearFill), None);
    }

    #[test]
    fn test_deserialize_partial_override() {
        let palette: Palette = serde_json::from_str(r##"{ "gray": "#A9A9A9" }"##).unwrap();
        assert_eq!(palette.gray, Color::DARK_GRAY);
        assert_eq!(palette.yellow, Color::YELLOW);
    }

    #[test]
    fn test_deserialize_rejects_unknown_field() {
        assert!(serde_json::from_str::<Palette>(r##"{ "green": "#00FF00" }"##).is_err());
    }
}
