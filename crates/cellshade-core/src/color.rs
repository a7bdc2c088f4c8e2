//! Color representation

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// An opaque RGB color.
///
/// Serializes to and from hex strings (`"#FFFF00"`), which is the form the
/// host object model and the palette configuration both use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Create an RGB color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse from a hex string (e.g., "#FFFF00" or "FFFF00")
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::InvalidColor(hex.to_string()));
        }

        let parse = |range| u8::from_str_radix(&digits[range], 16);
        let r = parse(0..2).map_err(|_| Error::InvalidColor(hex.to_string()))?;
        let g = parse(2..4).map_err(|_| Error::InvalidColor(hex.to_string()))?;
        let b = parse(4..6).map_err(|_| Error::InvalidColor(hex.to_string()))?;
        Ok(Self { r, g, b })
    }

    /// Convert to hex string with # prefix (e.g., "#FFFF00")
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    // Palette defaults
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const ORANGE: Color = Color::rgb(255, 165, 0);
    pub const LIGHT_GRAY: Color = Color::rgb(211, 211, 211);
    pub const DARK_GRAY: Color = Color::rgb(169, 169, 169);
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl TryFrom<String> for Color {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        Color::from_hex(&s)
    }
}

impl From<Color> for String {
    fn from(c: Color) -> String {
        c.to_hex()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_hex() {
        assert_eq!(Color::from_hex("#FFFF00").unwrap(), Color::rgb(255, 255, 0));
        assert_eq!(Color::from_hex("ffa500").unwrap(), Color::rgb(255, 165, 0));
        assert!(Color::from_hex("#FFF").is_err());
        assert!(Color::from_hex("#GGGGGG").is_err());
        assert!(Color::from_hex("").is_err());
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(Color::rgb(255, 255, 0).to_hex(), "#FFFF00");
        assert_eq!(Color::LIGHT_GRAY.to_hex(), "#D3D3D3");
        assert_eq!(Color::DARK_GRAY.to_hex(), "#A9A9A9");
    }

    #[test]
    fn test_serde_hex_round_trip() {
        let c: Color = serde_json::from_str("\"#FFA500\"").unwrap();
        assert_eq!(c, Color::ORANGE);
        assert_eq!(serde_json::to_string(&c).unwrap(), "\"#FFA500\"");
    }
}
