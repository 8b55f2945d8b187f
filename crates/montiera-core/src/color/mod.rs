//! Garment color categories and the color value type they map to.

pub mod registry;

use std::fmt;
use std::str::FromStr;

use palette::{LinSrgb, Srgb};
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// The three independently colored garment groups on the showroom figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorCategory {
    /// Jacket and trousers.
    Suit,
    /// Shirt body, collar, and cuffs.
    Shirt,
    /// Tie and pocket square.
    Accent,
}

impl ColorCategory {
    /// Human-readable label for swatch group headings.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Suit => "Suit",
            Self::Shirt => "Shirt",
            Self::Accent => "Accent",
        }
    }

    /// Every category, in display order.
    pub fn all() -> &'static [Self] {
        const ALL: [ColorCategory; 3] = [
            ColorCategory::Suit,
            ColorCategory::Shirt,
            ColorCategory::Accent,
        ];
        &ALL
    }

    /// Dense index used for per-category storage.
    pub(crate) const fn index(self) -> usize {
        match self {
            Self::Suit => 0,
            Self::Shirt => 1,
            Self::Accent => 2,
        }
    }
}

impl fmt::Display for ColorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Suit => "suit",
            Self::Shirt => "shirt",
            Self::Accent => "accent",
        };
        f.write_str(name)
    }
}

/// An 8-bit sRGB color, serialized as a `#rrggbb` hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ColorValue(Srgb<u8>);

impl ColorValue {
    /// Build from a packed `0xRRGGBB` literal.
    pub const fn from_u32(rgb: u32) -> Self {
        Self(Srgb::new(
            ((rgb >> 16) & 0xff) as u8,
            ((rgb >> 8) & 0xff) as u8,
            (rgb & 0xff) as u8,
        ))
    }

    /// Parse `#rrggbb` or `rrggbb`, case-insensitive.
    ///
    /// Short `#rgb` forms are rejected so catalog files stay unambiguous.
    pub fn from_hex(value: &str) -> Result<Self, CatalogError> {
        let digits = value.strip_prefix('#').unwrap_or(value);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(CatalogError::InvalidColorValue {
                value: value.to_string(),
            });
        }
        Srgb::<u8>::from_str(digits)
            .map(Self)
            .map_err(|_| CatalogError::InvalidColorValue {
                value: value.to_string(),
            })
    }

    /// Lowercase `#rrggbb` form.
    pub fn to_hex(&self) -> String {
        format!(
            "#{:02x}{:02x}{:02x}",
            self.0.red, self.0.green, self.0.blue
        )
    }

    /// The encoded 8-bit components.
    pub fn to_rgb8(&self) -> [u8; 3] {
        [self.0.red, self.0.green, self.0.blue]
    }

    /// Linear-light RGBA (alpha 1.0), the form PBR materials expect.
    pub fn to_linear_rgba(&self) -> [f32; 4] {
        let linear: LinSrgb<f32> = self.0.into_format::<f32>().into_linear();
        [linear.red, linear.green, linear.blue, 1.0]
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl TryFrom<String> for ColorValue {
    type Error = CatalogError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<ColorValue> for String {
    fn from(value: ColorValue) -> Self {
        value.to_hex()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    #[test]
    fn test_from_hex_accepts_with_and_without_hash() {
        let a = ColorValue::from_hex("#0b1f3a").unwrap();
        let b = ColorValue::from_hex("0B1F3A").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.to_rgb8(), [0x0b, 0x1f, 0x3a]);
    }

    #[test]
    fn test_from_hex_rejects_malformed_input() {
        for bad in ["", "#", "#fff", "#0b1f3", "#0b1f3a0", "#0g1f3a", "navy"] {
            assert!(
                matches!(
                    ColorValue::from_hex(bad),
                    Err(CatalogError::InvalidColorValue { .. })
                ),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_to_hex_is_lowercase_and_zero_padded() {
        assert_eq!(ColorValue::from_u32(0xC6A664).to_hex(), "#c6a664");
        assert_eq!(ColorValue::from_u32(0x000a0b).to_hex(), "#000a0b");
    }

    #[test]
    fn test_linear_conversion_endpoints() {
        let black = ColorValue::from_u32(0x000000).to_linear_rgba();
        let white = ColorValue::from_u32(0xffffff).to_linear_rgba();
        for c in 0..3 {
            assert!(black[c].abs() < EPSILON);
            assert!((white[c] - 1.0).abs() < EPSILON);
        }
        assert_eq!(black[3], 1.0);
    }

    #[test]
    fn test_linear_conversion_darkens_midtones() {
        // sRGB 0x80 decodes to roughly 0.2159 linear.
        let mid = ColorValue::from_u32(0x808080).to_linear_rgba();
        assert!((mid[0] - 0.2159).abs() < 1e-3, "got {}", mid[0]);
    }

    #[test]
    fn test_serde_uses_hex_string() {
        let value = ColorValue::from_u32(0x4a1f2a);
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, "\"#4a1f2a\"");
        let back: ColorValue = serde_json::from_str(&json).unwrap();
        assert_eq!(back, value);
        assert!(serde_json::from_str::<ColorValue>("\"burgundy\"").is_err());
    }

    #[test]
    fn test_category_order_and_labels() {
        let labels: Vec<_> = ColorCategory::all().iter().map(|c| c.label()).collect();
        assert_eq!(labels, ["Suit", "Shirt", "Accent"]);
        assert_eq!(ColorCategory::Accent.to_string(), "accent");
        assert_eq!(
            serde_json::to_string(&ColorCategory::Shirt).unwrap(),
            "\"shirt\""
        );
    }
}
