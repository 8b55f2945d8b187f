//! Material-name targeting for imported figure meshes.
//!
//! Figure assets name their materials freely ("Jacket_Wool", "tie.001",
//! "Skin_Hands"). These hints decide which garment color, if any, a material
//! is tinted with.

use crate::color::{ColorCategory, ColorValue};
use crate::configurator::ResolvedColors;

const SUIT_HINTS: &[&str] = &[
    "suit", "jacket", "blazer", "coat", "tux", "tuxedo", "pants", "trousers", "waistcoat", "vest",
];
const SHIRT_HINTS: &[&str] = &["shirt", "dressshirt", "shirt_body", "shirtbody", "collar", "cuff"];
const ACCENT_HINTS: &[&str] = &[
    "tie", "necktie", "bow", "bowtie", "pocket", "square", "pocketsquare", "kerchief",
];
/// Never tinted, even when another hint also matches ("shirt_button").
const EXCLUDE_HINTS: &[&str] = &["skin", "hand", "hair", "shoe", "metal", "button", "eye"];

/// Garment category whose color `material_name` should take, if any.
///
/// Matching is a case-insensitive substring test. Exclusions win, then the
/// most specific garment: accent before shirt before suit, so "jacket_pocket"
/// is an accent.
pub fn classify_material(material_name: &str) -> Option<ColorCategory> {
    let name = material_name.to_ascii_lowercase();
    let hit = |hints: &[&str]| hints.iter().any(|hint| name.contains(hint));

    if hit(EXCLUDE_HINTS) {
        return None;
    }
    [
        (ColorCategory::Accent, ACCENT_HINTS),
        (ColorCategory::Shirt, SHIRT_HINTS),
        (ColorCategory::Suit, SUIT_HINTS),
    ]
    .into_iter()
    .find(|(_, hints)| hit(*hints))
    .map(|(category, _)| category)
}

/// Tint for `material_name` under the current colors, or `None` to keep the
/// asset's own color.
pub fn tint_for_material(colors: &ResolvedColors, material_name: &str) -> Option<ColorValue> {
    classify_material(material_name).map(|category| colors.get(category))
}

/// PBR surface response of a garment's cloth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FabricFinish {
    pub roughness: f32,
    pub metalness: f32,
}

impl FabricFinish {
    /// Wool suiting has a slight sheen, poplin shirting is smooth, silk
    /// accents catch the most light.
    pub const fn for_category(category: ColorCategory) -> Self {
        match category {
            ColorCategory::Suit => Self {
                roughness: 0.3,
                metalness: 0.05,
            },
            ColorCategory::Shirt => Self {
                roughness: 0.2,
                metalness: 0.0,
            },
            ColorCategory::Accent => Self {
                roughness: 0.4,
                metalness: 0.1,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classifies_common_material_names() {
        assert_eq!(classify_material("Jacket_Wool"), Some(ColorCategory::Suit));
        assert_eq!(classify_material("TROUSERS"), Some(ColorCategory::Suit));
        assert_eq!(classify_material("shirt_body.001"), Some(ColorCategory::Shirt));
        assert_eq!(classify_material("Collar"), Some(ColorCategory::Shirt));
        assert_eq!(classify_material("NeckTie"), Some(ColorCategory::Accent));
        assert_eq!(classify_material("PocketSquare"), Some(ColorCategory::Accent));
    }

    #[test]
    fn test_exclusions_win() {
        assert_eq!(classify_material("Skin_Hands"), None);
        assert_eq!(classify_material("shirt_button"), None);
        assert_eq!(classify_material("suit_metal_buckle"), None);
    }

    #[test]
    fn test_accent_beats_suit() {
        assert_eq!(classify_material("jacket_pocket"), Some(ColorCategory::Accent));
    }

    #[test]
    fn test_unknown_material_is_untouched() {
        assert_eq!(classify_material("Floor"), None);
        assert_eq!(classify_material(""), None);
    }

    #[test]
    fn test_tint_uses_resolved_color() {
        let colors = ResolvedColors {
            suit: ColorValue::from_u32(0x0b1f3a),
            shirt: ColorValue::from_u32(0xf6f6f6),
            accent: ColorValue::from_u32(0xc6a664),
        };
        assert_eq!(tint_for_material(&colors, "Blazer"), Some(colors.suit));
        assert_eq!(tint_for_material(&colors, "bowtie"), Some(colors.accent));
        assert_eq!(tint_for_material(&colors, "Hair"), None);
    }
}
