//! Closed per-category catalogs of named garment colors.

use serde::Serialize;

use crate::color::{ColorCategory, ColorValue};
use crate::error::{CatalogError, LookupError};

const SUIT_SWATCHES: &[(&str, u32)] = &[
    ("Navy", 0x0b1f3a),
    ("Charcoal", 0x232323),
    ("Black", 0x0a0a0a),
    ("Ivory", 0xd1d1c8),
    ("Burgundy", 0x4a1f2a),
    ("Forest", 0x0f4024),
];

const SHIRT_SWATCHES: &[(&str, u32)] = &[
    ("White", 0xf6f6f6),
    ("Ivory", 0xe9e9e0),
    ("Black", 0x0a0a0a),
];

const ACCENT_SWATCHES: &[(&str, u32)] = &[
    ("Black", 0x0a0a0a),
    ("Ivory", 0xe9e9e0),
    ("Burgundy", 0x4a1f2a),
    ("Gold", 0xc6a664),
];

/// A named color within one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorEntry {
    /// Display name, unique within its category.
    pub name: String,
    /// The swatch color.
    pub value: ColorValue,
}

impl ColorEntry {
    pub fn new(name: impl Into<String>, value: ColorValue) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Read-only color catalogs, one ordered list per [`ColorCategory`].
///
/// Built once at startup; every category is guaranteed non-empty and free of
/// duplicate names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorRegistry {
    categories: [Vec<ColorEntry>; 3],
}

impl ColorRegistry {
    /// Build a registry, preserving the order entries are given in.
    pub fn new<I>(entries: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = (ColorCategory, ColorEntry)>,
    {
        let mut categories: [Vec<ColorEntry>; 3] = Default::default();
        for (category, entry) in entries {
            let slot = &mut categories[category.index()];
            if slot.iter().any(|existing| existing.name == entry.name) {
                return Err(CatalogError::DuplicateColorName {
                    category,
                    name: entry.name,
                });
            }
            slot.push(entry);
        }

        for &category in ColorCategory::all() {
            if categories[category.index()].is_empty() {
                return Err(CatalogError::EmptyCategory { category });
            }
        }

        Ok(Self { categories })
    }

    /// The house swatch catalog.
    pub fn builtin() -> Result<Self, CatalogError> {
        let tables = [
            (ColorCategory::Suit, SUIT_SWATCHES),
            (ColorCategory::Shirt, SHIRT_SWATCHES),
            (ColorCategory::Accent, ACCENT_SWATCHES),
        ];
        Self::new(tables.into_iter().flat_map(|(category, swatches)| {
            swatches
                .iter()
                .map(move |&(name, rgb)| (category, ColorEntry::new(name, ColorValue::from_u32(rgb))))
        }))
    }

    /// Look up the color registered as `name` in `category`.
    pub fn resolve(&self, category: ColorCategory, name: &str) -> Result<ColorValue, LookupError> {
        self.entries_in_category(category)
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.value)
            .ok_or_else(|| LookupError::UnknownColorName {
                category,
                name: name.to_string(),
            })
    }

    /// Whether `name` is registered in `category`. Exact, case-sensitive match.
    pub fn is_valid(&self, category: ColorCategory, name: &str) -> bool {
        self.entries_in_category(category)
            .iter()
            .any(|entry| entry.name == name)
    }

    /// Registered names in definition order.
    pub fn names_in_category(&self, category: ColorCategory) -> impl Iterator<Item = &str> + '_ {
        self.entries_in_category(category)
            .iter()
            .map(|entry| entry.name.as_str())
    }

    /// Registered entries in definition order, for swatch rendering.
    pub fn entries_in_category(&self, category: ColorCategory) -> &[ColorEntry] {
        &self.categories[category.index()]
    }
}
