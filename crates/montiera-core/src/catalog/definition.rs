//! Serialized catalog description, loadable from JSON at startup.

use serde::{Deserialize, Serialize};

use crate::catalog::presets::{GarmentBundle, Preset};
use crate::color::registry::ColorEntry;
use crate::color::{ColorCategory, ColorValue};
use crate::error::CatalogError;

/// A swatch as written in a catalog file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwatchDefinition {
    pub name: String,
    /// `#rrggbb`; validated when the catalog is built.
    pub hex: String,
}

impl From<&ColorEntry> for SwatchDefinition {
    fn from(entry: &ColorEntry) -> Self {
        Self {
            name: entry.name.clone(),
            hex: entry.value.to_hex(),
        }
    }
}

/// A preset as written in a catalog file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetDefinition {
    pub name: String,
    pub suit: String,
    pub shirt: String,
    pub accent: String,
}

impl PresetDefinition {
    pub fn into_preset(self) -> Preset {
        Preset::new(self.name, GarmentBundle::new(self.suit, self.shirt, self.accent))
    }
}

impl From<Preset> for PresetDefinition {
    fn from(preset: Preset) -> Self {
        Self {
            name: preset.name,
            suit: preset.bundle.suit,
            shirt: preset.bundle.shirt,
            accent: preset.bundle.accent,
        }
    }
}

/// Whole-catalog document. Array order is definition order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogDefinition {
    pub suit: Vec<SwatchDefinition>,
    pub shirt: Vec<SwatchDefinition>,
    pub accent: Vec<SwatchDefinition>,
    pub presets: Vec<PresetDefinition>,
}

impl CatalogDefinition {
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, CatalogError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse every swatch into a registry entry, tagged with its category.
    pub(crate) fn color_entries(&self) -> Result<Vec<(ColorCategory, ColorEntry)>, CatalogError> {
        let groups = [
            (ColorCategory::Suit, &self.suit),
            (ColorCategory::Shirt, &self.shirt),
            (ColorCategory::Accent, &self.accent),
        ];
        let mut entries = Vec::new();
        for (category, swatches) in groups {
            for swatch in swatches {
                let value = ColorValue::from_hex(&swatch.hex)?;
                entries.push((category, ColorEntry::new(swatch.name.clone(), value)));
            }
        }
        Ok(entries)
    }
}
