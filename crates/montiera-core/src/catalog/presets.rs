//! Named bundles selecting one color per garment category.

use serde::{Deserialize, Serialize};

use crate::color::ColorCategory;
use crate::color::registry::ColorRegistry;
use crate::error::{CatalogError, LookupError};

/// `(name, suit, shirt, accent)` for the house presets.
const HOUSE_PRESETS: &[(&str, &str, &str, &str)] = &[
    ("Business", "Navy", "White", "Black"),
    ("Ceremony", "Black", "Ivory", "Black"),
    ("RedCarpet", "Burgundy", "Black", "Ivory"),
];

/// One color name per category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GarmentBundle {
    pub suit: String,
    pub shirt: String,
    pub accent: String,
}

impl GarmentBundle {
    pub fn new(
        suit: impl Into<String>,
        shirt: impl Into<String>,
        accent: impl Into<String>,
    ) -> Self {
        Self {
            suit: suit.into(),
            shirt: shirt.into(),
            accent: accent.into(),
        }
    }

    /// The color name chosen for `category`.
    pub fn name_for(&self, category: ColorCategory) -> &str {
        match category {
            ColorCategory::Suit => &self.suit,
            ColorCategory::Shirt => &self.shirt,
            ColorCategory::Accent => &self.accent,
        }
    }
}

/// A named [`GarmentBundle`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preset {
    pub name: String,
    #[serde(flatten)]
    pub bundle: GarmentBundle,
}

impl Preset {
    pub fn new(name: impl Into<String>, bundle: GarmentBundle) -> Self {
        Self {
            name: name.into(),
            bundle,
        }
    }
}

/// Read-only, ordered set of presets whose every color name is known to the
/// registry it was validated against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresetCatalog {
    presets: Vec<Preset>,
}

impl PresetCatalog {
    /// Validate `presets` against `registry`, preserving their order.
    pub fn new<I>(presets: I, registry: &ColorRegistry) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = Preset>,
    {
        let mut validated: Vec<Preset> = Vec::new();
        for preset in presets {
            if validated.iter().any(|p| p.name == preset.name) {
                return Err(CatalogError::DuplicatePresetName(preset.name));
            }
            for &category in ColorCategory::all() {
                let name = preset.bundle.name_for(category);
                if !registry.is_valid(category, name) {
                    return Err(CatalogError::InvalidPresetDefinition {
                        preset: preset.name.clone(),
                        category,
                        name: name.to_string(),
                    });
                }
            }
            validated.push(preset);
        }

        if validated.is_empty() {
            return Err(CatalogError::EmptyPresetCatalog);
        }

        tracing::debug!(count = validated.len(), "preset catalog validated");
        Ok(Self { presets: validated })
    }

    /// The house presets: Business, Ceremony, RedCarpet.
    pub fn builtin(registry: &ColorRegistry) -> Result<Self, CatalogError> {
        Self::new(
            HOUSE_PRESETS
                .iter()
                .map(|&(name, suit, shirt, accent)| {
                    Preset::new(name, GarmentBundle::new(suit, shirt, accent))
                }),
            registry,
        )
    }

    /// The bundle registered under `name`.
    pub fn get(&self, name: &str) -> Result<&GarmentBundle, LookupError> {
        self.presets
            .iter()
            .find(|preset| preset.name == name)
            .map(|preset| &preset.bundle)
            .ok_or_else(|| LookupError::UnknownPresetName(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.presets.iter().any(|preset| preset.name == name)
    }

    /// Preset names in definition order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.presets.iter().map(|preset| preset.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Preset> + '_ {
        self.presets.iter()
    }

    /// First preset in definition order. Non-empty by construction.
    pub fn first_name(&self) -> &str {
        self.presets
            .first()
            .map(|preset| preset.name.as_str())
            .unwrap_or_default()
    }
}
