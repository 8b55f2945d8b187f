//! The process-lifetime pair of color registry and preset catalog.
//!
//! A [`Catalog`] is built once at startup, validated as a whole, and then
//! shared read-only by every showroom session through an `Arc`.

pub mod definition;
pub mod presets;

use crate::color::ColorCategory;
use crate::color::registry::ColorRegistry;
use crate::error::CatalogError;
use definition::{CatalogDefinition, PresetDefinition, SwatchDefinition};
use presets::{Preset, PresetCatalog};

/// Validated color registry plus the presets that reference it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    pub registry: ColorRegistry,
    pub presets: PresetCatalog,
}

impl Catalog {
    /// Pair an existing registry with presets validated against it.
    pub fn new<I>(registry: ColorRegistry, presets: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = Preset>,
    {
        let presets = PresetCatalog::new(presets, &registry)?;
        Ok(Self { registry, presets })
    }

    /// The house swatches and presets.
    pub fn builtin() -> Result<Self, CatalogError> {
        let registry = ColorRegistry::builtin()?;
        let presets = PresetCatalog::builtin(&registry)?;
        Ok(Self { registry, presets })
    }

    /// Build and validate a catalog from its serialized description.
    pub fn from_definition(definition: CatalogDefinition) -> Result<Self, CatalogError> {
        let registry = ColorRegistry::new(definition.color_entries()?)?;
        let presets = definition
            .presets
            .into_iter()
            .map(PresetDefinition::into_preset);
        Self::new(registry, presets)
    }

    /// Parse a JSON catalog document.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Self::from_definition(CatalogDefinition::from_json(json)?)
    }

    /// Describe this catalog in its serialized form.
    pub fn to_definition(&self) -> CatalogDefinition {
        let swatches = |category: ColorCategory| -> Vec<SwatchDefinition> {
            self.registry
                .entries_in_category(category)
                .iter()
                .map(SwatchDefinition::from)
                .collect()
        };
        CatalogDefinition {
            suit: swatches(ColorCategory::Suit),
            shirt: swatches(ColorCategory::Shirt),
            accent: swatches(ColorCategory::Accent),
            presets: self.presets.iter().cloned().map(PresetDefinition::from).collect(),
        }
    }

    /// The preset a new session starts from when none is requested.
    pub fn default_preset(&self) -> &str {
        self.presets.first_name()
    }
}
