//! Error types shared across the catalog and configurator layers.

use crate::color::ColorCategory;

/// Integrity failures detected while building the catalogs.
///
/// These are fatal: a showroom must not start on a catalog with a dangling
/// or malformed entry.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("invalid color value {value:?}: expected #rrggbb")]
    InvalidColorValue { value: String },

    #[error("{category} catalog has no entries")]
    EmptyCategory { category: ColorCategory },

    #[error("duplicate {category} color name {name:?}")]
    DuplicateColorName { category: ColorCategory, name: String },

    #[error("preset {preset:?} references unknown {category} color {name:?}")]
    InvalidPresetDefinition {
        preset: String,
        category: ColorCategory,
        name: String,
    },

    #[error("duplicate preset name {0:?}")]
    DuplicatePresetName(String),

    #[error("preset catalog is empty")]
    EmptyPresetCatalog,

    #[error("malformed catalog definition: {0}")]
    Definition(#[from] serde_json::Error),
}

/// Runtime lookup failures. Recoverable: the rejected operation leaves the
/// selection untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("unknown {category} color {name:?}")]
    UnknownColorName { category: ColorCategory, name: String },

    #[error("unknown preset {0:?}")]
    UnknownPresetName(String),
}
