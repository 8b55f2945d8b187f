//! Montiera Core — domain layer for the tailoring showroom.
//!
//! This crate owns the garment color catalogs, the preset bundles built on
//! them, and the [`Configurator`] that turns a visitor's choices into the
//! three resolved colors the scene renderer draws with. No I/O, no GPU or
//! framework dependencies.

pub mod catalog;
pub mod color;
pub mod configurator;
pub mod error;
pub mod scene;

// Re-exports for convenience.
pub use catalog::definition::CatalogDefinition;
pub use catalog::presets::{GarmentBundle, Preset, PresetCatalog};
pub use catalog::Catalog;
pub use color::registry::{ColorEntry, ColorRegistry};
pub use color::{ColorCategory, ColorValue};
pub use configurator::{
    Configurator, PresetSelection, ResolvedColors, Selection, SelectionObserver,
};
pub use error::{CatalogError, LookupError};
pub use scene::materials::{FabricFinish, classify_material};
pub use scene::uniforms::{GarmentMaterial, GarmentUniforms};
