//! IPC message contracts between the showroom UI and the configurator.
//!
//! Both enums use `#[serde(tag = "type", content = "data")]`, so a message
//! reads as `{"type": "SetColor", "data": {"category": "accent", "name": "Gold"}}`.

use serde::{Deserialize, Serialize};

use montiera_core::{Catalog, ColorCategory, ResolvedColors, Selection};

/// Messages from the UI to the showroom.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum UiToShowroom {
    /// Request the option lists and current selection after the UI connects.
    RequestState,

    /// A preset button was pressed.
    ApplyPreset {
        /// Preset name as listed in [`ShowroomOptions::presets`].
        name: String,
    },

    /// A swatch was pressed.
    SetColor {
        category: ColorCategory,
        name: String,
    },

    /// Return to the session's starting preset.
    Reset,
}

/// Messages from the showroom to the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ShowroomToUi {
    /// Full state sync, sent in reply to [`UiToShowroom::RequestState`].
    Initialize {
        options: ShowroomOptions,
        selection: Selection,
        colors: ResolvedColors,
    },

    /// The selection changed; redraw with `colors`.
    SelectionChanged {
        selection: Selection,
        colors: ResolvedColors,
    },

    /// The request was rejected. The selection is unchanged.
    Error {
        message: String,
    },
}

/// One selectable swatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwatchOption {
    pub name: String,
    /// `#rrggbb`.
    pub hex: String,
}

/// Swatches offered for one category, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySwatches {
    pub category: ColorCategory,
    pub label: String,
    pub swatches: Vec<SwatchOption>,
}

/// Everything the UI needs to build its preset buttons and swatch grids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowroomOptions {
    pub presets: Vec<String>,
    pub categories: Vec<CategorySwatches>,
}

impl ShowroomOptions {
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let categories = ColorCategory::all()
            .iter()
            .map(|&category| CategorySwatches {
                category,
                label: category.label().to_string(),
                swatches: catalog
                    .registry
                    .entries_in_category(category)
                    .iter()
                    .map(|entry| SwatchOption {
                        name: entry.name.clone(),
                        hex: entry.value.to_hex(),
                    })
                    .collect(),
            })
            .collect();

        Self {
            presets: catalog.presets.names().map(str::to_string).collect(),
            categories,
        }
    }
}
