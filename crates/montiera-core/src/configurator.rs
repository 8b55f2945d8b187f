//! Showroom configurator: the single owner of a session's garment selection.
//!
//! The [`Configurator`] is the only way a [`Selection`] changes. Every
//! operation validates before it mutates, so a rejected call leaves the
//! selection exactly as it was, and every observable selection names colors
//! that exist in the registry.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::catalog::presets::GarmentBundle;
use crate::color::{ColorCategory, ColorValue};
use crate::error::LookupError;

/// Which preset, if any, the current selection still matches by origin.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "Option<String>")]
pub enum PresetSelection {
    /// The selection was set wholesale from this preset and not edited since.
    Named(String),
    /// At least one color was changed by hand after the last preset.
    Custom,
}

impl PresetSelection {
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Named(name) => Some(name),
            Self::Custom => None,
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, Self::Custom)
    }
}

impl From<Option<String>> for PresetSelection {
    fn from(value: Option<String>) -> Self {
        value.map_or(Self::Custom, Self::Named)
    }
}

impl From<PresetSelection> for Option<String> {
    fn from(value: PresetSelection) -> Self {
        match value {
            PresetSelection::Named(name) => Some(name),
            PresetSelection::Custom => None,
        }
    }
}

/// Read-only snapshot of a configurator's state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selection {
    pub preset: PresetSelection,
    pub suit: String,
    pub shirt: String,
    pub accent: String,
}

impl Selection {
    fn from_preset(name: &str, bundle: &GarmentBundle) -> Self {
        Self {
            preset: PresetSelection::Named(name.to_string()),
            suit: bundle.suit.clone(),
            shirt: bundle.shirt.clone(),
            accent: bundle.accent.clone(),
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

    fn name_for_mut(&mut self, category: ColorCategory) -> &mut String {
        match category {
            ColorCategory::Suit => &mut self.suit,
            ColorCategory::Shirt => &mut self.shirt,
            ColorCategory::Accent => &mut self.accent,
        }
    }
}

/// The three concrete colors a renderer needs to redraw the figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedColors {
    pub suit: ColorValue,
    pub shirt: ColorValue,
    pub accent: ColorValue,
}

impl ResolvedColors {
    pub fn get(&self, category: ColorCategory) -> ColorValue {
        match category {
            ColorCategory::Suit => self.suit,
            ColorCategory::Shirt => self.shirt,
            ColorCategory::Accent => self.accent,
        }
    }

    fn get_mut(&mut self, category: ColorCategory) -> &mut ColorValue {
        match category {
            ColorCategory::Suit => &mut self.suit,
            ColorCategory::Shirt => &mut self.shirt,
            ColorCategory::Accent => &mut self.accent,
        }
    }

    fn resolve(catalog: &Catalog, bundle: &GarmentBundle) -> Result<Self, LookupError> {
        let registry = &catalog.registry;
        Ok(Self {
            suit: registry.resolve(ColorCategory::Suit, &bundle.suit)?,
            shirt: registry.resolve(ColorCategory::Shirt, &bundle.shirt)?,
            accent: registry.resolve(ColorCategory::Accent, &bundle.accent)?,
        })
    }
}

/// Receives the new state after every successful configurator mutation.
///
/// Called synchronously, before the mutating call returns.
pub trait SelectionObserver {
    fn selection_changed(&mut self, selection: &Selection, colors: &ResolvedColors);
}

impl<F> SelectionObserver for F
where
    F: FnMut(&Selection, &ResolvedColors),
{
    fn selection_changed(&mut self, selection: &Selection, colors: &ResolvedColors) {
        self(selection, colors)
    }
}

/// Holds one session's [`Selection`] and mediates every change to it.
pub struct Configurator {
    catalog: Arc<Catalog>,
    default_preset: String,
    selection: Selection,
    colors: ResolvedColors,
    observers: Vec<Box<dyn SelectionObserver>>,
}

impl Configurator {
    /// Start a session on `default_preset`, which is also what
    /// [`reset`](Self::reset) returns to.
    pub fn create(catalog: Arc<Catalog>, default_preset: &str) -> Result<Self, LookupError> {
        let bundle = catalog.presets.get(default_preset)?;
        let colors = ResolvedColors::resolve(&catalog, bundle)?;
        let selection = Selection::from_preset(default_preset, bundle);
        tracing::debug!(preset = default_preset, "configurator created");
        Ok(Self {
            default_preset: default_preset.to_string(),
            selection,
            colors,
            observers: Vec::new(),
            catalog,
        })
    }

    /// Replace all three colors with `name`'s bundle.
    pub fn apply_preset(&mut self, name: &str) -> Result<(), LookupError> {
        let resolved = self
            .catalog
            .presets
            .get(name)
            .and_then(|bundle| {
                ResolvedColors::resolve(&self.catalog, bundle)
                    .map(|colors| (Selection::from_preset(name, bundle), colors))
            });
        let (selection, colors) = match resolved {
            Ok(next) => next,
            Err(err) => {
                tracing::warn!(preset = name, "rejected preset: {err}");
                return Err(err);
            }
        };

        self.selection = selection;
        self.colors = colors;
        tracing::debug!(preset = name, "preset applied");
        self.notify();
        Ok(())
    }

    /// Change one category's color. The selection becomes
    /// [`PresetSelection::Custom`], even if it now equals some preset.
    pub fn set_color(&mut self, category: ColorCategory, name: &str) -> Result<(), LookupError> {
        let value = match self.catalog.registry.resolve(category, name) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(%category, color = name, "rejected color: {err}");
                return Err(err);
            }
        };

        *self.selection.name_for_mut(category) = name.to_string();
        *self.colors.get_mut(category) = value;
        self.selection.preset = PresetSelection::Custom;
        tracing::debug!(%category, color = name, "color set");
        self.notify();
        Ok(())
    }

    /// Return to the preset this configurator was created with.
    pub fn reset(&mut self) -> Result<(), LookupError> {
        let default_preset = self.default_preset.clone();
        self.apply_preset(&default_preset)
    }

    /// Snapshot of the current selection.
    pub fn current(&self) -> Selection {
        self.selection.clone()
    }

    /// The current selection resolved to concrete colors.
    pub fn resolved(&self) -> ResolvedColors {
        self.colors
    }

    pub fn default_preset(&self) -> &str {
        &self.default_preset
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Register an observer. Observers fire in subscription order.
    pub fn subscribe(&mut self, observer: Box<dyn SelectionObserver>) {
        self.observers.push(observer);
    }

    fn notify(&mut self) {
        for observer in &mut self.observers {
            observer.selection_changed(&self.selection, &self.colors);
        }
    }
}

impl fmt::Debug for Configurator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Configurator")
            .field("default_preset", &self.default_preset)
            .field("selection", &self.selection)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}
