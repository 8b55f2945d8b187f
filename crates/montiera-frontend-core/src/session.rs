//! One showroom visit: a configurator plus the message dispatch around it.

use std::sync::Arc;

use montiera_core::{Catalog, Configurator, LookupError, SelectionObserver};

use crate::FrontendError;
use crate::ipc::{ShowroomOptions, ShowroomToUi, UiToShowroom};

/// Applies UI messages to a [`Configurator`] and builds the replies.
///
/// Created per page view and dropped when the visitor leaves; nothing is
/// persisted.
#[derive(Debug)]
pub struct ShowroomSession {
    configurator: Configurator,
    options: ShowroomOptions,
}

impl ShowroomSession {
    /// Start a session on `default_preset`, or the catalog's first preset.
    pub fn new(catalog: Arc<Catalog>, default_preset: Option<&str>) -> Result<Self, LookupError> {
        let preset = default_preset.unwrap_or_else(|| catalog.default_preset()).to_string();
        let options = ShowroomOptions::from_catalog(&catalog);
        let configurator = Configurator::create(catalog, &preset)?;
        tracing::info!(preset = %preset, "showroom session started");
        Ok(Self {
            configurator,
            options,
        })
    }

    /// Attach a renderer (or any observer) to the session's configurator.
    pub fn subscribe(&mut self, observer: Box<dyn SelectionObserver>) {
        self.configurator.subscribe(observer);
    }

    pub fn configurator(&self) -> &Configurator {
        &self.configurator
    }

    /// Apply one message and produce the reply.
    ///
    /// Rejected lookups become [`ShowroomToUi::Error`]; the selection is left
    /// as it was.
    pub fn handle(&mut self, message: UiToShowroom) -> ShowroomToUi {
        let result = match message {
            UiToShowroom::RequestState => {
                return ShowroomToUi::Initialize {
                    options: self.options.clone(),
                    selection: self.configurator.current(),
                    colors: self.configurator.resolved(),
                };
            }
            UiToShowroom::ApplyPreset { name } => self.configurator.apply_preset(&name),
            UiToShowroom::SetColor { category, name } => {
                self.configurator.set_color(category, &name)
            }
            UiToShowroom::Reset => self.configurator.reset(),
        };

        match result {
            Ok(()) => ShowroomToUi::SelectionChanged {
                selection: self.configurator.current(),
                colors: self.configurator.resolved(),
            },
            Err(err) => ShowroomToUi::Error {
                message: err.to_string(),
            },
        }
    }

    /// [`handle`](Self::handle) over serialized messages.
    pub fn handle_json(&mut self, json: &str) -> Result<String, FrontendError> {
        let message: UiToShowroom = serde_json::from_str(json).map_err(FrontendError::Decode)?;
        tracing::trace!(?message, "ui message");
        let reply = self.handle(message);
        serde_json::to_string(&reply).map_err(FrontendError::Encode)
    }
}

#[cfg(test)]
mod tests {
    use montiera_core::{ColorCategory, PresetSelection};

    use super::*;

    fn session() -> ShowroomSession {
        ShowroomSession::new(Arc::new(Catalog::builtin().unwrap()), None).unwrap()
    }

    #[test]
    fn test_new_defaults_to_first_preset() {
        let session = session();
        assert_eq!(
            session.configurator().current().preset,
            PresetSelection::Named("Business".into())
        );
    }

    #[test]
    fn test_new_with_unknown_preset_fails() {
        let catalog = Arc::new(Catalog::builtin().unwrap());
        assert!(ShowroomSession::new(catalog, Some("Casual")).is_err());
    }

    #[test]
    fn test_rejected_swatch_becomes_error_reply() {
        let mut session = session();
        let before = session.configurator().current();
        let reply = session.handle(UiToShowroom::SetColor {
            category: ColorCategory::Shirt,
            name: "Gold".into(),
        });
        assert_eq!(
            reply,
            ShowroomToUi::Error {
                message: "unknown shirt color \"Gold\"".into()
            }
        );
        assert_eq!(session.configurator().current(), before);
    }

    #[test]
    fn test_malformed_json_is_a_decode_error() {
        let mut session = session();
        assert!(matches!(
            session.handle_json("{\"type\":\"Dance\"}"),
            Err(FrontendError::Decode(_))
        ));
    }
}
