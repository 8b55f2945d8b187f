//! Frontend contracts for the Montiera showroom.
//!
//! Defines the JSON messages exchanged between a showroom UI and the
//! configurator, and the [`ShowroomSession`] that applies them. Transport is
//! left to the embedding shell; everything here works on strings.

pub mod ipc;
pub mod session;

pub use ipc::{CategorySwatches, ShowroomOptions, ShowroomToUi, SwatchOption, UiToShowroom};
pub use session::ShowroomSession;

// ── Errors ───────────────────────────────────────────────────────

/// Errors that can occur while exchanging messages with the UI.
#[derive(Debug, thiserror::Error)]
pub enum FrontendError {
    #[error("malformed message from UI: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("failed to encode message for UI: {0}")]
    Encode(#[source] serde_json::Error),
}
