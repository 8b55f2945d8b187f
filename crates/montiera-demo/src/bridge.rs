//! JSON-lines bridge between a UI transport and one showroom session.

use std::io::{BufRead, Write};

use anyhow::Context;
use montiera_core::{Catalog, ColorCategory};
use montiera_frontend_core::{FrontendError, ShowroomSession, ShowroomToUi};

/// Answer each non-blank line of `input` with one JSON line on `output`.
///
/// Malformed messages get an `Error` reply and the loop continues. With
/// `once`, stops after the first answered line. Returns the number of replies.
pub fn run(
    input: impl BufRead,
    mut output: impl Write,
    session: &mut ShowroomSession,
    once: bool,
) -> anyhow::Result<usize> {
    let mut replies = 0;
    for line in input.lines() {
        let line = line.context("failed to read message")?;
        if line.trim().is_empty() {
            continue;
        }
        let reply = match session.handle_json(&line) {
            Ok(reply) => reply,
            Err(err @ FrontendError::Decode(_)) => {
                tracing::warn!("{err}");
                serde_json::to_string(&ShowroomToUi::Error {
                    message: err.to_string(),
                })?
            }
            Err(err) => return Err(err.into()),
        };
        writeln!(output, "{reply}")?;
        output.flush()?;
        replies += 1;
        if once {
            break;
        }
    }
    Ok(replies)
}

/// Print preset names and each category's swatch names, one group per line.
pub fn write_listing(catalog: &Catalog, mut output: impl Write) -> anyhow::Result<()> {
    let presets: Vec<&str> = catalog.presets.names().collect();
    writeln!(output, "presets: {}", presets.join(", "))?;
    for &category in ColorCategory::all() {
        let names: Vec<&str> = catalog.registry.names_in_category(category).collect();
        writeln!(output, "{category}: {}", names.join(", "))?;
    }
    Ok(())
}
