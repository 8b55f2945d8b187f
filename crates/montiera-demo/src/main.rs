//! Montiera Demo — headless showroom shell.
//!
//! Drives one showroom session from JSON lines on stdin and answers each with
//! one JSON line on stdout. Logs go to stderr.

mod bridge;
mod config;
mod scene_log;

use std::io;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use montiera_core::Catalog;
use montiera_frontend_core::ShowroomSession;
use tracing_subscriber::EnvFilter;

use config::{AppConfig, Cli};
use scene_log::SceneLog;

fn main() -> anyhow::Result<()> {
    // Setup logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let config = AppConfig::default().with_cli(Cli::parse());
    let catalog = Arc::new(load_catalog(&config)?);

    if config.dump_catalog {
        println!("{}", catalog.to_definition().to_json_pretty()?);
        return Ok(());
    }
    if config.list {
        return bridge::write_listing(&catalog, io::stdout().lock());
    }

    let mut session = ShowroomSession::new(catalog, config.default_preset.as_deref())
        .context("failed to start showroom session")?;
    let scene = SceneLog::default();
    let frames = scene.frame_counter();
    session.subscribe(Box::new(scene));

    let replies = bridge::run(
        io::stdin().lock(),
        io::stdout().lock(),
        &mut session,
        config.once,
    )?;

    tracing::info!(replies, frames = frames.get(), "session ended");
    Ok(())
}

fn load_catalog(config: &AppConfig) -> anyhow::Result<Catalog> {
    let Some(path) = &config.catalog_path else {
        return Ok(Catalog::builtin()?);
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog {}", path.display()))?;
    let catalog = Catalog::from_json(&json)
        .with_context(|| format!("invalid catalog {}", path.display()))?;
    tracing::info!(path = %path.display(), "loaded catalog");
    Ok(catalog)
}
