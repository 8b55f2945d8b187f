//! Application configuration for the demo shell.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

/// Command-line flags. Each one overrides the matching environment default.
#[derive(Parser, Debug)]
#[command(name = "montiera-showroom")]
#[command(
    about = "Headless Montiera showroom: UI messages as JSON lines on stdin, replies on stdout",
    long_about = None
)]
pub struct Cli {
    /// Preset the session starts from and resets to.
    #[arg(long)]
    pub preset: Option<String>,

    /// JSON catalog file replacing the built-in swatches and presets.
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Answer a single message, then exit.
    #[arg(long)]
    pub once: bool,

    /// Print the preset names and swatch names, then exit.
    #[arg(long)]
    pub list: bool,

    /// Print the active catalog as JSON and exit.
    #[arg(long)]
    pub dump_catalog: bool,
}

/// Runtime configuration for the showroom shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Starting preset; `None` uses the catalog's first preset.
    pub default_preset: Option<String>,
    /// Catalog file; `None` uses the built-in catalog.
    pub catalog_path: Option<PathBuf>,
    /// Stop after the first answered message.
    pub once: bool,
    pub list: bool,
    pub dump_catalog: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env_values(
            std::env::var_os("MONTIERA_DEFAULT_PRESET"),
            std::env::var_os("MONTIERA_CATALOG"),
        )
    }
}

impl AppConfig {
    /// Build from raw environment values. Empty values count as unset.
    fn from_env_values(preset: Option<OsString>, catalog: Option<OsString>) -> Self {
        Self {
            default_preset: preset
                .filter(|s| !s.is_empty())
                .and_then(|s| s.into_string().ok()),
            catalog_path: catalog.filter(|s| !s.is_empty()).map(PathBuf::from),
            once: false,
            list: false,
            dump_catalog: false,
        }
    }

    /// Layer command-line flags over `self`.
    pub fn with_cli(mut self, cli: Cli) -> Self {
        if cli.preset.is_some() {
            self.default_preset = cli.preset;
        }
        if cli.catalog.is_some() {
            self.catalog_path = cli.catalog;
        }
        self.once |= cli.once;
        self.list |= cli.list;
        self.dump_catalog |= cli.dump_catalog;
        self
    }
}
