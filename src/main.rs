//! mdair - a terminal markdown editor with live preview.
//!
//! # Usage
//!
//! ```bash
//! mdair
//! mdair notes.md
//! mdair --preview notes.md
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use mdair::app::App;
use mdair::prefs::{FilePrefs, default_prefs_path};
use mdair::shell::DesktopShell;

/// A terminal markdown editor with live preview
#[derive(Parser, Debug)]
#[command(name = "mdair", version, about, long_about = None)]
struct Cli {
    /// Markdown file to open at startup
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Start with the preview pane visible
    #[arg(short, long)]
    preview: bool,

    /// Use an alternate preferences file
    #[arg(long, value_name = "PATH")]
    prefs: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();

    if let Some(ref file) = cli.file {
        if !file.exists() {
            anyhow::bail!("File not found: {}", file.display());
        }
    }

    let prefs_path = cli.prefs.unwrap_or_else(default_prefs_path);
    let prefs = FilePrefs::load(prefs_path).context("Failed to load preferences")?;

    let mut app = App::new(Box::new(DesktopShell), Box::new(prefs))
        .with_file(cli.file)
        .with_preview(cli.preview);

    app.run().context("Application error")
}
