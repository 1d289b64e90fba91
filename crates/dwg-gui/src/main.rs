//! Drawing Viewer - Desktop GUI Application
//!
//! Browses a project's architectural drawings: site plan, buildings,
//! disciplines, regions and revisions.
//!
//! Built with Iced 0.14.0 using the Elm architecture (State, Message, Update, View).

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use dwg_gui::{App, Settings, load_catalog};
use iced::{Size, window};
use tracing_subscriber::EnvFilter;

/// Command-line overrides for the data locations in settings.toml.
#[derive(Debug, Parser)]
#[command(name = "dwg-viewer", version, about = "Architectural drawing viewer")]
struct Args {
    /// Metadata JSON document.
    #[arg(long, env = "DWG_METADATA", value_name = "PATH")]
    metadata: Option<PathBuf>,

    /// Directory containing the drawing images.
    #[arg(long, env = "DWG_DRAWINGS_DIR", value_name = "DIR")]
    drawings_dir: Option<PathBuf>,
}

/// Application entry point.
///
/// The metadata is loaded before the window opens; a broken document is a
/// startup error rather than an empty viewer.
pub fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    tracing::info!("Starting drawing viewer");

    let settings_path = Settings::config_path();
    let settings = Settings::load_from(&settings_path).with_overrides(args.metadata, args.drawings_dir);
    let catalog = Arc::new(load_catalog(&settings).context("load drawing metadata")?);

    iced::application(
        move || App::new(Arc::clone(&catalog), settings.clone(), Some(settings_path.clone())),
        App::update,
        App::view,
    )
    .title(App::title)
    .theme(App::theme)
    .subscription(App::subscription)
    .window(window::Settings {
        size: Size::new(1280.0, 800.0),
        min_size: Some(Size::new(1024.0, 600.0)),
        ..Default::default()
    })
    .run()
    .context("run viewer window")
}
