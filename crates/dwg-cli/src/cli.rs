//! CLI argument definitions for the drawing browser.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "dwg",
    version,
    about = "Browse architectural drawing metadata from the command line",
    long_about = "Browse the drawing tree, disciplines, regions and revision history of a\n\
                  drawing metadata document, search it, and resolve which image the\n\
                  viewer would display for a selection."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to the metadata document.
    #[arg(
        long = "metadata",
        value_name = "PATH",
        env = "DWG_METADATA",
        default_value = "data/metadata.json",
        global = true
    )]
    pub metadata: PathBuf,

    /// Directory holding the drawing images.
    #[arg(
        long = "drawings-dir",
        value_name = "DIR",
        env = "DWG_DRAWINGS_DIR",
        default_value = dwg_core::DEFAULT_IMAGE_DIR,
        global = true
    )]
    pub drawings_dir: PathBuf,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the drawing hierarchy starting at the site plan.
    Tree,

    /// List the disciplines of a drawing.
    Disciplines {
        /// Drawing identifier (e.g. 01).
        drawing: String,
    },

    /// List the regions of a discipline.
    Regions {
        drawing: String,
        discipline: String,
    },

    /// Show the revision history of a discipline or region.
    Revisions {
        drawing: String,
        discipline: String,

        /// Show the region's history instead of the discipline's own.
        #[arg(long)]
        region: Option<String>,
    },

    /// Search drawing names, discipline names and revision notes.
    Search {
        query: String,

        /// Maximum number of hits to print.
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },

    /// Print the breadcrumb for a selection.
    Breadcrumb(SelectionArgs),

    /// Resolve the image shown for a selection.
    Resolve {
        #[command(flatten)]
        selection: SelectionArgs,

        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Validate the metadata document and check that referenced images exist.
    Validate,
}

/// A drawing plus optional discipline, region and revision.
#[derive(Args, Clone)]
pub struct SelectionArgs {
    /// Drawing identifier (e.g. 01).
    pub drawing: String,

    #[arg(long)]
    pub discipline: Option<String>,

    #[arg(long)]
    pub region: Option<String>,

    #[arg(long)]
    pub revision: Option<String>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
