//! Drawing metadata browser CLI.

use std::io::{self, IsTerminal};

use clap::{ColorChoice, Parser};
use dwg_cli::load_catalog;
use dwg_cli::logging::{LogConfig, LogFormat, init_logging};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{
    run_breadcrumb, run_disciplines, run_regions, run_resolve, run_revisions, run_search,
    run_tree, run_validate,
};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(&cli) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> anyhow::Result<i32> {
    let catalog = load_catalog(&cli.metadata, &cli.drawings_dir)?;
    match &cli.command {
        Command::Tree => run_tree(&catalog)?,
        Command::Disciplines { drawing } => run_disciplines(&catalog, drawing)?,
        Command::Regions {
            drawing,
            discipline,
        } => run_regions(&catalog, drawing, discipline)?,
        Command::Revisions {
            drawing,
            discipline,
            region,
        } => run_revisions(&catalog, drawing, discipline, region.as_deref())?,
        Command::Search { query, limit } => run_search(&catalog, query, *limit)?,
        Command::Breadcrumb(selection) => run_breadcrumb(&catalog, selection)?,
        Command::Resolve { selection, json } => run_resolve(&catalog, selection, *json)?,
        Command::Validate => {
            let missing = run_validate(&catalog)?;
            return Ok(if missing == 0 { 0 } else { 1 });
        }
    }
    Ok(0)
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
