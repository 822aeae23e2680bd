//! Street Section Builder - Terminal-based street cross-section editor
//!
//! Compose a street from sidewalks, lanes, parking and medians, give each a
//! width, reorder them, and watch a proportional preview or a live traffic
//! simulation of the result.

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use street_section::config::{Config, ThemeMode};
use street_section::constants::{APP_BINARY_NAME, APP_NAME};
use street_section::tui;

/// Street Section Builder - Terminal-based street cross-section editor
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Total street width in meters (overrides the config file)
    #[arg(short, long, value_name = "METERS")]
    limit: Option<f64>,

    /// Start with no elements instead of the starter section
    #[arg(long)]
    empty: bool,

    /// Color theme
    #[arg(long, value_enum, value_name = "MODE")]
    theme: Option<ThemeMode>,

    /// Write logs to this file (logging is off otherwise)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Write a default config file and exit
    #[arg(long)]
    init_config: bool,
}

/// Installs a file-backed tracing subscriber so logs never touch the terminal.
fn init_tracing(path: &Path, verbose: bool) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file: {}", path.display()))?;

    let filter = if verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_tracing(path, cli.verbose)?;
    }

    if cli.init_config {
        let path = Config::new().save()?;
        println!("{} v{}", APP_NAME, env!("CARGO_PKG_VERSION"));
        println!("Wrote default configuration to {}", path.display());
        return Ok(());
    }

    // Load config, falling back to defaults on any problem
    let mut config = Config::load().unwrap_or_else(|e| {
        eprintln!("Warning: {e:#}");
        eprintln!("Using default settings. Run `{APP_BINARY_NAME} --init-config` to reset the file.");
        warn!(error = %e, "config load failed, using defaults");
        Config::default()
    });

    if let Some(limit) = cli.limit {
        config.street.width_limit = limit;
    }
    if cli.empty {
        config.street.start_empty = true;
    }
    if let Some(theme) = cli.theme {
        config.ui.theme_mode = theme;
    }

    let section = config.initial_section();
    info!(
        limit = section.width_limit(),
        elements = section.len(),
        "starting session"
    );

    let mut app_state = tui::AppState::new(section, config);

    // Initialize TUI
    let mut terminal = tui::setup_terminal()?;

    // Run main TUI loop
    let result = tui::run_tui(&mut app_state, &mut terminal);

    // Restore terminal
    tui::restore_terminal(terminal)?;

    result
}
