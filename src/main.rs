//! fpick - browse a directory, pick entries by index, copy/move/delete them.
//!
//! Usage:
//!   fpick [PATH]                        Interactive menu
//!   fpick list [PATH]                   Print a numbered listing
//!   fpick copy <INDICES> <DEST> [-d D]  Copy picked entries into DEST
//!   fpick move <INDICES> <DEST> [-d D]  Move picked entries into DEST
//!   fpick delete <INDICES> [-d D]       Delete picked entries
//!   fpick --help                        Show help

mod console;
mod menu;

use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{Context, Result, bail};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use fpick_core::Settings;
use fpick_nav::{DirLister, Navigator, Selector};
use fpick_ops::{BatchKind, BatchProcessor, BatchReport, LocalFileSystem};

use crate::console::{ConsoleSink, write_listing};
use crate::menu::Menu;

#[derive(Parser)]
#[command(
    name = "fpick",
    version,
    about = "Pick directory entries by index and copy, move or delete them",
    long_about = "fpick lists a directory with numbered entries. Pick entries with a \
                  comma-separated index list and apply copy, move or delete to all of \
                  them; a failing entry is reported and the rest still run.\n\n\
                  Run `fpick [PATH]` for the interactive menu, or use subcommands \
                  for one-shot operations."
)]
struct Cli {
    /// Directory to start in (defaults to the configured start directory, then home)
    path: Option<PathBuf>,

    /// Settings file (defaults to <config dir>/fpick/settings.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Hide entries starting with a dot
    #[arg(long, global = true)]
    no_hidden: bool,

    /// Sort entries by name
    #[arg(long, global = true)]
    sort: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print the entries of a directory with their indices
    List {
        /// Directory to list
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Copy the entries at INDICES into DEST
    Copy {
        /// Comma-separated entry indices (e.g. "0,2,5")
        indices: String,

        /// Destination directory
        dest: PathBuf,

        /// Directory the indices refer to
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Move the entries at INDICES into DEST
    Move {
        /// Comma-separated entry indices (e.g. "0,2,5")
        indices: String,

        /// Destination directory
        dest: PathBuf,

        /// Directory the indices refer to
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Delete the entries at INDICES
    Delete {
        /// Comma-separated entry indices (e.g. "0,2,5")
        indices: String,

        /// Directory the indices refer to
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,

        /// Move to the trash instead of deleting permanently
        #[arg(long)]
        trash: bool,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn main() -> Result<ExitCode> {
    color_eyre::install()?;

    let cli = Cli::parse();
    setup_logging(&cli.log_level);

    let mut settings = match &cli.config {
        Some(path) => Settings::load_from(path)
            .wrap_err_with(|| format!("Failed to load settings from {}", path.display()))?,
        None => Settings::load(),
    };
    if cli.no_hidden {
        settings.include_hidden = false;
    }
    if cli.sort {
        settings.sort_entries = true;
    }

    match cli.command {
        Some(Command::List { path, format }) => run_list(&path, &settings, format),
        Some(Command::Copy {
            indices,
            dest,
            dir,
            format,
        }) => run_batch(&dir, &indices, BatchKind::Copy, Some(dest.as_path()), &settings, format),
        Some(Command::Move {
            indices,
            dest,
            dir,
            format,
        }) => run_batch(&dir, &indices, BatchKind::Move, Some(dest.as_path()), &settings, format),
        Some(Command::Delete {
            indices,
            dir,
            trash,
            format,
        }) => {
            settings.use_trash |= trash;
            run_batch(&dir, &indices, BatchKind::Delete, None, &settings, format)
        }
        None => {
            run_interactive(cli.path, &settings)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Install the stderr subscriber; `RUST_LOG` wins over `--log-level`.
fn setup_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

/// Run the interactive menu on stdin/stdout.
fn run_interactive(path: Option<PathBuf>, settings: &Settings) -> Result<()> {
    let lister = DirLister::from_settings(settings);
    let navigator = match path.or_else(|| settings.start_dir.clone()) {
        Some(start) => {
            let start = start
                .canonicalize()
                .wrap_err_with(|| format!("Invalid path: {}", start.display()))?;
            Navigator::new(lister, start)
        }
        None => Navigator::at_home(lister),
    };

    let fs = LocalFileSystem {
        use_trash: settings.use_trash,
    };
    let batch = BatchProcessor::new(fs, ConsoleSink::new());

    let stdin = io::stdin();
    let mut menu = Menu::new(
        navigator,
        batch,
        stdin.lock(),
        io::stdout(),
        settings.max_input_attempts,
    );
    menu.run().context("Interactive session failed")
}

/// Print one directory listing.
fn run_list(path: &Path, settings: &Settings, format: OutputFormat) -> Result<ExitCode> {
    let path = path.canonicalize().context("Invalid path")?;

    let mut sink = ConsoleSink::new();
    let mut navigator = Navigator::new(DirLister::from_settings(settings), path);
    let listing = navigator.list_contents(&mut sink);

    match format {
        OutputFormat::Text => write_listing(&mut io::stdout(), listing)?,
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(listing)?),
    }

    Ok(if sink.reported() == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// List `dir`, select `indices` from it and apply `kind` once.
fn run_batch(
    dir: &Path,
    indices: &str,
    kind: BatchKind,
    destination: Option<&Path>,
    settings: &Settings,
    format: OutputFormat,
) -> Result<ExitCode> {
    let dir = dir.canonicalize().context("Invalid path")?;

    let mut sink = ConsoleSink::new();
    let mut navigator = Navigator::new(DirLister::from_settings(settings), dir);
    let listing = navigator.list_contents(&mut sink);
    if sink.reported() > 0 {
        bail!("Cannot list {}", listing.directory().display());
    }

    let mut selector = Selector::new();
    selector
        .try_select(indices, listing)
        .wrap_err("Invalid index list")?;

    let fs = LocalFileSystem {
        use_trash: settings.use_trash,
    };
    let mut batch = BatchProcessor::new(fs, sink);
    let report = batch.run_batch(selector.selection_mut(), kind, destination);

    print_report(&report, format)?;

    Ok(if report.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn print_report(report: &BatchReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => println!("{}", report.summary()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
    }
    Ok(())
}
