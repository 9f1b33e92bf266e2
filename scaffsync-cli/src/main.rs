//! Scaffsync — template-to-scaffold synchronization CLI.
//!
//! # Usage
//!
//! ```text
//! scaffsync                                 # example/ -> test_project/
//! scaffsync --source <dir> --dest <dir>
//! scaffsync --config scaffsync.json
//! ```
//!
//! Runs the fixed eight-step synchronization pipeline against the template
//! (source) and scaffold (destination) roots. Fail-fast: the first error
//! aborts the run with a non-zero exit status; earlier steps' effects stay
//! on disk.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use colored::Colorize;

use scaffsync_core::{config, plan, SyncConfig};
use scaffsync_sync::{pipeline, StepOutcome, StepReport};

#[derive(Parser, Debug)]
#[command(
    name = "scaffsync",
    version,
    about = "Synchronize a generated scaffold project with its template",
    long_about = None,
)]
struct Cli {
    /// Template project root.
    #[arg(long, default_value = "example")]
    source: PathBuf,

    /// Scaffold project root.
    #[arg(long, default_value = "test_project")]
    dest: PathBuf,

    /// JSON file overriding the pipeline constants (permission block,
    /// SDK-version line, project identity).
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if !cli.source.is_dir() {
        bail!("source root '{}' is not a directory", cli.source.display());
    }
    if !cli.dest.is_dir() {
        bail!("destination root '{}' is not a directory", cli.dest.display());
    }

    let config = match &cli.config {
        Some(path) => config::load(path)
            .with_context(|| format!("failed to load config '{}'", path.display()))?,
        None => SyncConfig::default(),
    };

    let steps = plan::canonical_plan(&config, &cli.source, &cli.dest);
    let reports = pipeline::run(&steps)
        .with_context(|| format!("sync failed for '{}'", cli.dest.display()))?;

    print_reports(&cli.dest, &reports);
    Ok(())
}

fn print_reports(dest_root: &Path, reports: &[StepReport]) {
    let applied = reports
        .iter()
        .filter(|r| r.outcome == StepOutcome::Applied)
        .count();
    let skipped = reports.len() - applied;

    println!(
        "{} '{}' synced ({applied} applied, {skipped} skipped)",
        "✓".green(),
        dest_root.display()
    );

    for report in reports {
        match report.outcome {
            StepOutcome::Applied => println!("  ✎  {}", report.dest.display()),
            StepOutcome::Skipped => println!("  ·  {}", report.dest.display()),
        }
    }
}
