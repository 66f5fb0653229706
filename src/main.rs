use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use release_notes::cli::{build_release, ReleaseOutcome};
use release_notes::config;
use release_notes::git::GitCliRepository;
use release_notes::ui;

#[derive(clap::Parser)]
#[command(
    name = "build-release",
    about = "Build the changelog of a release from git history"
)]
struct Args {
    /// Version being released, e.g. v0.5.10
    version: String,
}

fn main() -> ExitCode {
    ui::init_logging();
    let args = Args::parse();

    match run(&args) {
        Ok(outcome) => {
            ui::display_release_outcome(&outcome);
            ExitCode::SUCCESS
        }
        Err(e) => {
            ui::display_error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<ReleaseOutcome> {
    let config = config::load_config(None).context("Failed to load configuration")?;

    ui::display_status(&format!("Collecting changes for {}", args.version));
    let repo = GitCliRepository::new();
    let outcome = build_release(&repo, &args.version, &config)
        .with_context(|| format!("Failed to build changelog for {}", args.version))?;

    Ok(outcome)
}
