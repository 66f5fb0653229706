use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use release_notes::{config, docs, ui};

#[derive(clap::Parser)]
#[command(
    name = "build-docs",
    about = "Render markdown documentation from *.md.j2 templates"
)]
struct Args {
    #[arg(long, help = "Render README.md.j2 into README.md instead of the docs templates")]
    readme: bool,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    ui::init_logging();
    let args = Args::parse();

    match run(&args) {
        Ok(written) => {
            for path in written {
                ui::display_success(&format!("Rendered {}", path.display()));
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            ui::display_error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<Vec<PathBuf>> {
    let root = Path::new(".");

    if args.readme {
        let output = docs::render_readme(root).context("Failed to render README")?;
        return Ok(vec![output]);
    }

    let config = config::load_config(args.config.as_deref())
        .context("Failed to load configuration")?;
    let written = docs::render_docs(root, &config.docs).context("Failed to render docs")?;
    if written.is_empty() {
        ui::display_status(&format!(
            "No *.md.j2 templates found in {}",
            config.docs.template_dir.display()
        ));
    }
    Ok(written)
}
