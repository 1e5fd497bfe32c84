use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use license_header::app::process::{Mode, current_year};
use license_header::app::walk::{Summary, walk_tree};
use license_header::infra::config::Config;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Keep copyright headers and license notices up to date",
    long_about = None
)]
struct Cli {
    /// Report non-conforming files without rewriting them; exit 2 if any.
    #[arg(long)]
    validate: bool,
    /// Path to an alternate configuration file.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> Result<ExitCode> {
    license_header::init();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;
    let mode = if cli.validate { Mode::Validate } else { Mode::Fix };
    let year = current_year();

    let mut summary = Summary::default();
    for root in &config.roots {
        summary.merge(walk_tree(root, &config, mode, &year)?);
    }

    if mode == Mode::Validate && summary.outdated > 0 {
        return Ok(ExitCode::from(2));
    }
    Ok(ExitCode::SUCCESS)
}
