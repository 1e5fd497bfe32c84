use anyhow::Result;
use clap::{Parser, Subcommand};
use std::fs;
use std::process::Command;

#[derive(Parser)]
#[command(author, version, about = "Project automation commands", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run cargo nextest with default configuration
    Nextest {
        #[arg(long)]
        profile: Option<String>,
        #[arg(long)]
        release: bool,
    },
    /// Build the tool and run fix + validate against a throwaway tree
    Smoke,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Nextest { profile, release } => run_nextest(profile, release)?,
        Commands::Smoke => run_smoke()?,
    }
    Ok(())
}

fn run_nextest(profile: Option<String>, release: bool) -> Result<()> {
    let mut cmd = Command::new("cargo");
    cmd.arg("nextest").arg("run");
    if let Some(profile) = profile {
        cmd.arg("--profile").arg(profile);
    }
    if release {
        cmd.arg("--release");
    }
    let status = cmd.status()?;
    if !status.success() {
        anyhow::bail!("cargo nextest run failed");
    }
    Ok(())
}

fn run_smoke() -> Result<()> {
    let metadata = cargo_metadata::MetadataCommand::new().exec()?;

    let status = Command::new("cargo")
        .args(["build", "-p", "license-header"])
        .status()?;
    if !status.success() {
        anyhow::bail!("cargo build failed");
    }
    let bin = metadata
        .target_directory
        .join("debug")
        .join("license-header");

    let tree = tempfile::tempdir()?;
    fs::create_dir_all(tree.path().join("internal/api"))?;
    fs::create_dir_all(tree.path().join("pkg/deploy"))?;
    fs::write(tree.path().join("internal/api/server.go"), "package api\n")?;
    fs::write(tree.path().join("pkg/deploy/app.yaml"), "name: app\n")?;

    let status = Command::new(bin.as_std_path())
        .current_dir(tree.path())
        .status()?;
    if !status.success() {
        anyhow::bail!("fix run failed");
    }

    let status = Command::new(bin.as_std_path())
        .arg("--validate")
        .current_dir(tree.path())
        .status()?;
    if !status.success() {
        anyhow::bail!("validate still found stale headers after fix");
    }
    Ok(())
}
