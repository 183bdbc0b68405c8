use std::fs;
use std::process::{self, Command};

use anyhow::Context;
use clap::Parser;
use unpin_core::lockfile::Lockfile;

/// Always the lockfile in the working directory, which is where the
/// subsequent `yarn install` will look too.
const LOCKFILE_PATH: &str = "yarn.lock";

#[derive(Parser, Debug)]
#[command(name = "yarn-unpin")]
#[command(version)]
#[command(about = "Drop pinned resolutions for indirect dependencies, then reinstall")]
struct Args {
  /// Package names whose pinned resolutions should be recomputed
  #[arg(value_name = "PACKAGES", required = true)]
  packages: Vec<String>,
}

fn main() -> anyhow::Result<()> {
  let args = Args::parse();

  let contents = fs::read_to_string(LOCKFILE_PATH)
    .with_context(|| format!("failed to read {LOCKFILE_PATH}"))?;
  let mut lockfile =
    Lockfile::parse(&contents).with_context(|| format!("failed to parse {LOCKFILE_PATH}"))?;

  let removed = lockfile.remove_packages(&args.packages);
  fs::write(LOCKFILE_PATH, lockfile.to_string())
    .with_context(|| format!("failed to write {LOCKFILE_PATH}"))?;
  eprintln!("Removed {removed} resolution(s) from {LOCKFILE_PATH}");

  // Inherited stdio: the user watches install progress live.
  let status = Command::new("yarn")
    .arg("install")
    .status()
    .context("failed to launch `yarn install`")?;
  if !status.success() {
    process::exit(status.code().unwrap_or(1));
  }

  Ok(())
}
