use clap::Parser;
use forecast_manifest::{config, output, scan};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "forecast-manifest")]
#[command(about = "Index forecast-cycle image assets into manifest.json")]
#[command(long_about = "\
Index forecast-cycle image assets into manifest.json

Scans <REPO_ROOT>/assets for cycle directories and forecast-hour images and
writes <REPO_ROOT>/manifest.json for the viewer, replacing any previous one.

Asset layout:

  <REPO_ROOT>/
  ├── manifest.json                       # Output (overwritten)
  └── assets/
      ├── 20240101_00Z/                   # Cycle: YYYYMMDD_00Z
      │   └── plataforma/storm_surge/
      │       ├── 000h.png                # Forecast hour: NNNh.png
      │       └── 024h.png
      └── 20240102_00Z/                   # Latest = greatest name

Without CYCLE, every cycle is listed and hours come from the latest one.
With CYCLE, only that cycle is published, as given, with its hours.")]
#[command(version)]
struct Cli {
    /// Repository root containing the assets/ directory
    repo_root: PathBuf,

    /// Publish only this cycle (e.g. 20240103_00Z) instead of rescanning all
    cycle: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let catalog = config::load_catalog()?;
    let outcome = scan::run(&cli.repo_root, cli.cycle.as_deref(), &catalog)?;
    output::print_scan_output(&outcome);

    Ok(())
}
