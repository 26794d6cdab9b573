//! Filesystem scanning and manifest generation.
//!
//! Reads the asset tree produced by the forecast rendering jobs and writes the
//! manifest the viewer loads.
//!
//! ## Directory Structure
//!
//! ```text
//! <repo>/
//! ├── manifest.json                    # Written here, overwritten every run
//! └── assets/
//!     ├── 20240101_00Z/                # Cycle (YYYYMMDD_00Z)
//!     │   ├── plataforma/
//!     │   │   ├── storm_surge/
//!     │   │   │   ├── 000h.png         # Forecast hour 0
//!     │   │   │   └── 024h.png         # Forecast hour 24
//!     │   │   └── wave_height_dir/
//!     │   │       └── 024h.png
//!     │   └── rio_de_la_plata/
//!     │       └── storm_surge/
//!     │           └── 024h.png
//!     ├── 20240102_00Z/                # Latest cycle (greatest name)
//!     └── scratch/                     # Not a cycle name, ignored
//! ```
//!
//! ## Modes
//!
//! - **Full rescan** (`cycle = None`): every cycle directory is listed; the
//!   greatest becomes `latest_cycle` and its hours are collected.
//! - **Single cycle** (`cycle = Some(..)`): the given cycle is taken as-is,
//!   unvalidated, as the only available cycle.
//!
//! Hours are the union of every `NNNh.png` anywhere below the cycle directory,
//! regardless of region or variable. A missing cycle directory (or a missing
//! `assets/` in full rescan) yields an empty result, never an error.

use crate::config::{ASSETS_DIR, Catalog, MANIFEST_FILE};
use crate::naming::{parse_cycle_name, parse_hour_filename};
use crate::types::Manifest;
use std::collections::BTreeSet;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// What a run produced, for reporting.
#[derive(Debug)]
pub struct ScanOutcome {
    pub manifest: Manifest,
    pub manifest_path: PathBuf,
    /// The cycle passed on the command line, if any.
    pub requested_cycle: Option<String>,
}

/// List cycle directories directly under `assets_root`, ascending.
///
/// A missing `assets_root` is an empty list. Entries that are not
/// directories or whose names are not `YYYYMMDD_00Z` are skipped.
pub fn discover_cycles(assets_root: &Path) -> Result<Vec<String>, ScanError> {
    let entries = match fs::read_dir(assets_root) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };

    let mut cycles: Vec<String> = entries
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_dir())
        .filter_map(|e| {
            let name = e.file_name().to_string_lossy().to_string();
            parse_cycle_name(&name).map(str::to_string)
        })
        .collect();

    cycles.sort();
    Ok(cycles)
}

/// Collect forecast hours from every `NNNh.png` file below `cycle_root`.
///
/// Returns an ascending, deduplicated list. Unreadable or missing
/// directories contribute nothing.
pub fn discover_hours(cycle_root: &Path) -> Vec<u32> {
    let hours: BTreeSet<u32> = WalkDir::new(cycle_root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_file())
        .filter_map(|e| parse_hour_filename(&e.file_name().to_string_lossy()))
        .collect();

    hours.into_iter().collect()
}

/// Build the manifest for `root`, optionally pinned to one cycle.
pub fn build_manifest(
    root: &Path,
    cycle: Option<&str>,
    catalog: &Catalog,
) -> Result<Manifest, ScanError> {
    let assets_root = root.join(ASSETS_DIR);

    let (latest, cycles) = match cycle {
        Some(cycle) => (Some(cycle.to_string()), vec![cycle.to_string()]),
        None => {
            let cycles = discover_cycles(&assets_root)?;
            (cycles.last().cloned(), cycles)
        }
    };

    let hours = match &latest {
        Some(latest) => discover_hours(&assets_root.join(latest)),
        None => Vec::new(),
    };

    Ok(Manifest::new(catalog, latest, cycles, hours))
}

/// Serialize `manifest` to `<root>/manifest.json`, replacing any prior file.
pub fn write_manifest(root: &Path, manifest: &Manifest) -> Result<PathBuf, ScanError> {
    let manifest_path = root.join(MANIFEST_FILE);
    let json = serde_json::to_string_pretty(manifest)?;
    fs::write(&manifest_path, json)?;
    Ok(manifest_path)
}

/// Build and persist the manifest in one step.
pub fn run(
    root: &Path,
    cycle: Option<&str>,
    catalog: &Catalog,
) -> Result<ScanOutcome, ScanError> {
    let manifest = build_manifest(root, cycle, catalog)?;
    let manifest_path = write_manifest(root, &manifest)?;
    Ok(ScanOutcome {
        manifest,
        manifest_path,
        requested_cycle: cycle.map(str::to_string),
    })
}
