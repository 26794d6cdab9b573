//! Shared test utilities for building asset trees and reading manifests back.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::test_helpers::*;
//!
//! let tmp = TempDir::new().unwrap();
//! add_hours(tmp.path(), "20240101_00Z", "plataforma/storm_surge", &[0, 24]);
//!
//! scan::run(tmp.path(), None, &load_catalog().unwrap()).unwrap();
//! assert_eq!(read_manifest(tmp.path()).times_hours, vec![0, 24]);
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{ASSETS_DIR, MANIFEST_FILE};
use crate::naming::hour_filename;
use crate::types::Manifest;

// =========================================================================
// Asset tree setup
// =========================================================================

/// `<root>/assets`.
pub fn assets_root(root: &Path) -> PathBuf {
    root.join(ASSETS_DIR)
}

/// Create `<root>/assets/<name>/` and return it.
pub fn add_cycle(root: &Path, name: &str) -> PathBuf {
    let dir = assets_root(root).join(name);
    fs::create_dir_all(&dir).unwrap();
    dir
}

/// Create placeholder `NNNh.png` files under `<root>/assets/<cycle>/<subdir>/`.
///
/// Returns the directory the files were written to.
pub fn add_hours(root: &Path, cycle: &str, subdir: &str, hours: &[u32]) -> PathBuf {
    let dir = add_cycle(root, cycle).join(subdir);
    fs::create_dir_all(&dir).unwrap();
    for &hour in hours {
        fs::write(dir.join(hour_filename(hour)), "fake image").unwrap();
    }
    dir
}

// =========================================================================
// Manifest readback, panics with a clear message on failure
// =========================================================================

/// Parse `<root>/manifest.json` as untyped JSON.
pub fn read_manifest_value(root: &Path) -> serde_json::Value {
    let path = root.join(MANIFEST_FILE);
    let content = fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("cannot read {}: {e}", path.display()));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("{} is not valid JSON: {e}", path.display()))
}

/// Parse `<root>/manifest.json` into a [`Manifest`].
pub fn read_manifest(root: &Path) -> Manifest {
    serde_json::from_value(read_manifest_value(root))
        .unwrap_or_else(|e| panic!("manifest does not match the Manifest shape: {e}"))
}
