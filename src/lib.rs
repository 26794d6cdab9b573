//! # Forecast Manifest
//!
//! Indexes the rendered images of a storm-surge and wave forecast into the
//! `manifest.json` the browser viewer loads. The filesystem is the data
//! source: cycle directories are the available runs, `NNNh.png` files are the
//! forecast hours.
//!
//! ```text
//! <repo>/assets/<YYYYMMDD_00Z>/<region>/<variable>/<NNN>h.png  →  <repo>/manifest.json
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Cycle and hour discovery, manifest assembly and persistence |
//! | [`config`] | Static region/variable catalog and asset layout constants |
//! | [`types`] | The [`types::Manifest`] document and viewer-side queries |
//! | [`naming`] | `YYYYMMDD_00Z` and `NNNh.png` name parsing |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## One Operation, Optional Cycle
//!
//! Publishing every cycle and publishing a single freshly rendered cycle are
//! the same scan with an optional override, see [`scan::build_manifest`].
//! With an override the cycle is taken verbatim: no existence or format check.
//!
//! ## Catalog Is Not Discovered
//!
//! Regions, variables, and which regions each variable covers come from the
//! stock catalog in [`config`], never from directory names. Every manifest
//! carries the same catalog, so the viewer can rely on it even when a cycle
//! is only partially rendered.
//!
//! ## Missing Directories Are Empty
//!
//! A missing `assets/` or cycle directory produces an empty cycle list or an
//! empty hour list. Only real I/O failures (permissions, unwritable root)
//! are errors.
//!
//! ## Deterministic Output
//!
//! Cycles and hours are sorted and catalog maps are ordered, so re-running
//! against an unchanged tree rewrites a byte-identical manifest.

pub mod config;
pub mod naming;
pub mod output;
pub mod scan;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
