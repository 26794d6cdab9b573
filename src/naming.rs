//! Centralized filename parsing for forecast assets.
//!
//! Two naming conventions drive the whole manifest:
//!
//! - **Cycle directories** are named `YYYYMMDD_00Z` (e.g. `20240131_00Z`).
//!   The format is fixed-width, so lexicographic order is chronological order.
//! - **Hour images** are named `NNNh.png` where `NNN` is the zero-padded
//!   forecast-hour offset from cycle initialization (e.g. `072h.png`).
//!
//! Matching is on the full entry name; anything else in the tree is ignored.

use regex::Regex;
use std::sync::LazyLock;

static CYCLE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{8}_00Z$").expect("cycle pattern is valid"));

static HOUR_FILENAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]{3})h\.png$").expect("hour pattern is valid"));

/// Return the name back if it is a cycle identifier (`YYYYMMDD_00Z`).
///
/// - `"20240101_00Z"` → `Some("20240101_00Z")`
/// - `"20240101_12Z"` → `None`
/// - `"2024010_00Z"` → `None`
/// - `"latest"` → `None`
pub fn parse_cycle_name(name: &str) -> Option<&str> {
    CYCLE_NAME.is_match(name).then_some(name)
}

/// Extract the forecast hour from an image filename.
///
/// - `"024h.png"` → `Some(24)`
/// - `"000h.png"` → `Some(0)`
/// - `"24h.png"` → `None` (must be exactly three digits)
/// - `"storm_024h.png"` → `None` (token must be the whole name)
/// - `"024h.PNG"` → `None`
pub fn parse_hour_filename(name: &str) -> Option<u32> {
    HOUR_FILENAME
        .captures(name)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Format an hour as the image filename the viewer requests: `24` → `024h.png`.
pub fn hour_filename(hour: u32) -> String {
    format!("{:03}h.png", hour)
}

/// Human-readable cycle label: `20240131_00Z` → `31-01-2024 00Z`.
///
/// Input that is not a cycle identifier gets only the `_00Z` → ` 00Z`
/// substitution, so odd names passed in single-cycle mode still display.
pub fn cycle_display_label(cycle: &str) -> String {
    let spaced = cycle.replacen("_00Z", " 00Z", 1);
    if parse_cycle_name(cycle).is_none() {
        return spaced;
    }
    let (year, rest) = cycle.split_at(4);
    let (month, rest) = rest.split_at(2);
    let day = &rest[..2];
    format!("{day}-{month}-{year} 00Z")
}
