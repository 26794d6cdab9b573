//! CLI output formatting.
//!
//! # Output Format
//!
//! ```text
//! [OK] manifest.json updated: 2 cycles, 3 hours in latest
//!
//! Cycles
//!     001 01-01-2024 00Z (20240101_00Z)
//!     002 02-01-2024 00Z (20240102_00Z) latest
//!
//! Hours
//!     0, 24, 48
//!
//! Availability
//!     Storm surge: Plataforma, Río de la Plata
//!     Altura de ola (SWH) + dirección: Plataforma
//! ```
//!
//! In single-cycle mode the confirmation names the cycle instead of counting
//! cycles. Each section has a `format_*` function (returns `Vec<String>` or
//! `String`) for testability and a `print_*` wrapper that writes to stdout.

use crate::naming::cycle_display_label;
use crate::scan::ScanOutcome;
use crate::types::Manifest;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        format!("{n} {word}")
    } else {
        format!("{n} {word}s")
    }
}

/// One-line confirmation printed after the manifest is written.
pub fn format_confirmation(outcome: &ScanOutcome) -> String {
    let file = outcome
        .manifest_path
        .file_name()
        .map(|f| f.to_string_lossy().to_string())
        .unwrap_or_else(|| outcome.manifest_path.display().to_string());
    let hours = outcome.manifest.times_hours.len();

    match &outcome.requested_cycle {
        Some(cycle) => format!(
            "[OK] {} updated for cycle {}: {}",
            file,
            cycle,
            plural(hours, "hour")
        ),
        None => format!(
            "[OK] {} updated: {}, {} in latest",
            file,
            plural(outcome.manifest.available_cycles.len(), "cycle"),
            plural(hours, "hour")
        ),
    }
}

/// Multi-line listing of what the manifest exposes to the viewer.
pub fn format_manifest_summary(manifest: &Manifest) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Cycles".to_string());
    if manifest.available_cycles.is_empty() {
        lines.push(format!("{}(none)", indent(1)));
    }
    for (i, cycle) in manifest.available_cycles.iter().enumerate() {
        let marker = if manifest.latest_cycle.as_deref() == Some(cycle.as_str()) {
            " latest"
        } else {
            ""
        };
        lines.push(format!(
            "{}{} {} ({}){}",
            indent(1),
            format_index(i + 1),
            cycle_display_label(cycle),
            cycle,
            marker
        ));
    }

    lines.push(String::new());
    lines.push("Hours".to_string());
    if manifest.times_hours.is_empty() {
        lines.push(format!("{}(none)", indent(1)));
    } else {
        let hours: Vec<String> = manifest.times_hours.iter().map(u32::to_string).collect();
        lines.push(format!("{}{}", indent(1), hours.join(", ")));
    }

    lines.push(String::new());
    lines.push("Availability".to_string());
    for (variable, label) in &manifest.variables {
        let regions: Vec<&str> = manifest
            .allowed_regions(variable)
            .iter()
            .map(|r| manifest.regions.get(r).map(String::as_str).unwrap_or(r.as_str()))
            .collect();
        let regions = if regions.is_empty() {
            "(none)".to_string()
        } else {
            regions.join(", ")
        };
        lines.push(format!("{}{}: {}", indent(1), label, regions));
    }

    lines
}

/// Print the confirmation line and manifest summary to stdout.
pub fn print_scan_output(outcome: &ScanOutcome) {
    println!("{}", format_confirmation(outcome));
    println!();
    for line in format_manifest_summary(&outcome.manifest) {
        println!("{}", line);
    }
}
