//! The manifest document and the queries the viewer runs against it.
//!
//! Field order here is the key order in `manifest.json`.

use crate::config::Catalog;
use crate::naming::hour_filename;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// JSON index of available forecast assets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    pub base_url: String,
    /// Cycle in focus; serialized as `null` when no cycle was found.
    pub latest_cycle: Option<String>,
    /// Ascending cycle identifiers.
    pub available_cycles: Vec<String>,
    pub regions: BTreeMap<String, String>,
    pub variables: BTreeMap<String, String>,
    pub availability: BTreeMap<String, Vec<String>>,
    /// Ascending, deduplicated forecast hours of `latest_cycle`.
    pub times_hours: Vec<u32>,
}

impl Manifest {
    /// Assemble a manifest from discovered data and the static catalog.
    pub fn new(
        catalog: &Catalog,
        latest_cycle: Option<String>,
        available_cycles: Vec<String>,
        times_hours: Vec<u32>,
    ) -> Self {
        Self {
            base_url: catalog.base_url.clone(),
            latest_cycle,
            available_cycles,
            regions: catalog.regions.clone(),
            variables: catalog.variables.clone(),
            availability: catalog.availability.clone(),
            times_hours,
        }
    }

    /// Cycle the viewer opens by default.
    pub fn default_cycle(&self) -> Option<&str> {
        self.latest_cycle
            .as_deref()
            .or_else(|| self.available_cycles.last().map(String::as_str))
    }

    /// Regions for which `variable` is rendered. Empty for unknown variables.
    pub fn allowed_regions(&self, variable: &str) -> &[String] {
        self.availability
            .get(variable)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Relative URL of one rendered image:
    /// `<base_url>/<cycle>/<region>/<variable>/NNNh.png`.
    pub fn image_path(&self, cycle: &str, region: &str, variable: &str, hour: u32) -> String {
        let base = self.base_url.trim_end_matches('/');
        format!(
            "{}/{}/{}/{}/{}",
            base,
            cycle,
            region,
            variable,
            hour_filename(hour)
        )
    }

    /// Caption shown above an image, e.g. `Plataforma · Storm surge · 024 h`.
    pub fn figure_title(&self, region: &str, variable: &str, hour: u32) -> Option<String> {
        let region_label = self.regions.get(region)?;
        let variable_label = self.variables.get(variable)?;
        Some(format!("{region_label} · {variable_label} · {hour:03} h"))
    }
}
