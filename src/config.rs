//! Catalog configuration.
//!
//! The regions, variables, and variable → region availability written into
//! every manifest are declarative configuration, not discovered data. They
//! live in one stock TOML document embedded in the binary and are parsed once
//! at process start:
//!
//! ```toml
//! base_url = "assets"
//!
//! [regions]
//! plataforma = "Plataforma"
//! rio_de_la_plata = "Río de la Plata"
//!
//! [variables]
//! storm_surge = "Storm surge"
//!
//! [availability]
//! storm_surge = ["plataforma", "rio_de_la_plata"]
//! ```
//!
//! The catalog is never read from the scanned repository, so every manifest
//! carries the same `regions`, `variables`, and `availability` regardless of
//! what is on disk. Unknown keys are rejected.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Directory under the repository root holding one subdirectory per cycle.
pub const ASSETS_DIR: &str = "assets";

/// Manifest filename, written directly under the repository root.
pub const MANIFEST_FILE: &str = "manifest.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Catalog validation error: {0}")]
    Validation(String),
}

/// Static catalog merged into every manifest.
///
/// Maps are ordered so serialization is deterministic across runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Catalog {
    /// Path prefix the viewer prepends to `<cycle>/<region>/<variable>/NNNh.png`.
    pub base_url: String,
    /// Region key → display name.
    pub regions: BTreeMap<String, String>,
    /// Variable key → display name.
    pub variables: BTreeMap<String, String>,
    /// Variable key → region keys for which that variable is rendered.
    pub availability: BTreeMap<String, Vec<String>>,
}

impl Catalog {
    /// Check that availability only references known variables and regions.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_url.trim_end_matches('/').is_empty() {
            return Err(ConfigError::Validation(
                "base_url must not be empty".into(),
            ));
        }
        if self.regions.is_empty() {
            return Err(ConfigError::Validation("regions must not be empty".into()));
        }
        if self.variables.is_empty() {
            return Err(ConfigError::Validation(
                "variables must not be empty".into(),
            ));
        }
        for (variable, regions) in &self.availability {
            if !self.variables.contains_key(variable) {
                return Err(ConfigError::Validation(format!(
                    "availability lists unknown variable '{variable}'"
                )));
            }
            if let Some(region) = regions.iter().find(|r| !self.regions.contains_key(*r)) {
                return Err(ConfigError::Validation(format!(
                    "availability of '{variable}' lists unknown region '{region}'"
                )));
            }
        }
        Ok(())
    }
}

/// Parse and validate a catalog from TOML text.
pub fn parse_catalog(content: &str) -> Result<Catalog, ConfigError> {
    let catalog: Catalog = toml::from_str(content)?;
    catalog.validate()?;
    Ok(catalog)
}

/// Load the stock catalog shipped with the binary.
pub fn load_catalog() -> Result<Catalog, ConfigError> {
    parse_catalog(stock_catalog_toml())
}

/// The stock catalog document.
pub fn stock_catalog_toml() -> &'static str {
    r##"# Prefix for image URLs: <base_url>/<cycle>/<region>/<variable>/NNNh.png
base_url = "assets"

[regions]
plataforma = "Plataforma"
rio_de_la_plata = "Río de la Plata"

[variables]
storm_surge = "Storm surge"
wave_height_dir = "Altura de ola (SWH) + dirección"
wave_period_dir = "Período de ola + dirección"

# Regions each variable is rendered for
[availability]
storm_surge = ["plataforma", "rio_de_la_plata"]
wave_height_dir = ["plataforma"]
wave_period_dir = ["plataforma"]
"##
}
