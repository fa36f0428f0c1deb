//! Plant catalog seed configuration from config.toml
//!
//! The plants defined in config.toml seed the catalog on startup or
//! whenever entries are missing. The catalog is otherwise read-only.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Deserialize)]
pub struct CatalogConfig {
    /// List of plant catalog entries to seed
    pub plants: Vec<PlantSeed>,
}

/// Configuration for a single catalog plant
#[derive(Debug, Deserialize, Clone)]
pub struct PlantSeed {
    /// Name of the plant
    pub name: String,
    /// Category for grouping (e.g., "vegetables", "legumes")
    pub category: String,
    /// Points awarded when the plant is logged
    pub base_points: f64,
    /// Display glyph
    pub emoji: String,
}

/// Loads the catalog seed configuration from a TOML file.
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - Required fields are missing
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<CatalogConfig> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Loads the catalog seed configuration from the default location
/// (./config.toml).
pub fn load_default_config() -> Result<CatalogConfig> {
    load_config("config.toml")
}
