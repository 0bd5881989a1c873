//! Repository configuration file support.
//!
//! This module provides utilities for reading repository configuration from
//! TOML configuration files.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::factory::RepositoryType;
use super::repository::RepositoryError;
use crate::api::{SpeciesEntry, SpeciesTable};

/// Repository configuration from file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryConfig {
    pub repository: RepositorySettings,
    #[serde(default)]
    pub local: LocalSettings,
}

/// Repository type settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositorySettings {
    #[serde(rename = "type")]
    pub repo_type: String,
}

/// Settings for the in-memory local repository.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocalSettings {
    /// Optional path to a JSON file with species reference entries.
    /// When empty the builtin species table is used.
    #[serde(default)]
    pub species_file: String,
}

impl RepositoryConfig {
    /// Load repository configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(RepositoryConfig)` if successful
    /// * `Err(RepositoryError)` if file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, RepositoryError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            RepositoryError::configuration(format!("Failed to read config file: {}", e))
        })?;

        let config: RepositoryConfig = toml::from_str(&content).map_err(|e| {
            RepositoryError::configuration(format!("Failed to parse config file: {}", e))
        })?;

        Ok(config)
    }

    /// Load repository configuration from the default location.
    ///
    /// Searches for `sportfish.toml` in:
    /// 1. Current directory
    /// 2. `config/` directory
    /// 3. Parent directory
    ///
    /// # Returns
    /// * `Ok(RepositoryConfig)` if found and parsed successfully
    /// * `Err(RepositoryError)` if no config file found or parse error
    pub fn from_default_location() -> Result<Self, RepositoryError> {
        let search_paths = vec![
            PathBuf::from("sportfish.toml"),
            PathBuf::from("config/sportfish.toml"),
            PathBuf::from("../sportfish.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Err(RepositoryError::configuration(
            "No sportfish.toml found in standard locations",
        ))
    }

    /// Get the repository type from configuration.
    pub fn repository_type(&self) -> Result<RepositoryType, String> {
        RepositoryType::from_str(&self.repository.repo_type)
    }

    /// Load the species table named by the `local.species_file` setting.
    ///
    /// # Returns
    /// * `Ok(Some(SpeciesTable))` - A species file is configured and parsed
    /// * `Ok(None)` - No species file configured; callers use the builtin table
    /// * `Err(RepositoryError)` - The file cannot be read or parsed
    pub fn to_species_table(&self) -> Result<Option<SpeciesTable>, RepositoryError> {
        if self.local.species_file.is_empty() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.local.species_file).map_err(|e| {
            RepositoryError::configuration(format!(
                "Failed to read species file '{}': {}",
                self.local.species_file, e
            ))
        })?;

        let entries: Vec<SpeciesEntry> = serde_json::from_str(&content).map_err(|e| {
            RepositoryError::configuration(format!(
                "Failed to parse species file '{}': {}",
                self.local.species_file, e
            ))
        })?;

        Ok(Some(SpeciesTable::from_entries(entries)))
    }
}
