//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading regulatory
//! rule sets from YAML files.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;

use crate::error::{EngineError, EngineResult};

use super::types::{PayrollConfig, RegulatoryConstants, RulesetMetadata};

/// Loads and provides access to a versioned regulatory configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory and
/// provides rule-version lookup by effective date.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/tn2025/
/// ├── ruleset.yaml         # Ruleset metadata (country, currency, version)
/// └── rules/
///     └── 2025-01-01.yaml  # Rates and brackets effective from this date
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
/// use chrono::NaiveDate;
///
/// let loader = ConfigLoader::load("./config/tn2025").unwrap();
///
/// let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
/// let constants = loader.constants_for(date).unwrap();
/// println!("CNSS employee rate: {}", constants.contributions.cnss_employee);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/tn2025")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - Any rule version violates a regulatory invariant
    ///
    /// # Example
    ///
    /// ```no_run
    /// use payroll_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/tn2025")?;
    /// # Ok::<(), payroll_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata_path = path.join("ruleset.yaml");
        let metadata = Self::load_yaml::<RulesetMetadata>(&metadata_path)?;

        let rules_dir = path.join("rules");
        let versions = Self::load_versions(&rules_dir)?;

        let config = PayrollConfig::new(metadata, versions)?;

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads all rule version files from the rules directory.
    fn load_versions(rules_dir: &Path) -> EngineResult<Vec<RegulatoryConstants>> {
        let rules_dir_str = rules_dir.display().to_string();

        if !rules_dir.exists() {
            return Err(EngineError::ConfigNotFound {
                path: rules_dir_str,
            });
        }

        let entries = fs::read_dir(rules_dir).map_err(|_| EngineError::ConfigNotFound {
            path: rules_dir_str.clone(),
        })?;

        let mut versions = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: rules_dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                let constants = Self::load_yaml::<RegulatoryConstants>(&path)?;
                versions.push(constants);
            }
        }

        if versions.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no rule files found)", rules_dir_str),
            });
        }

        Ok(versions)
    }

    /// Returns the underlying payroll configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Returns the ruleset metadata.
    pub fn metadata(&self) -> &RulesetMetadata {
        self.config.metadata()
    }

    /// Returns the most recent rule version effective on or before `date`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use payroll_engine::config::ConfigLoader;
    /// use chrono::NaiveDate;
    ///
    /// let loader = ConfigLoader::load("./config/tn2025")?;
    /// let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
    /// let constants = loader.constants_for(date)?;
    /// # Ok::<(), payroll_engine::error::EngineError>(())
    /// ```
    pub fn constants_for(&self, date: NaiveDate) -> EngineResult<&RegulatoryConstants> {
        self.config.constants_for(date)
    }

    /// Returns the most recent rule version.
    pub fn latest(&self) -> &RegulatoryConstants {
        self.config.latest()
    }
}
