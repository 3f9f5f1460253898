//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the accrual
//! policy and branch directory from YAML files.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

use crate::error::{EngineError, EngineResult};
use crate::models::Branch;

use super::types::{AccrualPolicy, BranchesConfig, EngineConfig};

/// Loads and provides access to engine configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── policy.yaml    # Accrual policy constants
/// └── branches.yaml  # Branch names and their leave calculation standard
/// ```
///
/// # Example
///
/// ```no_run
/// use leave_accrual::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// if let Some(branch) = loader.get_branch("Seoul") {
///     println!("Seoul uses {:?}", branch.leave_calculation_standard);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/default")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Either file is missing
    /// - Either file contains invalid YAML
    /// - The default annual leave is negative
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let policy = Self::load_yaml::<AccrualPolicy>(&path.join("policy.yaml"))?;
        let branches = Self::load_yaml::<BranchesConfig>(&path.join("branches.yaml"))?;

        let loader = Self::from_parts(policy, branches.branches)?;

        info!(
            path = %path.display(),
            branches = loader.config.branches().len(),
            default_days = %loader.policy().default_annual_leave_days,
            "Loaded leave accrual configuration"
        );

        Ok(loader)
    }

    /// Builds a loader from in-memory parts, applying the same validation as [`load`](Self::load).
    ///
    /// A branch whose standard is not recognized is kept and logged; its
    /// calculations fall back to hire-date with an `UNKNOWN_STANDARD` warning.
    ///
    /// # Example
    ///
    /// ```
    /// use leave_accrual::config::{AccrualPolicy, ConfigLoader};
    /// use leave_accrual::models::Branch;
    ///
    /// let loader = ConfigLoader::from_parts(
    ///     AccrualPolicy::default(),
    ///     vec![Branch {
    ///         name: "Seoul".to_string(),
    ///         leave_calculation_standard: Some("fiscal_year".to_string()),
    ///     }],
    /// )?;
    /// assert!(loader.get_branch("Seoul").is_some());
    /// # Ok::<(), leave_accrual::error::EngineError>(())
    /// ```
    pub fn from_parts(policy: AccrualPolicy, branches: Vec<Branch>) -> EngineResult<Self> {
        if policy.default_annual_leave_days < Decimal::ZERO {
            return Err(EngineError::InvalidConfig {
                field: "default_annual_leave_days".to_string(),
                message: format!(
                    "must not be negative, got {}",
                    policy.default_annual_leave_days
                ),
            });
        }

        for branch in &branches {
            if let Some(raw) = branch.unrecognized_standard() {
                warn!(
                    branch = %branch.name,
                    standard = %raw,
                    "Unrecognized branch leave standard, hire-date will apply"
                );
            }
        }

        Ok(Self {
            config: EngineConfig::new(policy, branches),
        })
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

    /// Returns the accrual policy.
    pub fn policy(&self) -> &AccrualPolicy {
        self.config.policy()
    }

    /// Looks up a branch by name.
    pub fn get_branch(&self, name: &str) -> Option<&Branch> {
        self.config.branches().get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn config_path() -> &'static str {
        "./config/default"
    }

    fn temp_config_dir(name: &str, policy: &str, branches: Option<&str>) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "leave-accrual-{}-{}",
            name,
            uuid::Uuid::new_v4()
        ));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("policy.yaml"), policy).unwrap();
        if let Some(branches) = branches {
            fs::write(dir.join("branches.yaml"), branches).unwrap();
        }
        dir
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.policy().default_annual_leave_days, Decimal::from(15));
    }

    #[test]
    fn test_get_branch_returns_configured_standard() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        let seoul = loader.get_branch("Seoul").unwrap();
        assert_eq!(
            seoul.leave_calculation_standard.as_deref(),
            Some("fiscal_year")
        );

        let busan = loader.get_branch("Busan").unwrap();
        assert_eq!(busan.leave_calculation_standard.as_deref(), Some("hire_date"));
    }

    #[test]
    fn test_misspelled_standard_is_kept_for_later_warning() {
        let dir = temp_config_dir(
            "misspelled-standard",
            "default_annual_leave_days: 15\n",
            Some("branches:\n  - name: Incheon\n    leave_calculation_standard: fiscal-yaer\n"),
        );

        let loader = ConfigLoader::load(&dir).unwrap();
        let incheon = loader.get_branch("Incheon").unwrap();
        assert_eq!(incheon.unrecognized_standard(), Some("fiscal-yaer"));

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_get_branch_unknown_returns_none() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert!(loader.get_branch("Atlantis").is_none());
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("policy.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_missing_branches_file_returns_error() {
        let dir = temp_config_dir("missing-branches", "default_annual_leave_days: 15\n", None);

        match ConfigLoader::load(&dir) {
            Err(EngineError::ConfigNotFound { path }) => assert!(path.contains("branches.yaml")),
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_load_invalid_yaml_returns_parse_error() {
        let dir = temp_config_dir(
            "bad-yaml",
            "default_annual_leave_days: 15\n",
            Some("branches: [unclosed\n"),
        );

        match ConfigLoader::load(&dir) {
            Err(EngineError::ConfigParseError { path, .. }) => {
                assert!(path.contains("branches.yaml"))
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_negative_default_is_rejected() {
        let policy = AccrualPolicy {
            default_annual_leave_days: Decimal::from(-1),
        };

        match ConfigLoader::from_parts(policy, vec![]) {
            Err(EngineError::InvalidConfig { field, .. }) => {
                assert_eq!(field, "default_annual_leave_days")
            }
            other => panic!("Expected InvalidConfig, got {:?}", other),
        }
    }
}
