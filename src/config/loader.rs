//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the policy
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::PolicyConfig;

/// Loads and provides access to the policy configuration.
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/policy.yaml").unwrap();
/// println!("Rest day: {}", loader.policy().payroll.rest_day);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    policy: PolicyConfig,
}

impl ConfigLoader {
    /// Loads the policy configuration from the specified YAML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the policy file (e.g., "./config/policy.yaml")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if the file is
    /// missing (`ConfigNotFound`) or contains invalid YAML
    /// (`ConfigParseError`).
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let policy =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str,
                message: e.to_string(),
            })?;

        Ok(Self { policy })
    }

    /// Returns the loaded policy configuration.
    pub fn policy(&self) -> &PolicyConfig {
        &self.policy
    }

    /// Consumes the loader and returns the policy configuration.
    pub fn into_policy(self) -> PolicyConfig {
        self.policy
    }
}
