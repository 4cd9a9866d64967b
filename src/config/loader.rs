//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading roster
//! configurations from YAML files.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{RosterError, RosterResult};

use super::types::{GeneratorLimits, NamePools, NamesFile, RosterConfig};

const BUILTIN_NAMES: &str = include_str!("../../config/default/names.yaml");
const BUILTIN_LIMITS: &str = include_str!("../../config/default/limits.yaml");

/// Loads and provides access to roster configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── names.yaml   # first_names and last_names pools
/// └── limits.yaml  # generator limits (max_count)
/// ```
///
/// # Example
///
/// ```no_run
/// use roster_stats::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default")?;
/// println!("{} first names", loader.pools().first_names().len());
/// # Ok::<(), roster_stats::error::RosterError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: RosterConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if a file is missing (`ConfigNotFound`), is not valid
    /// YAML (`ConfigParseError`) or holds an empty name pool (`InvalidArgument`).
    pub fn load<P: AsRef<Path>>(path: P) -> RosterResult<Self> {
        let path = path.as_ref();

        let names = Self::load_yaml::<NamesFile>(&path.join("names.yaml"))?;
        let limits = Self::load_yaml::<GeneratorLimits>(&path.join("limits.yaml"))?;

        Self::assemble(names, limits)
    }

    /// Returns the configuration compiled into the crate.
    ///
    /// # Example
    ///
    /// ```
    /// use roster_stats::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::builtin().unwrap();
    /// assert!(loader.pools().first_names().iter().any(|name| name == "Kai"));
    /// assert_eq!(loader.limits().max_count, 100_000);
    /// ```
    pub fn builtin() -> RosterResult<Self> {
        let names = Self::parse_yaml::<NamesFile>(BUILTIN_NAMES, "<builtin>/names.yaml")?;
        let limits = Self::parse_yaml::<GeneratorLimits>(BUILTIN_LIMITS, "<builtin>/limits.yaml")?;

        Self::assemble(names, limits)
    }

    fn assemble(names: NamesFile, limits: GeneratorLimits) -> RosterResult<Self> {
        let pools = NamePools::try_from(names)?;
        Ok(Self {
            config: RosterConfig::new(pools, limits),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: DeserializeOwned>(path: &Path) -> RosterResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| RosterError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::parse_yaml(&content, &path_str)
    }

    fn parse_yaml<T: DeserializeOwned>(content: &str, path: &str) -> RosterResult<T> {
        serde_yaml::from_str(content).map_err(|e| RosterError::ConfigParseError {
            path: path.to_string(),
            message: e.to_string(),
        })
    }

    /// Returns the underlying roster configuration.
    pub fn config(&self) -> &RosterConfig {
        &self.config
    }

    /// Returns the name pools.
    pub fn pools(&self) -> &NamePools {
        self.config.pools()
    }

    /// Returns the generator limits.
    pub fn limits(&self) -> GeneratorLimits {
        self.config.limits()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::path::PathBuf;

    fn config_path() -> &'static str {
        "./config/default"
    }

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "roster-stats-{}-{}",
            name,
            uuid::Uuid::new_v4()
        ));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.pools().first_names().len(), 29);
        assert_eq!(loader.pools().last_names().len(), 28);
        assert_eq!(loader.limits().max_count, 100_000);
    }

    #[test]
    fn test_builtin_matches_config_directory() {
        let from_disk = ConfigLoader::load(config_path()).unwrap();
        let builtin = ConfigLoader::builtin().unwrap();

        assert_eq!(from_disk.config(), builtin.config());
    }

    #[test]
    fn test_builtin_pools_have_no_repeated_names() {
        let builtin = ConfigLoader::builtin().unwrap();

        for pool in [builtin.pools().first_names(), builtin.pools().last_names()] {
            let distinct: HashSet<&String> = pool.iter().collect();
            assert_eq!(distinct.len(), pool.len());
        }
    }

    #[test]
    fn test_builtin_keeps_non_ascii_names() {
        let builtin = ConfigLoader::builtin().unwrap();
        assert!(builtin.pools().last_names().iter().any(|n| n == "Dvořák"));
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        match ConfigLoader::load("/nonexistent/path") {
            Err(RosterError::ConfigNotFound { path }) => {
                assert!(path.contains("names.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_invalid_yaml_returns_parse_error() {
        let dir = scratch_dir("bad-yaml");
        fs::write(dir.join("names.yaml"), "first_names: [Kai\n").unwrap();
        fs::write(dir.join("limits.yaml"), "max_count: 10\n").unwrap();

        match ConfigLoader::load(&dir) {
            Err(RosterError::ConfigParseError { path, .. }) => {
                assert!(path.contains("names.yaml"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_load_empty_pool_returns_invalid_argument() {
        let dir = scratch_dir("empty-pool");
        fs::write(dir.join("names.yaml"), "first_names: []\nlast_names: [Havel]\n").unwrap();
        fs::write(dir.join("limits.yaml"), "max_count: 10\n").unwrap();

        match ConfigLoader::load(&dir) {
            Err(RosterError::InvalidArgument { field, .. }) => assert_eq!(field, "first_names"),
            other => panic!("Expected InvalidArgument, got {:?}", other),
        }
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_load_custom_limits() {
        let dir = scratch_dir("limits");
        fs::write(dir.join("names.yaml"), "first_names: [Kai]\nlast_names: [Havel]\n").unwrap();
        fs::write(dir.join("limits.yaml"), "max_count: 12\n").unwrap();

        let loader = ConfigLoader::load(&dir).unwrap();
        assert_eq!(loader.limits().max_count, 12);
        assert_eq!(loader.pools().first_names(), ["Kai"]);
        fs::remove_dir_all(dir).unwrap();
    }
}
