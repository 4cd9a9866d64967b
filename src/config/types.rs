//! Configuration types for roster generation.
//!
//! This module contains the strongly-typed configuration structures that are
//! deserialized from the YAML files of a configuration directory.

use serde::{Deserialize, Serialize};

use crate::error::{RosterError, RosterResult};

/// Default upper bound on the size of a generated roster.
pub const DEFAULT_MAX_COUNT: usize = 100_000;

/// Raw contents of `names.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct NamesFile {
    /// First names to draw from.
    pub first_names: Vec<String>,
    /// Last names to draw from.
    pub last_names: Vec<String>,
}

/// The name lists employees are drawn from.
///
/// Both pools are guaranteed to be non-empty.
///
/// # Example
///
/// ```
/// use roster_stats::config::NamePools;
///
/// let pools = NamePools::new(vec!["Kai".to_string()], vec!["Zeman".to_string()]).unwrap();
/// assert_eq!(pools.first_names(), ["Kai"]);
///
/// assert!(NamePools::new(vec![], vec!["Zeman".to_string()]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamePools {
    first_names: Vec<String>,
    last_names: Vec<String>,
}

impl NamePools {
    /// Creates name pools, rejecting an empty pool.
    pub fn new(first_names: Vec<String>, last_names: Vec<String>) -> RosterResult<Self> {
        if first_names.is_empty() {
            return Err(RosterError::invalid(
                "first_names",
                "name pool must contain at least one name",
            ));
        }
        if last_names.is_empty() {
            return Err(RosterError::invalid(
                "last_names",
                "name pool must contain at least one name",
            ));
        }
        Ok(Self {
            first_names,
            last_names,
        })
    }

    /// Returns the first-name pool.
    pub fn first_names(&self) -> &[String] {
        &self.first_names
    }

    /// Returns the last-name pool.
    pub fn last_names(&self) -> &[String] {
        &self.last_names
    }
}

impl TryFrom<NamesFile> for NamePools {
    type Error = RosterError;

    fn try_from(file: NamesFile) -> RosterResult<Self> {
        NamePools::new(file.first_names, file.last_names)
    }
}

/// Resource limits applied by the generator, read from `limits.yaml`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorLimits {
    /// The largest roster a single call may generate.
    #[serde(default = "default_max_count")]
    pub max_count: usize,
}

fn default_max_count() -> usize {
    DEFAULT_MAX_COUNT
}

impl Default for GeneratorLimits {
    fn default() -> Self {
        Self {
            max_count: DEFAULT_MAX_COUNT,
        }
    }
}

/// The complete roster configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterConfig {
    pools: NamePools,
    limits: GeneratorLimits,
}

impl RosterConfig {
    /// Creates a configuration from its component parts.
    pub fn new(pools: NamePools, limits: GeneratorLimits) -> Self {
        Self { pools, limits }
    }

    /// Returns the name pools.
    pub fn pools(&self) -> &NamePools {
        &self.pools
    }

    /// Returns the generator limits.
    pub fn limits(&self) -> GeneratorLimits {
        self.limits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_first_names_rejected() {
        match NamePools::new(vec![], names(&["Zeman"])) {
            Err(RosterError::InvalidArgument { field, .. }) => assert_eq!(field, "first_names"),
            other => panic!("Expected InvalidArgument, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_last_names_rejected() {
        match NamePools::new(names(&["Kai"]), vec![]) {
            Err(RosterError::InvalidArgument { field, .. }) => assert_eq!(field, "last_names"),
            other => panic!("Expected InvalidArgument, got {:?}", other),
        }
    }

    #[test]
    fn test_names_file_converts_to_pools() {
        let file: NamesFile =
            serde_yaml::from_str("first_names: [Kai, Nova]\nlast_names: [Havel]\n").unwrap();
        let pools = NamePools::try_from(file).unwrap();

        assert_eq!(pools.first_names(), ["Kai", "Nova"]);
        assert_eq!(pools.last_names(), ["Havel"]);
    }

    #[test]
    fn test_limits_default_when_key_missing() {
        let limits: GeneratorLimits = serde_yaml::from_str("{}").unwrap();
        assert_eq!(limits.max_count, DEFAULT_MAX_COUNT);
    }

    #[test]
    fn test_limits_read_from_yaml() {
        let limits: GeneratorLimits = serde_yaml::from_str("max_count: 250").unwrap();
        assert_eq!(limits.max_count, 250);
    }
}
