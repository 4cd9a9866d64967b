//! Configuration loading and management for the roster engine.
//!
//! This module loads the name pools and generator limits from YAML files, or
//! from the default configuration compiled into the crate.
//!
//! # Example
//!
//! ```no_run
//! use roster_stats::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("max roster size: {}", config.limits().max_count);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{DEFAULT_MAX_COUNT, GeneratorLimits, NamePools, NamesFile, RosterConfig};
