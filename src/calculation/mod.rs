//! Generation and statistics logic for the roster engine.
//!
//! This module contains the shared age derivation, the employee generator,
//! the averaging, median and rounding helpers, the roster summary and the
//! workload profile.

mod age;
mod generator;
mod rounding;
mod statistics;
mod workload_profile;

pub use age::{AgeRange, age_in_years, birthdate_window};
pub use generator::EmployeeGenerator;
pub use rounding::{mean, median, round_half_up, round_to_whole};
pub use statistics::{summarize, summarize_on};
pub use workload_profile::profile_workloads;
