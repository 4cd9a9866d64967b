//! Synthetic Employee Roster Statistics
//!
//! This crate generates random employee rosters constrained by size and age
//! range, and computes summary statistics over them: age and workload
//! distributions, medians and gender-conditioned averages.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod service;
