//! Core data models for the roster engine.
//!
//! This module contains the domain models shared by the generator and the
//! statistics aggregator.

mod employee;
mod summary;

pub use employee::{Employee, Gender, Workload};
pub use summary::{Summary, WorkloadProfile};
