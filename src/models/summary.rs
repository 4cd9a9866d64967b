//! Summary models produced by the statistics aggregator.
//!
//! This module contains the [`Summary`] type returned by
//! [`summarize`](crate::calculation::summarize) and the smaller
//! [`WorkloadProfile`] returned by
//! [`profile_workloads`](crate::calculation::profile_workloads).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Employee;

/// Descriptive statistics over one roster.
///
/// Averages carry one decimal place and are serialized as JSON numbers.
/// Ages are whole years.
///
/// # Example
///
/// ```
/// use roster_stats::models::Summary;
/// use rust_decimal::Decimal;
///
/// let summary = Summary {
///     total: 0,
///     workload10: 0,
///     workload20: 0,
///     workload30: 0,
///     workload40: 0,
///     average_age: Decimal::new(350, 1),
///     min_age: 20,
///     max_age: 50,
///     median_age: 35,
///     median_workload: 25,
///     average_women_workload: Decimal::ZERO,
///     sorted_by_workload: vec![],
/// };
/// let json = serde_json::to_value(&summary).unwrap();
/// assert_eq!(json["averageAge"], 35.0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Number of employees in the roster.
    pub total: usize,
    /// Employees with a 10 percent workload.
    pub workload10: usize,
    /// Employees with a 20 percent workload.
    pub workload20: usize,
    /// Employees with a 30 percent workload.
    pub workload30: usize,
    /// Employees with a 40 percent workload.
    pub workload40: usize,
    /// Mean age, rounded half-up to one decimal place.
    #[serde(with = "rust_decimal::serde::float")]
    pub average_age: Decimal,
    /// Youngest age.
    pub min_age: u32,
    /// Oldest age.
    pub max_age: u32,
    /// Median age, rounded half-up to a whole year.
    pub median_age: u32,
    /// Median workload, rounded half-up to a whole percent.
    pub median_workload: u32,
    /// Mean workload of female employees to one decimal place, zero without any.
    #[serde(with = "rust_decimal::serde::float")]
    pub average_women_workload: Decimal,
    /// The input roster ordered by ascending workload, ties in input order.
    pub sorted_by_workload: Vec<Employee>,
}

impl Summary {
    /// Returns the bucket count for one workload level.
    pub fn bucket(&self, workload: super::Workload) -> usize {
        match workload {
            super::Workload::Ten => self.workload10,
            super::Workload::Twenty => self.workload20,
            super::Workload::Thirty => self.workload30,
            super::Workload::Forty => self.workload40,
        }
    }
}

/// Workload aggregates over a roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkloadProfile {
    /// Mean workload, rounded half-up to two decimal places.
    #[serde(with = "rust_decimal::serde::float")]
    pub average_workload: Decimal,
    /// Median workload, rounded half-up to a whole percent.
    pub median_workload: u32,
    /// Smallest workload.
    pub min_workload: u32,
    /// Largest workload.
    pub max_workload: u32,
}
