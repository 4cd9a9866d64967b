//! Workload profile of a roster.
//!
//! A lighter companion to [`summarize`](super::summarize) that only looks at
//! workloads, so it needs no evaluation date.

use rust_decimal::Decimal;

use crate::error::{RosterError, RosterResult};
use crate::models::{Employee, WorkloadProfile};

use super::rounding::{mean, median, round_half_up, round_to_whole};
use super::statistics::canonical_workload;

/// Computes the average, median and extrema of a roster's workloads.
///
/// Follows the same policy as `summarize`: an empty roster is `EmptyInput` and
/// a workload outside 10, 20, 30, 40 is `DataIntegrity`. The average is
/// rounded half-up to two decimal places.
///
/// # Example
///
/// ```
/// use roster_stats::calculation::profile_workloads;
/// use roster_stats::models::{Employee, Gender};
/// use chrono::{TimeZone, Utc};
/// use rust_decimal::Decimal;
///
/// let roster: Vec<Employee> = [10, 10, 40]
///     .into_iter()
///     .map(|workload| Employee {
///         gender: Gender::Male,
///         birthdate: Utc.with_ymd_and_hms(1990, 1, 1, 0, 0, 0).unwrap(),
///         first_name: "Hugh".to_string(),
///         last_name: "Benda".to_string(),
///         workload,
///     })
///     .collect();
///
/// let profile = profile_workloads(&roster).unwrap();
/// assert_eq!(profile.average_workload, Decimal::from(20));
/// assert_eq!(profile.median_workload, 10);
/// assert_eq!(profile.min_workload, 10);
/// assert_eq!(profile.max_workload, 40);
/// ```
pub fn profile_workloads(employees: &[Employee]) -> RosterResult<WorkloadProfile> {
    let workloads = employees
        .iter()
        .enumerate()
        .map(|(index, employee)| canonical_workload(index, employee).map(|w| w.percent()))
        .collect::<RosterResult<Vec<u32>>>()?;

    let average: Decimal = mean(workloads.iter().copied()).ok_or(RosterError::EmptyInput)?;
    let middle = median(&workloads).ok_or(RosterError::EmptyInput)?;
    let min_workload = workloads.iter().copied().min().ok_or(RosterError::EmptyInput)?;
    let max_workload = workloads.iter().copied().max().ok_or(RosterError::EmptyInput)?;

    Ok(WorkloadProfile {
        average_workload: round_half_up(average, 2),
        median_workload: round_to_whole(middle)?,
        min_workload,
        max_workload,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Gender;
    use chrono::{TimeZone, Utc};
    use std::str::FromStr;

    fn roster(workloads: &[u32]) -> Vec<Employee> {
        workloads
            .iter()
            .map(|&workload| Employee {
                gender: Gender::Female,
                birthdate: Utc.with_ymd_and_hms(1988, 4, 9, 0, 0, 0).unwrap(),
                first_name: "Teresa".to_string(),
                last_name: "Musil".to_string(),
                workload,
            })
            .collect()
    }

    #[test]
    fn test_profile_of_one_per_bucket() {
        let profile = profile_workloads(&roster(&[40, 10, 30, 20])).unwrap();

        assert_eq!(profile.average_workload, Decimal::from(25));
        assert_eq!(profile.median_workload, 25);
        assert_eq!(profile.min_workload, 10);
        assert_eq!(profile.max_workload, 40);
    }

    #[test]
    fn test_average_keeps_two_decimals() {
        let profile = profile_workloads(&roster(&[10, 20, 20])).unwrap();
        assert_eq!(profile.average_workload, Decimal::from_str("16.67").unwrap());
    }

    #[test]
    fn test_empty_roster_is_rejected() {
        assert!(matches!(
            profile_workloads(&[]),
            Err(RosterError::EmptyInput)
        ));
    }

    #[test]
    fn test_off_grid_workload_is_rejected() {
        match profile_workloads(&roster(&[10, 50])) {
            Err(RosterError::DataIntegrity { index, .. }) => assert_eq!(index, 1),
            other => panic!("Expected DataIntegrity, got {:?}", other),
        }
    }
}
