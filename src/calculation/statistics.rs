//! Roster summary statistics.
//!
//! This module provides [`summarize`], which reduces a roster to a
//! [`Summary`]. An empty roster is rejected with `EmptyInput` rather than
//! reported as zeros, since none of the averages or medians exist.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::error::{RosterError, RosterResult};
use crate::models::{Employee, Summary, Workload};

use super::rounding::{mean, median, round_half_up, round_to_whole};

/// Summarizes a roster, evaluating ages against today's UTC date.
pub fn summarize(employees: &[Employee]) -> RosterResult<Summary> {
    summarize_on(employees, Utc::now().date_naive())
}

/// Summarizes a roster, evaluating ages on `today`.
///
/// # Arguments
///
/// * `employees` - The roster to summarize; it is not modified
/// * `today` - The date ages are measured on
///
/// # Returns
///
/// Returns a `Summary` on success, or an error if:
/// - `employees` is empty (`EmptyInput`)
/// - an employee has a workload other than 10, 20, 30 or 40 (`DataIntegrity`)
/// - an employee's birthdate falls after `today` (`DataIntegrity`)
///
/// # Example
///
/// ```
/// use roster_stats::calculation::summarize_on;
/// use roster_stats::models::{Employee, Gender};
/// use chrono::{NaiveDate, TimeZone, Utc};
/// use rust_decimal::Decimal;
///
/// let employee = |year, gender, workload| Employee {
///     gender,
///     birthdate: Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0).unwrap(),
///     first_name: "Kim".to_string(),
///     last_name: "Klein".to_string(),
///     workload,
/// };
/// let roster = vec![
///     employee(2006, Gender::Male, 10),
///     employee(1996, Gender::Female, 20),
///     employee(1986, Gender::Male, 30),
///     employee(1976, Gender::Female, 40),
/// ];
///
/// let today = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
/// let summary = summarize_on(&roster, today).unwrap();
///
/// assert_eq!(summary.average_age, Decimal::new(350, 1));
/// assert_eq!(summary.median_age, 35);
/// assert_eq!(summary.median_workload, 25);
/// assert_eq!(summary.average_women_workload, Decimal::new(300, 1));
/// ```
pub fn summarize_on(employees: &[Employee], today: NaiveDate) -> RosterResult<Summary> {
    if employees.is_empty() {
        warn!("Refusing to summarize an empty roster");
        return Err(RosterError::EmptyInput);
    }

    let mut buckets = [0usize; 4];
    let mut ages = Vec::with_capacity(employees.len());
    let mut workloads = Vec::with_capacity(employees.len());
    let mut women_workloads = Vec::new();

    for (index, employee) in employees.iter().enumerate() {
        let workload = canonical_workload(index, employee)?;
        let age = checked_age(index, employee, today)?;

        buckets[workload as usize] += 1;
        ages.push(age);
        workloads.push(employee.workload);
        if employee.is_female() {
            women_workloads.push(employee.workload);
        }
    }

    let average_age = mean(ages.iter().copied()).ok_or(RosterError::EmptyInput)?;
    let median_age = median(&ages).ok_or(RosterError::EmptyInput)?;
    let median_workload = median(&workloads).ok_or(RosterError::EmptyInput)?;
    let min_age = ages.iter().copied().min().ok_or(RosterError::EmptyInput)?;
    let max_age = ages.iter().copied().max().ok_or(RosterError::EmptyInput)?;
    let average_women_workload = mean(women_workloads)
        .map(|m| round_half_up(m, 1))
        .unwrap_or(Decimal::ZERO);

    let mut sorted_by_workload = employees.to_vec();
    sorted_by_workload.sort_by_key(|e| e.workload);

    debug!(
        total = employees.len(),
        min_age,
        max_age,
        average_age = %average_age,
        "Summarized roster"
    );

    Ok(Summary {
        total: employees.len(),
        workload10: buckets[Workload::Ten as usize],
        workload20: buckets[Workload::Twenty as usize],
        workload30: buckets[Workload::Thirty as usize],
        workload40: buckets[Workload::Forty as usize],
        average_age: round_half_up(average_age, 1),
        min_age,
        max_age,
        median_age: round_to_whole(median_age)?,
        median_workload: round_to_whole(median_workload)?,
        average_women_workload,
        sorted_by_workload,
    })
}

/// Maps an employee's workload onto the canonical set, or reports it.
pub(crate) fn canonical_workload(index: usize, employee: &Employee) -> RosterResult<Workload> {
    Workload::from_percent(employee.workload).ok_or_else(|| {
        warn!(index, workload = employee.workload, "Employee has a non-canonical workload");
        RosterError::DataIntegrity {
            index,
            message: format!(
                "workload {} is not one of 10, 20, 30, 40",
                employee.workload
            ),
        }
    })
}

fn checked_age(index: usize, employee: &Employee, today: NaiveDate) -> RosterResult<u32> {
    u32::try_from(employee.age_on(today)).map_err(|_| {
        warn!(index, birthdate = %employee.birthdate, "Employee born after evaluation date");
        RosterError::DataIntegrity {
            index,
            message: format!(
                "birthdate {} is after the evaluation date {}",
                employee.birthdate, today
            ),
        }
    })
}
