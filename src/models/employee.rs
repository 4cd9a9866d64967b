//! Employee model and related types.
//!
//! This module defines the Employee struct together with the Gender and
//! Workload enums used to describe a generated roster entry.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::calculation::age_in_years;

/// The gender recorded on an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male employee.
    Male,
    /// Female employee.
    Female,
}

/// The discrete workload levels an employee can be generated with.
///
/// The numeric value is the employment fraction in percent.
///
/// # Example
///
/// ```
/// use roster_stats::models::Workload;
///
/// assert_eq!(Workload::from_percent(30), Some(Workload::Thirty));
/// assert_eq!(Workload::from_percent(25), None);
/// assert_eq!(Workload::Forty.percent(), 40);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Workload {
    /// 10 percent.
    Ten,
    /// 20 percent.
    Twenty,
    /// 30 percent.
    Thirty,
    /// 40 percent.
    Forty,
}

impl Workload {
    /// Every workload level, in ascending order.
    pub const ALL: [Workload; 4] = [
        Workload::Ten,
        Workload::Twenty,
        Workload::Thirty,
        Workload::Forty,
    ];

    /// Returns the workload as a percentage.
    pub fn percent(self) -> u32 {
        match self {
            Workload::Ten => 10,
            Workload::Twenty => 20,
            Workload::Thirty => 30,
            Workload::Forty => 40,
        }
    }

    /// Maps a percentage back to its workload level, if it is one.
    pub fn from_percent(percent: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|w| w.percent() == percent)
    }
}

impl std::fmt::Display for Workload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.percent())
    }
}

/// A single synthetic employee.
///
/// On the wire the first and last names travel as `name` and `surname`,
/// and the birthdate as an RFC 3339 timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// The employee's gender.
    pub gender: Gender,
    /// The instant the employee was born.
    pub birthdate: DateTime<Utc>,
    /// The employee's first name.
    #[serde(rename = "name")]
    pub first_name: String,
    /// The employee's last name.
    #[serde(rename = "surname")]
    pub last_name: String,
    /// Workload in percent. Generated rosters only contain 10, 20, 30 or 40.
    pub workload: u32,
}

impl Employee {
    /// Returns true if the employee is female.
    ///
    /// # Examples
    ///
    /// ```
    /// use roster_stats::models::{Employee, Gender};
    /// use chrono::{TimeZone, Utc};
    ///
    /// let employee = Employee {
    ///     gender: Gender::Female,
    ///     birthdate: Utc.with_ymd_and_hms(1990, 1, 15, 8, 30, 0).unwrap(),
    ///     first_name: "Laura".to_string(),
    ///     last_name: "Novák".to_string(),
    ///     workload: 30,
    /// };
    /// assert!(employee.is_female());
    /// ```
    pub fn is_female(&self) -> bool {
        self.gender == Gender::Female
    }

    /// Returns the employee's age in whole years on the given date.
    ///
    /// The birthdate is read as a UTC calendar date.
    pub fn age_on(&self, date: NaiveDate) -> i32 {
        age_in_years(self.birthdate.date_naive(), date)
    }
}
