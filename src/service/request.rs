//! Request types for the roster pipeline.
//!
//! This module defines the JSON input accepted by
//! [`RosterService`](super::RosterService). Integers are signed on the wire so
//! that negative values reach validation instead of failing to decode.

use serde::{Deserialize, Serialize};

use crate::calculation::AgeRange;
use crate::error::{RosterError, RosterResult};

/// Input of a generate-then-summarize run.
///
/// # Example
///
/// ```
/// use roster_stats::service::RosterRequest;
///
/// let request: RosterRequest =
///     serde_json::from_str(r#"{"count": 50, "age": {"min": 19, "max": 35}}"#).unwrap();
/// let (count, ages) = request.validate().unwrap();
///
/// assert_eq!(count, 50);
/// assert_eq!((ages.min(), ages.max()), (19, 35));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterRequest {
    /// Number of employees to generate.
    pub count: i64,
    /// Admissible ages of the generated employees.
    pub age: AgeBoundsRequest,
}

/// Age bounds in a roster request, both inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeBoundsRequest {
    /// Youngest admissible age.
    pub min: i64,
    /// Oldest admissible age.
    pub max: i64,
}

impl RosterRequest {
    /// Creates a request.
    pub fn new(count: i64, min_age: i64, max_age: i64) -> Self {
        Self {
            count,
            age: AgeBoundsRequest {
                min: min_age,
                max: max_age,
            },
        }
    }

    /// Checks the request and converts it into a roster size and age range.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for a negative count, a negative minimum age,
    /// a minimum above the maximum, or values too large to represent.
    pub fn validate(&self) -> RosterResult<(usize, AgeRange)> {
        if self.count < 0 {
            return Err(RosterError::invalid("count", "must not be negative"));
        }
        if self.age.min < 0 {
            return Err(RosterError::invalid("age.min", "must not be negative"));
        }
        if self.age.min > self.age.max {
            return Err(RosterError::invalid(
                "age.min",
                format!(
                    "minimum age {} exceeds maximum age {}",
                    self.age.min, self.age.max
                ),
            ));
        }

        let count = usize::try_from(self.count)
            .map_err(|_| RosterError::invalid("count", "value is too large"))?;
        let min = u32::try_from(self.age.min)
            .map_err(|_| RosterError::invalid("age.min", "value is too large"))?;
        let max = u32::try_from(self.age.max)
            .map_err(|_| RosterError::invalid("age.max", "value is too large"))?;

        Ok((count, AgeRange::new(min, max)?))
    }
}
