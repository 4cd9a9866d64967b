//! Synthetic employee generation.
//!
//! This module provides the [`EmployeeGenerator`], which draws rosters of
//! employees whose ages fall in a requested [`AgeRange`].

use chrono::{DateTime, Duration, NaiveTime, Utc};
use rand::Rng;
use tracing::debug;

use crate::config::{GeneratorLimits, NamePools, RosterConfig};
use crate::error::{RosterError, RosterResult};
use crate::models::{Employee, Gender, Workload};

use super::age::{AgeRange, birthdate_window};

/// Generates synthetic employees from a set of name pools.
///
/// Randomness and the evaluation instant are inputs to
/// [`generate_with`](EmployeeGenerator::generate_with), so a seeded generator
/// and a fixed instant reproduce the same roster.
///
/// # Example
///
/// ```
/// use roster_stats::calculation::{AgeRange, EmployeeGenerator};
/// use roster_stats::config::{GeneratorLimits, NamePools};
/// use chrono::{TimeZone, Utc};
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let pools = NamePools::new(vec!["Kai".into()], vec!["Zeman".into()]).unwrap();
/// let generator = EmployeeGenerator::new(pools, GeneratorLimits::default());
///
/// let now = Utc.with_ymd_and_hms(2026, 10, 17, 9, 30, 0).unwrap();
/// let ages = AgeRange::new(20, 30).unwrap();
/// let mut rng = StdRng::seed_from_u64(7);
///
/// let roster = generator.generate_with(&mut rng, now, 5, ages).unwrap();
/// assert_eq!(roster.len(), 5);
/// assert!(roster.iter().all(|e| ages.contains(e.age_on(now.date_naive()))));
/// ```
#[derive(Debug, Clone)]
pub struct EmployeeGenerator {
    pools: NamePools,
    limits: GeneratorLimits,
}

impl EmployeeGenerator {
    /// Creates a generator drawing from `pools`, bounded by `limits`.
    pub fn new(pools: NamePools, limits: GeneratorLimits) -> Self {
        Self { pools, limits }
    }

    /// Creates a generator from a loaded configuration.
    pub fn from_config(config: &RosterConfig) -> Self {
        Self::new(config.pools().clone(), config.limits())
    }

    /// Returns the name pools.
    pub fn pools(&self) -> &NamePools {
        &self.pools
    }

    /// Returns the generator limits.
    pub fn limits(&self) -> GeneratorLimits {
        self.limits
    }

    /// Generates `count` employees using the thread-local RNG and the current time.
    pub fn generate(&self, count: usize, ages: AgeRange) -> RosterResult<Vec<Employee>> {
        self.generate_with(&mut rand::rng(), Utc::now(), count, ages)
    }

    /// Generates `count` employees aged within `ages` at the instant `now`.
    ///
    /// Each employee is drawn independently:
    /// 1. gender, male or female with equal probability
    /// 2. birthdate, a uniform instant over the UTC days of [`birthdate_window`],
    ///    never later than `now`
    /// 3. first and last name, uniform with replacement
    /// 4. workload, uniform over 10, 20, 30 and 40
    ///
    /// # Arguments
    ///
    /// * `rng` - Source of randomness; a seeded RNG reproduces the roster
    /// * `now` - Evaluation instant; its UTC date is the date ages are measured on
    /// * `count` - Number of employees to draw
    /// * `ages` - Inclusive range every generated age falls in
    ///
    /// # Returns
    ///
    /// The generated employees, in draw order.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `count` exceeds the configured maximum or
    /// the age range reaches past the supported calendar.
    pub fn generate_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        now: DateTime<Utc>,
        count: usize,
        ages: AgeRange,
    ) -> RosterResult<Vec<Employee>> {
        if count > self.limits.max_count {
            return Err(RosterError::invalid(
                "count",
                format!(
                    "{} exceeds the maximum roster size of {}",
                    count, self.limits.max_count
                ),
            ));
        }

        let (earliest, latest) = birthdate_window(now.date_naive(), ages)?;
        let window_start = earliest.and_time(NaiveTime::MIN).and_utc();
        // The latest day may be today, which ends at `now`.
        let window_end = (latest.and_time(NaiveTime::MIN).and_utc() + Duration::days(1)).min(now);
        let window_millis = (window_end - window_start).num_milliseconds();

        debug!(
            count,
            min_age = ages.min(),
            max_age = ages.max(),
            earliest = %earliest,
            latest = %latest,
            "Generating roster"
        );

        let mut employees = Vec::with_capacity(count);
        for _ in 0..count {
            employees.push(self.draw(rng, window_start, window_millis));
        }

        Ok(employees)
    }

    fn draw<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        window_start: DateTime<Utc>,
        window_millis: i64,
    ) -> Employee {
        let gender = if rng.random_bool(0.5) {
            Gender::Female
        } else {
            Gender::Male
        };
        let birthdate = window_start + Duration::milliseconds(rng.random_range(0..window_millis));
        let first_name = pick(rng, self.pools.first_names()).to_string();
        let last_name = pick(rng, self.pools.last_names()).to_string();
        let workload = Workload::ALL[rng.random_range(0..Workload::ALL.len())];

        Employee {
            gender,
            birthdate,
            first_name,
            last_name,
            workload: workload.percent(),
        }
    }
}

// Pools are non-empty by construction.
fn pick<'a, R: Rng + ?Sized>(rng: &mut R, pool: &'a [String]) -> &'a str {
    &pool[rng.random_range(0..pool.len())]
}
