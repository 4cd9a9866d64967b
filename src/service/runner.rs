//! The generate-then-summarize pipeline.

use std::time::Instant;

use chrono::{DateTime, Utc};
use rand::Rng;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{EmployeeGenerator, summarize_on};
use crate::config::{ConfigLoader, RosterConfig};
use crate::error::{RosterError, RosterResult};
use crate::models::Summary;

use super::request::RosterRequest;

/// Generates a roster for a request and summarizes it.
///
/// A request for zero employees validates, generates an empty roster and
/// then fails with `EmptyInput`, because the summary has no defined averages.
///
/// # Example
///
/// ```
/// use roster_stats::service::{RosterRequest, RosterService};
///
/// let service = RosterService::builtin().unwrap();
/// let summary = service.run(&RosterRequest::new(40, 20, 30)).unwrap();
///
/// assert_eq!(summary.total, 40);
/// assert!(summary.min_age >= 20 && summary.max_age <= 30);
/// ```
#[derive(Debug, Clone)]
pub struct RosterService {
    generator: EmployeeGenerator,
}

impl RosterService {
    /// Creates a service from a loaded configuration.
    pub fn new(config: &RosterConfig) -> Self {
        Self {
            generator: EmployeeGenerator::from_config(config),
        }
    }

    /// Creates a service from the configuration compiled into the crate.
    pub fn builtin() -> RosterResult<Self> {
        let loader = ConfigLoader::builtin()?;
        Ok(Self::new(loader.config()))
    }

    /// Returns the generator used by this service.
    pub fn generator(&self) -> &EmployeeGenerator {
        &self.generator
    }

    /// Runs the pipeline with the thread-local RNG and the current time.
    pub fn run(&self, request: &RosterRequest) -> RosterResult<Summary> {
        self.run_with(&mut rand::rng(), Utc::now(), request)
    }

    /// Runs the pipeline with an explicit random source and evaluation instant.
    ///
    /// The UTC date of `now` is used to place birthdates and to derive ages, so
    /// the summary always reports ages inside the requested range.
    ///
    /// # Arguments
    ///
    /// * `rng` - Source of randomness for the generator
    /// * `now` - Evaluation instant; no birthdate is placed after it
    /// * `request` - The unvalidated roster request
    ///
    /// # Returns
    ///
    /// The summary of the generated roster, or the first validation,
    /// generation or aggregation error.
    pub fn run_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        now: DateTime<Utc>,
        request: &RosterRequest,
    ) -> RosterResult<Summary> {
        let correlation_id = Uuid::new_v4();
        info!(correlation_id = %correlation_id, count = request.count, "Processing roster request");

        let start_time = Instant::now();
        let result = request
            .validate()
            .and_then(|(count, ages)| self.generator.generate_with(rng, now, count, ages))
            .and_then(|employees| summarize_on(&employees, now.date_naive()));

        match &result {
            Ok(summary) => info!(
                correlation_id = %correlation_id,
                total = summary.total,
                duration_us = start_time.elapsed().as_micros() as u64,
                "Roster summarized"
            ),
            Err(err) => warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Roster request failed"
            ),
        }

        result
    }

    /// Runs the pipeline on a JSON request body and returns the JSON summary.
    ///
    /// # Errors
    ///
    /// Returns `MalformedRequest` if the body is not a valid request, and
    /// otherwise the errors of [`run`](Self::run).
    ///
    /// # Example
    ///
    /// ```
    /// use roster_stats::service::RosterService;
    ///
    /// let service = RosterService::builtin().unwrap();
    /// let body = service.run_json(r#"{"count": 10, "age": {"min": 25, "max": 25}}"#).unwrap();
    ///
    /// let summary: serde_json::Value = serde_json::from_str(&body).unwrap();
    /// assert_eq!(summary["total"], 10);
    /// assert_eq!(summary["medianAge"], 25);
    /// ```
    pub fn run_json(&self, body: &str) -> RosterResult<String> {
        let request: RosterRequest = serde_json::from_str(body).map_err(|e| {
            warn!(error = %e, "Malformed roster request");
            RosterError::MalformedRequest {
                message: e.to_string(),
            }
        })?;

        let summary = self.run(&request)?;

        serde_json::to_string(&summary).map_err(|e| RosterError::CalculationError {
            message: format!("Failed to serialize summary: {}", e),
        })
    }
}
