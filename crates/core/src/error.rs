use chrono::NaiveDate;
use thiserror::Error;

/// A trip request that cannot be planned.
///
/// Every variant is raised before any advisor is consulted; advisor failures
/// are soft and never surface here.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PlanError {
    #[error("destination must not be empty")]
    EmptyDestination,

    #[error("{field} '{value}' is not a valid YYYY-MM-DD date")]
    InvalidDate { field: &'static str, value: String },

    #[error("end_date {end} is before start_date {start}")]
    EndBeforeStart { start: NaiveDate, end: NaiveDate },

    #[error("budget must be a positive amount, got {0}")]
    InvalidBudget(f64),

    #[error("trip duration must be at least one day, got {0}")]
    InvalidDuration(i64),

    #[error("trip of {days} days exceeds this service's limit of {max} days")]
    TripTooLong { days: i64, max: u32 },
}

impl PlanError {
    /// Stable error code used in wire payloads.
    pub fn code(&self) -> &'static str {
        "invalid_trip_request"
    }
}
