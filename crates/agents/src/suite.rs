use anyhow::Result;
use chrono::NaiveDate;
use zenjourney_core::advisors::{budget, dietary, events, photo_spots, transport, weather};
use zenjourney_core::{BudgetAllocation, TransportEstimate, TripDuration, WeatherReport};

/// The set of category advisors a [`TripPlanner`](crate::TripPlanner) consults.
///
/// Implementations may fail or stall; the planner turns either into an
/// unavailable section instead of failing the whole plan.
pub trait AdvisorSuite: Send + Sync {
    async fn weather(&self, destination: &str) -> Result<WeatherReport>;
    async fn budget(
        &self,
        destination: &str,
        total_budget: f64,
        duration: TripDuration,
    ) -> Result<BudgetAllocation>;
    async fn photo_spots(&self, destination: &str) -> Result<String>;
    async fn dietary(&self, destination: &str, preferences: &str) -> Result<String>;
    async fn transportation(
        &self,
        destination: &str,
        duration: TripDuration,
    ) -> Result<TransportEstimate>;
    async fn events(&self, destination: &str, start: NaiveDate, end: NaiveDate)
        -> Result<String>;
}

/// In-process advisors backed by the static knowledge in `zenjourney-core`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalAdvisors;

impl AdvisorSuite for LocalAdvisors {
    async fn weather(&self, destination: &str) -> Result<WeatherReport> {
        Ok(weather::forecast(destination))
    }

    async fn budget(
        &self,
        destination: &str,
        total_budget: f64,
        duration: TripDuration,
    ) -> Result<BudgetAllocation> {
        Ok(budget::allocate(destination, total_budget, duration.days())?)
    }

    async fn photo_spots(&self, destination: &str) -> Result<String> {
        Ok(photo_spots::recommend(destination))
    }

    async fn dietary(&self, destination: &str, preferences: &str) -> Result<String> {
        Ok(dietary::recommend(destination, preferences))
    }

    async fn transportation(
        &self,
        destination: &str,
        duration: TripDuration,
    ) -> Result<TransportEstimate> {
        Ok(transport::recommend(destination, duration))
    }

    async fn events(
        &self,
        destination: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<String> {
        Ok(events::recommend(destination, start, end))
    }
}
