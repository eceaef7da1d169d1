mod suite;

use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::time::timeout;
use tracing::{info, instrument, warn};
use uuid::Uuid;
use zenjourney_core::{
    build_daily_plans, compose_plan, hotel_suggestions, AdvisorKind, AdvisorOutcome,
    AdvisorResults, PlanError, TravelPlan, TripPlanInput, TripRequest,
};
use zenjourney_observability::AppMetrics;

pub use suite::{AdvisorSuite, LocalAdvisors};

pub const DEFAULT_ADVISOR_TIMEOUT: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlannerSettings {
    pub advisor_timeout: Duration,
}

impl Default for PlannerSettings {
    fn default() -> Self {
        Self {
            advisor_timeout: DEFAULT_ADVISOR_TIMEOUT,
        }
    }
}

/// Consults every advisor for a request and composes the result.
pub struct TripPlanner<A> {
    advisors: Arc<A>,
    settings: PlannerSettings,
    metrics: Arc<AppMetrics>,
}

impl<A> Clone for TripPlanner<A> {
    fn clone(&self) -> Self {
        Self {
            advisors: Arc::clone(&self.advisors),
            settings: self.settings,
            metrics: Arc::clone(&self.metrics),
        }
    }
}

impl TripPlanner<LocalAdvisors> {
    pub fn local(settings: PlannerSettings, metrics: Arc<AppMetrics>) -> Self {
        Self::new(Arc::new(LocalAdvisors), settings, metrics)
    }
}

impl<A> TripPlanner<A>
where
    A: AdvisorSuite,
{
    pub fn new(advisors: Arc<A>, settings: PlannerSettings, metrics: Arc<AppMetrics>) -> Self {
        Self {
            advisors,
            settings,
            metrics,
        }
    }

    pub fn settings(&self) -> PlannerSettings {
        self.settings
    }

    pub fn metrics(&self) -> &Arc<AppMetrics> {
        &self.metrics
    }

    /// Validates raw input and plans the trip. Invalid input is rejected
    /// before any advisor runs.
    #[instrument(skip(self, input), fields(destination = %input.destination))]
    pub async fn plan_trip(&self, input: TripPlanInput) -> Result<TravelPlan, PlanError> {
        self.metrics.inc_request();
        let request = input.validate().inspect_err(|err| {
            self.metrics.inc_validation_rejection();
            warn!(error = %err, "trip request rejected");
        })?;
        Ok(self.plan(&request).await)
    }

    /// Consults the advisors one after another. Failures never abort the plan.
    pub async fn plan(&self, request: &TripRequest) -> TravelPlan {
        let started = Instant::now();
        let destination = request.destination();
        let duration = request.duration();

        let weather = self
            .consult(AdvisorKind::Weather, self.advisors.weather(destination))
            .await;
        let budget = self
            .consult(
                AdvisorKind::Budget,
                self.advisors
                    .budget(destination, request.total_budget(), duration),
            )
            .await;
        let photo_spots = self
            .consult(
                AdvisorKind::PhotoSpots,
                self.advisors.photo_spots(destination),
            )
            .await;
        let dietary = self
            .consult(
                AdvisorKind::Dietary,
                self.advisors.dietary(destination, request.preferences()),
            )
            .await;
        let transportation = self
            .consult(
                AdvisorKind::Transportation,
                self.advisors.transportation(destination, duration),
            )
            .await;
        let events = self
            .consult(
                AdvisorKind::Events,
                self.advisors
                    .events(destination, request.start_date(), request.end_date()),
            )
            .await;

        let results = AdvisorResults {
            weather,
            budget,
            photo_spots,
            dietary,
            transportation,
            events,
        };

        let (itinerary, hotels) = {
            let mut rng = rand::rng();
            let itinerary =
                build_daily_plans(destination, duration, results.weather.as_ok(), &mut rng);
            (itinerary, hotel_suggestions(&mut rng))
        };

        let plan = compose_plan(
            request,
            results,
            itinerary,
            hotels,
            Uuid::new_v4().to_string(),
        );

        self.metrics.observe_plan(started.elapsed());
        info!(
            plan_id = %plan.plan_id,
            destination = %plan.destination,
            days = plan.total_days,
            unavailable = plan.unavailable.len(),
            estimated_cost = plan.estimated_cost,
            "travel plan composed"
        );
        plan
    }

    async fn consult<T, F>(&self, kind: AdvisorKind, call: F) -> AdvisorOutcome<T>
    where
        F: Future<Output = anyhow::Result<T>>,
    {
        let reason = match timeout(self.settings.advisor_timeout, call).await {
            Ok(Ok(value)) => return AdvisorOutcome::Ok(value),
            Ok(Err(err)) => format!("{err:#}"),
            Err(_) => format!(
                "no answer within {}ms",
                self.settings.advisor_timeout.as_millis()
            ),
        };

        self.metrics.inc_advisor_unavailable();
        metrics::counter!("zenjourney_advisor_unavailable_total", "advisor" => kind.as_str())
            .increment(1);
        warn!(advisor = kind.as_str(), reason = %reason, "advisor unavailable");
        AdvisorOutcome::unavailable(reason)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use anyhow::{bail, Result};
    use chrono::NaiveDate;
    use zenjourney_core::{
        BudgetAllocation, PreferencesField, TransportEstimate, TripDuration, WeatherReport,
    };

    use super::*;

    /// Delegates to [`LocalAdvisors`] but can break or stall one category.
    #[derive(Default)]
    struct ScriptedAdvisors {
        failing: Option<AdvisorKind>,
        stalled: Option<AdvisorKind>,
        calls: AtomicUsize,
    }

    impl ScriptedAdvisors {
        async fn gate(&self, kind: AdvisorKind) -> Result<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.stalled == Some(kind) {
                tokio::time::sleep(Duration::from_millis(500)).await;
            }
            if self.failing == Some(kind) {
                bail!("{} backend offline", kind.as_str());
            }
            Ok(())
        }
    }

    impl AdvisorSuite for ScriptedAdvisors {
        async fn weather(&self, destination: &str) -> Result<WeatherReport> {
            self.gate(AdvisorKind::Weather).await?;
            LocalAdvisors.weather(destination).await
        }

        async fn budget(
            &self,
            destination: &str,
            total_budget: f64,
            duration: TripDuration,
        ) -> Result<BudgetAllocation> {
            self.gate(AdvisorKind::Budget).await?;
            LocalAdvisors.budget(destination, total_budget, duration).await
        }

        async fn photo_spots(&self, destination: &str) -> Result<String> {
            self.gate(AdvisorKind::PhotoSpots).await?;
            LocalAdvisors.photo_spots(destination).await
        }

        async fn dietary(&self, destination: &str, preferences: &str) -> Result<String> {
            self.gate(AdvisorKind::Dietary).await?;
            LocalAdvisors.dietary(destination, preferences).await
        }

        async fn transportation(
            &self,
            destination: &str,
            duration: TripDuration,
        ) -> Result<TransportEstimate> {
            self.gate(AdvisorKind::Transportation).await?;
            LocalAdvisors.transportation(destination, duration).await
        }

        async fn events(
            &self,
            destination: &str,
            start: NaiveDate,
            end: NaiveDate,
        ) -> Result<String> {
            self.gate(AdvisorKind::Events).await?;
            LocalAdvisors.events(destination, start, end).await
        }
    }

    fn planner(advisors: ScriptedAdvisors) -> (TripPlanner<ScriptedAdvisors>, Arc<ScriptedAdvisors>) {
        let advisors = Arc::new(advisors);
        let settings = PlannerSettings {
            advisor_timeout: Duration::from_millis(50),
        };
        (
            TripPlanner::new(Arc::clone(&advisors), settings, AppMetrics::shared()),
            advisors,
        )
    }

    fn input(destination: &str, start: &str, end: &str) -> TripPlanInput {
        TripPlanInput {
            destination: destination.to_string(),
            start_date: start.to_string(),
            end_date: end.to_string(),
            budget: 2500.0,
            preferences: PreferencesField::Text("vegetarian, local food".to_string()),
        }
    }

    #[tokio::test]
    async fn all_advisors_answer_for_a_known_city() {
        let (planner, advisors) = planner(ScriptedAdvisors::default());
        let plan = planner
            .plan_trip(input("Tokyo", "2025-04-01", "2025-04-05"))
            .await
            .unwrap();

        assert_eq!(advisors.calls.load(Ordering::SeqCst), 6);
        assert!(plan.unavailable.is_empty());
        assert_eq!(plan.total_days, 5);
        assert_eq!(plan.itinerary.len(), 5);
        assert_eq!(plan.hotel_suggestions.len(), 3);
        assert!(plan.estimated_cost <= plan.requested_budget);
        assert!(plan.report.contains("VEGETARIAN/VEGAN IN TOKYO"));
        assert!(Uuid::parse_str(&plan.plan_id).is_ok());

        let snapshot = planner.metrics().snapshot();
        assert_eq!(snapshot.requests_total, 1);
        assert_eq!(snapshot.plans_total, 1);
    }

    #[tokio::test]
    async fn failing_advisor_becomes_a_placeholder() {
        let (planner, advisors) = planner(ScriptedAdvisors {
            failing: Some(AdvisorKind::Events),
            ..Default::default()
        });
        let plan = planner
            .plan_trip(input("Paris", "2025-07-01", "2025-07-03"))
            .await
            .unwrap();

        assert_eq!(advisors.calls.load(Ordering::SeqCst), 6);
        assert_eq!(plan.unavailable, vec![AdvisorKind::Events]);
        assert!(plan.report.contains("Event information unavailable"));
        assert!(plan.report.contains("GETTING AROUND PARIS"));
        assert_eq!(planner.metrics().snapshot().advisor_unavailable_total, 1);
    }

    #[tokio::test]
    async fn stalled_advisor_times_out_and_the_rest_still_run() {
        let (planner, advisors) = planner(ScriptedAdvisors {
            stalled: Some(AdvisorKind::Weather),
            ..Default::default()
        });
        let plan = planner
            .plan_trip(input("Bali", "2025-01-10", "2025-01-12"))
            .await
            .unwrap();

        assert_eq!(advisors.calls.load(Ordering::SeqCst), 6);
        assert_eq!(plan.unavailable, vec![AdvisorKind::Weather]);
        assert_eq!(plan.sections.weather, "Weather information unavailable");
        assert_eq!(plan.sections.packing, "Packing suggestions unavailable");
        assert!(plan.sections.budget.contains("ALLOCATION"));
        assert!(plan.itinerary.iter().all(|day| {
            let celsius: i32 = day.weather.split("°C").next().unwrap().parse().unwrap();
            (15..=30).contains(&celsius)
        }));
    }

    #[tokio::test]
    async fn budget_failure_falls_back_to_the_requested_amount() {
        let (planner, _) = planner(ScriptedAdvisors {
            failing: Some(AdvisorKind::Budget),
            ..Default::default()
        });
        let plan = planner
            .plan_trip(input("London", "2025-05-01", "2025-05-04"))
            .await
            .unwrap();

        assert_eq!(plan.estimated_cost, 2500.0);
        assert_eq!(plan.cost_breakdown.transportation, Some(60.0));
        assert!(plan.report.contains("Budget breakdown unavailable"));
    }

    #[tokio::test]
    async fn invalid_requests_never_reach_the_advisors() {
        let (planner, advisors) = planner(ScriptedAdvisors::default());

        let err = planner
            .plan_trip(input("Rome", "2025-05-10", "2025-05-01"))
            .await
            .unwrap_err();
        assert!(matches!(err, PlanError::EndBeforeStart { .. }));

        let err = planner
            .plan_trip(input("Rome", "May 1st", "2025-05-03"))
            .await
            .unwrap_err();
        assert!(matches!(err, PlanError::InvalidDate { field: "start_date", .. }));

        assert_eq!(advisors.calls.load(Ordering::SeqCst), 0);
        let snapshot = planner.metrics().snapshot();
        assert_eq!(snapshot.validation_rejections_total, 2);
        assert_eq!(snapshot.plans_total, 0);
    }
}
