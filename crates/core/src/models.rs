use chrono::NaiveDate;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::destination::BudgetTier;
use crate::error::PlanError;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const MAX_TRIP_DAYS: u32 = 90;

/// Preferences arrive either as free text or as a list of tags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PreferencesField {
    Text(String),
    List(Vec<String>),
}

impl Default for PreferencesField {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl PreferencesField {
    pub fn collapse(&self) -> String {
        match self {
            Self::Text(text) => text.trim().to_string(),
            Self::List(items) => items
                .iter()
                .map(|item| item.trim())
                .filter(|item| !item.is_empty())
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

/// Raw travel request as received from a caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripPlanInput {
    pub destination: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(alias = "total_budget")]
    pub budget: f64,
    #[serde(default)]
    pub preferences: PreferencesField,
}

impl TripPlanInput {
    pub fn validate(&self) -> Result<TripRequest, PlanError> {
        let start_date = parse_date("start_date", &self.start_date)?;
        let end_date = parse_date("end_date", &self.end_date)?;
        TripRequest::new(
            &self.destination,
            start_date,
            end_date,
            self.budget,
            self.preferences.collapse(),
        )
    }
}

pub fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, PlanError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| PlanError::InvalidDate {
        field,
        value: value.to_string(),
    })
}

/// A validated trip request. Only constructible through [`TripRequest::new`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripRequest {
    destination: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    total_budget: f64,
    preferences: String,
}

impl TripRequest {
    pub fn new(
        destination: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
        total_budget: f64,
        preferences: impl Into<String>,
    ) -> Result<Self, PlanError> {
        let destination = destination.split_whitespace().collect::<Vec<_>>().join(" ");
        if destination.is_empty() {
            return Err(PlanError::EmptyDestination);
        }
        if end_date < start_date {
            return Err(PlanError::EndBeforeStart {
                start: start_date,
                end: end_date,
            });
        }
        if !total_budget.is_finite() || total_budget <= 0.0 {
            return Err(PlanError::InvalidBudget(total_budget));
        }

        let request = Self {
            destination,
            start_date,
            end_date,
            total_budget,
            preferences: preferences.into(),
        };
        let days = request.span_days();
        if days > i64::from(MAX_TRIP_DAYS) {
            return Err(PlanError::TripTooLong {
                days,
                max: MAX_TRIP_DAYS,
            });
        }
        Ok(request)
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    pub fn total_budget(&self) -> f64 {
        self.total_budget
    }

    pub fn preferences(&self) -> &str {
        &self.preferences
    }

    pub fn duration(&self) -> TripDuration {
        // Bounded by MAX_TRIP_DAYS and end >= start in `new`.
        TripDuration(self.span_days() as u32)
    }

    fn span_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}

/// Inclusive number of days covered by a trip, always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct TripDuration(u32);

impl TripDuration {
    pub fn from_days(days: i64) -> Result<Self, PlanError> {
        if days < 1 {
            return Err(PlanError::InvalidDuration(days));
        }
        u32::try_from(days)
            .map(Self)
            .map_err(|_| PlanError::InvalidDuration(days))
    }

    pub fn days(self) -> u32 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvisorKind {
    Weather,
    Budget,
    PhotoSpots,
    Dietary,
    Transportation,
    Events,
}

impl AdvisorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Weather => "weather",
            Self::Budget => "budget",
            Self::PhotoSpots => "photo_spots",
            Self::Dietary => "dietary",
            Self::Transportation => "transportation",
            Self::Events => "events",
        }
    }
}

/// Result of consulting one advisor. `Unavailable` keeps the failure visible
/// while letting composition continue.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum AdvisorOutcome<T> {
    Ok(T),
    Unavailable { reason: String },
}

impl<T> AdvisorOutcome<T> {
    pub fn unavailable<S: Into<String>>(reason: S) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }

    pub fn as_ok(&self) -> Option<&T> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Unavailable { .. } => None,
        }
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub forecast: String,
    pub avg_temp_c: f64,
    pub clothing_suggestions: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetAllocation {
    pub tier: BudgetTier,
    pub accommodation: f64,
    pub food: f64,
    pub transportation: f64,
    pub activities: f64,
    pub shopping: f64,
    pub duration_days: u32,
    pub breakdown: String,
}

impl BudgetAllocation {
    pub fn total(&self) -> f64 {
        self.accommodation + self.food + self.transportation + self.activities + self.shopping
    }

    pub fn daily(&self, amount: f64) -> f64 {
        amount / f64::from(self.duration_days)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransportEstimate {
    pub recommendations: String,
    pub estimated_cost: f64,
}

/// Everything the dispatcher gathered for one request.
#[derive(Debug, Clone)]
pub struct AdvisorResults {
    pub weather: AdvisorOutcome<WeatherReport>,
    pub budget: AdvisorOutcome<BudgetAllocation>,
    pub photo_spots: AdvisorOutcome<String>,
    pub dietary: AdvisorOutcome<String>,
    pub transportation: AdvisorOutcome<TransportEstimate>,
    pub events: AdvisorOutcome<String>,
}

impl AdvisorResults {
    pub fn unavailable(&self) -> Vec<AdvisorKind> {
        let flags = [
            (AdvisorKind::Weather, self.weather.is_unavailable()),
            (AdvisorKind::Budget, self.budget.is_unavailable()),
            (AdvisorKind::PhotoSpots, self.photo_spots.is_unavailable()),
            (AdvisorKind::Dietary, self.dietary.is_unavailable()),
            (
                AdvisorKind::Transportation,
                self.transportation.is_unavailable(),
            ),
            (AdvisorKind::Events, self.events.is_unavailable()),
        ];
        flags
            .into_iter()
            .filter_map(|(kind, missing)| missing.then_some(kind))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyPlan {
    pub weather: String,
    pub breakfast: String,
    pub must_visit: String,
    pub local_event: String,
    pub dinner: String,
    pub hotel_suggestion: String,
    pub travel_distance: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotelSuggestion {
    pub name: String,
    pub rating: u8,
    pub price_per_night: u32,
    pub amenities: Vec<String>,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub requested_budget: f64,
    pub accommodation: Option<f64>,
    pub food: Option<f64>,
    pub activities: Option<f64>,
    pub shopping: Option<f64>,
    pub transportation: Option<f64>,
    pub transportation_source: Option<AdvisorKind>,
    pub estimated_cost: f64,
}

/// Category text per section, placeholders included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanSections {
    pub weather: String,
    pub packing: String,
    pub budget: String,
    pub photo_spots: String,
    pub food: String,
    pub transportation: String,
    pub events: String,
}

/// The composed itinerary returned to callers.
#[derive(Debug, Clone, Serialize)]
pub struct TravelPlan {
    pub plan_id: String,
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_days: u32,
    #[serde(serialize_with = "serialize_day_map")]
    pub itinerary: Vec<DailyPlan>,
    pub estimated_cost: f64,
    pub requested_budget: f64,
    pub cost_breakdown: CostBreakdown,
    pub hotel_suggestions: Vec<HotelSuggestion>,
    pub sections: PlanSections,
    pub report: String,
    pub unavailable: Vec<AdvisorKind>,
}

pub fn day_label(day: usize) -> String {
    format!("Day {day}")
}

fn serialize_day_map<S>(days: &[DailyPlan], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut map = serializer.serialize_map(Some(days.len()))?;
    for (index, plan) in days.iter().enumerate() {
        map.serialize_entry(&day_label(index + 1), plan)?;
    }
    map.end()
}
