pub mod advisors;
pub mod destination;
pub mod error;
pub mod itinerary;
pub mod models;
pub mod planner;
pub mod preferences;

pub use destination::{BudgetShares, BudgetTier, Destination};
pub use error::PlanError;
pub use itinerary::{build_daily_plans, hotel_suggestions};
pub use models::*;
pub use planner::{compose_plan, estimate_cost};
pub use preferences::{parse_preferences, PreferenceFlags};
