use std::fmt::Write as _;

use crate::models::{
    AdvisorKind, AdvisorOutcome, AdvisorResults, BudgetAllocation, CostBreakdown, DailyPlan,
    HotelSuggestion, PlanSections, TransportEstimate, TravelPlan, TripRequest,
};

const WEATHER_UNAVAILABLE: &str = "Weather information unavailable";
const PACKING_UNAVAILABLE: &str = "Packing suggestions unavailable";
const BUDGET_UNAVAILABLE: &str = "Budget breakdown unavailable";
const PHOTO_SPOTS_UNAVAILABLE: &str = "Photo spot recommendations unavailable";
const FOOD_UNAVAILABLE: &str = "Dietary recommendations unavailable";
const TRANSPORTATION_UNAVAILABLE: &str = "Transportation recommendations unavailable";
const EVENTS_UNAVAILABLE: &str = "Event information unavailable";

/// Assembles the final plan from whatever the advisors returned.
pub fn compose_plan(
    request: &TripRequest,
    results: AdvisorResults,
    itinerary: Vec<DailyPlan>,
    hotel_suggestions: Vec<HotelSuggestion>,
    plan_id: String,
) -> TravelPlan {
    let cost_breakdown = estimate_cost(
        request.total_budget(),
        results.budget.as_ok(),
        results.transportation.as_ok(),
    );
    let sections = render_sections(&results);
    let report = render_report(request, &sections, cost_breakdown.estimated_cost);

    TravelPlan {
        plan_id,
        destination: request.destination().to_string(),
        start_date: request.start_date(),
        end_date: request.end_date(),
        total_days: request.duration().days(),
        itinerary,
        estimated_cost: cost_breakdown.estimated_cost,
        requested_budget: request.total_budget(),
        cost_breakdown,
        hotel_suggestions,
        sections,
        report,
        unavailable: results.unavailable(),
    }
}

/// Reconciles the advisors' figures with the requested budget.
///
/// The estimate never exceeds `requested_budget`. Transport uses the
/// transportation advisor's figure when present, else the budget split's share.
pub fn estimate_cost(
    requested_budget: f64,
    budget: Option<&BudgetAllocation>,
    transport: Option<&TransportEstimate>,
) -> CostBreakdown {
    let transport_figure = transport.map(|estimate| estimate.estimated_cost);

    let Some(allocation) = budget else {
        return CostBreakdown {
            requested_budget,
            accommodation: None,
            food: None,
            activities: None,
            shopping: None,
            transportation: transport_figure,
            transportation_source: transport_figure.map(|_| AdvisorKind::Transportation),
            estimated_cost: requested_budget,
        };
    };

    let (transportation, source) = match transport_figure {
        Some(figure) => (figure, AdvisorKind::Transportation),
        None => (allocation.transportation, AdvisorKind::Budget),
    };
    let total = allocation.accommodation
        + allocation.food
        + allocation.activities
        + allocation.shopping
        + transportation;

    CostBreakdown {
        requested_budget,
        accommodation: Some(allocation.accommodation),
        food: Some(allocation.food),
        activities: Some(allocation.activities),
        shopping: Some(allocation.shopping),
        transportation: Some(transportation),
        transportation_source: Some(source),
        estimated_cost: total.min(requested_budget),
    }
}

fn render_sections(results: &AdvisorResults) -> PlanSections {
    PlanSections {
        weather: or_placeholder(&results.weather, WEATHER_UNAVAILABLE, |report| {
            report.forecast.clone()
        }),
        packing: or_placeholder(&results.weather, PACKING_UNAVAILABLE, |report| {
            report.clothing_suggestions.clone()
        }),
        budget: or_placeholder(&results.budget, BUDGET_UNAVAILABLE, |allocation| {
            allocation.breakdown.clone()
        }),
        photo_spots: or_placeholder(&results.photo_spots, PHOTO_SPOTS_UNAVAILABLE, Clone::clone),
        food: or_placeholder(&results.dietary, FOOD_UNAVAILABLE, Clone::clone),
        transportation: or_placeholder(
            &results.transportation,
            TRANSPORTATION_UNAVAILABLE,
            |estimate| estimate.recommendations.clone(),
        ),
        events: or_placeholder(&results.events, EVENTS_UNAVAILABLE, Clone::clone),
    }
}

fn or_placeholder<T>(
    outcome: &AdvisorOutcome<T>,
    placeholder: &str,
    render: impl FnOnce(&T) -> String,
) -> String {
    match outcome {
        AdvisorOutcome::Ok(value) => render(value),
        AdvisorOutcome::Unavailable { .. } => placeholder.to_string(),
    }
}

fn render_report(request: &TripRequest, sections: &PlanSections, estimated_cost: f64) -> String {
    let days = request.duration().days();
    let mut report = String::new();

    let _ = writeln!(
        report,
        "TRAVEL PLAN FOR {}",
        request.destination().to_uppercase()
    );
    let _ = writeln!(
        report,
        "{} to {} ({days} days)",
        request.start_date(),
        request.end_date()
    );

    let blocks = [
        ("WEATHER FORECAST:".to_string(), &sections.weather),
        ("PACKING SUGGESTIONS:".to_string(), &sections.packing),
        (
            format!(
                "BUDGET BREAKDOWN (Total: ${:.2}):",
                request.total_budget()
            ),
            &sections.budget,
        ),
        ("MUST-VISIT PHOTO SPOTS:".to_string(), &sections.photo_spots),
        ("FOOD RECOMMENDATIONS:".to_string(), &sections.food),
        ("TRANSPORTATION:".to_string(), &sections.transportation),
        (
            "LOCAL EVENTS DURING YOUR STAY:".to_string(),
            &sections.events,
        ),
    ];
    for (heading, body) in blocks {
        let _ = write!(report, "\n{heading}\n{}\n", body.trim_end());
    }

    report.push_str("\nITINERARY SUGGESTIONS:\n");
    report.push_str(&day_skeleton(request.destination(), days));

    let preferences = match request.preferences().trim() {
        "" => "none specified",
        text => text,
    };
    let _ = write!(
        report,
        "\nNOTES:\n\
         - This plan is customized based on your preferences: {preferences}\n\
         - Requested budget: ${:.2}\n\
         - Estimated total cost: ${estimated_cost:.2}\n\
         - For detailed day-by-day planning, consult with a local tour guide\n",
        request.total_budget()
    );
    report
}

fn day_skeleton(destination: &str, days: u32) -> String {
    let mut text = format!(
        "\nDay 1: Arrival and Settling In\n\
         - Arrive at {destination}\n\
         - Check in to accommodation\n\
         - Local neighborhood exploration\n\
         - Dinner at a local restaurant based on your preferences\n"
    );

    if days >= 3 {
        let span = if days == 3 {
            "Day 2".to_string()
        } else {
            format!("Days 2-{}", days - 1)
        };
        let _ = write!(
            text,
            "\n{span}:\n\
             - Mix of popular attractions and photo spots\n\
             - Local cuisine exploration\n\
             - Special events happening during your stay\n\
             - Cultural experiences based on your preferences\n"
        );
    }

    if days >= 2 {
        let _ = write!(
            text,
            "\nDay {days}: Departure\n\
             - Final sightseeing or shopping\n\
             - Check out and departure\n"
        );
    }
    text
}
