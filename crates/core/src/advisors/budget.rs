use std::fmt::Write as _;

use crate::destination::Destination;
use crate::error::PlanError;
use crate::models::BudgetAllocation;

/// Splits `total_budget` across spending categories for the destination's tier.
pub fn allocate(
    destination: &str,
    total_budget: f64,
    duration_days: u32,
) -> Result<BudgetAllocation, PlanError> {
    if duration_days == 0 {
        return Err(PlanError::InvalidDuration(0));
    }
    if !total_budget.is_finite() || total_budget <= 0.0 {
        return Err(PlanError::InvalidBudget(total_budget));
    }

    let place = Destination::resolve(destination);
    let tier = place.budget_tier();
    let shares = tier.shares();

    let mut allocation = BudgetAllocation {
        tier,
        accommodation: total_budget * shares.accommodation,
        food: total_budget * shares.food,
        transportation: total_budget * shares.transportation,
        activities: total_budget * shares.activities,
        shopping: total_budget * shares.shopping,
        duration_days,
        breakdown: String::new(),
    };
    allocation.breakdown = render(&allocation, total_budget, place);
    Ok(allocation)
}

fn render(allocation: &BudgetAllocation, total_budget: f64, place: Destination) -> String {
    let rows = [
        ("Accommodation", allocation.accommodation),
        ("Food & Dining", allocation.food),
        ("Transportation", allocation.transportation),
        ("Activities & Attractions", allocation.activities),
        ("Shopping & Souvenirs", allocation.shopping),
    ];

    let mut text = format!(
        "ALLOCATION (${:.2} total for {} days):\n\n",
        total_budget, allocation.duration_days
    );
    for (label, amount) in rows {
        let _ = writeln!(
            text,
            "{label}: ${amount:.2} (${:.2}/day)",
            allocation.daily(amount)
        );
    }
    text.push_str("\nRECOMMENDATIONS:\n");
    text.push_str(recommendations(place));
    text
}

fn recommendations(place: Destination) -> &'static str {
    match place {
        Destination::Paris => {
            "- Save on accommodation by staying in neighborhoods like Montmartre or Le Marais
- Purchase a Paris Museum Pass for attractions if visiting multiple museums
- Use the Metro for transportation (cost-effective)
- Consider picnics in parks with local baguettes, cheese, and wine to save on some meals
"
        }
        Destination::Tokyo => {
            "- Stay in business hotels or hostels for better rates
- Purchase a Tokyo Metro pass for unlimited travel
- Try affordable eateries like ramen shops and conveyor belt sushi
- Look for free attractions like parks and shrine visits
"
        }
        Destination::Bali => {
            "- Consider homestays or guesthouses for authentic and affordable accommodation
- Rent a scooter for transportation if comfortable riding
- Eat at local warungs (small family-owned restaurants) for authentic and affordable meals
- Negotiate prices at markets for better deals on souvenirs
"
        }
        Destination::NewYork => {
            "- Consider staying in Brooklyn or Queens for more affordable accommodation
- Purchase a 7-day MetroCard for unlimited subway and bus travel
- Visit museums on free or pay-what-you-wish days
- Try food trucks and markets for affordable meals
"
        }
        Destination::London
        | Destination::Rome
        | Destination::Dubai
        | Destination::Sydney
        | Destination::Bangkok
        | Destination::Mexico
        | Destination::Other => {
            "- Look for accommodations with kitchen facilities to save on meal costs
- Use public transportation where available
- Research free or low-cost attractions
- Consider a mix of dining out and self-catering for balanced food budget
"
        }
    }
}
