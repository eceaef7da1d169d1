use rand::RngExt;

use crate::models::{DailyPlan, HotelSuggestion, TripDuration, WeatherReport};

const CONDITIONS: &[&str] = &["Sunny", "Partly Cloudy", "Cloudy", "Rainy"];
const HOTELS: &[&str] = &[
    "Grand Hotel",
    "City View Inn",
    "Riverside Hotel",
    "Central Plaza",
    "Garden Resort",
];
const RESTAURANTS: &[&str] = &[
    "Local Bistro",
    "Traditional Tavern",
    "Gourmet Restaurant",
    "Street Food Market",
    "Café Central",
];
const ATTRACTIONS: &[&str] = &[
    "Historic Castle",
    "Art Museum",
    "Botanical Garden",
    "City Center",
    "Local Market",
];
const EVENTS: &[&str] = &[
    "Art Gallery Exhibition",
    "Local Music Festival",
    "Food Market",
    "Cultural Show",
    "Historical Tour",
];
const AMENITIES: &[&str] = &["WiFi", "Pool", "Gym", "Restaurant", "Spa"];
const LOCATIONS: &[&str] = &["City Center", "Near Beach", "Business District"];

pub const HOTEL_SUGGESTION_COUNT: usize = 3;
const AMENITIES_PER_HOTEL: usize = 3;

/// One entry per trip day, in day order. The stay keeps the same hotel.
pub fn build_daily_plans<R: RngExt + ?Sized>(
    destination: &str,
    duration: TripDuration,
    weather: Option<&WeatherReport>,
    rng: &mut R,
) -> Vec<DailyPlan> {
    let hotel = pick(rng, HOTELS);
    (0..duration.days())
        .map(|_| DailyPlan {
            weather: daily_weather(weather, rng),
            breakfast: format!("{} - Local Breakfast", pick(rng, RESTAURANTS)),
            must_visit: format!(
                "{} in {destination} - Less crowded in the morning",
                pick(rng, ATTRACTIONS)
            ),
            local_event: pick(rng, EVENTS).to_string(),
            dinner: format!("{} - Local Specialties", pick(rng, RESTAURANTS)),
            hotel_suggestion: hotel.to_string(),
            travel_distance: format!("{} km from hotel", rng.random_range(5..=20)),
        })
        .collect()
}

pub fn hotel_suggestions<R: RngExt + ?Sized>(rng: &mut R) -> Vec<HotelSuggestion> {
    (0..HOTEL_SUGGESTION_COUNT)
        .map(|_| HotelSuggestion {
            name: pick(rng, HOTELS).to_string(),
            rating: rng.random_range(3..=5),
            price_per_night: rng.random_range(50..=200),
            amenities: sample(rng, AMENITIES, AMENITIES_PER_HOTEL),
            location: pick(rng, LOCATIONS).to_string(),
        })
        .collect()
}

fn daily_weather<R: RngExt + ?Sized>(weather: Option<&WeatherReport>, rng: &mut R) -> String {
    let temperature = match weather {
        Some(report) => (report.avg_temp_c + rng.random_range(-4.0..=4.0)).round() as i32,
        None => rng.random_range(15..=30),
    };
    format!("{temperature}°C, {}", pick(rng, CONDITIONS))
}

fn pick<R: RngExt + ?Sized>(rng: &mut R, items: &[&'static str]) -> &'static str {
    items[rng.random_range(0..items.len())]
}

/// Draws `count` distinct items, keeping draw order.
fn sample<R: RngExt + ?Sized>(rng: &mut R, items: &[&str], count: usize) -> Vec<String> {
    let mut pool = items.to_vec();
    let mut chosen = Vec::with_capacity(count.min(pool.len()));
    while chosen.len() < count && !pool.is_empty() {
        let index = rng.random_range(0..pool.len());
        chosen.push(pool.swap_remove(index).to_string());
    }
    chosen
}
