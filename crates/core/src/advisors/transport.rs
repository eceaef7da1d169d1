use crate::destination::Destination;
use crate::models::{TransportEstimate, TripDuration};

pub fn recommend(destination: &str, duration: TripDuration) -> TransportEstimate {
    let (advice, per_day) = guide(Destination::resolve(destination));

    TransportEstimate {
        recommendations: format!(
            "TRANSPORTATION OPTIONS IN {}:\n{advice}",
            destination.trim().to_uppercase()
        ),
        estimated_cost: per_day * f64::from(duration.days()),
    }
}

/// Canned advice and the average local transit spend per day.
fn guide(place: Destination) -> (&'static str, f64) {
    match place {
        Destination::Paris => (
            "
GETTING AROUND PARIS:

PUBLIC TRANSPORTATION:
- Paris Metro: Extensive subway system covering all major attractions
- RER Trains: Connect city center with suburbs, airports, and Versailles
- Buses: Complement the Metro network with scenic routes
- Trams: Primarily serve the city perimeter

RECOMMENDED PASSES:
- Paris Visite Pass: 1, 2, 3, or 5 consecutive days of unlimited travel
- Navigo Découverte: Weekly pass (Monday-Sunday), best for 5+ day stays
- Mobilis: One-day unlimited travel pass

ALTERNATIVE OPTIONS:
- Vélib' Bike Share: Extensive network of rental bikes (€5/day or €20/week)
- Walking: Central Paris is compact and walkable between many attractions
- Taxis/Uber: Available but expensive compared to public transit

AIRPORT TRANSFERS:
- From Charles de Gaulle: RER B train (€11.40, 30-45 min) or Airport Bus (€12.50)
- From Orly: Orlybus (€9.50, 30-40 min) or Orlyval + RER B (€12.10)

TIPS:
- Last Metro trains run around 1:15 AM (Fri/Sat) and 12:45 AM (other days)
- Keep your ticket until you exit the system to avoid fines
",
            10.0,
        ),
        Destination::Tokyo => (
            "
GETTING AROUND TOKYO:

PUBLIC TRANSPORTATION:
- Tokyo Metro and Toei Subway: Extensive network covering most tourist areas
- JR Trains: Including the Yamanote Line that loops around central Tokyo
- Buses: Useful for areas not covered by trains

RECOMMENDED PASSES:
- Suica or PASMO IC Card: Rechargeable smart card for all transportation
- Tokyo Subway Ticket: 24, 48, or 72-hour unlimited subway rides (tourists only)
- JR Pass: For travelers planning side trips outside Tokyo

ALTERNATIVE OPTIONS:
- Taxis: Convenient but expensive, starting at ¥410-730 depending on time
- Walking: Effective in specific neighborhoods, but Tokyo is vast

AIRPORT TRANSFERS:
- From Narita: Narita Express (¥3,070, 60 min) or Skyliner (¥2,520, 40 min)
- From Haneda: Tokyo Monorail (¥500, 15 min) or Keikyu Line (¥300, 20 min)

TIPS:
- Trains stop running around midnight until 5 AM
- Rush hours (7:30-9:30 AM, 5:30-7:30 PM) are extremely crowded
",
            15.0,
        ),
        Destination::NewYork => (
            "
GETTING AROUND NEW YORK CITY:

PUBLIC TRANSPORTATION:
- Subway: Extensive 24/7 system with 472 stations across 5 boroughs
- Buses: Comprehensive network, good for crosstown travel
- Staten Island Ferry: Free service with great views of the Statue of Liberty

RECOMMENDED PASSES:
- OMNY: Contactless payment system accepting credit cards and mobile wallets
- MetroCard: 7-day unlimited rides on subways and buses

ALTERNATIVE OPTIONS:
- Citi Bike: Bike sharing program with day and multi-day passes
- NYC Ferry: Connects waterfront neighborhoods
- Walking: Manhattan's grid system makes navigation easy

AIRPORT TRANSFERS:
- From JFK: AirTrain + Subway (60-90 min) or taxi (flat rate plus tolls)
- From LaGuardia: Q70 SBS bus to subway or taxi
- From Newark: AirTrain + NJ Transit (45 min) or taxi

TIPS:
- Express trains skip local stops
- Service changes often occur on nights and weekends
",
            12.0,
        ),
        Destination::London => (
            "
GETTING AROUND LONDON:

PUBLIC TRANSPORTATION:
- London Underground (Tube): Extensive subway system with 11 lines
- Buses: Comprehensive network with over 700 routes
- London Overground and DLR: Suburban and East London services

RECOMMENDED PASSES:
- Contactless Payment Cards: Daily and weekly fare caps, no deposit
- Oyster Card: Reloadable smart card with the same caps
- Travelcards: 1-day or 7-day unlimited travel passes

ALTERNATIVE OPTIONS:
- Santander Cycles: Bike sharing for short rides
- Black Cabs: Iconic but expensive, no need to pre-book
- River Bus Services: Thames Clipper boats along the river

AIRPORT TRANSFERS:
- From Heathrow: Tube (60 min), Elizabeth line (30 min), or Heathrow Express (15 min)
- From Gatwick: Gatwick Express (30 min) or Thameslink (45 min)

TIPS:
- Travel outside peak hours for cheaper fares
- Night Tube runs on Fri/Sat nights on select lines
",
            15.0,
        ),
        Destination::Bali => (
            "
GETTING AROUND BALI:

TRANSPORTATION OPTIONS:
- Private Driver: Most convenient option, typically $40-50 per day for 8-10 hours
- Scooter/Motorbike Rental: Most affordable option ($4-7 per day)
- Taxis: Metered Blue Bird taxis are reliable in southern Bali
- Ride-Hailing Apps: Grab and Gojek offer car and motorbike rides
- Shuttle Services: Connect major tourist areas (Kuta, Ubud, etc.)

AIRPORT TRANSFERS:
- Airport Taxi: Fixed price counters at the airport ($10-20)
- Pre-arranged Hotel Transfer: Usually comparable to taxi rates

TIPS:
- Renting a scooter requires an international driving permit
- For day trips to multiple attractions, hiring a driver is most efficient
- Negotiate and agree on prices before getting in unmarked taxis
",
            25.0,
        ),
        Destination::Rome
        | Destination::Dubai
        | Destination::Sydney
        | Destination::Bangkok
        | Destination::Mexico
        | Destination::Other => (
            "
GENERAL TRANSPORTATION ADVICE:

PUBLIC TRANSPORTATION:
- Research the public transportation options before arriving
- Look for tourist travel cards that offer unlimited rides
- Download the local transport app if available

ALTERNATIVE OPTIONS:
- Ride-sharing apps: Check if Uber, Lyft, or local alternatives operate
- Taxis: Know the reputable companies and typical fares
- Rental cars: Best for destinations with limited public transport

MONEY-SAVING TIPS:
- Stay in a central location to minimize transportation needs
- Group attractions by area to minimize travel between them

SAFETY TIPS:
- Keep valuables secure, especially in crowded vehicles
- Save your accommodation address in the local language
",
            20.0,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cost_scales_with_duration() {
        let three = TripDuration::from_days(3).unwrap();
        let estimate = recommend("Paris", three);
        assert_eq!(estimate.estimated_cost, 30.0);
        assert!(estimate.recommendations.contains("GETTING AROUND PARIS"));
    }

    #[test]
    fn generic_rate_for_unknown_places() {
        let estimate = recommend("Reykjavik", TripDuration::from_days(4).unwrap());
        assert_eq!(estimate.estimated_cost, 80.0);
        assert!(estimate
            .recommendations
            .starts_with("TRANSPORTATION OPTIONS IN REYKJAVIK:"));
        assert!(estimate.recommendations.contains("GENERAL TRANSPORTATION ADVICE"));
    }
}
