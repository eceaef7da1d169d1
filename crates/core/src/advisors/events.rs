use chrono::{Datelike, NaiveDate};

use crate::destination::Destination;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Season {
    Spring,
    Summer,
    Holidays,
    Year,
}

pub fn recommend(destination: &str, start: NaiveDate, end: NaiveDate) -> String {
    let month = start.format("%B").to_string();
    let place = Destination::resolve(destination);

    let mut text = format!(
        "LOCAL EVENTS IN {} DURING YOUR STAY ({start} to {end}):\n",
        destination.trim().to_uppercase()
    );
    text.push_str("Confirm dates with local listings before booking.\n");

    match (place, season(place, start.month())) {
        (Destination::Paris, Season::Spring) => {
            text.push_str(&highlights(&month, PARIS_SPRING));
            text.push_str(PARIS_SPRING_REST);
        }
        (Destination::Paris, Season::Summer) => {
            text.push_str(&highlights(&month, PARIS_SUMMER));
            text.push_str(PARIS_SUMMER_REST);
        }
        (Destination::Paris, _) => text.push_str(PARIS_YEAR),
        (Destination::Tokyo, Season::Spring) => {
            text.push_str(&highlights(&month, TOKYO_SPRING));
            text.push_str(TOKYO_SPRING_REST);
        }
        (Destination::Tokyo, Season::Summer) => {
            text.push_str(&highlights(&month, TOKYO_SUMMER));
            text.push_str(TOKYO_SUMMER_REST);
        }
        (Destination::Tokyo, _) => text.push_str(TOKYO_YEAR),
        (Destination::NewYork, Season::Spring) => {
            text.push_str(&highlights(&month, NEW_YORK_SPRING));
            text.push_str(NEW_YORK_REST);
        }
        (Destination::NewYork, Season::Summer) => {
            text.push_str(&highlights(&month, NEW_YORK_SUMMER));
            text.push_str(NEW_YORK_REST);
        }
        (Destination::NewYork, Season::Holidays) => {
            text.push_str(&highlights(&month, NEW_YORK_HOLIDAYS));
            text.push_str(NEW_YORK_REST);
        }
        (Destination::NewYork, Season::Year) => text.push_str(NEW_YORK_YEAR),
        (
            Destination::London
            | Destination::Bali
            | Destination::Rome
            | Destination::Dubai
            | Destination::Sydney
            | Destination::Bangkok
            | Destination::Mexico
            | Destination::Other,
            _,
        ) => text.push_str(&general(destination.trim())),
    }
    text
}

fn season(place: Destination, month: u32) -> Season {
    match (place, month) {
        (Destination::Paris, 4..=6) | (Destination::NewYork, 4..=6) => Season::Spring,
        (Destination::Paris, 7..=9) | (Destination::NewYork, 7..=9) => Season::Summer,
        (Destination::NewYork, 10..=12) => Season::Holidays,
        (Destination::Tokyo, 3..=5) => Season::Spring,
        (Destination::Tokyo, 6..=8) => Season::Summer,
        _ => Season::Year,
    }
}

fn highlights(month: &str, items: &str) -> String {
    format!("\nSEASONAL HIGHLIGHTS ({month}):\n{items}")
}

fn general(destination: &str) -> String {
    format!(
        "
GENERAL EVENT SUGGESTIONS:

LOCAL RESOURCES:
- Check the official tourism website for {destination}
- Visit the local tourist information center upon arrival
- Look for free city magazines and event listings
- Ask your hotel concierge for current events

RECURRING EVENTS:
- Local markets (farmers markets, craft markets, night markets)
- Museum free days or extended hours
- Live music venues and performances
- Seasonal festivals and celebrations

DIGITAL RESOURCES:
- Eventbrite, Meetup, or Facebook Events for your destination
- TimeOut guides if available for your city
- Local newspaper websites for event calendars

CULTURAL OPPORTUNITIES:
- Theater and performing arts productions
- Sporting events
- Gallery openings and art walks
- Food festivals and culinary events
"
    )
}

const PARIS_SPRING: &str = "- French Open Tennis Tournament (Late May-Early June)
- Paris Jazz Festival (June)
- Fête de la Musique (June 21) - Free music throughout the city
- Spring flower displays at Jardin des Tuileries and Luxembourg Gardens
";

const PARIS_SPRING_REST: &str = "
RECURRING EVENTS:
- First Sunday of the month: Free admission to many museums
- Louvre late openings on Wednesdays and Fridays
- Marché aux Puces de Saint-Ouen (flea market) on weekends
- Seine River night cruises

EXHIBITIONS & SHOWS:
- Centre Pompidou contemporary art exhibitions
- Palais de Tokyo avant-garde installations
- Ongoing shows at Opéra Garnier and Opéra Bastille
- Moulin Rouge and Lido cabaret performances
";

const PARIS_SUMMER: &str = "- Bastille Day Celebrations (July 14)
- Paris Plages (July-August) - Seine riverside beaches
- Open-air cinema at Parc de la Villette (July-August)
- European Heritage Days (September) - Access to normally closed buildings
";

const PARIS_SUMMER_REST: &str = "
RECURRING EVENTS:
- First Sunday of the month: Free admission to many museums
- Outdoor concerts in Parc Floral (summer)
- Evening boat cruises on the Seine
- Rock en Seine music festival (late August)
- Fashion Week (late September)

EXHIBITIONS & SHOWS:
- Special summer exhibitions at major museums
- Sound and light shows at various monuments
";

const PARIS_YEAR: &str = "
RECURRING EVENTS:
- First Sunday of the month: Free admission to many museums
- Louvre late openings on Wednesdays and Fridays
- Weekend markets throughout the city
- Evening performances at famous venues

EXHIBITIONS & SHOWS:
- Rotating exhibitions at Grand Palais and Petit Palais
- Contemporary art at Palais de Tokyo
- Opera and ballet performances
- Cabaret shows at Moulin Rouge and Lido
";

const TOKYO_SPRING: &str = "- Cherry Blossom (Sakura) Season (Late March-Early April)
- Hanami parties in major parks
- Sanja Matsuri in Asakusa (May)
- Golden Week holidays (Late April-Early May)
";

const TOKYO_SPRING_REST: &str = "
RECURRING EVENTS:
- Sumo tournaments (January, May, September)
- Farmers markets at United Nations University (weekends)
- Yoyogi Park events and performances (weekends)

EXHIBITIONS & SHOWS:
- teamLab digital art exhibitions
- Rotating exhibits at Mori Art Museum
- Tokyo National Museum special collections
- Kabuki performances at Kabukiza Theatre
";

const TOKYO_SUMMER: &str = "- Rainy season (June) with hydrangea blooms
- Sumidagawa Fireworks Festival (July)
- Tanabata Festival (July 7)
- Obon Festival (mid-August)
- Summer festivals (matsuri) throughout the city
";

const TOKYO_SUMMER_REST: &str = "
RECURRING EVENTS:
- Sumo tournaments (May, September)
- Morning tuna auctions at Toyosu Market
- Weekend food festivals in Yoyogi Park

EXHIBITIONS & SHOWS:
- Summer illuminations at Tokyo Midtown
- Fuji Rock Festival (late July)
- Summer Sonic music festival (mid-August)
";

const TOKYO_YEAR: &str = "
RECURRING EVENTS:
- Sumo tournaments (January, May, September)
- Farmers markets at United Nations University (weekends)
- Morning tuna auctions at Toyosu Market
- Akihabara electronic district special events

EXHIBITIONS & SHOWS:
- teamLab digital art exhibitions
- Rotating exhibits at major museums
- Traditional theater performances
";

const NEW_YORK_SPRING: &str = "- Tribeca Film Festival (April)
- Cherry Blossom Festival at Brooklyn Botanic Garden (April)
- Frieze Art Fair (May)
- Shakespeare in the Park (June-August)
- Pride March and Festival (June)
";

const NEW_YORK_SUMMER: &str = "- Macy's 4th of July Fireworks
- Restaurant Week (late July/early August)
- US Open Tennis (August-September)
- Outdoor movies in Bryant Park (summer)
- San Gennaro Festival in Little Italy (September)
";

const NEW_YORK_HOLIDAYS: &str = "- New York Film Festival (October)
- Village Halloween Parade (October 31)
- Macy's Thanksgiving Day Parade (November)
- Rockefeller Center Christmas Tree Lighting (early December)
- New Year's Eve in Times Square (December 31)
";

const NEW_YORK_REST: &str = "
RECURRING EVENTS:
- Broadway shows (discount tickets at TKTS booths)
- Free museum days (check specific museums)
- Weekend street fairs throughout Manhattan

EXHIBITIONS & SHOWS:
- Metropolitan Museum of Art special exhibitions
- MoMA contemporary installations
- Concerts at Madison Square Garden
";

const NEW_YORK_YEAR: &str = "
RECURRING EVENTS:
- Broadway shows (discount tickets at TKTS booths)
- Free museum days (check specific museums)
- Live TV show tapings
- NYC Restaurant Week (winter and summer)

EXHIBITIONS & SHOWS:
- Major exhibitions at Metropolitan Museum of Art
- Live music in Greenwich Village and Brooklyn
- Off-Broadway theatrical productions
";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::parse_date;

    fn day(value: &str) -> NaiveDate {
        parse_date("start_date", value).unwrap()
    }

    #[test]
    fn paris_summer_bucket() {
        let text = recommend("Paris", day("2025-08-10"), day("2025-08-14"));
        assert!(text.contains("SEASONAL HIGHLIGHTS (August)"));
        assert!(text.contains("Bastille Day"));
        assert!(!text.contains("Jazz Festival"));
    }

    #[test]
    fn paris_winter_has_no_seasonal_highlights() {
        let text = recommend("Paris", day("2025-01-10"), day("2025-01-12"));
        assert!(!text.contains("SEASONAL HIGHLIGHTS"));
        assert!(text.contains("Grand Palais"));
    }

    #[test]
    fn tokyo_and_new_york_use_their_own_buckets() {
        let tokyo = recommend("Tokyo", day("2025-03-28"), day("2025-04-02"));
        assert!(tokyo.contains("Cherry Blossom"));

        let nyc = recommend("New York", day("2025-11-20"), day("2025-11-28"));
        assert!(nyc.contains("Thanksgiving"));
        let nyc_winter = recommend("New York", day("2025-02-01"), day("2025-02-03"));
        assert!(!nyc_winter.contains("SEASONAL HIGHLIGHTS"));
    }

    #[test]
    fn generic_block_names_the_destination() {
        let text = recommend("Reykjavik", day("2025-06-01"), day("2025-06-03"));
        assert!(text.contains("official tourism website for Reykjavik"));
    }
}
