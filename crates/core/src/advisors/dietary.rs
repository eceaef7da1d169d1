use crate::destination::Destination;
use crate::preferences::{parse_preferences, PreferenceFlags};

struct CuisineGuide {
    plant_based: &'static str,
    classic: &'static str,
    budget: Option<&'static str>,
    fine_dining: Option<&'static str>,
    street_food: Option<&'static str>,
}

pub fn recommend(destination: &str, preferences: &str) -> String {
    recommend_with_flags(destination, &parse_preferences(preferences))
}

/// Blocks are appended in a fixed order: restriction notice, cuisine style,
/// budget, fine dining, street food, allergies.
pub fn recommend_with_flags(destination: &str, flags: &PreferenceFlags) -> String {
    let mut text = format!(
        "FOOD RECOMMENDATIONS FOR {}:\n\n",
        destination.trim().to_uppercase()
    );

    let restrictions = flags.restrictions();
    if !restrictions.is_empty() {
        text.push_str("DIETARY NOTES: We've focused on ");
        text.push_str(&restrictions.join(", "));
        text.push_str(".\n\n");
    }

    match cuisine_guide(Destination::resolve(destination)) {
        Some(guide) => {
            text.push_str(if flags.plant_based() {
                guide.plant_based
            } else {
                guide.classic
            });
            let addenda = [
                (flags.budget, guide.budget),
                (flags.fine_dining, guide.fine_dining),
                (flags.street_food, guide.street_food),
            ];
            for block in addenda
                .into_iter()
                .filter_map(|(wanted, block)| if wanted { block } else { None })
            {
                text.push_str(block);
            }
        }
        None => text.push_str(GENERAL),
    }

    if flags.allergies {
        text.push_str(ALLERGIES);
    }
    text
}

fn cuisine_guide(place: Destination) -> Option<CuisineGuide> {
    match place {
        Destination::Paris => Some(CuisineGuide {
            plant_based: "
VEGETARIAN/VEGAN IN PARIS:
- Wild & The Moon - Trendy vegan cafe with multiple locations
- Le Potager du Marais - Traditional French cuisine veganized
- Hank Burger - Popular vegan burger spot
- Le Grenier de Notre-Dame - Oldest vegetarian restaurant in Paris

MUST-TRY DISHES:
- Ratatouille (vegetable stew)
- Socca (chickpea flatbread)
- Falafel from L'As du Fallafel in Le Marais
",
            classic: "
CLASSIC PARISIAN FOOD:
- Croissants and pain au chocolat from local bakeries
- Steak frites at bistros like Le Relais de l'Entrecôte
- Duck confit at traditional brasseries
- French onion soup
- Escargot (snails) for the adventurous

TOP FOOD EXPERIENCES:
- Morning pastries at Du Pain et des Idées
- Picnic with cheese from Fromagerie Laurent Dubois
- Macarons from Pierre Hermé or Ladurée
- Wine and cheese tasting at La Vache dans les Vignes
",
            budget: Some(
                "
BUDGET-FRIENDLY OPTIONS:
- Crepe stands throughout the city
- Bakeries for affordable sandwiches (try jambon-beurre)
- Le Bouillon Chartier for classic French food at reasonable prices
- Rue Mouffetard market street for affordable eats
",
            ),
            fine_dining: Some(
                "
FINE DINING EXPERIENCES:
- Le Jules Verne - Eiffel Tower restaurant with spectacular views
- L'Ambroisie - Classic 3-Michelin-star French cuisine
- Septime - Modern French cuisine (reserve well in advance)
- Alain Ducasse au Plaza Athénée - Haute cuisine experience
",
            ),
            street_food: None,
        }),
        Destination::Tokyo => Some(CuisineGuide {
            plant_based: "
VEGETARIAN/VEGAN IN TOKYO:
- Ain Soph Journey - Popular vegan restaurant chain
- T's TanTan - Vegan ramen in Tokyo Station
- 8ablish - Upscale vegan cuisine
- Saishoku Vegetarian - Traditional Buddhist vegetarian cuisine

MUST-TRY DISHES:
- Vegetable tempura
- Zaru soba (cold buckwheat noodles)
- Vegetarian sushi rolls
- Shojin ryori (Buddhist temple cuisine)
",
            classic: "
CLASSIC TOKYO FOOD:
- Sushi at Tsukiji Outer Market
- Ramen at shops in Tokyo Station Ramen Street
- Tonkatsu (breaded pork cutlet)
- Monjayaki in Tsukishima
- Yakitori (grilled chicken skewers) in Omoide Yokocho

TOP FOOD EXPERIENCES:
- Early morning sushi breakfast at Tsukiji
- Izakaya hopping in Shinjuku
- Department store food halls (depachika)
- Themed cafes in Harajuku
",
            budget: Some(
                "
BUDGET-FRIENDLY OPTIONS:
- Conveyor belt sushi (kaitenzushi)
- Yoshinoya and other gyudon (beef bowl) chains
- Convenience store (konbini) meals - better than you'd expect!
- Standing soba shops
",
            ),
            fine_dining: None,
            street_food: Some(
                "
STREET FOOD & MARKETS:
- Takoyaki (octopus balls) in Asakusa
- Okonomiyaki in Harajuku
- Ameya-Yokocho Market in Ueno
- Nakamise Shopping Street in Asakusa
",
            ),
        }),
        Destination::Bali => Some(CuisineGuide {
            plant_based: "
VEGETARIAN/VEGAN IN BALI:
- Zest in Ubud - Innovative vegan cuisine
- Peloton Supershop - Vegan cafe in Canggu
- Moksa in Ubud - Farm-to-table plant-based
- Clear Cafe - Vegetarian-friendly with many options

MUST-TRY DISHES:
- Gado-gado (vegetable salad with peanut sauce)
- Tempeh satay
- Sayur urap (vegetable salad with coconut)
- Jamu (traditional herbal drink)
",
            classic: "
CLASSIC BALINESE FOOD:
- Babi guling (suckling pig) at Ibu Oka in Ubud
- Nasi campur (mixed rice plate)
- Betutu (slow-cooked spiced chicken or duck)
- Sate lilit (minced seafood satay)
- Lawar (mixed vegetables with meat)

TOP FOOD EXPERIENCES:
- Seafood dinner on Jimbaran Beach
- Traditional Balinese cooking class
- Sunday brunch at Ku De Ta in Seminyak
- Sunset drinks at Single Fin in Uluwatu
",
            budget: Some(
                "
BUDGET-FRIENDLY OPTIONS:
- Local warungs (small family-owned restaurants)
- Nasi campur stands (look for busy ones with locals)
- Pasar malam (night markets)
- Nasi jinggo (small rice packets with sides)
",
            ),
            fine_dining: Some(
                "
FINE DINING EXPERIENCES:
- Locavore in Ubud - Inventive cuisine using local ingredients
- Mejekawi by Ku De Ta - Tasting kitchen concept
- Apéritif - Colonial-inspired fine dining in Ubud
- Room4Dessert - Unique dessert-focused tasting menu
",
            ),
            street_food: None,
        }),
        Destination::London
        | Destination::NewYork
        | Destination::Rome
        | Destination::Dubai
        | Destination::Sydney
        | Destination::Bangkok
        | Destination::Mexico
        | Destination::Other => None,
    }
}

const GENERAL: &str = "
GENERAL FOOD RECOMMENDATIONS:

- Seek out local specialties unique to the region
- Visit local markets for fresh produce and authentic street food
- Ask hotel staff or locals for their favorite restaurants
- Try a mix of street food and sit-down restaurants for varied experiences
- Consider a food tour early in your trip to discover good spots

LOCAL FOOD APPS:
- TripAdvisor or Yelp for tourist-friendly options
- Google Maps for nearby suggestions with reviews
- Consider local food apps if available for your destination
";

const ALLERGIES: &str = "

ALLERGY INFORMATION:
- Carry an allergy translation card in the local language
- Research common allergens in local cuisine before your trip
- Learn how to ask about allergens in the local language
- Consider dining at more tourist-friendly restaurants where staff may speak English
";
