use serde::{Deserialize, Serialize};

/// Boolean features derived from a traveller's free-text preferences.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceFlags {
    pub vegetarian: bool,
    pub vegan: bool,
    pub gluten_free: bool,
    pub dairy_free: bool,
    pub halal: bool,
    pub kosher: bool,
    pub allergies: bool,
    pub spicy: bool,
    pub local: bool,
    pub budget: bool,
    pub fine_dining: bool,
    pub street_food: bool,
}

impl PreferenceFlags {
    pub fn plant_based(&self) -> bool {
        self.vegetarian || self.vegan
    }

    /// Dietary restriction labels in the order they are reported.
    pub fn restrictions(&self) -> Vec<&'static str> {
        [
            (self.vegetarian, "Vegetarian options"),
            (self.vegan, "Vegan options"),
            (self.gluten_free, "Gluten-free options"),
            (self.dairy_free, "Dairy-free options"),
            (self.halal, "Halal options"),
            (self.kosher, "Kosher options"),
        ]
        .into_iter()
        .filter_map(|(set, label)| set.then_some(label))
        .collect()
    }

    pub fn active(&self) -> Vec<&'static str> {
        [
            (self.vegetarian, "vegetarian"),
            (self.vegan, "vegan"),
            (self.gluten_free, "gluten_free"),
            (self.dairy_free, "dairy_free"),
            (self.halal, "halal"),
            (self.kosher, "kosher"),
            (self.allergies, "allergies"),
            (self.spicy, "spicy"),
            (self.local, "local"),
            (self.budget, "budget"),
            (self.fine_dining, "fine_dining"),
            (self.street_food, "street_food"),
        ]
        .into_iter()
        .filter_map(|(set, name)| set.then_some(name))
        .collect()
    }
}

pub fn parse_preferences(text: &str) -> PreferenceFlags {
    let lower = text.to_lowercase();

    PreferenceFlags {
        vegetarian: contains_any(&lower, &["vegetarian"]),
        vegan: contains_any(&lower, &["vegan"]),
        gluten_free: contains_any(&lower, &["gluten free", "gluten-free"]),
        dairy_free: contains_any(&lower, &["dairy free", "dairy-free", "lactose"]),
        halal: contains_any(&lower, &["halal"]),
        kosher: contains_any(&lower, &["kosher"]),
        allergies: contains_any(
            &lower,
            &["allergy", "allergic", "nuts", "seafood", "shellfish"],
        ),
        spicy: contains_any(&lower, &["spicy"]),
        local: contains_any(&lower, &["local", "authentic", "traditional"]),
        budget: contains_any(&lower, &["cheap", "budget", "inexpensive"]),
        fine_dining: contains_any(&lower, &["fine dining", "upscale", "fancy"]),
        street_food: contains_any(&lower, &["street food", "street vendor"]),
    }
}

fn contains_any(input: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| input.contains(needle))
}
