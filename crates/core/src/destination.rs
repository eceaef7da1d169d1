use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static CLEANER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\p{L}\p{Nd}\s]+").expect("valid destination regex"));

/// Canonical destination recognised by the advisors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Destination {
    Paris,
    London,
    NewYork,
    Tokyo,
    Bali,
    Rome,
    Dubai,
    Sydney,
    Bangkok,
    Mexico,
    Other,
}

impl Destination {
    /// Resolves free text such as `"Paris, France"` to a canonical variant.
    ///
    /// Tokens are scanned left to right and the first known key wins; two-word
    /// keys are tried before single words at each position.
    pub fn resolve(input: &str) -> Self {
        let tokens = tokenize(input);
        for index in 0..tokens.len() {
            if let Some(next) = tokens.get(index + 1) {
                let phrase = format!("{} {}", tokens[index], next);
                if let Some(found) = Self::from_key(&phrase) {
                    return found;
                }
            }
            if let Some(found) = Self::from_key(&tokens[index]) {
                return found;
            }
        }
        Self::Other
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "paris" => Some(Self::Paris),
            "london" => Some(Self::London),
            "new york" | "nyc" => Some(Self::NewYork),
            "tokyo" => Some(Self::Tokyo),
            "bali" => Some(Self::Bali),
            "rome" => Some(Self::Rome),
            "dubai" => Some(Self::Dubai),
            "sydney" => Some(Self::Sydney),
            "bangkok" => Some(Self::Bangkok),
            "mexico" => Some(Self::Mexico),
            _ => None,
        }
    }

    pub fn budget_tier(self) -> BudgetTier {
        match self {
            Self::Paris | Self::London | Self::NewYork => BudgetTier::Premium,
            Self::Bangkok | Self::Bali | Self::Mexico => BudgetTier::Value,
            Self::Dubai | Self::Tokyo => BudgetTier::Luxury,
            Self::Rome | Self::Sydney | Self::Other => BudgetTier::Standard,
        }
    }
}

/// Spending profile used to split a budget across categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetTier {
    Premium,
    Value,
    Luxury,
    Standard,
}

impl BudgetTier {
    pub const ALL: [BudgetTier; 4] = [Self::Premium, Self::Value, Self::Luxury, Self::Standard];

    pub fn shares(self) -> BudgetShares {
        match self {
            Self::Premium => BudgetShares::new(0.40, 0.25, 0.12, 0.13, 0.10),
            Self::Value => BudgetShares::new(0.25, 0.30, 0.15, 0.20, 0.10),
            Self::Luxury => BudgetShares::new(0.35, 0.30, 0.12, 0.13, 0.10),
            Self::Standard => BudgetShares::new(0.35, 0.25, 0.15, 0.15, 0.10),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetShares {
    pub accommodation: f64,
    pub food: f64,
    pub transportation: f64,
    pub activities: f64,
    pub shopping: f64,
}

impl BudgetShares {
    const fn new(
        accommodation: f64,
        food: f64,
        transportation: f64,
        activities: f64,
        shopping: f64,
    ) -> Self {
        Self {
            accommodation,
            food,
            transportation,
            activities,
            shopping,
        }
    }

    pub fn sum(&self) -> f64 {
        self.accommodation + self.food + self.transportation + self.activities + self.shopping
    }
}

fn tokenize(input: &str) -> Vec<String> {
    CLEANER
        .replace_all(input, " ")
        .to_lowercase()
        .split_whitespace()
        .map(ToString::to_string)
        .collect()
}
