//! Domain model for a catalog ingredient.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::slugify;

/// A priced ingredient in the catalog. Referenced by recipes, never owned by
/// them; recipes resolve the current cost at calculation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: String,
    pub name: String,
    pub unit_of_measure: String,
    pub cost_per_unit: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Ingredient {
    /// Derive the canonical id from the display name.
    /// Example: "Cake Flour" -> "cake_flour"
    pub fn generate_id(name: &str) -> String {
        slugify(name)
    }
}

/// The subset of an ingredient the cost calculator consumes.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedIngredient {
    pub unit_of_measure: String,
    pub cost_per_unit: Decimal,
}
