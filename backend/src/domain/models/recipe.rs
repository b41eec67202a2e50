//! Domain model for the recipe aggregate.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::slugify;

/// One ingredient line of a recipe. The unit is expected to match the catalog
/// ingredient's unit of measure; no conversion is ever attempted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeIngredientLine {
    pub ingredient_id: String,
    pub quantity: Decimal,
    pub unit: String,
}

/// One (workers, hours) pair contributing to a batch's labor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaborInput {
    pub workers: u32,
    pub hours_per_worker: Decimal,
}

/// Cost figures derived by the calculator, each rounded to 2 decimal places.
/// Never set by callers; recomputed in full on every create and update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatedCosts {
    pub total_ingredient_cost: Decimal,
    pub total_labor_cost: Decimal,
    pub total_batch_cost: Decimal,
    pub cost_per_pie: Decimal,
}

/// The recipe aggregate root. Identity is the (pie_name, variant) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub pie_name: String,
    pub variant: String,
    pub batch_size: u32,
    pub ingredients: Vec<RecipeIngredientLine>,
    pub labor_inputs: Vec<LaborInput>,
    pub labor_hourly_rate: Decimal,
    pub markup_percentage: Decimal,
    pub costs: CalculatedCosts,
    pub selling_price: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Recipe {
    /// Derive the canonical id from the identity pair.
    /// Example: ("Chicken Pie", "Mini") -> "chicken_pie__mini"
    pub fn generate_id(pie_name: &str, variant: &str) -> String {
        format!("{}__{}", slugify(pie_name), slugify(variant))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_combines_pie_name_and_variant() {
        assert_eq!(
            Recipe::generate_id("Chicken Pie", "Mini"),
            "chicken_pie__mini"
        );
    }

    #[test]
    fn id_is_case_insensitive() {
        assert_eq!(
            Recipe::generate_id("CHICKEN pie", "mini"),
            Recipe::generate_id("chicken Pie", "MINI"),
        );
    }
}
