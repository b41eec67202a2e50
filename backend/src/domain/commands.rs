//! Domain-level command and query types.
//!
//! These structs are used by services inside the domain layer and are **not**
//! exposed over the public API. The REST layer maps the public DTOs defined
//! in the `shared` crate to these internal types.

pub mod ingredients {
    use rust_decimal::Decimal;

    use crate::domain::models::ingredient::Ingredient;

    /// Input for creating a catalog ingredient.
    #[derive(Debug, Clone)]
    pub struct CreateIngredientCommand {
        pub name: String,
        pub unit_of_measure: String,
        pub cost_per_unit: Decimal,
    }

    /// Partial update of a catalog ingredient.
    #[derive(Debug, Clone, Default)]
    pub struct UpdateIngredientCommand {
        pub name: Option<String>,
        pub unit_of_measure: Option<String>,
        pub cost_per_unit: Option<Decimal>,
    }

    #[derive(Debug, Clone)]
    pub struct CreateIngredientResult {
        pub ingredient: Ingredient,
    }

    #[derive(Debug, Clone)]
    pub struct UpdateIngredientResult {
        pub ingredient: Ingredient,
    }

    #[derive(Debug, Clone)]
    pub struct ListIngredientsResult {
        pub ingredients: Vec<Ingredient>,
    }
}

pub mod recipes {
    use rust_decimal::Decimal;

    use crate::domain::costing::CostBreakdown;
    use crate::domain::models::recipe::{LaborInput, Recipe, RecipeIngredientLine};

    /// Input for creating a recipe. Derived cost fields are never part of a
    /// command; the service computes them.
    #[derive(Debug, Clone)]
    pub struct CreateRecipeCommand {
        pub pie_name: String,
        pub variant: String,
        pub batch_size: u32,
        pub ingredients: Vec<RecipeIngredientLine>,
        pub labor_inputs: Vec<LaborInput>,
        pub labor_hourly_rate: Decimal,
        pub markup_percentage: Decimal,
    }

    /// Partial update of a recipe. Any present field triggers a full
    /// recalculation of all derived figures.
    #[derive(Debug, Clone, Default)]
    pub struct UpdateRecipeCommand {
        pub pie_name: Option<String>,
        pub variant: Option<String>,
        pub batch_size: Option<u32>,
        pub ingredients: Option<Vec<RecipeIngredientLine>>,
        pub labor_inputs: Option<Vec<LaborInput>>,
        pub labor_hourly_rate: Option<Decimal>,
        pub markup_percentage: Option<Decimal>,
    }

    /// Dry-run calculation over recipe-shaped inputs; nothing is persisted.
    #[derive(Debug, Clone)]
    pub struct CalculateCostsCommand {
        pub ingredients: Vec<RecipeIngredientLine>,
        pub labor_inputs: Vec<LaborInput>,
        pub labor_hourly_rate: Decimal,
        pub batch_size: u32,
        pub markup_percentage: Decimal,
    }

    #[derive(Debug, Clone)]
    pub struct CreateRecipeResult {
        pub recipe: Recipe,
    }

    #[derive(Debug, Clone)]
    pub struct UpdateRecipeResult {
        pub recipe: Recipe,
    }

    #[derive(Debug, Clone)]
    pub struct ListRecipesResult {
        pub recipes: Vec<Recipe>,
    }

    #[derive(Debug, Clone)]
    pub struct CalculateCostsResult {
        pub breakdown: CostBreakdown,
    }
}

pub mod labor {
    use rust_decimal::Decimal;

    use crate::domain::models::labor::LaborRecord;

    /// Input for creating a per-product labor record.
    #[derive(Debug, Clone)]
    pub struct CreateLaborRecordCommand {
        pub pie_name: String,
        pub cost_per_hour: Decimal,
        pub minutes_per_pie: Decimal,
    }

    /// Partial update; the derived per-pie cost is recomputed either way.
    #[derive(Debug, Clone, Default)]
    pub struct UpdateLaborRecordCommand {
        pub cost_per_hour: Option<Decimal>,
        pub minutes_per_pie: Option<Decimal>,
    }

    #[derive(Debug, Clone)]
    pub struct CreateLaborRecordResult {
        pub labor_record: LaborRecord,
    }

    #[derive(Debug, Clone)]
    pub struct UpdateLaborRecordResult {
        pub labor_record: LaborRecord,
    }

    #[derive(Debug, Clone)]
    pub struct ListLaborRecordsResult {
        pub labor_records: Vec<LaborRecord>,
    }
}

pub mod import {
    use rust_decimal::Decimal;

    use crate::domain::models::recipe::LaborInput;

    /// Maps a free-text source name to a canonical catalog ingredient id.
    #[derive(Debug, Clone)]
    pub struct IngredientAliasRow {
        pub alias: String,
        pub ingredient_id: String,
    }

    /// Ingredient line of an import row, referencing the catalog by name or
    /// alias rather than id.
    #[derive(Debug, Clone)]
    pub struct ImportIngredientLine {
        pub name: String,
        pub quantity: Decimal,
        pub unit: String,
    }

    /// One already-parsed recipe row of a bulk import.
    #[derive(Debug, Clone)]
    pub struct ImportRecipeRow {
        pub pie_name: String,
        pub variant: String,
        pub batch_size: u32,
        pub ingredients: Vec<ImportIngredientLine>,
        pub labor_inputs: Vec<LaborInput>,
        pub labor_hourly_rate: Decimal,
        pub markup_percentage: Decimal,
    }

    /// Input for a bulk recipe import.
    #[derive(Debug, Clone)]
    pub struct ImportRecipesCommand {
        pub aliases: Vec<IngredientAliasRow>,
        pub rows: Vec<ImportRecipeRow>,
    }

    /// Per-row outcome; a failed row never aborts the rows after it.
    #[derive(Debug, Clone)]
    pub struct ImportRowOutcome {
        pub row: usize,
        pub pie_name: String,
        pub variant: String,
        pub recipe_id: Option<String>,
        pub error: Option<String>,
    }

    #[derive(Debug, Clone)]
    pub struct ImportRecipesResult {
        pub outcomes: Vec<ImportRowOutcome>,
        pub imported_count: usize,
        pub failed_count: usize,
    }
}
