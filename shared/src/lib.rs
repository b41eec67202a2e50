use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An ingredient in the catalog, priced per unit of measure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: String,
    /// Display name, unique case-insensitively across the catalog
    pub name: String,
    /// Unit the cost is quoted against (e.g. "kg", "litre", "each")
    pub unit_of_measure: String,
    /// Cost per unit of measure, non-negative
    pub cost_per_unit: Decimal,
    /// Creation timestamp (RFC 3339)
    pub created_at: String,
    /// Last update timestamp (RFC 3339)
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateIngredientRequest {
    pub name: String,
    pub unit_of_measure: String,
    pub cost_per_unit: Decimal,
}

/// Partial update; omitted fields keep their stored values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateIngredientRequest {
    pub name: Option<String>,
    pub unit_of_measure: Option<String>,
    pub cost_per_unit: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientListResponse {
    pub ingredients: Vec<Ingredient>,
}

/// One ingredient line of a recipe.
///
/// The unit must match the catalog ingredient's unit of measure; the server
/// rejects mismatches rather than attempting any conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeIngredientLine {
    pub ingredient_id: String,
    pub quantity: Decimal,
    pub unit: String,
}

/// One (workers, hours) labor entry contributing to a batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaborInput {
    pub workers: u32,
    pub hours_per_worker: Decimal,
}

/// Server-computed cost figures, all rounded to 2 decimal places.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatedCosts {
    pub total_ingredient_cost: Decimal,
    pub total_labor_cost: Decimal,
    pub total_batch_cost: Decimal,
    pub cost_per_pie: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub pie_name: String,
    /// Named variant of the base product (e.g. "Standard", "Mini")
    pub variant: String,
    /// Finished units produced by one batch
    pub batch_size: u32,
    pub ingredients: Vec<RecipeIngredientLine>,
    pub labor_inputs: Vec<LaborInput>,
    /// Hourly rate applied uniformly to every labor input line
    pub labor_hourly_rate: Decimal,
    /// Percentage premium applied to cost per pie
    pub markup_percentage: Decimal,
    /// Always computed by the server, never taken from a request
    pub costs: CalculatedCosts,
    /// Cost per pie with markup applied, rounded to 2 decimal places
    pub selling_price: Decimal,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateRecipeRequest {
    pub pie_name: String,
    pub variant: String,
    pub batch_size: u32,
    pub ingredients: Vec<RecipeIngredientLine>,
    pub labor_inputs: Vec<LaborInput>,
    pub labor_hourly_rate: Decimal,
    pub markup_percentage: Decimal,
}

/// Partial update; any field present triggers a full recalculation of the
/// stored cost figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateRecipeRequest {
    pub pie_name: Option<String>,
    pub variant: Option<String>,
    pub batch_size: Option<u32>,
    pub ingredients: Option<Vec<RecipeIngredientLine>>,
    pub labor_inputs: Option<Vec<LaborInput>>,
    pub labor_hourly_rate: Option<Decimal>,
    pub markup_percentage: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeListResponse {
    pub recipes: Vec<Recipe>,
}

/// Dry-run calculation request: same inputs as a recipe, nothing persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculateCostsRequest {
    pub ingredients: Vec<RecipeIngredientLine>,
    pub labor_inputs: Vec<LaborInput>,
    pub labor_hourly_rate: Decimal,
    pub batch_size: u32,
    pub markup_percentage: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculateCostsResponse {
    pub costs: CalculatedCosts,
    pub selling_price: Decimal,
}

/// Standalone per-product labor rate record.
///
/// `labor_cost_per_pie` is derived as `cost_per_hour * minutes_per_pie / 60`
/// and recomputed by the server on every change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaborRecord {
    pub id: String,
    /// Product name, unique across labor records
    pub pie_name: String,
    pub cost_per_hour: Decimal,
    pub minutes_per_pie: Decimal,
    pub labor_cost_per_pie: Decimal,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateLaborRecordRequest {
    pub pie_name: String,
    pub cost_per_hour: Decimal,
    pub minutes_per_pie: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateLaborRecordRequest {
    pub cost_per_hour: Option<Decimal>,
    pub minutes_per_pie: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaborRecordListResponse {
    pub labor_records: Vec<LaborRecord>,
}

/// Maps a free-text spreadsheet name to a canonical catalog ingredient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientAlias {
    pub alias: String,
    pub ingredient_id: String,
}

/// Ingredient line of an import row, referencing the catalog by name or alias.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportIngredientLine {
    pub name: String,
    pub quantity: Decimal,
    pub unit: String,
}

/// One recipe row of a bulk import, already parsed out of its source format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportRecipeRow {
    pub pie_name: String,
    pub variant: String,
    pub batch_size: u32,
    pub ingredients: Vec<ImportIngredientLine>,
    pub labor_inputs: Vec<LaborInput>,
    pub labor_hourly_rate: Decimal,
    pub markup_percentage: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportRecipesRequest {
    /// Alias table validated before any row is processed
    pub aliases: Vec<IngredientAlias>,
    pub rows: Vec<ImportRecipeRow>,
}

/// Per-row import outcome: either the created recipe id or an error message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportRowOutcome {
    pub row: usize,
    pub pie_name: String,
    pub variant: String,
    pub recipe_id: Option<String>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportRecipesResponse {
    pub outcomes: Vec<ImportRowOutcome>,
    pub imported_count: usize,
    pub failed_count: usize,
}
