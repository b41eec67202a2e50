use crate::domain::commands::import::{
    ImportIngredientLine as DomainImportLine, ImportRecipeRow as DomainImportRow,
    ImportRecipesCommand, ImportRecipesResult, IngredientAliasRow,
};
use crate::domain::commands::recipes::{
    CalculateCostsCommand, CreateRecipeCommand, UpdateRecipeCommand,
};
use crate::domain::costing::CostBreakdown;
use crate::domain::models::recipe::{
    CalculatedCosts as DomainCalculatedCosts, LaborInput as DomainLaborInput,
    Recipe as DomainRecipe, RecipeIngredientLine as DomainIngredientLine,
};
use shared::{
    CalculateCostsRequest, CalculateCostsResponse, CalculatedCosts as SharedCalculatedCosts,
    CreateRecipeRequest, ImportRecipesRequest, ImportRecipesResponse, ImportRowOutcome,
    LaborInput as SharedLaborInput, Recipe as SharedRecipe,
    RecipeIngredientLine as SharedIngredientLine, UpdateRecipeRequest,
};

pub struct RecipeMapper;

impl RecipeMapper {
    pub fn to_dto(domain: DomainRecipe) -> SharedRecipe {
        SharedRecipe {
            id: domain.id,
            pie_name: domain.pie_name,
            variant: domain.variant,
            batch_size: domain.batch_size,
            ingredients: domain.ingredients.into_iter().map(Self::line_to_dto).collect(),
            labor_inputs: domain
                .labor_inputs
                .into_iter()
                .map(Self::labor_to_dto)
                .collect(),
            labor_hourly_rate: domain.labor_hourly_rate,
            markup_percentage: domain.markup_percentage,
            costs: Self::costs_to_dto(domain.costs),
            selling_price: domain.selling_price,
            created_at: domain.created_at.to_rfc3339(),
            updated_at: domain.updated_at.to_rfc3339(),
        }
    }

    pub fn create_to_command(request: CreateRecipeRequest) -> CreateRecipeCommand {
        CreateRecipeCommand {
            pie_name: request.pie_name,
            variant: request.variant,
            batch_size: request.batch_size,
            ingredients: request
                .ingredients
                .into_iter()
                .map(Self::line_to_domain)
                .collect(),
            labor_inputs: request
                .labor_inputs
                .into_iter()
                .map(Self::labor_to_domain)
                .collect(),
            labor_hourly_rate: request.labor_hourly_rate,
            markup_percentage: request.markup_percentage,
        }
    }

    pub fn update_to_command(request: UpdateRecipeRequest) -> UpdateRecipeCommand {
        UpdateRecipeCommand {
            pie_name: request.pie_name,
            variant: request.variant,
            batch_size: request.batch_size,
            ingredients: request
                .ingredients
                .map(|lines| lines.into_iter().map(Self::line_to_domain).collect()),
            labor_inputs: request
                .labor_inputs
                .map(|inputs| inputs.into_iter().map(Self::labor_to_domain).collect()),
            labor_hourly_rate: request.labor_hourly_rate,
            markup_percentage: request.markup_percentage,
        }
    }

    pub fn calculate_to_command(request: CalculateCostsRequest) -> CalculateCostsCommand {
        CalculateCostsCommand {
            ingredients: request
                .ingredients
                .into_iter()
                .map(Self::line_to_domain)
                .collect(),
            labor_inputs: request
                .labor_inputs
                .into_iter()
                .map(Self::labor_to_domain)
                .collect(),
            labor_hourly_rate: request.labor_hourly_rate,
            batch_size: request.batch_size,
            markup_percentage: request.markup_percentage,
        }
    }

    pub fn breakdown_to_response(breakdown: CostBreakdown) -> CalculateCostsResponse {
        CalculateCostsResponse {
            costs: SharedCalculatedCosts {
                total_ingredient_cost: breakdown.total_ingredient_cost,
                total_labor_cost: breakdown.total_labor_cost,
                total_batch_cost: breakdown.total_batch_cost,
                cost_per_pie: breakdown.cost_per_pie,
            },
            selling_price: breakdown.selling_price,
        }
    }

    pub fn import_to_command(request: ImportRecipesRequest) -> ImportRecipesCommand {
        ImportRecipesCommand {
            aliases: request
                .aliases
                .into_iter()
                .map(|a| IngredientAliasRow {
                    alias: a.alias,
                    ingredient_id: a.ingredient_id,
                })
                .collect(),
            rows: request
                .rows
                .into_iter()
                .map(|row| DomainImportRow {
                    pie_name: row.pie_name,
                    variant: row.variant,
                    batch_size: row.batch_size,
                    ingredients: row
                        .ingredients
                        .into_iter()
                        .map(|line| DomainImportLine {
                            name: line.name,
                            quantity: line.quantity,
                            unit: line.unit,
                        })
                        .collect(),
                    labor_inputs: row
                        .labor_inputs
                        .into_iter()
                        .map(Self::labor_to_domain)
                        .collect(),
                    labor_hourly_rate: row.labor_hourly_rate,
                    markup_percentage: row.markup_percentage,
                })
                .collect(),
        }
    }

    pub fn import_result_to_response(result: ImportRecipesResult) -> ImportRecipesResponse {
        ImportRecipesResponse {
            outcomes: result
                .outcomes
                .into_iter()
                .map(|o| ImportRowOutcome {
                    row: o.row,
                    pie_name: o.pie_name,
                    variant: o.variant,
                    recipe_id: o.recipe_id,
                    error: o.error,
                })
                .collect(),
            imported_count: result.imported_count,
            failed_count: result.failed_count,
        }
    }

    fn line_to_dto(line: DomainIngredientLine) -> SharedIngredientLine {
        SharedIngredientLine {
            ingredient_id: line.ingredient_id,
            quantity: line.quantity,
            unit: line.unit,
        }
    }

    fn line_to_domain(line: SharedIngredientLine) -> DomainIngredientLine {
        DomainIngredientLine {
            ingredient_id: line.ingredient_id,
            quantity: line.quantity,
            unit: line.unit,
        }
    }

    fn labor_to_dto(input: DomainLaborInput) -> SharedLaborInput {
        SharedLaborInput {
            workers: input.workers,
            hours_per_worker: input.hours_per_worker,
        }
    }

    fn labor_to_domain(input: SharedLaborInput) -> DomainLaborInput {
        DomainLaborInput {
            workers: input.workers,
            hours_per_worker: input.hours_per_worker,
        }
    }

    fn costs_to_dto(costs: DomainCalculatedCosts) -> SharedCalculatedCosts {
        SharedCalculatedCosts {
            total_ingredient_cost: costs.total_ingredient_cost,
            total_labor_cost: costs.total_labor_cost,
            total_batch_cost: costs.total_batch_cost,
            cost_per_pie: costs.cost_per_pie,
        }
    }
}
