//! Recipe service: CRUD plus the recalculation trigger.
//!
//! Every create and every update runs the full costing pipeline before
//! anything is persisted, so the stored cost figures can never go stale
//! relative to the recipe's own inputs. Recalculation is always full; a
//! one-field change (say, markup) re-derives all five figures from the
//! complete current input set, resolving ingredient costs at call time.
//!
//! Validation happens first and aborts before any lookup; resolution errors
//! (an ingredient id that no longer exists) surface as data-integrity
//! failures and nothing is persisted.

use std::sync::Arc;

use anyhow::Result;
use chrono::Utc;
use log::info;
use rust_decimal::Decimal;

use crate::domain::commands::recipes::{
    CalculateCostsCommand, CalculateCostsResult, CreateRecipeCommand, CreateRecipeResult,
    ListRecipesResult, UpdateRecipeCommand, UpdateRecipeResult,
};
use crate::domain::costing::{self, CostBreakdown, CostingInput, ResolvedIngredientLine};
use crate::domain::errors::DomainError;
use crate::domain::ingredient_service::IngredientService;
use crate::domain::models::recipe::{CalculatedCosts, LaborInput, Recipe, RecipeIngredientLine};
use crate::domain::models::slugify;
use crate::storage::csv::{CsvConnection, RecipeRepository};
use crate::storage::traits::RecipeStorage;

#[derive(Clone)]
pub struct RecipeService {
    recipe_repository: RecipeRepository,
    ingredient_service: IngredientService,
}

impl RecipeService {
    pub fn new(csv_conn: Arc<CsvConnection>, ingredient_service: IngredientService) -> Self {
        let recipe_repository = RecipeRepository::new((*csv_conn).clone());
        Self {
            recipe_repository,
            ingredient_service,
        }
    }

    /// Create a recipe. The cost breakdown is computed here, synchronously,
    /// before the recipe is stored; commands carry no derived fields.
    pub fn create_recipe(&self, command: CreateRecipeCommand) -> Result<CreateRecipeResult> {
        info!(
            "Creating recipe: pie={}, variant={}, batch_size={}",
            command.pie_name, command.variant, command.batch_size
        );

        let pie_name = command.pie_name.trim().to_string();
        let variant = command.variant.trim().to_string();
        validate_recipe_inputs(
            &pie_name,
            &variant,
            command.batch_size,
            &command.ingredients,
            &command.labor_inputs,
            command.labor_hourly_rate,
            command.markup_percentage,
        )?;

        let id = Recipe::generate_id(&pie_name, &variant);
        if self.recipe_repository.get_recipe(&id)?.is_some() {
            return Err(DomainError::DuplicateIdentity {
                message: format!("recipe '{}' ({}) already exists", pie_name, variant),
            }
            .into());
        }

        let breakdown = self.cost_recipe(
            &command.ingredients,
            &command.labor_inputs,
            command.labor_hourly_rate,
            command.batch_size,
            command.markup_percentage,
        )?;

        let now = Utc::now();
        let recipe = Recipe {
            id,
            pie_name,
            variant,
            batch_size: command.batch_size,
            ingredients: command.ingredients,
            labor_inputs: command.labor_inputs,
            labor_hourly_rate: command.labor_hourly_rate,
            markup_percentage: command.markup_percentage,
            costs: CalculatedCosts {
                total_ingredient_cost: breakdown.total_ingredient_cost,
                total_labor_cost: breakdown.total_labor_cost,
                total_batch_cost: breakdown.total_batch_cost,
                cost_per_pie: breakdown.cost_per_pie,
            },
            selling_price: breakdown.selling_price,
            created_at: now,
            updated_at: now,
        };

        self.recipe_repository.store_recipe(&recipe)?;
        info!(
            "Created recipe {} at selling price {}",
            recipe.id, recipe.selling_price
        );

        Ok(CreateRecipeResult { recipe })
    }

    pub fn get_recipe(&self, id: &str) -> Result<Option<Recipe>> {
        self.recipe_repository.get_recipe(id)
    }

    pub fn list_recipes(&self) -> Result<ListRecipesResult> {
        let recipes = self.recipe_repository.list_recipes()?;
        Ok(ListRecipesResult { recipes })
    }

    /// Update a recipe. Whatever subset of fields changed, all derived
    /// figures are recomputed from the merged input set, at current catalog
    /// costs.
    pub fn update_recipe(&self, id: &str, command: UpdateRecipeCommand) -> Result<UpdateRecipeResult> {
        info!("Updating recipe {}", id);

        let existing = self
            .recipe_repository
            .get_recipe(id)?
            .ok_or_else(|| DomainError::RecipeNotFound { id: id.to_string() })?;

        let pie_name = command
            .pie_name
            .map(|n| n.trim().to_string())
            .unwrap_or_else(|| existing.pie_name.clone());
        let variant = command
            .variant
            .map(|v| v.trim().to_string())
            .unwrap_or_else(|| existing.variant.clone());
        let batch_size = command.batch_size.unwrap_or(existing.batch_size);
        let ingredients = command.ingredients.unwrap_or_else(|| existing.ingredients.clone());
        let labor_inputs = command.labor_inputs.unwrap_or_else(|| existing.labor_inputs.clone());
        let labor_hourly_rate = command.labor_hourly_rate.unwrap_or(existing.labor_hourly_rate);
        let markup_percentage = command.markup_percentage.unwrap_or(existing.markup_percentage);

        validate_recipe_inputs(
            &pie_name,
            &variant,
            batch_size,
            &ingredients,
            &labor_inputs,
            labor_hourly_rate,
            markup_percentage,
        )?;

        let new_id = Recipe::generate_id(&pie_name, &variant);
        if new_id != existing.id && self.recipe_repository.get_recipe(&new_id)?.is_some() {
            return Err(DomainError::DuplicateIdentity {
                message: format!("recipe '{}' ({}) already exists", pie_name, variant),
            }
            .into());
        }

        let breakdown = self.cost_recipe(
            &ingredients,
            &labor_inputs,
            labor_hourly_rate,
            batch_size,
            markup_percentage,
        )?;

        let recipe = Recipe {
            id: new_id.clone(),
            pie_name,
            variant,
            batch_size,
            ingredients,
            labor_inputs,
            labor_hourly_rate,
            markup_percentage,
            costs: CalculatedCosts {
                total_ingredient_cost: breakdown.total_ingredient_cost,
                total_labor_cost: breakdown.total_labor_cost,
                total_batch_cost: breakdown.total_batch_cost,
                cost_per_pie: breakdown.cost_per_pie,
            },
            selling_price: breakdown.selling_price,
            created_at: existing.created_at,
            updated_at: Utc::now(),
        };

        if new_id == existing.id {
            self.recipe_repository.update_recipe(&recipe)?;
        } else {
            // Identity change moves the recipe to a new id.
            self.recipe_repository.store_recipe(&recipe)?;
            self.recipe_repository.delete_recipe(&existing.id)?;
        }

        Ok(UpdateRecipeResult { recipe })
    }

    pub fn delete_recipe(&self, id: &str) -> Result<bool> {
        info!("Deleting recipe {}", id);
        self.recipe_repository.delete_recipe(id)
    }

    /// Dry-run calculation over recipe-shaped inputs. Same validation, same
    /// resolution, same engine as create/update; nothing persisted.
    pub fn calculate_costs(&self, command: CalculateCostsCommand) -> Result<CalculateCostsResult> {
        validate_costing_inputs(
            command.batch_size,
            &command.ingredients,
            &command.labor_inputs,
            command.labor_hourly_rate,
            command.markup_percentage,
        )?;

        let breakdown = self.cost_recipe(
            &command.ingredients,
            &command.labor_inputs,
            command.labor_hourly_rate,
            command.batch_size,
            command.markup_percentage,
        )?;

        Ok(CalculateCostsResult { breakdown })
    }

    /// Resolve catalog costs for every line, reject unit mismatches, and run
    /// the pure calculator.
    fn cost_recipe(
        &self,
        ingredients: &[RecipeIngredientLine],
        labor_inputs: &[LaborInput],
        labor_hourly_rate: Decimal,
        batch_size: u32,
        markup_percentage: Decimal,
    ) -> Result<CostBreakdown> {
        let ids: Vec<String> = ingredients.iter().map(|l| l.ingredient_id.clone()).collect();
        let resolved = self.ingredient_service.resolve_costs(&ids)?;

        let mut resolved_lines = Vec::with_capacity(ingredients.len());
        for line in ingredients {
            let ingredient = &resolved[&line.ingredient_id];
            if !line
                .unit
                .trim()
                .eq_ignore_ascii_case(ingredient.unit_of_measure.trim())
            {
                return Err(DomainError::validation(
                    "ingredients",
                    format!(
                        "unit '{}' does not match catalog unit '{}' for ingredient '{}'",
                        line.unit, ingredient.unit_of_measure, line.ingredient_id
                    ),
                )
                .into());
            }
            resolved_lines.push(ResolvedIngredientLine {
                ingredient_id: line.ingredient_id.clone(),
                quantity: line.quantity,
                cost_per_unit: ingredient.cost_per_unit,
            });
        }

        let breakdown = costing::calculate(&CostingInput {
            ingredients: resolved_lines,
            labor_inputs: labor_inputs.to_vec(),
            labor_hourly_rate,
            batch_size,
            markup_percentage,
        })?;
        Ok(breakdown)
    }
}

fn validate_recipe_inputs(
    pie_name: &str,
    variant: &str,
    batch_size: u32,
    ingredients: &[RecipeIngredientLine],
    labor_inputs: &[LaborInput],
    labor_hourly_rate: Decimal,
    markup_percentage: Decimal,
) -> Result<(), DomainError> {
    if pie_name.is_empty() {
        return Err(DomainError::validation("pie_name", "must not be empty"));
    }
    if slugify(pie_name).is_empty() {
        return Err(DomainError::validation(
            "pie_name",
            "must contain at least one letter or digit",
        ));
    }
    if variant.is_empty() {
        return Err(DomainError::validation("variant", "must not be empty"));
    }
    if slugify(variant).is_empty() {
        return Err(DomainError::validation(
            "variant",
            "must contain at least one letter or digit",
        ));
    }
    validate_costing_inputs(
        batch_size,
        ingredients,
        labor_inputs,
        labor_hourly_rate,
        markup_percentage,
    )
}

fn validate_costing_inputs(
    batch_size: u32,
    ingredients: &[RecipeIngredientLine],
    labor_inputs: &[LaborInput],
    labor_hourly_rate: Decimal,
    markup_percentage: Decimal,
) -> Result<(), DomainError> {
    if batch_size == 0 {
        return Err(DomainError::validation("batch_size", "must be positive"));
    }
    if ingredients.is_empty() {
        return Err(DomainError::validation(
            "ingredients",
            "at least one ingredient is required",
        ));
    }
    for line in ingredients {
        if line.quantity < Decimal::ZERO {
            return Err(DomainError::validation(
                "ingredients",
                format!("quantity for '{}' must not be negative", line.ingredient_id),
            ));
        }
        if line.unit.trim().is_empty() {
            return Err(DomainError::validation(
                "ingredients",
                format!("unit for '{}' must not be empty", line.ingredient_id),
            ));
        }
    }
    if labor_inputs.is_empty() {
        return Err(DomainError::validation(
            "labor_inputs",
            "at least one labor input is required",
        ));
    }
    for input in labor_inputs {
        if input.workers == 0 {
            return Err(DomainError::validation(
                "labor_inputs",
                "workers must be at least 1",
            ));
        }
        if input.hours_per_worker < Decimal::ZERO {
            return Err(DomainError::validation(
                "labor_inputs",
                "hours per worker must not be negative",
            ));
        }
    }
    if labor_hourly_rate < Decimal::ZERO {
        return Err(DomainError::validation(
            "labor_hourly_rate",
            "must not be negative",
        ));
    }
    if markup_percentage < Decimal::ZERO {
        return Err(DomainError::validation(
            "markup_percentage",
            "must not be negative",
        ));
    }
    Ok(())
}
