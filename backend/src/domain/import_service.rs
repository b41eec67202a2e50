//! Bulk recipe import.
//!
//! Import rows arrive already parsed (the source file format is the caller's
//! problem) and reference ingredients by free-text name. Names resolve
//! through an explicit alias table that is built and validated before any
//! row is touched: the table starts from the normalized catalog names and is
//! extended by caller-supplied aliases, each of which must point at an
//! existing ingredient and must not conflict with an earlier mapping.
//!
//! Every accepted row goes through `RecipeService::create_recipe`, the same
//! path manual entry uses, so an import can never produce figures that
//! manual entry would not.

use std::collections::HashMap;

use anyhow::Result;
use log::{info, warn};

use crate::domain::commands::import::{
    ImportRecipeRow, ImportRecipesCommand, ImportRecipesResult, ImportRowOutcome,
    IngredientAliasRow,
};
use crate::domain::commands::recipes::CreateRecipeCommand;
use crate::domain::errors::DomainError;
use crate::domain::ingredient_service::IngredientService;
use crate::domain::models::normalize_name;
use crate::domain::models::recipe::RecipeIngredientLine;
use crate::domain::recipe_service::RecipeService;

#[derive(Clone)]
pub struct ImportService {
    ingredient_service: IngredientService,
    recipe_service: RecipeService,
}

impl ImportService {
    pub fn new(ingredient_service: IngredientService, recipe_service: RecipeService) -> Self {
        Self {
            ingredient_service,
            recipe_service,
        }
    }

    /// Import a batch of recipe rows.
    ///
    /// An invalid alias table aborts the whole import before any row is
    /// processed. After that, rows are independent: a failed row is reported
    /// in its outcome and the remaining rows still run.
    pub fn import_recipes(&self, command: ImportRecipesCommand) -> Result<ImportRecipesResult> {
        info!(
            "Importing {} recipe rows with {} aliases",
            command.rows.len(),
            command.aliases.len()
        );

        let alias_table = self.build_alias_table(&command.aliases)?;

        let mut outcomes = Vec::with_capacity(command.rows.len());
        let mut imported_count = 0;
        let mut failed_count = 0;

        for (index, row) in command.rows.into_iter().enumerate() {
            let pie_name = row.pie_name.clone();
            let variant = row.variant.clone();

            match self.import_row(&alias_table, row) {
                Ok(recipe_id) => {
                    imported_count += 1;
                    outcomes.push(ImportRowOutcome {
                        row: index,
                        pie_name,
                        variant,
                        recipe_id: Some(recipe_id),
                        error: None,
                    });
                }
                Err(e) => {
                    warn!("Import row {} ({}) failed: {}", index, pie_name, e);
                    failed_count += 1;
                    outcomes.push(ImportRowOutcome {
                        row: index,
                        pie_name,
                        variant,
                        recipe_id: None,
                        error: Some(e.to_string()),
                    });
                }
            }
        }

        info!(
            "Import finished: {} imported, {} failed",
            imported_count, failed_count
        );

        Ok(ImportRecipesResult {
            outcomes,
            imported_count,
            failed_count,
        })
    }

    /// Build the normalized-name -> ingredient-id table: catalog names first,
    /// then the caller's aliases, validated as they land.
    fn build_alias_table(&self, aliases: &[IngredientAliasRow]) -> Result<HashMap<String, String>> {
        let mut table = HashMap::new();

        for ingredient in self.ingredient_service.list_ingredients()?.ingredients {
            table.insert(normalize_name(&ingredient.name), ingredient.id);
        }

        for alias in aliases {
            let normalized = normalize_name(&alias.alias);
            if normalized.is_empty() {
                return Err(DomainError::validation("aliases", "alias must not be empty").into());
            }
            if self
                .ingredient_service
                .get_ingredient(&alias.ingredient_id)?
                .is_none()
            {
                return Err(DomainError::validation(
                    "aliases",
                    format!(
                        "alias '{}' points at unknown ingredient '{}'",
                        alias.alias, alias.ingredient_id
                    ),
                )
                .into());
            }
            if let Some(existing_id) = table.get(&normalized) {
                if existing_id != &alias.ingredient_id {
                    return Err(DomainError::validation(
                        "aliases",
                        format!(
                            "alias '{}' conflicts with an existing mapping to '{}'",
                            alias.alias, existing_id
                        ),
                    )
                    .into());
                }
            }
            table.insert(normalized, alias.ingredient_id.clone());
        }

        Ok(table)
    }

    fn import_row(&self, alias_table: &HashMap<String, String>, row: ImportRecipeRow) -> Result<String> {
        let mut ingredients = Vec::with_capacity(row.ingredients.len());
        for line in row.ingredients {
            let ingredient_id = alias_table
                .get(&normalize_name(&line.name))
                .ok_or_else(|| anyhow::anyhow!("no catalog ingredient matches '{}'", line.name))?;
            ingredients.push(RecipeIngredientLine {
                ingredient_id: ingredient_id.clone(),
                quantity: line.quantity,
                unit: line.unit,
            });
        }

        let result = self.recipe_service.create_recipe(CreateRecipeCommand {
            pie_name: row.pie_name,
            variant: row.variant,
            batch_size: row.batch_size,
            ingredients,
            labor_inputs: row.labor_inputs,
            labor_hourly_rate: row.labor_hourly_rate,
            markup_percentage: row.markup_percentage,
        })?;

        Ok(result.recipe.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::commands::import::ImportIngredientLine;
    use crate::domain::commands::ingredients::CreateIngredientCommand;
    use crate::domain::models::recipe::LaborInput;
    use crate::storage::csv::CsvConnection;
    use rust_decimal_macros::dec;
    use std::sync::Arc;
    use tempfile::TempDir;

    struct TestServices {
        ingredient_service: IngredientService,
        recipe_service: RecipeService,
        import_service: ImportService,
        _temp_dir: TempDir,
    }

    fn create_test_services() -> TestServices {
        let temp_dir = TempDir::new().unwrap();
        let connection = Arc::new(CsvConnection::new(temp_dir.path()).unwrap());
        let ingredient_service = IngredientService::new(connection.clone());
        let recipe_service = RecipeService::new(connection, ingredient_service.clone());
        let import_service =
            ImportService::new(ingredient_service.clone(), recipe_service.clone());
        TestServices {
            ingredient_service,
            recipe_service,
            import_service,
            _temp_dir: temp_dir,
        }
    }

    fn seed_flour(services: &TestServices) {
        services
            .ingredient_service
            .create_ingredient(CreateIngredientCommand {
                name: "Cake Flour".to_string(),
                unit_of_measure: "kg".to_string(),
                cost_per_unit: dec!(1.50),
            })
            .unwrap();
    }

    fn baseline_row(pie_name: &str, ingredient_name: &str) -> ImportRecipeRow {
        ImportRecipeRow {
            pie_name: pie_name.to_string(),
            variant: "Standard".to_string(),
            batch_size: 10,
            ingredients: vec![ImportIngredientLine {
                name: ingredient_name.to_string(),
                quantity: dec!(2),
                unit: "kg".to_string(),
            }],
            labor_inputs: vec![LaborInput {
                workers: 1,
                hours_per_worker: dec!(2.5),
            }],
            labor_hourly_rate: dec!(25),
            markup_percentage: dec!(10),
        }
    }

    #[test]
    fn imported_row_matches_manual_entry_exactly() {
        let services = create_test_services();
        seed_flour(&services);

        let result = services
            .import_service
            .import_recipes(ImportRecipesCommand {
                aliases: vec![],
                rows: vec![baseline_row("Chicken Pie", "cake flour")],
            })
            .unwrap();

        assert_eq!(result.imported_count, 1);
        assert_eq!(result.failed_count, 0);

        let recipe = services
            .recipe_service
            .get_recipe("chicken_pie__standard")
            .unwrap()
            .unwrap();
        assert_eq!(recipe.costs.total_batch_cost, dec!(65.50));
        assert_eq!(recipe.selling_price, dec!(7.21));
    }

    #[test]
    fn aliases_map_spreadsheet_names_to_catalog_ids() {
        let services = create_test_services();
        seed_flour(&services);

        let result = services
            .import_service
            .import_recipes(ImportRecipesCommand {
                aliases: vec![IngredientAliasRow {
                    alias: "Flour (White, Cake)".to_string(),
                    ingredient_id: "cake_flour".to_string(),
                }],
                rows: vec![baseline_row("Chicken Pie", "flour (white, cake)")],
            })
            .unwrap();

        assert_eq!(result.imported_count, 1);
        assert_eq!(
            result.outcomes[0].recipe_id.as_deref(),
            Some("chicken_pie__standard")
        );
    }

    #[test]
    fn alias_to_unknown_ingredient_aborts_the_whole_import() {
        let services = create_test_services();
        seed_flour(&services);

        let err = services
            .import_service
            .import_recipes(ImportRecipesCommand {
                aliases: vec![IngredientAliasRow {
                    alias: "flour".to_string(),
                    ingredient_id: "unobtainium".to_string(),
                }],
                rows: vec![baseline_row("Chicken Pie", "flour")],
            })
            .unwrap_err();

        let domain_err = err.downcast_ref::<DomainError>().unwrap();
        assert!(matches!(
            domain_err,
            DomainError::Validation { field, .. } if field == "aliases"
        ));
        assert!(services
            .recipe_service
            .list_recipes()
            .unwrap()
            .recipes
            .is_empty());
    }

    #[test]
    fn conflicting_alias_is_rejected() {
        let services = create_test_services();
        seed_flour(&services);
        services
            .ingredient_service
            .create_ingredient(CreateIngredientCommand {
                name: "Bread Flour".to_string(),
                unit_of_measure: "kg".to_string(),
                cost_per_unit: dec!(1.20),
            })
            .unwrap();

        // "cake flour" already maps to the catalog ingredient of that name.
        let err = services
            .import_service
            .import_recipes(ImportRecipesCommand {
                aliases: vec![IngredientAliasRow {
                    alias: "Cake Flour".to_string(),
                    ingredient_id: "bread_flour".to_string(),
                }],
                rows: vec![],
            })
            .unwrap_err();

        let domain_err = err.downcast_ref::<DomainError>().unwrap();
        assert!(matches!(domain_err, DomainError::Validation { .. }));
    }

    #[test]
    fn a_failed_row_does_not_stop_the_rows_after_it() {
        let services = create_test_services();
        seed_flour(&services);

        let result = services
            .import_service
            .import_recipes(ImportRecipesCommand {
                aliases: vec![],
                rows: vec![
                    baseline_row("Chicken Pie", "no such ingredient"),
                    baseline_row("Steak Pie", "cake flour"),
                ],
            })
            .unwrap();

        assert_eq!(result.imported_count, 1);
        assert_eq!(result.failed_count, 1);
        assert!(result.outcomes[0]
            .error
            .as_deref()
            .unwrap()
            .contains("no such ingredient"));
        assert_eq!(
            result.outcomes[1].recipe_id.as_deref(),
            Some("steak_pie__standard")
        );
    }

    #[test]
    fn duplicate_identity_rows_fail_individually() {
        let services = create_test_services();
        seed_flour(&services);

        let result = services
            .import_service
            .import_recipes(ImportRecipesCommand {
                aliases: vec![],
                rows: vec![
                    baseline_row("Chicken Pie", "cake flour"),
                    baseline_row("Chicken Pie", "cake flour"),
                ],
            })
            .unwrap();

        assert_eq!(result.imported_count, 1);
        assert_eq!(result.failed_count, 1);
        assert!(result.outcomes[1]
            .error
            .as_deref()
            .unwrap()
            .contains("already exists"));
    }
}
