//! Ingredient catalog service.
//!
//! Owns catalog CRUD and the cost lookup the recipe calculator depends on.
//! Names are unique case-insensitively; an ingredient's id is derived from
//! its name at creation and stays stable across renames so recipe references
//! never dangle on a rename.

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Result;
use chrono::Utc;
use log::{info, warn};
use rust_decimal::Decimal;

use crate::domain::commands::ingredients::{
    CreateIngredientCommand, CreateIngredientResult, ListIngredientsResult,
    UpdateIngredientCommand, UpdateIngredientResult,
};
use crate::domain::errors::DomainError;
use crate::domain::models::ingredient::{Ingredient, ResolvedIngredient};
use crate::storage::csv::{CsvConnection, IngredientRepository};
use crate::storage::traits::IngredientStorage;

/// Service for managing the ingredient catalog.
#[derive(Clone)]
pub struct IngredientService {
    ingredient_repository: IngredientRepository,
}

impl IngredientService {
    pub fn new(csv_conn: Arc<CsvConnection>) -> Self {
        let ingredient_repository = IngredientRepository::new((*csv_conn).clone());
        Self {
            ingredient_repository,
        }
    }

    /// Create a new catalog ingredient.
    pub fn create_ingredient(
        &self,
        command: CreateIngredientCommand,
    ) -> Result<CreateIngredientResult> {
        info!(
            "Creating ingredient: name={}, unit={}, cost={}",
            command.name, command.unit_of_measure, command.cost_per_unit
        );

        let name = command.name.trim().to_string();
        let unit_of_measure = command.unit_of_measure.trim().to_string();
        validate_name(&name)?;
        validate_unit(&unit_of_measure)?;
        validate_cost(command.cost_per_unit)?;

        if let Some(existing) = self.ingredient_repository.find_ingredient_by_name(&name)? {
            return Err(DomainError::DuplicateIdentity {
                message: format!("ingredient '{}' already exists", existing.name),
            }
            .into());
        }

        let id = Ingredient::generate_id(&name);
        if id.is_empty() {
            return Err(
                DomainError::validation("name", "must contain at least one letter or digit").into(),
            );
        }
        if self.ingredient_repository.get_ingredient(&id)?.is_some() {
            return Err(DomainError::DuplicateIdentity {
                message: format!("ingredient id '{}' already exists", id),
            }
            .into());
        }

        let now = Utc::now();
        let ingredient = Ingredient {
            id,
            name,
            unit_of_measure,
            cost_per_unit: command.cost_per_unit,
            created_at: now,
            updated_at: now,
        };

        self.ingredient_repository.store_ingredient(&ingredient)?;
        info!("Created ingredient '{}' with id {}", ingredient.name, ingredient.id);

        Ok(CreateIngredientResult { ingredient })
    }

    pub fn get_ingredient(&self, id: &str) -> Result<Option<Ingredient>> {
        self.ingredient_repository.get_ingredient(id)
    }

    pub fn list_ingredients(&self) -> Result<ListIngredientsResult> {
        let ingredients = self.ingredient_repository.list_ingredients()?;
        Ok(ListIngredientsResult { ingredients })
    }

    /// Update an existing ingredient. The id never changes, even on rename.
    pub fn update_ingredient(
        &self,
        id: &str,
        command: UpdateIngredientCommand,
    ) -> Result<UpdateIngredientResult> {
        info!("Updating ingredient {}: {:?}", id, command);

        let mut ingredient = self
            .ingredient_repository
            .get_ingredient(id)?
            .ok_or_else(|| DomainError::IngredientNotFound { id: id.to_string() })?;

        if let Some(name) = command.name {
            let name = name.trim().to_string();
            validate_name(&name)?;
            if let Some(other) = self.ingredient_repository.find_ingredient_by_name(&name)? {
                if other.id != ingredient.id {
                    return Err(DomainError::DuplicateIdentity {
                        message: format!("ingredient '{}' already exists", other.name),
                    }
                    .into());
                }
            }
            ingredient.name = name;
        }
        if let Some(unit) = command.unit_of_measure {
            let unit = unit.trim().to_string();
            validate_unit(&unit)?;
            ingredient.unit_of_measure = unit;
        }
        if let Some(cost) = command.cost_per_unit {
            validate_cost(cost)?;
            ingredient.cost_per_unit = cost;
        }

        ingredient.updated_at = Utc::now();
        self.ingredient_repository.update_ingredient(&ingredient)?;

        Ok(UpdateIngredientResult { ingredient })
    }

    /// Delete an ingredient. Recipes referencing it keep their last computed
    /// figures and fail with a data-integrity error on their next
    /// recalculation.
    pub fn delete_ingredient(&self, id: &str) -> Result<bool> {
        info!("Deleting ingredient {}", id);
        self.ingredient_repository.delete_ingredient(id)
    }

    /// Resolve a set of ingredient ids to their current unit and cost.
    ///
    /// Fails fast on the first id that does not resolve, naming it, so the
    /// caller can surface the offending reference. Read-only.
    pub fn resolve_costs(&self, ids: &[String]) -> Result<HashMap<String, ResolvedIngredient>> {
        let mut resolved = HashMap::with_capacity(ids.len());

        for id in ids {
            if resolved.contains_key(id) {
                continue;
            }
            let ingredient = self
                .ingredient_repository
                .get_ingredient(id)?
                .ok_or_else(|| {
                    warn!("Ingredient lookup failed for '{}'", id);
                    DomainError::IngredientNotFound { id: id.clone() }
                })?;
            resolved.insert(
                id.clone(),
                ResolvedIngredient {
                    unit_of_measure: ingredient.unit_of_measure,
                    cost_per_unit: ingredient.cost_per_unit,
                },
            );
        }

        Ok(resolved)
    }
}

fn validate_name(name: &str) -> Result<(), DomainError> {
    if name.is_empty() {
        return Err(DomainError::validation("name", "must not be empty"));
    }
    Ok(())
}

fn validate_unit(unit: &str) -> Result<(), DomainError> {
    if unit.is_empty() {
        return Err(DomainError::validation("unit_of_measure", "must not be empty"));
    }
    Ok(())
}

fn validate_cost(cost: Decimal) -> Result<(), DomainError> {
    if cost < Decimal::ZERO {
        return Err(DomainError::validation("cost_per_unit", "must not be negative"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use tempfile::TempDir;

    fn create_test_service() -> (IngredientService, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let connection = Arc::new(CsvConnection::new(temp_dir.path()).unwrap());
        (IngredientService::new(connection), temp_dir)
    }

    fn create_flour(service: &IngredientService) -> Ingredient {
        service
            .create_ingredient(CreateIngredientCommand {
                name: "Cake Flour".to_string(),
                unit_of_measure: "kg".to_string(),
                cost_per_unit: dec!(1.50),
            })
            .unwrap()
            .ingredient
    }

    #[test]
    fn create_assigns_slug_id_and_timestamps() {
        let (service, _dir) = create_test_service();
        let ingredient = create_flour(&service);

        assert_eq!(ingredient.id, "cake_flour");
        assert_eq!(ingredient.cost_per_unit, dec!(1.50));
    }

    #[test]
    fn create_rejects_duplicate_name_case_insensitively() {
        let (service, _dir) = create_test_service();
        create_flour(&service);

        let err = service
            .create_ingredient(CreateIngredientCommand {
                name: "  cake FLOUR ".to_string(),
                unit_of_measure: "kg".to_string(),
                cost_per_unit: dec!(2),
            })
            .unwrap_err();

        let domain_err = err.downcast_ref::<DomainError>().unwrap();
        assert!(matches!(domain_err, DomainError::DuplicateIdentity { .. }));
    }

    #[test]
    fn create_rejects_negative_cost() {
        let (service, _dir) = create_test_service();

        let err = service
            .create_ingredient(CreateIngredientCommand {
                name: "Salt".to_string(),
                unit_of_measure: "kg".to_string(),
                cost_per_unit: dec!(-1),
            })
            .unwrap_err();

        let domain_err = err.downcast_ref::<DomainError>().unwrap();
        assert!(matches!(
            domain_err,
            DomainError::Validation { field, .. } if field == "cost_per_unit"
        ));
    }

    #[test]
    fn rename_keeps_the_id_stable() {
        let (service, _dir) = create_test_service();
        let ingredient = create_flour(&service);

        let updated = service
            .update_ingredient(
                &ingredient.id,
                UpdateIngredientCommand {
                    name: Some("Premium Cake Flour".to_string()),
                    ..Default::default()
                },
            )
            .unwrap()
            .ingredient;

        assert_eq!(updated.id, "cake_flour");
        assert_eq!(updated.name, "Premium Cake Flour");
    }

    #[test]
    fn update_missing_ingredient_is_a_not_found_error() {
        let (service, _dir) = create_test_service();

        let err = service
            .update_ingredient("nope", UpdateIngredientCommand::default())
            .unwrap_err();

        let domain_err = err.downcast_ref::<DomainError>().unwrap();
        assert_eq!(
            *domain_err,
            DomainError::IngredientNotFound {
                id: "nope".to_string()
            }
        );
    }

    #[test]
    fn resolve_costs_returns_unit_and_cost_per_id() {
        let (service, _dir) = create_test_service();
        create_flour(&service);

        let resolved = service
            .resolve_costs(&["cake_flour".to_string()])
            .unwrap();

        let flour = &resolved["cake_flour"];
        assert_eq!(flour.unit_of_measure, "kg");
        assert_eq!(flour.cost_per_unit, dec!(1.50));
    }

    #[test]
    fn resolve_costs_fails_fast_naming_the_missing_id() {
        let (service, _dir) = create_test_service();
        create_flour(&service);

        let err = service
            .resolve_costs(&["cake_flour".to_string(), "unobtainium".to_string()])
            .unwrap_err();

        let domain_err = err.downcast_ref::<DomainError>().unwrap();
        assert_eq!(
            *domain_err,
            DomainError::IngredientNotFound {
                id: "unobtainium".to_string()
            }
        );
    }
}
