use crate::domain::commands::ingredients::{CreateIngredientCommand, UpdateIngredientCommand};
use crate::domain::models::ingredient::Ingredient as DomainIngredient;
use shared::{CreateIngredientRequest, Ingredient as SharedIngredient, UpdateIngredientRequest};

pub struct IngredientMapper;

impl IngredientMapper {
    pub fn to_dto(domain: DomainIngredient) -> SharedIngredient {
        SharedIngredient {
            id: domain.id,
            name: domain.name,
            unit_of_measure: domain.unit_of_measure,
            cost_per_unit: domain.cost_per_unit,
            created_at: domain.created_at.to_rfc3339(),
            updated_at: domain.updated_at.to_rfc3339(),
        }
    }

    pub fn create_to_command(request: CreateIngredientRequest) -> CreateIngredientCommand {
        CreateIngredientCommand {
            name: request.name,
            unit_of_measure: request.unit_of_measure,
            cost_per_unit: request.cost_per_unit,
        }
    }

    pub fn update_to_command(request: UpdateIngredientRequest) -> UpdateIngredientCommand {
        UpdateIngredientCommand {
            name: request.name,
            unit_of_measure: request.unit_of_measure,
            cost_per_unit: request.cost_per_unit,
        }
    }
}
