//! # Storage Traits
//!
//! Storage abstraction traits that let the domain layer work against
//! interchangeable backends. The shipped implementation is file-based
//! (CSV catalogs, YAML recipes); the domain services never look past
//! these traits.

use anyhow::Result;

use crate::domain::models::ingredient::Ingredient;
use crate::domain::models::labor::LaborRecord;
use crate::domain::models::recipe::Recipe;

/// Interface for ingredient catalog storage operations.
pub trait IngredientStorage: Send + Sync {
    /// Store a new ingredient
    fn store_ingredient(&self, ingredient: &Ingredient) -> Result<()>;

    /// Retrieve a specific ingredient by id
    fn get_ingredient(&self, id: &str) -> Result<Option<Ingredient>>;

    /// Find an ingredient by display name, case-insensitively
    fn find_ingredient_by_name(&self, name: &str) -> Result<Option<Ingredient>>;

    /// List all ingredients ordered by name
    fn list_ingredients(&self) -> Result<Vec<Ingredient>>;

    /// Update an existing ingredient
    fn update_ingredient(&self, ingredient: &Ingredient) -> Result<()>;

    /// Delete an ingredient
    /// Returns true if the ingredient was found and deleted, false otherwise
    fn delete_ingredient(&self, id: &str) -> Result<bool>;
}

/// Interface for recipe storage operations.
pub trait RecipeStorage: Send + Sync {
    /// Store a new recipe
    fn store_recipe(&self, recipe: &Recipe) -> Result<()>;

    /// Retrieve a specific recipe by id
    fn get_recipe(&self, id: &str) -> Result<Option<Recipe>>;

    /// List all recipes ordered by pie name then variant
    fn list_recipes(&self) -> Result<Vec<Recipe>>;

    /// Update an existing recipe
    fn update_recipe(&self, recipe: &Recipe) -> Result<()>;

    /// Delete a recipe
    /// Returns true if the recipe was found and deleted, false otherwise
    fn delete_recipe(&self, id: &str) -> Result<bool>;
}

/// Interface for per-product labor record storage operations.
pub trait LaborStorage: Send + Sync {
    /// Store a new labor record
    fn store_labor_record(&self, record: &LaborRecord) -> Result<()>;

    /// Retrieve a specific labor record by id
    fn get_labor_record(&self, id: &str) -> Result<Option<LaborRecord>>;

    /// List all labor records ordered by pie name
    fn list_labor_records(&self) -> Result<Vec<LaborRecord>>;

    /// Update an existing labor record
    fn update_labor_record(&self, record: &LaborRecord) -> Result<()>;

    /// Delete a labor record
    /// Returns true if the record was found and deleted, false otherwise
    fn delete_labor_record(&self, id: &str) -> Result<bool>;
}

/// A storage connection that can hand out repositories for each entity.
pub trait Connection: Send + Sync + Clone {
    type IngredientRepository: IngredientStorage;
    type RecipeRepository: RecipeStorage;
    type LaborRepository: LaborStorage;

    fn create_ingredient_repository(&self) -> Self::IngredientRepository;
    fn create_recipe_repository(&self) -> Self::RecipeRepository;
    fn create_labor_repository(&self) -> Self::LaborRepository;
}
