//! DTO <-> domain converters.
//!
//! The REST layer never hands `shared` types to the domain or domain types
//! to clients; these mappers are the only crossing point.

pub mod ingredient_mapper;
pub mod labor_mapper;
pub mod recipe_mapper;

pub use ingredient_mapper::IngredientMapper;
pub use labor_mapper::LaborMapper;
pub use recipe_mapper::RecipeMapper;
