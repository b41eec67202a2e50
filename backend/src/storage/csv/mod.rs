//! # CSV/YAML Storage Module
//!
//! File-based storage implementation. Flat, spreadsheet-shaped catalogs live
//! in CSV files; the nested recipe aggregate is stored as one YAML document
//! per recipe.
//!
//! ## Layout
//!
//! ```text
//! <data dir>/
//!   ingredients.csv
//!   labor_records.csv
//!   recipes/
//!     chicken_pie__standard.yaml
//!     chicken_pie__mini.yaml
//! ```
//!
//! All writes are whole-file rewrites; there is no partial update of a CSV
//! row or YAML document.

pub mod connection;
pub mod ingredient_repository;
pub mod labor_repository;
pub mod recipe_repository;

#[cfg(test)]
pub mod test_utils;

pub use connection::CsvConnection;
pub use ingredient_repository::IngredientRepository;
pub use labor_repository::LaborRepository;
pub use recipe_repository::RecipeRepository;
