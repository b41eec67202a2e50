//! # Storage Layer
//!
//! Persistence for the pie costing application: abstraction traits plus the
//! file-based implementation (flat catalogs as CSV, structured recipes as
//! YAML). The domain layer depends only on the traits; everything under
//! `csv/` is an implementation detail.

pub mod csv;
pub mod traits;

pub use csv::CsvConnection;
pub use traits::{Connection, IngredientStorage, LaborStorage, RecipeStorage};
