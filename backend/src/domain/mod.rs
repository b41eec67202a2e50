//! # Domain Module
//!
//! Business logic for the pie costing application: the cost calculation
//! engine and the services that orchestrate it over storage. Operates
//! independently of any HTTP framework or storage mechanism.
//!
//! ## Module Organization
//!
//! - **costing**: the pure cost-calculation engine (the heart of the app)
//! - **ingredient_service**: ingredient catalog CRUD and cost lookup
//! - **labor_service**: standalone per-product labor records
//! - **recipe_service**: recipe CRUD and the recalculation trigger
//! - **import_service**: bulk import over a validated alias table
//! - **models**: domain entities
//! - **commands**: internal command/result types used by the services
//! - **errors**: the domain error taxonomy
//!
//! ## Business Rules
//!
//! - Derived cost figures are recomputed in full on every create and update;
//!   a stored recipe is never out of step with its own inputs
//! - Ingredient costs are resolved at calculation time, never cached
//! - Monetary figures are rounded to 2 decimal places, half-up, once, at
//!   the end of the pipeline
//! - Every rejection names the field or reference that caused it

pub mod commands;
pub mod costing;
pub mod errors;
pub mod import_service;
pub mod ingredient_service;
pub mod labor_service;
pub mod models;
pub mod recipe_service;

pub use import_service::ImportService;
pub use ingredient_service::IngredientService;
pub use labor_service::LaborService;
pub use recipe_service::RecipeService;
