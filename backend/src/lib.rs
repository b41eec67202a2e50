//! # Pie Costing Backend
//!
//! Recipe costing for a small pie bakery: an ingredient catalog, itemized
//! labor inputs, and a deterministic calculation engine that turns them into
//! per-pie cost and a markup-based selling price.
//!
//! ## Architecture
//!
//! The backend follows a layered architecture:
//! ```text
//! REST layer (axum handlers, DTO mappers)
//!     |
//! Domain layer (costing engine, services)
//!     |
//! Storage layer (CSV catalogs, YAML recipes)
//! ```
//!
//! The costing engine itself is a pure function; the services around it own
//! validation, ingredient resolution, and the rule that derived figures are
//! recomputed on every write.

pub mod domain;
pub mod rest;
pub mod storage;
