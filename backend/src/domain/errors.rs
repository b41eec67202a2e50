//! Domain error taxonomy.
//!
//! Two client-correctable classes exist: validation errors (bad field values,
//! caught before any calculation runs) and data-integrity errors (a reference
//! that does not resolve at calculation time). Storage faults are not modelled
//! here; they travel as plain `anyhow` errors and surface as server faults.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// A field value failed validation. Always names the offending field so
    /// the client can highlight the corrective action.
    #[error("{field}: {message}")]
    Validation { field: String, message: String },

    /// A recipe referenced an ingredient that does not exist in the catalog.
    /// Client-correctable even though it surfaces during calculation.
    #[error("ingredient '{id}' not found")]
    IngredientNotFound { id: String },

    /// A stored ingredient carries a cost the calculator refuses to price
    /// from (negative). Nothing is calculated or persisted.
    #[error("ingredient '{id}' has an invalid cost per unit")]
    InvalidIngredientCost { id: String },

    #[error("recipe '{id}' not found")]
    RecipeNotFound { id: String },

    #[error("labor record '{id}' not found")]
    LaborRecordNotFound { id: String },

    /// Another record already claims a unique identity (ingredient name, or
    /// a recipe's (pie name, variant) pair).
    #[error("{message}")]
    DuplicateIdentity { message: String },
}

impl DomainError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        DomainError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}
