//! Domain model for the standalone per-product labor record.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::slugify;

/// A single-rate labor profile for one product type.
///
/// `labor_cost_per_pie` is derived from `cost_per_hour` and `minutes_per_pie`
/// and recomputed on every mutation. This entity is reference data for quick
/// per-pie labor quotes; recipe pricing uses the itemized labor inputs on the
/// recipe itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaborRecord {
    pub id: String,
    pub pie_name: String,
    pub cost_per_hour: Decimal,
    pub minutes_per_pie: Decimal,
    pub labor_cost_per_pie: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl LaborRecord {
    pub fn generate_id(pie_name: &str) -> String {
        slugify(pie_name)
    }
}
