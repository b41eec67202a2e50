//! Per-product labor record service.
//!
//! Maintains the standalone single-rate labor model: one record per product
//! type, with the derived per-pie cost recomputed from scratch on every
//! mutation. Recipe pricing does not consult these records; they exist for
//! quick labor quotes per product.

use std::sync::Arc;

use anyhow::Result;
use chrono::Utc;
use log::info;

use crate::domain::commands::labor::{
    CreateLaborRecordCommand, CreateLaborRecordResult, ListLaborRecordsResult,
    UpdateLaborRecordCommand, UpdateLaborRecordResult,
};
use crate::domain::costing;
use crate::domain::errors::DomainError;
use crate::domain::models::labor::LaborRecord;
use crate::storage::csv::{CsvConnection, LaborRepository};
use crate::storage::traits::LaborStorage;

#[derive(Clone)]
pub struct LaborService {
    labor_repository: LaborRepository,
}

impl LaborService {
    pub fn new(csv_conn: Arc<CsvConnection>) -> Self {
        let labor_repository = LaborRepository::new((*csv_conn).clone());
        Self { labor_repository }
    }

    /// Create a labor record. Negative rate or minutes are accepted but the
    /// derived cost clamps to zero; a negative labor cost never reaches
    /// pricing.
    pub fn create_labor_record(
        &self,
        command: CreateLaborRecordCommand,
    ) -> Result<CreateLaborRecordResult> {
        info!(
            "Creating labor record: pie={}, rate={}, minutes={}",
            command.pie_name, command.cost_per_hour, command.minutes_per_pie
        );

        let pie_name = command.pie_name.trim().to_string();
        if pie_name.is_empty() {
            return Err(DomainError::validation("pie_name", "must not be empty").into());
        }

        let id = LaborRecord::generate_id(&pie_name);
        if id.is_empty() {
            return Err(
                DomainError::validation("pie_name", "must contain at least one letter or digit")
                    .into(),
            );
        }
        if self.labor_repository.get_labor_record(&id)?.is_some() {
            return Err(DomainError::DuplicateIdentity {
                message: format!("labor record for '{}' already exists", pie_name),
            }
            .into());
        }

        let now = Utc::now();
        let labor_record = LaborRecord {
            id,
            pie_name,
            cost_per_hour: command.cost_per_hour,
            minutes_per_pie: command.minutes_per_pie,
            labor_cost_per_pie: costing::per_pie_labor_cost(
                command.cost_per_hour,
                command.minutes_per_pie,
            ),
            created_at: now,
            updated_at: now,
        };

        self.labor_repository.store_labor_record(&labor_record)?;

        Ok(CreateLaborRecordResult { labor_record })
    }

    pub fn get_labor_record(&self, id: &str) -> Result<Option<LaborRecord>> {
        self.labor_repository.get_labor_record(id)
    }

    pub fn list_labor_records(&self) -> Result<ListLaborRecordsResult> {
        let labor_records = self.labor_repository.list_labor_records()?;
        Ok(ListLaborRecordsResult { labor_records })
    }

    /// Update a labor record, recomputing the derived per-pie cost whether or
    /// not the inputs changed.
    pub fn update_labor_record(
        &self,
        id: &str,
        command: UpdateLaborRecordCommand,
    ) -> Result<UpdateLaborRecordResult> {
        info!("Updating labor record {}: {:?}", id, command);

        let mut labor_record = self
            .labor_repository
            .get_labor_record(id)?
            .ok_or_else(|| DomainError::LaborRecordNotFound { id: id.to_string() })?;

        if let Some(cost_per_hour) = command.cost_per_hour {
            labor_record.cost_per_hour = cost_per_hour;
        }
        if let Some(minutes_per_pie) = command.minutes_per_pie {
            labor_record.minutes_per_pie = minutes_per_pie;
        }

        labor_record.labor_cost_per_pie =
            costing::per_pie_labor_cost(labor_record.cost_per_hour, labor_record.minutes_per_pie);
        labor_record.updated_at = Utc::now();

        self.labor_repository.update_labor_record(&labor_record)?;

        Ok(UpdateLaborRecordResult { labor_record })
    }

    pub fn delete_labor_record(&self, id: &str) -> Result<bool> {
        info!("Deleting labor record {}", id);
        self.labor_repository.delete_labor_record(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use tempfile::TempDir;

    fn create_test_service() -> (LaborService, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let connection = Arc::new(CsvConnection::new(temp_dir.path()).unwrap());
        (LaborService::new(connection), temp_dir)
    }

    #[test]
    fn create_derives_cost_from_rate_and_minutes() {
        let (service, _dir) = create_test_service();

        let record = service
            .create_labor_record(CreateLaborRecordCommand {
                pie_name: "Chicken Pie".to_string(),
                cost_per_hour: dec!(25),
                minutes_per_pie: dec!(30),
            })
            .unwrap()
            .labor_record;

        assert_eq!(record.id, "chicken_pie");
        assert_eq!(record.labor_cost_per_pie, dec!(12.50));
    }

    #[test]
    fn create_clamps_negative_inputs_to_zero_cost() {
        let (service, _dir) = create_test_service();

        let record = service
            .create_labor_record(CreateLaborRecordCommand {
                pie_name: "Mystery Pie".to_string(),
                cost_per_hour: dec!(-25),
                minutes_per_pie: dec!(30),
            })
            .unwrap()
            .labor_record;

        assert_eq!(record.labor_cost_per_pie, Decimal::ZERO);
    }

    #[test]
    fn create_rejects_duplicate_pie_name() {
        let (service, _dir) = create_test_service();

        service
            .create_labor_record(CreateLaborRecordCommand {
                pie_name: "Chicken Pie".to_string(),
                cost_per_hour: dec!(25),
                minutes_per_pie: dec!(30),
            })
            .unwrap();

        let err = service
            .create_labor_record(CreateLaborRecordCommand {
                pie_name: "chicken pie".to_string(),
                cost_per_hour: dec!(30),
                minutes_per_pie: dec!(20),
            })
            .unwrap_err();

        let domain_err = err.downcast_ref::<DomainError>().unwrap();
        assert!(matches!(domain_err, DomainError::DuplicateIdentity { .. }));
    }

    #[test]
    fn update_recomputes_the_derived_cost() {
        let (service, _dir) = create_test_service();

        let record = service
            .create_labor_record(CreateLaborRecordCommand {
                pie_name: "Chicken Pie".to_string(),
                cost_per_hour: dec!(25),
                minutes_per_pie: dec!(30),
            })
            .unwrap()
            .labor_record;

        let updated = service
            .update_labor_record(
                &record.id,
                UpdateLaborRecordCommand {
                    minutes_per_pie: Some(dec!(45)),
                    ..Default::default()
                },
            )
            .unwrap()
            .labor_record;

        // 25 * 45 / 60
        assert_eq!(updated.labor_cost_per_pie, dec!(18.75));
        assert_eq!(updated.cost_per_hour, dec!(25));
    }

    #[test]
    fn update_missing_record_is_a_not_found_error() {
        let (service, _dir) = create_test_service();

        let err = service
            .update_labor_record("nope", UpdateLaborRecordCommand::default())
            .unwrap_err();

        let domain_err = err.downcast_ref::<DomainError>().unwrap();
        assert_eq!(
            *domain_err,
            DomainError::LaborRecordNotFound {
                id: "nope".to_string()
            }
        );
    }
}
