use crate::domain::commands::labor::{CreateLaborRecordCommand, UpdateLaborRecordCommand};
use crate::domain::models::labor::LaborRecord as DomainLaborRecord;
use shared::{CreateLaborRecordRequest, LaborRecord as SharedLaborRecord, UpdateLaborRecordRequest};

pub struct LaborMapper;

impl LaborMapper {
    pub fn to_dto(domain: DomainLaborRecord) -> SharedLaborRecord {
        SharedLaborRecord {
            id: domain.id,
            pie_name: domain.pie_name,
            cost_per_hour: domain.cost_per_hour,
            minutes_per_pie: domain.minutes_per_pie,
            labor_cost_per_pie: domain.labor_cost_per_pie,
            created_at: domain.created_at.to_rfc3339(),
            updated_at: domain.updated_at.to_rfc3339(),
        }
    }

    pub fn create_to_command(request: CreateLaborRecordRequest) -> CreateLaborRecordCommand {
        CreateLaborRecordCommand {
            pie_name: request.pie_name,
            cost_per_hour: request.cost_per_hour,
            minutes_per_pie: request.minutes_per_pie,
        }
    }

    pub fn update_to_command(request: UpdateLaborRecordRequest) -> UpdateLaborRecordCommand {
        UpdateLaborRecordCommand {
            cost_per_hour: request.cost_per_hour,
            minutes_per_pie: request.minutes_per_pie,
        }
    }
}
