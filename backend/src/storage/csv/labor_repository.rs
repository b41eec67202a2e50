//! CSV-backed labor record repository.

use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use csv::{Reader, Writer};
use log::debug;
use rust_decimal::Decimal;

use crate::domain::models::labor::LaborRecord;
use crate::storage::traits::LaborStorage;

use super::connection::CsvConnection;

/// Stores all labor records in a single CSV file, rewritten whole on every
/// mutation.
#[derive(Clone)]
pub struct LaborRepository {
    connection: CsvConnection,
}

impl LaborRepository {
    pub fn new(connection: CsvConnection) -> Self {
        Self { connection }
    }

    fn read_labor_records(&self) -> Result<Vec<LaborRecord>> {
        self.connection.ensure_labor_records_file_exists()?;

        let file_path = self.connection.labor_records_file_path();
        let file = File::open(&file_path)?;
        let mut csv_reader = Reader::from_reader(BufReader::new(file));

        let mut records = Vec::new();
        for result in csv_reader.records() {
            let record = result?;
            records.push(Self::parse_record(&record)?);
        }

        debug!("Read {} labor records", records.len());
        Ok(records)
    }

    fn parse_record(record: &csv::StringRecord) -> Result<LaborRecord> {
        let id = record.get(0).unwrap_or("").to_string();

        Ok(LaborRecord {
            pie_name: record.get(1).unwrap_or("").to_string(),
            cost_per_hour: Self::parse_decimal(record.get(2).unwrap_or(""), "cost_per_hour", &id)?,
            minutes_per_pie: Self::parse_decimal(
                record.get(3).unwrap_or(""),
                "minutes_per_pie",
                &id,
            )?,
            labor_cost_per_pie: Self::parse_decimal(
                record.get(4).unwrap_or(""),
                "labor_cost_per_pie",
                &id,
            )?,
            created_at: Self::parse_timestamp(record.get(5).unwrap_or(""), &id)?,
            updated_at: Self::parse_timestamp(record.get(6).unwrap_or(""), &id)?,
            id,
        })
    }

    fn parse_decimal(value: &str, field: &str, id: &str) -> Result<Decimal> {
        value
            .parse::<Decimal>()
            .with_context(|| format!("Invalid {} '{}' for labor record '{}'", field, value, id))
    }

    fn parse_timestamp(value: &str, id: &str) -> Result<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(value)
            .map(|dt| dt.with_timezone(&Utc))
            .with_context(|| format!("Invalid timestamp '{}' for labor record '{}'", value, id))
    }

    fn write_labor_records(&self, records: &[LaborRecord]) -> Result<()> {
        let file_path = self.connection.labor_records_file_path();
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&file_path)?;
        let mut csv_writer = Writer::from_writer(BufWriter::new(file));

        csv_writer.write_record([
            "id",
            "pie_name",
            "cost_per_hour",
            "minutes_per_pie",
            "labor_cost_per_pie",
            "created_at",
            "updated_at",
        ])?;

        for record in records {
            let cost_per_hour = record.cost_per_hour.to_string();
            let minutes_per_pie = record.minutes_per_pie.to_string();
            let labor_cost_per_pie = record.labor_cost_per_pie.to_string();
            let created = record.created_at.to_rfc3339();
            let updated = record.updated_at.to_rfc3339();
            csv_writer.write_record([
                record.id.as_str(),
                record.pie_name.as_str(),
                cost_per_hour.as_str(),
                minutes_per_pie.as_str(),
                labor_cost_per_pie.as_str(),
                created.as_str(),
                updated.as_str(),
            ])?;
        }

        csv_writer.flush()?;
        Ok(())
    }
}

impl LaborStorage for LaborRepository {
    fn store_labor_record(&self, record: &LaborRecord) -> Result<()> {
        let mut records = self.read_labor_records()?;
        records.push(record.clone());
        self.write_labor_records(&records)
    }

    fn get_labor_record(&self, id: &str) -> Result<Option<LaborRecord>> {
        let records = self.read_labor_records()?;
        Ok(records.into_iter().find(|r| r.id == id))
    }

    fn list_labor_records(&self) -> Result<Vec<LaborRecord>> {
        let mut records = self.read_labor_records()?;
        records.sort_by(|a, b| a.pie_name.to_lowercase().cmp(&b.pie_name.to_lowercase()));
        Ok(records)
    }

    fn update_labor_record(&self, record: &LaborRecord) -> Result<()> {
        let mut records = self.read_labor_records()?;
        let position = records
            .iter()
            .position(|r| r.id == record.id)
            .with_context(|| format!("Labor record '{}' not stored", record.id))?;
        records[position] = record.clone();
        self.write_labor_records(&records)
    }

    fn delete_labor_record(&self, id: &str) -> Result<bool> {
        let mut records = self.read_labor_records()?;
        let before = records.len();
        records.retain(|r| r.id != id);

        if records.len() == before {
            return Ok(false);
        }

        self.write_labor_records(&records)?;
        Ok(true)
    }
}
