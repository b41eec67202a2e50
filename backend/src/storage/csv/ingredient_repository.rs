//! CSV-backed ingredient catalog repository.

use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use csv::{Reader, Writer};
use log::debug;
use rust_decimal::Decimal;

use crate::domain::models::ingredient::Ingredient;
use crate::domain::models::normalize_name;
use crate::storage::traits::IngredientStorage;

use super::connection::CsvConnection;

/// Stores the whole catalog in a single CSV file; every mutation is a
/// read-modify-write of that file.
#[derive(Clone)]
pub struct IngredientRepository {
    connection: CsvConnection,
}

impl IngredientRepository {
    pub fn new(connection: CsvConnection) -> Self {
        Self { connection }
    }

    fn read_ingredients(&self) -> Result<Vec<Ingredient>> {
        self.connection.ensure_ingredients_file_exists()?;

        let file_path = self.connection.ingredients_file_path();
        let file = File::open(&file_path)?;
        let mut csv_reader = Reader::from_reader(BufReader::new(file));

        let mut ingredients = Vec::new();
        for result in csv_reader.records() {
            let record = result?;
            ingredients.push(Self::parse_record(&record)?);
        }

        debug!("Read {} ingredients from catalog", ingredients.len());
        Ok(ingredients)
    }

    fn parse_record(record: &csv::StringRecord) -> Result<Ingredient> {
        let id = record.get(0).unwrap_or("").to_string();
        let cost_field = record.get(3).unwrap_or("");
        let cost_per_unit = cost_field
            .parse::<Decimal>()
            .with_context(|| format!("Invalid cost_per_unit '{}' for ingredient '{}'", cost_field, id))?;

        Ok(Ingredient {
            name: record.get(1).unwrap_or("").to_string(),
            unit_of_measure: record.get(2).unwrap_or("").to_string(),
            cost_per_unit,
            created_at: Self::parse_timestamp(record.get(4).unwrap_or(""), &id)?,
            updated_at: Self::parse_timestamp(record.get(5).unwrap_or(""), &id)?,
            id,
        })
    }

    fn parse_timestamp(value: &str, id: &str) -> Result<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(value)
            .map(|dt| dt.with_timezone(&Utc))
            .with_context(|| format!("Invalid timestamp '{}' for ingredient '{}'", value, id))
    }

    fn write_ingredients(&self, ingredients: &[Ingredient]) -> Result<()> {
        let file_path = self.connection.ingredients_file_path();
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&file_path)?;
        let mut csv_writer = Writer::from_writer(BufWriter::new(file));

        csv_writer.write_record([
            "id",
            "name",
            "unit_of_measure",
            "cost_per_unit",
            "created_at",
            "updated_at",
        ])?;

        for ingredient in ingredients {
            let cost = ingredient.cost_per_unit.to_string();
            let created = ingredient.created_at.to_rfc3339();
            let updated = ingredient.updated_at.to_rfc3339();
            csv_writer.write_record([
                ingredient.id.as_str(),
                ingredient.name.as_str(),
                ingredient.unit_of_measure.as_str(),
                cost.as_str(),
                created.as_str(),
                updated.as_str(),
            ])?;
        }

        csv_writer.flush()?;
        Ok(())
    }
}

impl IngredientStorage for IngredientRepository {
    fn store_ingredient(&self, ingredient: &Ingredient) -> Result<()> {
        let mut ingredients = self.read_ingredients()?;
        ingredients.push(ingredient.clone());
        self.write_ingredients(&ingredients)
    }

    fn get_ingredient(&self, id: &str) -> Result<Option<Ingredient>> {
        let ingredients = self.read_ingredients()?;
        Ok(ingredients.into_iter().find(|i| i.id == id))
    }

    fn find_ingredient_by_name(&self, name: &str) -> Result<Option<Ingredient>> {
        let wanted = normalize_name(name);
        let ingredients = self.read_ingredients()?;
        Ok(ingredients
            .into_iter()
            .find(|i| normalize_name(&i.name) == wanted))
    }

    fn list_ingredients(&self) -> Result<Vec<Ingredient>> {
        let mut ingredients = self.read_ingredients()?;
        ingredients.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        Ok(ingredients)
    }

    fn update_ingredient(&self, ingredient: &Ingredient) -> Result<()> {
        let mut ingredients = self.read_ingredients()?;
        let position = ingredients
            .iter()
            .position(|i| i.id == ingredient.id)
            .with_context(|| format!("Ingredient '{}' not in catalog", ingredient.id))?;
        ingredients[position] = ingredient.clone();
        self.write_ingredients(&ingredients)
    }

    fn delete_ingredient(&self, id: &str) -> Result<bool> {
        let mut ingredients = self.read_ingredients()?;
        let before = ingredients.len();
        ingredients.retain(|i| i.id != id);

        if ingredients.len() == before {
            return Ok(false);
        }

        self.write_ingredients(&ingredients)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::csv::test_utils::TestEnvironment;
    use rust_decimal_macros::dec;

    fn sample(name: &str, cost: Decimal) -> Ingredient {
        let now = Utc::now();
        Ingredient {
            id: Ingredient::generate_id(name),
            name: name.to_string(),
            unit_of_measure: "kg".to_string(),
            cost_per_unit: cost,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn store_and_get_round_trips_decimal_cost() {
        let env = TestEnvironment::new().unwrap();
        let repo = IngredientRepository::new(env.connection.clone());

        repo.store_ingredient(&sample("Cake Flour", dec!(1.50))).unwrap();

        let loaded = repo.get_ingredient("cake_flour").unwrap().unwrap();
        assert_eq!(loaded.name, "Cake Flour");
        assert_eq!(loaded.cost_per_unit, dec!(1.50));
    }

    #[test]
    fn find_by_name_is_case_insensitive() {
        let env = TestEnvironment::new().unwrap();
        let repo = IngredientRepository::new(env.connection.clone());

        repo.store_ingredient(&sample("Cake Flour", dec!(1.50))).unwrap();

        let found = repo.find_ingredient_by_name("  cake   FLOUR ").unwrap();
        assert!(found.is_some());
    }

    #[test]
    fn list_orders_by_name() {
        let env = TestEnvironment::new().unwrap();
        let repo = IngredientRepository::new(env.connection.clone());

        repo.store_ingredient(&sample("Salt", dec!(12))).unwrap();
        repo.store_ingredient(&sample("Butter", dec!(8.40))).unwrap();

        let names: Vec<String> = repo
            .list_ingredients()
            .unwrap()
            .into_iter()
            .map(|i| i.name)
            .collect();
        assert_eq!(names, vec!["Butter".to_string(), "Salt".to_string()]);
    }

    #[test]
    fn update_replaces_the_stored_row() {
        let env = TestEnvironment::new().unwrap();
        let repo = IngredientRepository::new(env.connection.clone());

        let mut ingredient = sample("Butter", dec!(8.40));
        repo.store_ingredient(&ingredient).unwrap();

        ingredient.cost_per_unit = dec!(9.10);
        repo.update_ingredient(&ingredient).unwrap();

        let loaded = repo.get_ingredient(&ingredient.id).unwrap().unwrap();
        assert_eq!(loaded.cost_per_unit, dec!(9.10));
    }

    #[test]
    fn delete_reports_whether_anything_was_removed() {
        let env = TestEnvironment::new().unwrap();
        let repo = IngredientRepository::new(env.connection.clone());

        repo.store_ingredient(&sample("Salt", dec!(12))).unwrap();

        assert!(repo.delete_ingredient("salt").unwrap());
        assert!(!repo.delete_ingredient("salt").unwrap());
        assert!(repo.get_ingredient("salt").unwrap().is_none());
    }
}
