//! File-system connection for the CSV/YAML storage backend.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use log::info;

use crate::storage::traits::Connection;

use super::ingredient_repository::IngredientRepository;
use super::labor_repository::LaborRepository;
use super::recipe_repository::RecipeRepository;

/// Environment variable overriding the data directory location.
pub const DATA_DIR_ENV: &str = "PIE_COSTING_DATA_DIR";

/// Manages file paths under the data directory and ensures the catalog files
/// and recipe directory exist before repositories touch them.
#[derive(Clone)]
pub struct CsvConnection {
    base_directory: PathBuf,
}

impl CsvConnection {
    /// Create a new connection with an explicit base directory.
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        if !base_path.exists() {
            fs::create_dir_all(&base_path)?;
        }

        Ok(Self {
            base_directory: base_path,
        })
    }

    /// Create a connection in the default data directory, honouring the
    /// `PIE_COSTING_DATA_DIR` environment variable when set.
    pub fn new_default() -> Result<Self> {
        if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
            info!("Using data directory from {}: {}", DATA_DIR_ENV, dir);
            return Self::new(dir);
        }

        let home_dir = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .map_err(|_| anyhow::anyhow!("Could not determine home directory"))?;

        let data_dir = PathBuf::from(home_dir)
            .join("Documents")
            .join("Pie Costing");
        info!("Using default data directory: {}", data_dir.display());
        Self::new(data_dir)
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    /// Path of the flat ingredient catalog file.
    pub fn ingredients_file_path(&self) -> PathBuf {
        self.base_directory.join("ingredients.csv")
    }

    /// Path of the flat labor record catalog file.
    pub fn labor_records_file_path(&self) -> PathBuf {
        self.base_directory.join("labor_records.csv")
    }

    /// Directory holding one YAML document per recipe.
    pub fn recipes_directory(&self) -> PathBuf {
        self.base_directory.join("recipes")
    }

    /// Create the ingredients file with its header row if it does not exist.
    pub fn ensure_ingredients_file_exists(&self) -> Result<()> {
        let path = self.ingredients_file_path();
        if !path.exists() {
            fs::write(
                &path,
                "id,name,unit_of_measure,cost_per_unit,created_at,updated_at\n",
            )?;
        }
        Ok(())
    }

    /// Create the labor records file with its header row if it does not exist.
    pub fn ensure_labor_records_file_exists(&self) -> Result<()> {
        let path = self.labor_records_file_path();
        if !path.exists() {
            fs::write(
                &path,
                "id,pie_name,cost_per_hour,minutes_per_pie,labor_cost_per_pie,created_at,updated_at\n",
            )?;
        }
        Ok(())
    }

    /// Create the recipes directory if it does not exist.
    pub fn ensure_recipes_directory_exists(&self) -> Result<()> {
        let dir = self.recipes_directory();
        if !dir.exists() {
            fs::create_dir_all(&dir)?;
        }
        Ok(())
    }
}

impl Connection for CsvConnection {
    type IngredientRepository = IngredientRepository;
    type RecipeRepository = RecipeRepository;
    type LaborRepository = LaborRepository;

    fn create_ingredient_repository(&self) -> Self::IngredientRepository {
        IngredientRepository::new(self.clone())
    }

    fn create_recipe_repository(&self) -> Self::RecipeRepository {
        RecipeRepository::new(self.clone())
    }

    fn create_labor_repository(&self) -> Self::LaborRepository {
        LaborRepository::new(self.clone())
    }
}
