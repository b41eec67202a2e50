//! YAML-backed recipe repository.
//!
//! Recipes are nested aggregates (ingredient lines, labor inputs, calculated
//! costs), so each one is stored as a single YAML document named after its
//! id, discovered by scanning the recipes directory.

use std::fs;

use anyhow::{Context, Result};
use log::{debug, warn};

use crate::domain::models::recipe::Recipe;
use crate::storage::traits::RecipeStorage;

use super::connection::CsvConnection;

#[derive(Clone)]
pub struct RecipeRepository {
    connection: CsvConnection,
}

impl RecipeRepository {
    pub fn new(connection: CsvConnection) -> Self {
        Self { connection }
    }

    fn recipe_file_path(&self, id: &str) -> std::path::PathBuf {
        self.connection
            .recipes_directory()
            .join(format!("{}.yaml", id))
    }

    fn write_recipe(&self, recipe: &Recipe) -> Result<()> {
        self.connection.ensure_recipes_directory_exists()?;
        let yaml = serde_yaml::to_string(recipe)
            .with_context(|| format!("Failed to serialize recipe '{}'", recipe.id))?;
        fs::write(self.recipe_file_path(&recipe.id), yaml)?;
        Ok(())
    }
}

impl RecipeStorage for RecipeRepository {
    fn store_recipe(&self, recipe: &Recipe) -> Result<()> {
        self.write_recipe(recipe)
    }

    fn get_recipe(&self, id: &str) -> Result<Option<Recipe>> {
        let path = self.recipe_file_path(id);
        if !path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&path)?;
        let recipe = serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse recipe file {}", path.display()))?;
        Ok(Some(recipe))
    }

    fn list_recipes(&self) -> Result<Vec<Recipe>> {
        let dir = self.connection.recipes_directory();
        if !dir.exists() {
            debug!("Recipes directory does not exist yet, returning empty list");
            return Ok(Vec::new());
        }

        let mut recipes = Vec::new();
        for entry in fs::read_dir(&dir)? {
            let entry = entry?;
            let path = entry.path();

            if path.extension().and_then(|e| e.to_str()) != Some("yaml") {
                continue;
            }

            let contents = fs::read_to_string(&path)?;
            match serde_yaml::from_str::<Recipe>(&contents) {
                Ok(recipe) => recipes.push(recipe),
                Err(e) => {
                    warn!("Skipping unreadable recipe file {}: {}", path.display(), e);
                }
            }
        }

        recipes.sort_by(|a, b| {
            let left = (a.pie_name.to_lowercase(), a.variant.to_lowercase());
            let right = (b.pie_name.to_lowercase(), b.variant.to_lowercase());
            left.cmp(&right)
        });
        Ok(recipes)
    }

    fn update_recipe(&self, recipe: &Recipe) -> Result<()> {
        let path = self.recipe_file_path(&recipe.id);
        if !path.exists() {
            anyhow::bail!("Recipe '{}' not stored", recipe.id);
        }
        self.write_recipe(recipe)
    }

    fn delete_recipe(&self, id: &str) -> Result<bool> {
        let path = self.recipe_file_path(id);
        if !path.exists() {
            return Ok(false);
        }
        fs::remove_file(&path)?;
        Ok(true)
    }
}
