//! Test utilities for the file-based storage backend.
//!
//! RAII-based cleanup: the temporary data directory lives exactly as long as
//! the environment value, even when a test panics.

use anyhow::Result;
use tempfile::TempDir;

use super::connection::CsvConnection;
use super::ingredient_repository::IngredientRepository;
use super::labor_repository::LaborRepository;
use super::recipe_repository::RecipeRepository;

/// A connection rooted in a temporary directory that is removed on drop.
pub struct TestEnvironment {
    pub connection: CsvConnection,
    /// Base directory path for manual inspection if needed
    pub base_path: std::path::PathBuf,
    _temp_dir: TempDir,
}

impl TestEnvironment {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let connection = CsvConnection::new(temp_dir.path())?;
        Ok(Self {
            connection,
            base_path: temp_dir.path().to_path_buf(),
            _temp_dir: temp_dir,
        })
    }
}

/// Bundles a fresh environment with one repository per entity.
pub struct TestHelper {
    pub env: TestEnvironment,
    pub ingredient_repo: IngredientRepository,
    pub recipe_repo: RecipeRepository,
    pub labor_repo: LaborRepository,
}

impl TestHelper {
    pub fn new() -> Result<Self> {
        let env = TestEnvironment::new()?;
        let ingredient_repo = IngredientRepository::new(env.connection.clone());
        let recipe_repo = RecipeRepository::new(env.connection.clone());
        let labor_repo = LaborRepository::new(env.connection.clone());

        Ok(Self {
            env,
            ingredient_repo,
            recipe_repo,
            labor_repo,
        })
    }
}
