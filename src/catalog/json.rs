use super::{read_file, IngredientProvider};
use crate::error::RouletteError;
use std::path::{Path, PathBuf};

/// Names stored as a JSON array of strings
#[derive(Debug, Clone)]
pub struct JsonCatalog {
    path: PathBuf,
}

impl JsonCatalog {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl IngredientProvider for JsonCatalog {
    fn ingredient_names(&self) -> Result<Vec<String>, RouletteError> {
        let content = read_file(&self.path)?;
        let names: Vec<String> = serde_json::from_str(&content)?;
        Ok(names
            .into_iter()
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .collect())
    }
}
