use super::{read_file, IngredientProvider};
use crate::error::RouletteError;
use std::path::{Path, PathBuf};

/// One name per line; blank lines and `#` comments are skipped
#[derive(Debug, Clone)]
pub struct LineCatalog {
    path: PathBuf,
}

impl LineCatalog {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl IngredientProvider for LineCatalog {
    fn ingredient_names(&self) -> Result<Vec<String>, RouletteError> {
        let content = read_file(&self.path)?;
        Ok(content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_skips_blank_and_comment_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "# skafferiet\nMjöl\n\n  Socker  \r\n#Salt\n").unwrap();

        let names = LineCatalog::new(file.path()).ingredient_names().unwrap();
        assert_eq!(names, vec!["Mjöl".to_string(), "Socker".to_string()]);
    }

    #[test]
    fn test_empty_file_is_empty_pool() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let names = LineCatalog::new(file.path()).ingredient_names().unwrap();
        assert!(names.is_empty());
    }
}
