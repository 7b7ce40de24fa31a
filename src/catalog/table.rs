use super::{column_values, read_file, IngredientProvider};
use crate::config::CatalogConfig;
use crate::error::RouletteError;
use std::path::{Path, PathBuf};

/// A delimited export of the food database.
///
/// The export starts with a few title rows, so the column names live on
/// `header_row` (zero-based). Rows whose name cell is missing or blank are
/// dropped. Quoted cells may contain the delimiter; embedded line breaks are
/// not supported.
#[derive(Debug, Clone)]
pub struct TableCatalog {
    path: PathBuf,
    column: String,
    header_row: usize,
    delimiter: char,
}

impl TableCatalog {
    pub fn new(path: impl AsRef<Path>, column: impl Into<String>) -> Self {
        let defaults = CatalogConfig::default();
        Self {
            path: path.as_ref().to_path_buf(),
            column: column.into(),
            header_row: defaults.header_row,
            delimiter: defaults.delimiter,
        }
    }

    pub fn from_config(path: impl AsRef<Path>, config: &CatalogConfig) -> Self {
        Self::new(path, config.column.clone())
            .header_row(config.header_row)
            .delimiter(config.delimiter)
    }

    pub fn header_row(mut self, row: usize) -> Self {
        self.header_row = row;
        self
    }

    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    fn parse(&self, content: &str) -> Result<Vec<String>, RouletteError> {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);
        let rows = content.lines().enumerate().map(|(index, line)| {
            split_record(line, self.delimiter).map_err(|reason| {
                RouletteError::CatalogFormat(format!(
                    "row {} of '{}': {}",
                    index + 1,
                    self.path.display(),
                    reason
                ))
            })
        });

        column_values(rows, &self.path, &self.column, self.header_row)
    }
}

impl IngredientProvider for TableCatalog {
    fn ingredient_names(&self) -> Result<Vec<String>, RouletteError> {
        let content = read_file(&self.path)?;
        self.parse(&content)
    }
}

/// Split one record, honouring double-quoted cells and `""` escapes
fn split_record(line: &str, delimiter: char) -> Result<Vec<String>, &'static str> {
    let mut cells = Vec::new();
    let mut cell = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    cell.push('"');
                }
                '"' => in_quotes = false,
                c => cell.push(c),
            }
        } else if c == '"' && cell.trim().is_empty() {
            cell.clear();
            in_quotes = true;
        } else if c == delimiter {
            cells.push(std::mem::take(&mut cell));
        } else {
            cell.push(c);
        }
    }

    if in_quotes {
        return Err("unterminated quoted cell");
    }
    cells.push(cell);
    Ok(cells)
}
