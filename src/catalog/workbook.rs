use super::{column_values, IngredientProvider};
use crate::config::CatalogConfig;
use crate::error::RouletteError;
use calamine::{open_workbook_auto, Reader};
use std::path::{Path, PathBuf};

/// The food database as a spreadsheet, read from its first sheet.
///
/// Row and column handling matches [`super::TableCatalog`]: names are taken
/// from `column` below `header_row`, blank cells are dropped.
#[derive(Debug, Clone)]
pub struct WorkbookCatalog {
    path: PathBuf,
    column: String,
    header_row: usize,
}

impl WorkbookCatalog {
    pub fn new(path: impl AsRef<Path>, column: impl Into<String>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            column: column.into(),
            header_row: CatalogConfig::default().header_row,
        }
    }

    pub fn from_config(path: impl AsRef<Path>, config: &CatalogConfig) -> Self {
        Self::new(path, config.column.clone()).header_row(config.header_row)
    }

    pub fn header_row(mut self, row: usize) -> Self {
        self.header_row = row;
        self
    }

    fn format_error(&self, error: impl std::fmt::Display) -> RouletteError {
        RouletteError::CatalogFormat(format!("'{}': {}", self.path.display(), error))
    }
}

impl IngredientProvider for WorkbookCatalog {
    fn ingredient_names(&self) -> Result<Vec<String>, RouletteError> {
        // Surface a missing file as an io error rather than a workbook error
        std::fs::metadata(&self.path).map_err(|source| RouletteError::CatalogIo {
            path: self.path.clone(),
            source,
        })?;

        let mut workbook = open_workbook_auto(&self.path).map_err(|e| self.format_error(e))?;
        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| self.format_error("workbook has no sheets"))?
            .map_err(|e| self.format_error(e))?;

        // The range starts at the first used cell; pad so row numbers stay absolute
        let first_row = range.start().map_or(0, |(row, _)| row as usize);
        let rows = std::iter::repeat_with(Vec::<String>::new)
            .take(first_row)
            .chain(
                range
                    .rows()
                    .map(|row| row.iter().map(|cell| cell.to_string()).collect::<Vec<_>>()),
            )
            .map(Ok::<_, RouletteError>);

        column_values(rows, &self.path, &self.column, self.header_row)
    }
}
