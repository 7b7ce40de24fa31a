use crate::config::CatalogConfig;
use crate::error::RouletteError;
use log::{debug, info, warn};
use std::path::Path;

mod json;
mod lines;
mod table;
mod workbook;

pub use self::json::JsonCatalog;
pub use self::lines::LineCatalog;
pub use self::table::TableCatalog;
pub use self::workbook::WorkbookCatalog;

/// Source of candidate ingredient names
pub trait IngredientProvider: Send + Sync {
    fn ingredient_names(&self) -> Result<Vec<String>, RouletteError>;
}

/// A fixed, in-memory list of names
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog(pub Vec<String>);

impl IngredientProvider for StaticCatalog {
    fn ingredient_names(&self) -> Result<Vec<String>, RouletteError> {
        Ok(self.0.clone())
    }
}

impl<S: Into<String>> FromIterator<S> for StaticCatalog {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        StaticCatalog(iter.into_iter().map(Into::into).collect())
    }
}

/// Pick a provider for `path` based on its extension.
///
/// Spreadsheets (`.xlsx`, `.xlsm`, `.xlsb`, `.xls`, `.ods`) are read from
/// their first sheet, `.json` files hold a JSON array, `.txt` files hold one
/// name per line and anything else is treated as a delimited table export.
pub fn open(path: &Path, config: &CatalogConfig) -> Box<dyn IngredientProvider> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match extension.as_deref() {
        Some("xlsx" | "xlsm" | "xlsb" | "xls" | "ods") => {
            info!(
                "Reading column '{}' from workbook {}",
                config.column,
                path.display()
            );
            Box::new(WorkbookCatalog::from_config(path, config))
        }
        Some("json") => {
            info!("Reading ingredient names from JSON file {}", path.display());
            Box::new(JsonCatalog::new(path))
        }
        Some("txt") => {
            info!("Reading ingredient names from text file {}", path.display());
            Box::new(LineCatalog::new(path))
        }
        _ => {
            info!(
                "Reading column '{}' from table {}",
                config.column,
                path.display()
            );
            Box::new(TableCatalog::from_config(path, config))
        }
    }
}

pub(crate) fn read_file(path: &Path) -> Result<String, RouletteError> {
    std::fs::read_to_string(path).map_err(|source| RouletteError::CatalogIo {
        path: path.to_path_buf(),
        source,
    })
}

/// Collect the non-blank values of `column` from tabular rows.
///
/// `rows` yields every row of the source from the top; rows before
/// `header_row` are skipped unparsed and row `header_row` names the columns.
pub(crate) fn column_values<I>(
    rows: I,
    path: &Path,
    column: &str,
    header_row: usize,
) -> Result<Vec<String>, RouletteError>
where
    I: Iterator<Item = Result<Vec<String>, RouletteError>>,
{
    let mut rows = rows.skip(header_row);

    let header = rows.next().ok_or_else(|| {
        RouletteError::CatalogFormat(format!(
            "expected column names on row {} of '{}'",
            header_row + 1,
            path.display()
        ))
    })??;
    let index = header
        .iter()
        .position(|name| name.trim() == column)
        .ok_or_else(|| RouletteError::CatalogColumnMissing {
            column: column.to_string(),
            path: path.to_path_buf(),
        })?;

    let mut names = Vec::new();
    let mut skipped = 0usize;
    for row in rows {
        let row = row?;
        match row.get(index).map(|cell| cell.trim()) {
            Some(name) if !name.is_empty() => names.push(name.to_string()),
            _ => skipped += 1,
        }
    }

    if skipped > 0 {
        debug!("Skipped {} rows without '{}'", skipped, column);
    }
    if names.is_empty() {
        warn!("No values in column '{}' of '{}'", column, path.display());
    }
    Ok(names)
}
