//! Semicolon-delimited reference tables, passed through wholesale.

use std::path::Path;

use indexmap::IndexMap;

use crate::error::AppError;

/// One table row, header to raw cell value in column order.
pub type TableRow = IndexMap<String, String>;

/// Read a whole reference table.
pub async fn read_table(path: &Path) -> Result<Vec<TableRow>, AppError> {
    let bytes = tokio::fs::read(path).await?;
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(true)
        .from_reader(bytes.as_slice());

    let mut rows = Vec::new();
    for row in reader.deserialize() {
        rows.push(row?);
    }
    Ok(rows)
}
