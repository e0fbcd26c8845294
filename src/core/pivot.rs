use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::trace;

use crate::error::{RenderError, RenderResult};

/// Column-ordered tabular dataset: a header plus value rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataTable {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl DataTable {
    /// Builds a table from an explicit header and rows.
    ///
    /// Every row must be exactly as wide as the header.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Value>>) -> RenderResult<Self> {
        for (index, row) in rows.iter().enumerate() {
            if row.len() != columns.len() {
                return Err(RenderError::InvalidConfig(format!(
                    "row {index} has {} cells, header has {} columns",
                    row.len(),
                    columns.len()
                )));
            }
        }
        Ok(Self { columns, rows })
    }

    /// Builds a table from keyed records. The first record defines the
    /// header; later records must carry every header field.
    pub fn from_records(records: &[IndexMap<String, Value>]) -> RenderResult<Self> {
        let Some(first) = records.first() else {
            return Self::new(Vec::new(), Vec::new());
        };

        let columns: Vec<String> = first.keys().cloned().collect();
        let mut rows = Vec::with_capacity(records.len());
        for record in records {
            let mut row = Vec::with_capacity(columns.len());
            for column in &columns {
                let cell = record.get(column).ok_or_else(|| RenderError::UnknownColumn {
                    name: column.clone(),
                })?;
                row.push(cell.clone());
            }
            rows.push(row);
        }

        Self::new(columns, rows)
    }

    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    /// Resolves a column name to its position in the header.
    pub fn column_index(&self, name: &str) -> RenderResult<usize> {
        self.columns
            .iter()
            .position(|column| column == name)
            .ok_or_else(|| RenderError::UnknownColumn {
                name: name.to_owned(),
            })
    }
}

/// Result of pivoting a table into per-row chart records.
///
/// Each record maps `x` plus one synthetic single-letter identifier per
/// y-column to that row's display values, preserving insertion order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PivotedSeries {
    records: Vec<IndexMap<String, String>>,
    series_ids: Vec<String>,
}

impl PivotedSeries {
    #[must_use]
    pub fn records(&self) -> &[IndexMap<String, String>] {
        &self.records
    }

    /// Identifiers used as data keys, in assignment order.
    #[must_use]
    pub fn series_keys(&self) -> &[String] {
        &self.series_ids
    }

    /// Identifiers used as display labels. Always identical to the keys.
    #[must_use]
    pub fn series_labels(&self) -> &[String] {
        &self.series_ids
    }
}

/// Pivots `table` into per-row records for a charting call.
///
/// The Nth y-column is assigned the Nth identifier starting at `a`, used
/// both as data key and display label. Columns are validated against the
/// header before any output is produced. Behavior past 26 y-columns is
/// unspecified.
pub fn pivot_series(
    table: &DataTable,
    x_column: &str,
    y_columns: &[impl AsRef<str>],
) -> RenderResult<PivotedSeries> {
    let x_index = table.column_index(x_column)?;
    let mut y_indices = Vec::with_capacity(y_columns.len());
    for y_column in y_columns {
        y_indices.push(table.column_index(y_column.as_ref())?);
    }

    let series_ids: Vec<String> = (0..y_columns.len()).map(series_id).collect();

    let mut records = Vec::with_capacity(table.rows().len());
    for row in table.rows() {
        let mut record = IndexMap::with_capacity(1 + y_indices.len());
        record.insert("x".to_owned(), display_value(&row[x_index]));
        for (series_id, y_index) in series_ids.iter().zip(&y_indices) {
            record.insert(series_id.clone(), display_value(&row[*y_index]));
        }
        records.push(record);
    }

    trace!(
        rows = records.len(),
        series = series_ids.len(),
        "pivoted chart dataset"
    );

    Ok(PivotedSeries { records, series_ids })
}

fn series_id(index: usize) -> String {
    char::from(b'a' + index as u8).to_string()
}

/// Display-string conversion only, no other coercion. Strings pass through
/// unquoted; every other JSON value uses its literal spelling.
fn display_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
