//! On-disk population format.
//!
//! Populations are stored as JSON:
//!
//! ```json
//! {
//!   "name": "confirmed",
//!   "columns": [
//!     { "name": "radius", "kind": "quantitative", "values": [1.17, null] },
//!     { "name": "method", "kind": "categorical", "values": ["transit", null] }
//!   ]
//! }
//! ```
//!
//! JSON has no `NaN`, so `null` is the missing-value marker in both column
//! kinds; quantitative `null`s become `NaN` on load.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::error::{ExoatlasError, Result};

use super::{Column, ColumnKind, Population};

#[derive(Debug, Deserialize)]
struct PopulationFile {
    name: String,
    columns: Vec<ColumnFile>,
}

#[derive(Debug, Deserialize)]
struct ColumnFile {
    name: String,
    kind: ColumnKind,
    values: Vec<Value>,
}

/// Load a population from a JSON file.
pub(super) fn load(path: &Path) -> Result<Population> {
    let content = fs::read_to_string(path).map_err(|e| ExoatlasError::PopulationParseError {
        path: path.to_path_buf(),
        message: format!("cannot read file: {}", e),
    })?;

    let file: PopulationFile =
        serde_json::from_str(&content).map_err(|e| ExoatlasError::PopulationParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let columns = file
        .columns
        .into_iter()
        .map(|col| convert_column(col, path))
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(
        path = %path.display(),
        name = file.name,
        columns = columns.len(),
        "loaded population"
    );

    Population::new(file.name, columns)
}

fn convert_column(col: ColumnFile, path: &Path) -> Result<Column> {
    let bad_value = |value: &Value| ExoatlasError::PopulationParseError {
        path: path.to_path_buf(),
        message: format!(
            "column '{}' ({:?}) has incompatible value {}",
            col.name, col.kind, value
        ),
    };

    match col.kind {
        ColumnKind::Quantitative => {
            let values = col
                .values
                .iter()
                .map(|v| match v {
                    Value::Null => Ok(f64::NAN),
                    Value::Number(n) => n.as_f64().ok_or_else(|| bad_value(v)),
                    other => Err(bad_value(other)),
                })
                .collect::<Result<Vec<_>>>()?;
            Ok(Column::quantitative(col.name, values))
        }
        ColumnKind::Categorical => {
            let values = col
                .values
                .iter()
                .map(|v| match v {
                    Value::Null => Ok(None),
                    Value::String(s) => Ok(Some(s.clone())),
                    other => Err(bad_value(other)),
                })
                .collect::<Result<Vec<_>>>()?;
            Ok(Column::categorical(col.name, values))
        }
    }
}
