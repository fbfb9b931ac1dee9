//! The tabular population data model.
//!
//! A [`Population`] is a named set of equal-length columns describing a
//! collection of exoplanet records. Each column declares its kind up front
//! ([`ColumnKind::Quantitative`] or [`ColumnKind::Categorical`]); nothing in
//! the crate guesses a column's type from its values. Missing values are
//! explicit: `NaN` in quantitative columns, `None` in categorical ones.
//!
//! Populations are received fully formed (usually loaded from a JSON file,
//! see [`Population::load`]); this crate never mutates one.

mod table;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ExoatlasError, Result};

/// The declared type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    /// Numeric values; non-finite entries are missing/invalid.
    Quantitative,
    /// String-valued categories; `None` entries are missing.
    Categorical,
}

/// A column's values, matching its declared kind.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnData {
    /// Numeric values with `NaN` marking missing entries.
    Quantitative(Vec<f64>),
    /// Category labels with `None` marking missing entries.
    Categorical(Vec<Option<String>>),
}

impl ColumnData {
    /// Number of rows.
    pub fn len(&self) -> usize {
        match self {
            Self::Quantitative(v) => v.len(),
            Self::Categorical(v) => v.len(),
        }
    }

    /// Whether the column has no rows.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The declared kind this data belongs to.
    pub fn kind(&self) -> ColumnKind {
        match self {
            Self::Quantitative(_) => ColumnKind::Quantitative,
            Self::Categorical(_) => ColumnKind::Categorical,
        }
    }
}

/// A single named column.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name: String,
    data: ColumnData,
}

impl Column {
    /// Create a quantitative column.
    pub fn quantitative(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            data: ColumnData::Quantitative(values),
        }
    }

    /// Create a categorical column.
    pub fn categorical(name: impl Into<String>, values: Vec<Option<String>>) -> Self {
        Self {
            name: name.into(),
            data: ColumnData::Categorical(values),
        }
    }

    /// The column's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared kind.
    pub fn kind(&self) -> ColumnKind {
        self.data.kind()
    }

    /// The column's values.
    pub fn data(&self) -> &ColumnData {
        &self.data
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the column has no rows.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// A named tabular dataset of exoplanet records.
#[derive(Debug, Clone, PartialEq)]
pub struct Population {
    name: String,
    columns: Vec<Column>,
}

impl Population {
    /// Assemble a population from columns, validating row counts.
    ///
    /// All columns must have the same number of rows.
    pub fn new(name: impl Into<String>, columns: Vec<Column>) -> Result<Self> {
        if let Some(first) = columns.first() {
            let expected = first.len();
            for col in &columns[1..] {
                if col.len() != expected {
                    return Err(ExoatlasError::RaggedColumn {
                        column: col.name().to_string(),
                        found: col.len(),
                        expected,
                    });
                }
            }
        }

        Ok(Self {
            name: name.into(),
            columns,
        })
    }

    /// Load a population from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        table::load(path)
    }

    /// The population's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All columns, in declaration order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Names of all columns, in declaration order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name()).collect()
    }

    /// Number of rows (0 for a population with no columns).
    pub fn len(&self) -> usize {
        self.columns.first().map_or(0, Column::len)
    }

    /// Whether the population has no rows.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name() == name)
    }

    /// Look up a required column, erroring when absent or empty.
    ///
    /// This is the strict accessor the summary uses: a required column that
    /// is missing or has no rows is a schema error, not undefined behavior.
    pub fn require_column(&self, name: &str) -> Result<&Column> {
        let col = self
            .column(name)
            .ok_or_else(|| ExoatlasError::MissingColumn {
                population: self.name.clone(),
                column: name.to_string(),
            })?;

        if col.is_empty() {
            return Err(ExoatlasError::EmptyColumn {
                population: self.name.clone(),
                column: name.to_string(),
            });
        }

        Ok(col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_population() -> Population {
        Population::new(
            "test",
            vec![
                Column::quantitative("radius", vec![1.0, f64::NAN, 3.0]),
                Column::categorical(
                    "method",
                    vec![Some("transit".into()), None, Some("rv".into())],
                ),
            ],
        )
        .unwrap()
    }

    #[test]
    fn population_reports_rows_and_columns() {
        let pop = sample_population();
        assert_eq!(pop.len(), 3);
        assert_eq!(pop.column_names(), ["radius", "method"]);
    }

    #[test]
    fn column_kinds_are_declared_not_probed() {
        let pop = sample_population();
        assert_eq!(
            pop.column("radius").unwrap().kind(),
            ColumnKind::Quantitative
        );
        assert_eq!(
            pop.column("method").unwrap().kind(),
            ColumnKind::Categorical
        );
    }

    #[test]
    fn ragged_columns_are_rejected() {
        let err = Population::new(
            "bad",
            vec![
                Column::quantitative("a", vec![1.0, 2.0]),
                Column::quantitative("b", vec![1.0]),
            ],
        )
        .unwrap_err();
        assert!(matches!(err, ExoatlasError::RaggedColumn { .. }));
    }

    #[test]
    fn require_column_missing_is_an_error() {
        let pop = sample_population();
        let err = pop.require_column("mass").unwrap_err();
        assert!(matches!(err, ExoatlasError::MissingColumn { .. }));
    }

    #[test]
    fn require_column_empty_is_an_error() {
        let pop = Population::new(
            "empty",
            vec![Column::quantitative("radius", vec![])],
        )
        .unwrap();
        let err = pop.require_column("radius").unwrap_err();
        assert!(matches!(err, ExoatlasError::EmptyColumn { .. }));
    }

    #[test]
    fn empty_population_has_no_rows() {
        let pop = Population::new("none", vec![]).unwrap();
        assert!(pop.is_empty());
    }
}
