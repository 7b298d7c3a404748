//! Decision Matrix - Core data structures for TOPSIS analysis.

use serde::{Deserialize, Serialize};

use super::errors::TopsisError;
use super::topsis_analyzer::TopsisOutcome;

/// A rectangular matrix of criterion values, rows = alternatives.
///
/// Invariants enforced at construction:
/// - At least one row and one column.
/// - Every row has the same column count.
/// - Every value is a finite real number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionMatrix {
    rows: Vec<Vec<f64>>,
    columns: usize,
}

impl DecisionMatrix {
    /// Creates a matrix from row vectors, validating shape and finiteness.
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self, TopsisError> {
        let first = rows.first().ok_or(TopsisError::EmptyMatrix)?;
        let columns = first.len();
        if columns == 0 {
            return Err(TopsisError::EmptyMatrix);
        }

        for (row_index, row) in rows.iter().enumerate() {
            if row.len() != columns {
                return Err(TopsisError::RaggedRow {
                    row: row_index,
                    expected: columns,
                    actual: row.len(),
                });
            }
            for (column_index, value) in row.iter().enumerate() {
                if !value.is_finite() {
                    return Err(TopsisError::NonFiniteValue {
                        row: row_index,
                        column: column_index,
                    });
                }
            }
        }

        Ok(Self { rows, columns })
    }

    /// Returns the number of alternatives (rows).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns the number of criteria (columns).
    pub fn column_count(&self) -> usize {
        self.columns
    }

    /// Returns the underlying rows.
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Iterates over the values of a single column in row order.
    pub fn column(&self, index: usize) -> impl Iterator<Item = f64> + '_ {
        self.rows.iter().filter_map(move |row| row.get(index).copied())
    }
}

/// A parsed source table: header row, identifier column, and criterion matrix.
///
/// The identifier column is carried through unchanged and never enters the
/// computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTable {
    /// All column headers, identifier column first.
    pub headers: Vec<String>,
    /// Alternative identifiers, one per row.
    pub identifiers: Vec<String>,
    /// Criterion values, one row per alternative.
    pub matrix: DecisionMatrix,
}

impl DecisionTable {
    /// Creates a table from its parts.
    pub fn new(headers: Vec<String>, identifiers: Vec<String>, matrix: DecisionMatrix) -> Self {
        Self {
            headers,
            identifiers,
            matrix,
        }
    }

    /// Returns the headers of the criterion columns (identifier excluded).
    pub fn criterion_headers(&self) -> &[String] {
        self.headers.get(1..).unwrap_or(&[])
    }

    /// Returns the number of criteria.
    pub fn criterion_count(&self) -> usize {
        self.matrix.column_count()
    }

    /// Returns the number of alternatives.
    pub fn alternative_count(&self) -> usize {
        self.matrix.row_count()
    }
}

/// A single scored and ranked alternative in the result table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedRow {
    pub identifier: String,
    /// Original criterion values, untouched by normalization or weighting.
    pub values: Vec<f64>,
    pub score: f64,
    pub rank: u32,
}

/// The result table: original columns plus `Topsis Score` and `Rank`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedTable {
    /// Original headers followed by the two appended result headers.
    pub headers: Vec<String>,
    pub rows: Vec<RankedRow>,
}

/// Header of the appended score column.
pub const SCORE_HEADER: &str = "Topsis Score";

/// Header of the appended rank column.
pub const RANK_HEADER: &str = "Rank";

impl RankedTable {
    /// Combines a source table with a computed outcome, row by row.
    pub fn from_outcome(table: DecisionTable, outcome: &TopsisOutcome) -> Self {
        let mut headers = table.headers;
        headers.push(SCORE_HEADER.to_string());
        headers.push(RANK_HEADER.to_string());

        let rows = table
            .identifiers
            .into_iter()
            .zip(table.matrix.rows.into_iter())
            .zip(outcome.scores.iter().zip(outcome.ranks.iter()))
            .map(|((identifier, values), (score, rank))| RankedRow {
                identifier,
                values,
                score: *score,
                rank: *rank,
            })
            .collect();

        Self { headers, rows }
    }

    /// Returns the identifier of the rank-1 alternative, if any.
    pub fn best_alternative(&self) -> Option<&str> {
        self.rows
            .iter()
            .find(|row| row.rank == 1)
            .map(|row| row.identifier.as_str())
    }
}
