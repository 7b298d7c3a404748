//! CSV Table Reader - Implementation of TableReader for .csv sources.
//!
//! Acts as the pre-pipeline validation gate: file availability, format,
//! column count, and numeric parsing are all checked here, short-circuiting
//! on the first blocking failure.

use std::path::Path;

use tracing::debug;

use crate::domain::analysis::{DecisionMatrix, DecisionTable};
use crate::ports::{ReadError, TableReader};

/// Reads a comma-separated source table with a header row.
///
/// Layout expectations:
/// - First row: column headers.
/// - First column: opaque alternative identifiers, carried through unchanged.
/// - Remaining columns: numeric criterion values.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvTableReader;

impl CsvTableReader {
    /// Creates a new reader.
    pub fn new() -> Self {
        Self
    }

    fn check_extension(path: &Path) -> Result<(), ReadError> {
        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_string())
            .unwrap_or_default();
        if extension.eq_ignore_ascii_case("csv") {
            Ok(())
        } else {
            Err(ReadError::unsupported_format(extension))
        }
    }
}

impl TableReader for CsvTableReader {
    fn read(&self, path: &Path) -> Result<DecisionTable, ReadError> {
        if !path.is_file() {
            return Err(ReadError::source_unavailable(path.to_string_lossy()));
        }
        Self::check_extension(path)?;

        let mut reader = csv::Reader::from_path(path)
            .map_err(|_| ReadError::source_unavailable(path.to_string_lossy()))?;

        let headers: Vec<String> = reader
            .headers()
            .map_err(|_| ReadError::source_unavailable(path.to_string_lossy()))?
            .iter()
            .map(str::to_string)
            .collect();
        if headers.len() < 3 {
            return Err(ReadError::InsufficientCriteria {
                found: headers.len(),
            });
        }

        let mut identifiers = Vec::new();
        let mut rows = Vec::new();
        for record in reader.records() {
            // Ragged or unreadable records make the whole source unusable.
            let record =
                record.map_err(|_| ReadError::source_unavailable(path.to_string_lossy()))?;

            let identifier = record.get(0).unwrap_or_default().to_string();
            let mut row = Vec::with_capacity(headers.len() - 1);
            for (index, cell) in record.iter().enumerate().skip(1) {
                let value: f64 = cell.trim().parse().map_err(|_| {
                    let column = headers
                        .get(index)
                        .cloned()
                        .unwrap_or_else(|| format!("#{index}"));
                    ReadError::non_numeric_criterion(column)
                })?;
                row.push(value);
            }
            identifiers.push(identifier);
            rows.push(row);
        }

        let matrix = DecisionMatrix::new(rows)
            .map_err(|_| ReadError::source_unavailable(path.to_string_lossy()))?;

        debug!(
            alternatives = matrix.row_count(),
            criteria = matrix.column_count(),
            "source table parsed"
        );

        Ok(DecisionTable::new(headers, identifiers, matrix))
    }
}
