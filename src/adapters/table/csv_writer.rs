//! CSV Table Writer - Implementation of TableWriter for .csv results.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::domain::analysis::RankedTable;
use crate::ports::{TableWriter, WriteError};

/// Writes the ranked table as comma-separated values with a header row.
///
/// Scores are written as floating-point values, ranks as integers. The write
/// is atomic: the table goes to a sibling temp file first and is renamed into
/// place, so a failure never leaves a partial result behind.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvTableWriter;

impl CsvTableWriter {
    /// Creates a new writer.
    pub fn new() -> Self {
        Self
    }
}

impl TableWriter for CsvTableWriter {
    fn write(&self, path: &Path, table: &RankedTable) -> Result<(), WriteError> {
        let display_path = path.to_string_lossy().to_string();
        let temp_path = path.with_extension("csv.tmp");

        let mut writer = csv::Writer::from_path(&temp_path)
            .map_err(|err| WriteError::target_unwritable(&display_path, err.to_string()))?;

        writer
            .write_record(&table.headers)
            .map_err(|err| WriteError::serialization(err.to_string()))?;

        for row in &table.rows {
            let mut record = Vec::with_capacity(table.headers.len());
            record.push(row.identifier.clone());
            for value in &row.values {
                record.push(value.to_string());
            }
            record.push(row.score.to_string());
            record.push(row.rank.to_string());
            writer
                .write_record(&record)
                .map_err(|err| WriteError::serialization(err.to_string()))?;
        }

        writer
            .flush()
            .map_err(|err| WriteError::target_unwritable(&display_path, err.to_string()))?;
        drop(writer);

        fs::rename(&temp_path, path)
            .map_err(|err| WriteError::target_unwritable(&display_path, err.to_string()))?;

        debug!(path = %display_path, rows = table.rows.len(), "result table written");
        Ok(())
    }
}
