//! Table Reader Port - Source table parsing and validation interface.
//!
//! The domain depends on this trait; adapters (like CsvTableReader) provide
//! the implementation. Implementations act as the pre-pipeline validation
//! gate: malformed input is rejected here with one specific, user-actionable
//! error per failure mode, before the computation runs.

use std::path::Path;

use thiserror::Error;

use crate::domain::analysis::DecisionTable;

/// Port for reading a source table into matrix form.
///
/// # Contract
///
/// Implementations must:
/// - Treat the first column as the opaque alternative identifier.
/// - Parse every remaining column as a numeric criterion.
/// - Reject tables with fewer than 3 total columns (1 identifier +
///   at least 2 criteria).
/// - Surface exactly one precise [`ReadError`] on the first blocking
///   failure; never return a partially-parsed table.
pub trait TableReader: Send + Sync {
    /// Reads and validates the table at `path`.
    fn read(&self, path: &Path) -> Result<DecisionTable, ReadError>;
}

/// Errors from reading and validating a source table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReadError {
    /// The source file is missing or unreadable.
    #[error("Input file '{path}' not found or unreadable")]
    SourceUnavailable { path: String },

    /// The source is not in a recognized tabular format.
    #[error("Unsupported input format '{extension}': expected a .csv file")]
    UnsupportedFormat { extension: String },

    /// The table has fewer than 3 columns in total.
    #[error("Input must have at least 3 columns (identifier plus 2 criteria), found {found}")]
    InsufficientCriteria { found: usize },

    /// A criterion column contains a value that is not numeric.
    #[error("Column '{column}' contains non-numeric values")]
    NonNumericCriterion { column: String },
}

impl ReadError {
    /// Creates a source-unavailable error.
    pub fn source_unavailable(path: impl Into<String>) -> Self {
        Self::SourceUnavailable { path: path.into() }
    }

    /// Creates an unsupported-format error.
    pub fn unsupported_format(extension: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            extension: extension.into(),
        }
    }

    /// Creates a non-numeric-criterion error.
    pub fn non_numeric_criterion(column: impl Into<String>) -> Self {
        Self::NonNumericCriterion {
            column: column.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_unavailable_displays_path() {
        let err = ReadError::source_unavailable("data.csv");
        assert_eq!(err.to_string(), "Input file 'data.csv' not found or unreadable");
    }

    #[test]
    fn unsupported_format_displays_extension() {
        let err = ReadError::unsupported_format("xlsx");
        assert!(err.to_string().contains("xlsx"));
    }

    #[test]
    fn insufficient_criteria_displays_count() {
        let err = ReadError::InsufficientCriteria { found: 2 };
        assert!(err.to_string().contains("found 2"));
    }

    #[test]
    fn non_numeric_criterion_displays_column() {
        let err = ReadError::non_numeric_criterion("P3");
        assert_eq!(err.to_string(), "Column 'P3' contains non-numeric values");
    }

    #[test]
    fn table_reader_is_object_safe() {
        fn check<T: TableReader + ?Sized>() {}
        check::<dyn TableReader>();
    }
}
