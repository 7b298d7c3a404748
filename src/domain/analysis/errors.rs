//! Error types for the TOPSIS computation pipeline.
//!
//! These are the computational-tier errors: degenerate numeric input detected
//! while the pipeline runs. Input validation errors (unreadable files, bad
//! weight strings) live with the reader port and the criteria parsers.

use thiserror::Error;

/// Errors raised by the TOPSIS pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TopsisError {
    /// The matrix has no rows or no columns.
    #[error("Decision matrix must have at least one alternative and one criterion")]
    EmptyMatrix,

    /// A row's length differs from the first row's.
    #[error("Row {row} has {actual} values, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// A matrix cell is NaN or infinite.
    #[error("Value at row {row}, column {column} is not a finite number")]
    NonFiniteValue { row: usize, column: usize },

    /// A criterion column has no spread (all values equal), so it cannot
    /// discriminate between alternatives and would divide by zero when all
    /// values are zero.
    #[error("Criterion column {column} is degenerate: every alternative has the same value")]
    DegenerateColumn { column: usize },

    /// An alternative coincides with both ideal points, leaving the closeness
    /// score undefined.
    #[error("Score for row {row} is undefined: zero distance to both ideal points")]
    UndefinedScore { row: usize },

    /// Weight vector length differs from the criterion count.
    #[error("Expected {expected} weights, got {actual}")]
    WeightCountMismatch { expected: usize, actual: usize },

    /// Impact vector length differs from the criterion count.
    #[error("Expected {expected} impacts, got {actual}")]
    ImpactCountMismatch { expected: usize, actual: usize },
}
