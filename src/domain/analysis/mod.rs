//! Analysis Module - The pure TOPSIS computation core.
//!
//! All functions here are pure and stateless: they take value types in and
//! return computed results or typed errors. No I/O happens in this module;
//! reading source tables and delivering results is the adapters' job.
//!
//! # Components
//!
//! - `DecisionMatrix` / `DecisionTable` - Validated tabular input forms
//! - `criteria` - Direction tags and weight/impact string parsing
//! - `TopsisAnalyzer` - The five-stage pipeline behind a single `compute`
//! - `RankedTable` - The output form with appended score and rank columns

mod criteria;
mod decision_matrix;
mod errors;
mod topsis_analyzer;

pub use criteria::{parse_impacts, parse_weights, CriteriaError, Impact};
pub use decision_matrix::{
    DecisionMatrix, DecisionTable, RankedRow, RankedTable, RANK_HEADER, SCORE_HEADER,
};
pub use errors::TopsisError;
pub use topsis_analyzer::{IdealPoints, TopsisAnalyzer, TopsisOutcome};
