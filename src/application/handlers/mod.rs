//! Application handlers orchestrating domain operations through ports.

mod run_analysis;

pub use run_analysis::{AnalysisError, AnalysisReport, AnalysisRequest, RunAnalysisHandler};
