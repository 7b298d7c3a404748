//! Application layer - Use-case orchestration between ports and domain.

pub mod handlers;

pub use handlers::{AnalysisError, AnalysisReport, AnalysisRequest, RunAnalysisHandler};
