//! RunAnalysisHandler - Orchestrates one complete analysis run.
//!
//! Read the source table, parse weights and impacts, run the TOPSIS
//! pipeline, write the ranked table, then hand the finished file to every
//! configured delivery channel. All surfaces (CLI today, HTTP tomorrow) go
//! through this one handler; none of them reimplement the pipeline.

use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info};

use crate::domain::analysis::{
    parse_impacts, parse_weights, CriteriaError, RankedTable, TopsisAnalyzer, TopsisError,
};
use crate::ports::{DeliveryError, ReadError, ResultDelivery, TableReader, TableWriter, WriteError};

/// One analysis run: where to read, how to weigh, where to write.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    /// Path of the source table.
    pub input: PathBuf,
    /// Comma-separated weight string, one weight per criterion.
    pub weights: String,
    /// Comma-separated `+`/`-` string, one impact per criterion.
    pub impacts: String,
    /// Path the ranked result table is written to.
    pub output: PathBuf,
}

/// Summary of a completed run.
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    /// Number of ranked alternatives.
    pub alternatives: usize,
    /// Identifier of the rank-1 alternative.
    pub best_alternative: Option<String>,
    /// Where the result table was written.
    pub output: PathBuf,
}

/// Errors from a complete analysis run, across all tiers.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Read(#[from] ReadError),

    #[error(transparent)]
    Criteria(#[from] CriteriaError),

    /// Degenerate column enriched with its header name for the user.
    #[error("Criterion '{column}' is degenerate: every alternative has the same value")]
    DegenerateCriterion { column: String },

    #[error(transparent)]
    Computation(#[from] TopsisError),

    #[error(transparent)]
    Write(#[from] WriteError),

    #[error(transparent)]
    Delivery(#[from] DeliveryError),
}

/// Handler for running one analysis end to end.
pub struct RunAnalysisHandler {
    reader: Arc<dyn TableReader>,
    writer: Arc<dyn TableWriter>,
    deliveries: Vec<Arc<dyn ResultDelivery>>,
}

impl RunAnalysisHandler {
    /// Creates a handler with the given ports.
    pub fn new(
        reader: Arc<dyn TableReader>,
        writer: Arc<dyn TableWriter>,
        deliveries: Vec<Arc<dyn ResultDelivery>>,
    ) -> Self {
        Self {
            reader,
            writer,
            deliveries,
        }
    }

    /// Runs the full read → compute → write → deliver sequence.
    ///
    /// Validation short-circuits on the first blocking failure; the pipeline
    /// performs no partial writes, so on error no result file appears.
    pub fn run(&self, request: &AnalysisRequest) -> Result<AnalysisReport, AnalysisError> {
        let table = self.reader.read(&request.input)?;
        info!(
            alternatives = table.alternative_count(),
            criteria = table.criterion_count(),
            "decision table loaded"
        );

        let weights = parse_weights(&request.weights)?;
        let impacts = parse_impacts(&request.impacts)?;

        let outcome = TopsisAnalyzer::compute(&table.matrix, &weights, &impacts).map_err(
            |err| match err {
                TopsisError::DegenerateColumn { column } => AnalysisError::DegenerateCriterion {
                    column: table
                        .criterion_headers()
                        .get(column)
                        .cloned()
                        .unwrap_or_else(|| format!("#{}", column + 1)),
                },
                other => AnalysisError::Computation(other),
            },
        )?;
        debug!(scores = ?outcome.scores, "pipeline complete");

        let ranked = RankedTable::from_outcome(table, &outcome);
        self.writer.write(&request.output, &ranked)?;

        for delivery in &self.deliveries {
            delivery.deliver(&request.output)?;
        }

        Ok(AnalysisReport {
            alternatives: ranked.rows.len(),
            best_alternative: ranked.best_alternative().map(str::to_string),
            output: request.output.clone(),
        })
    }
}
