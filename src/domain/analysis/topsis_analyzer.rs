//! Topsis Analyzer - The five-stage TOPSIS ranking pipeline.
//!
//! Normalize → weight → ideal points → distances → score & rank. All
//! functions are pure and stateless; [`TopsisAnalyzer::compute`] is the
//! single entry point collaborators call.

use serde::{Deserialize, Serialize};

use super::criteria::Impact;
use super::decision_matrix::DecisionMatrix;
use super::errors::TopsisError;

/// Per-criterion ideal points derived from the weighted matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdealPoints {
    /// Best attainable value per criterion, direction-adjusted.
    pub best: Vec<f64>,
    /// Worst attainable value per criterion, direction-adjusted.
    pub worst: Vec<f64>,
}

/// The computed result: parallel score and rank vectors in input row order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopsisOutcome {
    /// Closeness coefficients, each within [0, 1].
    pub scores: Vec<f64>,
    /// Ranks, 1 = best, ties per standard competition ranking.
    pub ranks: Vec<u32>,
}

/// TOPSIS pipeline functions.
pub struct TopsisAnalyzer;

impl TopsisAnalyzer {
    /// Runs the full pipeline over a decision matrix.
    ///
    /// # Errors
    ///
    /// - `WeightCountMismatch` / `ImpactCountMismatch` when vector lengths
    ///   differ from the criterion count.
    /// - `DegenerateColumn` when a criterion has no spread across
    ///   alternatives.
    /// - `UndefinedScore` when a row sits at zero distance from both ideal
    ///   points (unreachable once degenerate columns are rejected, kept as a
    ///   distinct kind).
    pub fn compute(
        matrix: &DecisionMatrix,
        weights: &[f64],
        impacts: &[Impact],
    ) -> Result<TopsisOutcome, TopsisError> {
        let criteria = matrix.column_count();
        if weights.len() != criteria {
            return Err(TopsisError::WeightCountMismatch {
                expected: criteria,
                actual: weights.len(),
            });
        }
        if impacts.len() != criteria {
            return Err(TopsisError::ImpactCountMismatch {
                expected: criteria,
                actual: impacts.len(),
            });
        }

        let normalized = Self::normalize(matrix)?;
        let weighted = Self::apply_weights(&normalized, weights);
        let ideal = Self::ideal_points(&weighted, impacts);
        let (to_best, to_worst) = Self::distances(&weighted, &ideal);
        let scores = Self::scores(&to_best, &to_worst)?;
        let ranks = Self::rank_descending(&scores);

        Ok(TopsisOutcome { scores, ranks })
    }

    /// Divides every column by its L2 norm, giving unit-norm columns.
    ///
    /// A column with no spread (all values equal, which subsumes the all-zero
    /// case) is rejected before any division happens: it cannot discriminate
    /// between alternatives and the zero variant would divide by zero.
    pub fn normalize(matrix: &DecisionMatrix) -> Result<Vec<Vec<f64>>, TopsisError> {
        let mut norms = Vec::with_capacity(matrix.column_count());

        for column in 0..matrix.column_count() {
            let mut min = f64::INFINITY;
            let mut max = f64::NEG_INFINITY;
            let mut sum_of_squares = 0.0;
            for value in matrix.column(column) {
                min = min.min(value);
                max = max.max(value);
                sum_of_squares += value * value;
            }
            if max == min {
                return Err(TopsisError::DegenerateColumn { column });
            }
            norms.push(sum_of_squares.sqrt());
        }

        Ok(matrix
            .rows()
            .iter()
            .map(|row| row.iter().zip(&norms).map(|(value, norm)| value / norm).collect())
            .collect())
    }

    /// Scales each column by its weight.
    ///
    /// Lengths are checked upstream in [`Self::compute`].
    pub fn apply_weights(normalized: &[Vec<f64>], weights: &[f64]) -> Vec<Vec<f64>> {
        normalized
            .iter()
            .map(|row| row.iter().zip(weights).map(|(value, weight)| value * weight).collect())
            .collect()
    }

    /// Selects the ideal-best and ideal-worst value per criterion.
    ///
    /// Beneficial criteria take the column maximum as best; cost criteria
    /// invert. Only the value survives, so max/min tie-breaks are invisible.
    pub fn ideal_points(weighted: &[Vec<f64>], impacts: &[Impact]) -> IdealPoints {
        let mut best = Vec::with_capacity(impacts.len());
        let mut worst = Vec::with_capacity(impacts.len());

        for (column, impact) in impacts.iter().enumerate() {
            let mut max = f64::NEG_INFINITY;
            let mut min = f64::INFINITY;
            for row in weighted {
                if let Some(&value) = row.get(column) {
                    max = max.max(value);
                    min = min.min(value);
                }
            }
            match impact {
                Impact::Beneficial => {
                    best.push(max);
                    worst.push(min);
                }
                Impact::Cost => {
                    best.push(min);
                    worst.push(max);
                }
            }
        }

        IdealPoints { best, worst }
    }

    /// Computes each row's Euclidean distance to both ideal points.
    pub fn distances(weighted: &[Vec<f64>], ideal: &IdealPoints) -> (Vec<f64>, Vec<f64>) {
        let to_best = weighted.iter().map(|row| Self::euclidean(row, &ideal.best)).collect();
        let to_worst = weighted.iter().map(|row| Self::euclidean(row, &ideal.worst)).collect();
        (to_best, to_worst)
    }

    /// Computes closeness coefficients: `d_worst / (d_best + d_worst)`.
    pub fn scores(to_best: &[f64], to_worst: &[f64]) -> Result<Vec<f64>, TopsisError> {
        to_best
            .iter()
            .zip(to_worst)
            .enumerate()
            .map(|(row, (best, worst))| {
                let total = best + worst;
                if total == 0.0 {
                    Err(TopsisError::UndefinedScore { row })
                } else {
                    Ok(worst / total)
                }
            })
            .collect()
    }

    /// Assigns ranks descending by score using standard competition ranking:
    /// equal scores share the lowest rank position and the next distinct
    /// score skips accordingly (1, 2, 2, 4).
    pub fn rank_descending(scores: &[f64]) -> Vec<u32> {
        let mut order: Vec<usize> = (0..scores.len()).collect();
        order.sort_by(|&a, &b| {
            scores[b]
                .partial_cmp(&scores[a])
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let mut ranks = vec![0u32; scores.len()];
        let mut position = 0;
        while position < order.len() {
            let mut end = position;
            while end + 1 < order.len() && scores[order[end + 1]] == scores[order[position]] {
                end += 1;
            }
            for &row in &order[position..=end] {
                ranks[row] = (position + 1) as u32;
            }
            position = end + 1;
        }
        ranks
    }

    fn euclidean(row: &[f64], point: &[f64]) -> f64 {
        row.iter()
            .zip(point)
            .map(|(value, ideal)| (value - ideal).powi(2))
            .sum::<f64>()
            .sqrt()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    const TOLERANCE: f64 = 1e-9;

    /// Five funds scored on five criteria; the third criterion is a cost.
    fn fund_matrix() -> DecisionMatrix {
        DecisionMatrix::new(vec![
            vec![0.84, 0.71, 6.7, 42.1, 12.59],
            vec![0.91, 0.83, 7.0, 31.7, 10.11],
            vec![0.79, 0.62, 4.8, 46.7, 13.23],
            vec![0.78, 0.61, 6.4, 42.4, 12.55],
            vec![0.94, 0.88, 3.6, 62.2, 16.91],
        ])
        .unwrap()
    }

    fn fund_impacts() -> Vec<Impact> {
        vec![
            Impact::Beneficial,
            Impact::Beneficial,
            Impact::Cost,
            Impact::Beneficial,
            Impact::Beneficial,
        ]
    }

    // ───────────────────────────────────────────────────────────────
    // Full pipeline
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn fund_matrix_ranks_dominant_fund_first() {
        let weights = vec![1.0; 5];
        let outcome = TopsisAnalyzer::compute(&fund_matrix(), &weights, &fund_impacts()).unwrap();

        assert_eq!(outcome.scores.len(), 5);
        assert_eq!(outcome.ranks.len(), 5);
        for score in &outcome.scores {
            assert!((0.0..=1.0).contains(score), "score {score} out of range");
        }

        // Fund 5 is best or equal on every direction-adjusted criterion.
        assert_eq!(outcome.ranks[4], 1);

        let mut sorted_ranks = outcome.ranks.clone();
        sorted_ranks.sort_unstable();
        assert_eq!(sorted_ranks, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn max_score_receives_rank_one() {
        let weights = vec![1.0; 5];
        let outcome = TopsisAnalyzer::compute(&fund_matrix(), &weights, &fund_impacts()).unwrap();

        let best_row = outcome
            .scores
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.partial_cmp(b.1).unwrap())
            .map(|(row, _)| row)
            .unwrap();
        assert_eq!(outcome.ranks[best_row], 1);
    }

    #[test]
    fn rank_is_order_preserving_under_descending_score() {
        let weights = vec![2.0, 1.0, 1.0, 3.0, 1.0];
        let outcome = TopsisAnalyzer::compute(&fund_matrix(), &weights, &fund_impacts()).unwrap();

        for i in 0..outcome.scores.len() {
            for j in 0..outcome.scores.len() {
                if outcome.scores[i] > outcome.scores[j] {
                    assert!(outcome.ranks[i] < outcome.ranks[j]);
                }
            }
        }
    }

    #[test]
    fn compute_is_deterministic() {
        let weights = vec![1.0, 2.0, 0.5, 1.5, 1.0];
        let first = TopsisAnalyzer::compute(&fund_matrix(), &weights, &fund_impacts()).unwrap();
        let second = TopsisAnalyzer::compute(&fund_matrix(), &weights, &fund_impacts()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn identical_alternatives_share_a_rank() {
        let matrix = DecisionMatrix::new(vec![
            vec![5.0, 1.0],
            vec![5.0, 1.0],
            vec![1.0, 5.0],
        ])
        .unwrap();
        let outcome = TopsisAnalyzer::compute(
            &matrix,
            &[1.0, 1.0],
            &[Impact::Beneficial, Impact::Beneficial],
        )
        .unwrap();

        assert_eq!(outcome.scores[0], outcome.scores[1]);
        assert_eq!(outcome.ranks[0], outcome.ranks[1]);
        // The distinct third row outranks the tied pair here.
        assert_eq!(outcome.ranks, vec![2, 2, 1]);
    }

    // ───────────────────────────────────────────────────────────────
    // Stage-level checks
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn normalized_columns_have_unit_norm() {
        let normalized = TopsisAnalyzer::normalize(&fund_matrix()).unwrap();

        for column in 0..5 {
            let sum_of_squares: f64 = normalized.iter().map(|row| row[column] * row[column]).sum();
            assert!(
                (sum_of_squares - 1.0).abs() < TOLERANCE,
                "column {column} has squared norm {sum_of_squares}"
            );
        }
    }

    #[test]
    fn constant_column_is_rejected_as_degenerate() {
        let matrix = DecisionMatrix::new(vec![
            vec![1.0, 7.7, 3.0],
            vec![2.0, 7.7, 1.0],
            vec![3.0, 7.7, 2.0],
        ])
        .unwrap();
        let err = TopsisAnalyzer::compute(
            &matrix,
            &[1.0, 1.0, 1.0],
            &[Impact::Beneficial, Impact::Cost, Impact::Beneficial],
        )
        .unwrap_err();
        assert_eq!(err, TopsisError::DegenerateColumn { column: 1 });
    }

    #[test]
    fn all_zero_column_is_rejected_before_division() {
        let matrix =
            DecisionMatrix::new(vec![vec![0.0, 1.0], vec![0.0, 2.0]]).unwrap();
        let err = TopsisAnalyzer::normalize(&matrix).unwrap_err();
        assert_eq!(err, TopsisError::DegenerateColumn { column: 0 });
    }

    #[test]
    fn ideal_points_respect_directions() {
        let weights = vec![1.0; 5];
        let impacts = fund_impacts();
        let normalized = TopsisAnalyzer::normalize(&fund_matrix()).unwrap();
        let weighted = TopsisAnalyzer::apply_weights(&normalized, &weights);
        let ideal = TopsisAnalyzer::ideal_points(&weighted, &impacts);

        for (column, impact) in impacts.iter().enumerate() {
            for row in &weighted {
                match impact {
                    Impact::Beneficial => {
                        assert!(ideal.best[column] >= row[column]);
                        assert!(ideal.worst[column] <= row[column]);
                    }
                    Impact::Cost => {
                        assert!(ideal.best[column] <= row[column]);
                        assert!(ideal.worst[column] >= row[column]);
                    }
                }
            }
        }
    }

    #[test]
    fn weighting_scales_columns() {
        let normalized = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
        let weighted = TopsisAnalyzer::apply_weights(&normalized, &[2.0, 0.5]);
        assert_eq!(weighted, vec![vec![2.0, 1.0], vec![6.0, 2.0]]);
    }

    #[test]
    fn zero_total_distance_is_an_undefined_score() {
        let err = TopsisAnalyzer::scores(&[0.0], &[0.0]).unwrap_err();
        assert_eq!(err, TopsisError::UndefinedScore { row: 0 });
    }

    // ───────────────────────────────────────────────────────────────
    // Length checks and ranking policy
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn weight_count_mismatch_is_rejected() {
        let matrix = DecisionMatrix::new(vec![
            vec![1.0, 2.0, 3.0, 4.0],
            vec![4.0, 3.0, 2.0, 1.0],
        ])
        .unwrap();
        let err = TopsisAnalyzer::compute(
            &matrix,
            &[1.0, 1.0, 1.0],
            &[Impact::Beneficial; 4],
        )
        .unwrap_err();
        assert_eq!(
            err,
            TopsisError::WeightCountMismatch {
                expected: 4,
                actual: 3
            }
        );
    }

    #[test]
    fn impact_count_mismatch_is_rejected() {
        let matrix = DecisionMatrix::new(vec![vec![1.0, 2.0], vec![2.0, 1.0]]).unwrap();
        let err = TopsisAnalyzer::compute(
            &matrix,
            &[1.0, 1.0],
            &[Impact::Beneficial],
        )
        .unwrap_err();
        assert_eq!(
            err,
            TopsisError::ImpactCountMismatch {
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn competition_ranking_shares_lowest_position_and_skips() {
        let ranks = TopsisAnalyzer::rank_descending(&[0.9, 0.7, 0.7, 0.4]);
        assert_eq!(ranks, vec![1, 2, 2, 4]);
    }

    #[test]
    fn ranking_handles_all_distinct_scores() {
        let ranks = TopsisAnalyzer::rank_descending(&[0.2, 0.8, 0.5]);
        assert_eq!(ranks, vec![3, 1, 2]);
    }

    #[test]
    fn ranking_handles_single_entry() {
        assert_eq!(TopsisAnalyzer::rank_descending(&[0.5]), vec![1]);
    }

    // ───────────────────────────────────────────────────────────────
    // Properties
    // ───────────────────────────────────────────────────────────────

    fn has_spread(rows: &[Vec<f64>], column: usize) -> bool {
        rows.iter().any(|row| row[column] != rows[0][column])
    }

    proptest! {
        #[test]
        fn scores_stay_in_unit_interval(
            rows in prop::collection::vec(prop::collection::vec(0.1f64..100.0, 3), 2..6)
        ) {
            prop_assume!((0..3).all(|column| has_spread(&rows, column)));

            let matrix = DecisionMatrix::new(rows).unwrap();
            let outcome = TopsisAnalyzer::compute(
                &matrix,
                &[1.0, 2.0, 1.0],
                &[Impact::Beneficial, Impact::Beneficial, Impact::Cost],
            )
            .unwrap();

            for score in &outcome.scores {
                prop_assert!((0.0..=1.0).contains(score));
            }
            prop_assert!(outcome.ranks.contains(&1));
            prop_assert!(outcome
                .ranks
                .iter()
                .all(|&rank| rank >= 1 && rank as usize <= outcome.ranks.len()));
        }
    }
}
