//! Criteria - Direction tags and parsing for weight/impact strings.
//!
//! Weights and impacts arrive as comma-separated strings on the command line.
//! Parsing is explicit with enumerated error outcomes, never a bare catch.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The preference direction of a criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Impact {
    /// Higher values are better (`+`).
    Beneficial,
    /// Lower values are better (`-`).
    Cost,
}

impl Impact {
    /// Parses a single impact token.
    pub fn parse(token: &str) -> Result<Self, CriteriaError> {
        match token {
            "+" => Ok(Impact::Beneficial),
            "-" => Ok(Impact::Cost),
            other => Err(CriteriaError::InvalidImpactToken {
                token: other.to_string(),
            }),
        }
    }

    /// Returns the command-line token for this direction.
    pub fn token(&self) -> &'static str {
        match self {
            Impact::Beneficial => "+",
            Impact::Cost => "-",
        }
    }
}

impl fmt::Display for Impact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// Errors from parsing weight and impact strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CriteriaError {
    #[error("Weights must be comma-separated numbers, got '{value}'")]
    MalformedWeights { value: String },

    #[error("Impacts must be comma-separated '+' or '-' tokens, got '{value}'")]
    MalformedImpacts { value: String },

    #[error("Impact must be '+' or '-', got '{token}'")]
    InvalidImpactToken { token: String },
}

/// Parses a comma-separated weight string into a vector of finite reals.
pub fn parse_weights(input: &str) -> Result<Vec<f64>, CriteriaError> {
    let malformed = || CriteriaError::MalformedWeights {
        value: input.to_string(),
    };

    if input.trim().is_empty() {
        return Err(malformed());
    }

    input
        .split(',')
        .map(|token| {
            let weight: f64 = token.trim().parse().map_err(|_| malformed())?;
            if weight.is_finite() {
                Ok(weight)
            } else {
                Err(malformed())
            }
        })
        .collect()
}

/// Parses a comma-separated impact string into direction tags.
pub fn parse_impacts(input: &str) -> Result<Vec<Impact>, CriteriaError> {
    if input.trim().is_empty() {
        return Err(CriteriaError::MalformedImpacts {
            value: input.to_string(),
        });
    }

    input
        .split(',')
        .map(|token| Impact::parse(token.trim()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_weights() {
        let weights = parse_weights("1, 2.5,0.75").unwrap();
        assert_eq!(weights, vec![1.0, 2.5, 0.75]);
    }

    #[test]
    fn rejects_empty_weight_string() {
        let err = parse_weights("  ").unwrap_err();
        assert!(matches!(err, CriteriaError::MalformedWeights { .. }));
    }

    #[test]
    fn rejects_non_numeric_weight() {
        let err = parse_weights("1,two,3").unwrap_err();
        assert!(matches!(err, CriteriaError::MalformedWeights { .. }));
    }

    #[test]
    fn rejects_trailing_comma_in_weights() {
        let err = parse_weights("1,2,").unwrap_err();
        assert!(matches!(err, CriteriaError::MalformedWeights { .. }));
    }

    #[test]
    fn rejects_infinite_weight() {
        let err = parse_weights("1,inf").unwrap_err();
        assert!(matches!(err, CriteriaError::MalformedWeights { .. }));
    }

    #[test]
    fn parses_valid_impacts() {
        let impacts = parse_impacts("+, -,+").unwrap();
        assert_eq!(impacts, vec![Impact::Beneficial, Impact::Cost, Impact::Beneficial]);
    }

    #[test]
    fn rejects_unknown_impact_token() {
        let err = parse_impacts("+,x,-").unwrap_err();
        assert_eq!(
            err,
            CriteriaError::InvalidImpactToken {
                token: "x".to_string()
            }
        );
    }

    #[test]
    fn rejects_empty_impact_string() {
        let err = parse_impacts("").unwrap_err();
        assert!(matches!(err, CriteriaError::MalformedImpacts { .. }));
    }

    #[test]
    fn impact_round_trips_through_token() {
        for impact in [Impact::Beneficial, Impact::Cost] {
            assert_eq!(Impact::parse(impact.token()).unwrap(), impact);
        }
    }

    #[test]
    fn invalid_token_error_displays_token() {
        let err = Impact::parse("x").unwrap_err();
        assert_eq!(err.to_string(), "Impact must be '+' or '-', got 'x'");
    }
}
