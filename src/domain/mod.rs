//! Domain layer containing the pure computation and its value types.
//!
//! # Module Organization
//!
//! - `analysis` - The TOPSIS pipeline: matrix types, criteria parsing,
//!   normalization, ideal points, distances, scoring, and ranking

pub mod analysis;
