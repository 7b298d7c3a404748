//! Topsis - Multi-Criteria Decision Ranking
//!
//! This crate ranks a set of alternatives across weighted, directional
//! criteria using the TOPSIS method (Technique for Order Preference by
//! Similarity to Ideal Solution). The computation lives in one pure core
//! (`domain::analysis`); CSV I/O and result delivery are thin adapters
//! behind ports.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
