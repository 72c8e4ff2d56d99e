//! # Strategies
//!
//! Choices that the Simplex method makes that don't influence correctness.
pub mod pivot_rule;
