//! # A dense revised Simplex solver
//!
//! Linear programs in standard form, `min c'x s.t. Ax = b, x >= 0`, are solved using the two phase
//! revised Simplex method. The basis inverse is kept explicitly and updated with a single eta
//! matrix per pivot, as described in chapter 3 of Introduction to Linear Optimization by Dimitris
//! Bertsimas and John N. Tsitsiklis.
//!
//! ```
//! use relp_revised::algorithm::two_phase::{Phase, Simplex};
//! use relp_revised::data::linear_program::standard_form::StandardForm;
//!
//! let problem = StandardForm::from_rows(
//!     vec![vec![1_f64, 0_f64, 1_f64], vec![0_f64, 1_f64, 0_f64]],
//!     vec![1_f64, 2_f64],
//!     vec![1_f64, 1_f64, 0_f64],
//! ).unwrap();
//!
//! let result = Simplex::new(problem, Phase::Two).solve().unwrap();
//! assert!(result.is_feasible());
//! assert_eq!(result.objective(), Some(2_f64));
//! ```
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;
pub mod error;

#[cfg(test)]
mod tests;
