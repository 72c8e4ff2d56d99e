//! # Representing linear programs
//!
//! Only the standard form is represented: equality constraints and non-negative variables.
//! Conversion from other forms is left to the caller; a hint about the original constraint types
//! can be stored alongside the problem.
pub mod elements;
pub mod standard_form;
