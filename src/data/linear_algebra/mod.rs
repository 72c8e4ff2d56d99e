//! # Linear algebra primitives
//!
//! Dense vectors and matrices. The problems this crate targets are of moderate size, so no sparse
//! representation is offered.
pub mod matrix;
pub mod vector;
