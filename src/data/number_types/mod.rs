//! # Number types
//!
//! The algorithms are written against the `Field` trait rather than against a concrete float, so
//! that the same code runs in single and double precision. Every number type carries its own
//! default tolerance.
pub mod traits;
