//! # Problem data
//!
//! Dense vectors and matrices, the standard form linear program built from them and the number
//! types they hold. Data that only exists while solving lives in `algorithm::two_phase`.

pub mod linear_algebra;
pub mod linear_program;
pub mod number_types;
