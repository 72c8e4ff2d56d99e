//! # Small textbook problems
//!
//! Problems small enough to verify by hand, each exercising a single aspect of the method: plain
//! optimality, unboundedness, infeasibility, degeneracy and redundant constraints.
use relp_revised::data::linear_program::standard_form::StandardForm;

/// # Solving and checking
#[allow(missing_docs)]
mod test;

/// Build a problem from its rows, right-hand side and cost.
///
/// # Panics
///
/// If the dimensions don't match.
fn problem(rows: Vec<Vec<f64>>, b: Vec<f64>, cost: Vec<f64>) -> StandardForm<f64> {
    StandardForm::from_rows(rows, b, cost).unwrap()
}

/// Degenerate problem on which a greedy entering rule cycles.
///
/// The last three columns are slack variables; all ratio tests of the first pivots are ties at
/// zero. See Introduction to Linear Optimization, example 3.6.
fn cycling() -> StandardForm<f64> {
    problem(
        vec![
            vec![0.25, -8_f64, -1_f64, 9_f64, 1_f64, 0_f64, 0_f64],
            vec![0.5, -12_f64, -0.5, 3_f64, 0_f64, 1_f64, 0_f64],
            vec![0_f64, 0_f64, 1_f64, 0_f64, 0_f64, 0_f64, 1_f64],
        ],
        vec![0_f64, 0_f64, 1_f64],
        vec![-0.75, 20_f64, -0.5, 6_f64, 0_f64, 0_f64, 0_f64],
    )
}

/// Maximize `3x + 5y` subject to `x <= 4`, `2y <= 12` and `3x + 2y <= 18`, with slack variables.
fn production() -> StandardForm<f64> {
    problem(
        vec![
            vec![1_f64, 0_f64, 1_f64, 0_f64, 0_f64],
            vec![0_f64, 2_f64, 0_f64, 1_f64, 0_f64],
            vec![3_f64, 2_f64, 0_f64, 0_f64, 1_f64],
        ],
        vec![4_f64, 12_f64, 18_f64],
        vec![-3_f64, -5_f64, 0_f64, 0_f64, 0_f64],
    )
}
