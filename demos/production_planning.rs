//! # Planning production of two products
//!
//! Two products share three plants. Each unit of the first product earns 3 and uses one hour of
//! the first and three hours of the third plant; each unit of the second earns 5 and uses two
//! hours of both the second and third plant. The plants have 4, 12 and 18 hours available.
//!
//! Revenue is maximized by minimizing its negation. A slack variable is added for each plant, and
//! because these form an identity matrix with a nonnegative right-hand side, the problem can be
//! solved without artificial variables.
//!
//! Run with `RUST_LOG=trace` to see every pivot.
use anyhow::{bail, Result};

use relp_revised::algorithm::OptimizationResult;
use relp_revised::algorithm::two_phase::{Phase, Simplex};
use relp_revised::data::linear_program::standard_form::StandardForm;

fn main() -> Result<()> {
    env_logger::init();

    let problem = StandardForm::from_rows(
        vec![
            vec![1_f64, 0_f64, 1_f64, 0_f64, 0_f64],
            vec![0_f64, 2_f64, 0_f64, 1_f64, 0_f64],
            vec![3_f64, 2_f64, 0_f64, 0_f64, 1_f64],
        ],
        vec![4_f64, 12_f64, 18_f64],
        vec![-3_f64, -5_f64, 0_f64, 0_f64, 0_f64],
    )?.with_inequality_markers(&[-1, -1, -1])?;

    let report = Simplex::new(problem, Phase::One).solve_with_report()?;
    match report.result() {
        OptimizationResult::FiniteOptimum { objective, basis } => {
            let x = basis.primal_solution();
            println!("Produce {} units of the first and {} of the second product.", x[0], x[1]);
            println!("Revenue: {}", -objective);
            println!("Unused hours per plant: {}, {}, {}", x[2], x[3], x[4]);
            println!("Pivots: {}", report.total_iterations());
        },
        OptimizationResult::Unbounded(_) => bail!("revenue should be limited by the plant hours"),
        OptimizationResult::Infeasible => bail!("producing nothing should be possible"),
    }

    Ok(())
}
