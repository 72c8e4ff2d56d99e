//! # Equality constraints that repeat each other
//!
//! The second constraint is the first one multiplied by two, and the third one has a negative
//! right-hand side. Both phases are needed: the first phase finds a feasible basis using
//! artificial variables and detects that one of the rows can be removed.
use anyhow::{Context, Result};

use relp_revised::algorithm::two_phase::{Phase, Simplex};
use relp_revised::algorithm::two_phase::config::{LeavingRule, SolverConfig};
use relp_revised::data::linear_program::standard_form::StandardForm;

fn main() -> Result<()> {
    env_logger::init();

    let problem = StandardForm::from_rows(
        vec![
            vec![1_f64, 1_f64, 1_f64, 0_f64],
            vec![2_f64, 2_f64, 2_f64, 0_f64],
            vec![-1_f64, 0_f64, 0_f64, -1_f64],
        ],
        vec![3_f64, 6_f64, -1_f64],
        vec![1_f64, 2_f64, 3_f64, 0_f64],
    )?;

    let config = SolverConfig::default()
        .leaving_rule(LeavingRule::Bland)
        .iteration_limit(Some(100));
    let report = Simplex::new(problem.clone(), Phase::Two)
        .with_config(config)
        .solve_with_report()?;

    let result = report.result();
    let objective = result.objective().context("the problem has a finite optimum")?;
    let basis = result.basis().context("a feasible problem has a basis")?;

    println!("Objective: {}", objective);
    println!("Solution: {}", basis.primal_solution());
    println!("Removed rows: {:?}", basis.redundant_rows());
    println!(
        "Pivots: {} in phase one, {} in phase two",
        report.iterations(Phase::One), report.iterations(Phase::Two),
    );
    println!("Satisfies all constraints: {}", basis.is_primal_feasible(&problem, config.tolerance));

    Ok(())
}
