//! # Pivoting towards optimality
//!
//! The primal pivot loop. The second phase runs it on the problem itself, the first phase runs the
//! same loop on the auxiliary problem.
use log::trace;

use crate::algorithm::two_phase::config::SolverConfig;
use crate::algorithm::two_phase::Phase;
use crate::algorithm::two_phase::strategy::pivot_rule::PivotRule;
use crate::algorithm::two_phase::tableau::Tableau;
use crate::data::number_types::traits::Field;
use crate::error::{NumericalFailure, SolveError};

/// How the pivot loop ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub(crate) enum PrimalOutcome {
    /// No column has a negative relative cost.
    Optimal,
    /// The column has a negative relative cost, but its direction doesn't hit any bound.
    Unbounded {
        /// Index of the entering column.
        column: usize,
    },
}

/// Reduces the cost of the basic feasible solution to the minimum.
///
/// While calling this method, a number of requirements should be satisfied:
/// - There should be a valid basis (not necessarily optimal <=> dual feasible <=> c >= 0)
/// - All constraint values need to be positive (primary feasibility)
///
/// # Arguments
///
/// * `tableau`: Tableau with a basic feasible solution.
/// * `phase`: Phase for which the loop runs, used for reporting.
/// * `config`: Tolerance, leaving rule, iteration limit and whether to check invariants.
/// * `iterations`: Counter that is increased with every pivot.
///
/// # Return value
///
/// Whether the problem has a finite optimum. It cannot be infeasible, as a feasible solution is
/// needed to start using this method. An error if the iteration limit is reached, or if the
/// computations become numerically unreliable.
pub(crate) fn primal<F, PR>(
    tableau: &mut Tableau<F>,
    phase: Phase,
    config: &SolverConfig<F>,
    iterations: &mut usize,
) -> Result<PrimalOutcome, SolveError>
where
    F: Field,
    PR: PivotRule<F>,
{
    let mut rule = PR::new();
    loop {
        match rule.select_primal_pivot_column(tableau) {
            Some((column_index, cost)) => {
                let direction = tableau.basic_direction(column_index);
                match tableau.select_primal_pivot_row(&direction, config.leaving_rule) {
                    Some((row_index, step)) => {
                        if !config.allows_pivot(*iterations) {
                            break Err(SolveError::IterationLimit { phase, iterations: *iterations });
                        }

                        let before = tableau.objective_function_value();
                        let leaving = tableau.bring_into_basis(column_index, row_index, &direction, step)?;
                        *iterations += 1;

                        let after = tableau.objective_function_value();
                        trace!(
                            "phase {:?}, pivot {}: {} enters (relative cost {}), {} leaves row {}, step {}, objective {}",
                            phase, iterations, column_index, cost, leaving, row_index, step, after,
                        );

                        if config.check_invariants {
                            tableau.check_basic_feasible_solution_state()?;
                            check_objective_decrease(before, after, config.tolerance)?;
                        }
                    },
                    None => break Ok(PrimalOutcome::Unbounded { column: column_index }),
                }
            },
            None => break Ok(PrimalOutcome::Optimal),
        }
    }
}

/// The objective function value may not increase by more than a tolerance, relative to its size.
fn check_objective_decrease<F: Field>(
    before: F,
    after: F,
    tolerance: F,
) -> Result<(), NumericalFailure> {
    if after - before > tolerance * (F::one() + before.abs()) {
        Err(NumericalFailure::ObjectiveIncrease {
            before: before.to_f64_lossy(),
            after: after.to_f64_lossy(),
        })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use approx::assert_abs_diff_eq;

    use crate::algorithm::two_phase::config::SolverConfig;
    use crate::algorithm::two_phase::Phase;
    use crate::algorithm::two_phase::phase_two::{check_objective_decrease, primal, PrimalOutcome};
    use crate::algorithm::two_phase::strategy::pivot_rule::{FirstProfitable, SteepestDescentAlongVariable};
    use crate::algorithm::two_phase::tableau::Tableau;
    use crate::data::linear_algebra::vector::DenseVector;
    use crate::data::linear_program::standard_form::StandardForm;
    use crate::error::{NumericalFailure, SolveError};
    use crate::tests::problem_1;

    #[test]
    fn optimal() {
        let problem = problem_1::standard_form();
        let config = SolverConfig::default().check_invariants(true);
        let mut tableau = Tableau::new(&problem, config.tolerance).unwrap();
        let mut iterations = 0;

        let outcome = primal::<_, FirstProfitable>(&mut tableau, Phase::One, &config, &mut iterations);
        assert_eq!(outcome, Ok(PrimalOutcome::Optimal));
        assert_eq!(iterations, 3);
        assert_eq!(tableau.basis_indices(), &[1, 3]);
        assert_abs_diff_eq!(tableau.objective_function_value(), problem_1::OPTIMAL_OBJECTIVE);
        let x = tableau.inverse_maintainer().b();
        assert_abs_diff_eq!(x[0], 4_f64);
        assert_abs_diff_eq!(x[1], 6_f64);
    }

    #[test]
    fn other_rule_same_objective() {
        let problem = problem_1::standard_form();
        let config = SolverConfig::default().check_invariants(true);
        let mut tableau = Tableau::new(&problem, config.tolerance).unwrap();
        let mut iterations = 0;

        let outcome = primal::<_, SteepestDescentAlongVariable>(&mut tableau, Phase::One, &config, &mut iterations);
        assert_eq!(outcome, Ok(PrimalOutcome::Optimal));
        assert_abs_diff_eq!(tableau.objective_function_value(), problem_1::OPTIMAL_OBJECTIVE);
    }

    #[test]
    fn unbounded() {
        let problem = StandardForm::from_rows(
            vec![vec![-1_f64, 1_f64]],
            vec![1_f64],
            vec![-1_f64, 0_f64],
        ).unwrap();
        let config = SolverConfig::default();
        let mut tableau = Tableau::new(&problem, config.tolerance).unwrap();
        let mut iterations = 0;

        let outcome = primal::<_, FirstProfitable>(&mut tableau, Phase::One, &config, &mut iterations);
        assert_eq!(outcome, Ok(PrimalOutcome::Unbounded { column: 0 }));
        assert_eq!(iterations, 0);
        assert_eq!(tableau.inverse_maintainer().b(), &DenseVector::new(vec![1_f64]));
    }

    #[test]
    fn iteration_limit() {
        let problem = problem_1::standard_form();
        let config = SolverConfig::default().iteration_limit(Some(2));
        let mut tableau = Tableau::new(&problem, config.tolerance).unwrap();
        let mut iterations = 0;

        let outcome = primal::<_, FirstProfitable>(&mut tableau, Phase::Two, &config, &mut iterations);
        assert_eq!(outcome, Err(SolveError::IterationLimit { phase: Phase::Two, iterations: 2 }));
    }

    #[test]
    fn objective_increase() {
        assert!(check_objective_decrease(1_f64, 1_f64, 1e-9).is_ok());
        assert!(check_objective_decrease(1_f64, 0_f64, 1e-9).is_ok());
        assert_eq!(
            check_objective_decrease(1_f64, 2_f64, 1e-9),
            Err(NumericalFailure::ObjectiveIncrease { before: 1_f64, after: 2_f64 }),
        );
    }
}
