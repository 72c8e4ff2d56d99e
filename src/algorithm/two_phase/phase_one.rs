//! # Finding a basic feasible solution
//!
//! The first phase of the two phase method. An artificial variable is added for every constraint,
//! and the sum of the artificial variables is minimized using the same pivot loop as the second
//! phase. If that sum can be brought to zero, the basis that remains is feasible for the original
//! problem.
use log::{debug, trace};

use crate::algorithm::two_phase::config::SolverConfig;
use crate::algorithm::two_phase::Phase;
use crate::algorithm::two_phase::phase_two::{primal, PrimalOutcome};
use crate::algorithm::two_phase::strategy::pivot_rule::PivotRule;
use crate::algorithm::two_phase::tableau::inverse_maintenance::BasisInverse;
use crate::algorithm::two_phase::tableau::Tableau;
use crate::data::linear_algebra::vector::DenseVector;
use crate::data::linear_program::standard_form::StandardForm;
use crate::data::number_types::traits::Field;
use crate::error::{NumericalFailure, SolveError};

/// LP's can be either feasible (allowing at least one solution) or infeasible (allowing no
/// solutions).
///
/// If the problem is feasible, it can either have full rank, or be rank deficient.
#[derive(Debug, PartialEq)]
pub enum RankedFeasibilityResult<F> {
    /// The problem is feasible and all information necessary to construct a bfs cheaply is in this
    /// variant.
    Feasible {
        /// Whether the problem needs rows to be removed.
        rank: Rank,
        /// Inverse of the basis w.r.t. the original rows, without the rows that should be
        /// removed, and the values of the basic variables.
        inverse_maintainer: BasisInverse<F>,
        /// Column index of the basic variable in each of the remaining rows.
        basis_indices: Vec<usize>,
        /// All other columns of the original problem, in ascending order.
        non_basis_indices: Vec<usize>,
    },
    /// The problem is not feasible.
    Infeasible,
}

/// A matrix or linear program either has full rank, or be rank deficient.
///
/// In case it is rank deficient, a sorted, deduplicated list of (row)indices should be provided,
/// that when removed, makes the matrix or linear program full rank.
#[derive(Debug, Eq, PartialEq)]
pub enum Rank {
    /// The matrix is full rank, no rows need to be removed.
    Full,
    /// The `Vec<usize>` is sorted and contains no duplicate values.
    Deficient(Vec<usize>),
}

/// Compute a basic feasible solution, or determine that there is none.
///
/// # Arguments
///
/// * `problem`: Problem in standard form, `b` may have any sign.
/// * `config`: Settings, the iteration limit applies to this phase separately.
/// * `iterations`: Counter that is increased with every pivot.
pub(crate) fn compute_bfs<F, PR>(
    problem: &StandardForm<F>,
    config: &SolverConfig<F>,
    iterations: &mut usize,
) -> Result<RankedFeasibilityResult<F>, SolveError>
where
    F: Field,
    PR: PivotRule<F>,
{
    let n = problem.nr_columns();
    let flipped = problem.b().iter().map(|&v| v < F::zero()).collect::<Vec<_>>();
    let auxiliary = artificial_problem(problem, &flipped);
    debug!(
        "phase one: {} constraints ({} with negative right-hand side), {} variables, {} artificial",
        problem.nr_rows(), flipped.iter().filter(|&&flip| flip).count(), n, problem.nr_rows(),
    );

    let mut tableau = Tableau::new(&auxiliary, config.tolerance)?;
    if config.check_invariants {
        tableau.check_basic_feasible_solution_state()?;
    }

    match primal::<F, PR>(&mut tableau, Phase::One, config, iterations)? {
        PrimalOutcome::Optimal => {},
        PrimalOutcome::Unbounded { .. } => return Err(NumericalFailure::UnboundedAuxiliary.into()),
    }

    let artificial_cost = tableau.objective_function_value();
    if artificial_cost > config.tolerance * (F::one() + problem.b().max_abs()) {
        debug!("phase one: infeasible, artificial cost {} after {} pivots", artificial_cost, iterations);
        return Ok(RankedFeasibilityResult::Infeasible);
    }

    let redundant = remove_artificial_basis_variables(&mut tableau, n, iterations)?;

    let (mut inverse_maintainer, mut basis_indices, _) = tableau.into_basis();
    inverse_maintainer.unflip_rows(&flipped);

    let (mut positions, rows): (Vec<_>, Vec<_>) = redundant.into_iter().unzip();
    positions.sort_unstable();
    inverse_maintainer.remove_basis_rows(&positions, &rows);
    index_utils::remove_indices(&mut basis_indices, &positions);
    debug_assert!(basis_indices.iter().all(|&j| j < n));

    // The second phase scans its candidates in ascending order again
    let non_basis_indices = (0..n)
        .filter(|j| !basis_indices.contains(j))
        .collect::<Vec<_>>();

    let rank = if rows.is_empty() {
        Rank::Full
    } else {
        Rank::Deficient(rows)
    };
    debug!("phase one: feasible after {} pivots, rank {:?}", iterations, rank);

    Ok(RankedFeasibilityResult::Feasible {
        rank,
        inverse_maintainer,
        basis_indices,
        non_basis_indices,
    })
}

/// The auxiliary problem `min 1'y s.t. Ax + y = b, x, y >= 0`.
///
/// Rows with a negative right-hand side are multiplied by `-1` first, so that the artificial
/// variables `y` form a feasible basis.
///
/// # Arguments
///
/// * `flipped`: For each row, whether it should be multiplied by `-1`.
fn artificial_problem<F: Field>(problem: &StandardForm<F>, flipped: &[bool]) -> StandardForm<F> {
    let (m, n) = (problem.nr_rows(), problem.nr_columns());

    let mut constraints = problem.constraints().clone();
    let mut b = problem.b().clone();
    for (i, _) in flipped.iter().enumerate().filter(|&(_, &flip)| flip) {
        constraints.multiply_row(i, -F::one());
        b[i] = -b[i];
    }

    let cost = (0..n + m)
        .map(|j| if j < n { F::zero() } else { F::one() })
        .collect();

    StandardForm::new_unchecked(constraints.hcat_identity(), b, DenseVector::new(cost))
}

/// Removes all artificial variables from the tableau by making a basis change "at zero level", or
/// without change of cost of the current solution.
///
/// # Arguments
///
/// * `tableau`: Tableau of the auxiliary problem with an artificial cost of zero.
/// * `n`: Number of variables of the original problem. Larger column indices are artificial.
///
/// # Return value
///
/// Tuples of the basis position and the original row of each artificial variable that could not
/// be removed, sorted by row. These rows are redundant.
fn remove_artificial_basis_variables<F: Field>(
    tableau: &mut Tableau<F>,
    n: usize,
    iterations: &mut usize,
) -> Result<Vec<(usize, usize)>, NumericalFailure> {
    let mut artificial_variable_indices = tableau.basis_indices().iter()
        .copied()
        .filter(|&j| j >= n)
        .collect::<Vec<_>>();
    artificial_variable_indices.sort_unstable();

    let mut redundant = Vec::new();
    for artificial in artificial_variable_indices {
        // Pivots happen only in the row of the artificial being removed, so this is found
        let Some(pivot_row) = tableau.basis_indices().iter().position(|&j| j == artificial) else {
            continue;
        };
        let pivot_column = (0..n)
            .filter(|&j| !tableau.is_in_basis(j))
            .find(|&j| !tableau.generate_element(pivot_row, j).is_zero_within(tableau.tolerance()));

        if let Some(pivot_column) = pivot_column {
            tableau.pivot_at_zero_level(pivot_column, pivot_row)?;
            *iterations += 1;
            trace!("phase one: artificial {} replaced by {} in row {}", artificial, pivot_column, pivot_row);
        } else {
            redundant.push((pivot_row, artificial - n));
        }
    }

    Ok(redundant)
}

#[cfg(test)]
mod test {
    use approx::assert_abs_diff_eq;

    use crate::algorithm::two_phase::config::SolverConfig;
    use crate::algorithm::two_phase::phase_one::{artificial_problem, compute_bfs, Rank, RankedFeasibilityResult};
    use crate::algorithm::two_phase::strategy::pivot_rule::FirstProfitable;
    use crate::data::linear_algebra::matrix::DenseMatrix;
    use crate::data::linear_algebra::vector::DenseVector;
    use crate::data::linear_program::standard_form::StandardForm;
    use crate::tests::{problem_1, problem_2};

    #[test]
    fn auxiliary() {
        let problem = StandardForm::from_rows(
            vec![vec![1_f64, 2_f64], vec![3_f64, 4_f64]],
            vec![1_f64, -2_f64],
            vec![5_f64, 6_f64],
        ).unwrap();
        let auxiliary = artificial_problem(&problem, &[false, true]);

        assert_eq!(auxiliary.constraints(), &DenseMatrix::from_rows(vec![
            vec![1_f64, 2_f64, 1_f64, 0_f64],
            vec![-3_f64, -4_f64, 0_f64, 1_f64],
        ]).unwrap());
        assert_eq!(auxiliary.b(), &DenseVector::new(vec![1_f64, 2_f64]));
        assert_eq!(auxiliary.cost(), &DenseVector::new(vec![0_f64, 0_f64, 1_f64, 1_f64]));
        assert!(auxiliary.has_trailing_identity(1e-9));
    }

    #[test]
    fn feasible() {
        let problem = problem_1::standard_form();
        let mut iterations = 0;
        let result = compute_bfs::<_, FirstProfitable>(&problem, &SolverConfig::default(), &mut iterations);

        match result {
            Ok(RankedFeasibilityResult::Feasible { rank, inverse_maintainer, basis_indices, non_basis_indices }) => {
                assert_eq!(rank, Rank::Full);
                assert_eq!(basis_indices.len(), 2);
                assert_eq!(basis_indices.len() + non_basis_indices.len(), 4);
                assert!(basis_indices.iter().chain(&non_basis_indices).all(|&j| j < 4));

                let basis = problem.constraints().select_columns(&basis_indices);
                let identity = inverse_maintainer.matrix().multiply(&basis);
                assert_abs_diff_eq!(identity.distance_to_identity(), 0_f64, epsilon = 1e-12);
            },
            other => panic!("expected a feasible result, got {:?}", other),
        }
        assert!(iterations > 0);
    }

    #[test]
    fn infeasible() {
        let problem = StandardForm::from_rows(
            vec![vec![1_f64, 0_f64], vec![1_f64, 0_f64]],
            vec![1_f64, 2_f64],
            vec![0_f64, 0_f64],
        ).unwrap();
        let mut iterations = 0;
        let result = compute_bfs::<_, FirstProfitable>(&problem, &SolverConfig::default(), &mut iterations);

        assert_eq!(result, Ok(RankedFeasibilityResult::Infeasible));
        assert_eq!(iterations, 1);
    }

    #[test]
    fn redundant_row() {
        let problem = problem_2::standard_form();
        let mut iterations = 0;
        let result = compute_bfs::<_, FirstProfitable>(&problem, &SolverConfig::default(), &mut iterations);

        match result {
            Ok(RankedFeasibilityResult::Feasible { rank, inverse_maintainer, basis_indices, non_basis_indices }) => {
                assert_eq!(rank, Rank::Deficient(vec![1]));
                assert_eq!(basis_indices, vec![0]);
                assert_eq!(non_basis_indices, vec![1]);
                assert_eq!(inverse_maintainer.matrix(), &DenseMatrix::from_rows(vec![vec![1_f64]]).unwrap());
                assert_eq!(inverse_maintainer.b(), &DenseVector::new(vec![1_f64]));
            },
            other => panic!("expected a feasible result, got {:?}", other),
        }
    }

    #[test]
    fn non_basis_in_ascending_order() {
        // Pivots in the first phase shuffle the non basic columns
        let problem = StandardForm::from_rows(
            vec![
                vec![-2_f64, 0_f64, 0_f64, 3_f64, -1_f64],
                vec![2_f64, 2_f64, 2_f64, 3_f64, -2_f64],
                vec![3_f64, -1_f64, 0_f64, -2_f64, 3_f64],
            ],
            vec![3_f64, 3_f64, -1_f64],
            vec![0_f64; 5],
        ).unwrap();
        let mut iterations = 0;
        let result = compute_bfs::<_, FirstProfitable>(&problem, &SolverConfig::default(), &mut iterations);

        match result {
            Ok(RankedFeasibilityResult::Feasible { rank, basis_indices, non_basis_indices, .. }) => {
                assert_eq!(rank, Rank::Full);
                let complement = (0..5)
                    .filter(|j| !basis_indices.contains(j))
                    .collect::<Vec<_>>();
                assert_eq!(non_basis_indices, complement);
                assert_eq!(non_basis_indices.len(), 2);
            },
            other => panic!("expected a feasible result, got {:?}", other),
        }
    }

    #[test]
    fn negative_right_hand_side() {
        let problem = StandardForm::from_rows(
            vec![vec![-1_f64, 1_f64]],
            vec![-2_f64],
            vec![1_f64, 1_f64],
        ).unwrap();
        let mut iterations = 0;
        let result = compute_bfs::<_, FirstProfitable>(&problem, &SolverConfig::default(), &mut iterations);

        match result {
            Ok(RankedFeasibilityResult::Feasible { rank, inverse_maintainer, basis_indices, .. }) => {
                assert_eq!(rank, Rank::Full);
                assert_eq!(basis_indices, vec![0]);
                // The inverse of the original column [-1], not of the flipped one
                assert_eq!(inverse_maintainer.matrix(), &DenseMatrix::from_rows(vec![vec![-1_f64]]).unwrap());
                assert_eq!(inverse_maintainer.b(), &DenseVector::new(vec![2_f64]));
            },
            other => panic!("expected a feasible result, got {:?}", other),
        }
    }
}
