use std::thread;

use approx::{assert_abs_diff_eq, assert_relative_eq};

use relp_revised::algorithm::OptimizationResult;
use relp_revised::algorithm::two_phase::{Phase, Simplex};
use relp_revised::algorithm::two_phase::config::{LeavingRule, SolverConfig};
use relp_revised::algorithm::two_phase::strategy::pivot_rule::{SmallestIndex, SteepestDescentAlongVariable};
use relp_revised::data::linear_algebra::vector::DenseVector;
use relp_revised::data::linear_program::elements::InequalitySign;
use relp_revised::error::SolveError;

use crate::textbook::{cycling, problem, production};

#[test]
fn finite_optimum() {
    let problem = problem(
        vec![vec![1_f64, 0_f64, 1_f64], vec![0_f64, 1_f64, 0_f64]],
        vec![1_f64, 2_f64],
        vec![1_f64, 1_f64, 0_f64],
    );
    let result = Simplex::new(problem.clone(), Phase::Two).solve().unwrap();

    assert!(result.is_feasible());
    assert!(!result.is_unbounded());
    assert_relative_eq!(result.objective().unwrap(), 2_f64);
    assert_eq!(result.primal_solution(), Some(DenseVector::new(vec![0_f64, 2_f64, 1_f64])));

    let basis = result.basis().unwrap();
    let basis_matrix = problem.constraints().select_columns(result.basic_indices().unwrap());
    assert_abs_diff_eq!(basis.basis_inverse().multiply(&basis_matrix).distance_to_identity(), 0_f64);
    assert!(basis.is_primal_feasible(&problem, 1e-9));
}

#[test]
fn unbounded() {
    let problem = problem(vec![vec![1_f64, -1_f64]], vec![1_f64], vec![0_f64, -1_f64]);
    let result = Simplex::new(problem, Phase::Two).solve().unwrap();

    assert!(result.is_feasible());
    assert!(result.is_unbounded());
    assert_eq!(result.objective(), None);
    assert!(result.x().is_some());
}

#[test]
fn infeasible() {
    let problem = problem(
        vec![vec![1_f64, 0_f64], vec![1_f64, 0_f64]],
        vec![1_f64, 2_f64],
        vec![0_f64, 0_f64],
    );
    let result = Simplex::new(problem, Phase::Two).solve().unwrap();

    assert_eq!(result, OptimizationResult::Infeasible);
    assert_eq!(result.objective(), None);
    assert_eq!(result.basic_indices(), None);
    assert_eq!(result.basis_inverse(), None);
    assert_eq!(result.x(), None);
}

#[test]
fn trivial() {
    let problem = problem(vec![vec![1_f64]], vec![0_f64], vec![0_f64]);
    let result = Simplex::new(problem, Phase::Two).solve().unwrap();

    assert_eq!(result.objective(), Some(0_f64));
    assert_eq!(result.x(), Some(&DenseVector::new(vec![0_f64])));
}

#[test]
fn production_planning() {
    for phase in [Phase::One, Phase::Two] {
        let report = Simplex::new(production(), phase).solve_with_report().unwrap();
        let result = report.result();

        assert_relative_eq!(result.objective().unwrap(), -36_f64, max_relative = 1e-12);
        let x = result.primal_solution().unwrap();
        for (value, expected) in x.iter().zip([2_f64, 6_f64, 2_f64, 0_f64, 0_f64]) {
            assert_abs_diff_eq!(*value, expected, epsilon = 1e-9);
        }
        assert!(result.basis().unwrap().is_primal_feasible(&production(), 1e-9));
    }

    // The slack basis is feasible, so no artificial variables are needed
    let report = Simplex::new(production(), Phase::One).solve_with_report().unwrap();
    assert_eq!(report.iterations(Phase::Two), 0);
    assert_eq!(report.total_iterations(), 3);
}

#[test]
fn redundant_constraint() {
    let problem = problem(
        vec![
            vec![1_f64, 1_f64, 1_f64, 0_f64],
            vec![2_f64, 2_f64, 2_f64, 0_f64],
            vec![1_f64, 0_f64, 0_f64, 1_f64],
        ],
        vec![3_f64, 6_f64, 1_f64],
        vec![1_f64, 2_f64, 3_f64, 0_f64],
    );
    let result = Simplex::new(problem.clone(), Phase::Two).solve().unwrap();

    assert_relative_eq!(result.objective().unwrap(), 5_f64, max_relative = 1e-12);
    let basis = result.basis().unwrap();
    assert_eq!(basis.redundant_rows(), &[1]);
    assert_eq!(basis.basic_indices().len(), 2);
    assert_eq!(basis.basis_inverse().nr_rows(), 2);
    // The removed row is satisfied as well
    assert!(basis.is_primal_feasible(&problem, 1e-9));
}

#[test]
fn anti_cycling() {
    let bland = SolverConfig::default().leaving_rule(LeavingRule::Bland);
    for phase in [Phase::One, Phase::Two] {
        let simplex = Simplex::new(cycling(), phase).with_config(bland);
        let report = simplex.solve_with_rule::<SmallestIndex>().unwrap();

        assert_relative_eq!(report.result().objective().unwrap(), -1.25, max_relative = 1e-9);
        assert!(report.result().basis().unwrap().is_primal_feasible(&cycling(), 1e-9));
    }

    // Always choosing the most negative relative cost revisits the same bases
    let limited = SolverConfig::default().iteration_limit(Some(200));
    let simplex = Simplex::new(cycling(), Phase::One).with_config(limited);
    assert!(matches!(
        simplex.solve_with_rule::<SteepestDescentAlongVariable>(),
        Err(SolveError::IterationLimit { phase: Phase::One, iterations: 200 }),
    ));
}

#[test]
fn inequality_signs_are_kept() {
    let problem = production()
        .with_inequality_markers(&[-1, -1, -1])
        .unwrap();
    assert_eq!(problem.inequality_signs(), Some(&[InequalitySign::Less; 3][..]));

    let result = Simplex::new(problem, Phase::Two).solve().unwrap();
    assert_relative_eq!(result.objective().unwrap(), -36_f64, max_relative = 1e-12);

    assert!(production().with_inequality_markers(&[0, 1]).is_err());
}

#[test]
fn independent_threads() {
    let handles = (0..4)
        .map(|_| thread::spawn(|| Simplex::new(production(), Phase::Two).solve()))
        .collect::<Vec<_>>();

    for handle in handles {
        let result = handle.join().unwrap().unwrap();
        assert_relative_eq!(result.objective().unwrap(), -36_f64, max_relative = 1e-12);
    }
}
