//! # Algorithms
//!
//! The outcomes of solving a linear program, and the two-phase revised Simplex method that
//! computes them.
use enum_map::EnumMap;

use crate::algorithm::two_phase::Phase;
use crate::algorithm::two_phase::tableau::Tableau;
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::linear_algebra::vector::DenseVector;
use crate::data::linear_program::standard_form::StandardForm;
use crate::data::number_types::traits::Field;

pub mod two_phase;

/// A linear program is either infeasible, unbounded or has a finite optimum.
///
/// This is determined as the result of an algorithm.
#[derive(Clone, Debug, PartialEq)]
pub enum OptimizationResult<F> {
    /// There is no solution satisfying all constraints.
    Infeasible,
    /// The objective function can be decreased without limit.
    ///
    /// Contains the feasible basis at which an unbounded direction was found.
    Unbounded(Basis<F>),
    /// An optimal basis was found.
    FiniteOptimum {
        /// Value of the objective function at the optimum.
        objective: F,
        /// The optimal basis.
        basis: Basis<F>,
    },
}

impl<F: Field> OptimizationResult<F> {
    /// Whether there is a solution satisfying all constraints.
    pub fn is_feasible(&self) -> bool {
        !matches!(self, OptimizationResult::Infeasible)
    }

    /// Whether the objective function can be decreased without limit.
    pub fn is_unbounded(&self) -> bool {
        matches!(self, OptimizationResult::Unbounded(_))
    }

    /// Optimal objective function value, defined if the problem is feasible and bounded.
    pub fn objective(&self) -> Option<F> {
        match self {
            OptimizationResult::FiniteOptimum { objective, .. } => Some(*objective),
            _ => None,
        }
    }

    /// The final basis, defined if the problem is feasible.
    pub fn basis(&self) -> Option<&Basis<F>> {
        match self {
            OptimizationResult::Infeasible => None,
            OptimizationResult::Unbounded(basis) | OptimizationResult::FiniteOptimum { basis, .. } => Some(basis),
        }
    }

    /// Column indices of the basic variables, one for each (non redundant) row.
    pub fn basic_indices(&self) -> Option<&[usize]> {
        self.basis().map(Basis::basic_indices)
    }

    /// Inverse of the final basis matrix.
    pub fn basis_inverse(&self) -> Option<&DenseMatrix<F>> {
        self.basis().map(Basis::basis_inverse)
    }

    /// Values of the basic variables, aligned with `basic_indices`.
    pub fn x(&self) -> Option<&DenseVector<F>> {
        self.basis().map(Basis::x)
    }

    /// Values of all variables, nonbasic variables being zero.
    pub fn primal_solution(&self) -> Option<DenseVector<F>> {
        self.basis().map(Basis::primal_solution)
    }
}

/// A basis of the problem and the basic solution it determines.
#[derive(Clone, Debug, PartialEq)]
pub struct Basis<F> {
    basic_indices: Vec<usize>,
    non_basic_indices: Vec<usize>,
    basis_inverse: DenseMatrix<F>,
    x: DenseVector<F>,
    /// Rows that were found to be linear combinations of other rows.
    ///
    /// The basis and its inverse are w.r.t. the problem without these rows.
    redundant_rows: Vec<usize>,
    nr_columns: usize,
}

impl<F: Field> Basis<F> {
    /// Take the basis out of a tableau.
    pub(crate) fn from_tableau(tableau: Tableau<F>, redundant_rows: Vec<usize>) -> Self {
        let nr_columns = tableau.nr_columns();
        let (inverse_maintainer, basic_indices, non_basic_indices) = tableau.into_basis();
        let (basis_inverse, x) = inverse_maintainer.into_parts();

        Self {
            basic_indices,
            non_basic_indices,
            basis_inverse,
            x,
            redundant_rows,
            nr_columns,
        }
    }

    /// Column index of the basic variable in each row.
    pub fn basic_indices(&self) -> &[usize] {
        &self.basic_indices
    }

    /// Column indices of the nonbasic variables.
    pub fn non_basic_indices(&self) -> &[usize] {
        &self.non_basic_indices
    }

    /// Inverse of the matrix formed by the basic columns, in the order of `basic_indices`.
    pub fn basis_inverse(&self) -> &DenseMatrix<F> {
        &self.basis_inverse
    }

    /// Values of the basic variables.
    pub fn x(&self) -> &DenseVector<F> {
        &self.x
    }

    /// Sorted indices of the constraints that were removed as redundant.
    pub fn redundant_rows(&self) -> &[usize] {
        &self.redundant_rows
    }

    /// Values of all variables, nonbasic variables being zero.
    pub fn primal_solution(&self) -> DenseVector<F> {
        let mut solution = DenseVector::zeros(self.nr_columns);
        for (&j, &value) in self.basic_indices.iter().zip(self.x.iter()) {
            solution[j] = value;
        }
        solution
    }

    /// Objective function value of the basic solution.
    pub fn objective_value(&self, problem: &StandardForm<F>) -> F {
        problem.objective_value(&self.primal_solution())
    }

    /// Whether the basic solution satisfies all constraints of a problem, redundant ones included.
    ///
    /// # Arguments
    ///
    /// * `problem`: The problem this basis was computed for.
    /// * `tolerance`: Allowed violation, relative to the size of `b`.
    pub fn is_primal_feasible(&self, problem: &StandardForm<F>, tolerance: F) -> bool {
        if problem.nr_columns() != self.nr_columns {
            return false;
        }

        let solution = self.primal_solution();
        let lhs = problem.constraints().multiply_vector(&solution);
        let allowed = tolerance * (F::one() + problem.b().max_abs());

        solution.iter().all(|v| !v.is_negative_within(tolerance))
            && lhs.iter().zip(problem.b().iter()).all(|(&l, &b)| (l - b).abs() <= allowed)
    }
}

/// The outcome of solving a problem together with how much work it took.
#[derive(Clone, Debug, PartialEq)]
pub struct SolveReport<F> {
    result: OptimizationResult<F>,
    iterations: EnumMap<Phase, usize>,
}

impl<F> SolveReport<F> {
    pub(crate) fn new(result: OptimizationResult<F>, iterations: EnumMap<Phase, usize>) -> Self {
        Self { result, iterations }
    }

    /// Whether the problem is infeasible, unbounded or has an optimum.
    pub fn result(&self) -> &OptimizationResult<F> {
        &self.result
    }

    /// Give up the statistics.
    pub fn into_result(self) -> OptimizationResult<F> {
        self.result
    }

    /// Number of pivots done in a phase.
    pub fn iterations(&self, phase: Phase) -> usize {
        self.iterations[phase]
    }

    /// Number of pivots done in both phases.
    pub fn total_iterations(&self) -> usize {
        self.iterations.values().sum()
    }
}
