//! # Data structures for Simplex
//!
//! Contains the simplex tableau and logic for elementary operations which can be performed upon it.
//! The tableau is extended with supplementary data structures for efficiency.
use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt::{Display, Formatter, Result as FormatResult};

use itertools::Itertools;

use crate::algorithm::two_phase::config::LeavingRule;
use crate::algorithm::two_phase::tableau::inverse_maintenance::BasisInverse;
use crate::data::linear_algebra::vector::DenseVector;
use crate::data::linear_program::standard_form::StandardForm;
use crate::data::number_types::traits::Field;
use crate::error::{InconsistencyError, NumericalFailure};

pub mod inverse_maintenance;

/// The most high-level data structure that is used by the Simplex algorithm: the Simplex tableau.
///
/// It holds only a reference to the (immutable) problem it solves, but owns the data structures
/// that describe the current solution basis.
#[derive(Clone, Debug)]
pub struct Tableau<'provider, F> {
    /// Problem being solved.
    provider: &'provider StandardForm<F>,
    /// Basis inverse and the values of the basic variables.
    ///
    /// This attribute changes with a basis change.
    inverse_maintainer: BasisInverse<F>,
    /// Column index of the variable that is basic in each row.
    basis_indices: Vec<usize>,
    /// All columns not in the basis.
    ///
    /// The order in which these are stored is the order in which entering candidates are
    /// considered by the default pivot rule. A leaving variable takes the slot of the entering one.
    non_basis_indices: Vec<usize>,
    /// All columns currently in the basis.
    ///
    /// Could also be derived from `basis_indices`, but is here for faster reading and writing.
    basis_columns: HashSet<usize>,
    /// Values within this distance of zero are treated as zero.
    tolerance: F,
}

impl<'provider, F: Field> Tableau<'provider, F> {
    /// Create a tableau with the last `m` columns of the problem as its basis.
    ///
    /// # Return value
    ///
    /// An error if those columns don't form an identity matrix, or if `b` is not nonnegative. In
    /// both cases the last `m` columns are not a basic feasible solution.
    pub fn new(
        provider: &'provider StandardForm<F>,
        tolerance: F,
    ) -> Result<Self, InconsistencyError> {
        let (m, n) = (provider.nr_rows(), provider.nr_columns());

        if !provider.has_trailing_identity(tolerance) {
            return Err(InconsistencyError::new(format!(
                "the last {} columns should form an identity matrix to serve as initial basis", m,
            )));
        }
        if let Some((i, value)) = provider.b().iter().find_position(|v| v.is_negative_within(tolerance)) {
            return Err(InconsistencyError::new(format!(
                "b should be nonnegative to start from the identity basis, but b[{}] = {}", i, value,
            )));
        }

        let b = DenseVector::new(provider.b().iter().map(|&v| v.max(F::zero())).collect());
        let basis_indices = (n - m..n).collect::<Vec<_>>();
        let non_basis_indices = (0..n - m).collect();

        Ok(Self::new_with_basis(
            provider,
            BasisInverse::identity(b),
            basis_indices,
            non_basis_indices,
            tolerance,
        ))
    }

    /// Create a tableau from an existing basis and its inverse.
    ///
    /// # Arguments
    ///
    /// * `inverse_maintainer`: Inverse of the basis, and the values of the basic variables.
    /// * `basis_indices`: Column index of the basic variable in each row.
    /// * `non_basis_indices`: All other columns, in the order they should be considered when
    /// looking for an entering variable.
    pub fn new_with_basis(
        provider: &'provider StandardForm<F>,
        inverse_maintainer: BasisInverse<F>,
        basis_indices: Vec<usize>,
        non_basis_indices: Vec<usize>,
        tolerance: F,
    ) -> Self {
        debug_assert_eq!(basis_indices.len(), provider.nr_rows());
        debug_assert_eq!(inverse_maintainer.m(), provider.nr_rows());
        debug_assert_eq!(basis_indices.len() + non_basis_indices.len(), provider.nr_columns());

        let basis_columns = basis_indices.iter().copied().collect::<HashSet<_>>();
        debug_assert_eq!(basis_columns.len(), basis_indices.len());
        debug_assert!(non_basis_indices.iter().all(|j| !basis_columns.contains(j)));

        Self {
            provider,
            inverse_maintainer,
            basis_indices,
            non_basis_indices,
            basis_columns,
            tolerance,
        }
    }

    /// Calculates the relative cost of every non basic column.
    ///
    /// The simplex multipliers `c_B' B^-1` are computed once, after which the relative cost of
    /// column `j` is `c_j - (c_B' B^-1) a_j`.
    ///
    /// # Return value
    ///
    /// Tuples of column index and relative cost, in the order of `self.non_basis_indices()`.
    pub fn relative_costs(&self) -> Vec<(usize, F)> {
        let multipliers = self.multipliers();
        let priced = self.provider.constraints().left_multiply_vector(&multipliers);

        self.non_basis_indices.iter()
            .map(|&j| (j, self.provider.cost_value(j) - priced[j]))
            .collect()
    }

    /// Calculates the relative cost of a column.
    ///
    /// # Arguments
    ///
    /// * `j`: Index of column to calculate the relative cost for, in range `0` until
    /// `self.nr_columns()`.
    ///
    /// # Note
    ///
    /// That column will typically not be a basis column. Although the method could be valid for
    /// those inputs as well, the relative cost always equals zero in that situation.
    pub fn relative_cost(&self, j: usize) -> F {
        debug_assert!(j < self.nr_columns());

        self.provider.cost_value(j) - self.multipliers().inner_product(&self.provider.column(j))
    }

    fn multipliers(&self) -> DenseVector<F> {
        let basis_cost = self.provider.cost().select(&self.basis_indices);
        self.inverse_maintainer.multipliers(&basis_cost)
    }

    /// Column of original problem with respect to the current basis, `B^-1 a_j`.
    ///
    /// # Arguments
    ///
    /// * `j`: Column index of the variable, in range `0` until `self.nr_columns()`.
    pub fn generate_column(&self, j: usize) -> DenseVector<F> {
        debug_assert!(j < self.nr_columns());

        self.inverse_maintainer.generate_column(&self.provider.column(j))
    }

    /// Single element `(B^-1 a_j)[i]` with respect to the current basis.
    pub fn generate_element(&self, i: usize, j: usize) -> F {
        debug_assert!(i < self.nr_rows());
        debug_assert!(j < self.nr_columns());

        let inverse = self.inverse_maintainer.matrix();
        (0..self.nr_rows())
            .map(|k| inverse[(i, k)] * self.provider.constraints()[(k, j)])
            .sum()
    }

    /// Basic direction `d_B = -B^-1 a_q`.
    ///
    /// Increasing variable `q` with one unit while keeping all constraints satisfied changes the
    /// basic variables with `d_B`.
    pub fn basic_direction(&self, q: usize) -> DenseVector<F> {
        let column = self.generate_column(q);
        DenseVector::new(column.iter().map(|&v| -v).collect())
    }

    /// Determine the row to pivot on.
    ///
    /// This is the row that first hits zero when moving along the direction: among the rows where
    /// the direction is negative, the one with the minimal ratio `-x_i / d_i`. The step length is
    /// always that minimal ratio. Rows of which the value is zero within the tolerance after that
    /// step are ties, and the leaving row is chosen among them.
    ///
    /// # Arguments
    ///
    /// * `direction`: Basic direction of the entering column, with length `m`.
    /// * `rule`: How to choose between tied rows.
    ///
    /// # Return value
    ///
    /// Index of the row to pivot on and the step length. If not found, the problem is unbounded.
    pub fn select_primal_pivot_row(
        &self,
        direction: &DenseVector<F>,
        rule: LeavingRule,
    ) -> Option<(usize, F)> {
        debug_assert_eq!(direction.len(), self.nr_rows());

        let x = self.inverse_maintainer.b();
        let candidates = direction.iter()
            .enumerate()
            .filter(|(_, d)| d.is_negative_within(self.tolerance))
            .map(|(row, &d)| (row, d, (-x[row] / d).max(F::zero())))
            .collect::<Vec<_>>();

        let (min_row, step) = candidates.iter()
            .map(|&(row, _, ratio)| (row, ratio))
            .reduce(|min, candidate| if candidate.1 < min.1 { candidate } else { min })?;

        // Rows that (nearly) reach zero at the minimal step
        let mut ties = candidates.into_iter()
            .filter(|&(row, d, _)| (x[row] + step * d).is_zero_within(self.tolerance * (F::one() + x[row].abs())))
            .map(|(row, _, _)| row);

        let row = match rule {
            LeavingRule::FirstMinimum => ties.next(),
            // Bland's anti cycling algorithm
            LeavingRule::Bland => ties.min_by_key(|&row| self.basis_indices[row]),
        }.unwrap_or(min_row);

        Some((row, step))
    }

    /// Brings a column into the basis by updating the basis inverse and updating the data
    /// structures holding the collection of basis columns.
    ///
    /// # Arguments
    ///
    /// * `entering`: Column index of the entering variable, not yet in the basis.
    /// * `pivot_row`: Row of the leaving variable.
    /// * `direction`: Basic direction of the entering variable.
    /// * `step`: Step length along the direction.
    ///
    /// # Return value
    ///
    /// The column index of the leaving variable.
    pub fn bring_into_basis(
        &mut self,
        entering: usize,
        pivot_row: usize,
        direction: &DenseVector<F>,
        step: F,
    ) -> Result<usize, NumericalFailure> {
        debug_assert!(entering < self.nr_columns());
        debug_assert!(!self.is_in_basis(entering));
        debug_assert!(pivot_row < self.nr_rows());
        debug_assert!(step >= F::zero());

        self.inverse_maintainer.change_basis(pivot_row, direction, step, self.tolerance)?;
        Ok(self.update_basis_indices(pivot_row, entering))
    }

    /// Pivot without moving, replacing a basic variable with value (nearly) zero.
    ///
    /// The pivot element only needs to be nonzero, not negative.
    pub(crate) fn pivot_at_zero_level(
        &mut self,
        entering: usize,
        pivot_row: usize,
    ) -> Result<usize, NumericalFailure> {
        debug_assert!(self.inverse_maintainer.b()[pivot_row].is_zero_within(
            self.tolerance * (F::one() + self.provider.b().max_abs()),
        ));

        let direction = self.basic_direction(entering);
        self.inverse_maintainer.set_value(pivot_row, F::zero());
        self.bring_into_basis(entering, pivot_row, &direction, F::zero())
    }

    /// Update the basis index.
    ///
    /// The leaving variable takes the place of the entering variable among the non basic columns.
    fn update_basis_indices(&mut self, pivot_row: usize, entering: usize) -> usize {
        let leaving = self.basis_indices[pivot_row];
        self.basis_indices[pivot_row] = entering;

        debug_assert!(self.non_basis_indices.contains(&entering));
        match self.non_basis_indices.iter().position(|&j| j == entering) {
            Some(slot) => self.non_basis_indices[slot] = leaving,
            None => self.non_basis_indices.push(leaving),
        }

        self.basis_columns.remove(&leaving);
        self.basis_columns.insert(entering);

        leaving
    }

    /// Get the cost of the current solution, `c_B' x_B`.
    pub fn objective_function_value(&self) -> F {
        self.provider.cost().select(&self.basis_indices).inner_product(self.inverse_maintainer.b())
    }

    /// Verify that the tableau describes a basic feasible solution.
    ///
    /// Checks that `B^-1 B = I`, that `B x_B = b` and that `x_B >= 0`, all within a tolerance that
    /// scales with the magnitude of the values involved.
    pub fn check_basic_feasible_solution_state(&self) -> Result<(), NumericalFailure> {
        debug_assert_eq!(self.basis_columns.len(), self.nr_rows());

        let m = self.nr_rows();
        let size = F::from(m).unwrap_or_else(F::one);
        let basis = self.provider.constraints().select_columns(&self.basis_indices);
        let inverse = self.inverse_maintainer.matrix();
        let x = self.inverse_maintainer.b();

        let deviation = inverse.multiply(&basis).distance_to_identity();
        if deviation > self.tolerance * size * (F::one() + basis.max_abs() * inverse.max_abs()) {
            return Err(NumericalFailure::InverseDrift { deviation: deviation.to_f64_lossy() });
        }

        let reconstructed = basis.multiply_vector(x);
        let magnitude = F::one() + self.provider.b().max_abs() + size * basis.max_abs() * x.max_abs();
        if let Some((row, residual)) = (0..m)
            .map(|i| (i, reconstructed[i] - self.provider.b()[i]))
            .max_by(|(_, a), (_, b)| a.abs().partial_cmp(&b.abs()).unwrap_or(Ordering::Equal))
            .filter(|(_, residual)| residual.abs() > self.tolerance * magnitude) {
            return Err(NumericalFailure::ResidualDrift { row, residual: residual.to_f64_lossy() });
        }

        if let Some((row, &value)) = x.iter().find_position(|v| v.is_negative_within(self.tolerance)) {
            return Err(NumericalFailure::NegativeBasicValue { row, value: value.to_f64_lossy() });
        }

        Ok(())
    }

    /// Whether a column is in the basis.
    pub fn is_in_basis(&self, column: usize) -> bool {
        debug_assert!(column < self.nr_columns());

        self.basis_columns.contains(&column)
    }

    /// Column index of the basic variable in each row.
    pub fn basis_indices(&self) -> &[usize] {
        &self.basis_indices
    }

    /// All non basic columns, in the order in which entering candidates are considered.
    pub fn non_basis_indices(&self) -> &[usize] {
        &self.non_basis_indices
    }

    /// Current basis inverse and basic solution.
    pub fn inverse_maintainer(&self) -> &BasisInverse<F> {
        &self.inverse_maintainer
    }

    /// Problem being solved.
    pub fn provider(&self) -> &'provider StandardForm<F> {
        self.provider
    }

    /// Values within this distance of zero are treated as zero.
    pub fn tolerance(&self) -> F {
        self.tolerance
    }

    /// Number of rows in the tableau.
    pub fn nr_rows(&self) -> usize {
        self.provider.nr_rows()
    }

    /// Number of variables in the problem.
    pub fn nr_columns(&self) -> usize {
        self.provider.nr_columns()
    }

    /// Give up the problem reference, keeping the basis.
    ///
    /// # Return value
    ///
    /// The basis inverse with basic values, the basis indices and the non basis indices.
    pub fn into_basis(self) -> (BasisInverse<F>, Vec<usize>, Vec<usize>) {
        (self.inverse_maintainer, self.basis_indices, self.non_basis_indices)
    }
}

impl<'provider, F: Field> Display for Tableau<'provider, F> {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        writeln!(f, "=== Tableau ===")?;
        writeln!(f, "Basis: [{}]", self.basis_indices.iter().join(", "))?;
        writeln!(f, "Non basis: [{}]", self.non_basis_indices.iter().join(", "))?;
        writeln!(f, "Objective value: {}", self.objective_function_value())?;
        write!(f, "{}", self.inverse_maintainer)
    }
}
