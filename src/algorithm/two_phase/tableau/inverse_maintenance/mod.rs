//! # Maintaining a basis inverse
//!
//! The simplex method requires us to keep track of the basis inverse. The values of the basic
//! variables are kept alongside it, as they change with every basis change as well.
//!
//! The inverse is stored explicitly as a dense matrix and updated with one eta matrix per pivot,
//! it is never recomputed from scratch.
use std::fmt;
use std::fmt::{Display, Formatter};

use crate::algorithm::two_phase::tableau::inverse_maintenance::eta::EtaMatrix;
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::linear_algebra::vector::DenseVector;
use crate::data::number_types::traits::Field;
use crate::error::NumericalFailure;

pub mod eta;

/// Explicit basis inverse `B^-1` together with the basic solution `x_B = B^-1 b`.
#[derive(Clone, Debug, PartialEq)]
pub struct BasisInverse<F> {
    /// Square matrix of size `m`.
    inverse: DenseMatrix<F>,
    /// Values of the basic variables, position `i` belonging to the variable basic in row `i`.
    b: DenseVector<F>,
}

impl<F: Field> BasisInverse<F> {
    /// Inverse of an identity basis.
    ///
    /// # Arguments
    ///
    /// * `b`: Constraint values, which are the values of the basic variables w.r.t. this basis.
    pub fn identity(b: DenseVector<F>) -> Self {
        Self { inverse: DenseMatrix::identity(b.len()), b }
    }

    /// Wrap an existing inverse and basic solution.
    pub fn from_parts(inverse: DenseMatrix<F>, b: DenseVector<F>) -> Self {
        debug_assert_eq!(inverse.nr_rows(), inverse.nr_columns());
        debug_assert_eq!(inverse.nr_rows(), b.len());

        Self { inverse, b }
    }

    /// Number of rows of the basis.
    pub fn m(&self) -> usize {
        self.b.len()
    }

    /// The basis inverse.
    pub fn matrix(&self) -> &DenseMatrix<F> {
        &self.inverse
    }

    /// The current values of the basic variables.
    pub fn b(&self) -> &DenseVector<F> {
        &self.b
    }

    /// Compute `B^-1 a` for a column `a` of the problem.
    pub fn generate_column(&self, original_column: &DenseVector<F>) -> DenseVector<F> {
        self.inverse.multiply_vector(original_column)
    }

    /// Compute the simplex multipliers `c_B' B^-1`.
    pub fn multipliers(&self, basis_cost: &DenseVector<F>) -> DenseVector<F> {
        self.inverse.left_multiply_vector(basis_cost)
    }

    /// Move along a basic direction and replace the basic variable at `pivot_row`.
    ///
    /// The values become `x + step d`, after which the entering variable gets the value `step` at
    /// position `pivot_row`. Values that became negative through rounding only are set to zero.
    ///
    /// # Arguments
    ///
    /// * `pivot_row`: Position in the basis of the leaving variable.
    /// * `direction`: Basic direction `d = -B^-1 a_q` of the entering column `q`.
    /// * `step`: Step length, as determined by the ratio test.
    /// * `tolerance`: Values within this distance of zero are treated as zero.
    pub fn change_basis(
        &mut self,
        pivot_row: usize,
        direction: &DenseVector<F>,
        step: F,
        tolerance: F,
    ) -> Result<(), NumericalFailure> {
        debug_assert!(pivot_row < self.m());
        debug_assert_eq!(direction.len(), self.m());

        // Fails before anything is modified
        let eta = EtaMatrix::new(direction, pivot_row, tolerance)?;

        let mut b = self.b.clone();
        b.add_multiple(step, direction);
        b[pivot_row] = step;
        for i in 0..b.len() {
            let value = b[i];
            if !value.is_finite() {
                return Err(NumericalFailure::NonFinite { row: i });
            }
            if value < F::zero() && value.is_zero_within(tolerance) {
                b[i] = F::zero();
            }
        }

        self.b = b;
        eta.apply_left(&mut self.inverse);
        Ok(())
    }

    /// Replace a basic value at zero level without moving.
    pub(crate) fn set_value(&mut self, row: usize, value: F) {
        self.b[row] = value;
    }

    /// Multiply columns of the inverse by `-1`.
    ///
    /// If the rows `i` of the problem for which `flipped[i]` holds were multiplied by `-1` before
    /// this inverse was computed, the result is the inverse for the problem with the original rows.
    pub fn unflip_rows(&mut self, flipped: &[bool]) {
        debug_assert_eq!(flipped.len(), self.m());

        for (j, _) in flipped.iter().enumerate().filter(|&(_, &flip)| flip) {
            self.inverse.multiply_column(j, -F::one());
        }
    }

    /// Remove basis rows that belong to redundant constraints.
    ///
    /// Basis position `positions[k]` should hold the unit column of constraint `constraints[k]`,
    /// such that column `constraints[k]` of the inverse is the unit vector of `positions[k]`. Those
    /// rows and columns are removed from the inverse, which is then the inverse of the basis
    /// without those constraints and columns.
    ///
    /// # Arguments
    ///
    /// * `positions`: Basis positions to remove, sorted and unique.
    /// * `constraints`: Constraint indices to remove, sorted and unique.
    pub fn remove_basis_rows(&mut self, positions: &[usize], constraints: &[usize]) {
        debug_assert_eq!(positions.len(), constraints.len());

        self.inverse.remove_rows(positions);
        self.inverse.remove_columns(constraints);
        self.b.remove_indices(positions);
    }

    /// Split into the inverse and the basic values.
    pub fn into_parts(self) -> (DenseMatrix<F>, DenseVector<F>) {
        (self.inverse, self.b)
    }
}

impl<F: Field> Display for BasisInverse<F> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        writeln!(f, "Basis inverse:")?;
        write!(f, "{}", self.inverse)?;
        writeln!(f, "Basic values: {}", self.b)
    }
}
