//! # Eta matrices
//!
//! A single basis change replaces one column of the basis. The new basis inverse is the old one
//! multiplied from the left with an elementary matrix, which is stored here by its one nontrivial
//! column.
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::linear_algebra::vector::DenseVector;
use crate::data::number_types::traits::Field;
use crate::error::NumericalFailure;

/// Identity matrix, except for column `pivot_row`.
///
/// With `d` the basic direction of the entering variable, that column holds `-1 / d[p]` on the
/// diagonal and `-d[i] / d[p]` elsewhere.
#[derive(Clone, Debug, PartialEq)]
pub struct EtaMatrix<F> {
    column: DenseVector<F>,
    pivot_row: usize,
}

impl<F: Field> EtaMatrix<F> {
    /// Create the eta matrix for a pivot.
    ///
    /// # Arguments
    ///
    /// * `direction`: Basic direction `d = -B^-1 a_q` of the entering column `q`.
    /// * `pivot_row`: Position in the basis of the leaving variable.
    /// * `tolerance`: Pivot elements with an absolute value at most this large are rejected.
    ///
    /// # Return value
    ///
    /// A `NumericalFailure` if the pivot element is too small to divide by.
    pub fn new(
        direction: &DenseVector<F>,
        pivot_row: usize,
        tolerance: F,
    ) -> Result<Self, NumericalFailure> {
        debug_assert!(pivot_row < direction.len());

        let pivot = direction[pivot_row];
        if pivot.is_zero_within(tolerance) || !pivot.is_finite() {
            return Err(NumericalFailure::SingularPivot {
                row: pivot_row,
                value: pivot.to_f64_lossy(),
            });
        }

        let column = direction.iter()
            .enumerate()
            .map(|(i, &d)| if i == pivot_row { -F::one() / pivot } else { -d / pivot })
            .collect::<Vec<_>>();

        Ok(Self { column: DenseVector::new(column), pivot_row })
    }

    /// Replace `matrix` by `E matrix`.
    ///
    /// Takes `O(m n)` time, as opposed to a full matrix product.
    pub fn apply_left(&self, matrix: &mut DenseMatrix<F>) {
        debug_assert_eq!(matrix.nr_rows(), self.column.len());

        let p = self.pivot_row;
        // The pivot row is read by all other rows, so it is scaled last
        for (i, &factor) in self.column.iter().enumerate() {
            if i != p && factor != F::zero() {
                matrix.mul_add_rows(p, i, factor);
            }
        }
        matrix.multiply_row(p, self.column[p]);
    }

    /// The eta matrix as a dense matrix.
    #[cfg(test)]
    pub fn to_dense(&self) -> DenseMatrix<F> {
        let mut matrix = DenseMatrix::identity(self.column.len());
        for (i, &value) in self.column.iter().enumerate() {
            matrix[(i, self.pivot_row)] = value;
        }
        matrix
    }
}
