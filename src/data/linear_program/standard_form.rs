//! # Linear programs in standard form
//!
//! A linear program in standard form is `min c'x s.t. Ax = b, x >= 0`. The matrix `A` has `m`
//! rows and `n` columns, with `m <= n`.
use std::convert::TryFrom;

use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::linear_algebra::vector::DenseVector;
use crate::data::linear_program::elements::InequalitySign;
use crate::data::number_types::traits::Field;
use crate::error::InconsistencyError;

/// Immutable problem description that the solver works on.
#[derive(Clone, Debug, PartialEq)]
pub struct StandardForm<F> {
    /// Constraint matrix `A`, `m` x `n`.
    constraints: DenseMatrix<F>,
    /// Right-hand side `b`, length `m`.
    b: DenseVector<F>,
    /// Cost vector `c`, length `n`.
    cost: DenseVector<F>,
    /// Constraint types before standardization, one per row.
    ///
    /// Not used by the algorithm.
    inequality_signs: Option<Vec<InequalitySign>>,
}

impl<F: Field> StandardForm<F> {
    /// Create a new linear program in standard form.
    ///
    /// # Return value
    ///
    /// An error if the dimensions don't match, if there are more rows than columns, if there are no
    /// rows, or if any of the values is not finite.
    pub fn new(
        constraints: DenseMatrix<F>,
        b: DenseVector<F>,
        cost: DenseVector<F>,
    ) -> Result<Self, InconsistencyError> {
        let (m, n) = (constraints.nr_rows(), constraints.nr_columns());

        if m == 0 {
            return Err(InconsistencyError::new("the constraint matrix has no rows"));
        }
        if b.len() != m {
            return Err(InconsistencyError::new(format!(
                "b has length {}, but the constraint matrix has {} rows", b.len(), m,
            )));
        }
        if cost.len() != n {
            return Err(InconsistencyError::new(format!(
                "c has length {}, but the constraint matrix has {} columns", cost.len(), n,
            )));
        }
        if m > n {
            return Err(InconsistencyError::new(format!(
                "there are more constraints ({}) than variables ({})", m, n,
            )));
        }
        if !(constraints.is_finite() && b.is_finite() && cost.is_finite()) {
            return Err(InconsistencyError::new("all values should be finite"));
        }

        Ok(Self::new_unchecked(constraints, b, cost))
    }

    /// Create a new linear program without validating it.
    ///
    /// Used for problems that are derived from an already validated one.
    pub(crate) fn new_unchecked(
        constraints: DenseMatrix<F>,
        b: DenseVector<F>,
        cost: DenseVector<F>,
    ) -> Self {
        debug_assert_eq!(constraints.nr_rows(), b.len());
        debug_assert_eq!(constraints.nr_columns(), cost.len());

        Self { constraints, b, cost, inequality_signs: None }
    }

    /// Create a new linear program from plain collections.
    ///
    /// # Arguments
    ///
    /// * `rows`: Rows of the constraint matrix `A`.
    /// * `b`: Right-hand side.
    /// * `cost`: Cost vector `c`.
    pub fn from_rows(
        rows: Vec<Vec<F>>,
        b: Vec<F>,
        cost: Vec<F>,
    ) -> Result<Self, InconsistencyError> {
        Self::new(DenseMatrix::from_rows(rows)?, DenseVector::new(b), DenseVector::new(cost))
    }

    /// Attach the constraint types the rows had before standardization.
    ///
    /// The hint is kept for callers that want to interpret the solution; the algorithm ignores it.
    pub fn with_inequality_signs(
        mut self,
        signs: Vec<InequalitySign>,
    ) -> Result<Self, InconsistencyError> {
        if signs.len() != self.nr_rows() {
            return Err(InconsistencyError::new(format!(
                "{} inequality signs given for {} constraints", signs.len(), self.nr_rows(),
            )));
        }

        self.inequality_signs = Some(signs);
        Ok(self)
    }

    /// Attach constraint types encoded as `-1` (`<=`), `0` (`=`) and `1` (`>=`).
    pub fn with_inequality_markers(self, markers: &[i8]) -> Result<Self, InconsistencyError> {
        let signs = markers.iter()
            .map(|&marker| InequalitySign::try_from(marker))
            .collect::<Result<Vec<_>, _>>()?;
        self.with_inequality_signs(signs)
    }

    /// Number of constraints `m`.
    pub fn nr_rows(&self) -> usize {
        self.constraints.nr_rows()
    }

    /// Number of variables `n`.
    pub fn nr_columns(&self) -> usize {
        self.constraints.nr_columns()
    }

    /// The constraint matrix `A`.
    pub fn constraints(&self) -> &DenseMatrix<F> {
        &self.constraints
    }

    /// The right-hand side `b`.
    pub fn b(&self) -> &DenseVector<F> {
        &self.b
    }

    /// The cost vector `c`.
    pub fn cost(&self) -> &DenseVector<F> {
        &self.cost
    }

    /// Cost of variable `j`.
    pub fn cost_value(&self, j: usize) -> F {
        debug_assert!(j < self.nr_columns());

        self.cost[j]
    }

    /// Column `j` of the constraint matrix.
    pub fn column(&self, j: usize) -> DenseVector<F> {
        debug_assert!(j < self.nr_columns());

        self.constraints.column(j)
    }

    /// The constraint types before standardization, if they were provided.
    pub fn inequality_signs(&self) -> Option<&[InequalitySign]> {
        self.inequality_signs.as_deref()
    }

    /// Whether the last `m` columns form an identity matrix.
    ///
    /// Such a problem with `b >= 0` has an obvious basic feasible solution.
    pub fn has_trailing_identity(&self, tolerance: F) -> bool {
        let (m, n) = (self.nr_rows(), self.nr_columns());

        (0..m).all(|i| (0..m).all(|k| {
            let target = if i == k { F::one() } else { F::zero() };
            (self.constraints[(i, n - m + k)] - target).is_zero_within(tolerance)
        }))
    }

    /// Copy of this problem without some of its constraints.
    ///
    /// # Arguments
    ///
    /// * `rows`: Constraints to remove, sorted and unique.
    pub fn without_rows(&self, rows: &[usize]) -> Self {
        debug_assert!(rows.len() <= self.nr_rows());

        let mut constraints = self.constraints.clone();
        constraints.remove_rows(rows);
        let mut b = self.b.clone();
        b.remove_indices(rows);
        let inequality_signs = self.inequality_signs.clone().map(|mut signs| {
            index_utils::remove_indices(&mut signs, rows);
            signs
        });

        Self { constraints, b, cost: self.cost.clone(), inequality_signs }
    }

    /// Objective function value `c'x` of a full solution vector.
    pub fn objective_value(&self, x: &DenseVector<F>) -> F {
        self.cost.inner_product(x)
    }
}
