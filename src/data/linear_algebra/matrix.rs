//! # Matrix implementation
//!
//! A dense, row-major matrix. It holds both the constraint matrix of a problem and the explicit
//! basis inverse that the revised Simplex method maintains.
use std::fmt;
use std::fmt::{Display, Formatter};
use std::ops::{Index, IndexMut};

use index_utils::remove_indices;
use itertools::Itertools;

use crate::data::linear_algebra::vector::DenseVector;
use crate::data::number_types::traits::Field;
use crate::error::InconsistencyError;

/// Uses a single `Vec` in row-major order as the underlying data structure. Dimensions are fixed at
/// creation, but rows and columns can be removed.
#[derive(Clone, Debug, PartialEq)]
pub struct DenseMatrix<F> {
    data: Vec<F>,
    nr_rows: usize,
    nr_columns: usize,
}

impl<F: Field> DenseMatrix<F> {
    /// Create a matrix from row-major data.
    ///
    /// # Arguments
    ///
    /// * `data`: Values, row after row. Should be of length `nr_rows * nr_columns`.
    pub fn new(data: Vec<F>, nr_rows: usize, nr_columns: usize) -> Self {
        debug_assert_eq!(data.len(), nr_rows * nr_columns);

        Self { data, nr_rows, nr_columns }
    }

    /// Create a matrix from a collection of rows.
    ///
    /// # Return value
    ///
    /// An error if the rows are not all of the same length.
    pub fn from_rows(rows: Vec<Vec<F>>) -> Result<Self, InconsistencyError> {
        let nr_rows = rows.len();
        let nr_columns = rows.first().map_or(0, Vec::len);
        if let Some((i, row)) = rows.iter().find_position(|row| row.len() != nr_columns) {
            return Err(InconsistencyError::new(format!(
                "row {} has {} values, while the first row has {}", i, row.len(), nr_columns,
            )));
        }

        Ok(Self::new(rows.into_iter().flatten().collect(), nr_rows, nr_columns))
    }

    /// Create a square identity matrix of size `len`.
    pub fn identity(len: usize) -> Self {
        let mut matrix = Self::zeros(len, len);
        for i in 0..len {
            matrix[(i, i)] = F::one();
        }
        matrix
    }

    /// Create a matrix of zeros of dimension `nr_rows` x `nr_columns`.
    pub fn zeros(nr_rows: usize, nr_columns: usize) -> Self {
        Self::new(vec![F::zero(); nr_rows * nr_columns], nr_rows, nr_columns)
    }

    /// Number of rows.
    pub fn nr_rows(&self) -> usize {
        self.nr_rows
    }

    /// Number of columns.
    pub fn nr_columns(&self) -> usize {
        self.nr_columns
    }

    /// All values in row `i`.
    pub fn row(&self, i: usize) -> &[F] {
        debug_assert!(i < self.nr_rows);

        &self.data[i * self.nr_columns..(i + 1) * self.nr_columns]
    }

    fn row_mut(&mut self, i: usize) -> &mut [F] {
        debug_assert!(i < self.nr_rows);

        &mut self.data[i * self.nr_columns..(i + 1) * self.nr_columns]
    }

    /// Copy of all values in column `j`.
    pub fn column(&self, j: usize) -> DenseVector<F> {
        debug_assert!(j < self.nr_columns);

        DenseVector::new((0..self.nr_rows).map(|i| self[(i, j)]).collect())
    }

    /// Submatrix consisting of the given columns, in the given order.
    ///
    /// With the basis indices as argument, this is the basis matrix `B`.
    pub fn select_columns(&self, columns: &[usize]) -> Self {
        debug_assert!(columns.iter().all(|&j| j < self.nr_columns));

        let data = (0..self.nr_rows)
            .flat_map(|i| columns.iter().map(move |&j| (i, j)))
            .map(|index| self[index])
            .collect();
        Self::new(data, self.nr_rows, columns.len())
    }

    /// Concatenate an identity matrix to the right of this matrix.
    ///
    /// The new columns have indices `self.nr_columns()` until `self.nr_columns() + self.nr_rows()`.
    pub fn hcat_identity(&self) -> Self {
        let m = self.nr_rows;
        let nr_columns = self.nr_columns + m;

        let mut data = Vec::with_capacity(m * nr_columns);
        for i in 0..m {
            data.extend_from_slice(self.row(i));
            data.extend((0..m).map(|k| if k == i { F::one() } else { F::zero() }));
        }

        Self::new(data, m, nr_columns)
    }

    /// Matrix-vector product `M v`.
    pub fn multiply_vector(&self, vector: &DenseVector<F>) -> DenseVector<F> {
        debug_assert_eq!(vector.len(), self.nr_columns);

        DenseVector::new((0..self.nr_rows)
            .map(|i| self.row(i).iter().zip(vector.iter()).map(|(&a, &v)| a * v).sum())
            .collect())
    }

    /// Vector-matrix product `y' M`, as a vector of length `self.nr_columns()`.
    pub fn left_multiply_vector(&self, vector: &DenseVector<F>) -> DenseVector<F> {
        debug_assert_eq!(vector.len(), self.nr_rows);

        let mut result = vec![F::zero(); self.nr_columns];
        for (i, &y) in vector.iter().enumerate() {
            if y == F::zero() {
                continue;
            }
            for (total, &value) in result.iter_mut().zip(self.row(i)) {
                *total += y * value;
            }
        }

        DenseVector::new(result)
    }

    /// Matrix product `self other`.
    pub fn multiply(&self, other: &Self) -> Self {
        debug_assert_eq!(self.nr_columns, other.nr_rows);

        let mut result = Self::zeros(self.nr_rows, other.nr_columns);
        for i in 0..self.nr_rows {
            for (k, &value) in self.row(i).iter().enumerate() {
                if value == F::zero() {
                    continue;
                }
                for (total, &o) in result.row_mut(i).iter_mut().zip(other.row(k)) {
                    *total += value * o;
                }
            }
        }

        result
    }

    /// Multiply a row with a factor.
    pub fn multiply_row(&mut self, i: usize, factor: F) {
        for value in self.row_mut(i) {
            *value *= factor;
        }
    }

    /// Add a multiple of row `read_row` to row `write_row`.
    pub fn mul_add_rows(&mut self, read_row: usize, write_row: usize, factor: F) {
        debug_assert!(read_row < self.nr_rows);
        debug_assert!(write_row < self.nr_rows);
        debug_assert_ne!(read_row, write_row);

        for j in 0..self.nr_columns {
            let read = self[(read_row, j)];
            self[(write_row, j)] += factor * read;
        }
    }

    /// Multiply a column with a factor.
    pub fn multiply_column(&mut self, j: usize, factor: F) {
        debug_assert!(j < self.nr_columns);

        for i in 0..self.nr_rows {
            self[(i, j)] *= factor;
        }
    }

    /// Remove rows.
    ///
    /// # Arguments
    ///
    /// * `indices`: Rows to remove, sorted and unique.
    pub fn remove_rows(&mut self, indices: &[usize]) {
        debug_assert!(indices.is_sorted());
        debug_assert!(indices.iter().all_unique());
        debug_assert!(indices.iter().all(|&i| i < self.nr_rows));

        let mut rows = (0..self.nr_rows).map(|i| self.row(i).to_vec()).collect::<Vec<_>>();
        remove_indices(&mut rows, indices);

        self.nr_rows = rows.len();
        self.data = rows.into_iter().flatten().collect();
    }

    /// Remove columns.
    ///
    /// # Arguments
    ///
    /// * `indices`: Columns to remove, sorted and unique.
    pub fn remove_columns(&mut self, indices: &[usize]) {
        debug_assert!(indices.is_sorted());
        debug_assert!(indices.iter().all_unique());
        debug_assert!(indices.iter().all(|&j| j < self.nr_columns));

        let kept = (0..self.nr_columns)
            .filter(|j| indices.binary_search(j).is_err())
            .collect::<Vec<_>>();
        *self = self.select_columns(&kept);
    }

    /// Largest absolute difference with the identity matrix of the same (square) size.
    pub fn distance_to_identity(&self) -> F {
        debug_assert_eq!(self.nr_rows, self.nr_columns);

        (0..self.nr_rows)
            .cartesian_product(0..self.nr_columns)
            .map(|(i, j)| {
                let target = if i == j { F::one() } else { F::zero() };
                (self[(i, j)] - target).abs()
            })
            .fold(F::zero(), F::max)
    }

    /// Largest absolute value, zero for an empty matrix.
    pub fn max_abs(&self) -> F {
        self.data.iter().fold(F::zero(), |max, v| max.max(v.abs()))
    }

    /// Whether all values are finite.
    pub fn is_finite(&self) -> bool {
        self.data.iter().all(|v| v.is_finite())
    }
}

impl<F> Index<(usize, usize)> for DenseMatrix<F> {
    type Output = F;

    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        debug_assert!(i < self.nr_rows);
        debug_assert!(j < self.nr_columns);

        &self.data[i * self.nr_columns + j]
    }
}

impl<F> IndexMut<(usize, usize)> for DenseMatrix<F> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut Self::Output {
        debug_assert!(i < self.nr_rows);
        debug_assert!(j < self.nr_columns);

        &mut self.data[i * self.nr_columns + j]
    }
}

impl<F: Display> Display for DenseMatrix<F> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let width = self.data.iter().map(|v| v.to_string().len()).max().unwrap_or(0);
        for i in 0..self.nr_rows {
            let row = &self.data[i * self.nr_columns..(i + 1) * self.nr_columns];
            writeln!(f, "{}", row.iter().map(|v| format!("{0:>width$}", v, width = width)).join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use crate::data::linear_algebra::matrix::DenseMatrix;
    use crate::data::linear_algebra::vector::DenseVector;

    fn matrix() -> DenseMatrix<f64> {
        DenseMatrix::from_rows(vec![
            vec![1_f64, 2_f64, 3_f64],
            vec![4_f64, 5_f64, 6_f64],
        ]).unwrap()
    }

    #[test]
    fn from_rows() {
        let m = matrix();
        assert_eq!(m.nr_rows(), 2);
        assert_eq!(m.nr_columns(), 3);
        assert_eq!(m[(1, 2)], 6_f64);
        assert_eq!(m.row(1), &[4_f64, 5_f64, 6_f64]);
        assert_eq!(m.column(1), DenseVector::new(vec![2_f64, 5_f64]));

        assert!(DenseMatrix::from_rows(vec![vec![1_f64, 2_f64], vec![3_f64]]).is_err());
    }

    #[test]
    fn identity() {
        let i = DenseMatrix::<f64>::identity(3);
        assert_eq!(i.distance_to_identity(), 0_f64);
        assert_eq!(i[(0, 1)], 0_f64);
        assert_eq!(i[(2, 2)], 1_f64);
    }

    #[test]
    fn products() {
        let m = matrix();
        let v = DenseVector::new(vec![1_f64, 0_f64, -1_f64]);
        assert_eq!(m.multiply_vector(&v), DenseVector::new(vec![-2_f64, -2_f64]));

        let y = DenseVector::new(vec![1_f64, -1_f64]);
        assert_eq!(m.left_multiply_vector(&y), DenseVector::new(vec![-3_f64, -3_f64, -3_f64]));

        let square = DenseMatrix::from_rows(vec![vec![0_f64, 1_f64], vec![1_f64, 0_f64]]).unwrap();
        let product = square.multiply(&m);
        assert_eq!(product.row(0), m.row(1));
        assert_eq!(product.row(1), m.row(0));
    }

    #[test]
    fn hcat_identity() {
        let m = matrix().hcat_identity();
        assert_eq!(m.nr_columns(), 5);
        assert_eq!(m.row(0), &[1_f64, 2_f64, 3_f64, 1_f64, 0_f64]);
        assert_eq!(m.row(1), &[4_f64, 5_f64, 6_f64, 0_f64, 1_f64]);
    }

    #[test]
    fn select_columns() {
        let m = matrix().select_columns(&[2, 0]);
        assert_eq!(m.row(0), &[3_f64, 1_f64]);
        assert_eq!(m.row(1), &[6_f64, 4_f64]);
    }

    #[test]
    fn remove() {
        let mut m = matrix();
        m.remove_columns(&[1]);
        assert_eq!(m.nr_columns(), 2);
        assert_eq!(m.row(1), &[4_f64, 6_f64]);

        m.remove_rows(&[0]);
        assert_eq!(m.nr_rows(), 1);
        assert_eq!(m.row(0), &[4_f64, 6_f64]);
    }

    #[test]
    fn row_operations() {
        let mut m = matrix();
        m.mul_add_rows(0, 1, -4_f64);
        assert_eq!(m.row(1), &[0_f64, -3_f64, -6_f64]);
        m.multiply_row(1, -1_f64);
        assert_eq!(m.row(1), &[0_f64, 3_f64, 6_f64]);
        m.multiply_column(0, 2_f64);
        assert_eq!(m.column(0), DenseVector::new(vec![2_f64, 0_f64]));
    }
}
