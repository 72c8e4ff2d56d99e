//! # Dense vector
//!
//! Wrapping a `Vec` such that it has a fixed size and can take part in the few operations the
//! Simplex method needs.
use std::fmt;
use std::fmt::{Display, Formatter};
use std::ops::{Index, IndexMut};
use std::slice::Iter;

use index_utils::remove_indices;
use itertools::Itertools;

use crate::data::number_types::traits::Field;

/// Uses a `Vec` as underlying data a structure. Length is fixed at creation.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseVector<F> {
    data: Vec<F>,
}

impl<F> DenseVector<F> {
    /// Wrap existing data.
    pub fn new(data: Vec<F>) -> Self {
        Self { data }
    }

    /// Number of items represented by the vector.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the vector is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Iterate over the values of this vector.
    pub fn iter(&self) -> Iter<'_, F> {
        self.data.iter()
    }

    /// Reduce the size of the vector by removing values.
    ///
    /// # Arguments
    ///
    /// * `indices`: A set of indices to remove from the vector, assumed sorted and unique.
    pub fn remove_indices(&mut self, indices: &[usize]) {
        debug_assert!(indices.len() <= self.len());
        debug_assert!(indices.is_sorted());
        debug_assert!(indices.iter().all_unique());
        debug_assert!(indices.iter().all(|&i| i < self.len()));

        remove_indices(&mut self.data, indices);
    }
}

impl<F: Field> DenseVector<F> {
    /// Create a vector with all values being equal to a given value.
    pub fn constant(value: F, len: usize) -> Self {
        Self { data: vec![value; len] }
    }

    /// A vector of zeros.
    pub fn zeros(len: usize) -> Self {
        Self::constant(F::zero(), len)
    }

    /// Inner product with another vector of the same length.
    pub fn inner_product(&self, other: &Self) -> F {
        debug_assert_eq!(self.len(), other.len());

        self.data.iter().zip(&other.data).map(|(&a, &b)| a * b).sum()
    }

    /// Gather the values at the given indices, in that order.
    ///
    /// Used to restrict the cost vector to the basis columns.
    pub fn select(&self, indices: &[usize]) -> Self {
        debug_assert!(indices.iter().all(|&i| i < self.len()));

        Self { data: indices.iter().map(|&i| self.data[i]).collect() }
    }

    /// Largest absolute value, zero for an empty vector.
    pub fn max_abs(&self) -> F {
        self.data.iter().fold(F::zero(), |max, v| max.max(v.abs()))
    }

    /// Whether all values are finite.
    pub fn is_finite(&self) -> bool {
        self.data.iter().all(|v| v.is_finite())
    }

    /// Add a multiple of another vector: `self += factor * other`.
    pub fn add_multiple(&mut self, factor: F, other: &Self) {
        debug_assert_eq!(self.len(), other.len());

        for (value, &o) in self.data.iter_mut().zip(&other.data) {
            *value += factor * o;
        }
    }
}

impl<F> Index<usize> for DenseVector<F> {
    type Output = F;

    fn index(&self, index: usize) -> &Self::Output {
        debug_assert!(index < self.len());

        &self.data[index]
    }
}

impl<F> IndexMut<usize> for DenseVector<F> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        debug_assert!(index < self.len());

        &mut self.data[index]
    }
}

impl<F: Display> Display for DenseVector<F> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "[{}]", self.data.iter().join(", "))
    }
}
