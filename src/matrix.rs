/// Shape-checked binary algebra over matrices (dot, add, sub, mul)
pub mod matrices;
/// Human-readable statistics and printing for matrices
pub mod describe;
/// Binary and serde persistence of matrices
pub mod persistence;

pub use describe::*;
pub use matrices::*;
pub use persistence::*;

use crate::ModelError;
use ndarray::{Array2, Axis};
use rand::Rng;
use rand_distr::{Distribution, Uniform};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Axis along which `Matrix::reduce_axis` folds values.
///
/// # Variants
///
/// - `Rows` - Axis 0: every row is folded into one value, producing an R×1 matrix
/// - `Columns` - Axis 1: every column is folded into one value, producing a 1×C matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReduceAxis {
    Rows,
    Columns,
}

/// Dense two-dimensional matrix of `f64` values stored in row-major order.
///
/// The shape is fixed at construction; element values can be changed in place through
/// `set`, `map`, `apply` and `randomize`. Operations that combine two matrices live in
/// the `matrices` module and always allocate a new result.
///
/// # Example
/// ```rust
/// use rustynet::matrix::{Matrix, ReduceAxis};
///
/// let mut m = Matrix::zeros(2, 3);
/// m.map(|i, j| (i * 3 + j) as f64);
///
/// assert_eq!(m.get(1, 2), 5.0);
/// assert_eq!(m.sum(), 15.0);
///
/// let row_sums = m.reduce_axis(ReduceAxis::Rows, 0.0, |acc, x| acc + x);
/// assert_eq!(row_sums.shape(), (2, 1));
/// assert_eq!(row_sums.get(1, 0), 12.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SerializableMatrix", into = "SerializableMatrix")]
pub struct Matrix {
    data: Array2<f64>,
}

impl Matrix {
    /// Creates a new matrix of the given shape filled with zeros.
    ///
    /// # Parameters
    ///
    /// - `rows` - Number of rows
    /// - `cols` - Number of columns
    ///
    /// # Returns
    ///
    /// * `Matrix` - A zero-filled matrix with shape `(rows, cols)`
    pub fn new(rows: usize, cols: usize) -> Self {
        Self::zeros(rows, cols)
    }

    /// Creates a zero-filled matrix with shape `(rows, cols)`.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            data: Array2::zeros((rows, cols)),
        }
    }

    /// Creates a matrix with every element set to `value`.
    pub fn filled(rows: usize, cols: usize, value: f64) -> Self {
        Self {
            data: Array2::from_elem((rows, cols), value),
        }
    }

    /// Creates the `n`×`n` identity matrix.
    pub fn identity(n: usize) -> Self {
        Self {
            data: Array2::eye(n),
        }
    }

    /// Creates a matrix from a flat row-major vector of values.
    ///
    /// # Parameters
    ///
    /// - `rows` - Number of rows
    /// - `cols` - Number of columns
    /// - `values` - `rows * cols` values in row-major order
    ///
    /// # Returns
    ///
    /// - `Ok(Matrix)` - The matrix holding `values`
    /// - `Err(ModelError::InputValidationError)` - If `values.len() != rows * cols`
    pub fn from_vec(rows: usize, cols: usize, values: Vec<f64>) -> Result<Self, ModelError> {
        if values.len() != rows * cols {
            return Err(ModelError::InputValidationError(format!(
                "Expected {} values for a ({}, {}) matrix, got {}",
                rows * cols,
                rows,
                cols,
                values.len()
            )));
        }

        let data = Array2::from_shape_vec((rows, cols), values).map_err(|e| {
            ModelError::InputValidationError(format!("Failed to create matrix: {}", e))
        })?;
        Ok(Self { data })
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.data.nrows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.data.ncols()
    }

    /// Number of elements, always `rows * cols`
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Shape as `(rows, cols)`
    pub fn shape(&self) -> (usize, usize) {
        self.data.dim()
    }

    /// Gets the value at row `i`, column `j`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= rows` or `j >= cols`.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[[i, j]]
    }

    /// Sets the value at row `i`, column `j`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= rows` or `j >= cols`.
    pub fn set(&mut self, i: usize, j: usize, value: f64) {
        self.data[[i, j]] = value;
    }

    /// Gets the value at (0, 0), the scalar held by a 1×1 result such as a loss.
    ///
    /// # Panics
    ///
    /// Panics if the matrix is empty.
    pub fn peek(&self) -> f64 {
        self.get(0, 0)
    }

    /// Iterates over all values in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &f64> + '_ {
        self.data.iter()
    }

    /// Copies all values into a row-major vector.
    pub fn to_vec(&self) -> Vec<f64> {
        self.data.iter().copied().collect()
    }

    /// Returns a reference to the underlying array.
    pub fn as_array(&self) -> &Array2<f64> {
        &self.data
    }

    /// Replaces every element with `f(i, j)`.
    ///
    /// The new values are computed into a fresh buffer before the matrix is replaced, so `f`
    /// never observes a partially updated matrix. Reading other matrices from inside `f`
    /// is fine; reading this one is rejected by the borrow checker.
    ///
    /// # Parameters
    ///
    /// * `f` - Function of the coordinates `(i, j)` producing the new value
    pub fn map<F>(&mut self, f: F)
    where
        F: Fn(usize, usize) -> f64,
    {
        self.data = Array2::from_shape_fn(self.data.raw_dim(), |(i, j)| f(i, j));
    }

    /// Applies `f` to every element in place.
    ///
    /// # Parameters
    ///
    /// * `f` - Element-wise transform, evaluated in parallel
    pub fn apply<F>(&mut self, f: F)
    where
        F: Fn(f64) -> f64 + Sync + Send,
    {
        self.data.par_mapv_inplace(f);
    }

    /// Returns a new matrix with `f` applied to every element.
    pub fn applied<F>(&self, f: F) -> Matrix
    where
        F: Fn(f64) -> f64 + Sync + Send,
    {
        let mut result = self.clone();
        result.apply(f);
        result
    }

    /// Fills the matrix with independent uniform draws from `[lo, hi)`.
    ///
    /// # Parameters
    ///
    /// - `lo` - Inclusive lower bound
    /// - `hi` - Exclusive upper bound
    /// - `rng` - Random source used for every draw
    ///
    /// # Returns
    ///
    /// - `Ok(())` - If the matrix was filled
    /// - `Err(ModelError::InputValidationError)` - If `lo >= hi` or a bound is not finite
    pub fn randomize<R>(&mut self, lo: f64, hi: f64, rng: &mut R) -> Result<(), ModelError>
    where
        R: Rng + ?Sized,
    {
        let uniform = Uniform::new(lo, hi).map_err(|e| {
            ModelError::InputValidationError(format!(
                "Invalid randomize bounds [{}, {}): {}",
                lo, hi, e
            ))
        })?;

        self.data
            .iter_mut()
            .for_each(|value| *value = uniform.sample(rng));
        Ok(())
    }

    /// Returns a new `cols`×`rows` matrix with `(i, j) = self(j, i)`.
    pub fn transpose(&self) -> Matrix {
        Matrix {
            data: self.data.t().as_standard_layout().into_owned(),
        }
    }

    /// Folds the matrix along one axis.
    ///
    /// Each row (or column) is folded left to right starting from `identity`.
    ///
    /// # Parameters
    ///
    /// - `axis` - `ReduceAxis::Rows` produces an R×1 matrix, `ReduceAxis::Columns` a 1×C matrix
    /// - `identity` - Starting value of every fold
    /// - `combine` - Folding function called as `combine(accumulator, value)`
    ///
    /// # Returns
    ///
    /// * `Matrix` - The folded values
    pub fn reduce_axis<F>(&self, axis: ReduceAxis, identity: f64, combine: F) -> Matrix
    where
        F: Fn(f64, f64) -> f64 + Sync,
    {
        let fold = |lane: ndarray::ArrayView1<f64>| {
            lane.iter().fold(identity, |acc, &value| combine(acc, value))
        };

        match axis {
            ReduceAxis::Rows => {
                let folded: Vec<f64> = self
                    .data
                    .axis_iter(Axis(0))
                    .into_par_iter()
                    .map(fold)
                    .collect();
                Matrix {
                    data: Array2::from_shape_fn((self.rows(), 1), |(i, _)| folded[i]),
                }
            }
            ReduceAxis::Columns => {
                let folded: Vec<f64> = self
                    .data
                    .axis_iter(Axis(1))
                    .into_par_iter()
                    .map(fold)
                    .collect();
                Matrix {
                    data: Array2::from_shape_fn((1, self.cols()), |(_, j)| folded[j]),
                }
            }
        }
    }

    /// Folds the whole matrix into one scalar by reducing the rows, then the resulting column.
    ///
    /// An empty matrix folds to `identity`.
    pub fn reduce<F>(&self, identity: f64, combine: F) -> f64
    where
        F: Fn(f64, f64) -> f64 + Sync,
    {
        self.reduce_axis(ReduceAxis::Rows, identity, &combine)
            .reduce_axis(ReduceAxis::Columns, identity, &combine)
            .peek()
    }

    /// Smallest element
    pub fn min(&self) -> f64 {
        self.reduce(f64::INFINITY, f64::min)
    }

    /// Largest element
    pub fn max(&self) -> f64 {
        self.reduce(f64::NEG_INFINITY, f64::max)
    }

    /// Sum of all elements
    pub fn sum(&self) -> f64 {
        self.reduce(0.0, |acc, x| acc + x)
    }

    /// Arithmetic mean of all elements
    pub fn avg(&self) -> f64 {
        self.sum() / self.size() as f64
    }
}

impl From<Array2<f64>> for Matrix {
    fn from(data: Array2<f64>) -> Self {
        Self {
            data: data.as_standard_layout().into_owned(),
        }
    }
}
