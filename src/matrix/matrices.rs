use crate::ModelError;
use crate::matrix::Matrix;

/// Matrix product of `a` and `b`.
///
/// # Parameters
///
/// - `a` - Left operand with shape `(r, k)`
/// - `b` - Right operand with shape `(k, c)`
///
/// # Returns
///
/// - `Ok(Matrix)` - The product with shape `(r, c)`
/// - `Err(ModelError::ShapeMismatch)` - If `a.cols() != b.rows()`
///
/// # Example
/// ```rust
/// use rustynet::matrix::{Matrix, dot};
///
/// let a = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
/// let product = dot(&Matrix::identity(2), &a).unwrap();
/// assert_eq!(product, a);
/// ```
pub fn dot(a: &Matrix, b: &Matrix) -> Result<Matrix, ModelError> {
    if a.cols() != b.rows() {
        return Err(ModelError::shape_mismatch("dot", a.shape(), b.shape()));
    }

    // ndarray dispatches to its matrixmultiply backend
    Ok(Matrix::from(a.as_array().dot(b.as_array())))
}

/// Element-wise sum of two matrices with identical shapes.
pub fn add(a: &Matrix, b: &Matrix) -> Result<Matrix, ModelError> {
    check_same_shape("add", a, b)?;
    Ok(Matrix::from(a.as_array() + b.as_array()))
}

/// Element-wise difference `a - b` of two matrices with identical shapes.
pub fn sub(a: &Matrix, b: &Matrix) -> Result<Matrix, ModelError> {
    check_same_shape("sub", a, b)?;
    Ok(Matrix::from(a.as_array() - b.as_array()))
}

/// Element-wise (Hadamard) product of two matrices with identical shapes.
pub fn mul(a: &Matrix, b: &Matrix) -> Result<Matrix, ModelError> {
    check_same_shape("mul", a, b)?;
    Ok(Matrix::from(a.as_array() * b.as_array()))
}

/// Returns `a` with every element multiplied by `factor`.
pub fn scale(a: &Matrix, factor: f64) -> Matrix {
    a.applied(|x| x * factor)
}

/// Adds the 1×C matrix `row` to every row of the R×C matrix `a`.
///
/// # Parameters
///
/// - `a` - Matrix receiving the broadcast
/// - `row` - Row vector with shape `(1, a.cols())`
///
/// # Returns
///
/// - `Ok(Matrix)` - A new matrix with shape `a.shape()`
/// - `Err(ModelError::ShapeMismatch)` - If `row` is not `(1, a.cols())`
pub fn add_row(a: &Matrix, row: &Matrix) -> Result<Matrix, ModelError> {
    if row.rows() != 1 || row.cols() != a.cols() {
        return Err(ModelError::shape_mismatch("add_row", a.shape(), row.shape()));
    }

    let mut result = Matrix::zeros(a.rows(), a.cols());
    result.map(|i, j| a.get(i, j) + row.get(0, j));
    Ok(result)
}

fn check_same_shape(operation: &'static str, a: &Matrix, b: &Matrix) -> Result<(), ModelError> {
    if a.shape() != b.shape() {
        return Err(ModelError::shape_mismatch(operation, a.shape(), b.shape()));
    }
    Ok(())
}
