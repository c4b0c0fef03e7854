use crate::ModelError;
use crate::matrix::{Matrix, ReduceAxis, sub};
use crate::neural_network::neural_network_trait::LossFunction;

/// Mean Squared Error loss function
///
/// The loss is `mean((prediction - target)^2)` over every element, returned as a 1×1 matrix.
/// The gradient is `prediction - target`; the constant factor `2 / N` is left out and absorbed
/// by the learning rate.
///
/// # Example
///
/// ```rust
/// use rustynet::matrix::Matrix;
/// use rustynet::neural_network::{LossFunction, MeanSquaredError};
///
/// let mse = MeanSquaredError::new();
///
/// let prediction = Matrix::from_vec(3, 1, vec![1.0, 2.0, 4.0]).unwrap();
/// let target = Matrix::from_vec(3, 1, vec![1.0, 2.0, 1.0]).unwrap();
///
/// let loss = mse.compute_loss(&prediction, &target).unwrap();
/// assert_eq!(loss.peek(), 3.0);
///
/// let grad = mse.compute_grad(&prediction, &target).unwrap();
/// assert_eq!(grad.get(2, 0), 3.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MeanSquaredError;

impl MeanSquaredError {
    /// Creates a new instance of MeanSquaredError
    ///
    /// # Returns
    ///
    /// - `MeanSquaredError` - Returns a unit-like struct `MeanSquaredError`
    pub fn new() -> Self {
        Self {}
    }
}

impl LossFunction for MeanSquaredError {
    fn compute_loss(&self, prediction: &Matrix, target: &Matrix) -> Result<Matrix, ModelError> {
        // Calculate the squared difference
        let mut squared_diff = sub(prediction, target)?;
        squared_diff.apply(|x| x * x);

        // Sum rows, then the column of row sums, then divide by the element count
        let n = prediction.size() as f64;
        let mut result = squared_diff
            .reduce_axis(ReduceAxis::Rows, 0.0, |acc, x| acc + x)
            .reduce_axis(ReduceAxis::Columns, 0.0, |acc, x| acc + x);
        result.apply(|x| x / n);

        Ok(result)
    }

    fn compute_grad(&self, prediction: &Matrix, target: &Matrix) -> Result<Matrix, ModelError> {
        sub(prediction, target)
    }

    fn name(&self) -> &str {
        "MeanSquaredError"
    }
}
