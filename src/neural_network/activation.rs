use crate::matrix::{Matrix, ReduceAxis};
use serde::{Deserialize, Serialize};

/// Activation function enum, supporting Linear, ReLU, Sigmoid, Tanh, and Softmax
///
/// Every variant is a pair of pure functions: the forward transform and its derivative.
/// Derivatives are evaluated on the *activated* values, not on the pre-activation input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Activation {
    Linear,
    ReLU,
    Sigmoid,
    Tanh,
    Softmax,
}

impl Activation {
    /// Forward application of the activation function
    ///
    /// Element-wise for every variant except Softmax, which normalizes each row:
    /// `softmax(x)_ij = exp(x_ij - max_i) / sum_j(exp(x_ij - max_i))`.
    ///
    /// # Parameters
    ///
    /// * `z` - Pre-activation values
    ///
    /// # Returns
    ///
    /// * `Matrix` - A new matrix with the activation applied
    pub fn forward(&self, z: &Matrix) -> Matrix {
        match self {
            Activation::Linear => z.clone(),
            Activation::ReLU => z.applied(|x| x.max(0.0)),
            Activation::Sigmoid => z.applied(|x| 1.0 / (1.0 + (-x).exp())),
            Activation::Tanh => z.applied(f64::tanh),
            Activation::Softmax => softmax(z),
        }
    }

    /// Derivative of the activation function
    ///
    /// Softmax reuses the ReLU derivative.
    ///
    /// # Parameters
    ///
    /// * `activated` - Output of `forward`
    ///
    /// # Returns
    ///
    /// * `Matrix` - A matrix containing the derivative values
    pub fn derivative(&self, activated: &Matrix) -> Matrix {
        match self {
            Activation::Linear => activated.applied(|_| 1.0),
            Activation::ReLU | Activation::Softmax => {
                activated.applied(|y| if y > 0.0 { 1.0 } else { 0.0 })
            }
            Activation::Sigmoid => activated.applied(|y| y * (1.0 - y)),
            Activation::Tanh => activated.applied(|y| 1.0 - y * y),
        }
    }

    /// Name of the activation function
    pub fn name(&self) -> &'static str {
        match self {
            Activation::Linear => "Linear",
            Activation::ReLU => "ReLU",
            Activation::Sigmoid => "Sigmoid",
            Activation::Tanh => "Tanh",
            Activation::Softmax => "Softmax",
        }
    }
}

fn softmax(z: &Matrix) -> Matrix {
    let row_max = z.reduce_axis(ReduceAxis::Rows, f64::NEG_INFINITY, f64::max);

    let mut exp = Matrix::zeros(z.rows(), z.cols());
    exp.map(|i, j| (z.get(i, j) - row_max.get(i, 0)).exp());

    let row_sum = exp.reduce_axis(ReduceAxis::Rows, 0.0, |acc, x| acc + x);

    let mut result = Matrix::zeros(z.rows(), z.cols());
    result.map(|i, j| exp.get(i, j) / row_sum.get(i, 0));
    result
}
