use crate::error::ModelError;
use crate::matrix::Matrix;
use rand::RngCore;

/// Defines the interface for neural network layers.
///
/// A layer owns a weight matrix with shape `(input_features, output_features)` and a bias
/// matrix with shape `(1, output_features)`. Both are created by `build`, mutated in place by
/// training, and kept for the lifetime of the layer.
pub trait Layer: Send + Sync {
    /// Creates the layer parameters for inputs with `input_features` columns.
    ///
    /// # Parameters
    ///
    /// - `input_features` - Number of features (columns) the layer will receive
    /// - `rng` - Random source used to initialize the parameters
    ///
    /// # Returns
    ///
    /// - `Ok(())` - The layer is built; building again for the same feature count is a no-op
    /// - `Err(ModelError::BuildConflict)` - The layer is already built for another feature count
    fn build(&mut self, input_features: usize, rng: &mut dyn RngCore) -> Result<(), ModelError>;

    /// Whether `build` (or `set_parameters`) has created the parameters
    fn is_built(&self) -> bool;

    /// Number of input features, once built
    fn input_features(&self) -> Option<usize>;

    /// Number of output features (neurons)
    fn output_features(&self) -> usize;

    /// Performs forward activation through the layer.
    ///
    /// # Parameters
    ///
    /// - `input` - Input batch with one sample per row
    ///
    /// # Returns
    ///
    /// - `Ok(Matrix)` - The activated output
    /// - `Err(ModelError::NotBuilt)` - If the layer has not been built
    /// - `Err(ModelError::ShapeMismatch)` - If the input column count differs from the built one
    fn forward(&self, input: &Matrix) -> Result<Matrix, ModelError>;

    /// Local derivative of the layer activation, evaluated on already activated values.
    ///
    /// # Parameters
    ///
    /// - `activated` - Values previously produced by an activation
    ///
    /// # Returns
    ///
    /// - `Ok(Matrix)` - Element-wise derivative with the shape of `activated`
    fn local_derivative(&self, activated: &Matrix) -> Result<Matrix, ModelError>;

    /// Weight matrix, if built
    fn weights(&self) -> Option<&Matrix>;

    /// Bias matrix, if built
    fn biases(&self) -> Option<&Matrix>;

    /// Applies one gradient descent step to the parameters.
    ///
    /// # Parameters
    ///
    /// - `weight_delta` - Already scaled update subtracted from the weights
    /// - `bias_shift` - Already scaled scalar subtracted from every bias element
    ///
    /// # Returns
    ///
    /// - `Ok(())` - The parameters were updated
    /// - `Err(ModelError::NotBuilt)` - If the layer has not been built
    /// - `Err(ModelError::ShapeMismatch)` - If `weight_delta` does not match the weights
    fn apply_gradient(&mut self, weight_delta: &Matrix, bias_shift: f64)
    -> Result<(), ModelError>;

    /// Replaces the parameters, building the layer if needed.
    ///
    /// # Parameters
    ///
    /// - `weights` - New weights with shape `(input_features, output_features)`
    /// - `biases` - New biases with shape `(1, output_features)`
    ///
    /// # Returns
    ///
    /// - `Ok(())` - Parameters replaced
    /// - `Err(ModelError)` - Shapes do not fit this layer
    fn set_parameters(&mut self, weights: Matrix, biases: Matrix) -> Result<(), ModelError>;

    /// Returns the type name of the layer (e.g. "Dense").
    fn layer_type(&self) -> &str;

    /// Returns the number of parameters (`weights.size + biases.size`).
    ///
    /// # Returns
    ///
    /// - `Ok(usize)` - Parameter count
    /// - `Err(ModelError::NotBuilt)` - If the layer has not been built
    fn param_count(&self) -> Result<usize, ModelError> {
        match (self.weights(), self.biases()) {
            (Some(weights), Some(biases)) => Ok(weights.size() + biases.size()),
            _ => Err(ModelError::NotBuilt),
        }
    }
}

/// Defines the interface for loss functions used in neural network training.
///
/// This trait provides methods to compute both the loss value and its gradient
/// with respect to the predicted values.
pub trait LossFunction: Send + Sync {
    /// Computes the loss between predicted and target values.
    ///
    /// # Parameters
    ///
    /// - `prediction` - Matrix containing the predicted values
    /// - `target` - Matrix containing the ground truth values
    ///
    /// # Returns
    ///
    /// - `Ok(Matrix)` - The loss as a 1×1 matrix
    /// - `Err(ModelError::ShapeMismatch)` - If the shapes differ
    fn compute_loss(&self, prediction: &Matrix, target: &Matrix) -> Result<Matrix, ModelError>;

    /// Computes the gradient of the loss with respect to the predictions.
    ///
    /// # Parameters
    ///
    /// - `prediction` - Matrix containing the predicted values
    /// - `target` - Matrix containing the ground truth values
    ///
    /// # Returns
    ///
    /// - `Ok(Matrix)` - Gradient with the shape of `prediction`
    /// - `Err(ModelError::ShapeMismatch)` - If the shapes differ
    fn compute_grad(&self, prediction: &Matrix, target: &Matrix) -> Result<Matrix, ModelError>;

    /// Name of the loss function
    fn name(&self) -> &str {
        "Unknown"
    }
}
