use crate::ModelError;
use crate::matrix::{Matrix, add_row, dot, sub};
use crate::neural_network::{Activation, Layer};
use rand::RngCore;

/// Lower bound of the uniform parameter initialization
const INIT_LOW: f64 = -1.0;
/// Upper (exclusive) bound of the uniform parameter initialization
const INIT_HIGH: f64 = 1.0;

/// Dense (Fully Connected) layer implementation for neural networks.
///
/// Every input feature is connected to every neuron through a learned weight. The
/// transformation is `output = activation(input · weights + bias)`, with the bias row added
/// to every row of the batch.
///
/// The input feature count is unknown until the layer is built, so weights and biases are
/// absent until `build` draws them uniformly from `[-1, 1)`.
///
/// # Dimensions
///
/// - Input shape: (batch_size, input_features)
/// - Weights: (input_features, neurons)
/// - Bias: (1, neurons)
/// - Output shape: (batch_size, neurons)
///
/// # Example
/// ```rust
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use rustynet::matrix::Matrix;
/// use rustynet::neural_network::{Activation, Dense, Layer};
///
/// let mut dense = Dense::new(3, Activation::ReLU).unwrap();
/// dense.build(4, &mut StdRng::seed_from_u64(7)).unwrap();
///
/// let output = dense.forward(&Matrix::filled(2, 4, 1.0)).unwrap();
/// assert_eq!(output.shape(), (2, 3));
/// assert_eq!(dense.param_count().unwrap(), 4 * 3 + 3);
/// ```
#[derive(Debug, Clone)]
pub struct Dense {
    /// Number of neurons (output features)
    neurons: usize,
    /// Activation function for the layer
    activation: Activation,
    /// Weight matrix with shape (input_features, neurons)
    weights: Option<Matrix>,
    /// Bias matrix with shape (1, neurons)
    biases: Option<Matrix>,
}

impl Dense {
    /// Creates a new, unbuilt dense layer.
    ///
    /// # Parameters
    ///
    /// - `neurons` - Number of output features
    /// - `activation` - Activation function applied to the layer output
    ///
    /// # Returns
    ///
    /// - `Ok(Dense)` - A new Dense layer instance
    /// - `Err(ModelError::InputValidationError)` - If `neurons` is 0
    pub fn new(neurons: usize, activation: Activation) -> Result<Self, ModelError> {
        if neurons == 0 {
            return Err(ModelError::InputValidationError(String::from(
                "Dense layer needs at least one neuron",
            )));
        }

        Ok(Self {
            neurons,
            activation,
            weights: None,
            biases: None,
        })
    }

    /// Returns the number of neurons in the layer
    pub fn get_neurons(&self) -> usize {
        self.neurons
    }

    /// Returns the activation function used by this layer
    pub fn get_activation(&self) -> Activation {
        self.activation
    }

    fn parameters_mut(&mut self) -> Result<(&mut Matrix, &mut Matrix), ModelError> {
        match (self.weights.as_mut(), self.biases.as_mut()) {
            (Some(weights), Some(biases)) => Ok((weights, biases)),
            _ => Err(ModelError::NotBuilt),
        }
    }
}

impl Layer for Dense {
    fn build(&mut self, input_features: usize, rng: &mut dyn RngCore) -> Result<(), ModelError> {
        if let Some(built) = self.input_features() {
            if built == input_features {
                return Ok(());
            }
            return Err(ModelError::BuildConflict {
                layer: self.layer_type().to_string(),
                built,
                requested: input_features,
            });
        }

        if input_features == 0 {
            return Err(ModelError::InputValidationError(String::from(
                "Dense layer needs at least one input feature",
            )));
        }

        let mut weights = Matrix::zeros(input_features, self.neurons);
        weights.randomize(INIT_LOW, INIT_HIGH, rng)?;
        let mut biases = Matrix::zeros(1, self.neurons);
        biases.randomize(INIT_LOW, INIT_HIGH, rng)?;

        self.weights = Some(weights);
        self.biases = Some(biases);
        Ok(())
    }

    fn is_built(&self) -> bool {
        self.weights.is_some() && self.biases.is_some()
    }

    fn input_features(&self) -> Option<usize> {
        self.weights.as_ref().map(Matrix::rows)
    }

    fn output_features(&self) -> usize {
        self.neurons
    }

    fn forward(&self, input: &Matrix) -> Result<Matrix, ModelError> {
        let (Some(weights), Some(biases)) = (&self.weights, &self.biases) else {
            return Err(ModelError::NotBuilt);
        };

        let z = add_row(&dot(input, weights)?, biases)?;
        Ok(self.activation.forward(&z))
    }

    fn local_derivative(&self, activated: &Matrix) -> Result<Matrix, ModelError> {
        Ok(self.activation.derivative(activated))
    }

    fn weights(&self) -> Option<&Matrix> {
        self.weights.as_ref()
    }

    fn biases(&self) -> Option<&Matrix> {
        self.biases.as_ref()
    }

    fn apply_gradient(
        &mut self,
        weight_delta: &Matrix,
        bias_shift: f64,
    ) -> Result<(), ModelError> {
        let (weights, biases) = self.parameters_mut()?;

        *weights = sub(weights, weight_delta)?;
        biases.apply(|b| b - bias_shift);
        Ok(())
    }

    fn set_parameters(&mut self, weights: Matrix, biases: Matrix) -> Result<(), ModelError> {
        if weights.cols() != self.neurons {
            return Err(ModelError::InputValidationError(format!(
                "Dense layer has {} neurons but the weights have {} columns",
                self.neurons,
                weights.cols()
            )));
        }

        if biases.shape() != (1, self.neurons) {
            return Err(ModelError::shape_mismatch(
                "set_parameters",
                (1, self.neurons),
                biases.shape(),
            ));
        }

        if let Some(built) = self.input_features() {
            if built != weights.rows() {
                return Err(ModelError::BuildConflict {
                    layer: self.layer_type().to_string(),
                    built,
                    requested: weights.rows(),
                });
            }
        }

        self.weights = Some(weights);
        self.biases = Some(biases);
        Ok(())
    }

    fn layer_type(&self) -> &str {
        "Dense"
    }
}
