use super::*;
use crate::error::{IoError, ModelError};
use crate::matrix::{Matrix, dot, mul, scale};
use log::debug;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use serde_json::{from_reader, to_writer_pretty};
use std::fs::File;
use std::io::{BufWriter, Write};

/// A Sequential neural network model for building and training feedforward networks.
///
/// Layers are stacked in a fixed order: each layer feeds its output to the next one. All
/// learned state lives in the layers; the model only orders them and drives the forward pass
/// and the backpropagation loop.
///
/// A model is either unbuilt (no layer has parameters) or built (every layer has them).
/// `build` performs the transition once; there is no way back.
///
/// # Fields
///
/// * `layers` - The layers in forward order, stored as boxed trait objects
///
/// # Example
/// ```rust
/// use rustynet::matrix::Matrix;
/// use rustynet::neural_network::*;
///
/// // Four samples with two features, target is the sum of the features
/// let x = Matrix::from_vec(4, 2, vec![0.1, 0.2, 0.3, 0.1, 0.2, 0.2, 0.4, 0.3]).unwrap();
/// let y = Matrix::from_vec(4, 1, vec![0.3, 0.4, 0.4, 0.7]).unwrap();
///
/// let mut model = Sequential::new(vec![
///     Box::new(Dense::new(3, Activation::Sigmoid).unwrap()) as Box<dyn Layer>,
///     Box::new(Dense::new(1, Activation::Linear).unwrap()),
/// ])
/// .unwrap();
/// model.build_with_seed(2, 42).unwrap();
///
/// let config = TrainingConfig::new(50, 0.01).unwrap();
/// let history = model
///     .train_with_reporter(&x, &y, &MeanSquaredError::new(), &config, &mut SilentReporter)
///     .unwrap();
/// assert_eq!(history.len(), 10);
///
/// let prediction = model.predict(&x).unwrap();
/// assert_eq!(prediction.shape(), (4, 1));
///
/// println!("{}", model.summary().unwrap());
/// ```
pub struct Sequential {
    layers: Vec<Box<dyn Layer>>,
}

impl Sequential {
    /// Creates a new Sequential model from its layers.
    ///
    /// # Parameters
    ///
    /// * `layers` - The layers in forward order
    ///
    /// # Returns
    ///
    /// - `Ok(Sequential)` - The unbuilt model
    /// - `Err(ModelError::InputValidationError)` - If no layer is given
    pub fn new<I>(layers: I) -> Result<Self, ModelError>
    where
        I: IntoIterator<Item = Box<dyn Layer>>,
    {
        let layers: Vec<Box<dyn Layer>> = layers.into_iter().collect();
        if layers.is_empty() {
            return Err(ModelError::InputValidationError(
                "Layers not specified".to_string(),
            ));
        }
        Ok(Self { layers })
    }

    /// The layers in forward order
    pub fn layers(&self) -> &[Box<dyn Layer>] {
        &self.layers
    }

    /// Number of layers
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Always `false`: a model has at least one layer
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Whether every layer has its parameters
    pub fn is_built(&self) -> bool {
        self.layers.iter().all(|layer| layer.is_built())
    }

    /// Creates the parameters of every layer for inputs with `input_features` columns.
    ///
    /// Layer `k + 1` is built for the output feature count of layer `k`. Calling `build` again
    /// with the same feature count is a no-op.
    ///
    /// # Parameters
    ///
    /// - `input_features` - Number of columns of the model input
    /// - `rng` - Random source for parameter initialization
    ///
    /// # Returns
    ///
    /// - `Ok(&mut Self)` - The built model, for method chaining
    /// - `Err(ModelError::BuildConflict)` - A layer was already built for another feature count
    pub fn build<R>(&mut self, input_features: usize, rng: &mut R) -> Result<&mut Self, ModelError>
    where
        R: RngCore,
    {
        let mut features = input_features;
        for layer in &mut self.layers {
            layer.build(features, rng)?;
            features = layer.output_features();
        }

        debug!(
            "Built sequential model: {} layers, {} input features",
            self.layers.len(),
            input_features
        );
        Ok(self)
    }

    /// Builds the model with a `StdRng` seeded from `seed`, for reproducible runs.
    pub fn build_with_seed(
        &mut self,
        input_features: usize,
        seed: u64,
    ) -> Result<&mut Self, ModelError> {
        let mut rng = StdRng::seed_from_u64(seed);
        self.build(input_features, &mut rng)
    }

    /// Runs the forward pass and keeps every intermediate activation.
    ///
    /// # Parameters
    ///
    /// * `input` - Input batch with one sample per row
    ///
    /// # Returns
    ///
    /// - `Ok(Vec<Matrix>)` - `[input, layer_1(input), ..., layer_n(...)]`, one entry per layer
    ///   plus the input, in forward order
    /// - `Err(ModelError::NotBuilt)` - If the model has not been built
    /// - `Err(ModelError::ShapeMismatch)` - If the input feature count does not fit
    pub fn activate(&self, input: &Matrix) -> Result<Vec<Matrix>, ModelError> {
        let mut activations = Vec::with_capacity(self.layers.len() + 1);
        activations.push(input.clone());

        for (l, layer) in self.layers.iter().enumerate() {
            let next = layer.forward(&activations[l])?;
            activations.push(next);
        }

        Ok(activations)
    }

    /// Generates predictions for the input data
    ///
    /// # Parameters
    ///
    /// * `input` - Input batch with one sample per row
    ///
    /// # Returns
    ///
    /// - `Ok(Matrix)` - Output of the last layer
    /// - `Err(ModelError)` - Same conditions as `activate`
    pub fn predict(&self, input: &Matrix) -> Result<Matrix, ModelError> {
        let mut output = input.clone();
        for layer in &self.layers {
            output = layer.forward(&output)?;
        }
        Ok(output)
    }

    /// Validates the model state and the training batch
    fn validate_training_inputs(&self, input: &Matrix, target: &Matrix) -> Result<(), ModelError> {
        if !self.is_built() {
            return Err(ModelError::NotBuilt);
        }

        if input.size() == 0 || target.size() == 0 {
            return Err(ModelError::InputValidationError(
                "Input matrices cannot be empty".to_string(),
            ));
        }

        if input.rows() != target.rows() {
            return Err(ModelError::InputValidationError(format!(
                "Batch size mismatch: input has {} samples, target has {} samples",
                input.rows(),
                target.rows()
            )));
        }

        Ok(())
    }

    /// Trains the model on one batch, reporting through the `log` facade.
    ///
    /// See `train_with_reporter`.
    pub fn train(
        &mut self,
        input: &Matrix,
        target: &Matrix,
        loss: &dyn LossFunction,
        config: &TrainingConfig,
    ) -> Result<TrainingHistory, ModelError> {
        self.train_with_reporter(input, target, loss, config, &mut LogReporter)
    }

    /// Trains the model with full-batch gradient descent.
    ///
    /// Every epoch runs the forward pass, computes the output delta from the loss gradient,
    /// and walks the layers backward: each layer's delta is derived from the next one before
    /// that layer's weights and biases are updated in place. Every
    /// `config.report_interval()` epochs the loss is handed to `reporter` and recorded in the
    /// returned history.
    ///
    /// # Parameters
    ///
    /// - `input` - Input batch with one sample per row
    /// - `target` - Expected outputs, one row per input row
    /// - `loss` - Loss function providing the value and the output gradient
    /// - `config` - Epoch count and learning rate
    /// - `reporter` - Receiver of the periodic `(epoch, loss)` status
    ///
    /// # Returns
    ///
    /// - `Ok(TrainingHistory)` - Every reported `(epoch, loss)`
    /// - `Err(ModelError)` - The first failing operation. Updates already applied in the
    ///   failing epoch are kept.
    pub fn train_with_reporter(
        &mut self,
        input: &Matrix,
        target: &Matrix,
        loss: &dyn LossFunction,
        config: &TrainingConfig,
        reporter: &mut dyn TrainingReporter,
    ) -> Result<TrainingHistory, ModelError> {
        self.validate_training_inputs(input, target)?;

        let learning_rate = config.learning_rate();
        let mut history = TrainingHistory::default();

        reporter.on_train_begin(config.epochs());

        for epoch in 1..=config.epochs() {
            let activations = self.activate(input)?;
            let prediction = &activations[self.layers.len()];

            let last_layer = &self.layers[self.layers.len() - 1];
            let mut delta = mul(
                &loss.compute_grad(prediction, target)?,
                &last_layer.local_derivative(prediction)?,
            )?;

            for (l, layer) in self.layers.iter_mut().enumerate().rev() {
                let weights = layer.weights().ok_or(ModelError::NotBuilt)?;

                // Delta of this layer, from the weights before they are updated
                let previous_delta = mul(
                    &dot(&delta, &weights.transpose())?,
                    &layer.local_derivative(&activations[l])?,
                )?;

                let weight_delta = scale(&dot(&activations[l].transpose(), &delta)?, learning_rate);
                let bias_shift = delta.avg() * learning_rate;
                layer.apply_gradient(&weight_delta, bias_shift)?;

                delta = previous_delta;
            }

            if config.should_report(epoch) {
                let loss_value = loss.compute_loss(prediction, target)?.peek();
                reporter.report(epoch, loss_value);
                history.push(EpochReport {
                    epoch,
                    loss: loss_value,
                });
            }
        }

        reporter.on_train_end();

        Ok(history)
    }

    /// Collects the type name and parameter count of every layer.
    ///
    /// # Returns
    ///
    /// - `Ok(ModelSummary)` - One entry per layer plus the total parameter count
    /// - `Err(ModelError::NotBuilt)` - If any layer has no parameters yet
    pub fn summary(&self) -> Result<ModelSummary, ModelError> {
        let layers = self
            .layers
            .iter()
            .map(|layer| -> Result<LayerSummary, ModelError> {
                Ok(LayerSummary {
                    layer_type: layer.layer_type().to_string(),
                    param_count: layer.param_count()?,
                })
            })
            .collect::<Result<Vec<_>, ModelError>>()?;

        Ok(ModelSummary::new(layers))
    }

    /// Saves the weights and biases of every layer to a JSON file at the specified path.
    ///
    /// # Parameters
    ///
    /// * `path` - File path where the model will be saved (e.g., "stored_model.json")
    ///
    /// # Returns
    ///
    /// - `Ok(())` - Model successfully saved to file
    /// - `Err(IoError::Model)` - The model has not been built
    /// - `Err(IoError::StdIoError)` - File creation or write operation failed
    /// - `Err(IoError::JsonError)` - Serialization to JSON failed
    pub fn save_to_path(&self, path: &str) -> Result<(), IoError> {
        let layers = self
            .layers
            .iter()
            .map(|layer| SerializableLayer::from_layer(&**layer))
            .collect::<Result<Vec<_>, ModelError>>()
            .map_err(IoError::Model)?;

        let serializable_model = SerializableSequential { layers };

        let file = File::create(path).map_err(IoError::StdIoError)?;
        let mut writer = BufWriter::new(file);

        to_writer_pretty(&mut writer, &serializable_model).map_err(IoError::JsonError)?;

        // Ensure all data is written to disk
        writer.flush().map_err(IoError::StdIoError)?;

        Ok(())
    }

    /// Loads weights and biases from a JSON file written by `save_to_path`.
    ///
    /// The model must have the same number and types of layers as the saved one, and the
    /// stored layers must chain. Unbuilt layers are built from the stored shapes. A rejected
    /// file leaves every layer unchanged.
    ///
    /// # Parameters
    ///
    /// * `path` - File path from which to load the weights (e.g., "stored_model.json")
    ///
    /// # Returns
    ///
    /// - `Ok(())` - Successfully loaded weights into the model
    /// - `Err(IoError::StdIoError)` - File not found or read operation failed
    /// - `Err(IoError::JsonError)` - Deserialization from JSON failed
    /// - `Err(IoError::InvalidFormat)` - Layer count, layer type or stored shapes differ, or
    ///   the stored layers do not chain
    /// - `Err(IoError::Model)` - A built layer has another input feature count
    pub fn load_from_path(&mut self, path: &str) -> Result<(), IoError> {
        let reader = IoError::load_in_buf_reader(path)?;

        let serializable_model: SerializableSequential =
            from_reader(reader).map_err(IoError::JsonError)?;

        // Nothing is applied unless the whole file fits the model
        serializable_model.validate_for(&self.layers)?;

        for (layer, stored) in self.layers.iter_mut().zip(&serializable_model.layers) {
            stored.apply_to_layer(&mut **layer)?;
        }

        Ok(())
    }
}
