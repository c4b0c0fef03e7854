use crate::error::{IoError, ModelError};
use crate::matrix::Matrix;
use crate::neural_network::Layer;
use serde::{Deserialize, Serialize};

/// Serializable parameters of one layer.
///
/// # Fields
///
/// - `layer_type` - Type name of the layer the parameters belong to (e.g. "Dense")
/// - `weights` - Weight matrix
/// - `biases` - Bias matrix
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerializableLayer {
    pub layer_type: String,
    pub weights: Matrix,
    pub biases: Matrix,
}

/// Serializable form of a whole sequential model: its layers in forward order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerializableSequential {
    pub layers: Vec<SerializableLayer>,
}

impl SerializableLayer {
    /// Copies the parameters of a built layer.
    ///
    /// # Parameters
    ///
    /// - `layer` - Layer to copy the parameters from
    ///
    /// # Returns
    ///
    /// - `Ok(SerializableLayer)` - Owned copy of the layer parameters
    /// - `Err(ModelError::NotBuilt)` - If the layer has no parameters yet
    pub fn from_layer(layer: &dyn Layer) -> Result<Self, ModelError> {
        match (layer.weights(), layer.biases()) {
            (Some(weights), Some(biases)) => Ok(Self {
                layer_type: layer.layer_type().to_string(),
                weights: weights.clone(),
                biases: biases.clone(),
            }),
            _ => Err(ModelError::NotBuilt),
        }
    }

    /// Checks that the stored parameters fit `layer` without touching it.
    ///
    /// # Parameters
    ///
    /// - `layer` - Layer that would receive the parameters
    ///
    /// # Returns
    ///
    /// - `Ok(())` - `apply_to_layer` will succeed on this layer
    /// - `Err(IoError::InvalidFormat)` - Layer type or parameter shapes differ from the layer
    /// - `Err(IoError::Model)` - The layer is built for another input feature count
    pub fn validate_for(&self, layer: &dyn Layer) -> Result<(), IoError> {
        if layer.layer_type() != self.layer_type {
            return Err(IoError::InvalidFormat(format!(
                "Layer type mismatch: model has {}, file has {}",
                layer.layer_type(),
                self.layer_type
            )));
        }

        let neurons = layer.output_features();
        if self.weights.rows() == 0 || self.weights.cols() != neurons {
            return Err(IoError::InvalidFormat(format!(
                "{} layer has {} neurons, stored weights have shape ({}, {})",
                self.layer_type,
                neurons,
                self.weights.rows(),
                self.weights.cols()
            )));
        }

        if self.biases.shape() != (1, neurons) {
            return Err(IoError::InvalidFormat(format!(
                "{} layer has {} neurons, stored biases have shape ({}, {})",
                self.layer_type,
                neurons,
                self.biases.rows(),
                self.biases.cols()
            )));
        }

        match layer.input_features() {
            Some(built) if built != self.weights.rows() => {
                Err(IoError::Model(ModelError::BuildConflict {
                    layer: self.layer_type.clone(),
                    built,
                    requested: self.weights.rows(),
                }))
            }
            _ => Ok(()),
        }
    }

    /// Applies the stored parameters to `layer`.
    ///
    /// # Parameters
    ///
    /// - `layer` - Layer receiving the parameters; must have the same type name
    ///
    /// # Returns
    ///
    /// - `Ok(())` - Parameters applied
    /// - `Err(IoError)` - Same conditions as `validate_for`
    pub fn apply_to_layer(&self, layer: &mut dyn Layer) -> Result<(), IoError> {
        self.validate_for(layer)?;

        layer
            .set_parameters(self.weights.clone(), self.biases.clone())
            .map_err(IoError::Model)
    }
}

impl SerializableSequential {
    /// Checks every stored layer against `layers` and the chaining between stored layers.
    ///
    /// Layer `k + 1` must take as many input features as layer `k` produces.
    ///
    /// # Returns
    ///
    /// - `Ok(())` - Every stored layer can be applied
    /// - `Err(IoError::InvalidFormat)` - Layer count, type, shape or chaining differs
    /// - `Err(IoError::Model)` - A built layer has another input feature count
    pub fn validate_for(&self, layers: &[Box<dyn Layer>]) -> Result<(), IoError> {
        if self.layers.len() != layers.len() {
            return Err(IoError::InvalidFormat(format!(
                "Layer count mismatch: model has {} layers, file has {} layers",
                layers.len(),
                self.layers.len()
            )));
        }

        for (stored, layer) in self.layers.iter().zip(layers) {
            stored.validate_for(&**layer)?;
        }

        for (k, pair) in self.layers.windows(2).enumerate() {
            if pair[1].weights.rows() != pair[0].weights.cols() {
                return Err(IoError::InvalidFormat(format!(
                    "Layer {} outputs {} features but layer {} expects {}",
                    k,
                    pair[0].weights.cols(),
                    k + 1,
                    pair[1].weights.rows()
                )));
            }
        }

        Ok(())
    }
}
