/// Dense (fully connected) layer
pub mod dense;
/// Serializable layer parameters used to save and load models
pub mod serialize_weight;

pub use dense::*;
pub use serialize_weight::*;
