pub use crate::error::{IoError, ModelError};
pub use crate::matrix::*;

#[cfg(feature = "dataset")]
pub use crate::dataset::*;
#[cfg(feature = "neural_network")]
pub use crate::neural_network::*;
