/// Module that contains activation function implementations
pub mod activation;
/// Module that contains neural network layer implementations
pub mod layer;
/// Module that contains loss function implementations
pub mod loss_function;
/// Module that contains the layer and loss function traits
pub mod neural_network_trait;
/// Module that contains training status reporters
pub mod reporter;
/// Module that contains implementations for sequential model architecture
pub mod sequential;
/// Module that contains model summaries
pub mod summary;
/// Module that contains training configuration and history
pub mod training;

pub use activation::*;
pub use layer::*;
pub use loss_function::*;
pub use neural_network_trait::*;
pub use reporter::*;
pub use sequential::*;
pub use summary::*;
pub use training::*;
