/// Error types shared by every module
pub mod error;

pub use error::{IoError, ModelError};

/// Module `matrix` provides the dense matrix every other component is built on.
///
/// # Core Components
///
/// - **Matrix**: Row-major `f64` matrix with element access, coordinate-wise `map`,
///   element-wise `apply`, axis and whole-matrix `reduce`, `transpose` and `randomize`
/// - **ReduceAxis**: Selects per-row (R×1) or per-column (1×C) folding
/// - **matrices**: Shape-checked `dot`, `add`, `sub` and `mul` returning
///   `ModelError::ShapeMismatch` on incompatible operands
/// - **persistence**: Bit-exact binary blobs (`to_bytes`, `save`, `load`) and serde support
/// - **describe**: Summary statistics and a printable layout
///
/// # Example
/// ```rust
/// use rustynet::matrix::*;
///
/// let a = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
/// let b = a.transpose();
///
/// let product = dot(&a, &b).unwrap();
/// assert_eq!(product.shape(), (2, 2));
/// assert_eq!(product.get(0, 0), 14.0);
///
/// // Element-wise operations need identical shapes
/// assert!(add(&a, &b).is_err());
/// ```
pub mod matrix;

/// Components for building and training small fully-connected networks.
///
/// # Core Components
///
/// ## Layer Types
/// - **Dense**: Fully connected layer with an activation function
///
/// ## Activations
/// - **Activation**: Linear, ReLU, Sigmoid, Tanh and Softmax, each with its derivative
///
/// ## Loss Functions
/// - **MeanSquaredError**: For regression tasks
///
/// ## Model Architecture
/// - **Sequential**: Ordered stack of layers with forward activation and full-batch
///   backpropagation training
/// - **TrainingConfig**: Epoch count and learning rate
/// - **TrainingReporter**: Receiver of the periodic `(epoch, loss)` status
///
/// # Examples
/// ```rust
/// use rustynet::matrix::Matrix;
/// use rustynet::neural_network::*;
///
/// let x = Matrix::from_vec(2, 4, vec![1.0; 8]).unwrap();
/// let y = Matrix::from_vec(2, 1, vec![1.0, 1.0]).unwrap();
///
/// let mut model = Sequential::new(vec![
///     Box::new(Dense::new(3, Activation::ReLU).unwrap()) as Box<dyn Layer>,
///     Box::new(Dense::new(1, Activation::Linear).unwrap()),
/// ])
/// .unwrap();
///
/// // Summaries need built layers
/// assert!(model.summary().is_err());
///
/// model.build_with_seed(4, 0).unwrap();
/// model
///     .train(&x, &y, &MeanSquaredError::new(), &TrainingConfig::new(20, 0.01).unwrap())
///     .unwrap();
///
/// let predictions = model.predict(&x).unwrap();
/// assert_eq!(predictions.shape(), (2, 1));
/// ```
#[cfg(feature = "neural_network")]
pub mod neural_network;

/// Synthetic input/target batches for experiments and tests.
///
/// # Examples
/// ```rust
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use rustynet::dataset::Dataset;
///
/// let dataset = Dataset::generate_sum(100, 2, 32, &mut StdRng::seed_from_u64(3)).unwrap();
/// for (input, target) in dataset.iter() {
///     assert_eq!(input.rows(), target.rows());
/// }
/// ```
#[cfg(feature = "dataset")]
pub mod dataset;

/// A convenience module that re-exports the most commonly used types and traits from this crate.
///
/// # Examples
/// ```rust
/// use rustynet::prelude::*;
///
/// let identity = Matrix::identity(3);
/// assert_eq!(identity.sum(), 3.0);
/// ```
pub mod prelude;
