use std::fs::File;
use std::io::BufReader;

/// Error types that can occur during matrix and model operations
///
/// # Variants
///
/// - `ShapeMismatch` - Two operands have dimensions incompatible with the requested operation
/// - `NotBuilt` - A layer or model was used before its parameters were created by `build`
/// - `BuildConflict` - A layer was built a second time for a different input feature count
/// - `InputValidationError` - The input data or arguments do not meet the expected format or rules
#[derive(Debug, Clone, PartialEq)]
pub enum ModelError {
    ShapeMismatch {
        operation: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },
    NotBuilt,
    BuildConflict {
        layer: String,
        built: usize,
        requested: usize,
    },
    InputValidationError(String),
}

impl ModelError {
    /// Builds a `ShapeMismatch` from the two operand shapes.
    pub(crate) fn shape_mismatch(
        operation: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    ) -> Self {
        ModelError::ShapeMismatch {
            operation,
            left,
            right,
        }
    }
}

impl std::fmt::Display for ModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelError::ShapeMismatch {
                operation,
                left,
                right,
            } => write!(
                f,
                "Shape mismatch in {}, a = ({}, {}) and b = ({}, {})",
                operation, left.0, left.1, right.0, right.1
            ),
            ModelError::NotBuilt => write!(
                f,
                "Model not built. Call `build` before running the model or requesting a summary."
            ),
            ModelError::BuildConflict {
                layer,
                built,
                requested,
            } => write!(
                f,
                "{} layer was built for {} input features and cannot be rebuilt for {}",
                layer, built, requested
            ),
            ModelError::InputValidationError(msg) => write!(f, "Input validation error: {}", msg),
        }
    }
}

impl std::error::Error for ModelError {}

/// Input/Output error types that can occur during matrix and model persistence
///
/// # Variants
///
/// - `StdIoError` - Wraps standard I/O errors from file system operations
/// - `JsonError` - Wraps JSON serialization/deserialization errors
/// - `InvalidFormat` - The byte stream is not a valid matrix blob
/// - `Model` - The loaded data does not fit the model it is applied to
#[derive(Debug)]
pub enum IoError {
    StdIoError(std::io::Error),
    JsonError(serde_json::Error),
    InvalidFormat(String),
    Model(ModelError),
}

impl IoError {
    pub fn load_in_buf_reader(path: &str) -> Result<BufReader<File>, IoError> {
        let file = File::open(path).map_err(IoError::StdIoError)?;
        Ok(BufReader::new(file))
    }
}

impl std::fmt::Display for IoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IoError::StdIoError(e) => write!(f, "IO error: {}", e),
            IoError::JsonError(e) => write!(f, "JSON error: {}", e),
            IoError::InvalidFormat(msg) => write!(f, "Invalid format: {}", msg),
            IoError::Model(e) => write!(f, "Model error: {}", e),
        }
    }
}

impl std::error::Error for IoError {}
