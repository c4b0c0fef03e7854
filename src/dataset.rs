use crate::ModelError;
use crate::matrix::{Matrix, ReduceAxis};
use rand::Rng;

/// Input/target batch pairs with matching row counts.
///
/// # Fields
///
/// - `inputs` - Input batches, one sample per row
/// - `targets` - Target batches, `targets[k]` belongs to `inputs[k]`
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    inputs: Vec<Matrix>,
    targets: Vec<Matrix>,
}

impl Dataset {
    /// Creates a dataset from paired batches.
    ///
    /// # Parameters
    ///
    /// - `inputs` - Input batches
    /// - `targets` - Target batches, one per input batch
    ///
    /// # Returns
    ///
    /// - `Ok(Dataset)` - The paired batches
    /// - `Err(ModelError::InputValidationError)` - If the batch counts differ or a pair has
    ///   different row counts
    pub fn new(inputs: Vec<Matrix>, targets: Vec<Matrix>) -> Result<Self, ModelError> {
        if inputs.len() != targets.len() {
            return Err(ModelError::InputValidationError(format!(
                "Dataset has {} input batches but {} target batches",
                inputs.len(),
                targets.len()
            )));
        }

        if let Some((k, (input, target))) = inputs
            .iter()
            .zip(&targets)
            .enumerate()
            .find(|(_, (input, target))| input.rows() != target.rows())
        {
            return Err(ModelError::InputValidationError(format!(
                "Batch {}: input has {} samples, target has {} samples",
                k,
                input.rows(),
                target.rows()
            )));
        }

        Ok(Self { inputs, targets })
    }

    /// Generates a two-class "sign of the sum" dataset.
    ///
    /// Inputs are drawn uniformly from `[-1, 1)`. Each target row is `[1, 0]` when the sum of
    /// the input row is positive and `[0, 1]` otherwise. `samples` is split into
    /// `samples / batch_size` full batches plus one smaller batch for the remainder.
    ///
    /// # Parameters
    ///
    /// - `samples` - Total number of samples
    /// - `features` - Number of input columns
    /// - `batch_size` - Rows per batch
    /// - `rng` - Random source for the inputs
    ///
    /// # Returns
    ///
    /// - `Ok(Dataset)` - The generated batches
    /// - `Err(ModelError::InputValidationError)` - If `features` or `batch_size` is 0
    ///
    /// # Example
    /// ```rust
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use rustynet::dataset::Dataset;
    ///
    /// let dataset = Dataset::generate_sum(10, 3, 4, &mut StdRng::seed_from_u64(1)).unwrap();
    /// assert_eq!(dataset.len(), 3);
    /// assert_eq!(dataset.inputs()[2].shape(), (2, 3));
    /// assert_eq!(dataset.targets()[0].shape(), (4, 2));
    /// ```
    pub fn generate_sum<R>(
        samples: usize,
        features: usize,
        batch_size: usize,
        rng: &mut R,
    ) -> Result<Self, ModelError>
    where
        R: Rng + ?Sized,
    {
        if features == 0 || batch_size == 0 {
            return Err(ModelError::InputValidationError(format!(
                "features and batch_size must be positive, got {} and {}",
                features, batch_size
            )));
        }

        let full_batches = samples / batch_size;
        let remainder = samples % batch_size;
        let batch_sizes = std::iter::repeat_n(batch_size, full_batches)
            .chain((remainder > 0).then_some(remainder));

        let mut inputs = Vec::new();
        let mut targets = Vec::new();

        for rows in batch_sizes {
            let mut input = Matrix::zeros(rows, features);
            input.randomize(-1.0, 1.0, rng)?;

            let row_sum = input.reduce_axis(ReduceAxis::Rows, 0.0, |acc, x| acc + x);
            let mut target = Matrix::zeros(rows, 2);
            target.map(|i, j| {
                let class = if row_sum.get(i, 0) > 0.0 { 0 } else { 1 };
                if j == class { 1.0 } else { 0.0 }
            });

            inputs.push(input);
            targets.push(target);
        }

        Ok(Self { inputs, targets })
    }

    /// Input batches
    pub fn inputs(&self) -> &[Matrix] {
        &self.inputs
    }

    /// Target batches, in the order of `inputs`
    pub fn targets(&self) -> &[Matrix] {
        &self.targets
    }

    /// Number of batches
    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    /// Whether the dataset has no batches
    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    /// Iterates over `(input, target)` batch pairs
    pub fn iter(&self) -> impl Iterator<Item = (&Matrix, &Matrix)> + '_ {
        self.inputs.iter().zip(&self.targets)
    }
}
