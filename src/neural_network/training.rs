use crate::ModelError;

/// Number of status reports emitted over a full training run
pub const REPORTS_PER_RUN: usize = 10;

/// Settings of a full-batch gradient descent run.
///
/// # Fields
///
/// - `epochs` - Number of forward/backward passes over the batch
/// - `learning_rate` - Step size scaling every weight and bias update
///
/// # Example
/// ```rust
/// use rustynet::neural_network::TrainingConfig;
///
/// let config = TrainingConfig::new(100, 0.01).unwrap();
/// assert_eq!(config.report_interval(), 10);
///
/// // Fewer than ten epochs reports after every epoch
/// assert_eq!(TrainingConfig::new(3, 0.01).unwrap().report_interval(), 1);
///
/// assert!(TrainingConfig::new(10, -0.5).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainingConfig {
    epochs: usize,
    learning_rate: f64,
}

impl TrainingConfig {
    /// Creates a new training configuration.
    ///
    /// # Parameters
    ///
    /// - `epochs` - Number of epochs, 0 leaves the model untouched
    /// - `learning_rate` - Step size for parameter updates
    ///
    /// # Returns
    ///
    /// - `Ok(TrainingConfig)` - The validated configuration
    /// - `Err(ModelError::InputValidationError)` - If the learning rate is not positive and finite
    pub fn new(epochs: usize, learning_rate: f64) -> Result<Self, ModelError> {
        if !(learning_rate > 0.0 && learning_rate.is_finite()) {
            return Err(ModelError::InputValidationError(format!(
                "learning_rate must be positive and finite, got {}",
                learning_rate
            )));
        }

        Ok(Self {
            epochs,
            learning_rate,
        })
    }

    /// Number of epochs
    pub fn epochs(&self) -> usize {
        self.epochs
    }

    /// Learning rate
    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    /// Epoch interval between two status reports: `epochs / 10`, or every epoch when that
    /// division would be zero.
    pub fn report_interval(&self) -> usize {
        (self.epochs / REPORTS_PER_RUN).max(1)
    }

    /// Whether a report is due after the 1-based `epoch`
    pub fn should_report(&self, epoch: usize) -> bool {
        epoch % self.report_interval() == 0
    }
}

/// Loss reported after one epoch.
///
/// # Fields
///
/// - `epoch` - 1-based index of the epoch
/// - `loss` - Loss of the epoch's forward pass (cell (0, 0) of the loss matrix)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpochReport {
    pub epoch: usize,
    pub loss: f64,
}

/// Every report emitted during one training run, in epoch order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrainingHistory {
    reports: Vec<EpochReport>,
}

impl TrainingHistory {
    pub(crate) fn push(&mut self, report: EpochReport) {
        self.reports.push(report);
    }

    /// Reports in epoch order
    pub fn reports(&self) -> &[EpochReport] {
        &self.reports
    }

    /// Reported loss values in epoch order
    pub fn losses(&self) -> Vec<f64> {
        self.reports.iter().map(|report| report.loss).collect()
    }

    /// Loss of the last report, if any
    pub fn last_loss(&self) -> Option<f64> {
        self.reports.last().map(|report| report.loss)
    }

    /// Number of reports
    pub fn len(&self) -> usize {
        self.reports.len()
    }

    /// Whether nothing was reported
    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    /// Iterates over the reports in epoch order
    pub fn iter(&self) -> std::slice::Iter<'_, EpochReport> {
        self.reports.iter()
    }
}
