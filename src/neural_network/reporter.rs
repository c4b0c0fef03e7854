use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};

/// Receives the periodic status of a training run.
///
/// `report` is called once every `TrainingConfig::report_interval` epochs with the 1-based
/// epoch index and the loss of that epoch.
pub trait TrainingReporter {
    /// Called once before the first epoch
    fn on_train_begin(&mut self, _epochs: usize) {}

    /// Called with the epoch index and its loss
    fn report(&mut self, epoch: usize, loss: f64);

    /// Called once after the last epoch
    fn on_train_end(&mut self) {}
}

/// Reports through the `log` facade, one `info` record per report.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogReporter;

impl TrainingReporter for LogReporter {
    fn on_train_begin(&mut self, epochs: usize) {
        debug!("Training for {} epochs", epochs);
    }

    fn report(&mut self, epoch: usize, loss: f64) {
        info!("Epoch {} error: {:.8}", epoch, loss);
    }

    fn on_train_end(&mut self) {
        debug!("Training done");
    }
}

/// Drops every report.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentReporter;

impl TrainingReporter for SilentReporter {
    fn report(&mut self, _epoch: usize, _loss: f64) {}
}

/// Terminal progress bar advanced at every report, with the latest loss as its message.
pub struct ProgressBarReporter {
    progress_bar: Option<ProgressBar>,
    last_epoch: usize,
}

impl ProgressBarReporter {
    pub fn new() -> Self {
        Self {
            progress_bar: None,
            last_epoch: 0,
        }
    }
}

impl Default for ProgressBarReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl TrainingReporter for ProgressBarReporter {
    fn on_train_begin(&mut self, epochs: usize) {
        let progress_bar = ProgressBar::new(epochs as u64);
        // Fall back to the default style if the template is rejected
        if let Ok(style) = ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} | Loss: {msg}")
        {
            progress_bar.set_style(style.progress_chars("█▓░"));
        }
        self.progress_bar = Some(progress_bar);
        self.last_epoch = 0;
    }

    fn report(&mut self, epoch: usize, loss: f64) {
        if let Some(progress_bar) = &self.progress_bar {
            progress_bar.set_message(format!("{:.8}", loss));
            progress_bar.inc(epoch.saturating_sub(self.last_epoch) as u64);
        }
        self.last_epoch = epoch;
    }

    fn on_train_end(&mut self) {
        if let Some(progress_bar) = self.progress_bar.take() {
            progress_bar.finish_with_message("Training completed");
        }
    }
}
