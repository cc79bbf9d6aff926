/// Statistics recorded by `train_loop` at the end of every epoch.
#[derive(Debug, Clone, PartialEq)]
pub struct EpochStats {
    /// 1-based epoch number.
    pub epoch: usize,
    /// Total epochs requested for this run.
    pub total_epochs: usize,
    /// Mean squared error over the epoch, each sample measured just before
    /// its update.
    pub train_loss: f64,
    /// Fraction of test samples classified correctly, if a test set was given.
    pub test_accuracy: Option<f64>,
    /// Wall-clock duration of the training pass in milliseconds.
    pub elapsed_ms: u64,
}
