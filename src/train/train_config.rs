/// Configuration for a `train_loop` run.
///
/// Training is always online: one `Network::train` call per sample, in the
/// order the samples are given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrainConfig {
    /// Total number of full passes over the training data.
    pub epochs: usize,
}

impl TrainConfig {
    pub fn new(epochs: usize) -> Self {
        TrainConfig { epochs }
    }
}
