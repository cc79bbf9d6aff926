use std::time::Instant;

use log::{debug, info};

use crate::data::sample::Sample;
use crate::error::Result;
use crate::network::network::Network;
use crate::train::epoch_stats::EpochStats;
use crate::train::train_config::TrainConfig;
use crate::train::trainer::{evaluate, train_epoch};

/// Trains `network` for `config.epochs` epochs, evaluating on `test` after
/// each one when given, and returns one [`EpochStats`] per epoch.
///
/// The first sample that does not fit the network aborts the run.
pub fn train_loop(
    network: &mut Network,
    train: &[Sample],
    test: Option<&[Sample]>,
    config: &TrainConfig,
) -> Result<Vec<EpochStats>> {
    let mut history = Vec::with_capacity(config.epochs);

    for epoch in 1..=config.epochs {
        debug!("epoch {} training started on {} samples", epoch, train.len());
        let t_start = Instant::now();

        let train_loss = train_epoch(network, train)?;

        let elapsed_ms = t_start.elapsed().as_millis() as u64;

        let test_accuracy = test.map(|samples| evaluate(network, samples)).transpose()?;

        let stats = EpochStats {
            epoch,
            total_epochs: config.epochs,
            train_loss,
            test_accuracy,
            elapsed_ms,
        };
        match stats.test_accuracy {
            Some(accuracy) => info!(
                "epoch {}/{}: loss {:.6}, test accuracy {:.2}% ({} ms)",
                epoch, config.epochs, train_loss, accuracy * 100.0, elapsed_ms
            ),
            None => info!(
                "epoch {}/{}: loss {:.6} ({} ms)",
                epoch, config.epochs, train_loss, elapsed_ms
            ),
        }
        history.push(stats);
    }

    Ok(history)
}
