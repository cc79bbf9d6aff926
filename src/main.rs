use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use digit_net::data::load_samples_from_csv;
use digit_net::{train_loop, Network, NetworkConfig, TrainConfig};

/// Trains and tests a three-layer sigmoid network on MNIST-style CSV files.
///
/// Each CSV row is `label,pixel,pixel,...` with pixels in 0..=255.
#[derive(Debug, Parser)]
#[command(name = "digit-net", version)]
struct Cli {
    /// Input nodes
    #[arg(long, default_value_t = 784)]
    inodes: usize,

    /// Hidden nodes
    #[arg(long, default_value_t = 200)]
    hnodes: usize,

    /// Output nodes
    #[arg(long, default_value_t = 10)]
    onodes: usize,

    /// Learning rate
    #[arg(long, default_value_t = 0.2)]
    lr: f64,

    /// Seed for the initial weights
    #[arg(long, default_value_t = digit_net::network::network::DEFAULT_SEED)]
    seed: u64,

    /// Path to train data
    #[arg(long, default_value = "data/mnist_train.csv")]
    traindata: PathBuf,

    /// Path to test data
    #[arg(long, default_value = "data/mnist_test.csv")]
    testdata: PathBuf,

    /// Path to the model file
    #[arg(long, default_value = "test.net")]
    model: PathBuf,

    /// Save model to file
    #[arg(long)]
    save: bool,

    /// Load model from file
    #[arg(long)]
    load: bool,

    /// Train model
    #[arg(long)]
    train: bool,

    /// Training epochs count
    #[arg(long, default_value_t = 1)]
    epochs: usize,

    /// Test model after every epoch
    #[arg(long)]
    test: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = NetworkConfig::new(cli.inodes, cli.hnodes, cli.onodes, cli.lr);
    let mut network = Network::with_seed(config, cli.seed);

    if cli.load {
        network
            .load(&cli.model)
            .with_context(|| format!("loading model from {}", cli.model.display()))?;
        info!("Model loaded from {}", cli.model.display());
    }

    if cli.train {
        let output_nodes = network.config().output_nodes();
        let train_data = load_samples_from_csv(&cli.traindata, output_nodes)
            .with_context(|| format!("reading train data from {}", cli.traindata.display()))?;
        let test_data = if cli.test {
            let samples = load_samples_from_csv(&cli.testdata, output_nodes)
                .with_context(|| format!("reading test data from {}", cli.testdata.display()))?;
            Some(samples)
        } else {
            None
        };
        info!("Training on {} samples for {} epochs", train_data.len(), cli.epochs);

        let history = train_loop(
            &mut network,
            &train_data,
            test_data.as_deref(),
            &TrainConfig::new(cli.epochs),
        )
        .context("training failed")?;
        if let Some(last) = history.last() {
            info!("Training completed, final mean squared error = {:.6}", last.train_loss);
        }
    }

    if cli.save {
        network
            .save(&cli.model)
            .with_context(|| format!("saving model to {}", cli.model.display()))?;
        info!("Model saved to {}", cli.model.display());
    }

    Ok(())
}
