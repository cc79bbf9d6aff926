use std::path::Path;

use log::debug;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::activation::sigmoid;
use crate::error::{NetError, Result};
use crate::math::matrix::Matrix;
use crate::network::config::NetworkConfig;
use crate::network::model::SerializedModel;
use crate::optim::sgd::Sgd;

/// Seed used by [`Network::new`].
pub const DEFAULT_SEED: u64 = 0;

/// Three-layer sigmoid network: input → hidden → output, no biases.
///
/// The network exclusively owns both weight matrices. `train` updates them in
/// place; `query` only reads them.
#[derive(Debug, Clone, PartialEq)]
pub struct Network {
    config: NetworkConfig,
    /// Shape (hidden, input).
    w_input_hidden: Matrix,
    /// Shape (output, hidden).
    w_hidden_output: Matrix,
}

impl Network {
    /// Builds a network with weights drawn from a generator seeded with
    /// [`DEFAULT_SEED`], so equal configs always start from equal weights.
    pub fn new(config: NetworkConfig) -> Network {
        Network::with_seed(config, DEFAULT_SEED)
    }

    pub fn with_seed(config: NetworkConfig, seed: u64) -> Network {
        Network::with_rng(config, &mut ChaCha8Rng::seed_from_u64(seed))
    }

    /// Fills input → hidden first, then hidden → output, each entry uniform
    /// on [-0.5, 0.5).
    pub fn with_rng<R: Rng>(config: NetworkConfig, rng: &mut R) -> Network {
        let w_input_hidden = Matrix::uniform(config.hidden_nodes(), config.input_nodes(), rng);
        let w_hidden_output = Matrix::uniform(config.output_nodes(), config.hidden_nodes(), rng);
        Network {
            config,
            w_input_hidden,
            w_hidden_output,
        }
    }

    /// Reads a model written by [`Network::save`].
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Network> {
        let (config, w_input_hidden, w_hidden_output) = SerializedModel::read_file(path)?.decode()?;
        Ok(Network {
            config,
            w_input_hidden,
            w_hidden_output,
        })
    }

    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    pub fn w_input_hidden(&self) -> &Matrix {
        &self.w_input_hidden
    }

    pub fn w_hidden_output(&self) -> &Matrix {
        &self.w_hidden_output
    }

    /// Forward pass. Panics if `inputs.len() != input_nodes`.
    pub fn query(&self, inputs: &[f64]) -> Vec<f64> {
        let (_, outputs) = self.forward(&Matrix::column(inputs));
        outputs.to_vec()
    }

    /// Like [`Network::query`] but reports a wrong input length as an error.
    pub fn try_query(&self, inputs: &[f64]) -> Result<Vec<f64>> {
        check_len(self.config.input_nodes(), inputs.len())?;
        Ok(self.query(inputs))
    }

    /// One backpropagation step on a single example.
    ///
    /// Panics if the vector lengths do not match the node counts.
    pub fn train(&mut self, inputs: &[f64], targets: &[f64]) {
        let sgd = Sgd::new(self.config.learning_rate());
        let inputs = Matrix::column(inputs);
        let targets = Matrix::column(targets);

        let (hidden_outputs, final_outputs) = self.forward(&inputs);

        let output_errors = &targets - &final_outputs;
        // Must read the hidden → output weights before they are updated below.
        let hidden_errors = &self.w_hidden_output.transpose() * &output_errors;

        sgd.step(&mut self.w_hidden_output, &output_errors, &final_outputs, &hidden_outputs);
        sgd.step(&mut self.w_input_hidden, &hidden_errors, &hidden_outputs, &inputs);
    }

    /// Like [`Network::train`] but reports wrong vector lengths as errors.
    pub fn try_train(&mut self, inputs: &[f64], targets: &[f64]) -> Result<()> {
        check_len(self.config.input_nodes(), inputs.len())?;
        check_len(self.config.output_nodes(), targets.len())?;
        self.train(inputs, targets);
        Ok(())
    }

    /// Writes the config and both weight matrices to `path`.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        SerializedModel::encode(&self.config, &self.w_input_hidden, &self.w_hidden_output)
            .write_file(path)?;
        debug!("saved {:?} network to {}", self.config, path.display());
        Ok(())
    }

    /// Replaces the config and both weight matrices with the ones stored at
    /// `path`.
    ///
    /// On error the network must be treated as unusable until a later load
    /// succeeds or it is rebuilt.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        let (config, w_input_hidden, w_hidden_output) = SerializedModel::read_file(path)?.decode()?;
        self.config = config;
        self.w_input_hidden = w_input_hidden;
        self.w_hidden_output = w_hidden_output;
        debug!("loaded {:?} network from {}", self.config, path.display());
        Ok(())
    }

    /// Returns `(hidden_outputs, final_outputs)` as column vectors.
    fn forward(&self, inputs: &Matrix) -> (Matrix, Matrix) {
        let hidden_outputs = (&self.w_input_hidden * inputs).map(sigmoid);
        let final_outputs = (&self.w_hidden_output * &hidden_outputs).map(sigmoid);
        (hidden_outputs, final_outputs)
    }
}

fn check_len(expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        return Err(NetError::ShapeMismatch { expected, actual });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny() -> Network {
        let mut net = Network::new(NetworkConfig::new(2, 2, 1, 0.5));
        net.w_input_hidden = Matrix::from_row_major(2, 2, &[0.1, 0.2, -0.3, 0.4]);
        net.w_hidden_output = Matrix::from_row_major(1, 2, &[0.5, -0.6]);
        net
    }

    #[test]
    fn query_matches_manual_forward_pass() {
        let net = tiny();
        let x = [1.0, 0.5];
        let h0 = sigmoid(0.1 * 1.0 + 0.2 * 0.5);
        let h1 = sigmoid(-0.3 * 1.0 + 0.4 * 0.5);
        let expected = sigmoid(0.5 * h0 - 0.6 * h1);
        assert_eq!(net.query(&x), vec![expected]);
    }

    #[test]
    fn train_matches_manual_backprop() {
        let mut net = tiny();
        let x = [1.0, 0.5];
        let t = [0.99];

        let h = [sigmoid(0.1 * 1.0 + 0.2 * 0.5), sigmoid(-0.3 * 1.0 + 0.4 * 0.5)];
        let o = sigmoid(0.5 * h[0] - 0.6 * h[1]);
        let e_out = t[0] - o;
        // Hidden errors use the pre-update output weights.
        let e_hid = [0.5 * e_out, -0.6 * e_out];
        let g_out = e_out * o * (1.0 - o);

        net.train(&x, &t);

        let w_ho = net.w_hidden_output();
        assert!((w_ho.data[0][0] - (0.5 + g_out * h[0] * 0.5)).abs() < 1e-15);
        assert!((w_ho.data[0][1] - (-0.6 + g_out * h[1] * 0.5)).abs() < 1e-15);

        let w_ih = net.w_input_hidden();
        for (j, hj) in h.iter().enumerate() {
            let g = e_hid[j] * hj * (1.0 - hj);
            let before = [[0.1, 0.2], [-0.3, 0.4]][j];
            for (i, xi) in x.iter().enumerate() {
                assert!((w_ih.data[j][i] - (before[i] + g * xi * 0.5)).abs() < 1e-15);
            }
        }
    }

    #[test]
    fn try_variants_reject_wrong_lengths() {
        let mut net = tiny();
        assert!(matches!(
            net.try_query(&[1.0]),
            Err(NetError::ShapeMismatch { expected: 2, actual: 1 })
        ));
        assert!(matches!(
            net.try_train(&[1.0, 0.0], &[0.5, 0.5]),
            Err(NetError::ShapeMismatch { expected: 1, actual: 2 })
        ));
        assert!(net.try_train(&[1.0, 0.0], &[0.5]).is_ok());
    }

    #[test]
    fn different_seeds_give_different_weights() {
        let config = NetworkConfig::new(4, 3, 2, 0.1);
        assert_ne!(Network::with_seed(config, 1), Network::with_seed(config, 2));
        assert_eq!(Network::with_seed(config, DEFAULT_SEED), Network::new(config));
    }
}
