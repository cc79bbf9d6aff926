use crate::math::matrix::Matrix;

/// Plain stochastic gradient descent for sigmoid layers, one example per step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sgd {
    pub learning_rate: f64,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> Sgd {
        Sgd { learning_rate }
    }

    /// Weight change for one sigmoid layer:
    /// `lr * (errors ⊙ outputs ⊙ (1 - outputs)) · inputsᵀ`.
    ///
    /// `outputs` are the activations the layer produced, `inputs` the
    /// activations that fed it. The factor 2 of the squared-error derivative
    /// is folded into the learning rate.
    pub fn delta(&self, errors: &Matrix, outputs: &Matrix, inputs: &Matrix) -> Matrix {
        let lr = self.learning_rate;
        let gradient = errors
            .hadamard(outputs)
            .hadamard(&outputs.map(|v| 1.0 - v));
        (&gradient * &inputs.transpose()).map(|v| v * lr)
    }

    /// Adds the delta for one layer to `weights` in place.
    pub fn step(&self, weights: &mut Matrix, errors: &Matrix, outputs: &Matrix, inputs: &Matrix) {
        *weights += &self.delta(errors, outputs, inputs);
    }
}
