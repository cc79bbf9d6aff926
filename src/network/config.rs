/// Layer sizes and learning rate of a three-layer network.
///
/// Fixed once built; a different shape means a different network.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NetworkConfig {
    input_nodes: usize,
    hidden_nodes: usize,
    output_nodes: usize,
    learning_rate: f64,
}

impl NetworkConfig {
    /// Node counts must be positive; this is the caller's responsibility.
    pub fn new(input_nodes: usize, hidden_nodes: usize, output_nodes: usize, learning_rate: f64) -> Self {
        NetworkConfig {
            input_nodes,
            hidden_nodes,
            output_nodes,
            learning_rate,
        }
    }

    pub fn input_nodes(&self) -> usize {
        self.input_nodes
    }

    pub fn hidden_nodes(&self) -> usize {
        self.hidden_nodes
    }

    pub fn output_nodes(&self) -> usize {
        self.output_nodes
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }
}
