pub struct SquaredError;

impl SquaredError {
    /// Sum of squared differences, `Σ (expected - predicted)²`.
    pub fn loss(predicted: &[f64], expected: &[f64]) -> f64 {
        predicted.iter().zip(expected.iter())
            .map(|(p, e)| (e - p).powi(2))
            .sum()
    }
}
