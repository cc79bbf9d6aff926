/// Logistic function, `1 / (1 + e^-x)`. Strictly inside (0, 1) for moderate `x`.
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}
