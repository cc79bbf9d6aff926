use crate::{
    data::sample::Sample,
    error::Result,
    loss::squared_error::SquaredError,
    network::network::Network,
};

/// Trains on every sample once, in order, and returns the mean squared error
/// observed before each update. Returns 0.0 for an empty slice.
///
/// Stops at the first sample whose vectors do not fit the network; samples
/// before it have already been trained on.
pub fn train_epoch(network: &mut Network, samples: &[Sample]) -> Result<f64> {
    if samples.is_empty() {
        return Ok(0.0);
    }

    let mut total_loss = 0.0;

    for sample in samples {
        let output = network.try_query(&sample.features)?;
        total_loss += SquaredError::loss(&output, &sample.target);

        network.try_train(&sample.features, &sample.target)?;
    }

    Ok(total_loss / samples.len() as f64)
}

/// Fraction of samples whose strongest output matches the label.
pub fn evaluate(network: &Network, samples: &[Sample]) -> Result<f64> {
    if samples.is_empty() {
        return Ok(0.0);
    }
    let mut correct = 0usize;
    for sample in samples {
        if argmax(&network.try_query(&sample.features)?) == sample.label {
            correct += 1;
        }
    }
    Ok(correct as f64 / samples.len() as f64)
}

/// Index of the maximum element; the first one wins ties. 0 for an empty slice.
pub fn argmax(v: &[f64]) -> usize {
    let mut best = 0;
    for (i, &x) in v.iter().enumerate() {
        if x > v[best] {
            best = i;
        }
    }
    best
}
