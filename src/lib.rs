pub mod activation;
pub mod data;
pub mod error;
pub mod loss;
pub mod math;
pub mod network;
pub mod optim;
pub mod train;

// Convenience re-exports
pub use math::matrix::Matrix;
pub use activation::sigmoid;
pub use data::sample::{load_samples, Sample};
pub use error::{NetError, Result};
pub use network::config::NetworkConfig;
pub use network::model::SerializedModel;
pub use network::network::Network;
pub use loss::squared_error::SquaredError;
pub use optim::sgd::Sgd;
pub use train::{evaluate, train_epoch, train_loop, TrainConfig};
