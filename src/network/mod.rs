pub mod config;
pub mod model;
pub mod network;

pub use config::NetworkConfig;
pub use model::SerializedModel;
pub use network::Network;
