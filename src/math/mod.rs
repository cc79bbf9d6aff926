pub mod blob;
pub mod matrix;

pub use matrix::Matrix;
