pub mod csv;
pub mod sample;

pub use self::csv::{load_samples_from_csv, read_rows};
pub use sample::{load_samples, Sample};
