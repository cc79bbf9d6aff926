use std::path::Path;

use log::debug;

use crate::data::sample::{load_samples, Sample};
use crate::error::Result;

/// Reads a header-less, comma-separated file into rows of raw fields.
///
/// Rows may differ in length; validation happens in [`load_samples`].
pub fn read_rows<P: AsRef<Path>>(path: P) -> Result<Vec<Vec<String>>> {
    let path = path.as_ref();
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    debug!("read {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

/// Reads `path` and parses every row into a [`Sample`] with a target of
/// length `target_len`.
pub fn load_samples_from_csv<P: AsRef<Path>>(path: P, target_len: usize) -> Result<Vec<Sample>> {
    load_samples(&read_rows(path)?, target_len)
}
