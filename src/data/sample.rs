use crate::error::{NetError, Result};

/// Value of the correct class in a target vector.
pub const TARGET_ON: f64 = 0.99;
/// Value of every other class in a target vector.
pub const TARGET_OFF: f64 = 0.01;

/// One labeled example: a class label, its soft one-hot target and the
/// pixel values scaled into [0.01, 1.0].
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub label: usize,
    pub target: Vec<f64>,
    pub features: Vec<f64>,
}

impl Sample {
    /// Parses `label, pixel, pixel, ...` with pixels in 0..=255.
    pub fn from_row<S: AsRef<str>>(row: &[S], target_len: usize) -> Result<Sample> {
        let (label_field, pixels) = match row.split_first() {
            Some((first, rest)) => (first.as_ref(), rest),
            None => ("", row),
        };

        let label = parse_int(label_field)?;
        if label < 0 || label as u64 >= target_len as u64 {
            return Err(NetError::Range { label, limit: target_len });
        }
        let label = label as usize;

        let features = pixels
            .iter()
            .map(|field| parse_int(field.as_ref()).map(normalize_pixel))
            .collect::<Result<Vec<f64>>>()?;

        Ok(Sample {
            label,
            target: soft_one_hot(label, target_len),
            features,
        })
    }
}

/// Parses every row into a [`Sample`], stopping at the first bad row.
pub fn load_samples<S: AsRef<str>>(rows: &[Vec<S>], target_len: usize) -> Result<Vec<Sample>> {
    rows.iter()
        .map(|row| Sample::from_row(row, target_len))
        .collect()
}

/// Maps 0..=255 onto [0.01, 1.0] so no input is exactly zero.
///
/// Values outside 0..=255 are not rejected; they land outside [0.01, 1.0].
pub fn normalize_pixel(value: i64) -> f64 {
    value as f64 / 255.0 * 0.99 + 0.01
}

pub fn soft_one_hot(label: usize, len: usize) -> Vec<f64> {
    let mut target = vec![TARGET_OFF; len];
    target[label] = TARGET_ON;
    target
}

/// Surrounding whitespace is ignored, so `" 12"` parses as 12.
fn parse_int(field: &str) -> Result<i64> {
    field.trim().parse::<i64>().map_err(|source| NetError::Parse {
        field: field.to_string(),
        source,
    })
}
