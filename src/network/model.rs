use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{NetError, Result};
use crate::math::{blob, matrix::Matrix};
use crate::network::config::NetworkConfig;

/// On-disk form of a trained network: the scalar configuration plus one
/// binary blob per weight matrix, stored base64 inside a JSON object.
///
/// Field names are kept PascalCase so existing model files stay readable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SerializedModel {
    pub input_nodes: usize,
    pub hidden_nodes: usize,
    pub output_nodes: usize,
    pub learning_rate: f64,
    /// Input → hidden weights. The historical field name is kept as is.
    #[serde(with = "base64_bytes")]
    pub raw_input_header: Vec<u8>,
    #[serde(with = "base64_bytes")]
    pub raw_hidden_output: Vec<u8>,
}

impl SerializedModel {
    /// Builds the record from borrowed state; nothing is mutated.
    pub fn encode(config: &NetworkConfig, w_input_hidden: &Matrix, w_hidden_output: &Matrix) -> Self {
        SerializedModel {
            input_nodes: config.input_nodes(),
            hidden_nodes: config.hidden_nodes(),
            output_nodes: config.output_nodes(),
            learning_rate: config.learning_rate(),
            raw_input_header: blob::encode(w_input_hidden),
            raw_hidden_output: blob::encode(w_hidden_output),
        }
    }

    /// Decodes both blobs and checks them against the declared node counts.
    ///
    /// Returns `(config, w_input_hidden, w_hidden_output)`.
    pub fn decode(&self) -> Result<(NetworkConfig, Matrix, Matrix)> {
        let config = NetworkConfig::new(
            self.input_nodes,
            self.hidden_nodes,
            self.output_nodes,
            self.learning_rate,
        );

        let w_hidden_output = blob::decode(&self.raw_hidden_output)?;
        check_shape("RawHiddenOutput", &w_hidden_output, (self.output_nodes, self.hidden_nodes))?;

        let w_input_hidden = blob::decode(&self.raw_input_header)?;
        check_shape("RawInputHeader", &w_input_hidden, (self.hidden_nodes, self.input_nodes))?;

        Ok((config, w_input_hidden, w_hidden_output))
    }

    pub fn to_json(&self) -> Result<Vec<u8>> {
        serde_json::to_vec_pretty(self).map_err(|e| NetError::Encoding(e.to_string()))
    }

    pub fn from_json(bytes: &[u8]) -> Result<SerializedModel> {
        serde_json::from_slice(bytes).map_err(|e| NetError::Decoding(e.to_string()))
    }

    /// Writes the record to `path`, creating or truncating it.
    pub fn write_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = self.to_json()?;

        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o777);
        }

        let mut file = options.open(path)?;
        file.write_all(&json)?;
        file.flush()?;
        Ok(())
    }

    pub fn read_file<P: AsRef<Path>>(path: P) -> Result<SerializedModel> {
        let bytes = fs::read(path)?;
        SerializedModel::from_json(&bytes)
    }
}

fn check_shape(field: &str, matrix: &Matrix, expected: (usize, usize)) -> Result<()> {
    if matrix.dims() != expected {
        return Err(NetError::Decoding(format!(
            "{} is {}x{}, declared node counts require {}x{}",
            field, matrix.rows, matrix.cols, expected.0, expected.1
        )));
    }
    Ok(())
}

mod base64_bytes {
    use base64::{engine::general_purpose::STANDARD, Engine};
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let text = String::deserialize(deserializer)?;
        STANDARD.decode(text.as_bytes()).map_err(D::Error::custom)
    }
}
