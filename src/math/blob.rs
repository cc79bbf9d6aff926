//! Self-describing binary encoding of a dense matrix.
//!
//! Layout (all integers little-endian):
//!
//! | bytes     | content                          |
//! |-----------|----------------------------------|
//! | 0..4      | magic `b"DNM1"`                  |
//! | 4..12     | row count, `u64`                 |
//! | 12..20    | column count, `u64`              |
//! | 20..      | `rows * cols` values, `f64`, row-major |
//!
//! Both dimensions must be non-zero.

use std::io::{Cursor, Read};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

use crate::error::{NetError, Result};
use crate::math::matrix::Matrix;

const MAGIC: &[u8; 4] = b"DNM1";
const HEADER_LEN: usize = 4 + 8 + 8;

pub fn encode(matrix: &Matrix) -> Vec<u8> {
    let mut buf = Vec::with_capacity(HEADER_LEN + matrix.rows * matrix.cols * 8);
    buf.extend_from_slice(MAGIC);
    // Writes into a Vec cannot fail.
    let _ = buf.write_u64::<LittleEndian>(matrix.rows as u64);
    let _ = buf.write_u64::<LittleEndian>(matrix.cols as u64);
    for value in matrix.values() {
        let _ = buf.write_f64::<LittleEndian>(value);
    }
    buf
}

pub fn decode(bytes: &[u8]) -> Result<Matrix> {
    let mut cursor = Cursor::new(bytes);

    let mut magic = [0u8; 4];
    cursor.read_exact(&mut magic).map_err(truncated)?;
    if &magic != MAGIC {
        return Err(NetError::Decoding(format!("bad matrix magic {:?}", magic)));
    }

    let rows = read_dim(&mut cursor)?;
    let cols = read_dim(&mut cursor)?;
    if rows == 0 || cols == 0 {
        return Err(NetError::Decoding(format!("zero-length matrix {}x{}", rows, cols)));
    }

    let expected = rows
        .checked_mul(cols)
        .and_then(|n| n.checked_mul(8))
        .ok_or_else(|| NetError::Decoding(format!("matrix dimensions {}x{} overflow", rows, cols)))?;
    let remaining = bytes.len() - HEADER_LEN;
    if remaining != expected {
        return Err(NetError::Decoding(format!(
            "matrix {}x{} needs {} value bytes, found {}",
            rows, cols, expected, remaining
        )));
    }

    let mut values = Vec::with_capacity(rows * cols);
    for _ in 0..rows * cols {
        values.push(cursor.read_f64::<LittleEndian>().map_err(truncated)?);
    }

    Ok(Matrix::from_row_major(rows, cols, &values))
}

fn read_dim(cursor: &mut Cursor<&[u8]>) -> Result<usize> {
    let raw = cursor.read_u64::<LittleEndian>().map_err(truncated)?;
    usize::try_from(raw).map_err(|_| NetError::Decoding(format!("matrix dimension {} too large", raw)))
}

fn truncated(err: std::io::Error) -> NetError {
    NetError::Decoding(format!("truncated matrix blob: {}", err))
}
