use crate::error::IoError;
use crate::matrix::Matrix;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Read, Write};

/// Leading bytes of every binary matrix blob
pub const MATRIX_MAGIC: &[u8; 4] = b"RNMX";

const HEADER_LEN: usize = 4 + 8 + 8;

/// Serde mirror of a `Matrix`: its shape and the row-major values.
///
/// # Fields
///
/// - `rows` - Number of rows
/// - `cols` - Number of columns
/// - `data` - `rows * cols` values in row-major order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerializableMatrix {
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<f64>,
}

impl From<Matrix> for SerializableMatrix {
    fn from(matrix: Matrix) -> Self {
        Self {
            rows: matrix.rows(),
            cols: matrix.cols(),
            data: matrix.to_vec(),
        }
    }
}

impl TryFrom<SerializableMatrix> for Matrix {
    type Error = crate::ModelError;

    fn try_from(value: SerializableMatrix) -> Result<Self, Self::Error> {
        Matrix::from_vec(value.rows, value.cols, value.data)
    }
}

impl Matrix {
    /// Encodes the matrix as a binary blob.
    ///
    /// Layout: `MATRIX_MAGIC`, rows as little-endian u64, cols as little-endian u64, then
    /// every value as little-endian f64 bits in row-major order.
    ///
    /// # Returns
    ///
    /// * `Vec<u8>` - The encoded blob
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(HEADER_LEN + self.size() * 8);
        bytes.extend_from_slice(MATRIX_MAGIC);
        bytes.extend_from_slice(&(self.rows() as u64).to_le_bytes());
        bytes.extend_from_slice(&(self.cols() as u64).to_le_bytes());
        for value in self.iter() {
            bytes.extend_from_slice(&value.to_bits().to_le_bytes());
        }
        bytes
    }

    /// Decodes a blob produced by `to_bytes`.
    ///
    /// # Parameters
    ///
    /// * `bytes` - The complete blob, header included
    ///
    /// # Returns
    ///
    /// - `Ok(Matrix)` - The decoded matrix, bit-identical to the encoded one
    /// - `Err(IoError::InvalidFormat)` - If the magic, header or payload length is wrong
    pub fn from_bytes(bytes: &[u8]) -> Result<Matrix, IoError> {
        if bytes.len() < HEADER_LEN {
            return Err(IoError::InvalidFormat(format!(
                "Matrix blob needs at least {} header bytes, got {}",
                HEADER_LEN,
                bytes.len()
            )));
        }

        let (header, payload) = bytes.split_at(HEADER_LEN);
        if &header[..4] != MATRIX_MAGIC {
            return Err(IoError::InvalidFormat(String::from(
                "Missing matrix magic bytes",
            )));
        }

        let rows = read_dimension(&header[4..12])?;
        let cols = read_dimension(&header[12..20])?;
        let expected = rows
            .checked_mul(cols)
            .and_then(|size| size.checked_mul(8))
            .ok_or_else(|| {
                IoError::InvalidFormat(format!("Matrix shape ({}, {}) overflows", rows, cols))
            })?;

        if payload.len() != expected {
            return Err(IoError::InvalidFormat(format!(
                "Matrix ({}, {}) needs {} payload bytes, got {}",
                rows,
                cols,
                expected,
                payload.len()
            )));
        }

        let values = payload
            .chunks_exact(8)
            .map(|chunk| read_u64(chunk).map(f64::from_bits))
            .collect::<Result<Vec<f64>, IoError>>()?;

        Matrix::from_vec(rows, cols, values).map_err(IoError::Model)
    }

    /// Writes the binary blob to `writer`.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<(), IoError> {
        writer
            .write_all(&self.to_bytes())
            .map_err(IoError::StdIoError)
    }

    /// Reads a binary blob from `reader` until end of stream.
    pub fn read_from<R: Read>(reader: &mut R) -> Result<Matrix, IoError> {
        let mut bytes = Vec::new();
        reader
            .read_to_end(&mut bytes)
            .map_err(IoError::StdIoError)?;
        Matrix::from_bytes(&bytes)
    }

    /// Saves the matrix as a binary blob at `path`, replacing any existing file.
    ///
    /// # Parameters
    ///
    /// * `path` - Destination file path (e.g. "weights.bin")
    ///
    /// # Returns
    ///
    /// - `Ok(())` - The blob was written and flushed
    /// - `Err(IoError::StdIoError)` - File creation or write failed
    pub fn save(&self, path: &str) -> Result<(), IoError> {
        let file = File::create(path).map_err(IoError::StdIoError)?;
        let mut writer = BufWriter::new(file);
        self.write_to(&mut writer)?;
        writer.flush().map_err(IoError::StdIoError)?;
        Ok(())
    }

    /// Loads a matrix previously written by `save`.
    pub fn load(path: &str) -> Result<Matrix, IoError> {
        let mut reader = IoError::load_in_buf_reader(path)?;
        Matrix::read_from(&mut reader)
    }
}

fn read_u64(bytes: &[u8]) -> Result<u64, IoError> {
    let raw: [u8; 8] = bytes
        .try_into()
        .map_err(|_| IoError::InvalidFormat(String::from("Truncated 8-byte field")))?;
    Ok(u64::from_le_bytes(raw))
}

fn read_dimension(bytes: &[u8]) -> Result<usize, IoError> {
    usize::try_from(read_u64(bytes)?)
        .map_err(|_| IoError::InvalidFormat(String::from("Dimension does not fit in usize")))
}
