use crate::matrix::Matrix;
use std::fmt;

/// Summary statistics of a matrix.
///
/// # Fields
///
/// - `rows` - Number of rows
/// - `cols` - Number of columns
/// - `size` - Number of elements
/// - `min` - Smallest element
/// - `max` - Largest element
/// - `sum` - Sum of all elements
/// - `avg` - Mean of all elements
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatrixStats {
    pub rows: usize,
    pub cols: usize,
    pub size: usize,
    pub min: f64,
    pub max: f64,
    pub sum: f64,
    pub avg: f64,
}

impl Matrix {
    /// Computes shape and summary statistics of the matrix.
    pub fn describe(&self) -> MatrixStats {
        MatrixStats {
            rows: self.rows(),
            cols: self.cols(),
            size: self.size(),
            min: self.min(),
            max: self.max(),
            sum: self.sum(),
            avg: self.avg(),
        }
    }
}

impl fmt::Display for MatrixStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Matrix")?;
        writeln!(f, " rows: {}", self.rows)?;
        writeln!(f, " cols: {}", self.cols)?;
        writeln!(f, " size: {}", self.size)?;
        writeln!(f, " min:  {:.8}", self.min)?;
        writeln!(f, " max:  {:.8}", self.max)?;
        writeln!(f, " sum:  {:.8}", self.sum)?;
        write!(f, " avg:  {:.8}", self.avg)
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.as_array().rows() {
            let line = row
                .iter()
                .map(|value| format!("{:11.8}", value))
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
