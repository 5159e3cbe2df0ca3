use crate::errors::LinalgError;
use crate::math::{area, mat_mat_mult, mat_vect_mult};
use crate::utils::slices_approx_eq;
use log::debug;
use serde::{Deserialize, Serialize};

/// Row-major `f64` matrix whose buffer length always equals `rows * cols`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMatrix")]
pub struct DenseMatrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

// Unvalidated wire form, checked on the way in.
#[derive(Deserialize)]
struct RawMatrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl TryFrom<RawMatrix> for DenseMatrix {
    type Error = LinalgError;

    fn try_from(raw: RawMatrix) -> Result<Self, Self::Error> {
        DenseMatrix::new(raw.rows, raw.cols, raw.data)
    }
}

fn as_dim(value: usize, name: &str) -> Result<i32, LinalgError> {
    i32::try_from(value)
        .map_err(|_| LinalgError::new(&format!("dimension {} = {} exceeds i32", name, value)))
}

impl DenseMatrix {
    pub fn new(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self, LinalgError> {
        if rows == 0 || cols == 0 {
            debug!("rejecting {}x{} matrix", rows, cols);
            return Err(LinalgError::new(&format!(
                "matrix dimensions must be positive, got {}x{}",
                rows, cols
            )));
        }
        let expected = area(rows, cols)?;
        if data.len() != expected {
            debug!(
                "rejecting {}x{} matrix with {} elements",
                rows,
                cols,
                data.len()
            );
            return Err(LinalgError::new(&format!(
                "{}x{} matrix needs {} elements, got {}",
                rows,
                cols,
                expected,
                data.len()
            )));
        }
        Ok(DenseMatrix { rows, cols, data })
    }

    pub fn zeros(rows: usize, cols: usize) -> Result<Self, LinalgError> {
        let len = area(rows, cols)?;
        DenseMatrix::new(rows, cols, vec![0.0; len])
    }

    pub fn identity(n: usize) -> Result<Self, LinalgError> {
        let mut matrix = DenseMatrix::zeros(n, n)?;
        for i in 0..n {
            matrix.data[i * n + i] = 1.0;
        }
        Ok(matrix)
    }

    /// Builds a matrix from nested rows. Ragged input is rejected.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, LinalgError> {
        let cols = rows.first().map(|row| row.len()).unwrap_or(0);
        if let Some(bad) = rows.iter().position(|row| row.len() != cols) {
            return Err(LinalgError::new(&format!(
                "row {} has length {}, expected {}",
                bad,
                rows[bad].len(),
                cols
            )));
        }
        DenseMatrix::new(rows.len(), cols, rows.concat())
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        if i >= self.rows || j >= self.cols {
            return None;
        }
        Some(self.data[i * self.cols + j])
    }

    pub fn row(&self, i: usize) -> Option<&[f64]> {
        if i >= self.rows {
            return None;
        }
        Some(&self.data[i * self.cols..(i + 1) * self.cols])
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    pub fn matvec_into(&self, x: &[f64], y: &mut [f64]) -> Result<(), LinalgError> {
        mat_vect_mult(
            &self.data,
            x,
            y,
            as_dim(self.rows, "rows")?,
            as_dim(self.cols, "cols")?,
        )
    }

    pub fn matvec(&self, x: &[f64]) -> Result<Vec<f64>, LinalgError> {
        let mut y = vec![0.0; self.rows];
        self.matvec_into(x, &mut y)?;
        Ok(y)
    }

    /// Square product into a caller-owned matrix; all three must share one dimension.
    pub fn matmul_into(
        &self,
        other: &DenseMatrix,
        out: &mut DenseMatrix,
    ) -> Result<(), LinalgError> {
        let n = self.rows;
        for (name, m) in [("A", self), ("B", other)] {
            if !m.is_square() || m.rows != n {
                return Err(LinalgError::new(&format!(
                    "matrix {} is {}x{}, expected {}x{}",
                    name, m.rows, m.cols, n, n
                )));
            }
        }
        if !out.is_square() || out.rows != n {
            return Err(LinalgError::new(&format!(
                "matrix C is {}x{}, expected {}x{}",
                out.rows, out.cols, n, n
            )));
        }
        mat_mat_mult(&self.data, &other.data, &mut out.data, as_dim(n, "n")?)
    }

    pub fn matmul(&self, other: &DenseMatrix) -> Result<DenseMatrix, LinalgError> {
        let mut out = DenseMatrix::zeros(self.rows, self.rows)?;
        self.matmul_into(other, &mut out)?;
        Ok(out)
    }

    pub fn approx_eq(&self, other: &DenseMatrix, eps: f64) -> bool {
        self.rows == other.rows
            && self.cols == other.cols
            && slices_approx_eq(&self.data, &other.data, eps)
    }
}
