pub mod batch;
pub mod gemm;
pub mod gemv;

pub use batch::{mat_mat_mult_batch, mat_vect_mult_batch};
pub use gemm::mat_mat_mult;
pub use gemv::mat_vect_mult;

use crate::errors::LinalgError;
use log::debug;

pub(crate) fn positive_dim(value: i32, name: &str) -> Result<usize, LinalgError> {
    if value <= 0 {
        debug!("rejecting non-positive dimension {} = {}", name, value);
        return Err(LinalgError::new(&format!(
            "dimension {} must be positive, got {}",
            name, value
        )));
    }
    Ok(value as usize)
}

pub(crate) fn expect_len(buffer: &[f64], expected: usize, name: &str) -> Result<(), LinalgError> {
    if buffer.is_empty() {
        debug!("rejecting missing buffer {}", name);
        return Err(LinalgError::new(&format!("buffer {} is missing", name)));
    }
    if buffer.len() != expected {
        debug!(
            "rejecting buffer {}: length {} != {}",
            name,
            buffer.len(),
            expected
        );
        return Err(LinalgError::new(&format!(
            "buffer {} has length {}, expected {}",
            name,
            buffer.len(),
            expected
        )));
    }
    Ok(())
}

pub(crate) fn area(rows: usize, cols: usize) -> Result<usize, LinalgError> {
    rows.checked_mul(cols)
        .ok_or_else(|| LinalgError::new(&format!("{}x{} overflows usize", rows, cols)))
}
