use super::{area, expect_len, positive_dim};
use crate::errors::LinalgError;

/// `C = A·B` for square row-major `n`×`n` matrices.
///
/// Naive i, j, k loop; the summation order is fixed so results are
/// reproducible bit for bit.
pub fn mat_mat_mult(a: &[f64], b: &[f64], c: &mut [f64], n: i32) -> Result<(), LinalgError> {
    let size = positive_dim(n, "n")?;
    let elements = area(size, size)?;
    expect_len(a, elements, "A")?;
    expect_len(b, elements, "B")?;
    expect_len(c, elements, "C")?;

    for i in 0..size {
        for j in 0..size {
            let mut sum = 0.0_f64;
            for k in 0..size {
                sum += a[i * size + k] * b[k * size + j];
            }
            c[i * size + j] = sum;
        }
    }
    Ok(())
}
