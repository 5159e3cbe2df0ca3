use super::{area, expect_len, positive_dim};
use crate::errors::LinalgError;

/// `y = A·x` for a row-major `m`×`n` matrix `a`.
///
/// Every precondition is checked before `y` is written, so on `Err` the
/// output buffer is exactly as the caller left it. An empty slice stands in
/// for a missing buffer.
pub fn mat_vect_mult(
    a: &[f64],
    x: &[f64],
    y: &mut [f64],
    m: i32,
    n: i32,
) -> Result<(), LinalgError> {
    let rows = positive_dim(m, "m")?;
    let cols = positive_dim(n, "n")?;
    expect_len(a, area(rows, cols)?, "A")?;
    expect_len(x, cols, "x")?;
    expect_len(y, rows, "y")?;

    for (i, row) in a.chunks_exact(cols).enumerate() {
        let mut sum = 0f64;
        for j in 0..cols {
            sum += row[j] * x[j];
        }
        y[i] = sum;
    }
    Ok(())
}
