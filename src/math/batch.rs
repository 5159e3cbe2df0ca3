use rayon::prelude::*;

use crate::errors::LinalgError;
use crate::structures::DenseMatrix;

/// Multiplies `a` by every vector in `xs` in parallel.
///
/// Each task writes into its own freshly allocated output, so the tasks share
/// nothing but the read-only inputs. Results come back in input order and the
/// first failing input (by position) decides the error.
pub fn mat_vect_mult_batch(
    a: &DenseMatrix,
    xs: &[Vec<f64>],
) -> Result<Vec<Vec<f64>>, LinalgError> {
    let results: Vec<Result<Vec<f64>, LinalgError>> =
        xs.par_iter().map(|x| a.matvec(x)).collect();
    results.into_iter().collect()
}

/// Square products of every `(A, B)` pair, computed in parallel.
pub fn mat_mat_mult_batch(
    pairs: &[(DenseMatrix, DenseMatrix)],
) -> Result<Vec<DenseMatrix>, LinalgError> {
    let results: Vec<Result<DenseMatrix, LinalgError>> =
        pairs.par_iter().map(|(a, b)| a.matmul(b)).collect();
    results.into_iter().collect()
}
