use crate::constants::EPSILON;

pub fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() < eps
}

pub fn slices_approx_eq(a: &[f64], b: &[f64], eps: f64) -> bool {
    a.len() == b.len() && a.iter().zip(b.iter()).all(|(&x, &y)| approx_eq(x, y, eps))
}

/// `slices_approx_eq` at the crate-wide tolerance.
pub fn close(a: &[f64], b: &[f64]) -> bool {
    slices_approx_eq(a, b, EPSILON)
}
