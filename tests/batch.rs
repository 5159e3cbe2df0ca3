extern crate dense_linalg;

use dense_linalg::math::{mat_mat_mult_batch, mat_vect_mult_batch};
use dense_linalg::structures::DenseMatrix;

fn random_matrix(rows: usize, cols: usize) -> DenseMatrix {
    let data = (0..rows * cols)
        .map(|_| rand::random::<f64>() * 2.0 - 1.0)
        .collect();
    DenseMatrix::new(rows, cols, data).expect("valid dimensions")
}

#[cfg(test)]
mod batch_tests {

    use super::*;

    #[test]
    fn test_mat_vect_mult_batch_matches_sequential() {
        let a = random_matrix(6, 5);
        let xs: Vec<Vec<f64>> = (0..64).map(|_| random_matrix(1, 5).into_vec()).collect();

        let batched = mat_vect_mult_batch(&a, &xs).unwrap();
        assert_eq!(batched.len(), xs.len());
        for (x, y) in xs.iter().zip(batched.iter()) {
            assert_eq!(&a.matvec(x).unwrap(), y);
        }
    }

    #[test]
    fn test_mat_vect_mult_batch_empty() {
        let a = random_matrix(2, 2);
        assert!(mat_vect_mult_batch(&a, &[]).unwrap().is_empty());
    }

    #[test]
    fn test_mat_vect_mult_batch_reports_first_bad_input() {
        let a = random_matrix(2, 3);
        let xs = vec![vec![1.0; 3], vec![1.0; 2], vec![1.0; 4]];
        let err = mat_vect_mult_batch(&a, &xs).unwrap_err();
        assert!(err.details().contains("length 2"));
    }

    #[test]
    fn test_mat_mat_mult_batch_matches_sequential() {
        let pairs: Vec<(DenseMatrix, DenseMatrix)> = (1..=16)
            .map(|n| (random_matrix(n, n), random_matrix(n, n)))
            .collect();

        let batched = mat_mat_mult_batch(&pairs).unwrap();
        for ((a, b), c) in pairs.iter().zip(batched.iter()) {
            assert_eq!(&a.matmul(b).unwrap(), c);
        }
    }

    #[test]
    fn test_mat_mat_mult_batch_rejects_mismatched_pair() {
        let pairs = vec![
            (random_matrix(2, 2), random_matrix(2, 2)),
            (random_matrix(2, 2), random_matrix(3, 3)),
        ];
        assert!(mat_mat_mult_batch(&pairs).is_err());
    }
}
