pub mod dense_matrix;

pub use dense_matrix::DenseMatrix;
