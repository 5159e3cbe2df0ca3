pub mod constants;
pub mod errors;
pub mod math;
pub mod structures;
pub mod utils;

pub use errors::LinalgError;
pub use structures::DenseMatrix;
