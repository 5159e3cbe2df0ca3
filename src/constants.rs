/// Tolerance used for every floating point comparison in the crate's checks.
pub const EPSILON: f64 = 1e-9;

/// Square dimension used by the benchmarks.
pub const BENCH_SIZE: usize = 128;
