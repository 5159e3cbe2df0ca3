extern crate dense_linalg;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dense_linalg::constants::BENCH_SIZE;
use dense_linalg::math::gemv;

fn criterion_benchmark(c: &mut Criterion) {
    let matrix_a = vec![1.0f64; BENCH_SIZE * BENCH_SIZE];
    let vector = vec![1.0f64; BENCH_SIZE];
    let mut result = vec![0f64; BENCH_SIZE];

    c.bench_function("mat_vect_mult", |bencher| {
        bencher.iter(|| {
            gemv::mat_vect_mult(
                black_box(&matrix_a),
                black_box(&vector),
                black_box(&mut result),
                BENCH_SIZE as i32,
                BENCH_SIZE as i32,
            )
        })
    });
}

fn custom_criterion() -> Criterion {
    Criterion::default()
        .warm_up_time(std::time::Duration::from_secs(2))
        .measurement_time(std::time::Duration::from_secs(5))
}

criterion_group! {
    name = benches;
    config = custom_criterion();
    targets = criterion_benchmark
}
criterion_main!(benches);
