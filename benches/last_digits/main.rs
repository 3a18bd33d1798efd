// Available modules
mod count_last_digits;
mod generate_primes;

// Used Modules
use count_last_digits::bench_count_last_digits;
use criterion::{criterion_group, criterion_main, Criterion};
use generate_primes::bench_generate_primes;

fn criterion_benchmark(c: &mut Criterion) {
    bench_generate_primes(c);
    bench_count_last_digits(c);
}

criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = criterion_benchmark
}

criterion_main!(benches);
