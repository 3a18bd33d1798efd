use criterion::{black_box, Criterion};
use prime_digit_stats::primes::generate_primes;

pub fn bench_generate_primes(c: &mut Criterion) {
    let limits = [100_000u64, 1_000_000, 10_000_000];

    for &limit in &limits {
        let id = &format!("generate_primes_{}", limit);
        c.bench_function(id, |b| b.iter(|| generate_primes(black_box(limit))));
    }
}
