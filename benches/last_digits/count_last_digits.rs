use criterion::{black_box, Criterion};
use prime_digit_stats::analysis::count_last_digits;
use prime_digit_stats::primes::generate_primes;

pub fn bench_count_last_digits(c: &mut Criterion) {
    let primes = generate_primes(1_000_000);
    let bases = [2u64, 10, 1000];

    for &base in &bases {
        let id = &format!("count_last_digits_base_{}", base);
        c.bench_function(id, |b| {
            b.iter(|| count_last_digits(black_box(&primes), black_box(base)).unwrap())
        });
    }
}
