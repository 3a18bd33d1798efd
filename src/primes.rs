//! Prime enumeration
//!
//! Provides a sieve of Eratosthenes over `[0, limit)` and a trial-division
//! primality check for individual values.

/// Generates all primes strictly below `limit`, in ascending order.
///
/// Uses a sieve of Eratosthenes; memory usage is one byte per integer below `limit`.
///
/// # Arguments
/// * `limit` - Exclusive upper bound for the generated primes
///
/// # Returns
/// A vector of primes `p` with `2 <= p < limit`. Empty when `limit <= 2`.
pub fn generate_primes(limit: u64) -> Vec<u64> {
    if limit <= 2 {
        return Vec::new();
    }

    let size = limit as usize;
    let mut is_composite = vec![false; size];

    let mut candidate = 2usize;
    while candidate * candidate < size {
        if !is_composite[candidate] {
            // Smaller multiples were crossed off by smaller factors.
            for multiple in (candidate * candidate..size).step_by(candidate) {
                is_composite[multiple] = true;
            }
        }
        candidate += 1;
    }

    is_composite
        .iter()
        .enumerate()
        .skip(2)
        .filter(|&(_, &composite)| !composite)
        .map(|(value, _)| value as u64)
        .collect()
}

/// Checks whether a single number is prime using trial division.
pub fn is_prime(number: u64) -> bool {
    if number < 2 {
        return false;
    }
    if number % 2 == 0 {
        return number == 2;
    }

    let mut divisor = 3u64;
    while divisor * divisor <= number {
        if number % divisor == 0 {
            return false;
        }
        divisor += 2;
    }

    true
}
