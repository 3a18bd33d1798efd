//! # prime-digit-stats
//! Counts how often each final digit appears among the primes below a limit,
//! in any numeral base, and renders the distribution as a bar chart.

/// Prime enumeration below an upper bound.
pub mod primes;

/// Domain-specific analysis: bucketing primes by their last digit.
pub mod analysis {
    pub mod last_digit;

    pub use last_digit::{
        count_last_digits, generate_last_digit_analysis, last_digit, DigitHistogram,
        LastDigitError,
    };
}

/// Shared infrastructure for tables and charts.
pub mod common {
    pub mod buckets;
    pub mod plots;

    pub use plots::PlotError;
}

/// Interactive prompts and command line arguments.
pub mod cli;
