//! Last digit analysis functionality
//!
//! This module buckets primes by their final digit in a chosen base and writes
//! the resulting distribution as a text table and a JSON report.

use crate::common::buckets::{format_digit_table, format_percentage, DigitEntry};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

/// Smallest base with a meaningful last digit.
pub const MIN_BASE: u64 = 2;

/// Errors that can occur during last digit analysis
#[derive(Debug)]
pub enum LastDigitError {
    InvalidBase(u64),
    BaseTooLarge(u64),
    FileWrite(std::io::Error),
    Serialize(serde_json::Error),
}

impl fmt::Display for LastDigitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LastDigitError::InvalidBase(_) => write!(f, "Base must be at least {}.", MIN_BASE),
            LastDigitError::BaseTooLarge(base) => {
                write!(f, "Base {} needs more digit counters than can be allocated.", base)
            }
            LastDigitError::FileWrite(e) => write!(f, "Failed to write file: {}", e),
            LastDigitError::Serialize(e) => write!(f, "Failed to serialize report: {}", e),
        }
    }
}

impl std::error::Error for LastDigitError {}

impl From<std::io::Error> for LastDigitError {
    fn from(err: std::io::Error) -> Self {
        LastDigitError::FileWrite(err)
    }
}

impl From<serde_json::Error> for LastDigitError {
    fn from(err: serde_json::Error) -> Self {
        LastDigitError::Serialize(err)
    }
}

type Result<T> = core::result::Result<T, LastDigitError>;

/// Occurrence count of every residue in `[0, base)`.
///
/// Every residue is present exactly once, in ascending order. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitHistogram {
    counts: Vec<usize>,
}

impl DigitHistogram {
    /// The base the histogram was built for.
    pub fn base(&self) -> u64 {
        self.counts.len() as u64
    }

    /// Number of residues, equal to the base.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Always false; a histogram covers at least [`MIN_BASE`] residues.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Count for a residue, or `None` when the residue is outside `[0, base)`.
    pub fn count(&self, residue: u64) -> Option<usize> {
        usize::try_from(residue)
            .ok()
            .and_then(|index| self.counts.get(index))
            .copied()
    }

    /// Iterates `(residue, count)` pairs in ascending residue order.
    pub fn iter(&self) -> impl Iterator<Item = (u64, usize)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .map(|(residue, &count)| (residue as u64, count))
    }

    /// Sum of all counts, i.e. the number of primes bucketed.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Largest count of any residue.
    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Residue with the highest count; the smallest residue wins ties.
    pub fn most_frequent(&self) -> (u64, usize) {
        self.iter()
            .fold((0, 0), |best, entry| if entry.1 > best.1 { entry } else { best })
    }

    /// Residue with the lowest count; the smallest residue wins ties.
    pub fn least_frequent(&self) -> (u64, usize) {
        self.iter().fold((0, usize::MAX), |best, entry| {
            if entry.1 < best.1 {
                entry
            } else {
                best
            }
        })
    }

    /// Table rows for this histogram.
    pub fn entries(&self) -> Vec<DigitEntry> {
        let total = self.total();
        self.iter()
            .map(|(digit, count)| DigitEntry::new(digit, count, total))
            .collect()
    }
}

impl fmt::Display for DigitHistogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (residue, count) in self.iter() {
            if residue > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", residue, count)?;
        }
        write!(f, "}}")
    }
}

/// Serializable summary of a single run.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HistogramReport {
    /// Base the last digits were taken in
    pub base: u64,
    /// Exclusive upper bound of the primes
    pub limit: u64,
    /// Number of primes bucketed
    pub total_primes: usize,
    /// Residue to occurrence count, ascending
    pub counts: BTreeMap<u64, usize>,
}

impl HistogramReport {
    pub fn new(histogram: &DigitHistogram, limit: u64) -> Self {
        Self {
            base: histogram.base(),
            limit,
            total_primes: histogram.total(),
            counts: histogram.iter().collect(),
        }
    }
}

/// Returns the last digit of `number` written in `base`.
///
/// # Returns
/// * `Ok(digit)` - `number mod base`
/// * `Err(LastDigitError::InvalidBase)` - If `base < 2`
pub fn last_digit(number: u64, base: u64) -> Result<u64> {
    if base < MIN_BASE {
        return Err(LastDigitError::InvalidBase(base));
    }

    Ok(number % base)
}

/// Counts the occurrences of each last digit among `primes` in `base`.
///
/// The base is validated before any prime is looked at, so an empty sequence
/// with an invalid base still fails.
///
/// # Arguments
/// * `primes` - Ascending sequence of primes
/// * `base` - Numeral base, at least 2
///
/// # Returns
/// * `Ok(DigitHistogram)` - Counts for every residue in `[0, base)`
/// * `Err(LastDigitError::InvalidBase)` - If `base < 2`
/// * `Err(LastDigitError::BaseTooLarge)` - If one counter per digit cannot be allocated
pub fn count_last_digits(primes: &[u64], base: u64) -> Result<DigitHistogram> {
    if base < MIN_BASE {
        return Err(LastDigitError::InvalidBase(base));
    }

    let digit_count = usize::try_from(base).map_err(|_| LastDigitError::BaseTooLarge(base))?;
    let mut counts: Vec<usize> = Vec::new();
    counts
        .try_reserve_exact(digit_count)
        .map_err(|_| LastDigitError::BaseTooLarge(base))?;
    counts.resize(digit_count, 0);

    for &prime in primes {
        counts[(prime % base) as usize] += 1;
    }

    Ok(DigitHistogram { counts })
}

/// File name stem shared by every output of a run in `base`.
pub fn output_stem(base: u64) -> String {
    format!("last-digits-base-{}", base)
}

/// Generate complete last digit analysis
///
/// Writes the digit table with a summary to `last-digits-base-<base>.txt` and the
/// [`HistogramReport`] to `last-digits-base-<base>.json`.
///
/// # Arguments
/// * `histogram` - Counts produced by [`count_last_digits`]
/// * `limit` - Exclusive upper bound the primes were generated with
/// * `output_dir` - Directory where the analysis files should be saved
///
/// # Returns
/// * `Ok(())` - If analysis generation was successful
/// * `Err(LastDigitError)` - If file operations failed
pub fn generate_last_digit_analysis(
    histogram: &DigitHistogram,
    limit: u64,
    output_dir: &Path,
) -> Result<()> {
    let base = histogram.base();
    let stem = output_stem(base);

    let title = format!("Last Digits of Primes below {} in Base {}", limit, base);
    let table = format_digit_table(&histogram.entries());

    let total = histogram.total();
    let (most_digit, most_count) = histogram.most_frequent();
    let (least_digit, least_count) = histogram.least_frequent();
    let summary = format!(
        "Summary\n{}\n\
         Total primes: {}\n\
         Upper limit (exclusive): {}\n\
         Most frequent digit: {} ({}, {})\n\
         Least frequent digit: {} ({}, {})",
        "=".repeat(7),
        total,
        limit,
        most_digit,
        most_count,
        format_percentage(most_count, total),
        least_digit,
        least_count,
        format_percentage(least_count, total),
    );

    std::fs::write(
        output_dir.join(format!("{}.txt", stem)),
        format!(
            "{}\n{}\n{}\n\n{}\n",
            title,
            "=".repeat(title.len()),
            table,
            summary
        ),
    )?;

    let report = HistogramReport::new(histogram, limit);
    let json = serde_json::to_string_pretty(&report)?;
    std::fs::write(output_dir.join(format!("{}.json", stem)), json)?;

    tracing::debug!(base, limit, total, "wrote last digit analysis");
    Ok(())
}
