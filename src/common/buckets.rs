//! Digit bucket rows and ASCII table formatting
//!
//! This module provides shared functionality for presenting a digit histogram:
//! - [`DigitEntry`] type for representing a single residue with its count and percentage
//! - ASCII table formatting using the [`tabled`] crate

use tabled::{Table, Tabled};

/// Represents a single residue with its count and percentage
#[derive(Debug, Clone, Tabled)]
pub struct DigitEntry {
    /// Residue value, i.e. the last digit in the chosen base
    #[tabled(rename = "Digit")]
    pub digit: u64,
    /// Number of primes ending in this digit
    #[tabled(rename = "Count")]
    pub count: usize,
    /// Percentage of all primes ending in this digit
    #[tabled(rename = "Percentage")]
    pub percentage: String,
}

impl DigitEntry {
    /// Creates a new digit entry with formatted percentage
    pub fn new(digit: u64, count: usize, total: usize) -> Self {
        Self {
            digit,
            count,
            percentage: format_percentage(count, total),
        }
    }
}

/// Formats `count / total` as a percentage with two decimals.
pub fn format_percentage(count: usize, total: usize) -> String {
    if total == 0 {
        "0.00%".to_string()
    } else {
        format!("{:.2}%", (count as f64 / total as f64) * 100.0)
    }
}

/// Formats digit entries as an ASCII table using the [`tabled`] crate
///
/// Returns a placeholder line when there are no entries.
pub fn format_digit_table(entries: &[DigitEntry]) -> String {
    if entries.is_empty() {
        return "No data available for bucketing".to_string();
    }

    Table::new(entries).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_entry_new() {
        let entry = DigitEntry::new(3, 25, 100);
        assert_eq!(entry.digit, 3);
        assert_eq!(entry.count, 25);
        assert_eq!(entry.percentage, "25.00%");

        // Test zero total
        let entry_zero = DigitEntry::new(3, 0, 0);
        assert_eq!(entry_zero.percentage, "0.00%");
    }

    #[test]
    fn test_format_percentage_rounds() {
        assert_eq!(format_percentage(1, 3), "33.33%");
        assert_eq!(format_percentage(2, 3), "66.67%");
        assert_eq!(format_percentage(5, 5), "100.00%");
    }

    #[test]
    fn test_format_digit_table() {
        let entries = vec![DigitEntry::new(1, 10, 40), DigitEntry::new(3, 30, 40)];

        let table = format_digit_table(&entries);
        assert!(table.contains("Digit"));
        assert!(table.contains("Count"));
        assert!(table.contains("Percentage"));
        assert!(table.contains("25.00%"));
        assert!(table.contains("75.00%"));
        assert!(table.lines().count() > entries.len());
    }

    #[test]
    fn test_format_empty_table() {
        assert_eq!(
            format_digit_table(&[]),
            "No data available for bucketing"
        );
    }
}
