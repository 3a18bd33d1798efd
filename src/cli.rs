//! Command line arguments and interactive prompts
//!
//! Every value can be passed as a flag; values that are missing are asked for
//! interactively, base first, so an invalid base halts before the limit prompt.

use crate::analysis::last_digit::MIN_BASE;
use argh::FromArgs;
use dialoguer::Input;
use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

/// Limit used when the limit prompt is left empty
pub const DEFAULT_LIMIT: u64 = 1_000_000;

/// Limits above this still work but sieve slowly
pub const RECOMMENDED_MAX_LIMIT: u64 = 10_000_000;

/// Hard cap; the sieve needs one byte per integer below the limit
pub const MAX_LIMIT: u64 = 1_000_000_000;

/// Hard cap; the histogram holds one counter per digit
pub const MAX_BASE: u64 = 1_000_000;

const BASE_PROMPT: &str = "Choose your desired base (greater than 1)";
const LIMIT_PROMPT: &str = "Enter the upper limit for primes (default=1000000, max recommended=10^7)";

/// Counts the last digits of primes in a chosen base and plots their distribution.
#[derive(FromArgs, Debug)]
pub struct Args {
    /// numeral base, at least 2 (prompted for when omitted)
    #[argh(option, short = 'b')]
    pub base: Option<String>,

    /// exclusive upper limit for primes (prompted for when omitted, default: 1000000)
    #[argh(option, short = 'l')]
    pub limit: Option<String>,

    /// directory for the chart and reports (default: current directory)
    #[argh(option, short = 'o', default = "PathBuf::from(\".\")")]
    pub output: PathBuf,

    /// skip rendering the bar chart
    #[argh(switch)]
    pub no_plot: bool,
}

/// Errors that can occur while collecting user input
#[derive(Error, Debug)]
pub enum InputError {
    #[error("{0}")]
    InvalidArgument(String),

    #[error("invalid {field} '{input}': {source}")]
    Parse {
        field: &'static str,
        input: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Failed to read input: {0}")]
    Prompt(#[from] dialoguer::Error),
}

type Result<T> = core::result::Result<T, InputError>;

fn parse_integer(field: &'static str, input: &str) -> Result<i64> {
    input.parse::<i64>().map_err(|source| InputError::Parse {
        field,
        input: input.to_string(),
        source,
    })
}

/// Parses and validates a base typed by the user.
pub fn parse_base(input: &str) -> Result<u64> {
    let base = parse_integer("base", input.trim())?;

    if base < MIN_BASE as i64 {
        return Err(InputError::InvalidArgument(format!(
            "Base must be at least {}.",
            MIN_BASE
        )));
    }

    let base = base as u64;
    if base > MAX_BASE {
        return Err(InputError::InvalidArgument(format!(
            "Base must be at most {}.",
            MAX_BASE
        )));
    }

    Ok(base)
}

/// Parses and validates a limit typed by the user; blank input selects [`DEFAULT_LIMIT`].
pub fn parse_limit(input: &str) -> Result<u64> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(DEFAULT_LIMIT);
    }

    let limit = parse_integer("limit", input)?;
    if limit < 0 {
        return Err(InputError::InvalidArgument(
            "Limit must not be negative.".to_string(),
        ));
    }

    let limit = limit as u64;
    if limit > MAX_LIMIT {
        return Err(InputError::InvalidArgument(format!(
            "Limit must be at most {}.",
            MAX_LIMIT
        )));
    }

    Ok(limit)
}

/// Message shown to the user when their input cannot be used.
pub fn error_message(error: &InputError) -> String {
    match error {
        InputError::InvalidArgument(message) => format!("Error: {}", message),
        InputError::Parse { .. } => {
            format!("Input error: {}. Please enter a valid integer.", error)
        }
        InputError::Prompt(_) => unexpected_error_message(error),
    }
}

/// Message shown for any failure that is not about the values typed in.
pub fn unexpected_error_message(error: &dyn std::error::Error) -> String {
    format!("An unexpected error occurred: {}", error)
}

/// Returns the base from the flag, or asks for it.
pub fn read_base(flag: Option<&str>) -> Result<u64> {
    match flag {
        Some(value) => parse_base(value),
        None => {
            let answer: String = Input::new().with_prompt(BASE_PROMPT).interact_text()?;
            parse_base(&answer)
        }
    }
}

/// Returns the limit from the flag, or asks for it.
pub fn read_limit(flag: Option<&str>) -> Result<u64> {
    match flag {
        Some(value) => parse_limit(value),
        None => {
            let answer: String = Input::new()
                .with_prompt(LIMIT_PROMPT)
                .allow_empty(true)
                .interact_text()?;
            parse_limit(&answer)
        }
    }
}
