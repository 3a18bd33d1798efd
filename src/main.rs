use indicatif::{ProgressBar, ProgressStyle};
use prime_digit_stats::analysis::{count_last_digits, generate_last_digit_analysis, LastDigitError};
use prime_digit_stats::cli::{self, Args, InputError, RECOMMENDED_MAX_LIMIT};
use prime_digit_stats::common::buckets::format_digit_table;
use prime_digit_stats::common::plots::{create_last_digit_plot, MAX_BARS};
use prime_digit_stats::common::PlotError;
use prime_digit_stats::primes::generate_primes;
use std::process::ExitCode;
use std::time::Duration;
use thiserror::Error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Errors that can occur during a run
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Input(#[from] InputError),

    #[error("Last digit analysis error: {0}")]
    LastDigit(#[from] LastDigitError),

    #[error("Plot error: {0}")]
    Plot(#[from] PlotError),

    #[error("Failed to configure progress display: {0}")]
    Progress(#[from] indicatif::style::TemplateError),

    #[error("Failed to prepare output directory: {0}")]
    OutputDir(#[from] std::io::Error),
}

type Result<T> = core::result::Result<T, AppError>;

fn main() -> ExitCode {
    // Diagnostics go to stderr; stdout carries the progress lines and results.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let args: Args = argh::from_env();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            println!("{}", error_message(&error));
            ExitCode::FAILURE
        }
    }
}

fn error_message(error: &AppError) -> String {
    match error {
        AppError::Input(input) => cli::error_message(input),
        other => cli::unexpected_error_message(other),
    }
}

fn run(args: &Args) -> Result<()> {
    // Base is validated before the limit is asked for
    let base = cli::read_base(args.base.as_deref())?;
    let limit = cli::read_limit(args.limit.as_deref())?;
    tracing::debug!(base, limit, output = %args.output.display(), "resolved input");

    if limit > RECOMMENDED_MAX_LIMIT {
        tracing::warn!(
            limit,
            recommended = RECOMMENDED_MAX_LIMIT,
            "limit is above the recommended maximum; sieving may take a while"
        );
    }

    println!("Generating prime numbers up to {}...", limit);
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg} [{elapsed}]")?);
    spinner.set_message("Sieving");
    spinner.enable_steady_tick(Duration::from_millis(100));
    let primes = generate_primes(limit);
    spinner.finish_and_clear();
    println!("Found {} prime numbers.", primes.len());

    println!("Counting the last digits in base {}...", base);
    let histogram = count_last_digits(&primes, base)?;
    println!("Last digit counts: {}", histogram);

    if histogram.len() <= MAX_BARS {
        println!("{}", format_digit_table(&histogram.entries()));
    }

    std::fs::create_dir_all(&args.output)?;
    generate_last_digit_analysis(&histogram, limit, &args.output)?;

    if args.no_plot {
        tracing::info!("chart rendering disabled");
        return Ok(());
    }

    if histogram.len() > MAX_BARS {
        println!(
            "Skipping plot: base {} has more than {} digits to draw.",
            base, MAX_BARS
        );
        return Ok(());
    }

    println!("Plotting the results...");
    let chart_path = create_last_digit_plot(&histogram, limit, &args.output)?;
    println!("Chart saved to {}", chart_path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::invalid_base(
        AppError::Input(cli::parse_base("0").unwrap_err()),
        "Error: Base must be at least 2."
    )]
    #[case::output_dir(
        AppError::OutputDir(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied")),
        "An unexpected error occurred: Failed to prepare output directory: denied"
    )]
    #[case::plot(
        AppError::Plot(PlotError::Drawing("backend gone".to_string())),
        "An unexpected error occurred: Plot error: Failed to draw chart elements: backend gone"
    )]
    fn maps_errors_to_user_messages(#[case] error: AppError, #[case] expected: &str) {
        assert_eq!(error_message(&error), expected);
    }

    #[test]
    fn parse_errors_ask_for_a_valid_integer() {
        let error = AppError::Input(cli::parse_limit("many").unwrap_err());
        assert!(error_message(&error).ends_with("Please enter a valid integer."));
    }
}
