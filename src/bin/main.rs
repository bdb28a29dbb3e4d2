use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use best_rational::approximate_str;

/// The value that is approximated, read as an exact decimal.
const VALUE: &str = "3232.45622121";
/// Largest denominator of the approximation.
const BOUND: i64 = 2323;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Approximating {} with denominators up to {}...", VALUE, BOUND);
    match approximate_str(VALUE, BOUND) {
        Ok(approximation) => {
            println!("{}", approximation);
            ExitCode::SUCCESS
        },
        Err(error) => {
            error!("{}", error);
            ExitCode::FAILURE
        },
    }
}
