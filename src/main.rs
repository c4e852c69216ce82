//! Hokie Nest CLI entrypoint for browsing and contacting property listings.

use std::io::{self, Write};
use std::process::ExitCode;

use hokie_nest::{ListingError, NestConfig, cli};
use ortho_config::OrthoConfig;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), ListingError> {
    let config = load_config()?;
    cli::run(&config).await
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`ListingError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<NestConfig, ListingError> {
    NestConfig::load().map_err(|error| ListingError::Configuration {
        message: error.to_string(),
    })
}
