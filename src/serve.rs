use std::process::ExitCode;

use clap::Parser;
use coi_serve::{Cli, ServeConfig};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    coi_serve::init_logging();

    let result = match ServeConfig::from_cli(Cli::parse()) {
        Ok(config) => coi_serve::run(config).await,
        Err(err) => Err(err),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
