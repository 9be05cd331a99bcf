use std::io;
use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use csa_planner::session::{self, SessionConfig};

fn main() -> ExitCode {
    // Logs go to stderr; stdout carries only answers
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = match SessionConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();

    match session::run(&mut input, &mut output, &config) {
        Ok(summary) => {
            info!(
                queries = summary.queries,
                solved = summary.solved,
                exhausted = summary.exhausted,
                "Session finished"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Session failed");
            ExitCode::FAILURE
        }
    }
}
