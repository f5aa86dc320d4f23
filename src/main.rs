use clap::Parser;
use log::error;
use std::process::ExitCode;
use vscout::cli::Cli;
use vscout::error::ScoutError;

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init_from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, "info"),
    );

    let cli = Cli::parse();

    // Dropping the pipeline future cancels any in-flight request.
    let result = tokio::select! {
        res = vscout::run(cli) => res,
        _ = tokio::signal::ctrl_c() => Err(ScoutError::Interrupted),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
