use roster_core::logging;

mod cli;

use crate::cli::CliCommand;

#[tokio::main]
async fn main() {
    // File logging first; if the state dir is unwritable, keep diagnostics
    // on stderr instead of crashing.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    if let Err(err) = CliCommand::run_from_args().await {
        eprintln!("roster error: {:#}", err);
        std::process::exit(1);
    }
}
