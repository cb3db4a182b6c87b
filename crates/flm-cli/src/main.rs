use clap::Parser;
use flm_core::logging;

mod cli;

use crate::cli::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Logging goes to stderr unless a log file was asked for and can be opened.
    if !cli.log_file || logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    if let Err(err) = cli.run().await {
        eprintln!("flm error: {:#}", err);
        std::process::exit(1);
    }
}
