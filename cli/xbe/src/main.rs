//! xbe - command-line client for the XBE platform API.
//!
//! Reads and writes JSON:API resources (`xbe view`, `xbe do`), runs
//! server-side summaries, and manages stored tokens.

use clap::Parser;

mod catalog;
mod client;
mod commands;
mod config;
mod error;
mod logging;
mod output;
mod query;
mod rows;

use commands::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbosity());

    if let Err(e) = cli.run().await {
        error::print_error(&e);
        std::process::exit(error::exit_code(&e));
    }
}
