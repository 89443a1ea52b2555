use anyhow::Result;

use ucdgen::cli::run_cli;
use ucdgen::logging;

#[tokio::main]
async fn main() -> Result<()> {
    logging::init();

    // Full argument vector, executable path included; any error propagates
    // here, prints to stderr, and exits nonzero.
    run_cli(std::env::args().collect()).await
}
