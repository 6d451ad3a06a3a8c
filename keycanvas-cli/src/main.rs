use clap::Parser;
use tracing_subscriber::EnvFilter;

use keycanvas_cli::cli;
use keycanvas_cli::format::print_error;

fn main() {
    // Initialize tracing with configurable level via RUST_LOG env var.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::Cli::parse();

    if let Err(e) = cli::run(cli) {
        tracing::debug!(error = ?e, "command failed");
        print_error(&e.to_string(), e.hint());
        std::process::exit(1);
    }
}
