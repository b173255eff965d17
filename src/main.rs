use clap::Parser;
use owo_colors::{OwoColorize, Stream};
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use dexbrowse::cli::Cli;

/// Log to stderr so stdout stays clean for tables and JSON.
///
/// `RUST_LOG` wins over `--verbose` when set.
fn init_logging(verbose: bool) {
    let default = if verbose { "dexbrowse=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    if cli.no_color {
        owo_colors::set_override(false);
    }

    match cli.run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!(
                "{} {}",
                "error:".if_supports_color(Stream::Stderr, |t| t.red()),
                e
            );
            ExitCode::FAILURE
        }
    }
}
