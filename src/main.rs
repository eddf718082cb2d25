//! gdfetch command-line entry point.

use std::io;
use std::process;

use gdfetch::cli::execute;
use gdfetch::{FetcherBuilder, LinePrompt};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    init_logging();

    let mut prompt = LinePrompt::stdio();
    let code = execute(
        std::env::args_os(),
        FetcherBuilder::new(),
        &mut prompt,
        &mut io::stdout(),
        &mut io::stderr(),
    )
    .await;

    process::exit(code);
}

/// Logs go to stderr so stdout only carries the report. `RUST_LOG`
/// overrides the default level.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("gdfetch=warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}
