//! mdpdf CLI binary entry point
//!
//! Installs the log subscriber, then calls the library's `run_cli()`.

use anyhow::Result;
use mdpdf_cli::run_cli;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    run_cli().await
}
