//! arity — prints arity-indexed overload declarations for pasting into
//! source files.
//!
//! # Usage
//!
//! ```text
//! arity            # write every catalog label to stdout
//! arity --help
//! arity --version
//! ```
//!
//! Output is fully determined by the catalog compiled into the binary.
//! Diagnostics go to stderr and are controlled by `RUST_LOG`.

use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;

use arity_renderer::BatchDriver;

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "arity",
    version,
    about = "Print arity-indexed overload declarations from the built-in catalog",
    long_about = None,
)]
struct Cli {}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    let _cli = Cli::parse();
    init_tracing();

    let driver = BatchDriver::builtin().context("built-in catalog failed to compile")?;
    tracing::debug!(
        repeat_count = driver.catalog().repeat_count,
        collections = driver.catalog().collections.len(),
        "catalog loaded"
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    driver
        .write_to(&mut out)
        .context("failed to write generated declarations")?;
    out.flush().context("failed to flush stdout")?;
    Ok(())
}

/// Logs go to stderr so stdout stays paste-ready. Defaults to `warn`.
fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
