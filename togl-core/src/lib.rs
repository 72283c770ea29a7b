//! Core library for the togl VPN toggle tool
//!
//! This crate provides the directory query, dial operations, and
//! last-used state persistence behind the togl CLI.

pub mod error;
pub mod state;
pub mod vpn;

/// Initialize logging infrastructure
///
/// Sets up tracing with stderr output so diagnostics never mix into
/// stdout, which carries the user-facing command output.
pub fn init_logging() -> Result<(), Box<dyn std::error::Error>> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::filter::LevelFilter::INFO)
        .init();

    Ok(())
}
