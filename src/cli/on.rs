//! Connect command
//!
//! Dials the last remembered VPN connection. If nothing has been
//! remembered yet the user is pointed at `togl pick` without any
//! process invocation.

use togl_core::error::{DialError, ToglError};
use togl_core::state;
use togl_core::vpn::Dialer;
use tracing::info;

/// Run the on command
pub async fn run_on() -> Result<(), ToglError> {
    let app_state = state::load_state()?;
    let dialer = Dialer::new();

    match connect_last(app_state.last_used.as_deref(), &dialer).await? {
        Some(name) => println!("Connected to VPN: {}", name),
        None => eprintln!("No VPN connection has been used yet. Please select a VPN first."),
    }

    Ok(())
}

/// Dial the remembered connection, if any
///
/// Returns the connected name, or `None` when no name is remembered.
/// The no-name case must not touch the dial utility at all.
async fn connect_last(
    last_used: Option<&str>,
    dialer: &Dialer,
) -> Result<Option<String>, DialError> {
    let Some(name) = last_used else {
        return Ok(None);
    };

    dialer.connect(name).await?;
    info!("Connected to VPN: {}", name);
    Ok(Some(name.to_string()))
}
