//! Disconnect command
//!
//! Hangs up the last remembered VPN connection.

use togl_core::error::{DialError, ToglError};
use togl_core::state;
use togl_core::vpn::Dialer;
use tracing::info;

/// Run the off command
pub async fn run_off() -> Result<(), ToglError> {
    let app_state = state::load_state()?;
    let dialer = Dialer::new();

    match disconnect_last(app_state.last_used.as_deref(), &dialer).await? {
        Some(name) => println!("Disconnected from VPN: {}", name),
        None => eprintln!("No VPN connection has been used yet."),
    }

    Ok(())
}

/// Hang up the remembered connection, if any
async fn disconnect_last(
    last_used: Option<&str>,
    dialer: &Dialer,
) -> Result<Option<String>, DialError> {
    let Some(name) = last_used else {
        return Ok(None);
    };

    dialer.disconnect(name).await?;
    info!("Disconnected from VPN: {}", name);
    Ok(Some(name.to_string()))
}
