//! Status command
//!
//! Prints each configured VPN connection with its current status.

use colored::Colorize;
use togl_core::error::ToglError;
use togl_core::vpn::ConnectionDirectory;

/// Run the status command
pub async fn run_status() -> Result<(), ToglError> {
    let directory = ConnectionDirectory::new();
    let connections = directory.list().await?;

    for connection in &connections {
        let status = if connection.status.is_connected() {
            "Connected".green().bold()
        } else {
            "Disconnected".dimmed()
        };
        println!("{:<32} {}", connection.name, status);
    }

    Ok(())
}
