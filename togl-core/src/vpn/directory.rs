//! Connection directory query
//!
//! Lists the VPN connections configured on the host by running the
//! PowerShell `Get-VpnConnection` pipeline and normalizing its JSON
//! output into [`VpnConnection`] records.

use crate::error::DirectoryError;
use crate::vpn::connection::{ConnectionStatus, VpnConnection};
use crate::vpn::runner::{CommandRunner, SystemRunner};
use serde_json::Value;

/// PowerShell pipeline producing the connection records as JSON
const LIST_COMMAND: &str =
    "Get-VpnConnection | Select-Object -Property Name,ConnectionStatus | ConvertTo-Json";

/// Queries the host for configured VPN connections and their status
pub struct ConnectionDirectory {
    runner: Box<dyn CommandRunner>,
}

impl ConnectionDirectory {
    /// Create a directory backed by the real PowerShell invocation
    pub fn new() -> Self {
        Self::with_runner(Box::new(SystemRunner::new()))
    }

    /// Create a directory with a custom command runner
    pub fn with_runner(runner: Box<dyn CommandRunner>) -> Self {
        Self { runner }
    }

    /// List the configured VPN connections
    ///
    /// Fails with [`DirectoryError::NoConnectionsConfigured`] when the
    /// host has no usable profiles, and with
    /// [`DirectoryError::Unavailable`] when the failure text suggests
    /// the Windows VPN feature itself is missing.
    pub async fn list(&self) -> Result<Vec<VpnConnection>, DirectoryError> {
        let stdout = self
            .runner
            .run("powershell.exe", &["-NoProfile", "-Command", LIST_COMMAND])
            .await
            .map_err(|failure| {
                tracing::debug!("Listing command failed: {}", failure);
                if failure.message.contains("Get-VpnConnection") {
                    DirectoryError::Unavailable
                } else {
                    DirectoryError::Process {
                        message: failure.message,
                    }
                }
            })?;

        let connections = parse_directory_output(&stdout)?;
        tracing::debug!("Found {} VPN connections", connections.len());
        Ok(connections)
    }
}

impl Default for ConnectionDirectory {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse the listing command's JSON output into connection records
///
/// PowerShell emits a JSON array for multiple profiles but a bare object
/// for a single one, so both shapes are accepted. Records without a
/// usable name are dropped; any `ConnectionStatus` other than the exact
/// string `Connected` normalizes to `Disconnected`.
pub fn parse_directory_output(stdout: &str) -> Result<Vec<VpnConnection>, DirectoryError> {
    if stdout.trim().is_empty() {
        return Err(DirectoryError::NoConnectionsConfigured);
    }

    let value: Value = serde_json::from_str(stdout).map_err(|e| DirectoryError::Process {
        message: format!("Failed to parse connection list: {}", e),
    })?;

    // A single profile serializes as a bare object
    let records = match value {
        Value::Array(items) => items,
        other => vec![other],
    };

    let connections: Vec<VpnConnection> = records
        .iter()
        .filter_map(record_to_connection)
        .collect();

    if connections.is_empty() {
        return Err(DirectoryError::NoConnectionsConfigured);
    }

    Ok(connections)
}

/// Convert one JSON record into a connection, or drop it
///
/// Permissive on purpose: a missing or malformed status field means
/// `Disconnected`, only a missing/empty name disqualifies the record.
fn record_to_connection(record: &Value) -> Option<VpnConnection> {
    let name = record
        .get("Name")
        .and_then(Value::as_str)
        .filter(|name| !name.is_empty())?;

    let status = match record.get("ConnectionStatus").and_then(Value::as_str) {
        Some("Connected") => ConnectionStatus::Connected,
        _ => ConnectionStatus::Disconnected,
    };

    Some(VpnConnection {
        name: name.to_string(),
        status,
    })
}
