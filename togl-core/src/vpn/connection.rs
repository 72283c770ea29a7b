//! VPN connection record types
//!
//! A connection is produced fresh on every directory query and carries
//! no identity beyond its name.

/// Live status of a configured VPN connection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionStatus {
    Connected,
    Disconnected,
}

impl Default for ConnectionStatus {
    fn default() -> Self {
        Self::Disconnected
    }
}

impl std::fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConnectionStatus::Connected => write!(f, "Connected"),
            ConnectionStatus::Disconnected => write!(f, "Disconnected"),
        }
    }
}

impl ConnectionStatus {
    /// Check if this status is connected
    pub fn is_connected(&self) -> bool {
        matches!(self, ConnectionStatus::Connected)
    }
}

/// A configured VPN connection as reported by the host
///
/// Ephemeral: constructed from the listing command's output, never
/// cached across queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VpnConnection {
    /// Connection name, non-empty and unique per host
    pub name: String,

    /// Status at the time of the query
    pub status: ConnectionStatus,
}
