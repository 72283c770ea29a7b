//! Dial utility wrapper
//!
//! Establishes or tears down a named VPN connection through `rasdial`.
//! The tool's exit behavior is trusted as-is: no retry, no timeout, and
//! no check that the name exists before dialing.

use crate::error::DialError;
use crate::vpn::runner::{CommandRunner, SystemRunner};

/// Flag passed to rasdial to hang up instead of dial
const DISCONNECT_FLAG: &str = "/DISCONNECT";

/// Dials and hangs up named VPN connections
pub struct Dialer {
    runner: Box<dyn CommandRunner>,
}

impl Dialer {
    /// Create a dialer backed by the real rasdial invocation
    pub fn new() -> Self {
        Self::with_runner(Box::new(SystemRunner::new()))
    }

    /// Create a dialer with a custom command runner
    pub fn with_runner(runner: Box<dyn CommandRunner>) -> Self {
        Self { runner }
    }

    /// Connect to the named VPN
    ///
    /// Dialing an already-connected name is whatever rasdial does with
    /// it; no idempotence is layered on top.
    pub async fn connect(&self, name: &str) -> Result<(), DialError> {
        tracing::info!("Dialing VPN connection: {}", name);
        self.runner
            .run("rasdial", &[name])
            .await
            .map(|_| ())
            .map_err(|failure| DialError::ConnectFailed {
                name: name.to_string(),
                cause: failure.message,
            })
    }

    /// Disconnect the named VPN
    pub async fn disconnect(&self, name: &str) -> Result<(), DialError> {
        tracing::info!("Hanging up VPN connection: {}", name);
        self.runner
            .run("rasdial", &[name, DISCONNECT_FLAG])
            .await
            .map(|_| ())
            .map_err(|failure| DialError::DisconnectFailed {
                name: name.to_string(),
                cause: failure.message,
            })
    }
}

impl Default for Dialer {
    fn default() -> Self {
        Self::new()
    }
}
