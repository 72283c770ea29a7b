//! VPN directory and dialing module
//!
//! Wraps the host's connection-listing and dial utilities behind small
//! typed operations.

pub mod connection;
pub mod dialer;
pub mod directory;
pub mod runner;

// Public re-exports
pub use connection::{ConnectionStatus, VpnConnection};
pub use dialer::Dialer;
pub use directory::ConnectionDirectory;
pub use runner::{CommandRunner, ProcessFailure, SystemRunner};
