//! Error types for the togl VPN toggle tool
//!
//! This module defines all error types used throughout the application,
//! providing consistent error handling and user-friendly error messages.

use thiserror::Error;

/// Main error type for the togl application
#[derive(Error, Debug)]
pub enum ToglError {
    /// Errors raised while querying the connection directory
    #[error("{0}")]
    Directory(#[from] DirectoryError),

    /// Errors raised while dialing or hanging up a connection
    #[error("{0}")]
    Dial(#[from] DialError),

    /// Errors related to the persisted last-used state
    #[error("State error: {0}")]
    State(#[from] StateError),

    /// Generic I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from the connection-listing query
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    /// The host produced no usable VPN profiles. Expected on machines
    /// without any configured VPN, not a crash.
    #[error("No VPN connections found. Please configure a VPN connection in Windows first.")]
    NoConnectionsConfigured,

    /// The listing command itself failed in a way that points at the
    /// Windows VPN feature being absent. Detected by matching the
    /// cmdlet name in the failure text; fragile and locale-dependent.
    #[error("Unable to detect VPN connections. Please ensure you have the Windows VPN feature enabled.")]
    Unavailable,

    /// Any other failure of the listing pipeline, message passed through
    #[error("{message}")]
    Process { message: String },
}

/// Errors from the dial utility
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DialError {
    #[error("Failed to connect to VPN \"{name}\": {cause}")]
    ConnectFailed { name: String, cause: String },

    #[error("Failed to disconnect VPN \"{name}\": {cause}")]
    DisconnectFailed { name: String, cause: String },
}

/// Persisted-state I/O errors
#[derive(Error, Debug)]
pub enum StateError {
    #[error("Failed to read state file: {path}")]
    ReadFailed { path: String },

    #[error("Failed to write state file: {path}")]
    WriteFailed { path: String },

    #[error("Failed to parse state file: {message}")]
    Parse { message: String },

    #[error("Failed to serialize state: {message}")]
    Serialize { message: String },

    #[error("Failed to resolve state directory: {message}")]
    NoStateDir { message: String },
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, ToglError>;
