//! CLI command implementations
//!
//! This module contains the implementation of all CLI subcommands.

pub mod off;
pub mod on;
pub mod pick;
pub mod status;
