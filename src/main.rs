//! togl - Windows VPN toggle CLI
//!
//! A command-line tool for toggling named Windows VPN connections by
//! shelling out to the OS tools (Get-VpnConnection and rasdial).

use clap::{Parser, Subcommand};
use togl_core::{error::ToglError, init_logging};

mod cli;

#[derive(Parser)]
#[command(name = "togl")]
#[command(about = "Toggle Windows VPN connections from the command line")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Connect using the last remembered VPN connection
    On,
    /// Disconnect the last remembered VPN connection
    Off,
    /// List VPN connections and connect to a chosen one
    Pick,
    /// Show configured VPN connections and their status
    Status,
}

#[tokio::main]
async fn main() {
    // Initialize logging
    if let Err(e) = init_logging() {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(2);
    }

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::On => cli::on::run_on().await,
        Commands::Off => cli::off::run_off().await,
        Commands::Pick => cli::pick::run_pick().await,
        Commands::Status => cli::status::run_status().await,
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            let exit_code = match e {
                // State/configuration errors (exit code 2)
                ToglError::State(_) => 2,
                // Runtime errors (exit code 1)
                ToglError::Directory(_) | ToglError::Dial(_) | ToglError::Io(_) => 1,
            };

            eprintln!("VPN Error: {}", e);
            std::process::exit(exit_code);
        }
    }
}
