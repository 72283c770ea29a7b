//! Select-and-connect command
//!
//! Lists the configured VPN connections, lets the user pick one by
//! number, dials it, and on success remembers the name for `togl on`
//! and `togl off`.

use std::io::{self, BufRead, Write};
use std::path::Path;
use togl_core::error::ToglError;
use togl_core::state::{self, AppState};
use togl_core::vpn::{ConnectionDirectory, Dialer};
use tracing::info;

/// Run the pick command
pub async fn run_pick() -> Result<(), ToglError> {
    let directory = ConnectionDirectory::new();
    let connections = directory.list().await?;

    println!("Configured VPN connections:");
    for (index, connection) in connections.iter().enumerate() {
        println!("  {}. {} ({})", index + 1, connection.name, connection.status);
    }
    println!();

    let Some(index) = prompt_selection(&mut io::stdin().lock(), connections.len())? else {
        println!("Selection cancelled.");
        return Ok(());
    };
    let name = connections[index].name.clone();

    let dialer = Dialer::new();
    let state_path = state::get_state_path()?;
    connect_and_remember(&dialer, &name, &state_path).await?;

    println!("Connected to VPN: {}", name);
    Ok(())
}

/// Prompt for a 1-based selection, empty input (or EOF) cancels
///
/// Out-of-range and non-numeric input re-prompts.
fn prompt_selection(input: &mut impl BufRead, count: usize) -> Result<Option<usize>, ToglError> {
    loop {
        print!("Select VPN connection [1-{}] (empty to cancel): ", count);
        io::stdout().flush()?;

        let mut line = String::new();
        input.read_line(&mut line)?;
        let line = line.trim();

        if line.is_empty() {
            return Ok(None);
        }

        match line.parse::<usize>() {
            Ok(n) if (1..=count).contains(&n) => return Ok(Some(n - 1)),
            _ => println!("Please enter a number between 1 and {}.", count),
        }
    }
}

/// Dial the chosen connection, then persist it as the remembered name
///
/// The name is written only after the dial succeeded; a failed dial
/// must leave the state untouched.
async fn connect_and_remember(
    dialer: &Dialer,
    name: &str,
    state_path: &Path,
) -> Result<(), ToglError> {
    dialer.connect(name).await?;

    let mut app_state = AppState::from_file(state_path)?;
    app_state.last_used = Some(name.to_string());
    app_state.to_file(state_path)?;
    info!("Remembered VPN connection: {}", name);

    Ok(())
}
