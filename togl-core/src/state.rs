//! Persisted last-used state
//!
//! Handles loading and saving the single remembered connection name
//! to a TOML file in the user's configuration directory.

use crate::error::StateError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default state file name
const STATE_FILE_NAME: &str = "state.toml";

/// Process state persisted across runs
///
/// `last_used` is set only by a successful select-and-connect action
/// and is never validated against the current directory, so it may name
/// a connection that no longer exists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    /// Name of the last connection the user explicitly selected
    pub last_used: Option<String>,
}

impl AppState {
    /// Load state from a TOML file, defaulting when the file is missing
    pub fn from_file(path: &Path) -> Result<Self, StateError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No state file at {}, starting fresh", path.display());
                return Ok(Self::default());
            }
            Err(_) => {
                return Err(StateError::ReadFailed {
                    path: path.display().to_string(),
                })
            }
        };

        toml::from_str(&contents).map_err(|e| StateError::Parse {
            message: e.to_string(),
        })
    }

    /// Save state to a TOML file, creating the parent directory
    pub fn to_file(&self, path: &Path) -> Result<(), StateError> {
        let contents = toml::to_string_pretty(self).map_err(|e| StateError::Serialize {
            message: e.to_string(),
        })?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|_| StateError::WriteFailed {
                path: path.display().to_string(),
            })?;
        }

        std::fs::write(path, contents).map_err(|_| StateError::WriteFailed {
            path: path.display().to_string(),
        })
    }
}

/// Get the state directory
///
/// `TOGL_CONFIG_DIR` overrides everything (used by tests). Otherwise
/// `%APPDATA%\togl` on Windows, falling back to `$HOME/.config/togl`.
pub fn get_state_dir() -> Result<PathBuf, StateError> {
    if let Ok(dir) = std::env::var("TOGL_CONFIG_DIR") {
        return Ok(PathBuf::from(dir));
    }

    if let Ok(appdata) = std::env::var("APPDATA") {
        return Ok(PathBuf::from(appdata).join("togl"));
    }

    let home = std::env::var("HOME").map_err(|_| StateError::NoStateDir {
        message: "Neither APPDATA nor HOME is set".to_string(),
    })?;

    Ok(PathBuf::from(home).join(".config").join("togl"))
}

/// Get the default state file path
pub fn get_state_path() -> Result<PathBuf, StateError> {
    Ok(get_state_dir()?.join(STATE_FILE_NAME))
}

/// Load the persisted state from the default location
pub fn load_state() -> Result<AppState, StateError> {
    let path = get_state_path()?;
    AppState::from_file(&path)
}

/// Save the persisted state to the default location
pub fn save_state(state: &AppState) -> Result<(), StateError> {
    let path = get_state_path()?;
    state.to_file(&path)
}
