//! Unified path management for rasoi client files.
//!
//! All client state lives under the platform config directory:
//!
//! ```text
//! ~/.config/rasoi/             # Config directory
//! ├── config.toml              # API origin and client settings
//! └── session.json             # Persisted session (token, username)
//! ```

use std::path::PathBuf;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

impl From<PathError> for rasoi_core::RasoiError {
    fn from(err: PathError) -> Self {
        rasoi_core::RasoiError::config(err.to_string())
    }
}

/// Unified path management for rasoi.
pub struct RasoiPaths;

impl RasoiPaths {
    /// Returns the rasoi configuration directory.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: Path to config directory (e.g., `~/.config/rasoi/`)
    /// - `Err(PathError::HomeDirNotFound)`: Could not determine directory
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join("rasoi"))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the path to the main configuration file.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the path to the persisted session file.
    ///
    /// # Security Note
    ///
    /// This file holds the bearer token. The session store sets its
    /// permissions to 600 (user read/write only) on Unix systems.
    pub fn session_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("session.json"))
    }
}
