//! State-file path resolution.

use std::path::PathBuf;

use sash_common::StoreError;

/// Platform default location of the state file.
///
/// On macOS: `~/Library/Application Support/sash/state.toml`
/// On Linux: `~/.config/sash/state.toml`
pub fn default_state_path() -> Result<PathBuf, StoreError> {
    let config_dir = dirs::config_dir().ok_or(StoreError::NoStateDir)?;
    Ok(config_dir.join("sash").join("state.toml"))
}
