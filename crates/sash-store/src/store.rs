//! State file reading and atomic writing.

use std::path::Path;

use tracing::{debug, info, warn};

use sash_common::StoreError;

use crate::state::PersistedState;

/// Load state from a specific TOML file.
///
/// A missing file is [`StoreError::FileNotFound`]; unreadable or invalid
/// content is [`StoreError::ParseError`]. Missing fields deserialize to
/// defaults, so partial files from older versions load cleanly.
pub fn load_from_path(path: &Path) -> Result<PersistedState, StoreError> {
    if !path.exists() {
        return Err(StoreError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| StoreError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let state: PersistedState = toml::from_str(&content)
        .map_err(|e| StoreError::ParseError(format!("failed to parse TOML: {e}")))?;

    info!(
        placements = state.placements.len(),
        "loaded placement state from {}",
        path.display()
    );
    Ok(state)
}

/// Load state, falling back to an empty default.
///
/// A missing file is the normal first-run case and loads silently as the
/// default; a present-but-unreadable file is logged and also falls back,
/// so a corrupt state file never blocks startup.
pub fn load_or_default(path: &Path) -> PersistedState {
    match load_from_path(path) {
        Ok(state) => state,
        Err(StoreError::FileNotFound(_)) => {
            debug!("no placement state at {}, starting empty", path.display());
            PersistedState::default()
        }
        Err(e) => {
            warn!("failed to load placement state: {e}, starting empty");
            PersistedState::default()
        }
    }
}

/// Write state to a specific path.
///
/// Creates parent directories if they don't exist. Uses atomic write
/// (write to `.tmp` file, then rename) to prevent partial writes.
pub fn save_to_path(state: &PersistedState, path: &Path) -> Result<(), StoreError> {
    let toml_str = toml::to_string_pretty(state)
        .map_err(|e| StoreError::WriteError(format!("failed to serialize state to TOML: {e}")))?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            StoreError::WriteError(format!(
                "failed to create state directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    let tmp_path = path.with_extension("toml.tmp");
    std::fs::write(&tmp_path, &toml_str).map_err(|e| {
        StoreError::WriteError(format!(
            "failed to write state to {}: {e}",
            tmp_path.display()
        ))
    })?;

    if let Err(e) = std::fs::rename(&tmp_path, path) {
        // Rename failed — try direct write as fallback (Windows compat)
        warn!("atomic rename failed ({}), falling back to direct write", e);
        std::fs::write(path, &toml_str).map_err(|e2| {
            StoreError::WriteError(format!("failed to write state to {}: {e2}", path.display()))
        })?;
    }

    debug!(path = %path.display(), "placement state saved to disk");
    Ok(())
}
