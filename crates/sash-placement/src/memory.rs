//! The per-process placement registry.
//!
//! One [`PlacementMemory`] is constructed by the embedder and passed to
//! whatever opens and closes windows; there is no process-wide instance.
//! Records are created on first [`enable`](PlacementMemory::enable) for a
//! key and handed back on every later call, so save/restore participation
//! is fixed the first time a window identity is seen.

use std::collections::BTreeMap;

use tracing::warn;

use sash_common::{PlacementError, WindowKey};

use crate::placement::WindowPlacement;
use crate::screens::ScreenSource;
use crate::window::PlacementWindow;

/// Which parts of a window's geometry participate in save/restore.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementOptions {
    pub save_location: bool,
    pub save_size: bool,
}

impl Default for PlacementOptions {
    fn default() -> Self {
        Self {
            save_location: true,
            save_size: true,
        }
    }
}

impl PlacementOptions {
    pub fn location_only() -> Self {
        Self {
            save_location: true,
            save_size: false,
        }
    }

    pub fn size_only() -> Self {
        Self {
            save_location: false,
            save_size: true,
        }
    }
}

/// Registry of placement records, keyed by logical window identity.
#[derive(Debug, Default)]
pub struct PlacementMemory {
    placements: BTreeMap<WindowKey, WindowPlacement>,
    dirty: bool,
}

impl PlacementMemory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a registry from previously persisted records.
    pub fn from_placements(placements: BTreeMap<WindowKey, WindowPlacement>) -> Self {
        Self {
            placements,
            dirty: false,
        }
    }

    /// Turn placement memory on for a window identity.
    ///
    /// Creates the record on first access with the given options; later
    /// calls (including records loaded from disk) keep the options the
    /// record was created with. Always re-arms the one-shot apply latch
    /// for the new window instance.
    pub fn enable(&mut self, key: impl Into<WindowKey>, options: PlacementOptions) {
        let record = self
            .placements
            .entry(key.into())
            .or_insert_with(|| {
                WindowPlacement::with_options(options.save_location, options.save_size)
            });
        record.reset_applied();
    }

    pub fn get(&self, key: &WindowKey) -> Option<&WindowPlacement> {
        self.placements.get(key)
    }

    /// Capture a closing window's placement.
    ///
    /// Returns whether the stored record changed; the registry stays dirty
    /// until [`mark_clean`](Self::mark_clean) once any save has changed
    /// anything. An unknown key is recorded with default options first.
    pub fn save_on_close(
        &mut self,
        key: &WindowKey,
        window: &impl PlacementWindow,
    ) -> Result<bool, PlacementError> {
        let record = self
            .placements
            .entry(key.clone())
            .or_insert_with(|| {
                let options = PlacementOptions::default();
                WindowPlacement::with_options(options.save_location, options.save_size)
            });
        let changed = record.save_position(window)?;
        self.dirty |= changed;
        Ok(changed)
    }

    /// Reapply a stored placement to an opening window.
    ///
    /// A key with no stored record leaves the window untouched.
    pub fn restore_on_open(
        &mut self,
        key: &WindowKey,
        window: &mut impl PlacementWindow,
        screens: &impl ScreenSource,
    ) -> Result<(), PlacementError> {
        let Some(record) = self.placements.get_mut(key) else {
            return Ok(());
        };
        let layout = screens.layout()?;
        record.load_position(window, &layout)
    }

    /// [`restore_on_open`](Self::restore_on_open), but a failure never
    /// propagates: the window keeps its framework-assigned default position
    /// and the error is logged and handed back as a value for callers that
    /// want to surface it.
    pub fn restore_best_effort(
        &mut self,
        key: &WindowKey,
        window: &mut impl PlacementWindow,
        screens: &impl ScreenSource,
    ) -> Option<PlacementError> {
        match self.restore_on_open(key, window, screens) {
            Ok(()) => None,
            Err(e) => {
                warn!(key = %key, error = %e, "window placement restore failed; keeping defaults");
                Some(e)
            }
        }
    }

    /// Whether any save since construction (or the last
    /// [`mark_clean`](Self::mark_clean)) changed a stored record. Callers
    /// consult this at shutdown to decide whether to rewrite the state file.
    pub fn dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// All records, for persistence snapshots.
    pub fn placements(&self) -> &BTreeMap<WindowKey, WindowPlacement> {
        &self.placements
    }
}
