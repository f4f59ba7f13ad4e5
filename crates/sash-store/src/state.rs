//! The on-disk state shape.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use sash_common::WindowKey;
use sash_placement::{PlacementMemory, WindowPlacement};

pub const STATE_VERSION: u32 = 1;

fn default_state_version() -> u32 {
    STATE_VERSION
}

/// Root of the state file: a format version plus one placement record per
/// window key. Unknown or missing sections deserialize to defaults so
/// newer files stay readable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistedState {
    #[serde(default = "default_state_version")]
    pub version: u32,
    pub placements: BTreeMap<WindowKey, WindowPlacement>,
}

impl Default for PersistedState {
    fn default() -> Self {
        Self {
            version: STATE_VERSION,
            placements: BTreeMap::new(),
        }
    }
}

impl PersistedState {
    /// Capture the registry's current records for writing.
    pub fn snapshot(memory: &PlacementMemory) -> Self {
        Self {
            version: STATE_VERSION,
            placements: memory.placements().clone(),
        }
    }

    /// Build a registry from loaded records. The registry starts clean;
    /// nothing needs rewriting until a save changes a record.
    pub fn into_memory(self) -> PlacementMemory {
        PlacementMemory::from_placements(self.placements)
    }
}
