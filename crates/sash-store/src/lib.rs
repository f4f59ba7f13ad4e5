//! Durable storage for window placements.
//!
//! Persists a [`PersistedState`] — a versioned map of placement records —
//! as a TOML file, by default under the platform config directory. Writes
//! are atomic (write to `.tmp`, then rename) so a crash mid-write never
//! corrupts the previous state.
//!
//! The store never decides *when* to write; embedders load before restoring
//! their first window and write at shutdown when
//! [`PlacementMemory::dirty`](sash_placement::PlacementMemory::dirty) says
//! something changed.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use sash_store::{load_or_default, save_to_path, default_state_path};
//!
//! let path = default_state_path().expect("no config dir");
//! let state = load_or_default(&path);
//! let mut memory = state.into_memory();
//! // ... run the application ...
//! if memory.dirty() {
//!     let snapshot = sash_store::PersistedState::snapshot(&memory);
//!     save_to_path(&snapshot, &path).expect("failed to persist placements");
//!     memory.mark_clean();
//! }
//! ```

mod paths;
mod state;
mod store;

#[cfg(test)]
mod tests;

pub use paths::default_state_path;
pub use state::{PersistedState, STATE_VERSION};
pub use store::{load_from_path, load_or_default, save_to_path};
