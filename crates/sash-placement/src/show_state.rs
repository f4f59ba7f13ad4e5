//! Window show state.

use serde::{Deserialize, Serialize};

/// Whether a window is shown normally, maximized, or minimized.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum ShowState {
    #[default]
    Normal,
    Maximized,
    Minimized,
}
