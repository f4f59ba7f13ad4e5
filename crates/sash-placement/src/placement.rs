//! The per-window placement record and capture logic.

use serde::{Deserialize, Serialize};
use tracing::debug;

use sash_common::{PlacementError, Point, Size};

use crate::show_state::ShowState;
use crate::window::PlacementWindow;

/// Everything remembered about one logical window across restarts.
///
/// `location`/`size` hold the window's normal-state rectangle;
/// `restoration_location`/`restoration_size` hold the rectangle to return
/// to when the window leaves a maximized or minimized state. The two pairs
/// are captured at different times and serve different restore paths, so
/// they are stored separately.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowPlacement {
    pub location: Point,
    pub size: Size,
    pub show_state: ShowState,
    pub restoration_location: Point,
    pub restoration_size: Size,
    /// Whether the location fields participate in save/restore.
    /// Fixed when the record is created.
    pub save_location: bool,
    /// Whether the size fields participate in save/restore.
    /// Fixed when the record is created.
    pub save_size: bool,
    /// True iff the most recent save actually altered a stored value.
    #[serde(skip)]
    has_changed: bool,
    /// One-shot latch: geometry is applied at most once per window
    /// instance. Cleared when a new instance is attached.
    #[serde(skip)]
    pub(crate) applied: bool,
}

impl WindowPlacement {
    pub fn with_options(save_location: bool, save_size: bool) -> Self {
        Self {
            save_location,
            save_size,
            ..Self::default()
        }
    }

    /// Whether the most recent `save_position` altered a stored value.
    pub fn has_changed(&self) -> bool {
        self.has_changed
    }

    /// Whether geometry has already been applied to the current window
    /// instance.
    pub fn position_applied(&self) -> bool {
        self.applied
    }

    /// Re-arm the record for a freshly created window instance.
    pub fn reset_applied(&mut self) {
        self.applied = false;
    }

    /// Capture the window's current geometry and show state.
    ///
    /// Returns whether anything stored actually changed. Location and size
    /// are independent concerns: a resize never trips the location dirty
    /// check and a move never trips the size check. Non-normal states
    /// capture the window's restore bounds instead of its live frame.
    ///
    /// The window is not mutated. A window reporting a non-finite frame is
    /// rejected before any stored value changes.
    pub fn save_position(
        &mut self,
        window: &impl PlacementWindow,
    ) -> Result<bool, PlacementError> {
        let frame = window.frame();
        if !frame.is_finite() {
            return Err(PlacementError::InvalidFrame(format!(
                "window frame has non-finite coordinates: {frame:?}"
            )));
        }

        let state = window.show_state();
        let restore_bounds = window.restore_bounds();
        if state != ShowState::Normal && !restore_bounds.is_finite() {
            return Err(PlacementError::InvalidFrame(format!(
                "window restore bounds have non-finite coordinates: {restore_bounds:?}"
            )));
        }

        self.has_changed = false;

        if state != self.show_state {
            self.show_state = state;
            self.has_changed = true;
        }

        if state != ShowState::Normal {
            if self.save_location {
                let origin = restore_bounds.origin();
                if !origin.approx_eq(&self.restoration_location) {
                    self.restoration_location = origin;
                    self.has_changed = true;
                }
            }
            if self.save_size {
                let size = restore_bounds.size();
                if !size.approx_eq(&self.restoration_size) {
                    self.restoration_size = size;
                    self.has_changed = true;
                }
            }
        } else {
            if self.save_location {
                let origin = frame.origin();
                if !origin.approx_eq(&self.location) {
                    self.location = origin;
                    self.has_changed = true;
                }
            }
            if self.save_size {
                let size = frame.size();
                if !size.approx_eq(&self.size) {
                    self.size = size;
                    self.has_changed = true;
                }
            }
        }

        if self.has_changed {
            debug!(state = ?self.show_state, "captured window placement");
        }
        Ok(self.has_changed)
    }
}
