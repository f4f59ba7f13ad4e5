//! Placement restore — geometry application and display clamping.

use tracing::debug;

use sash_common::{PlacementError, Point, Size};

use crate::placement::WindowPlacement;
use crate::screens::DisplayLayout;
use crate::show_state::ShowState;
use crate::window::PlacementWindow;

impl WindowPlacement {
    /// Reapply the stored placement to a window.
    ///
    /// Geometry is applied at most once per window instance; a second call
    /// on the same instance is a no-op. Stored normal-state geometry is
    /// clamped against the virtual screen so a rectangle saved on a monitor
    /// that no longer exists still lands fully visible. A record that was
    /// never saved leaves the window's geometry untouched.
    ///
    /// The stored show state is reapplied unconditionally, whichever
    /// geometry branch ran.
    pub fn load_position(
        &mut self,
        window: &mut impl PlacementWindow,
        screens: &DisplayLayout,
    ) -> Result<(), PlacementError> {
        if self.applied {
            return Ok(());
        }

        let frame = window.frame();
        if !frame.is_finite() {
            return Err(PlacementError::InvalidFrame(format!(
                "window frame has non-finite coordinates: {frame:?}"
            )));
        }
        if !self.location.is_finite()
            || !self.size.is_finite()
            || !self.restoration_location.is_finite()
            || !self.restoration_size.is_finite()
        {
            return Err(PlacementError::InvalidFrame(
                "stored placement has non-finite coordinates".into(),
            ));
        }
        if !screens.virtual_bounds.is_finite() {
            return Err(PlacementError::Screen(
                "virtual screen bounds are not finite".into(),
            ));
        }

        if self.show_state == ShowState::Normal {
            let apply_size = self.save_size && self.size.is_positive();
            if apply_size {
                window.set_size(self.size);
            }

            if self.save_location && !self.location.is_origin() {
                // Clamp against the size the window will actually have.
                let size = if apply_size { self.size } else { frame.size() };
                let origin = clamp_to_layout(self.location, size, screens);
                if origin != self.location {
                    debug!(
                        saved = ?self.location,
                        clamped = ?origin,
                        "saved location falls outside the current display layout"
                    );
                }
                window.set_origin(origin);
            }
        } else if self.save_location && !self.restoration_location.is_origin() {
            window.set_origin(self.restoration_location);
            if self.save_size {
                window.set_size(self.restoration_size);
            }
        }

        window.set_show_state(self.show_state);
        self.applied = true;
        Ok(())
    }
}

/// Clamp a saved origin so the window stays inside the virtual screen, then
/// correct for a secondary monitor of lesser vertical extent.
fn clamp_to_layout(saved: Point, size: Size, screens: &DisplayLayout) -> Point {
    let vs = &screens.virtual_bounds;
    let mut origin = saved;

    if origin.x + size.width > vs.right() {
        origin.x = vs.right() - size.width;
    } else if origin.x < vs.x {
        origin.x = vs.x;
    }

    if origin.y + size.height > vs.bottom() {
        origin.y = vs.bottom() - size.height;
    } else if origin.y < vs.y {
        origin.y = vs.y;
    }

    // A saved point on a secondary monitor shorter than the virtual screen
    // can pass the clamp above yet still hang off that monitor's bottom
    // edge. Shift up so the window stays fully visible where it was saved.
    if screens.monitors.len() > 1 {
        if let Some(monitor) = screens.monitor_containing_point(saved.x, saved.y) {
            if !monitor.is_primary && monitor.bounds.bottom() < origin.y + size.height {
                origin.y = monitor.bounds.bottom() - size.height;
            }
        }
    }

    origin
}
