//! Trait seam over the live window.

use sash_common::{Point, Rect, Size};

use crate::show_state::ShowState;

/// Framework-agnostic view of a window for placement capture and restore.
///
/// `frame` is the window's current rectangle; `restore_bounds` is the
/// rectangle the window returns to when un-maximized or un-minimized,
/// which the framework tracks separately from the live frame.
pub trait PlacementWindow {
    fn frame(&self) -> Rect;
    fn restore_bounds(&self) -> Rect;
    fn show_state(&self) -> ShowState;
    fn set_origin(&mut self, origin: Point);
    fn set_size(&mut self, size: Size);
    fn set_show_state(&mut self, state: ShowState);
}

/// A plain value-type window.
///
/// Used in tests and by headless embedders that track their own window
/// rectangles and only need the capture/restore arithmetic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameWindow {
    pub frame: Rect,
    pub restore_bounds: Rect,
    pub show_state: ShowState,
}

impl FrameWindow {
    /// A normal-state window at the given frame, with restore bounds
    /// matching the frame.
    pub fn new(frame: Rect) -> Self {
        Self {
            frame,
            restore_bounds: frame,
            show_state: ShowState::Normal,
        }
    }
}

impl PlacementWindow for FrameWindow {
    fn frame(&self) -> Rect {
        self.frame
    }

    fn restore_bounds(&self) -> Rect {
        self.restore_bounds
    }

    fn show_state(&self) -> ShowState {
        self.show_state
    }

    fn set_origin(&mut self, origin: Point) {
        self.frame.x = origin.x;
        self.frame.y = origin.y;
    }

    fn set_size(&mut self, size: Size) {
        self.frame.width = size.width;
        self.frame.height = size.height;
    }

    fn set_show_state(&mut self, state: ShowState) {
        self.show_state = state;
    }
}
