//! Trait seam over display geometry.
//!
//! Restore-time clamping needs the virtual screen (the bounding rectangle
//! spanning all attached monitors) and the individual monitor bounds.
//! Embedders supply both through [`ScreenSource`]; [`StaticScreens`] serves
//! tests and callers that already know their layout.

use sash_common::{PlacementError, Rect};

/// Bounds of one physical monitor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonitorBounds {
    pub bounds: Rect,
    pub is_primary: bool,
}

/// The display configuration at one point in time.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayLayout {
    /// Bounding rectangle spanning all attached monitors.
    pub virtual_bounds: Rect,
    pub monitors: Vec<MonitorBounds>,
}

impl DisplayLayout {
    /// A single-monitor layout whose virtual screen equals the monitor.
    pub fn single(bounds: Rect) -> Self {
        Self {
            virtual_bounds: bounds,
            monitors: vec![MonitorBounds {
                bounds,
                is_primary: true,
            }],
        }
    }

    pub fn monitor_containing_point(&self, x: f64, y: f64) -> Option<&MonitorBounds> {
        self.monitors.iter().find(|m| m.bounds.contains_point(x, y))
    }
}

/// Source of the current display layout.
pub trait ScreenSource {
    fn layout(&self) -> Result<DisplayLayout, PlacementError>;
}

/// A fixed display layout.
#[derive(Debug, Clone)]
pub struct StaticScreens {
    layout: DisplayLayout,
}

impl StaticScreens {
    pub fn new(layout: DisplayLayout) -> Self {
        Self { layout }
    }

    /// Convenience for the common one-monitor case.
    pub fn single(bounds: Rect) -> Self {
        Self::new(DisplayLayout::single(bounds))
    }
}

impl ScreenSource for StaticScreens {
    fn layout(&self) -> Result<DisplayLayout, PlacementError> {
        if !self.layout.virtual_bounds.is_finite() {
            return Err(PlacementError::Screen(
                "virtual screen bounds are not finite".into(),
            ));
        }
        Ok(self.layout.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: f64, y: f64, width: f64, height: f64) -> Rect {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    #[test]
    fn single_layout_has_primary_monitor() {
        let layout = DisplayLayout::single(rect(0.0, 0.0, 1920.0, 1080.0));
        assert_eq!(layout.monitors.len(), 1);
        assert!(layout.monitors[0].is_primary);
        assert_eq!(layout.virtual_bounds, layout.monitors[0].bounds);
    }

    #[test]
    fn monitor_containing_point_picks_the_right_monitor() {
        let layout = DisplayLayout {
            virtual_bounds: rect(0.0, 0.0, 3840.0, 1080.0),
            monitors: vec![
                MonitorBounds {
                    bounds: rect(0.0, 0.0, 1920.0, 1080.0),
                    is_primary: true,
                },
                MonitorBounds {
                    bounds: rect(1920.0, 0.0, 1920.0, 720.0),
                    is_primary: false,
                },
            ],
        };

        let m = layout.monitor_containing_point(100.0, 100.0).unwrap();
        assert!(m.is_primary);

        let m = layout.monitor_containing_point(2000.0, 100.0).unwrap();
        assert!(!m.is_primary);

        assert!(layout.monitor_containing_point(-1.0, 0.0).is_none());
    }

    #[test]
    fn static_screens_returns_layout() {
        let screens = StaticScreens::single(rect(0.0, 0.0, 1920.0, 1080.0));
        let layout = screens.layout().unwrap();
        assert_eq!(layout.virtual_bounds.width, 1920.0);
    }

    #[test]
    fn static_screens_rejects_non_finite_bounds() {
        let screens = StaticScreens::single(rect(0.0, 0.0, f64::NAN, 1080.0));
        let err = screens.layout().unwrap_err();
        assert!(matches!(err, PlacementError::Screen(_)));
    }
}
