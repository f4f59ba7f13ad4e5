//! Logical-coordinate geometry primitives shared by all crates.

use serde::{Deserialize, Serialize};

/// Tolerance for coordinate comparisons. Logical pixels never carry
/// meaningful information below this threshold; anything closer is
/// floating-point rounding noise, not a real move or resize.
pub const POSITION_EPSILON: f64 = 1e-3;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn approx_eq(&self, other: &Point) -> bool {
        (self.x - other.x).abs() <= POSITION_EPSILON
            && (self.y - other.y).abs() <= POSITION_EPSILON
    }

    /// True when both coordinates are within epsilon of zero — the
    /// never-saved default that must not be applied to a window.
    pub fn is_origin(&self) -> bool {
        self.x.abs() <= POSITION_EPSILON && self.y.abs() <= POSITION_EPSILON
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn approx_eq(&self, other: &Size) -> bool {
        (self.width - other.width).abs() <= POSITION_EPSILON
            && (self.height - other.height).abs() <= POSITION_EPSILON
    }

    /// True when both dimensions are strictly positive.
    pub fn is_positive(&self) -> bool {
        self.width > POSITION_EPSILON && self.height > POSITION_EPSILON
    }

    pub fn is_finite(&self) -> bool {
        self.width.is_finite() && self.height.is_finite()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn from_parts(origin: Point, size: Size) -> Self {
        Self {
            x: origin.x,
            y: origin.y,
            width: size.width,
            height: size.height,
        }
    }

    pub fn origin(&self) -> Point {
        Point {
            x: self.x,
            y: self.y,
        }
    }

    pub fn size(&self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        x.is_finite()
            && y.is_finite()
            && self.is_finite()
            && x >= self.x
            && y >= self.y
            && x < self.right()
            && y < self.bottom()
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
    }
}
