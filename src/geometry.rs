//! Normalized 2D geometry primitives.
//!
//! All editor geometry lives in a normalized coordinate space: `x` and `y`
//! both in `[0, 1]`, relative to the reference image. Y grows downward,
//! matching canvas conventions. Conversion to pixel space happens only in
//! the renderer (`crate::render`).

/// A 2D point in normalized image coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Calculate distance to another point.
    pub fn distance_to(&self, other: &Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Midpoint between this point and another.
    pub fn midpoint(&self, other: &Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    /// Clamp both coordinates into the unit square.
    pub fn clamp_unit(&self) -> Point {
        Point::new(self.x.clamp(0.0, 1.0), self.y.clamp(0.0, 1.0))
    }
}

// ============================================================================
// Tests
// ============================================================================
