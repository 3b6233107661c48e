//! Click-side direction resolution for crossing lines.
//!
//! When a two-point line is drawn for the line-crossing feature, one extra
//! click decides which side of the line counts as IN. This module is the
//! pure math for that step: no editor state, no rendering.
//!
//! Coordinates are normalized with Y growing downward, so `Downward` means
//! positive Y. The analytics engine consumes the cardinal as-is; changing
//! the convention here would silently flip deployed counters.

use crate::geometry::Point;
use crate::model::{Direction, Orientation};

/// Component threshold below which a normalized segment counts as axis
/// aligned.
pub const AXIS_EPSILON: f32 = 1e-3;

/// Segments shorter than this (normalized units) cannot be oriented and are
/// rejected before resolution.
pub const MIN_LINE_LENGTH: f32 = 1e-4;

/// Outcome of a direction-resolution click.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedDirection {
    /// Cardinal pointing into the clicked (IN) side.
    pub direction: Direction,
    /// Axis classification of the segment itself.
    pub orientation: Orientation,
    /// Midpoint of the segment.
    pub centroid: Point,
}

/// Check whether two endpoints are too close to define a crossing line.
pub fn is_degenerate(p1: Point, p2: Point) -> bool {
    p1.distance_to(&p2) < MIN_LINE_LENGTH
}

/// Unit perpendicular of the segment `p1..p2`.
///
/// Degenerate segments are rejected before anything consumes this; the
/// length substitute only keeps the division defined.
pub fn unit_perpendicular(p1: Point, p2: Point) -> (f32, f32) {
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;
    let mut len = (dx * dx + dy * dy).sqrt();
    if len <= f32::EPSILON {
        len = 1.0;
    }
    (-dy / len, dx / len)
}

/// Resolve the crossing direction of the segment `p1..p2` from a click.
///
/// The clicked side becomes IN by definition; the operator's click is
/// authoritative. The returned cardinal is the dominant axis of the unit
/// normal pointing into the IN side.
pub fn resolve(p1: Point, p2: Point, click: Point) -> ResolvedDirection {
    let (nx, ny) = unit_perpendicular(p1, p2);
    let mid = p1.midpoint(&p2);
    let side = (click.x - mid.x) * nx + (click.y - mid.y) * ny;

    // Flip the normal onto the clicked side
    let (in_x, in_y) = if side >= 0.0 { (nx, ny) } else { (-nx, -ny) };

    ResolvedDirection {
        direction: cardinal_of(in_x, in_y),
        orientation: orientation_of(p1, p2),
        centroid: mid,
    }
}

/// Dominant-axis cardinal of a screen-space vector. A tie on the exact
/// diagonal snaps to the horizontal axis.
pub fn cardinal_of(x: f32, y: f32) -> Direction {
    if x.abs() >= y.abs() {
        if x >= 0.0 {
            Direction::Rightward
        } else {
            Direction::Leftward
        }
    } else if y >= 0.0 {
        Direction::Downward
    } else {
        Direction::Upward
    }
}

/// Classify a segment against the canvas axes.
///
/// Anything not axis aligned within [`AXIS_EPSILON`] is diagonal, so the
/// near-45-degree case needs no special handling.
pub fn orientation_of(p1: Point, p2: Point) -> Orientation {
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;
    if dx.abs() < AXIS_EPSILON {
        Orientation::Vertical
    } else if dy.abs() < AXIS_EPSILON {
        Orientation::Horizontal
    } else {
        Orientation::Diagonal
    }
}

// ============================================================================
// Compass bucketing (rendering only)
// ============================================================================

/// Eight-way compass arrow for overlay rendering.
///
/// This is cosmetic: the stored direction is always one of the four
/// cardinals, but overlay arrows on diagonal lines look wrong unless they
/// follow the actual perpendicular, so the renderer buckets it here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compass {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Compass {
    /// Bucket a screen-space vector into one of eight 45 degree sectors.
    /// North is negative Y.
    pub fn from_vector(x: f32, y: f32) -> Self {
        let angle = y.atan2(x).to_degrees();
        let sector = ((angle + 360.0 + 22.5) / 45.0).floor() as i32 % 8;
        match sector {
            0 => Compass::East,
            1 => Compass::SouthEast,
            2 => Compass::South,
            3 => Compass::SouthWest,
            4 => Compass::West,
            5 => Compass::NorthWest,
            6 => Compass::North,
            _ => Compass::NorthEast,
        }
    }

    /// Unit vector along this compass direction in screen space.
    pub fn unit(&self) -> (f32, f32) {
        const DIAG: f32 = std::f32::consts::FRAC_1_SQRT_2;
        match self {
            Compass::North => (0.0, -1.0),
            Compass::NorthEast => (DIAG, -DIAG),
            Compass::East => (1.0, 0.0),
            Compass::SouthEast => (DIAG, DIAG),
            Compass::South => (0.0, 1.0),
            Compass::SouthWest => (-DIAG, DIAG),
            Compass::West => (-1.0, 0.0),
            Compass::NorthWest => (-DIAG, -DIAG),
        }
    }

    /// The reverse arrow.
    pub fn opposite(&self) -> Self {
        match self {
            Compass::North => Compass::South,
            Compass::NorthEast => Compass::SouthWest,
            Compass::East => Compass::West,
            Compass::SouthEast => Compass::NorthWest,
            Compass::South => Compass::North,
            Compass::SouthWest => Compass::NorthEast,
            Compass::West => Compass::East,
            Compass::NorthWest => Compass::SouthEast,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
