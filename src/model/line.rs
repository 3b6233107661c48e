//! Line data model: two-point segments with an optional crossing direction.

use crate::geometry::Point;
use crate::theme::Color;

/// Unique identifier for a line.
pub type LineId = u32;

/// Number of endpoints in a committed line.
pub const LINE_VERTICES: usize = 2;

/// The crossing direction stored on a line.
///
/// The four cardinals are what the direction picker produces. `Bidirectional`
/// and the free-form `Other` value only enter through the properties editor
/// or an existing configuration file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Direction {
    Upward,
    Downward,
    Leftward,
    Rightward,
    Bidirectional,
    Other(String),
}

impl Direction {
    /// The value stored in the configuration schema.
    pub fn as_str(&self) -> &str {
        match self {
            Direction::Upward => "upward",
            Direction::Downward => "downward",
            Direction::Leftward => "leftward",
            Direction::Rightward => "rightward",
            Direction::Bidirectional => "bidirectional",
            Direction::Other(value) => value,
        }
    }

    /// Parse a stored direction value. Unknown values are preserved verbatim.
    pub fn parse(value: &str) -> Self {
        match value {
            "upward" => Direction::Upward,
            "downward" => Direction::Downward,
            "leftward" => Direction::Leftward,
            "rightward" => Direction::Rightward,
            "bidirectional" => Direction::Bidirectional,
            other => Direction::Other(other.to_string()),
        }
    }

    /// The opposite cardinal. Non-cardinal directions are returned unchanged.
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Upward => Direction::Downward,
            Direction::Downward => Direction::Upward,
            Direction::Leftward => Direction::Rightward,
            Direction::Rightward => Direction::Leftward,
            other => other.clone(),
        }
    }
}

/// How a line sits relative to the canvas axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
    Diagonal,
}

impl Orientation {
    /// The value stored in the configuration schema.
    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
            Orientation::Diagonal => "diagonal",
        }
    }

    /// Parse a stored orientation value.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "horizontal" => Some(Orientation::Horizontal),
            "vertical" => Some(Orientation::Vertical),
            "diagonal" => Some(Orientation::Diagonal),
            _ => None,
        }
    }
}

/// An annotated segment over the reference image.
///
/// `centroid`, `direction` and `orientation` stay `None` for lines drawn
/// under features that do not track crossings. Once a line goes through the
/// direction picker it carries all three.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    /// Unique identifier, assigned by the catalog.
    pub id: LineId,
    /// Display name, editable in place.
    pub name: String,
    /// Stroke color.
    pub color: Color,
    /// Endpoints in draw order, normalized.
    pub coords: [Point; 2],
    /// Midpoint of the endpoints, cached at commit time.
    pub centroid: Option<Point>,
    /// Which side counts as IN.
    pub direction: Option<Direction>,
    /// Axis classification of the segment.
    pub orientation: Option<Orientation>,
    /// Whether crossings count in both directions.
    pub bidirectional: bool,
    /// Feature tags passed through to the configuration.
    pub mode: Vec<String>,
}

impl Line {
    /// Create an undirected line with the default name for its id.
    pub fn new(id: LineId, coords: [Point; 2], color: Color) -> Self {
        Self {
            id,
            name: format!("Line #{id}"),
            color,
            coords,
            centroid: None,
            direction: None,
            orientation: None,
            bidirectional: false,
            mode: Vec::new(),
        }
    }

    /// Midpoint of the endpoints.
    pub fn midpoint(&self) -> Point {
        self.coords[0].midpoint(&self.coords[1])
    }
}

// ============================================================================
// Tests
// ============================================================================
