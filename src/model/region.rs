//! Region data model: operator-drawn polygons.

use crate::geometry::Point;
use crate::theme::Color;

/// Unique identifier for a region.
pub type RegionId = u32;

/// Minimum number of vertices for a committed region.
pub const MIN_REGION_VERTICES: usize = 3;

/// An annotated polygon over the reference image.
///
/// Vertex order is significant: edges run between consecutive coords and the
/// polygon closes from the last vertex back to the first.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    /// Unique identifier, assigned by the catalog.
    pub id: RegionId,
    /// Display name, editable in place.
    pub name: String,
    /// Stroke/fill color.
    pub color: Color,
    /// Polygon vertices in draw order, normalized.
    pub coords: Vec<Point>,
    /// Feature tags passed through to the configuration.
    pub mode: Vec<String>,
}

impl Region {
    /// Create a region with the default name for its id.
    pub fn new(id: RegionId, coords: Vec<Point>, color: Color) -> Self {
        Self {
            id,
            name: format!("Region #{id}"),
            color,
            coords,
            mode: Vec::new(),
        }
    }
}
