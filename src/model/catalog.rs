//! Geometry catalog: owns every committed region and line.

use std::fmt;

use thiserror::Error;

use crate::geometry::Point;
use crate::model::line::{Direction, LINE_VERTICES, Line, LineId, Orientation};
use crate::model::region::{MIN_REGION_VERTICES, Region, RegionId};
use crate::theme::Color;

/// Which geometry collection an operation addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryKind {
    Region,
    Line,
}

impl GeometryKind {
    /// Get the display name for this kind.
    pub fn name(&self) -> &'static str {
        match self {
            GeometryKind::Region => "region",
            GeometryKind::Line => "line",
        }
    }
}

impl fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors from catalog operations.
///
/// A failed operation never leaves the catalog partially mutated.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("a region needs at least {MIN_REGION_VERTICES} points, got {count}")]
    TooFewRegionPoints { count: usize },

    #[error("a line needs exactly {LINE_VERTICES} points, got {count}")]
    BadLinePointCount { count: usize },

    #[error("no {kind} with id {id}")]
    NotFound { kind: GeometryKind, id: u32 },
}

/// Committed annotation geometry for one authoring session.
///
/// Ids are assigned here and only here, monotonically per kind, and are never
/// reused after a delete. Insertion order is preserved because it is also the
/// order entries take in the serialized configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryCatalog {
    regions: Vec<Region>,
    lines: Vec<Line>,
    next_region_id: RegionId,
    next_line_id: LineId,
}

impl GeometryCatalog {
    pub fn new() -> Self {
        Self {
            regions: Vec::new(),
            lines: Vec::new(),
            next_region_id: 1,
            next_line_id: 1,
        }
    }

    /// Rebuild a catalog from loaded entries. Id counters resume after the
    /// highest id present so later commits never collide.
    pub fn from_parts(regions: Vec<Region>, lines: Vec<Line>) -> Self {
        let next_region_id = regions.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        let next_line_id = lines.iter().map(|l| l.id).max().unwrap_or(0) + 1;
        Self {
            regions,
            lines,
            next_region_id,
            next_line_id,
        }
    }

    /// Commit a region and return its assigned id.
    pub fn add_region(&mut self, coords: Vec<Point>, color: Color) -> Result<RegionId, CatalogError> {
        if coords.len() < MIN_REGION_VERTICES {
            return Err(CatalogError::TooFewRegionPoints { count: coords.len() });
        }
        let id = self.next_region_id;
        self.next_region_id += 1;
        self.regions.push(Region::new(id, coords, color));
        Ok(id)
    }

    /// Commit an undirected line and return its assigned id.
    pub fn add_line(&mut self, coords: Vec<Point>, color: Color) -> Result<LineId, CatalogError> {
        let coords = Self::line_coords(coords)?;
        let id = self.next_line_id;
        self.next_line_id += 1;
        self.lines.push(Line::new(id, coords, color));
        Ok(id)
    }

    /// Commit a line that went through the direction picker. The centroid is
    /// computed here so a directed line can never lack one.
    pub fn commit_directed_line(
        &mut self,
        coords: Vec<Point>,
        color: Color,
        direction: Direction,
        orientation: Orientation,
    ) -> Result<LineId, CatalogError> {
        let coords = Self::line_coords(coords)?;
        let id = self.next_line_id;
        self.next_line_id += 1;
        let mut line = Line::new(id, coords, color);
        line.centroid = Some(line.midpoint());
        line.direction = Some(direction);
        line.orientation = Some(orientation);
        self.lines.push(line);
        Ok(id)
    }

    fn line_coords(coords: Vec<Point>) -> Result<[Point; 2], CatalogError> {
        match coords.as_slice() {
            &[a, b] => Ok([a, b]),
            other => Err(CatalogError::BadLinePointCount { count: other.len() }),
        }
    }

    /// Rename a region or line in place.
    pub fn rename(&mut self, kind: GeometryKind, id: u32, name: &str) -> Result<(), CatalogError> {
        match kind {
            GeometryKind::Region => {
                let region = self
                    .regions
                    .iter_mut()
                    .find(|r| r.id == id)
                    .ok_or(CatalogError::NotFound { kind, id })?;
                region.name = name.to_string();
            }
            GeometryKind::Line => {
                let line = self
                    .lines
                    .iter_mut()
                    .find(|l| l.id == id)
                    .ok_or(CatalogError::NotFound { kind, id })?;
                line.name = name.to_string();
            }
        }
        Ok(())
    }

    /// Delete a region or line. The freed id is never handed out again.
    pub fn delete(&mut self, kind: GeometryKind, id: u32) -> Result<(), CatalogError> {
        let found = match kind {
            GeometryKind::Region => {
                let before = self.regions.len();
                self.regions.retain(|r| r.id != id);
                self.regions.len() != before
            }
            GeometryKind::Line => {
                let before = self.lines.len();
                self.lines.retain(|l| l.id != id);
                self.lines.len() != before
            }
        };
        if found {
            Ok(())
        } else {
            Err(CatalogError::NotFound { kind, id })
        }
    }

    /// Drop everything and restart both id sequences at 1.
    pub fn clear_all(&mut self) {
        self.regions.clear();
        self.lines.clear();
        self.next_region_id = 1;
        self.next_line_id = 1;
    }

    /// Committed regions in insertion order.
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Committed lines in insertion order.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Get a region by id.
    pub fn region(&self, id: RegionId) -> Option<&Region> {
        self.regions.iter().find(|r| r.id == id)
    }

    /// Get a line by id.
    pub fn line(&self, id: LineId) -> Option<&Line> {
        self.lines.iter().find(|l| l.id == id)
    }

    /// Get a mutable line by id (for the properties editor).
    pub fn line_mut(&mut self, id: LineId) -> Option<&mut Line> {
        self.lines.iter_mut().find(|l| l.id == id)
    }

    /// Check if there is no committed geometry.
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty() && self.lines.is_empty()
    }
}

impl Default for GeometryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================
