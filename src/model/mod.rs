//! Data models for the annotation catalog.

mod catalog;
mod line;
mod region;

pub use catalog::{CatalogError, GeometryCatalog, GeometryKind};
pub use line::{Direction, LINE_VERTICES, Line, LineId, Orientation};
pub use region::{MIN_REGION_VERTICES, Region, RegionId};
