//! Editor event types.
//!
//! Every user intent is one event. Dispatch is synchronous: each event
//! produces exactly one state transition, processed to completion before
//! the next event is handled.

use crate::editor::Background;
use crate::feature::{Feature, FeatureParams};
use crate::geometry::Point;
use crate::model::{Direction, GeometryKind, LineId, Orientation};
use crate::theme::Color;

/// Events that drive the editor.
#[derive(Debug, Clone)]
pub enum EditorEvent {
    // Session
    /// Switch the active analytics feature
    SelectFeature(Feature),
    /// Pick the stroke color for newly drawn geometry of one kind
    SelectColor(GeometryKind, Color),
    /// Set or clear the reference image descriptor
    SetBackground(Option<Background>),
    /// Replace the tuning for one feature
    ApplyFeatureParams(FeatureParams),
    /// Drop one feature's tuning back to the engine defaults
    ResetFeatureParams(Feature),

    // Drawing
    /// Start collecting points for a region
    BeginRegion,
    /// Start collecting points for a line
    BeginLine,
    /// Canvas click in normalized coordinates
    PointerClick(Point),
    /// Commit the in-progress geometry
    Save,
    /// Discard the in-progress interaction
    Cancel,

    // Catalog
    /// Rename a committed region or line
    Rename {
        kind: GeometryKind,
        id: u32,
        name: String,
    },
    /// Delete a committed region or line
    Delete { kind: GeometryKind, id: u32 },
    /// Delete everything and restart both id sequences
    ClearAll,

    // Line properties
    /// Open the properties editor for a committed line
    EditLineProperties(LineId),
    /// Apply properties to the line being edited and close the editor
    ApplyLineProperties {
        direction: Option<Direction>,
        orientation: Option<Orientation>,
        bidirectional: bool,
    },
}
