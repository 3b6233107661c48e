//! Editor session state.
//!
//! One `EditorState` is one authoring session. It is owned by the embedding
//! shell and passed by reference into the event handlers and the renderer;
//! there are no module-level singletons.

use crate::feature::{Feature, FeatureParamsStore};
use crate::geometry::Point;
use crate::model::{GeometryCatalog, GeometryKind, LineId};
use crate::theme::{Color, LINE_COLOR, REGION_COLOR};

/// Reference image descriptor.
///
/// Decoding is out of scope for the editor core; the canvas only needs a
/// name to show and the pixel dimensions for aspect handling.
#[derive(Debug, Clone, PartialEq)]
pub struct Background {
    pub name: String,
    pub width: u32,
    pub height: u32,
}

/// Severity of a status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// A transient user-facing notice. Errors here are never fatal; the user
/// retries or keeps working.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub level: StatusLevel,
    pub text: String,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Info,
            text: text.into(),
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Warning,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Error,
            text: text.into(),
        }
    }
}

/// What the editor is in the middle of.
///
/// The interactive modes are mutually exclusive by construction: the
/// in-progress point buffer only exists while drawing, the pending segment
/// only while a direction click is awaited.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum EditMode {
    /// No interaction in progress.
    #[default]
    Idle,
    /// Collecting points for a region or line.
    Drawing {
        kind: GeometryKind,
        points: Vec<Point>,
    },
    /// A two-point line waiting for its direction click.
    AwaitingDirection { endpoints: [Point; 2] },
    /// The properties dialog is open for a committed line.
    EditingProperties { line_id: LineId },
}

impl EditMode {
    /// Points of the in-progress drawing, if any.
    pub fn drawing_points(&self) -> Option<&[Point]> {
        match self {
            EditMode::Drawing { points, .. } => Some(points),
            _ => None,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, EditMode::Idle)
    }
}

/// Complete editor state for one authoring session.
#[derive(Debug, Clone)]
pub struct EditorState {
    /// Committed geometry.
    pub catalog: GeometryCatalog,
    /// Current interaction.
    pub mode: EditMode,
    /// Active analytics feature; decides how a finished line is treated.
    pub feature: Feature,
    /// Per-feature parameter tuning.
    pub params: FeatureParamsStore,
    /// Stroke color for newly drawn regions.
    pub region_color: Color,
    /// Stroke color for newly drawn lines.
    pub line_color: Color,
    /// Reference image, if one is loaded.
    pub background: Option<Background>,
    /// Last surfaced notice.
    pub status: Option<StatusMessage>,
}

impl EditorState {
    pub fn new() -> Self {
        Self {
            catalog: GeometryCatalog::new(),
            mode: EditMode::Idle,
            feature: Feature::default(),
            params: FeatureParamsStore::new(),
            region_color: REGION_COLOR,
            line_color: LINE_COLOR,
            background: None,
            status: None,
        }
    }

    /// Stroke color for newly drawn geometry of the given kind.
    pub fn color_for(&self, kind: GeometryKind) -> Color {
        match kind {
            GeometryKind::Region => self.region_color,
            GeometryKind::Line => self.line_color,
        }
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}
