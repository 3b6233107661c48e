//! Wire types for the configuration backend.
//!
//! These structs mirror the JSON the backend exchanges with the editor: a
//! [`BuildRequest`] goes out when the operator builds or saves, and a
//! [`ParsedConfig`] comes back when an existing configuration is loaded.
//! Field order follows the backend's output so diffs stay readable.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::theme::{self, Color};

/// A normalized point as the backend spells it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointEntry {
    pub x: f32,
    pub y: f32,
}

/// One polygon in the payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionEntry {
    /// Vertices in draw order.
    pub coords: Vec<PointEntry>,
    /// Numeric identifier.
    pub id: u32,
    /// Type tag, always `region_<id>`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Stroke/fill color as `#rrggbb`.
    #[serde(default = "default_region_color")]
    pub color: Color,
    /// Feature tags, empty for plain regions.
    #[serde(default)]
    pub mode: Vec<String>,
    /// Display name. Absent in older configurations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// One segment in the payload.
///
/// There is no `centroid` field: the anchor is derived from `coords`, so
/// the editor never writes it and recomputes it on load. A stored value in
/// an older configuration is skipped rather than trusted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineEntry {
    /// The two endpoints in draw order.
    pub coords: Vec<PointEntry>,
    /// Numeric identifier.
    pub id: u32,
    /// Type tag, always `line_<id>`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Stroke color as `#rrggbb`.
    #[serde(default = "default_line_color")]
    pub color: Color,
    /// Display name. Absent in older configurations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Which side counts as IN, for crossing lines.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<String>,
    /// Axis classification of the segment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orientation: Option<String>,
    /// Whether crossings count both ways.
    #[serde(default)]
    pub bidirectional: bool,
    /// Feature tags, empty for plain lines.
    #[serde(default)]
    pub mode: Vec<String>,
}

/// Detector parameters forwarded to the runtime untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelParams {
    pub name: String,
    pub device: String,
    pub conf: f64,
    pub iou: f64,
    /// Model size class (`small`, `medium`, `large`).
    #[serde(rename = "type")]
    pub size: String,
    pub classes: Vec<String>,
}

impl Default for ModelParams {
    fn default() -> Self {
        Self {
            name: "person_360camera_detection_v33".to_string(),
            device: "cpu".to_string(),
            conf: 0.5,
            iou: 0.7,
            size: "small".to_string(),
            classes: vec!["person".to_string()],
        }
    }
}

/// Where the runtime reads frames from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceMode {
    /// Live RTSP stream.
    Production,
    /// Local video files.
    Inference,
}

/// The build/save request body the editor sends to the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildRequest {
    pub config_name: String,
    pub model: ModelParams,
    /// Feature name as the runtime spells it (`linecross`, `regioncrowd`,
    /// `dwelltime`).
    pub feature: String,
    /// Per-feature tuning keyed by the external feature name. Only values
    /// that differ from the engine defaults appear here.
    pub feature_params: Value,
    pub regions: Vec<RegionEntry>,
    pub lines: Vec<LineEntry>,
    pub source_mode: SourceMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rtsp_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_source: Option<String>,
    pub max_fps: u32,
    pub cctv_id: String,
    /// Daily window in which the runtime is active, as `HH:MM:SS`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_allowed_start: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_allowed_end: Option<String>,
    /// Video files for sequential inference runs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_files: Option<Vec<String>>,
    /// Whether the runtime records annotated video.
    pub save_video: bool,
    /// Whether the runtime records event annotations.
    pub save_annotations: bool,
}

impl BuildRequest {
    /// Serialize for the wire.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// A configuration parsed back from the backend.
///
/// Only the parts the editor restores are modelled. The runtime sections
/// (`input`, `output`, `metadata`) pass through the backend untouched and
/// are ignored here.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ParsedConfig {
    #[serde(default)]
    pub model: Vec<ModelParams>,
    #[serde(default)]
    pub feature: Vec<String>,
    #[serde(default)]
    pub feature_params: Value,
    #[serde(default)]
    pub regions: Vec<RegionEntry>,
    #[serde(default)]
    pub lines: Vec<LineEntry>,
}

impl ParsedConfig {
    /// Deserialize a configuration the backend parsed for us.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

fn default_region_color() -> Color {
    theme::REGION_COLOR
}

fn default_line_color() -> Color {
    theme::LINE_COLOR
}
