//! Conversion between the editor session and the backend payload.
//!
//! Outbound, [`to_build_request`] snapshots the catalog into a
//! [`BuildRequest`]. Inbound, [`load_session`] replaces the session
//! contents from a [`ParsedConfig`], validating every entry before touching
//! the session so a bad file never leaves it half-loaded.

use serde_json::Value;

use crate::direction::orientation_of;
use crate::editor::{EditMode, EditorState, StatusMessage};
use crate::feature::{Feature, FeatureParams};
use crate::format::error::FormatError;
use crate::format::payload::{
    BuildRequest, LineEntry, ModelParams, ParsedConfig, PointEntry, RegionEntry, SourceMode,
};
use crate::geometry::Point;
use crate::model::{
    Direction, GeometryCatalog, GeometryKind, LINE_VERTICES, Line, MIN_REGION_VERTICES,
    Orientation, Region,
};

// ============================================================================
// Build options
// ============================================================================

/// Session-independent settings for a build request.
///
/// Everything the payload needs that does not live in the editor state:
/// the configuration name, the detector, and the frame source.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildOptions {
    /// Name of the configuration being authored.
    pub config_name: String,

    /// Detector parameters, forwarded untouched.
    pub model: ModelParams,

    /// Live stream or local files.
    pub source_mode: SourceMode,

    /// Stream URL for production mode.
    pub rtsp_url: Option<String>,

    /// Primary video file for inference mode.
    pub video_source: Option<String>,

    /// Additional video files for sequential inference.
    pub video_files: Option<Vec<String>>,

    /// Frame rate cap.
    pub max_fps: u32,

    /// Camera identifier recorded in the configuration metadata.
    pub cctv_id: String,

    /// Start of the daily active window, as `HH:MM:SS`.
    pub time_allowed_start: Option<String>,

    /// End of the daily active window, as `HH:MM:SS`.
    pub time_allowed_end: Option<String>,

    /// Whether the runtime records annotated video.
    pub save_video: bool,

    /// Whether the runtime records event annotations.
    pub save_annotations: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            config_name: "untitled".to_string(),
            model: ModelParams::default(),
            source_mode: SourceMode::Inference,
            rtsp_url: None,
            video_source: None,
            video_files: None,
            max_fps: 30,
            cctv_id: "office".to_string(),
            time_allowed_start: None,
            time_allowed_end: None,
            save_video: true,
            save_annotations: true,
        }
    }
}

impl BuildOptions {
    /// Create new build options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the configuration name.
    pub fn config_name(mut self, name: impl Into<String>) -> Self {
        self.config_name = name.into();
        self
    }

    /// Switch to production mode reading from a live stream.
    pub fn production(mut self, rtsp_url: impl Into<String>) -> Self {
        self.source_mode = SourceMode::Production;
        self.rtsp_url = Some(rtsp_url.into());
        self
    }

    /// Set the video files for sequential inference.
    pub fn video_files(mut self, files: Vec<String>) -> Self {
        self.video_files = Some(files);
        self
    }

    /// Set the daily window in which the runtime is active.
    pub fn time_allowed(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.time_allowed_start = Some(start.into());
        self.time_allowed_end = Some(end.into());
        self
    }
}

// ============================================================================
// Outbound: session to build request
// ============================================================================

/// Snapshot the session into a build request for the backend.
///
/// Fails when the selected feature has no geometry to watch. The catalog is
/// read once, here; a response arriving later never sees newer edits.
pub fn to_build_request(
    state: &EditorState,
    options: &BuildOptions,
) -> Result<BuildRequest, FormatError> {
    let feature = state.feature;
    validate_geometry(&state.catalog, feature)?;

    let overrides = state.params.params_for(feature).overrides()?;
    let mut feature_params = serde_json::Map::new();
    feature_params.insert(feature.external_name().to_string(), overrides);

    let request = BuildRequest {
        config_name: options.config_name.clone(),
        model: options.model.clone(),
        feature: feature.external_name().to_string(),
        feature_params: Value::Object(feature_params),
        regions: state.catalog.regions().iter().map(region_entry).collect(),
        lines: state.catalog.lines().iter().map(line_entry).collect(),
        source_mode: options.source_mode,
        rtsp_url: options.rtsp_url.clone(),
        video_source: options.video_source.clone(),
        max_fps: options.max_fps,
        cctv_id: options.cctv_id.clone(),
        time_allowed_start: options.time_allowed_start.clone(),
        time_allowed_end: options.time_allowed_end.clone(),
        video_files: options.video_files.clone(),
        save_video: options.save_video,
        save_annotations: options.save_annotations,
    };

    log::info!(
        "Built configuration '{}' for {}: {} regions, {} lines",
        request.config_name,
        feature.name(),
        request.regions.len(),
        request.lines.len()
    );

    Ok(request)
}

fn validate_geometry(catalog: &GeometryCatalog, feature: Feature) -> Result<(), FormatError> {
    match feature.geometry() {
        GeometryKind::Line if catalog.lines().is_empty() => {
            return Err(FormatError::missing_geometry(feature.name(), "line"));
        }
        GeometryKind::Region if catalog.regions().is_empty() => {
            return Err(FormatError::missing_geometry(feature.name(), "region"));
        }
        _ => {}
    }

    // Line endpoint counts hold by construction; region counts can only go
    // wrong through a hand-assembled catalog, but the payload contract is
    // checked here regardless.
    for region in catalog.regions() {
        if region.coords.len() < MIN_REGION_VERTICES {
            return Err(FormatError::BadRegionPoints {
                id: region.id,
                count: region.coords.len(),
            });
        }
    }

    // Lines drawn under another feature and carried over never went through
    // the direction picker; a crossing configuration cannot use them as-is.
    if feature == Feature::LineCross {
        for line in catalog.lines() {
            if line.direction.is_none() {
                return Err(FormatError::UndirectedLine { id: line.id });
            }
        }
    }

    Ok(())
}

fn region_entry(region: &Region) -> RegionEntry {
    RegionEntry {
        coords: region.coords.iter().map(point_entry).collect(),
        id: region.id,
        kind: format!("region_{}", region.id),
        color: region.color,
        mode: region.mode.clone(),
        name: Some(region.name.clone()),
    }
}

fn line_entry(line: &Line) -> LineEntry {
    LineEntry {
        coords: line.coords.iter().map(point_entry).collect(),
        id: line.id,
        kind: format!("line_{}", line.id),
        color: line.color,
        name: Some(line.name.clone()),
        direction: line.direction.as_ref().map(|d| d.as_str().to_string()),
        orientation: line.orientation.map(|o| o.as_str().to_string()),
        bidirectional: line.bidirectional,
        mode: line.mode.clone(),
    }
}

fn point_entry(point: &Point) -> PointEntry {
    PointEntry {
        x: point.x,
        y: point.y,
    }
}

// ============================================================================
// Inbound: parsed configuration to session
// ============================================================================

/// Replace the session contents with a loaded configuration.
///
/// All entries are validated and converted before anything is assigned, so
/// an error leaves the session exactly as it was. Any in-progress drawing
/// is discarded on success.
pub fn load_session(state: &mut EditorState, parsed: &ParsedConfig) -> Result<(), FormatError> {
    let feature_name = parsed.feature.first().ok_or(FormatError::NoFeature)?;
    let feature =
        Feature::parse(feature_name).ok_or_else(|| FormatError::unknown_feature(feature_name))?;

    let overrides = feature_overrides(&parsed.feature_params, feature);
    let params = FeatureParams::from_overrides(feature, &overrides)?;

    let mut regions = Vec::with_capacity(parsed.regions.len());
    for entry in &parsed.regions {
        regions.push(region_from_entry(entry)?);
    }

    let mut lines = Vec::with_capacity(parsed.lines.len());
    for entry in &parsed.lines {
        lines.push(line_from_entry(entry)?);
    }

    let region_count = regions.len();
    let line_count = lines.len();

    state.catalog = GeometryCatalog::from_parts(regions, lines);
    state.feature = feature;
    state.params.set(params);
    state.mode = EditMode::Idle;
    state.status = Some(StatusMessage::info(format!(
        "Loaded {region_count} regions, {line_count} lines"
    )));

    log::info!(
        "Loaded configuration for {}: {} regions, {} lines",
        feature.name(),
        region_count,
        line_count
    );

    Ok(())
}

/// Tuning overrides for a feature, keyed by either spelling of its name.
fn feature_overrides(feature_params: &Value, feature: Feature) -> Value {
    feature_params
        .get(feature.external_name())
        .or_else(|| feature_params.get(feature.name()))
        .cloned()
        .unwrap_or_else(|| Value::Object(serde_json::Map::new()))
}

fn region_from_entry(entry: &RegionEntry) -> Result<Region, FormatError> {
    if entry.coords.len() < MIN_REGION_VERTICES {
        return Err(FormatError::BadRegionPoints {
            id: entry.id,
            count: entry.coords.len(),
        });
    }

    let coords = entry.coords.iter().map(point_from_entry).collect();
    let mut region = Region::new(entry.id, coords, entry.color);
    if let Some(name) = &entry.name {
        region.name = name.clone();
    }
    region.mode = entry.mode.clone();
    Ok(region)
}

fn line_from_entry(entry: &LineEntry) -> Result<Line, FormatError> {
    if entry.coords.len() != LINE_VERTICES {
        return Err(FormatError::BadLinePoints {
            id: entry.id,
            count: entry.coords.len(),
        });
    }

    let endpoints = [
        point_from_entry(&entry.coords[0]),
        point_from_entry(&entry.coords[1]),
    ];
    let mut line = Line::new(entry.id, endpoints, entry.color);
    if let Some(name) = &entry.name {
        line.name = name.clone();
    }

    line.direction = entry.direction.as_deref().map(Direction::parse);
    line.orientation = entry.orientation.as_deref().and_then(Orientation::parse);
    if line.direction.is_some() {
        // The anchor is a derived value; a missing or stale one is rebuilt
        // from the endpoints, same as at commit time. A directed entry
        // without a stored orientation gets the derived one too.
        line.centroid = Some(line.midpoint());
        if line.orientation.is_none() {
            line.orientation = Some(orientation_of(endpoints[0], endpoints[1]));
        }
    }
    line.bidirectional = entry.bidirectional;
    line.mode = entry.mode.clone();
    Ok(line)
}

fn point_from_entry(entry: &PointEntry) -> Point {
    Point::new(entry.x, entry.y)
}
