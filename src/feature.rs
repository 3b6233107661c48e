//! Analytics features and their typed parameter schemas.
//!
//! The engine reads feature parameters as a nested tree with its own
//! defaults compiled in. The editor mirrors that schema as plain structs,
//! so parameter names and value ranges are checked at compile time instead
//! of through string paths. Only values that differ from the engine
//! defaults are written into a build payload; everything else stays the
//! engine's business.

use serde::{Deserialize, Serialize};
use serde_json::{Value, map::Entry};

use crate::model::GeometryKind;

/// The analytics features a configuration can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    #[default]
    LineCross,
    RegionCrowd,
    DwellTime,
}

impl Feature {
    /// Internal identifier used throughout the editor.
    pub fn name(&self) -> &'static str {
        match self {
            Feature::LineCross => "line_cross",
            Feature::RegionCrowd => "region_crowd",
            Feature::DwellTime => "dwell_time",
        }
    }

    /// Name written to external configuration files.
    pub fn external_name(&self) -> &'static str {
        match self {
            Feature::LineCross => "linecross",
            Feature::RegionCrowd => "regioncrowd",
            Feature::DwellTime => "dwelltime",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Feature::LineCross => "Line Crossing",
            Feature::RegionCrowd => "Region Crowd",
            Feature::DwellTime => "Dwell Time",
        }
    }

    /// One-line description for the feature menu.
    pub fn description(&self) -> &'static str {
        match self {
            Feature::LineCross => "Count in/out crossings on lines",
            Feature::RegionCrowd => "Count objects inside polygon regions",
            Feature::DwellTime => "Measure how long objects stay in regions",
        }
    }

    /// Which geometry kind this feature is drawn with.
    pub fn geometry(&self) -> GeometryKind {
        match self {
            Feature::LineCross => GeometryKind::Line,
            Feature::RegionCrowd | Feature::DwellTime => GeometryKind::Region,
        }
    }

    /// All features, in menu order.
    pub fn all() -> &'static [Feature] {
        &[Feature::LineCross, Feature::RegionCrowd, Feature::DwellTime]
    }

    /// Parse an internal or external spelling.
    ///
    /// Existing configs spell these inconsistently (`dwelltime`,
    /// `dwell-time`, `Dwell Time`), so case, hyphens and spaces are folded
    /// before matching.
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "line_cross" | "linecross" => Some(Feature::LineCross),
            "region_crowd" | "regioncrowd" => Some(Feature::RegionCrowd),
            "dwell_time" | "dwelltime" => Some(Feature::DwellTime),
            _ => None,
        }
    }
}

// ============================================================================
// Parameter schemas
// ============================================================================

/// Where on a detection box the tracked point sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HitPoint {
    MidCentre,
    Head,
    Bottom,
}

/// Which tracker implementation the engine runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackerImpl {
    Bytetrack,
    Centroid,
}

/// Multi-object tracking block shared by all features.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TrackingParams {
    pub tracker_impl: TrackerImpl,
    pub max_lost_frames: u32,
    pub max_distance: f32,
    pub bt_track_high_thresh: f32,
    pub bt_track_low_thresh: f32,
    pub bt_new_track_thresh: f32,
    pub bt_match_thresh: f32,
    pub bt_track_buffer: u32,
    pub bt_fuse_score: bool,
    pub reid_enabled: bool,
    pub reid_similarity_thresh: f32,
    pub reid_momentum: f32,
    pub min_detection_confidence: f32,
    /// Only the line-cross and region-crowd profiles override the hit point.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hit_point: Option<HitPoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_px: Option<u32>,
}

impl TrackingParams {
    /// Engine defaults shared by line-cross and region-crowd.
    pub fn base() -> Self {
        Self {
            tracker_impl: TrackerImpl::Bytetrack,
            max_lost_frames: 45,
            max_distance: 140.0,
            bt_track_high_thresh: 0.5,
            bt_track_low_thresh: 0.1,
            bt_new_track_thresh: 0.6,
            bt_match_thresh: 0.8,
            bt_track_buffer: 45,
            bt_fuse_score: true,
            reid_enabled: true,
            reid_similarity_thresh: 0.86,
            reid_momentum: 0.25,
            min_detection_confidence: 0.4,
            hit_point: Some(HitPoint::Head),
            margin_px: Some(20),
        }
    }

    /// Dwell-time variant: longer buffers, lower confidence floor, no
    /// hit-point override.
    pub fn dwell() -> Self {
        Self {
            max_lost_frames: 60,
            max_distance: 120.0,
            bt_track_buffer: 60,
            min_detection_confidence: 0.25,
            hit_point: None,
            margin_px: None,
            ..Self::base()
        }
    }
}

/// In/out alert thresholds for line crossing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AlertThresholds {
    pub in_warning_threshold: u32,
    pub out_warning_threshold: u32,
}

/// Event aggregation window for line crossing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Aggregation {
    pub window_seconds: u32,
}

/// Line-crossing parameters.
///
/// The `centroid` key in the wire tree is the hit-point selector, not the
/// geometric line centroid; the field is named for what it means here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LineCrossParams {
    #[serde(rename = "centroid")]
    pub hit_point: HitPoint,
    pub lost_threshold: u32,
    pub allow_recounting: bool,
    pub time_allowed: String,
    pub alert_threshold: u32,
    pub cooldown_seconds: u32,
    pub tracking: TrackingParams,
    pub alerts: AlertThresholds,
    pub aggregation: Aggregation,
}

impl Default for LineCrossParams {
    fn default() -> Self {
        Self {
            hit_point: HitPoint::MidCentre,
            lost_threshold: 10,
            allow_recounting: false,
            time_allowed: String::new(),
            alert_threshold: 1,
            cooldown_seconds: 5,
            tracking: TrackingParams::base(),
            alerts: AlertThresholds {
                in_warning_threshold: 1,
                out_warning_threshold: 1,
            },
            aggregation: Aggregation { window_seconds: 5 },
        }
    }
}

/// Region-crowd parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegionCrowdParams {
    pub max_count: u32,
    pub alert_threshold: u32,
    pub cooldown: u32,
    pub warning_threshold: u32,
    pub critical_threshold: u32,
    pub tracking: TrackingParams,
    pub time_allowed: String,
}

impl Default for RegionCrowdParams {
    fn default() -> Self {
        Self {
            max_count: 2,
            alert_threshold: 4,
            cooldown: 300,
            warning_threshold: 3,
            critical_threshold: 6,
            tracking: TrackingParams::base(),
            time_allowed: String::new(),
        }
    }
}

/// Dwell-time parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DwellTimeParams {
    #[serde(rename = "centroid")]
    pub hit_point: HitPoint,
    pub min_dwelltime: u32,
    pub alert_threshold: u32,
    pub cooldown: u32,
    pub warning_seconds: u32,
    pub critical_seconds: u32,
    pub lost_threshold: u32,
    pub tracking: TrackingParams,
    pub time_allowed: String,
}

impl Default for DwellTimeParams {
    fn default() -> Self {
        Self {
            hit_point: HitPoint::Bottom,
            min_dwelltime: 15,
            alert_threshold: 10,
            cooldown: 120,
            warning_seconds: 10,
            critical_seconds: 20,
            lost_threshold: 10,
            tracking: TrackingParams::dwell(),
            time_allowed: String::new(),
        }
    }
}

// ============================================================================
// Unified parameter handling
// ============================================================================

/// Parameters for one feature.
#[derive(Debug, Clone, PartialEq)]
pub enum FeatureParams {
    LineCross(LineCrossParams),
    RegionCrowd(RegionCrowdParams),
    DwellTime(DwellTimeParams),
}

impl FeatureParams {
    /// Engine defaults for a feature.
    pub fn defaults_for(feature: Feature) -> Self {
        match feature {
            Feature::LineCross => FeatureParams::LineCross(LineCrossParams::default()),
            Feature::RegionCrowd => FeatureParams::RegionCrowd(RegionCrowdParams::default()),
            Feature::DwellTime => FeatureParams::DwellTime(DwellTimeParams::default()),
        }
    }

    /// Which feature these parameters belong to.
    pub fn feature(&self) -> Feature {
        match self {
            FeatureParams::LineCross(_) => Feature::LineCross,
            FeatureParams::RegionCrowd(_) => Feature::RegionCrowd,
            FeatureParams::DwellTime(_) => Feature::DwellTime,
        }
    }

    /// Serialize only the values that differ from the engine defaults.
    ///
    /// Returns an empty object when nothing was tuned, which is what a
    /// pristine configuration should carry.
    pub fn overrides(&self) -> Result<Value, serde_json::Error> {
        let (current, defaults) = match self {
            FeatureParams::LineCross(p) => (
                serde_json::to_value(p)?,
                serde_json::to_value(LineCrossParams::default())?,
            ),
            FeatureParams::RegionCrowd(p) => (
                serde_json::to_value(p)?,
                serde_json::to_value(RegionCrowdParams::default())?,
            ),
            FeatureParams::DwellTime(p) => (
                serde_json::to_value(p)?,
                serde_json::to_value(DwellTimeParams::default())?,
            ),
        };
        Ok(diff_from_defaults(&current, &defaults))
    }

    /// Rebuild typed parameters from an overrides tree layered over the
    /// engine defaults. Unknown keys in the tree are an error.
    pub fn from_overrides(feature: Feature, overrides: &Value) -> Result<Self, serde_json::Error> {
        match feature {
            Feature::LineCross => {
                let mut tree = serde_json::to_value(LineCrossParams::default())?;
                deep_merge(&mut tree, overrides);
                serde_json::from_value(tree).map(FeatureParams::LineCross)
            }
            Feature::RegionCrowd => {
                let mut tree = serde_json::to_value(RegionCrowdParams::default())?;
                deep_merge(&mut tree, overrides);
                serde_json::from_value(tree).map(FeatureParams::RegionCrowd)
            }
            Feature::DwellTime => {
                let mut tree = serde_json::to_value(DwellTimeParams::default())?;
                deep_merge(&mut tree, overrides);
                serde_json::from_value(tree).map(FeatureParams::DwellTime)
            }
        }
    }
}

/// Per-feature parameter storage for one session.
///
/// Each feature keeps its own tuning, so switching features back and forth
/// never loses adjustments.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureParamsStore {
    line_cross: Option<LineCrossParams>,
    region_crowd: Option<RegionCrowdParams>,
    dwell_time: Option<DwellTimeParams>,
}

impl FeatureParamsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current parameters for a feature (engine defaults until tuned).
    pub fn params_for(&self, feature: Feature) -> FeatureParams {
        match feature {
            Feature::LineCross => {
                FeatureParams::LineCross(self.line_cross.clone().unwrap_or_default())
            }
            Feature::RegionCrowd => {
                FeatureParams::RegionCrowd(self.region_crowd.clone().unwrap_or_default())
            }
            Feature::DwellTime => {
                FeatureParams::DwellTime(self.dwell_time.clone().unwrap_or_default())
            }
        }
    }

    /// Replace the stored parameters for the matching feature.
    pub fn set(&mut self, params: FeatureParams) {
        match params {
            FeatureParams::LineCross(p) => self.line_cross = Some(p),
            FeatureParams::RegionCrowd(p) => self.region_crowd = Some(p),
            FeatureParams::DwellTime(p) => self.dwell_time = Some(p),
        }
    }

    /// Drop tuning for a feature, falling back to the engine defaults.
    pub fn reset(&mut self, feature: Feature) {
        match feature {
            Feature::LineCross => self.line_cross = None,
            Feature::RegionCrowd => self.region_crowd = None,
            Feature::DwellTime => self.dwell_time = None,
        }
    }
}

// ============================================================================
// Tree helpers
// ============================================================================

/// Deep difference of `current` against `defaults`: nested objects recurse,
/// leaves keep only unequal values.
fn diff_from_defaults(current: &Value, defaults: &Value) -> Value {
    match (current, defaults) {
        (Value::Object(cur), Value::Object(def)) => {
            let mut out = serde_json::Map::new();
            for (key, value) in cur {
                match def.get(key) {
                    Some(default_value) if value.is_object() && default_value.is_object() => {
                        let nested = diff_from_defaults(value, default_value);
                        if nested.as_object().is_some_and(|m| !m.is_empty()) {
                            out.insert(key.clone(), nested);
                        }
                    }
                    Some(default_value) if default_value == value => {}
                    _ => {
                        out.insert(key.clone(), value.clone());
                    }
                }
            }
            Value::Object(out)
        }
        _ => current.clone(),
    }
}

/// Deep merge of `source` into `target`: nested objects merge, everything
/// else is replaced.
fn deep_merge(target: &mut Value, source: &Value) {
    match (target, source) {
        (Value::Object(target_map), Value::Object(source_map)) => {
            for (key, value) in source_map {
                match target_map.entry(key.clone()) {
                    Entry::Occupied(mut existing) => {
                        if existing.get().is_object() && value.is_object() {
                            deep_merge(existing.get_mut(), value);
                        } else {
                            existing.insert(value.clone());
                        }
                    }
                    Entry::Vacant(slot) => {
                        slot.insert(value.clone());
                    }
                }
            }
        }
        (target, source) => *target = source.clone(),
    }
}

// ============================================================================
// Tests
// ============================================================================
