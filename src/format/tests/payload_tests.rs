//! Tests for the wire types.

use serde_json::json;

use crate::format::payload::{LineEntry, ModelParams, ParsedConfig, PointEntry, RegionEntry, SourceMode};
use crate::theme;

/// A triangle entry as the editor would emit it.
fn triangle_entry() -> RegionEntry {
    RegionEntry {
        coords: vec![
            PointEntry { x: 0.25, y: 0.25 },
            PointEntry { x: 0.75, y: 0.25 },
            PointEntry { x: 0.5, y: 0.75 },
        ],
        id: 1,
        kind: "region_1".to_string(),
        color: theme::REGION_COLOR,
        mode: Vec::new(),
        name: Some("Region #1".to_string()),
    }
}

#[test]
fn test_region_entry_json_shape() {
    let value = serde_json::to_value(triangle_entry()).unwrap();

    assert_eq!(
        value,
        json!({
            "coords": [
                {"x": 0.25, "y": 0.25},
                {"x": 0.75, "y": 0.25},
                {"x": 0.5, "y": 0.75},
            ],
            "id": 1,
            "type": "region_1",
            "color": "#00ff00",
            "mode": [],
            "name": "Region #1",
        })
    );
}

#[test]
fn test_line_entry_omits_empty_optionals() {
    let entry = LineEntry {
        coords: vec![PointEntry { x: 0.25, y: 0.5 }, PointEntry { x: 0.75, y: 0.5 }],
        id: 2,
        kind: "line_2".to_string(),
        color: theme::LINE_COLOR,
        name: None,
        direction: None,
        orientation: None,
        bidirectional: false,
        mode: Vec::new(),
    };

    let value = serde_json::to_value(entry).unwrap();
    let object = value.as_object().unwrap();

    assert!(!object.contains_key("name"));
    assert!(!object.contains_key("direction"));
    assert!(!object.contains_key("orientation"));
    assert!(!object.contains_key("centroid"));
    assert_eq!(object["bidirectional"], json!(false));
    assert_eq!(object["mode"], json!([]));
}

#[test]
fn test_line_entry_tolerates_missing_optionals() {
    let entry: LineEntry = serde_json::from_value(json!({
        "coords": [{"x": 0.0, "y": 0.0}, {"x": 1.0, "y": 1.0}],
        "id": 3,
        "type": "line_3",
    }))
    .unwrap();

    assert_eq!(entry.color, theme::LINE_COLOR);
    assert_eq!(entry.name, None);
    assert_eq!(entry.direction, None);
    assert_eq!(entry.orientation, None);
    assert!(!entry.bidirectional);
    assert!(entry.mode.is_empty());
}

#[test]
fn test_parsed_config_ignores_runtime_sections() {
    let config = ParsedConfig::from_json(
        r##"{
            "model": [{"name": "m", "device": "cpu", "conf": 0.5, "iou": 0.5, "type": "small", "classes": ["person"]}],
            "feature": ["linecross"],
            "feature_params": {"linecross": {}},
            "regions": [],
            "lines": [],
            "input": {"source_type": "rtsp", "rtsp_url": "rtsp://cam/1"},
            "output": {"output_path": "output"},
            "metadata": {"cctv_id": "office"}
        }"##,
    )
    .unwrap();

    assert_eq!(config.feature, vec!["linecross".to_string()]);
    assert_eq!(config.model.len(), 1);
    assert!(config.regions.is_empty());
}

#[test]
fn test_parsed_config_defaults_every_section() {
    let config = ParsedConfig::from_json("{}").unwrap();

    assert!(config.model.is_empty());
    assert!(config.feature.is_empty());
    assert!(config.feature_params.is_null());
    assert!(config.regions.is_empty());
    assert!(config.lines.is_empty());
}

#[test]
fn test_model_params_engine_defaults() {
    let value = serde_json::to_value(ModelParams::default()).unwrap();

    assert_eq!(
        value,
        json!({
            "name": "person_360camera_detection_v33",
            "device": "cpu",
            "conf": 0.5,
            "iou": 0.7,
            "type": "small",
            "classes": ["person"],
        })
    );
}

#[test]
fn test_source_mode_spelling() {
    assert_eq!(
        serde_json::to_value(SourceMode::Production).unwrap(),
        json!("production")
    );
    assert_eq!(
        serde_json::to_value(SourceMode::Inference).unwrap(),
        json!("inference")
    );
}
