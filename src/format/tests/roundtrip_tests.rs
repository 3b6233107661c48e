//! Round-trip tests: author, build, reload.
//!
//! The backend copies the `regions` and `lines` entries of a build request
//! verbatim into the stored configuration, so wrapping a request in the
//! configuration shape reproduces exactly what a later load sees.

use serde_json::json;

use crate::editor::EditorState;
use crate::event::EditorEvent;
use crate::feature::{Feature, FeatureParams, LineCrossParams};
use crate::format::adapter::{BuildOptions, load_session, to_build_request};
use crate::format::payload::ParsedConfig;
use crate::geometry::Point;
use crate::handlers::handle_event;
use crate::model::{GeometryKind, Orientation};

/// Wrap a build request the way the backend stores it.
fn stored_config(state: &EditorState) -> ParsedConfig {
    let request = to_build_request(state, &BuildOptions::new()).unwrap();
    serde_json::from_value(json!({
        "model": [request.model],
        "feature": [request.feature],
        "feature_params": request.feature_params,
        "regions": request.regions,
        "lines": request.lines,
        "input": {"source_type": "video", "max_fps": request.max_fps},
        "output": {"output_path": "output"},
        "metadata": {"cctv_id": request.cctv_id},
    }))
    .unwrap()
}

#[test]
fn test_authored_session_survives_reload() {
    let mut state = EditorState::new();

    // Draw a crossing line and pick the IN side above it
    handle_event(&mut state, EditorEvent::BeginLine);
    handle_event(&mut state, EditorEvent::PointerClick(Point::new(0.25, 0.5)));
    handle_event(&mut state, EditorEvent::PointerClick(Point::new(0.75, 0.5)));
    handle_event(&mut state, EditorEvent::Save);
    handle_event(&mut state, EditorEvent::PointerClick(Point::new(0.5, 0.25)));

    handle_event(
        &mut state,
        EditorEvent::Rename {
            kind: GeometryKind::Line,
            id: 1,
            name: "Entrance".to_string(),
        },
    );
    handle_event(
        &mut state,
        EditorEvent::ApplyFeatureParams(FeatureParams::LineCross(LineCrossParams {
            cooldown_seconds: 30,
            ..Default::default()
        })),
    );

    let mut reloaded = EditorState::new();
    load_session(&mut reloaded, &stored_config(&state)).unwrap();

    assert_eq!(reloaded.feature, Feature::LineCross);
    assert_eq!(reloaded.catalog, state.catalog);
    assert_eq!(
        reloaded.params.params_for(Feature::LineCross),
        state.params.params_for(Feature::LineCross)
    );
}

#[test]
fn test_orientation_only_line_survives_reload() {
    let mut state = EditorState::new();
    handle_event(&mut state, EditorEvent::SelectFeature(Feature::DwellTime));
    handle_event(&mut state, EditorEvent::BeginRegion);
    handle_event(&mut state, EditorEvent::PointerClick(Point::new(0.1, 0.1)));
    handle_event(&mut state, EditorEvent::PointerClick(Point::new(0.9, 0.1)));
    handle_event(&mut state, EditorEvent::PointerClick(Point::new(0.5, 0.9)));
    handle_event(&mut state, EditorEvent::Save);

    // A dwell-time line commits undirected; give it an orientation but no
    // direction through the properties editor
    handle_event(&mut state, EditorEvent::BeginLine);
    handle_event(&mut state, EditorEvent::PointerClick(Point::new(0.2, 0.5)));
    handle_event(&mut state, EditorEvent::PointerClick(Point::new(0.8, 0.5)));
    handle_event(&mut state, EditorEvent::Save);
    handle_event(&mut state, EditorEvent::EditLineProperties(1));
    handle_event(
        &mut state,
        EditorEvent::ApplyLineProperties {
            direction: None,
            orientation: Some(Orientation::Horizontal),
            bidirectional: false,
        },
    );

    let parsed = stored_config(&state);
    assert_eq!(parsed.lines[0].orientation.as_deref(), Some("horizontal"));
    assert_eq!(parsed.lines[0].direction, None);

    let mut reloaded = EditorState::new();
    load_session(&mut reloaded, &parsed).unwrap();
    assert_eq!(reloaded.catalog, state.catalog);
}

#[test]
fn test_reload_continues_the_id_sequence() {
    let mut state = EditorState::new();
    handle_event(&mut state, EditorEvent::SelectFeature(Feature::RegionCrowd));
    for _ in 0..2 {
        handle_event(&mut state, EditorEvent::BeginRegion);
        handle_event(&mut state, EditorEvent::PointerClick(Point::new(0.25, 0.25)));
        handle_event(&mut state, EditorEvent::PointerClick(Point::new(0.75, 0.25)));
        handle_event(&mut state, EditorEvent::PointerClick(Point::new(0.5, 0.75)));
        handle_event(&mut state, EditorEvent::Save);
    }

    let mut reloaded = EditorState::new();
    load_session(&mut reloaded, &stored_config(&state)).unwrap();

    let id = reloaded
        .catalog
        .add_region(
            vec![
                Point::new(0.0, 0.0),
                Point::new(0.5, 0.0),
                Point::new(0.5, 0.5),
            ],
            reloaded.region_color,
        )
        .unwrap();
    assert_eq!(id, 3);
}
