//! Scripted authoring session for the zoneline editor core.
//!
//! Draws one crossing line, resolves its direction from a pointer click,
//! and prints the build request that would go to the configuration backend.

use zoneline::config::EditorConfig;
use zoneline::editor::EditorState;
use zoneline::event::EditorEvent;
use zoneline::feature::Feature;
use zoneline::format::{BuildOptions, FormatError, to_build_request};
use zoneline::geometry::Point;
use zoneline::handlers::handle_event;
use zoneline::model::GeometryKind;
use zoneline::render::{Viewport, draw_frame};

fn main() {
    let config = EditorConfig::load_from_default_path().unwrap_or_else(EditorConfig::new);

    // RUST_LOG still wins over the configured level
    env_logger::Builder::new()
        .filter_level(config.log_level.to_level_filter())
        .parse_default_env()
        .init();

    let mut state = EditorState::new();
    state.feature = config.default_feature;
    state.region_color = config.region_color;
    state.line_color = config.line_color;

    // Author one crossing line, IN side above it
    handle_event(&mut state, EditorEvent::SelectFeature(Feature::LineCross));
    println!(
        "feature: {} ({})",
        state.feature.label(),
        state.feature.description()
    );
    handle_event(&mut state, EditorEvent::BeginLine);
    handle_event(&mut state, EditorEvent::PointerClick(Point::new(0.2, 0.6)));
    handle_event(&mut state, EditorEvent::PointerClick(Point::new(0.8, 0.6)));
    handle_event(&mut state, EditorEvent::Save);
    handle_event(&mut state, EditorEvent::PointerClick(Point::new(0.5, 0.3)));
    handle_event(
        &mut state,
        EditorEvent::Rename {
            kind: GeometryKind::Line,
            id: 1,
            name: "Entrance".to_string(),
        },
    );

    if let Some(status) = &state.status {
        println!("status: {}", status.text);
    }

    let frame = draw_frame(&state, Viewport::new(1280.0, 720.0));
    log::debug!("frame holds {} draw commands", frame.commands().len());

    let options = BuildOptions::new().config_name("lobby-entrance");
    let built = to_build_request(&state, &options)
        .and_then(|request| request.to_json().map_err(FormatError::from));
    match built {
        Ok(json) => println!("{json}"),
        Err(err) => eprintln!("build failed: {err}"),
    }
}
