//! Event handlers for the annotation editor.
//!
//! `handle_event` is the single entry point; each event category has its
//! own handler below, keeping the dispatch clean and organized. Handlers
//! mutate `EditorState` in place. Validation failures surface as status
//! messages and leave the committed geometry untouched.

use std::mem;

use crate::direction::{is_degenerate, resolve};
use crate::editor::{Background, EditMode, EditorState, StatusMessage};
use crate::event::EditorEvent;
use crate::feature::{Feature, FeatureParams};
use crate::geometry::Point;
use crate::model::{CatalogError, Direction, GeometryKind, LINE_VERTICES, LineId, Orientation};
use crate::theme::Color;

/// Apply one event to the editor state.
pub fn handle_event(state: &mut EditorState, event: EditorEvent) {
    match event {
        // Session
        EditorEvent::SelectFeature(feature) => select_feature(state, feature),
        EditorEvent::SelectColor(kind, color) => select_color(state, kind, color),
        EditorEvent::SetBackground(background) => set_background(state, background),
        EditorEvent::ApplyFeatureParams(params) => apply_feature_params(state, params),
        EditorEvent::ResetFeatureParams(feature) => reset_feature_params(state, feature),

        // Drawing
        EditorEvent::BeginRegion => begin_drawing(state, GeometryKind::Region),
        EditorEvent::BeginLine => begin_drawing(state, GeometryKind::Line),
        EditorEvent::PointerClick(point) => pointer_click(state, point),
        EditorEvent::Save => save(state),
        EditorEvent::Cancel => cancel(state),

        // Catalog
        EditorEvent::Rename { kind, id, name } => rename(state, kind, id, &name),
        EditorEvent::Delete { kind, id } => delete(state, kind, id),
        EditorEvent::ClearAll => clear_all(state),

        // Line properties
        EditorEvent::EditLineProperties(line_id) => edit_line_properties(state, line_id),
        EditorEvent::ApplyLineProperties {
            direction,
            orientation,
            bidirectional,
        } => apply_line_properties(state, direction, orientation, bidirectional),
    }
}

// ============================================================================
// Session
// ============================================================================

fn select_feature(state: &mut EditorState, feature: Feature) {
    state.feature = feature;
    log::debug!("🔄 Active feature: {}", feature.label());
}

fn select_color(state: &mut EditorState, kind: GeometryKind, color: Color) {
    match kind {
        GeometryKind::Region => state.region_color = color,
        GeometryKind::Line => state.line_color = color,
    }
    log::debug!("🎨 {kind} color: {color}");
}

fn set_background(state: &mut EditorState, background: Option<Background>) {
    match &background {
        Some(bg) => log::info!("🖼️ Background: {} ({}x{})", bg.name, bg.width, bg.height),
        None => log::info!("🖼️ Background cleared"),
    }
    state.background = background;
}

fn apply_feature_params(state: &mut EditorState, params: FeatureParams) {
    let feature = params.feature();
    state.params.set(params);
    log::debug!("⚙️ Updated {} parameters", feature.name());
}

fn reset_feature_params(state: &mut EditorState, feature: Feature) {
    state.params.reset(feature);
    log::debug!("🔄 Reset {} parameters to engine defaults", feature.name());
}

// ============================================================================
// Drawing
// ============================================================================

fn begin_drawing(state: &mut EditorState, kind: GeometryKind) {
    match state.mode {
        EditMode::Idle => {
            state.mode = EditMode::Drawing {
                kind,
                points: Vec::new(),
            };
            state.status = None;
            log::debug!("✏️ Drawing a new {kind}");
        }
        EditMode::Drawing { .. } => {
            // Restarting is allowed; the unsaved buffer is discarded.
            state.mode = EditMode::Drawing {
                kind,
                points: Vec::new(),
            };
            state.status = None;
            log::debug!("✏️ Restarted drawing as a {kind}");
        }
        EditMode::AwaitingDirection { .. } => {
            state.status = Some(StatusMessage::warning(
                "Pick a direction for the pending line first",
            ));
            log::warn!("❌ Cannot start a {kind} while a direction pick is pending");
        }
        EditMode::EditingProperties { .. } => {
            state.status = Some(StatusMessage::warning(
                "Close the line properties editor first",
            ));
            log::warn!("❌ Cannot start a {kind} while editing line properties");
        }
    }
}

fn pointer_click(state: &mut EditorState, point: Point) {
    let point = point.clamp_unit();
    match mem::take(&mut state.mode) {
        EditMode::Drawing { kind, mut points } => {
            points.push(point);
            log::debug!(
                "✏️ {} point {}: ({:.3}, {:.3})",
                kind,
                points.len(),
                point.x,
                point.y
            );
            state.mode = EditMode::Drawing { kind, points };
        }
        EditMode::AwaitingDirection { endpoints } => {
            commit_directed_line(state, endpoints, point);
        }
        other => {
            log::debug!("🖱️ Click ignored outside an active drawing");
            state.mode = other;
        }
    }
}

/// Resolve the direction from the picker click and commit the pending line.
fn commit_directed_line(state: &mut EditorState, endpoints: [Point; 2], click: Point) {
    let [p1, p2] = endpoints;
    let resolved = resolve(p1, p2, click);
    let committed = state.catalog.commit_directed_line(
        vec![p1, p2],
        state.line_color,
        resolved.direction.clone(),
        resolved.orientation,
    );
    match committed {
        Ok(id) => {
            state.status = Some(StatusMessage::info(format!(
                "Line #{} saved, direction {}",
                id,
                resolved.direction.as_str()
            )));
            log::info!(
                "✅ Line #{} committed ({}, {})",
                id,
                resolved.direction.as_str(),
                resolved.orientation.as_str()
            );
        }
        Err(err) => {
            // Two endpoints are guaranteed here, so this cannot fire; keep
            // the pending pick alive if it ever does.
            state.mode = EditMode::AwaitingDirection { endpoints };
            state.status = Some(StatusMessage::error(err.to_string()));
            log::error!("❌ {err}");
        }
    }
}

fn save(state: &mut EditorState) {
    let (kind, points) = match mem::take(&mut state.mode) {
        EditMode::Drawing { kind, points } => (kind, points),
        other => {
            state.mode = other;
            state.status = Some(StatusMessage::warning("Nothing to save"));
            log::warn!("❌ Save with no drawing in progress");
            return;
        }
    };
    match kind {
        GeometryKind::Region => save_region(state, points),
        GeometryKind::Line => save_line(state, points),
    }
}

fn save_region(state: &mut EditorState, points: Vec<Point>) {
    match state.catalog.add_region(points.clone(), state.region_color) {
        Ok(id) => {
            state.status = Some(StatusMessage::info(format!("Region #{id} saved")));
            log::info!("✅ Region #{} committed with {} points", id, points.len());
        }
        Err(err) => {
            // Keep the buffer so the user can add the missing points.
            state.mode = EditMode::Drawing {
                kind: GeometryKind::Region,
                points,
            };
            state.status = Some(StatusMessage::warning(err.to_string()));
            log::warn!("❌ Region save rejected: {err}");
        }
    }
}

fn save_line(state: &mut EditorState, points: Vec<Point>) {
    if points.len() != LINE_VERTICES {
        let err = CatalogError::BadLinePointCount {
            count: points.len(),
        };
        state.mode = EditMode::Drawing {
            kind: GeometryKind::Line,
            points,
        };
        state.status = Some(StatusMessage::warning(err.to_string()));
        log::warn!("❌ Line save rejected: {err}");
        return;
    }
    let endpoints = [points[0], points[1]];

    if is_degenerate(endpoints[0], endpoints[1]) {
        state.mode = EditMode::Drawing {
            kind: GeometryKind::Line,
            points,
        };
        state.status = Some(StatusMessage::warning(
            "Line endpoints are too close together",
        ));
        log::warn!("❌ Line save rejected: endpoints coincide");
        return;
    }

    // Line crossing needs a direction, so the line is held back until the
    // user clicks the IN side. Other features take the line as-is.
    if state.feature == Feature::LineCross {
        state.mode = EditMode::AwaitingDirection { endpoints };
        state.status = Some(StatusMessage::info("Click the IN side of the line"));
        log::debug!("✏️ Line pending direction pick");
        return;
    }

    match state.catalog.add_line(points, state.line_color) {
        Ok(id) => {
            state.status = Some(StatusMessage::info(format!("Line #{id} saved")));
            log::info!("✅ Line #{id} committed");
        }
        Err(err) => {
            state.mode = EditMode::Drawing {
                kind: GeometryKind::Line,
                points: endpoints.to_vec(),
            };
            state.status = Some(StatusMessage::error(err.to_string()));
            log::error!("❌ {err}");
        }
    }
}

fn cancel(state: &mut EditorState) {
    if state.mode.is_idle() {
        log::debug!("🔄 Cancel with nothing in progress");
        return;
    }
    state.mode = EditMode::Idle;
    state.status = None;
    log::debug!("🗑️ Interaction discarded");
}

// ============================================================================
// Catalog
// ============================================================================

fn rename(state: &mut EditorState, kind: GeometryKind, id: u32, name: &str) {
    match state.catalog.rename(kind, id, name) {
        Ok(()) => log::debug!("✏️ Renamed {kind} #{id} to {name:?}"),
        Err(err) => {
            state.status = Some(StatusMessage::error(err.to_string()));
            log::warn!("❌ {err}");
        }
    }
}

fn delete(state: &mut EditorState, kind: GeometryKind, id: u32) {
    match state.catalog.delete(kind, id) {
        Ok(()) => {
            // Close the properties editor if its line was just removed.
            if kind == GeometryKind::Line
                && matches!(state.mode, EditMode::EditingProperties { line_id } if line_id == id)
            {
                state.mode = EditMode::Idle;
            }
            state.status = Some(StatusMessage::info(format!("Deleted {kind} #{id}")));
            log::info!("🗑️ Deleted {kind} #{id}");
        }
        Err(err) => {
            state.status = Some(StatusMessage::error(err.to_string()));
            log::warn!("❌ {err}");
        }
    }
}

fn clear_all(state: &mut EditorState) {
    state.catalog.clear_all();
    state.mode = EditMode::Idle;
    state.status = Some(StatusMessage::info("Cleared all geometry"));
    log::info!("🗑️ Cleared all geometry");
}

// ============================================================================
// Line properties
// ============================================================================

fn edit_line_properties(state: &mut EditorState, line_id: LineId) {
    if !state.mode.is_idle() {
        state.status = Some(StatusMessage::warning(
            "Finish the current interaction first",
        ));
        log::warn!("❌ Properties editor blocked by an active interaction");
        return;
    }
    if state.catalog.line(line_id).is_none() {
        let err = CatalogError::NotFound {
            kind: GeometryKind::Line,
            id: line_id,
        };
        state.status = Some(StatusMessage::error(err.to_string()));
        log::warn!("❌ {err}");
        return;
    }
    state.mode = EditMode::EditingProperties { line_id };
    log::debug!("✏️ Editing properties of line #{line_id}");
}

fn apply_line_properties(
    state: &mut EditorState,
    direction: Option<Direction>,
    orientation: Option<Orientation>,
    bidirectional: bool,
) {
    let line_id = match &state.mode {
        EditMode::EditingProperties { line_id } => *line_id,
        _ => {
            log::debug!("🖱️ Property apply ignored outside the properties editor");
            return;
        }
    };

    let Some(line) = state.catalog.line_mut(line_id) else {
        // Deleting the edited line drops back to idle, so the line should
        // always still exist here.
        let err = CatalogError::NotFound {
            kind: GeometryKind::Line,
            id: line_id,
        };
        state.mode = EditMode::Idle;
        state.status = Some(StatusMessage::error(err.to_string()));
        log::error!("❌ {err}");
        return;
    };

    // A directed line always carries its crossing anchor; an undirected one
    // never does.
    let midpoint = line.midpoint();
    line.centroid = if direction.is_some() {
        Some(midpoint)
    } else {
        None
    };
    line.direction = direction;
    line.orientation = orientation;
    line.bidirectional = bidirectional;

    state.mode = EditMode::Idle;
    state.status = Some(StatusMessage::info(format!("Line #{line_id} updated")));
    log::info!("✅ Line #{line_id} properties updated");
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::StatusLevel;
    use crate::feature::LineCrossParams;
    use crate::theme::PALETTE;

    fn begin_event(kind: GeometryKind) -> EditorEvent {
        match kind {
            GeometryKind::Region => EditorEvent::BeginRegion,
            GeometryKind::Line => EditorEvent::BeginLine,
        }
    }

    /// Begin a drawing and click the given points.
    fn draw(state: &mut EditorState, kind: GeometryKind, points: &[(f32, f32)]) {
        handle_event(state, begin_event(kind));
        for &(x, y) in points {
            handle_event(state, EditorEvent::PointerClick(Point::new(x, y)));
        }
    }

    fn status_level(state: &EditorState) -> Option<StatusLevel> {
        state.status.as_ref().map(|s| s.level)
    }

    #[test]
    fn test_draw_and_save_region() {
        let mut state = EditorState::new();
        draw(
            &mut state,
            GeometryKind::Region,
            &[(0.1, 0.1), (0.9, 0.1), (0.9, 0.9), (0.1, 0.9)],
        );
        handle_event(&mut state, EditorEvent::Save);

        assert!(state.mode.is_idle());
        assert_eq!(status_level(&state), Some(StatusLevel::Info));
        let region = state.catalog.region(1).unwrap();
        assert_eq!(region.name, "Region #1");
        assert_eq!(region.coords.len(), 4);
    }

    #[test]
    fn test_short_region_save_keeps_buffer() {
        let mut state = EditorState::new();
        draw(&mut state, GeometryKind::Region, &[(0.1, 0.1), (0.9, 0.1)]);
        handle_event(&mut state, EditorEvent::Save);

        // Rejected, but the two points survive
        assert_eq!(status_level(&state), Some(StatusLevel::Warning));
        assert!(state.catalog.is_empty());
        assert_eq!(state.mode.drawing_points().map(<[Point]>::len), Some(2));

        // Adding a third point makes the same save succeed
        handle_event(&mut state, EditorEvent::PointerClick(Point::new(0.5, 0.9)));
        handle_event(&mut state, EditorEvent::Save);
        assert!(state.mode.is_idle());
        assert_eq!(state.catalog.regions().len(), 1);
    }

    #[test]
    fn test_line_cross_save_awaits_direction() {
        let mut state = EditorState::new();
        assert_eq!(state.feature, Feature::LineCross);
        draw(&mut state, GeometryKind::Line, &[(0.2, 0.5), (0.8, 0.5)]);
        handle_event(&mut state, EditorEvent::Save);

        // Not committed yet
        assert!(state.catalog.is_empty());
        assert!(matches!(state.mode, EditMode::AwaitingDirection { .. }));
    }

    #[test]
    fn test_direction_click_commits_line() {
        let mut state = EditorState::new();
        draw(&mut state, GeometryKind::Line, &[(0.2, 0.5), (0.8, 0.5)]);
        handle_event(&mut state, EditorEvent::Save);

        // Click above the segment: IN points up
        handle_event(&mut state, EditorEvent::PointerClick(Point::new(0.5, 0.3)));

        assert!(state.mode.is_idle());
        let line = state.catalog.line(1).unwrap();
        assert_eq!(line.direction, Some(Direction::Upward));
        assert_eq!(line.orientation, Some(Orientation::Horizontal));
        assert_eq!(line.centroid, Some(Point::new(0.5, 0.5)));
        assert!(!line.bidirectional);
    }

    #[test]
    fn test_other_features_commit_lines_undirected() {
        let mut state = EditorState::new();
        handle_event(&mut state, EditorEvent::SelectFeature(Feature::DwellTime));
        draw(&mut state, GeometryKind::Line, &[(0.2, 0.5), (0.8, 0.5)]);
        handle_event(&mut state, EditorEvent::Save);

        assert!(state.mode.is_idle());
        let line = state.catalog.line(1).unwrap();
        assert_eq!(line.direction, None);
        assert_eq!(line.orientation, None);
        assert_eq!(line.centroid, None);
    }

    #[test]
    fn test_line_needs_exactly_two_points() {
        let mut state = EditorState::new();
        draw(&mut state, GeometryKind::Line, &[(0.2, 0.5)]);
        handle_event(&mut state, EditorEvent::Save);

        assert_eq!(status_level(&state), Some(StatusLevel::Warning));
        assert_eq!(state.mode.drawing_points().map(<[Point]>::len), Some(1));
        assert!(state.catalog.is_empty());
    }

    #[test]
    fn test_degenerate_line_rejected() {
        let mut state = EditorState::new();
        draw(
            &mut state,
            GeometryKind::Line,
            &[(0.5, 0.5), (0.500_01, 0.5)],
        );
        handle_event(&mut state, EditorEvent::Save);

        assert_eq!(status_level(&state), Some(StatusLevel::Warning));
        assert!(matches!(state.mode, EditMode::Drawing { .. }));
        assert!(state.catalog.is_empty());
    }

    #[test]
    fn test_begin_restarts_drawing_buffer() {
        let mut state = EditorState::new();
        draw(&mut state, GeometryKind::Region, &[(0.1, 0.1), (0.9, 0.1)]);
        handle_event(&mut state, EditorEvent::BeginLine);

        assert_eq!(
            state.mode,
            EditMode::Drawing {
                kind: GeometryKind::Line,
                points: Vec::new()
            }
        );
    }

    #[test]
    fn test_begin_blocked_while_awaiting_direction() {
        let mut state = EditorState::new();
        draw(&mut state, GeometryKind::Line, &[(0.2, 0.5), (0.8, 0.5)]);
        handle_event(&mut state, EditorEvent::Save);
        handle_event(&mut state, EditorEvent::BeginRegion);

        assert!(matches!(state.mode, EditMode::AwaitingDirection { .. }));
        assert_eq!(status_level(&state), Some(StatusLevel::Warning));
    }

    #[test]
    fn test_cancel_discards_interaction() {
        let mut state = EditorState::new();
        draw(&mut state, GeometryKind::Region, &[(0.1, 0.1), (0.9, 0.1)]);
        handle_event(&mut state, EditorEvent::Cancel);
        assert!(state.mode.is_idle());
        assert!(state.catalog.is_empty());

        // Cancelling the direction pick drops the line entirely
        draw(&mut state, GeometryKind::Line, &[(0.2, 0.5), (0.8, 0.5)]);
        handle_event(&mut state, EditorEvent::Save);
        handle_event(&mut state, EditorEvent::Cancel);
        assert!(state.mode.is_idle());
        assert!(state.catalog.is_empty());
    }

    #[test]
    fn test_clicks_ignored_when_idle() {
        let mut state = EditorState::new();
        handle_event(&mut state, EditorEvent::PointerClick(Point::new(0.5, 0.5)));
        assert!(state.mode.is_idle());
        assert!(state.catalog.is_empty());
    }

    #[test]
    fn test_clicks_clamped_to_unit_square() {
        let mut state = EditorState::new();
        draw(&mut state, GeometryKind::Region, &[(1.5, -0.2)]);

        let points = state.mode.drawing_points().unwrap();
        assert_eq!(points[0], Point::new(1.0, 0.0));
    }

    #[test]
    fn test_save_with_nothing_in_progress() {
        let mut state = EditorState::new();
        handle_event(&mut state, EditorEvent::Save);
        assert!(state.mode.is_idle());
        assert_eq!(status_level(&state), Some(StatusLevel::Warning));
    }

    #[test]
    fn test_rename_and_delete() {
        let mut state = EditorState::new();
        draw(
            &mut state,
            GeometryKind::Region,
            &[(0.1, 0.1), (0.9, 0.1), (0.5, 0.9)],
        );
        handle_event(&mut state, EditorEvent::Save);

        handle_event(
            &mut state,
            EditorEvent::Rename {
                kind: GeometryKind::Region,
                id: 1,
                name: "Lobby".to_string(),
            },
        );
        assert_eq!(state.catalog.region(1).unwrap().name, "Lobby");

        handle_event(
            &mut state,
            EditorEvent::Delete {
                kind: GeometryKind::Region,
                id: 1,
            },
        );
        assert!(state.catalog.is_empty());

        // Deleting again reports the miss
        handle_event(
            &mut state,
            EditorEvent::Delete {
                kind: GeometryKind::Region,
                id: 1,
            },
        );
        assert_eq!(status_level(&state), Some(StatusLevel::Error));
    }

    #[test]
    fn test_delete_edited_line_returns_to_idle() {
        let mut state = EditorState::new();
        draw(&mut state, GeometryKind::Line, &[(0.2, 0.5), (0.8, 0.5)]);
        handle_event(&mut state, EditorEvent::Save);
        handle_event(&mut state, EditorEvent::PointerClick(Point::new(0.5, 0.3)));

        handle_event(&mut state, EditorEvent::EditLineProperties(1));
        assert_eq!(state.mode, EditMode::EditingProperties { line_id: 1 });

        handle_event(
            &mut state,
            EditorEvent::Delete {
                kind: GeometryKind::Line,
                id: 1,
            },
        );
        assert!(state.mode.is_idle());
        assert!(state.catalog.is_empty());
    }

    #[test]
    fn test_clear_all_restarts_session() {
        let mut state = EditorState::new();
        draw(
            &mut state,
            GeometryKind::Region,
            &[(0.1, 0.1), (0.9, 0.1), (0.5, 0.9)],
        );
        handle_event(&mut state, EditorEvent::Save);
        handle_event(&mut state, EditorEvent::ClearAll);

        assert!(state.catalog.is_empty());
        assert!(state.mode.is_idle());

        // Id sequences restart
        draw(
            &mut state,
            GeometryKind::Region,
            &[(0.1, 0.1), (0.9, 0.1), (0.5, 0.9)],
        );
        handle_event(&mut state, EditorEvent::Save);
        assert!(state.catalog.region(1).is_some());
    }

    #[test]
    fn test_apply_line_properties() {
        let mut state = EditorState::new();
        handle_event(&mut state, EditorEvent::SelectFeature(Feature::DwellTime));
        draw(&mut state, GeometryKind::Line, &[(0.2, 0.5), (0.8, 0.5)]);
        handle_event(&mut state, EditorEvent::Save);

        handle_event(&mut state, EditorEvent::EditLineProperties(1));
        handle_event(
            &mut state,
            EditorEvent::ApplyLineProperties {
                direction: Some(Direction::Downward),
                orientation: Some(Orientation::Horizontal),
                bidirectional: true,
            },
        );

        assert!(state.mode.is_idle());
        let line = state.catalog.line(1).unwrap();
        assert_eq!(line.direction, Some(Direction::Downward));
        assert_eq!(line.centroid, Some(Point::new(0.5, 0.5)));
        assert!(line.bidirectional);

        // Clearing the direction clears the crossing anchor with it
        handle_event(&mut state, EditorEvent::EditLineProperties(1));
        handle_event(
            &mut state,
            EditorEvent::ApplyLineProperties {
                direction: None,
                orientation: Some(Orientation::Horizontal),
                bidirectional: false,
            },
        );
        let line = state.catalog.line(1).unwrap();
        assert_eq!(line.direction, None);
        assert_eq!(line.centroid, None);
    }

    #[test]
    fn test_edit_line_properties_requires_idle() {
        let mut state = EditorState::new();
        handle_event(&mut state, EditorEvent::SelectFeature(Feature::DwellTime));
        draw(&mut state, GeometryKind::Line, &[(0.2, 0.5), (0.8, 0.5)]);
        handle_event(&mut state, EditorEvent::Save);

        handle_event(&mut state, EditorEvent::BeginRegion);
        handle_event(&mut state, EditorEvent::EditLineProperties(1));
        assert!(matches!(state.mode, EditMode::Drawing { .. }));
        assert_eq!(status_level(&state), Some(StatusLevel::Warning));

        handle_event(&mut state, EditorEvent::Cancel);
        handle_event(&mut state, EditorEvent::EditLineProperties(7));
        assert!(state.mode.is_idle());
        assert_eq!(status_level(&state), Some(StatusLevel::Error));
    }

    #[test]
    fn test_select_color_applies_to_new_geometry() {
        let mut state = EditorState::new();
        let color = PALETTE[3];
        handle_event(
            &mut state,
            EditorEvent::SelectColor(GeometryKind::Region, color),
        );
        assert_eq!(state.region_color, color);

        draw(
            &mut state,
            GeometryKind::Region,
            &[(0.1, 0.1), (0.9, 0.1), (0.5, 0.9)],
        );
        handle_event(&mut state, EditorEvent::Save);
        assert_eq!(state.catalog.region(1).unwrap().color, color);

        // The line color is untouched
        assert_eq!(state.line_color, EditorState::new().line_color);
    }

    #[test]
    fn test_feature_params_events() {
        let mut state = EditorState::new();
        let params = FeatureParams::LineCross(LineCrossParams {
            cooldown_seconds: 30,
            ..Default::default()
        });
        handle_event(&mut state, EditorEvent::ApplyFeatureParams(params.clone()));
        assert_eq!(state.params.params_for(Feature::LineCross), params);

        handle_event(
            &mut state,
            EditorEvent::ResetFeatureParams(Feature::LineCross),
        );
        assert_eq!(
            state.params.params_for(Feature::LineCross),
            FeatureParams::defaults_for(Feature::LineCross)
        );
    }

    #[test]
    fn test_set_background() {
        let mut state = EditorState::new();
        handle_event(
            &mut state,
            EditorEvent::SetBackground(Some(Background {
                name: "office.jpg".to_string(),
                width: 1920,
                height: 1080,
            })),
        );
        assert_eq!(state.background.as_ref().map(|b| b.width), Some(1920));

        handle_event(&mut state, EditorEvent::SetBackground(None));
        assert!(state.background.is_none());
    }
}
