//! Canvas rendering: editor state to display list.
//!
//! `draw_frame` is a pure function from state to an ordered list of draw
//! commands; the embedding shell replays the list on whatever surface it
//! owns. Nothing here touches a window or GPU, which keeps every visual
//! rule testable.

use crate::direction::{Compass, cardinal_of, unit_perpendicular};
use crate::editor::{EditMode, EditorState};
use crate::geometry::Point;
use crate::model::{Direction, Line, Region};
use crate::theme::{self, Color};

/// Stroke width for committed geometry.
const STROKE_WIDTH: f32 = 2.0;
/// Stroke width for the line whose properties are being edited.
const HIGHLIGHT_WIDTH: f32 = 4.0;
/// Radius of vertex and crossing-anchor markers.
const MARKER_RADIUS: f32 = 4.0;
/// Length of direction arrows in pixels.
const ARROW_LENGTH: f32 = 28.0;
/// Label text size in pixels.
const LABEL_SIZE: f32 = 14.0;
/// Offset of the picker arrows from the line midpoint, in normalized units.
const PICKER_ARROW_OFFSET: f32 = 0.15;
/// Fill opacity for committed region bodies.
const REGION_FILL_OPACITY: f32 = 0.2;
/// Fill opacity for the direction picker half planes.
const PICKER_TINT_OPACITY: f32 = 0.3;

/// Pixel dimensions of the canvas the normalized coordinates map onto.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Map a normalized point into pixels.
    pub fn to_pixels(&self, p: Point) -> (f32, f32) {
        (p.x * self.width, p.y * self.height)
    }
}

/// One drawing primitive. All coordinates are in pixels.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Fill the whole canvas
    Clear { color: Color },
    /// Blit the background image over the full canvas
    Image { name: String },
    /// Fill a polygon, blended over what is already painted
    FillPolygon {
        vertices: Vec<(f32, f32)>,
        color: Color,
        opacity: f32,
    },
    /// Stroke a polygon outline, optionally closing it
    StrokePolygon {
        vertices: Vec<(f32, f32)>,
        color: Color,
        width: f32,
        closed: bool,
    },
    /// Stroke a single segment
    Segment {
        from: (f32, f32),
        to: (f32, f32),
        color: Color,
        width: f32,
    },
    /// Filled dot
    Marker {
        at: (f32, f32),
        color: Color,
        radius: f32,
    },
    /// Direction arrow
    Arrow {
        at: (f32, f32),
        compass: Compass,
        color: Color,
        length: f32,
    },
    /// Text anchored at a point
    Label {
        at: (f32, f32),
        text: String,
        color: Color,
        size: f32,
    },
}

/// Ordered draw commands for one repaint.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Frame {
    commands: Vec<DrawCommand>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }
}

/// Build the display list for the current editor state.
///
/// Paint order is back to front: canvas clear, background image, committed
/// regions, committed lines, then the overlay for the active interaction.
pub fn draw_frame(state: &EditorState, viewport: Viewport) -> Frame {
    let mut frame = Frame::new();
    frame.push(DrawCommand::Clear {
        color: theme::CANVAS_BACKGROUND,
    });
    if let Some(bg) = &state.background {
        frame.push(DrawCommand::Image {
            name: bg.name.clone(),
        });
    }

    for region in state.catalog.regions() {
        draw_region(&mut frame, region, viewport);
    }

    let edited_line = match &state.mode {
        EditMode::EditingProperties { line_id } => Some(*line_id),
        _ => None,
    };
    for line in state.catalog.lines() {
        let width = if edited_line == Some(line.id) {
            HIGHLIGHT_WIDTH
        } else {
            STROKE_WIDTH
        };
        draw_line(&mut frame, line, viewport, width);
    }

    match &state.mode {
        EditMode::Idle | EditMode::EditingProperties { .. } => {}
        EditMode::Drawing { kind, points } => {
            draw_preview(&mut frame, points, state.color_for(*kind), viewport);
        }
        EditMode::AwaitingDirection { endpoints } => {
            draw_direction_picker(&mut frame, *endpoints, state.line_color, viewport);
        }
    }

    frame
}

fn draw_region(frame: &mut Frame, region: &Region, viewport: Viewport) {
    let vertices: Vec<(f32, f32)> = region
        .coords
        .iter()
        .map(|p| viewport.to_pixels(*p))
        .collect();
    let label_at = vertices.first().copied();
    frame.push(DrawCommand::FillPolygon {
        vertices: vertices.clone(),
        color: region.color,
        opacity: REGION_FILL_OPACITY,
    });
    frame.push(DrawCommand::StrokePolygon {
        vertices,
        color: region.color,
        width: STROKE_WIDTH,
        closed: true,
    });
    if let Some(at) = label_at {
        frame.push(DrawCommand::Label {
            at,
            text: region.name.clone(),
            color: theme::LABEL_COLOR,
            size: LABEL_SIZE,
        });
    }
}

fn draw_line(frame: &mut Frame, line: &Line, viewport: Viewport, width: f32) {
    let [p1, p2] = line.coords;
    frame.push(DrawCommand::Segment {
        from: viewport.to_pixels(p1),
        to: viewport.to_pixels(p2),
        color: line.color,
        width,
    });

    let anchor = viewport.to_pixels(line.centroid.unwrap_or_else(|| line.midpoint()));
    if line.centroid.is_some() {
        frame.push(DrawCommand::Marker {
            at: anchor,
            color: line.color,
            radius: MARKER_RADIUS,
        });
    }
    for compass in line_arrows(line) {
        frame.push(DrawCommand::Arrow {
            at: anchor,
            compass,
            color: line.color,
            length: ARROW_LENGTH,
        });
    }

    frame.push(DrawCommand::Label {
        at: viewport.to_pixels(line.midpoint()),
        text: line.name.clone(),
        color: theme::LABEL_COLOR,
        size: LABEL_SIZE,
    });
}

/// Arrow compasses for a directed line: the IN arrow, plus the OUT arrow
/// when crossings count both ways.
///
/// On diagonal lines a plain cardinal arrow looks detached from the
/// geometry, so the arrow follows the true perpendicular as long as its
/// dominant axis still agrees with the stored direction.
fn line_arrows(line: &Line) -> Vec<Compass> {
    let Some(direction) = &line.direction else {
        return Vec::new();
    };
    let Some(cardinal) = direction_compass(direction) else {
        return Vec::new();
    };

    let [p1, p2] = line.coords;
    let (nx, ny) = unit_perpendicular(p1, p2);
    let compass = if cardinal_of(nx, ny) == *direction {
        Compass::from_vector(nx, ny)
    } else if cardinal_of(-nx, -ny) == *direction {
        Compass::from_vector(-nx, -ny)
    } else {
        // The stored direction disagrees with the geometry (edited by
        // hand); show the plain cardinal.
        cardinal
    };

    let mut arrows = vec![compass];
    if line.bidirectional {
        arrows.push(compass.opposite());
    }
    arrows
}

/// Compass for a stored cardinal. `Bidirectional` and custom direction
/// strings name no single axis, so they get no arrow.
fn direction_compass(direction: &Direction) -> Option<Compass> {
    match direction {
        Direction::Upward => Some(Compass::North),
        Direction::Downward => Some(Compass::South),
        Direction::Leftward => Some(Compass::West),
        Direction::Rightward => Some(Compass::East),
        Direction::Bidirectional | Direction::Other(_) => None,
    }
}

/// In-progress points with an open outline between them.
fn draw_preview(frame: &mut Frame, points: &[Point], color: Color, viewport: Viewport) {
    let vertices: Vec<(f32, f32)> = points.iter().map(|p| viewport.to_pixels(*p)).collect();
    if vertices.len() >= 2 {
        frame.push(DrawCommand::StrokePolygon {
            vertices: vertices.clone(),
            color,
            width: STROKE_WIDTH,
            closed: false,
        });
    }
    for &at in &vertices {
        frame.push(DrawCommand::Marker {
            at,
            color,
            radius: MARKER_RADIUS,
        });
    }
}

/// The direction picker: both sides of the pending line tinted, each with
/// the arrow a click on that side would assign, and the line itself on top.
fn draw_direction_picker(
    frame: &mut Frame,
    endpoints: [Point; 2],
    color: Color,
    viewport: Viewport,
) {
    const UNIT_SQUARE: [Point; 4] = [
        Point { x: 0.0, y: 0.0 },
        Point { x: 1.0, y: 0.0 },
        Point { x: 1.0, y: 1.0 },
        Point { x: 0.0, y: 1.0 },
    ];

    let [p1, p2] = endpoints;
    let (nx, ny) = unit_perpendicular(p1, p2);
    let mid = p1.midpoint(&p2);

    let sides = [
        (theme::PICKER_TINTS[0], (nx, ny)),
        (theme::PICKER_TINTS[1], (-nx, -ny)),
    ];

    for (tint, normal) in sides {
        let half = clip_half_plane(&UNIT_SQUARE, mid, normal);
        if half.len() >= 3 {
            frame.push(DrawCommand::FillPolygon {
                vertices: half.iter().map(|p| viewport.to_pixels(*p)).collect(),
                color: tint,
                opacity: PICKER_TINT_OPACITY,
            });
        }
    }

    frame.push(DrawCommand::Segment {
        from: viewport.to_pixels(p1),
        to: viewport.to_pixels(p2),
        color,
        width: STROKE_WIDTH,
    });
    frame.push(DrawCommand::Marker {
        at: viewport.to_pixels(mid),
        color,
        radius: MARKER_RADIUS,
    });

    for (_, (x, y)) in sides {
        let at = Point::new(mid.x + x * PICKER_ARROW_OFFSET, mid.y + y * PICKER_ARROW_OFFSET)
            .clamp_unit();
        frame.push(DrawCommand::Arrow {
            at: viewport.to_pixels(at),
            compass: Compass::from_vector(x, y),
            color: theme::LABEL_COLOR,
            length: ARROW_LENGTH,
        });
    }
}

/// Clip a convex polygon to the half plane `(p - origin) · normal >= 0`.
fn clip_half_plane(polygon: &[Point], origin: Point, normal: (f32, f32)) -> Vec<Point> {
    let side = |p: Point| (p.x - origin.x) * normal.0 + (p.y - origin.y) * normal.1;
    let mut clipped = Vec::with_capacity(polygon.len() + 1);
    for i in 0..polygon.len() {
        let current = polygon[i];
        let next = polygon[(i + 1) % polygon.len()];
        let s_current = side(current);
        let s_next = side(next);
        if s_current >= 0.0 {
            clipped.push(current);
        }
        if (s_current > 0.0 && s_next < 0.0) || (s_current < 0.0 && s_next > 0.0) {
            let t = s_current / (s_current - s_next);
            clipped.push(Point::new(
                current.x + t * (next.x - current.x),
                current.y + t * (next.y - current.y),
            ));
        }
    }
    clipped
}

// ============================================================================
// Tests
// ============================================================================
