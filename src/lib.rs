//! Zoneline - Zone and Line Annotation Editor
//!
//! The editing core of a video-analytics configuration tool: normalized
//! region/line geometry, the pointer-driven editing state machine, crossing
//! direction resolution, canvas rendering as a display list, and the payload
//! adapter for the configuration backend.

pub mod config;
pub mod direction;
pub mod editor;
pub mod event;
pub mod feature;
pub mod format;
pub mod geometry;
pub mod handlers;
pub mod model;
pub mod render;
pub mod theme;

pub use editor::EditorState;
pub use event::EditorEvent;
pub use handlers::handle_event;
