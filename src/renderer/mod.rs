//! Rendering module
//!
//! The core never touches pixels. Each frame it emits a short list of
//! primitive draw calls that the host replays onto its canvas.

pub mod draw;

pub use draw::{Canvas, DrawCommand, DrawList, START_PROMPT, draw_frame};
