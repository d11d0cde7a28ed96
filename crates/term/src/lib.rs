//! Terminal rendering module.
//!
//! A small rendering layer for watching and editing the simulation in a
//! terminal. It avoids widget/layout libraries and instead renders into a
//! simple framebuffer that is diff-flushed to a terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Only touch changed terminal cells, since the board can fill the screen
//! - Allow precise control over aspect ratio (e.g. 2 chars wide per cell)

pub mod fb;
pub mod grid_view;
pub mod render_throttle;
pub mod renderer;

pub use tui_life_core as core;
pub use tui_life_types as types;

pub use fb::{CellStyle, FrameBuffer, Glyph, Rgb};
pub use grid_view::{BoardLayout, Camera, GridView, Viewport, PANEL_WIDTH};
pub use render_throttle::RenderThrottle;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
