//! Terminal input module (simulation-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::SimAction`] and camera pans, and
//! turns mouse button press/drag/release events into per-tick brush edits.

pub mod handler;
pub mod map;

pub use tui_life_types as types;

pub use handler::{PointerEdit, PointerHandler, MAX_EDITS};
pub use map::{handle_key_event, pan_delta, should_quit, PAN_STEP, PAN_STEP_FAST};
