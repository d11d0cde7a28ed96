//! TUI Life (workspace facade crate).
//!
//! This package exposes `tui_life::{core,input,term,types}` while the
//! implementation lives in dedicated crates under `crates/`.

pub use tui_life_core as core;
pub use tui_life_input as input;
pub use tui_life_term as term;
pub use tui_life_types as types;
