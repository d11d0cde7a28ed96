//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (simulation core, terminal rendering, input mapping).
//!
//! # Grid Dimensions
//!
//! The simulation runs on a square, bounded grid:
//!
//! - **Default edge**: 1024 cells (`GRID_SIZE`), indexed `0..GRID_SIZE`
//! - **Topology**: closed edges; coordinates outside the grid are always inactive
//!
//! # Timing and Seeding Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `STARTUP_CHANCE` | 50 | Randomize chance used when the simulation starts |
//! | `RANDOMIZE_CHANCE` | 5 | Randomize chance used by the randomize key |
//!
//! # Examples
//!
//! ```
//! use tui_life_types::{Cell, SimAction, GRID_SIZE};
//!
//! let cell = Cell::ACTIVE;
//! assert!(cell.active);
//!
//! let action = SimAction::from_str("toggleRun").unwrap();
//! assert_eq!(action, SimAction::ToggleRun);
//!
//! assert_eq!(GRID_SIZE, 1024);
//! ```

/// Default grid edge length in cells (1024 x 1024)
pub const GRID_SIZE: u32 = 1024;

/// Largest grid edge accepted from configuration
pub const MAX_GRID_SIZE: u32 = 4096;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Randomize chance (percent) applied once at startup
pub const STARTUP_CHANCE: u8 = 50;

/// Randomize chance (percent) applied by the randomize key
pub const RANDOMIZE_CHANCE: u8 = 5;

/// Upper bound of the randomize chance, in percent
pub const MAX_CHANCE: u8 = 100;

/// Relative offsets of the 8 cells adjacent to a cell (Moore neighborhood)
pub const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
    (1, 0),
    (-1, 0),
];


/// A single grid cell
///
/// A cell carries one flag and has no identity beyond its grid coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cell {
    pub active: bool,
}

impl Cell {
    /// An inactive cell
    pub const INACTIVE: Cell = Cell { active: false };

    /// An active cell
    pub const ACTIVE: Cell = Cell { active: true };

    pub const fn new(active: bool) -> Self {
        Self { active }
    }
}

impl From<bool> for Cell {
    fn from(active: bool) -> Self {
        Self { active }
    }
}

/// Simulation-level actions triggered by discrete key presses
///
/// Cell painting is not an action: it is applied every tick while a pointer
/// button is held (see [`Brush`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimAction {
    /// Flip between running and paused
    ToggleRun,
    /// Arm a single step; consumed by the next tick
    StepOnce,
    /// Clear every cell
    Reset,
    /// Clear, then seed cells at random with the randomize chance
    Randomize,
}

impl SimAction {
    /// Parse action from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_life_types::SimAction;
    ///
    /// assert_eq!(SimAction::from_str("stepOnce"), Some(SimAction::StepOnce));
    /// assert_eq!(SimAction::from_str("RESET"), Some(SimAction::Reset));
    /// assert_eq!(SimAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "togglerun" => Some(SimAction::ToggleRun),
            "steponce" => Some(SimAction::StepOnce),
            "reset" => Some(SimAction::Reset),
            "randomize" => Some(SimAction::Randomize),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            SimAction::ToggleRun => "toggleRun",
            SimAction::StepOnce => "stepOnce",
            SimAction::Reset => "reset",
            SimAction::Randomize => "randomize",
        }
    }
}

/// What a held pointer button does to the cell under the pointer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Brush {
    /// Set the cell active
    Paint,
    /// Set the cell inactive
    Erase,
}

impl Brush {
    /// The cell state this brush writes
    pub fn writes(&self) -> bool {
        matches!(self, Brush::Paint)
    }
}
