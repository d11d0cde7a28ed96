//! Core simulation module - pure, deterministic, and testable
//!
//! This module contains the cellular automaton: grid storage, the step rule and
//! the controller that gates stepping. It has **no dependencies** on terminal
//! I/O or input devices, making it:
//!
//! - **Deterministic**: Same seed produces identical randomized grids
//! - **Testable**: Unit tests for every rule and buffer invariant
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Fast**: The per-tick step does not allocate
//!
//! # Module Structure
//!
//! - [`grid`]: bounded, flat, row-major cell buffer
//! - [`store`]: past/next double buffer with commit-and-clear
//! - [`rule`]: neighbor counting and the transition table
//! - [`simulation`]: run/pause state, one-shot step, edits, counters
//! - [`rng`]: seeded randomness for grid seeding
//! - [`config`]: environment-driven configuration
//!
//! # Rules
//!
//! - **Neighborhood**: the 8 surrounding cells; off-grid neighbors are inactive
//! - **Transition**: fewer than 2 neighbors dies, 2 keeps its state, 3 becomes
//!   active, more than 3 dies
//! - **Edges**: closed, never wrapped
//!
//! # Example
//!
//! ```
//! use tui_life_core::{SimConfig, Simulation};
//! use tui_life_types::SimAction;
//!
//! let config = SimConfig::default().with_size(8, 8).with_start_paused(true);
//! let mut sim = Simulation::new(&config);
//!
//! // A 2x2 block is a still life.
//! for (x, y) in [(3, 3), (4, 3), (3, 4), (4, 4)] {
//!     sim.paint(x, y);
//! }
//! sim.apply_action(SimAction::StepOnce);
//! assert!(sim.tick());
//! assert_eq!(sim.population(), 4);
//! assert!(sim.is_active(4, 4));
//! ```

pub mod config;
pub mod grid;
pub mod rng;
pub mod rule;
pub mod simulation;
pub mod snapshot;
pub mod store;

pub use tui_life_types as types;

// Re-export commonly used types for convenience
pub use config::SimConfig;
pub use grid::Grid;
pub use rng::SimRng;
pub use rule::{count_neighbors, next_state, step_into};
pub use simulation::Simulation;
pub use snapshot::SimSnapshot;
pub use store::GridStore;
