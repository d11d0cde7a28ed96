//! Simulation controller - run state, edits and the per-tick step gate
//!
//! [`Simulation`] owns the grid store together with the state that decides
//! whether a tick steps: the `running` flag and a one-shot step request.
//! Edits (paint/erase, reset, randomize) are accepted in any run state and
//! write the displayed buffer directly.

use log::{debug, trace};

use crate::config::SimConfig;
use crate::grid::Grid;
use crate::rng::SimRng;
use crate::snapshot::SimSnapshot;
use crate::store::GridStore;
use crate::types::{Brush, SimAction};

#[derive(Debug, Clone)]
pub struct Simulation {
    store: GridStore,
    rng: SimRng,
    running: bool,
    /// One-shot step request, consumed by the next tick.
    step_requested: bool,
    /// Number of steps executed since the last reset/randomize.
    generation: u64,
    /// Active cells in the displayed buffer.
    population: usize,
    /// Bumped whenever the displayed buffer changes.
    revision: u64,
    startup_chance: u8,
    randomize_chance: u8,
    started: bool,
}

impl Simulation {
    /// Allocate the grid (all cells inactive) without seeding it
    pub fn new(config: &SimConfig) -> Self {
        Self {
            store: GridStore::new(config.width, config.height),
            rng: SimRng::new(config.seed),
            running: !config.start_paused,
            step_requested: false,
            generation: 0,
            population: 0,
            revision: 0,
            startup_chance: config.startup_chance,
            randomize_chance: config.randomize_chance,
            started: false,
        }
    }

    /// Wrap an existing grid; starts paused
    pub fn from_grid(grid: Grid, seed: u64) -> Self {
        let population = grid.count_active();
        let config = SimConfig::default()
            .with_size(grid.width(), grid.height())
            .with_seed(seed);
        Self {
            store: GridStore::from_grid(grid),
            population,
            running: false,
            ..Self::new(&config)
        }
    }

    /// Reset and seed the grid with the startup chance.
    ///
    /// Only the first call has an effect.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.reset();
        self.randomize(self.startup_chance);
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn width(&self) -> u32 {
        self.store.width()
    }

    pub fn height(&self) -> u32 {
        self.store.height()
    }

    pub fn running(&self) -> bool {
        self.running
    }

    pub fn step_requested(&self) -> bool {
        self.step_requested
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.population
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn randomize_chance(&self) -> u8 {
        self.randomize_chance
    }

    /// The displayed grid
    pub fn grid(&self) -> &Grid {
        self.store.past()
    }

    pub fn store(&self) -> &GridStore {
        &self.store
    }

    /// Check whether (x, y) is active; out-of-bounds reads as inactive
    pub fn is_active(&self, x: i32, y: i32) -> bool {
        self.store.get(x, y)
    }

    /// Clear every cell
    pub fn reset(&mut self) {
        self.store.reset();
        self.generation = 0;
        self.population = 0;
        self.revision = self.revision.wrapping_add(1);
        debug!("reset {}x{} grid", self.width(), self.height());
    }

    /// Clear, then seed cells at random (see [`GridStore::randomize`])
    pub fn randomize(&mut self, chance: u8) {
        self.population = self.store.randomize(chance, &mut self.rng);
        self.generation = 0;
        self.revision = self.revision.wrapping_add(1);
    }

    /// Write a cell of the displayed grid.
    ///
    /// Out-of-bounds coordinates are ignored and return false.
    pub fn set(&mut self, x: i32, y: i32, active: bool) -> bool {
        let was = self.store.get(x, y);
        if !self.store.set(x, y, active) {
            return false;
        }
        if was != active {
            if active {
                self.population += 1;
            } else {
                self.population -= 1;
            }
            self.revision = self.revision.wrapping_add(1);
        }
        true
    }

    pub fn paint(&mut self, x: i32, y: i32) -> bool {
        self.set(x, y, true)
    }

    pub fn erase(&mut self, x: i32, y: i32) -> bool {
        self.set(x, y, false)
    }

    pub fn apply_brush(&mut self, brush: Brush, x: i32, y: i32) -> bool {
        self.set(x, y, brush.writes())
    }

    pub fn set_running(&mut self, running: bool) {
        if self.running != running {
            debug!("simulation {}", if running { "resumed" } else { "paused" });
        }
        self.running = running;
    }

    pub fn toggle_running(&mut self) {
        self.set_running(!self.running);
    }

    /// Arm a single step for the next tick
    pub fn request_step(&mut self) {
        self.step_requested = true;
    }

    /// Advance one generation unconditionally
    pub fn step(&mut self) {
        self.population = self.store.step();
        self.generation += 1;
        self.revision = self.revision.wrapping_add(1);
        trace!("generation {}: {} active", self.generation, self.population);
    }

    /// Per-frame update.
    ///
    /// Steps once if running or if a step was requested (consuming the request).
    /// Returns true if a step executed.
    pub fn tick(&mut self) -> bool {
        if !self.running && !self.step_requested {
            return false;
        }
        self.step_requested = false;
        self.step();
        true
    }

    /// Apply a simulation action
    pub fn apply_action(&mut self, action: SimAction) {
        match action {
            SimAction::ToggleRun => self.toggle_running(),
            SimAction::StepOnce => self.request_step(),
            SimAction::Reset => self.reset(),
            SimAction::Randomize => self.randomize(self.randomize_chance),
        }
    }

    pub fn snapshot_into(&self, out: &mut SimSnapshot) {
        out.width = self.width();
        out.height = self.height();
        out.generation = self.generation;
        out.population = self.population;
        out.running = self.running;
        out.step_pending = self.step_requested;
        out.seed = self.seed();
        out.revision = self.revision;
    }

    pub fn snapshot(&self) -> SimSnapshot {
        let mut snap = SimSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small(seed: u64) -> Simulation {
        Simulation::new(&SimConfig::default().with_size(16, 16).with_seed(seed))
    }

    #[test]
    fn test_new_is_empty_and_running() {
        let sim = small(1);
        assert!(sim.running());
        assert!(!sim.started());
        assert!(sim.grid().is_clear());
        assert_eq!(sim.population(), 0);
    }

    #[test]
    fn test_start_seeds_once() {
        let mut sim = small(1);
        sim.start();
        assert!(sim.started());
        let seeded = sim.grid().clone();
        assert_eq!(sim.population(), seeded.count_active());

        sim.start();
        assert_eq!(sim.grid(), &seeded);
    }

    #[test]
    fn test_tick_gating() {
        let mut sim = small(1);
        sim.set_running(false);
        sim.paint(5, 5);

        assert!(!sim.tick());
        assert_eq!(sim.generation(), 0);
        assert!(sim.is_active(5, 5));

        sim.request_step();
        assert!(sim.step_requested());
        assert!(sim.tick());
        assert!(!sim.step_requested());
        assert_eq!(sim.generation(), 1);
        // A lone cell dies.
        assert!(!sim.is_active(5, 5));

        assert!(!sim.tick());
        assert_eq!(sim.generation(), 1);
    }

    #[test]
    fn test_apply_action_toggle_run() {
        let mut sim = small(1);
        assert!(sim.running());
        sim.apply_action(SimAction::ToggleRun);
        assert!(!sim.running());
        sim.apply_action(SimAction::ToggleRun);
        assert!(sim.running());
    }

    #[test]
    fn test_apply_action_reset_and_randomize() {
        let mut sim = small(9);
        sim.apply_action(SimAction::Randomize);
        assert_eq!(sim.population(), sim.grid().count_active());

        sim.paint(0, 0);
        sim.tick();
        sim.apply_action(SimAction::Reset);
        assert!(sim.grid().is_clear());
        assert_eq!(sim.population(), 0);
        assert_eq!(sim.generation(), 0);
    }

    #[test]
    fn test_population_tracks_edits() {
        let mut sim = small(1);
        assert!(sim.paint(1, 1));
        assert!(sim.paint(1, 1));
        assert!(sim.paint(2, 1));
        assert_eq!(sim.population(), 2);
        assert!(sim.erase(1, 1));
        assert!(sim.erase(1, 1));
        assert_eq!(sim.population(), 1);
        assert!(!sim.paint(-1, 3));
        assert!(!sim.paint(16, 3));
        assert_eq!(sim.population(), 1);
    }

    #[test]
    fn test_revision_only_moves_on_change() {
        let mut sim = small(1);
        let r0 = sim.revision();
        sim.erase(3, 3);
        assert_eq!(sim.revision(), r0);
        sim.paint(3, 3);
        assert_ne!(sim.revision(), r0);
    }

    #[test]
    fn test_snapshot_mirrors_state() {
        let mut sim = small(4);
        sim.set_running(false);
        sim.request_step();
        sim.paint(2, 2);
        let snap = sim.snapshot();
        assert_eq!((snap.width, snap.height), (16, 16));
        assert_eq!(snap.population, 1);
        assert!(!snap.running);
        assert!(snap.step_pending);
        assert_eq!(snap.seed, 4);
        assert_eq!(snap.revision, sim.revision());
    }

    #[test]
    fn test_from_grid_counts_population() {
        let sim = Simulation::from_grid(Grid::from_rows(&["##", "#."]), 3);
        assert_eq!(sim.population(), 3);
        assert!(!sim.running());
        assert_eq!(sim.seed(), 3);
    }
}
