//! Grid store - the past/next double buffer
//!
//! `past` is the authoritative state: the step rule reads it, edits write it and
//! renderers display it. `next` is scratch that only holds data between
//! [`GridStore::compute_next`] and [`GridStore::commit_step`]; outside that
//! window every cell of it is inactive.

use log::debug;

use crate::grid::Grid;
use crate::rng::SimRng;
use crate::rule;
use crate::types::{Cell, MAX_CHANCE};

#[derive(Debug, Clone)]
pub struct GridStore {
    past: Grid,
    next: Grid,
}

impl GridStore {
    /// Allocate both buffers with every cell inactive
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            past: Grid::new(width, height),
            next: Grid::new(width, height),
        }
    }

    /// Wrap an existing grid as the past buffer
    pub fn from_grid(past: Grid) -> Self {
        let next = Grid::new(past.width(), past.height());
        Self { past, next }
    }

    pub fn width(&self) -> u32 {
        self.past.width()
    }

    pub fn height(&self) -> u32 {
        self.past.height()
    }

    /// Set every cell of both buffers inactive
    pub fn reset(&mut self) {
        self.past.clear();
        self.next.clear();
    }

    /// Reset, then seed the past buffer at random.
    ///
    /// Each cell draws a roll in [0, 100) and is eligible when the roll is at
    /// most `chance` (clamped to 100). An eligible cell is then set from an
    /// independent coin flip, so a cell that passes the threshold may still
    /// end up inactive.
    /// Returns the number of active cells.
    pub fn randomize(&mut self, chance: u8, rng: &mut SimRng) -> usize {
        let chance = chance.min(MAX_CHANCE);
        self.reset();

        let mut population = 0;
        for cell in self.past.cells_mut() {
            if rng.passes(chance) {
                let active = rng.coin();
                *cell = Cell::new(active);
                population += active as usize;
            }
        }
        debug!(
            "randomized {}x{} grid at {}%: {} active",
            self.width(),
            self.height(),
            chance,
            population
        );
        population
    }

    /// Read a past-buffer cell; out-of-bounds reads as inactive
    pub fn get(&self, x: i32, y: i32) -> bool {
        self.past.is_active(x, y)
    }

    /// Write a past-buffer cell.
    ///
    /// Out-of-bounds writes are ignored and return false.
    pub fn set(&mut self, x: i32, y: i32, active: bool) -> bool {
        self.past.set(x, y, Cell::new(active))
    }

    /// Evaluate the rule over `past` into `next`. Returns the new population.
    pub fn compute_next(&mut self) -> usize {
        rule::step_into(&self.past, &mut self.next)
    }

    /// Adopt `next` as `past`, then clear `next`.
    pub fn commit_step(&mut self) {
        std::mem::swap(&mut self.past, &mut self.next);
        self.next.clear();
    }

    /// Compute and commit one generation. Returns the new population.
    pub fn step(&mut self) -> usize {
        let population = self.compute_next();
        self.commit_step();
        population
    }

    /// The authoritative (displayed) buffer
    pub fn past(&self) -> &Grid {
        &self.past
    }

    /// The scratch buffer
    pub fn next(&self) -> &Grid {
        &self.next
    }
}
