//! Step rule - neighbor counting and the cell transition table
//!
//! The table is written in "stasis" form: with exactly two active neighbors a
//! cell keeps whatever state it had. That is equivalent to B3/S23.
//!
//! | neighbors | next state |
//! |-----------|------------|
//! | 0, 1      | inactive   |
//! | 2         | unchanged  |
//! | 3         | active     |
//! | 4..=8     | inactive   |

use crate::grid::Grid;
use crate::types::{Cell, NEIGHBOR_OFFSETS};

/// Count the active cells adjacent to (x, y).
///
/// Neighbors outside the grid count as inactive; edges never wrap. Any
/// `i32` coordinate is accepted, offsets past `i32::MIN`/`i32::MAX` are skipped.
#[inline]
pub fn count_neighbors(grid: &Grid, x: i32, y: i32) -> u8 {
    let mut count = 0;
    for &(dx, dy) in NEIGHBOR_OFFSETS.iter() {
        let (Some(nx), Some(ny)) = (x.checked_add(dx), y.checked_add(dy)) else {
            continue;
        };
        if grid.is_active(nx, ny) {
            count += 1;
        }
    }
    count
}

/// Next state of a cell given its current state and neighbor count
#[inline]
pub fn next_state(active: bool, neighbors: u8) -> bool {
    match neighbors {
        0 | 1 => false,
        2 => active,
        3 => true,
        _ => false,
    }
}

/// Evaluate one generation of `past` into `next`.
///
/// `past` is only read and every cell of `next` is written, so visiting order
/// does not matter. Returns the number of active cells written.
pub fn step_into(past: &Grid, next: &mut Grid) -> usize {
    debug_assert_eq!(past.width(), next.width());
    debug_assert_eq!(past.height(), next.height());

    let width = past.width() as usize;
    let mut population = 0;
    for (idx, out) in next.cells_mut().iter_mut().enumerate() {
        let x = (idx % width) as i32;
        let y = (idx / width) as i32;
        let active = next_state(past.cells()[idx].active, count_neighbors(past, x, y));
        *out = Cell::new(active);
        population += active as usize;
    }
    population
}
