//! Grid module - one buffer of simulation cells
//!
//! A grid is a `width x height` rectangle of cells stored in a single flat,
//! heap-allocated buffer for cache locality. The buffer is sized once at
//! construction and never reallocated.
//! Coordinates: (x, y) where x ranges 0..width (left to right), y ranges 0..height
//! (top to bottom). Anything outside that rectangle is permanently inactive.

use crate::types::Cell;

/// One buffer of cells using flat, row-major storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: u32,
    height: u32,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with every cell inactive
    pub fn new(width: u32, height: u32) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::INACTIVE; len],
        }
    }

    /// Build a grid from text rows, `#` or `O` marking active cells.
    ///
    /// The grid is as wide as the longest row; short rows are padded with
    /// inactive cells.
    ///
    /// ```
    /// use tui_life_core::Grid;
    ///
    /// let grid = Grid::from_rows(&[".#.", "##"]);
    /// assert_eq!((grid.width(), grid.height()), (3, 2));
    /// assert!(grid.is_active(1, 0));
    /// assert!(!grid.is_active(2, 1));
    /// ```
    pub fn from_rows(rows: &[&str]) -> Self {
        let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0) as u32;
        let mut grid = Self::new(width, rows.len() as u32);
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                if matches!(ch, '#' | 'O') {
                    grid.set(x as i32, y as i32, Cell::ACTIVE);
                }
            }
        }
        grid
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of cells in the grid
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Check if (x, y) lies inside the grid
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.index(x, y).is_some()
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Check if (x, y) is inside the grid and active.
    ///
    /// Out-of-bounds coordinates read as inactive.
    #[inline]
    pub fn is_active(&self, x: i32, y: i32) -> bool {
        match self.index(x, y) {
            Some(idx) => self.cells[idx].active,
            None => false,
        }
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Set every cell inactive
    pub fn clear(&mut self) {
        self.cells.fill(Cell::INACTIVE);
    }

    /// Check if every cell is inactive
    pub fn is_clear(&self) -> bool {
        self.cells.iter().all(|c| !c.active)
    }

    /// Count active cells
    pub fn count_active(&self) -> usize {
        self.cells.iter().filter(|c| c.active).count()
    }

    /// One row of cells, or None if `y` is out of bounds
    pub fn row(&self, y: u32) -> Option<&[Cell]> {
        if y >= self.height {
            return None;
        }
        let start = (y as usize) * (self.width as usize);
        Some(&self.cells[start..start + self.width as usize])
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// Render as text rows (`#` active, `.` inactive), the inverse of [`Grid::from_rows`]
    pub fn to_rows(&self) -> Vec<String> {
        (0..self.height)
            .filter_map(|y| self.row(y))
            .map(|row| row.iter().map(|c| if c.active { '#' } else { '.' }).collect())
            .collect()
    }
}
