//! Grid module - stores settled blocks
//!
//! The grid is a `columns x rows` board where each cell is empty or holds a
//! settled [`Block`]. Uses a flat row-major vector for cache locality.
//! Coordinates: (column, row) where column grows left to right and row grows
//! top to bottom.
//!
//! Reads and writes through [`Grid::get`] / [`Grid::set`] require in-bounds
//! coordinates; callers check [`Grid::contains`] first.

use crate::types::{Block, Cell};

/// The settled-block store
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    columns: u16,
    rows: u16,
    /// Flat array of cells, row-major order (row * columns + column)
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an empty grid
    pub fn new(columns: u16, rows: u16) -> Self {
        Self {
            columns,
            rows,
            cells: vec![None; columns as usize * rows as usize],
        }
    }

    #[inline(always)]
    fn index(&self, column: i32, row: i32) -> Option<usize> {
        if !self.contains(column, row) {
            return None;
        }
        Some(row as usize * self.columns as usize + column as usize)
    }

    #[inline(always)]
    fn offset(&self, column: i32, row: i32) -> usize {
        match self.index(column, row) {
            Some(idx) => idx,
            None => panic!(
                "cell ({column}, {row}) outside {}x{} grid",
                self.columns, self.rows
            ),
        }
    }

    pub fn columns(&self) -> u16 {
        self.columns
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    /// Whether (column, row) lies on the board
    pub fn contains(&self, column: i32, row: i32) -> bool {
        column >= 0 && column < self.columns as i32 && row >= 0 && row < self.rows as i32
    }

    /// Settled block at (column, row)
    ///
    /// # Panics
    ///
    /// Panics if the position is outside the grid.
    pub fn get(&self, column: i32, row: i32) -> Option<Block> {
        self.cells[self.offset(column, row)]
    }

    /// Overwrite the cell at (column, row), returning what was there
    ///
    /// # Panics
    ///
    /// Panics if the position is outside the grid.
    pub fn set(&mut self, column: i32, row: i32, cell: Cell) -> Cell {
        let idx = self.offset(column, row);
        std::mem::replace(&mut self.cells[idx], cell)
    }

    /// Empty the cell at (column, row), returning its block
    pub fn take(&mut self, column: i32, row: i32) -> Cell {
        self.set(column, row, None)
    }

    /// In bounds and holding a block
    pub fn is_occupied(&self, column: i32, row: i32) -> bool {
        matches!(self.index(column, row), Some(idx) if self.cells[idx].is_some())
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: i32) -> bool {
        self.row_cells(row)
            .is_some_and(|cells| cells.iter().all(|cell| cell.is_some()))
    }

    /// Blocks of a row, left to right
    pub fn row_blocks(&self, row: i32) -> Vec<Block> {
        self.row_cells(row)
            .map(|cells| cells.iter().flatten().copied().collect())
            .unwrap_or_default()
    }

    fn row_cells(&self, row: i32) -> Option<&[Cell]> {
        if row < 0 || row >= self.rows as i32 {
            return None;
        }
        let width = self.columns as usize;
        let start = row as usize * width;
        Some(&self.cells[start..start + width])
    }

    /// All settled blocks in row-major order
    pub fn blocks(&self) -> impl Iterator<Item = Block> + '_ {
        self.cells.iter().flatten().copied()
    }

    /// Number of settled blocks
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Empty the whole grid
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }
}
