//! Shape module - the four-block falling unit
//!
//! A shape owns exactly four blocks whose positions always agree with its
//! anchor and orientation through the tables in [`crate::pieces`]. Every
//! transform updates all four blocks at once.

use arrayvec::ArrayVec;

use crate::pieces::{block_offsets, bottom_block_indices};
use crate::rng::Randomizer;
use crate::types::{Block, BlockColor, Orientation, ShapeKind};

/// A falling (or previewed) shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    kind: ShapeKind,
    orientation: Orientation,
    color: BlockColor,
    column: i32,
    row: i32,
    blocks: [Block; 4],
}

impl Shape {
    /// Create a shape in orientation zero anchored at (column, row)
    pub fn new(kind: ShapeKind, color: BlockColor, column: i32, row: i32) -> Self {
        let orientation = Orientation::Zero;
        let blocks = block_offsets(kind, orientation)
            .map(|(dc, dr)| Block::new(column + dc, row + dr, color));
        Self {
            kind,
            orientation,
            color,
            column,
            row,
            blocks,
        }
    }

    /// Spawn a shape of uniformly random kind and color
    pub fn random<R: Randomizer + ?Sized>(rng: &mut R, column: i32, row: i32) -> Self {
        let kind = rng.next_kind();
        let color = rng.next_color();
        Self::new(kind, color, column, row)
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn color(&self) -> BlockColor {
        self.color
    }

    /// Anchor column
    pub fn column(&self) -> i32 {
        self.column
    }

    /// Anchor row
    pub fn row(&self) -> i32 {
        self.row
    }

    pub fn blocks(&self) -> &[Block; 4] {
        &self.blocks
    }

    /// Blocks used to test contact with the floor or the pile below
    pub fn bottom_blocks(&self) -> ArrayVec<Block, 4> {
        bottom_block_indices(self.kind, self.orientation)
            .iter()
            .map(|&idx| self.blocks[idx])
            .collect()
    }

    /// Lowest row occupied by any block
    pub fn lowest_row(&self) -> i32 {
        self.blocks.iter().map(|b| b.row).max().unwrap_or(self.row)
    }

    /// Re-anchor the shape, laying its blocks out afresh from the table
    pub fn move_to(&mut self, column: i32, row: i32) {
        self.column = column;
        self.row = row;
        self.layout(self.orientation);
    }

    /// Translate every block by (columns, rows)
    pub fn shift_by(&mut self, columns: i32, rows: i32) {
        self.column += columns;
        self.row += rows;
        for block in &mut self.blocks {
            block.column += columns;
            block.row += rows;
        }
    }

    pub fn shift_left_by_one_column(&mut self) {
        self.shift_by(-1, 0);
    }

    pub fn shift_right_by_one_column(&mut self) {
        self.shift_by(1, 0);
    }

    pub fn lower_by_one_row(&mut self) {
        self.shift_by(0, 1);
    }

    pub fn raise_by_one_row(&mut self) {
        self.shift_by(0, -1);
    }

    /// Advance to the next orientation around the current anchor
    pub fn rotate_clockwise(&mut self) {
        self.layout(self.orientation.rotate_cw());
    }

    /// Undo [`Shape::rotate_clockwise`]
    pub fn rotate_counter_clockwise(&mut self) {
        self.layout(self.orientation.rotate_ccw());
    }

    fn layout(&mut self, orientation: Orientation) {
        let offsets = block_offsets(self.kind, orientation);
        for (block, (dc, dr)) in self.blocks.iter_mut().zip(offsets) {
            block.column = self.column + dc;
            block.row = self.row + dr;
        }
        self.orientation = orientation;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn positions(shape: &Shape) -> Vec<(i32, i32)> {
        shape.blocks().iter().map(|b| (b.column, b.row)).collect()
    }

    #[test]
    fn test_new_lays_out_orientation_zero() {
        let shape = Shape::new(ShapeKind::T, BlockColor::Purple, 4, 2);
        assert_eq!(shape.orientation(), Orientation::Zero);
        assert_eq!(positions(&shape), vec![(5, 2), (4, 3), (5, 3), (6, 3)]);
        assert!(shape.blocks().iter().all(|b| b.color == BlockColor::Purple));
    }

    #[test]
    fn test_move_to_resets_layout_at_new_anchor() {
        let mut shape = Shape::new(ShapeKind::L, BlockColor::Orange, 13, 2);
        shape.rotate_clockwise();
        shape.move_to(4, 2);

        assert_eq!((shape.column(), shape.row()), (4, 2));
        assert_eq!(shape.orientation(), Orientation::Ninety);
        assert_eq!(positions(&shape), vec![(5, 3), (4, 3), (3, 3), (3, 4)]);
    }

    #[test]
    fn test_rotate_ccw_undoes_rotate_cw() {
        let mut shape = Shape::new(ShapeKind::J, BlockColor::Blue, 3, 5);
        shape.lower_by_one_row();
        let before = shape;

        shape.rotate_clockwise();
        assert_ne!(shape, before);
        shape.rotate_counter_clockwise();
        assert_eq!(shape, before);
    }

    #[test]
    fn test_bottom_blocks_follow_orientation() {
        let mut shape = Shape::new(ShapeKind::I, BlockColor::Teal, 4, 2);
        assert_eq!(shape.bottom_blocks().as_slice(), &[Block::new(4, 5, BlockColor::Teal)]);

        shape.rotate_clockwise();
        assert_eq!(shape.bottom_blocks().len(), 4);
        assert_eq!(shape.lowest_row(), 2);
    }
}
