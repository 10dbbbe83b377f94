//! Pieces module - per-kind orientation tables
//!
//! Each kind defines its own layout for every orientation instead of using a
//! rotation matrix, so rotation pivots are implied by the tables and there are
//! no wall kicks. Offsets are `(column_diff, row_diff)` from the shape anchor.

use crate::types::{Orientation, ShapeKind};

/// Offset of a single block relative to the shape anchor
pub type BlockOffset = (i32, i32);

/// Layout of a shape - 4 block offsets from the anchor
pub type ShapeOffsets = [BlockOffset; 4];

/// Get the block offsets for a shape kind and orientation
pub fn block_offsets(kind: ShapeKind, orientation: Orientation) -> ShapeOffsets {
    let table = match kind {
        ShapeKind::I => &I_OFFSETS,
        ShapeKind::O => &O_OFFSETS,
        ShapeKind::T => &T_OFFSETS,
        ShapeKind::S => &S_OFFSETS,
        ShapeKind::Z => &Z_OFFSETS,
        ShapeKind::J => &J_OFFSETS,
        ShapeKind::L => &L_OFFSETS,
    };
    table[orientation.index()]
}

/// Indices (into the 4 blocks) of the blocks checked for landing contact
///
/// Usually the lowest block in each spanned column; flat T orientations use
/// only two.
pub fn bottom_block_indices(kind: ShapeKind, orientation: Orientation) -> &'static [usize] {
    let table = match kind {
        ShapeKind::I => &I_BOTTOM,
        ShapeKind::O => &O_BOTTOM,
        ShapeKind::T => &T_BOTTOM,
        ShapeKind::S => &S_BOTTOM,
        ShapeKind::Z => &Z_BOTTOM,
        ShapeKind::J => &J_BOTTOM,
        ShapeKind::L => &L_BOTTOM,
    };
    table[orientation.index()]
}

type OffsetTable = [ShapeOffsets; 4];
type BottomTable = [&'static [usize]; 4];

// Tables are indexed Zero, Ninety, OneEighty, TwoSeventy.

const O_OFFSETS: OffsetTable = [[(0, 0), (1, 0), (0, 1), (1, 1)]; 4];
const O_BOTTOM: BottomTable = [&[2, 3], &[2, 3], &[2, 3], &[2, 3]];

const I_VERTICAL: ShapeOffsets = [(0, 0), (0, 1), (0, 2), (0, 3)];
const I_HORIZONTAL: ShapeOffsets = [(-1, 0), (0, 0), (1, 0), (2, 0)];
const I_OFFSETS: OffsetTable = [I_VERTICAL, I_HORIZONTAL, I_VERTICAL, I_HORIZONTAL];
const I_BOTTOM: BottomTable = [&[3], &[0, 1, 2, 3], &[3], &[0, 1, 2, 3]];

const T_OFFSETS: OffsetTable = [
    [(1, 0), (0, 1), (1, 1), (2, 1)],
    [(1, 2), (0, 1), (1, 1), (2, 1)],
    [(2, 1), (1, 0), (1, 1), (1, 2)],
    [(0, 1), (1, 0), (1, 1), (1, 2)],
];
// Flat T orientations rest on two blocks only, not one per column.
const T_BOTTOM: BottomTable = [&[1, 2], &[0, 1], &[0, 3], &[0, 3]];

const S_UPRIGHT: ShapeOffsets = [(0, 0), (0, 1), (1, 1), (1, 2)];
const S_FLAT: ShapeOffsets = [(2, 0), (1, 0), (1, 1), (0, 1)];
const S_OFFSETS: OffsetTable = [S_UPRIGHT, S_FLAT, S_UPRIGHT, S_FLAT];
const S_BOTTOM: BottomTable = [&[1, 3], &[0, 2, 3], &[1, 3], &[0, 2, 3]];

const Z_UPRIGHT: ShapeOffsets = [(1, 0), (1, 1), (0, 1), (0, 2)];
const Z_FLAT: ShapeOffsets = [(-1, 0), (0, 0), (0, 1), (1, 1)];
const Z_OFFSETS: OffsetTable = [Z_UPRIGHT, Z_FLAT, Z_UPRIGHT, Z_FLAT];
const Z_BOTTOM: BottomTable = [&[1, 3], &[0, 2, 3], &[1, 3], &[0, 2, 3]];

const J_OFFSETS: OffsetTable = [
    [(1, 0), (1, 1), (1, 2), (0, 2)],
    [(2, 1), (1, 1), (0, 1), (0, 0)],
    [(0, 0), (0, 1), (0, 2), (1, 0)],
    [(0, 1), (1, 1), (2, 1), (2, 2)],
];
const J_BOTTOM: BottomTable = [&[2, 3], &[0, 1, 2], &[2, 3], &[0, 1, 3]];

const L_OFFSETS: OffsetTable = [
    [(0, 0), (0, 1), (0, 2), (1, 2)],
    [(1, 1), (0, 1), (-1, 1), (-1, 2)],
    [(0, 2), (0, 1), (0, 0), (-1, 0)],
    [(-1, 1), (0, 1), (1, 1), (1, 0)],
];
const L_BOTTOM: BottomTable = [&[2, 3], &[0, 1, 3], &[0, 3], &[0, 1, 2]];

#[cfg(test)]
mod tests {
    use super::*;

    const ORIENTATIONS: [Orientation; 4] = [
        Orientation::Zero,
        Orientation::Ninety,
        Orientation::OneEighty,
        Orientation::TwoSeventy,
    ];

    /// Lowest block per column, recomputed from the offset table
    fn lowest_per_column(offsets: &ShapeOffsets) -> Vec<usize> {
        let mut picked: Vec<usize> = Vec::new();
        for (idx, &(column, row)) in offsets.iter().enumerate() {
            let lowest = offsets
                .iter()
                .filter(|&&(c, _)| c == column)
                .all(|&(_, r)| r <= row);
            if lowest {
                picked.push(idx);
            }
        }
        picked
    }

    #[test]
    fn bottom_tables_match_lowest_block_of_each_column() {
        for kind in ShapeKind::ALL.into_iter().filter(|&k| k != ShapeKind::T) {
            for orientation in ORIENTATIONS {
                let offsets = block_offsets(kind, orientation);
                assert_eq!(
                    bottom_block_indices(kind, orientation),
                    lowest_per_column(&offsets).as_slice(),
                    "{kind:?} {orientation:?}"
                );
            }
        }
    }

    #[test]
    fn every_layout_has_four_distinct_cells() {
        for kind in ShapeKind::ALL {
            for orientation in ORIENTATIONS {
                let offsets = block_offsets(kind, orientation);
                for i in 0..4 {
                    for j in (i + 1)..4 {
                        assert_ne!(offsets[i], offsets[j], "{kind:?} {orientation:?}");
                    }
                }
            }
        }
    }

    #[test]
    fn t_bottom_blocks_are_two_per_orientation() {
        let expected: [&[usize]; 4] = [&[1, 2], &[0, 1], &[0, 3], &[0, 3]];
        for (orientation, indices) in ORIENTATIONS.into_iter().zip(expected) {
            assert_eq!(
                bottom_block_indices(ShapeKind::T, orientation),
                indices,
                "{orientation:?}"
            );
        }
    }

    #[test]
    fn t_table_zero_orientation() {
        assert_eq!(
            block_offsets(ShapeKind::T, Orientation::Zero),
            [(1, 0), (0, 1), (1, 1), (2, 1)]
        );
    }
}
