//! Shape tests - layout tables, movement and rotation

use blocktris::core::{block_offsets, Shape};
use blocktris::types::{BlockColor, Orientation, ShapeKind};

const ANCHOR: (i32, i32) = (4, 6);

fn positions(shape: &Shape) -> Vec<(i32, i32)> {
    shape.blocks().iter().map(|b| (b.column, b.row)).collect()
}

fn at_anchor(offsets: [(i32, i32); 4]) -> Vec<(i32, i32)> {
    offsets
        .iter()
        .map(|&(dc, dr)| (ANCHOR.0 + dc, ANCHOR.1 + dr))
        .collect()
}

/// Expected layouts for Zero, Ninety, OneEighty, TwoSeventy
fn expected_layouts(kind: ShapeKind) -> [[(i32, i32); 4]; 4] {
    match kind {
        ShapeKind::O => [[(0, 0), (1, 0), (0, 1), (1, 1)]; 4],
        ShapeKind::I => {
            let vertical = [(0, 0), (0, 1), (0, 2), (0, 3)];
            let horizontal = [(-1, 0), (0, 0), (1, 0), (2, 0)];
            [vertical, horizontal, vertical, horizontal]
        }
        ShapeKind::T => [
            [(1, 0), (0, 1), (1, 1), (2, 1)],
            [(1, 2), (0, 1), (1, 1), (2, 1)],
            [(2, 1), (1, 0), (1, 1), (1, 2)],
            [(0, 1), (1, 0), (1, 1), (1, 2)],
        ],
        ShapeKind::S => {
            let zero = [(0, 0), (0, 1), (1, 1), (1, 2)];
            let ninety = [(2, 0), (1, 0), (1, 1), (0, 1)];
            [zero, ninety, zero, ninety]
        }
        ShapeKind::Z => {
            let zero = [(1, 0), (1, 1), (0, 1), (0, 2)];
            let ninety = [(-1, 0), (0, 0), (0, 1), (1, 1)];
            [zero, ninety, zero, ninety]
        }
        ShapeKind::J => [
            [(1, 0), (1, 1), (1, 2), (0, 2)],
            [(2, 1), (1, 1), (0, 1), (0, 0)],
            [(0, 0), (0, 1), (0, 2), (1, 0)],
            [(0, 1), (1, 1), (2, 1), (2, 2)],
        ],
        ShapeKind::L => [
            [(0, 0), (0, 1), (0, 2), (1, 2)],
            [(1, 1), (0, 1), (-1, 1), (-1, 2)],
            [(0, 2), (0, 1), (0, 0), (-1, 0)],
            [(-1, 1), (0, 1), (1, 1), (1, 0)],
        ],
    }
}

#[test]
fn test_every_orientation_matches_literal_offsets() {
    for kind in ShapeKind::ALL {
        let mut shape = Shape::new(kind, BlockColor::Blue, ANCHOR.0, ANCHOR.1);
        for (step, expected) in expected_layouts(kind).into_iter().enumerate() {
            assert_eq!(shape.orientation().index(), step, "{kind:?}");
            assert_eq!(
                positions(&shape),
                at_anchor(expected),
                "{kind:?} at {} degrees",
                shape.orientation().degrees()
            );
            shape.rotate_clockwise();
        }
    }
}

#[test]
fn test_offsets_table_agrees_with_shape_layout() {
    for kind in ShapeKind::ALL {
        let shape = Shape::new(kind, BlockColor::Red, ANCHOR.0, ANCHOR.1);
        assert_eq!(
            positions(&shape),
            at_anchor(block_offsets(kind, Orientation::Zero))
        );
    }
}

#[test]
fn test_four_rotations_return_to_start() {
    for kind in ShapeKind::ALL {
        let start = Shape::new(kind, BlockColor::Yellow, ANCHOR.0, ANCHOR.1);
        let mut shape = start;
        for _ in 0..4 {
            shape.rotate_clockwise();
        }
        assert_eq!(shape, start, "{kind:?}");
    }
}

#[test]
fn test_shifts_translate_every_block() {
    let mut shape = Shape::new(ShapeKind::S, BlockColor::Orange, ANCHOR.0, ANCHOR.1);
    let before = positions(&shape);

    shape.shift_right_by_one_column();
    shape.lower_by_one_row();
    let moved: Vec<(i32, i32)> = before.iter().map(|&(c, r)| (c + 1, r + 1)).collect();
    assert_eq!(positions(&shape), moved);
    assert_eq!((shape.column(), shape.row()), (ANCHOR.0 + 1, ANCHOR.1 + 1));

    shape.shift_left_by_one_column();
    shape.raise_by_one_row();
    assert_eq!(positions(&shape), before);
}

#[test]
fn test_rotation_pivots_on_moved_anchor() {
    let mut shape = Shape::new(ShapeKind::T, BlockColor::Purple, 0, 0);
    shape.shift_by(3, 4);
    shape.rotate_clockwise();
    assert_eq!(positions(&shape), vec![(4, 6), (3, 5), (4, 5), (5, 5)]);
}

#[test]
fn test_colors_are_shared_by_all_blocks() {
    for color in BlockColor::ALL {
        let shape = Shape::new(ShapeKind::Z, color, 1, 1);
        assert!(shape.blocks().iter().all(|b| b.color == color));
        assert_eq!(shape.color(), color);
    }
}

#[test]
fn test_bottom_blocks_are_lowest_in_their_column() {
    for kind in ShapeKind::ALL {
        let mut shape = Shape::new(kind, BlockColor::Teal, ANCHOR.0, ANCHOR.1);
        for _ in 0..4 {
            for bottom in shape.bottom_blocks() {
                assert!(
                    !shape
                        .blocks()
                        .iter()
                        .any(|b| b.column == bottom.column && b.row > bottom.row),
                    "{kind:?} {:?}",
                    shape.orientation()
                );
            }
            if kind != ShapeKind::T {
                let columns: std::collections::BTreeSet<i32> =
                    shape.blocks().iter().map(|b| b.column).collect();
                assert_eq!(shape.bottom_blocks().len(), columns.len());
            }
            shape.rotate_clockwise();
        }
    }
}

#[test]
fn test_t_bottom_blocks_per_orientation() {
    let mut shape = Shape::new(ShapeKind::T, BlockColor::Red, 4, 10);
    let expected = [
        vec![(4, 11), (5, 11)],
        vec![(5, 12), (4, 11)],
        vec![(6, 11), (5, 12)],
        vec![(4, 11), (5, 12)],
    ];
    for bottom in expected {
        let actual: Vec<(i32, i32)> = shape
            .bottom_blocks()
            .iter()
            .map(|b| (b.column, b.row))
            .collect();
        assert_eq!(actual, bottom, "{:?}", shape.orientation());
        shape.rotate_clockwise();
    }
}
