//! Grid tests - settled-block storage

use blocktris::core::Grid;
use blocktris::types::{Block, BlockColor};

fn block(column: i32, row: i32) -> Option<Block> {
    Some(Block::new(column, row, BlockColor::Purple))
}

#[test]
fn test_grid_new_empty() {
    let grid = Grid::new(10, 20);
    assert_eq!(grid.columns(), 10);
    assert_eq!(grid.rows(), 20);
    assert_eq!(grid.cells().len(), 200);

    for row in 0..20 {
        for column in 0..10 {
            assert!(grid.contains(column, row));
            assert_eq!(grid.get(column, row), None);
        }
    }
}

#[test]
fn test_grid_bounds() {
    let grid = Grid::new(10, 20);
    assert!(!grid.contains(-1, 0));
    assert!(!grid.contains(0, -1));
    assert!(!grid.contains(10, 0));
    assert!(!grid.contains(0, 20));

    // is_occupied tolerates any coordinate
    assert!(!grid.is_occupied(-1, 5));
    assert!(!grid.is_occupied(3, 20));
}

#[test]
fn test_grid_set_get_take() {
    let mut grid = Grid::new(10, 20);

    assert_eq!(grid.set(5, 10, block(5, 10)), None);
    assert_eq!(grid.get(5, 10), block(5, 10));
    assert!(grid.is_occupied(5, 10));

    // Overwrite returns the previous block
    let replaced = grid.set(5, 10, Some(Block::new(5, 10, BlockColor::Teal)));
    assert_eq!(replaced, block(5, 10));

    assert_eq!(grid.take(5, 10).map(|b| b.color), Some(BlockColor::Teal));
    assert_eq!(grid.get(5, 10), None);
    assert_eq!(grid.occupied_count(), 0);
}

#[test]
#[should_panic(expected = "outside")]
fn test_grid_get_out_of_bounds_panics() {
    let grid = Grid::new(4, 4);
    let _ = grid.get(4, 0);
}

#[test]
fn test_grid_row_full_and_row_blocks() {
    let mut grid = Grid::new(4, 3);
    for column in 0..3 {
        grid.set(column, 2, block(column, 2));
    }
    assert!(!grid.is_row_full(2));
    assert_eq!(grid.row_blocks(2).len(), 3);

    grid.set(3, 2, block(3, 2));
    assert!(grid.is_row_full(2));
    assert!(!grid.is_row_full(1));
    assert!(!grid.is_row_full(7));
    assert!(grid.row_blocks(-1).is_empty());

    let columns: Vec<i32> = grid.row_blocks(2).iter().map(|b| b.column).collect();
    assert_eq!(columns, vec![0, 1, 2, 3]);
}

#[test]
fn test_grid_blocks_and_clear() {
    let mut grid = Grid::new(3, 3);
    grid.set(2, 0, block(2, 0));
    grid.set(0, 2, block(0, 2));

    let positions: Vec<(i32, i32)> = grid.blocks().map(|b| (b.column, b.row)).collect();
    assert_eq!(positions, vec![(2, 0), (0, 2)]);

    grid.clear();
    assert_eq!(grid.occupied_count(), 0);
    assert_eq!(grid.blocks().count(), 0);
}
