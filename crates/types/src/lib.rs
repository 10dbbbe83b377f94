//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no external dependencies, so they can be used
//! by the engine, the terminal view and tests alike.
//!
//! # Board Coordinates
//!
//! Blocks are addressed by `(column, row)`:
//!
//! - **column** grows left to right, starting at 0
//! - **row** grows top to bottom, starting at 0
//!
//! Coordinates are signed because a shape may be probed at positions outside
//! the board (e.g. one column past the left wall) before being reverted.
//!
//! # Rule Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_COLUMNS` | 10 | Board width when none is configured |
//! | `DEFAULT_ROWS` | 20 | Board height when none is configured |
//! | `STARTING_COLUMN` | 4 | Anchor column of a newly falling shape |
//! | `STARTING_ROW` | 2 | Anchor row of a newly falling shape |
//! | `PREVIEW_COLUMN_OFFSET` | 3 | Preview anchor sits this far right of the board |
//! | `PREVIEW_ROW` | 2 | Preview anchor row |
//! | `POINTS_PER_LINE` | 10 | Base points per cleared line (times level) |
//! | `LEVEL_THRESHOLD` | 100 | Level `n` ends once score reaches `n * 100` |
//!
//! # Tick Lengths
//!
//! The engine has no clock. The driver falls the shape once per tick:
//!
//! | Constant | Value |
//! |----------|-------|
//! | `TICK_LENGTH_LEVEL_ONE_MS` | 600 |
//! | `TICK_LENGTH_COARSE_STEP_MS` | 100 (while above `TICK_LENGTH_COARSE_FLOOR_MS`) |
//! | `TICK_LENGTH_FINE_STEP_MS` | 50 (down to `TICK_LENGTH_MIN_MS`) |
//!
//! # Examples
//!
//! ```
//! use blocktris_types::{Block, BlockColor, Orientation, ShapeKind, GameAction};
//!
//! let kind = ShapeKind::from_str("t").unwrap();
//! assert_eq!(kind, ShapeKind::T);
//!
//! assert_eq!(Orientation::Zero.rotate_cw(), Orientation::Ninety);
//!
//! let block = Block::new(3, 7, BlockColor::Teal);
//! assert_eq!(block.to_string(), "teal:3,7");
//!
//! assert_eq!(GameAction::from_str("hardDrop"), Some(GameAction::HardDrop));
//! ```

use std::fmt;

/// Board width used when no explicit size is configured
pub const DEFAULT_COLUMNS: u16 = 10;

/// Board height used when no explicit size is configured
pub const DEFAULT_ROWS: u16 = 20;

/// Anchor column a shape is moved to when it starts falling
pub const STARTING_COLUMN: i32 = 4;

/// Anchor row a shape is moved to when it starts falling
pub const STARTING_ROW: i32 = 2;

/// Preview anchor column, relative to the right edge of the board
pub const PREVIEW_COLUMN_OFFSET: i32 = 3;

/// Preview anchor row
pub const PREVIEW_ROW: i32 = 2;

/// Points for one cleared line at level 1
pub const POINTS_PER_LINE: u32 = 10;

/// Score needed per level before the next level is reached
pub const LEVEL_THRESHOLD: u32 = 100;

/// Tick length at level 1
pub const TICK_LENGTH_LEVEL_ONE_MS: u32 = 600;

/// Tick length shrinks by this much per level while above the coarse floor
pub const TICK_LENGTH_COARSE_STEP_MS: u32 = 100;

/// Below this tick length the fine step applies
pub const TICK_LENGTH_COARSE_FLOOR_MS: u32 = 100;

/// Tick length shrinks by this much per level once at the coarse floor
pub const TICK_LENGTH_FINE_STEP_MS: u32 = 50;

/// Shortest tick length ever used
pub const TICK_LENGTH_MIN_MS: u32 = 50;

/// The six block colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockColor {
    Blue,
    Orange,
    Purple,
    Red,
    Teal,
    Yellow,
}

impl BlockColor {
    /// Every color, in a stable order (used for uniform random selection)
    pub const ALL: [BlockColor; 6] = [
        BlockColor::Blue,
        BlockColor::Orange,
        BlockColor::Purple,
        BlockColor::Red,
        BlockColor::Teal,
        BlockColor::Yellow,
    ];

    /// Lowercase color name
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockColor::Blue => "blue",
            BlockColor::Orange => "orange",
            BlockColor::Purple => "purple",
            BlockColor::Red => "red",
            BlockColor::Teal => "teal",
            BlockColor::Yellow => "yellow",
        }
    }
}

impl fmt::Display for BlockColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The seven shape kinds
///
/// - **I**: four in a line
/// - **O**: 2x2 square
/// - **T**: T-shaped
/// - **S**: S-shaped
/// - **Z**: Z-shaped (mirror of S)
/// - **J**: J-shaped
/// - **L**: L-shaped (mirror of J)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl ShapeKind {
    /// Every kind, in a stable order (used for uniform random selection)
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::O,
        ShapeKind::T,
        ShapeKind::S,
        ShapeKind::Z,
        ShapeKind::J,
        ShapeKind::L,
    ];

    /// Parse shape kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blocktris_types::ShapeKind;
    ///
    /// assert_eq!(ShapeKind::from_str("i"), Some(ShapeKind::I));
    /// assert_eq!(ShapeKind::from_str("O"), Some(ShapeKind::O));
    /// assert_eq!(ShapeKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(ShapeKind::I),
            "o" => Some(ShapeKind::O),
            "t" => Some(ShapeKind::T),
            "s" => Some(ShapeKind::S),
            "z" => Some(ShapeKind::Z),
            "j" => Some(ShapeKind::J),
            "l" => Some(ShapeKind::L),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::I => "i",
            ShapeKind::O => "o",
            ShapeKind::T => "t",
            ShapeKind::S => "s",
            ShapeKind::Z => "z",
            ShapeKind::J => "j",
            ShapeKind::L => "l",
        }
    }
}

/// The four orientations of a shape
///
/// The cycle goes: Zero → Ninety → OneEighty → TwoSeventy → Zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Zero,
    Ninety,
    OneEighty,
    TwoSeventy,
}

impl Orientation {
    /// Next orientation clockwise
    ///
    /// # Examples
    ///
    /// ```
    /// use blocktris_types::Orientation;
    ///
    /// assert_eq!(Orientation::Zero.rotate_cw(), Orientation::Ninety);
    /// assert_eq!(Orientation::TwoSeventy.rotate_cw(), Orientation::Zero);
    /// ```
    pub fn rotate_cw(&self) -> Self {
        match self {
            Orientation::Zero => Orientation::Ninety,
            Orientation::Ninety => Orientation::OneEighty,
            Orientation::OneEighty => Orientation::TwoSeventy,
            Orientation::TwoSeventy => Orientation::Zero,
        }
    }

    /// Previous orientation (exact inverse of [`Orientation::rotate_cw`])
    ///
    /// # Examples
    ///
    /// ```
    /// use blocktris_types::Orientation;
    ///
    /// assert_eq!(Orientation::Zero.rotate_ccw(), Orientation::TwoSeventy);
    /// assert_eq!(Orientation::Ninety.rotate_ccw(), Orientation::Zero);
    /// ```
    pub fn rotate_ccw(&self) -> Self {
        match self {
            Orientation::Zero => Orientation::TwoSeventy,
            Orientation::TwoSeventy => Orientation::OneEighty,
            Orientation::OneEighty => Orientation::Ninety,
            Orientation::Ninety => Orientation::Zero,
        }
    }

    /// Rotation in degrees
    pub fn degrees(&self) -> u16 {
        match self {
            Orientation::Zero => 0,
            Orientation::Ninety => 90,
            Orientation::OneEighty => 180,
            Orientation::TwoSeventy => 270,
        }
    }

    /// Table index (0..4)
    pub fn index(&self) -> usize {
        match self {
            Orientation::Zero => 0,
            Orientation::Ninety => 1,
            Orientation::OneEighty => 2,
            Orientation::TwoSeventy => 3,
        }
    }
}

/// A single square of a shape or of the settled pile
///
/// Equality is structural over position and color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Block {
    pub column: i32,
    pub row: i32,
    pub color: BlockColor,
}

impl Block {
    pub fn new(column: i32, row: i32, color: BlockColor) -> Self {
        Self { column, row, color }
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{},{}", self.color, self.column, self.row)
    }
}

/// A board cell
///
/// - `None`: empty
/// - `Some(Block)`: settled block
pub type Cell = Option<Block>;

/// Player inputs understood by the session driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Shift the falling shape one column left
    MoveLeft,
    /// Shift the falling shape one column right
    MoveRight,
    /// Rotate the falling shape clockwise
    Rotate,
    /// Let the shape fall one row right away
    SoftDrop,
    /// Drop the shape to its resting position
    HardDrop,
    /// End the current round and start over
    Restart,
}

impl GameAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use blocktris_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("rotate"), Some(GameAction::Rotate));
    /// assert_eq!(GameAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "rotate" => Some(GameAction::Rotate),
            "softdrop" => Some(GameAction::SoftDrop),
            "harddrop" => Some(GameAction::HardDrop),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::Rotate => "rotate",
            GameAction::SoftDrop => "softDrop",
            GameAction::HardDrop => "hardDrop",
            GameAction::Restart => "restart",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_constants() {
        assert_eq!(POINTS_PER_LINE, 10);
        assert_eq!(LEVEL_THRESHOLD, 100);
        assert_eq!(STARTING_COLUMN, 4);
        assert_eq!(STARTING_ROW, 2);
        assert_eq!(TICK_LENGTH_LEVEL_ONE_MS, 600);
    }

    #[test]
    fn orientation_ccw_inverts_cw() {
        for o in [
            Orientation::Zero,
            Orientation::Ninety,
            Orientation::OneEighty,
            Orientation::TwoSeventy,
        ] {
            assert_eq!(o.rotate_cw().rotate_ccw(), o);
            assert_eq!(o.rotate_cw().rotate_cw().rotate_cw().rotate_cw(), o);
        }
    }

    #[test]
    fn block_equality_is_structural() {
        let a = Block::new(1, 2, BlockColor::Red);
        assert_eq!(a, Block::new(1, 2, BlockColor::Red));
        assert_ne!(a, Block::new(1, 2, BlockColor::Blue));
        assert_ne!(a, Block::new(2, 2, BlockColor::Red));
    }

    #[test]
    fn kind_names_round_trip() {
        for kind in ShapeKind::ALL {
            assert_eq!(ShapeKind::from_str(kind.as_str()), Some(kind));
        }
        for action in [
            GameAction::MoveLeft,
            GameAction::MoveRight,
            GameAction::Rotate,
            GameAction::SoftDrop,
            GameAction::HardDrop,
            GameAction::Restart,
        ] {
            assert_eq!(GameAction::from_str(action.as_str()), Some(action));
        }
    }
}
