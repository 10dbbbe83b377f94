//! Engine configuration: board size, anchors and scoring rules.
//!
//! Board dimensions are normally derived once by the presentation layer from
//! its drawing surface and then stay fixed for the life of the engine.

use thiserror::Error;

use crate::pieces::block_offsets;
use crate::types::{
    Orientation, ShapeKind, DEFAULT_COLUMNS, DEFAULT_ROWS, LEVEL_THRESHOLD, POINTS_PER_LINE,
    PREVIEW_COLUMN_OFFSET, PREVIEW_ROW, STARTING_COLUMN, STARTING_ROW,
};

/// Why a configuration was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board needs at least 1 column and 2 rows, got {columns}x{rows}")]
    BoardTooSmall { columns: u16, rows: u16 },
    #[error("{kind:?} shape cannot start at ({column}, {row}) on a {columns}x{rows} board")]
    StartOutOfBounds {
        kind: ShapeKind,
        column: i32,
        row: i32,
        columns: u16,
        rows: u16,
    },
    #[error("points per line must be positive")]
    ZeroPointsPerLine,
    #[error("level threshold must be positive")]
    ZeroLevelThreshold,
}

/// Board geometry and rule parameters for one [`crate::Engine`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    pub columns: u16,
    pub rows: u16,
    /// Anchor a shape is moved to when it starts falling
    pub starting_column: i32,
    pub starting_row: i32,
    /// Anchor of the off-board preview slot
    pub preview_column: i32,
    pub preview_row: i32,
    pub points_per_line: u32,
    pub level_threshold: u32,
}

impl EngineConfig {
    /// Standard rules on a `columns x rows` board
    pub fn new(columns: u16, rows: u16) -> Result<Self, ConfigError> {
        let config = Self {
            columns,
            rows,
            starting_column: STARTING_COLUMN,
            starting_row: STARTING_ROW,
            preview_column: columns as i32 + PREVIEW_COLUMN_OFFSET,
            preview_row: PREVIEW_ROW,
            points_per_line: POINTS_PER_LINE,
            level_threshold: LEVEL_THRESHOLD,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that every kind can start on the board and the rules are usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.columns < 1 || self.rows < 2 {
            return Err(ConfigError::BoardTooSmall {
                columns: self.columns,
                rows: self.rows,
            });
        }

        for kind in ShapeKind::ALL {
            let fits = block_offsets(kind, Orientation::Zero).iter().all(|&(dc, dr)| {
                let column = self.starting_column + dc;
                let row = self.starting_row + dr;
                column >= 0 && column < self.columns as i32 && row >= 0 && row < self.rows as i32
            });
            if !fits {
                return Err(ConfigError::StartOutOfBounds {
                    kind,
                    column: self.starting_column,
                    row: self.starting_row,
                    columns: self.columns,
                    rows: self.rows,
                });
            }
        }

        if self.points_per_line == 0 {
            return Err(ConfigError::ZeroPointsPerLine);
        }
        if self.level_threshold == 0 {
            return Err(ConfigError::ZeroLevelThreshold);
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
            starting_column: STARTING_COLUMN,
            starting_row: STARTING_ROW,
            preview_column: DEFAULT_COLUMNS as i32 + PREVIEW_COLUMN_OFFSET,
            preview_row: PREVIEW_ROW,
            points_per_line: POINTS_PER_LINE,
            level_threshold: LEVEL_THRESHOLD,
        }
    }
}
