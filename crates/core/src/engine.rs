//! Engine module - the game-state machine
//!
//! Ties together the grid, the shapes, the randomizer and scoring. Every
//! operation is a synchronous state transition: illegal moves are reverted
//! on the spot and the only terminal condition is a collision at the top,
//! which ends the round. State changes are queued as [`GameEvent`]s for the
//! observer (see [`crate::observe`]).
//!
//! Phases, derived from the state:
//!
//! ```text
//! Idle ──begin_game──▶ AwaitingShape ──new_shape──▶ Falling
//!                           ▲                          │
//!                           └────── settle_shape ◀─────┤
//!                                                      ▼
//!                         GameOver ◀── top collision ──┘
//! ```

use crate::config::EngineConfig;
use crate::grid::Grid;
use crate::observe::{GameEvent, GameListener};
use crate::rng::{Randomizer, SimpleRng};
use crate::scoring::{calculate_line_score, level_after_score};
use crate::shape::Shape;
use crate::types::Block;

/// Coarse engine state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// No round has been started yet
    Idle,
    /// Between shapes: the observer should call [`Engine::new_shape`]
    AwaitingShape,
    /// A shape is falling
    Falling,
    /// The round ended; [`Engine::begin_game`] starts another
    GameOver,
}

/// Result of [`Engine::remove_complete_lines`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineClear {
    /// Removed rows, bottom-most first, each left to right
    pub lines_removed: Vec<Vec<Block>>,
    /// Blocks that fell to fill the gaps, grouped by column, each group bottom-up
    pub fallen_blocks: Vec<Vec<Block>>,
}

impl LineClear {
    pub fn is_empty(&self) -> bool {
        self.lines_removed.is_empty()
    }

    pub fn line_count(&self) -> usize {
        self.lines_removed.len()
    }
}

/// The falling-block game state
#[derive(Debug, Clone)]
pub struct Engine<R = SimpleRng> {
    config: EngineConfig,
    grid: Grid,
    /// Shape waiting in the preview slot
    next_shape: Option<Shape>,
    /// Shape currently under player control
    falling_shape: Option<Shape>,
    score: u32,
    level: u32,
    started: bool,
    game_over: bool,
    rng: R,
    /// Notifications not yet drained by the observer
    events: Vec<GameEvent>,
}

impl Engine<SimpleRng> {
    /// Engine with a seeded uniform randomizer
    pub fn with_seed(config: EngineConfig, seed: u32) -> Self {
        Self::new(config, SimpleRng::new(seed))
    }
}

impl Default for Engine<SimpleRng> {
    fn default() -> Self {
        Self::with_seed(EngineConfig::default(), 1)
    }
}

impl<R: Randomizer> Engine<R> {
    pub fn new(config: EngineConfig, rng: R) -> Self {
        Self {
            grid: Grid::new(config.columns, config.rows),
            config,
            next_shape: None,
            falling_shape: None,
            score: 0,
            level: 1,
            started: false,
            game_over: false,
            rng,
            events: Vec::new(),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Direct grid access, for setting up positions
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn falling_shape(&self) -> Option<&Shape> {
        self.falling_shape.as_ref()
    }

    pub fn next_shape(&self) -> Option<&Shape> {
        self.next_shape.as_ref()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn is_over(&self) -> bool {
        self.game_over
    }

    pub fn phase(&self) -> Phase {
        if self.game_over {
            Phase::GameOver
        } else if self.falling_shape.is_some() {
            Phase::Falling
        } else if self.started {
            Phase::AwaitingShape
        } else {
            Phase::Idle
        }
    }

    /// Replace the falling shape as-is, without a legality check
    pub fn place_falling_shape(&mut self, shape: Shape) {
        self.falling_shape = Some(shape);
    }

    /// Resume a round at the given score and level (level is at least 1)
    pub fn set_progress(&mut self, score: u32, level: u32) {
        self.score = score;
        self.level = level.max(1);
    }

    // ---------------------------------------------------------------------
    // Notifications
    // ---------------------------------------------------------------------

    fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Events not yet drained, oldest first
    pub fn pending_events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Take all pending events, oldest first
    pub fn drain_events(&mut self) -> std::vec::Drain<'_, GameEvent> {
        self.events.drain(..)
    }

    /// Drain pending events into a listener, in order
    pub fn dispatch<L: GameListener<R> + ?Sized>(&mut self, listener: &mut L) {
        let mut events = std::mem::take(&mut self.events);
        for &event in &events {
            listener.on_event(self, event);
        }
        events.clear();
        self.events = events;
    }

    // ---------------------------------------------------------------------
    // Round lifecycle
    // ---------------------------------------------------------------------

    /// Start a round: score 0, level 1, preview slot filled
    pub fn begin_game(&mut self) {
        self.score = 0;
        self.level = 1;
        self.started = true;
        self.game_over = false;
        if self.next_shape.is_none() {
            self.next_shape = Some(self.spawn_preview());
        }
        self.emit(GameEvent::GameDidBegin);
    }

    /// End the round: score 0, level 1, falling shape discarded
    ///
    /// The grid is left as it is; the observer clears it with
    /// [`Engine::remove_all_blocks`].
    pub fn end_game(&mut self) {
        self.score = 0;
        self.level = 1;
        self.falling_shape = None;
        self.game_over = true;
        self.emit(GameEvent::GameDidEnd);
    }

    fn spawn_preview(&mut self) -> Shape {
        Shape::random(
            &mut self.rng,
            self.config.preview_column,
            self.config.preview_row,
        )
    }

    /// Promote the preview shape to falling and queue a fresh preview
    ///
    /// Returns `(falling, next)`. If the falling shape collides at the
    /// starting anchor it goes back to the preview slot, the round ends and
    /// `None` is returned. Does nothing once the round is over.
    pub fn new_shape(&mut self) -> Option<(Shape, Shape)> {
        if self.game_over {
            return None;
        }

        let mut falling = match self.next_shape.take() {
            Some(shape) => shape,
            None => self.spawn_preview(),
        };
        let next = self.spawn_preview();
        self.next_shape = Some(next);

        falling.move_to(self.config.starting_column, self.config.starting_row);
        self.falling_shape = Some(falling);

        if self.detect_illegal_placement() {
            self.falling_shape = None;
            falling.move_to(self.config.preview_column, self.config.preview_row);
            self.next_shape = Some(falling);
            self.end_game();
            return None;
        }

        Some((falling, next))
    }

    // ---------------------------------------------------------------------
    // Collision
    // ---------------------------------------------------------------------

    /// Any falling block off the board or on a settled cell
    pub fn detect_illegal_placement(&self) -> bool {
        let Some(shape) = &self.falling_shape else {
            return false;
        };
        shape.blocks().iter().any(|block| {
            !self.grid.contains(block.column, block.row)
                || self.grid.get(block.column, block.row).is_some()
        })
    }

    /// Any bottom block resting on the floor or on a settled cell
    pub fn detect_touch(&self) -> bool {
        let Some(shape) = &self.falling_shape else {
            return false;
        };
        let floor = self.grid.rows() as i32 - 1;
        shape.bottom_blocks().iter().any(|block| {
            block.row == floor || self.grid.is_occupied(block.column, block.row + 1)
        })
    }

    // ---------------------------------------------------------------------
    // Movement
    // ---------------------------------------------------------------------

    fn transform(&mut self, f: impl FnOnce(&mut Shape)) {
        if let Some(shape) = self.falling_shape.as_mut() {
            f(shape);
        }
    }

    /// Apply a move, reverting it if the result is illegal
    fn try_transform(&mut self, apply: fn(&mut Shape), revert: fn(&mut Shape)) -> bool {
        if self.falling_shape.is_none() {
            return false;
        }
        self.transform(apply);
        if self.detect_illegal_placement() {
            self.transform(revert);
            return false;
        }
        self.emit(GameEvent::GameShapeDidMove);
        true
    }

    /// Rotate clockwise; returns whether the shape moved
    pub fn rotate_shape(&mut self) -> bool {
        self.try_transform(Shape::rotate_clockwise, Shape::rotate_counter_clockwise)
    }

    /// Shift one column left; returns whether the shape moved
    pub fn move_shape_left(&mut self) -> bool {
        self.try_transform(
            Shape::shift_left_by_one_column,
            Shape::shift_right_by_one_column,
        )
    }

    /// Shift one column right; returns whether the shape moved
    pub fn move_shape_right(&mut self) -> bool {
        self.try_transform(
            Shape::shift_right_by_one_column,
            Shape::shift_left_by_one_column,
        )
    }

    /// Lower the shape as far as it goes; false without a falling shape
    ///
    /// The shape is not settled here; the observer follows up with
    /// [`Engine::let_shape_fall`].
    pub fn drop_shape(&mut self) -> bool {
        if self.falling_shape.is_none() {
            return false;
        }
        while !self.detect_illegal_placement() {
            self.transform(Shape::lower_by_one_row);
        }
        self.transform(Shape::raise_by_one_row);
        self.emit(GameEvent::GameShapeDidDrop);
        true
    }

    /// One tick of gravity; false without a falling shape
    ///
    /// Otherwise the shape either moved down, settled, or ended the round.
    pub fn let_shape_fall(&mut self) -> bool {
        if self.falling_shape.is_none() {
            return false;
        }

        self.transform(Shape::lower_by_one_row);
        if self.detect_illegal_placement() {
            self.transform(Shape::raise_by_one_row);
            if self.detect_illegal_placement() {
                // Blocked even where it was: topped out.
                self.end_game();
            } else {
                self.settle_shape();
            }
        } else {
            self.emit(GameEvent::GameShapeDidMove);
            if self.detect_touch() {
                self.settle_shape();
            }
        }
        true
    }

    /// Write the falling blocks into the grid
    pub fn settle_shape(&mut self) {
        let Some(shape) = self.falling_shape.take() else {
            return;
        };
        for &block in shape.blocks() {
            if self.grid.contains(block.column, block.row) {
                self.grid.set(block.column, block.row, Some(block));
            }
        }
        self.emit(GameEvent::GameShapeDidLand);
    }

    // ---------------------------------------------------------------------
    // Line clears
    // ---------------------------------------------------------------------

    /// Remove full rows, score them, and let the blocks above fall
    ///
    /// Rows `rows-1` down to `1` are scanned; row 0 is never cleared. After
    /// removal each column compacts on its own: every block above the lowest
    /// removed row falls to the lowest empty cell beneath it.
    pub fn remove_complete_lines(&mut self) -> LineClear {
        let rows = self.grid.rows() as i32;
        let columns = self.grid.columns() as i32;

        let mut lines_removed = Vec::new();
        for row in (1..rows).rev() {
            if !self.grid.is_row_full(row) {
                continue;
            }
            let line: Vec<Block> = (0..columns)
                .filter_map(|column| self.grid.take(column, row))
                .collect();
            lines_removed.push(line);
        }

        let Some(lowest_removed) = lines_removed.first().and_then(|l| l.first()).map(|b| b.row)
        else {
            return LineClear::default();
        };

        let points = calculate_line_score(
            lines_removed.len(),
            self.level,
            self.config.points_per_line,
        );
        self.score = self.score.saturating_add(points);

        let level = level_after_score(self.score, self.level, self.config.level_threshold);
        if level > self.level {
            self.level = level;
            self.emit(GameEvent::GameDidLevelUp);
        }

        let mut fallen_blocks = Vec::new();
        for column in 0..columns {
            let mut fallen = Vec::new();
            for row in (1..lowest_removed).rev() {
                let Some(mut block) = self.grid.get(column, row) else {
                    continue;
                };

                let mut new_row = row;
                while new_row < rows - 1 && self.grid.get(column, new_row + 1).is_none() {
                    new_row += 1;
                }
                if new_row == row {
                    continue;
                }

                self.grid.take(column, row);
                block.row = new_row;
                self.grid.set(column, new_row, Some(block));
                fallen.push(block);
            }
            if !fallen.is_empty() {
                fallen_blocks.push(fallen);
            }
        }

        LineClear {
            lines_removed,
            fallen_blocks,
        }
    }

    /// Empty the grid, returning its blocks row by row from the top
    ///
    /// The result has one entry per row, empty rows included.
    pub fn remove_all_blocks(&mut self) -> Vec<Vec<Block>> {
        let rows = self.grid.rows() as i32;
        let columns = self.grid.columns() as i32;

        let mut all_blocks = Vec::with_capacity(rows as usize);
        for row in 0..rows {
            let mut row_blocks = Vec::new();
            for column in 0..columns {
                if let Some(block) = self.grid.take(column, row) {
                    row_blocks.push(block);
                }
            }
            all_blocks.push(row_blocks);
        }
        all_blocks
    }
}
