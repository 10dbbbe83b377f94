//! Session module - drives an [`Engine`] the way a front end would
//!
//! The session is the engine's observer: it drains the event queue after
//! every call and reacts (next shape after a landing, chained line clears,
//! tick speed on level-up, board wipe and restart after game over). A
//! presenter only feeds it ticks and [`GameAction`]s and reads back
//! [`SessionUpdate`]s for animation.

use crate::engine::{Engine, LineClear};
use crate::observe::GameEvent;
use crate::rng::{Randomizer, SimpleRng};
use crate::scoring::tick_length_after_level_up;
use crate::types::{Block, GameAction, TICK_LENGTH_LEVEL_ONE_MS};

/// Something a presenter may want to animate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionUpdate {
    LinesCleared(LineClear),
    /// Blocks swept off the board after a game over, row by row from the top
    BoardCleared(Vec<Vec<Block>>),
    LevelUp { level: u32, tick_length_ms: u32 },
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Session<R = SimpleRng> {
    engine: Engine<R>,
    ticking: bool,
    tick_length_ms: u32,
    auto_restart: bool,
    updates: Vec<SessionUpdate>,
}

impl<R: Randomizer> Session<R> {
    pub fn new(engine: Engine<R>) -> Self {
        Self {
            engine,
            ticking: false,
            tick_length_ms: TICK_LENGTH_LEVEL_ONE_MS,
            auto_restart: true,
            updates: Vec::new(),
        }
    }

    /// Whether a new round begins by itself after a game over
    pub fn with_auto_restart(mut self, auto_restart: bool) -> Self {
        self.auto_restart = auto_restart;
        self
    }

    pub fn engine(&self) -> &Engine<R> {
        &self.engine
    }

    /// Direct engine access, for setting up positions
    ///
    /// Events queued through this handle are handled on the next session call.
    pub fn engine_mut(&mut self) -> &mut Engine<R> {
        &mut self.engine
    }

    pub fn is_ticking(&self) -> bool {
        self.ticking
    }

    /// Delay between two gravity ticks
    pub fn tick_length_ms(&self) -> u32 {
        self.tick_length_ms
    }

    pub fn start(&mut self) {
        self.engine.begin_game();
        self.pump();
    }

    /// End the current round and begin another
    pub fn restart(&mut self) {
        self.engine.end_game();
        self.pump();
        if !self.auto_restart {
            self.engine.begin_game();
            self.pump();
        }
    }

    /// One gravity step; ignored while paused between shapes or after game over
    pub fn tick(&mut self) {
        if !self.ticking {
            return;
        }
        self.engine.let_shape_fall();
        self.pump();
    }

    /// Apply a player action; returns whether it took effect
    pub fn apply(&mut self, action: GameAction) -> bool {
        let applied = match action {
            GameAction::Restart => {
                self.restart();
                return true;
            }
            _ if !self.ticking => false,
            GameAction::MoveLeft => self.engine.move_shape_left(),
            GameAction::MoveRight => self.engine.move_shape_right(),
            GameAction::Rotate => self.engine.rotate_shape(),
            GameAction::SoftDrop => self.engine.let_shape_fall(),
            GameAction::HardDrop => self.engine.drop_shape(),
        };
        self.pump();
        applied
    }

    pub fn drain_updates(&mut self) -> std::vec::Drain<'_, SessionUpdate> {
        self.updates.drain(..)
    }

    /// React to queued events until the engine goes quiet
    fn pump(&mut self) {
        loop {
            let events: Vec<GameEvent> = self.engine.drain_events().collect();
            if events.is_empty() {
                return;
            }
            for event in events {
                self.handle(event);
            }
        }
    }

    fn handle(&mut self, event: GameEvent) {
        match event {
            GameEvent::GameDidBegin => {
                self.tick_length_ms = TICK_LENGTH_LEVEL_ONE_MS;
                self.ticking = self.engine.new_shape().is_some();
            }
            GameEvent::GameShapeDidLand => {
                self.ticking = false;
                loop {
                    let clear = self.engine.remove_complete_lines();
                    if clear.is_empty() {
                        break;
                    }
                    self.updates.push(SessionUpdate::LinesCleared(clear));
                }
                self.ticking = self.engine.new_shape().is_some();
            }
            GameEvent::GameShapeDidDrop => {
                self.engine.let_shape_fall();
            }
            GameEvent::GameDidLevelUp => {
                self.tick_length_ms = tick_length_after_level_up(self.tick_length_ms);
                self.updates.push(SessionUpdate::LevelUp {
                    level: self.engine.level(),
                    tick_length_ms: self.tick_length_ms,
                });
            }
            GameEvent::GameDidEnd => {
                self.ticking = false;
                self.updates.push(SessionUpdate::GameOver);
                let blocks = self.engine.remove_all_blocks();
                self.updates.push(SessionUpdate::BoardCleared(blocks));
                if self.auto_restart {
                    self.engine.begin_game();
                }
            }
            GameEvent::GameShapeDidMove => {}
        }
    }
}
