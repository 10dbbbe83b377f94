//! Engine notifications.
//!
//! Engine operations never call out while they mutate state. Each operation
//! appends [`GameEvent`]s to the engine's queue in the order they happen; an
//! observer drains them afterwards, either directly with
//! [`Engine::drain_events`] or through a [`GameListener`] via
//! [`Engine::dispatch`]. Because draining happens outside the engine call, the
//! observer is free to call back into the engine (for example to remove
//! complete lines after a landing).

use crate::engine::Engine;
use crate::rng::{Randomizer, SimpleRng};

/// State change reported by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameEvent {
    /// A round started; the preview slot holds the next shape.
    GameDidBegin,
    /// The round ended (spawn or fall collision at the top, or an explicit end).
    GameDidEnd,
    /// The falling shape settled into the grid.
    GameShapeDidLand,
    /// The falling shape moved one step (shift, rotate or fall).
    GameShapeDidMove,
    /// The falling shape was dropped to its resting position.
    GameShapeDidDrop,
    /// The level went up after a line clear.
    GameDidLevelUp,
}

impl GameEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameEvent::GameDidBegin => "gameDidBegin",
            GameEvent::GameDidEnd => "gameDidEnd",
            GameEvent::GameShapeDidLand => "gameShapeDidLand",
            GameEvent::GameShapeDidMove => "gameShapeDidMove",
            GameEvent::GameShapeDidDrop => "gameShapeDidDrop",
            GameEvent::GameDidLevelUp => "gameDidLevelUp",
        }
    }
}

/// Callback-style observer; every method defaults to doing nothing.
pub trait GameListener<R: Randomizer = SimpleRng> {
    fn game_did_begin(&mut self, _engine: &Engine<R>) {}
    fn game_did_end(&mut self, _engine: &Engine<R>) {}
    fn game_shape_did_land(&mut self, _engine: &Engine<R>) {}
    fn game_shape_did_move(&mut self, _engine: &Engine<R>) {}
    fn game_shape_did_drop(&mut self, _engine: &Engine<R>) {}
    fn game_did_level_up(&mut self, _engine: &Engine<R>) {}

    /// Route one event to its method
    fn on_event(&mut self, engine: &Engine<R>, event: GameEvent) {
        match event {
            GameEvent::GameDidBegin => self.game_did_begin(engine),
            GameEvent::GameDidEnd => self.game_did_end(engine),
            GameEvent::GameShapeDidLand => self.game_shape_did_land(engine),
            GameEvent::GameShapeDidMove => self.game_shape_did_move(engine),
            GameEvent::GameShapeDidDrop => self.game_shape_did_drop(engine),
            GameEvent::GameDidLevelUp => self.game_did_level_up(engine),
        }
    }
}

/// Records every event it sees
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventLog {
    pub events: Vec<GameEvent>,
}

impl<R: Randomizer> GameListener<R> for EventLog {
    fn on_event(&mut self, _engine: &Engine<R>, event: GameEvent) {
        self.events.push(event);
    }
}
