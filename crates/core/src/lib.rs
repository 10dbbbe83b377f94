//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the rules of a falling-block game and nothing else. It
//! has no dependencies on terminals, timers or threads: a front end drives it
//! by calling operations and draining the event queue.
//!
//! # Module Structure
//!
//! - [`grid`]: fixed-size board of settled blocks
//! - [`pieces`]: block offset and bottom-block tables for every kind
//! - [`shape`]: a falling shape, its anchor and its four blocks
//! - [`rng`]: uniform and scripted shape randomizers
//! - [`scoring`]: line points, level progression and tick speed
//! - [`config`]: board geometry and validation
//! - [`engine`]: the game-state machine
//! - [`observe`]: events and the listener interface
//! - [`session`]: an observer that plays the game on a tick
//!
//! # Game Rules
//!
//! - Shapes spawn in a preview slot beside the board, then move to the
//!   starting anchor when they begin to fall
//! - Moves and rotations that would overlap a block or leave the board are
//!   reverted; there are no wall kicks
//! - A shape settles once any of its bottom blocks rests on the floor or on a
//!   settled block
//! - Each full row scores `10 * level`; the level goes up once the score
//!   reaches `level * 100`
//! - A shape that collides where it spawns ends the round
//!
//! # Example
//!
//! ```
//! use blocktris_core::{Engine, EngineConfig, GameEvent};
//!
//! let mut engine = Engine::with_seed(EngineConfig::default(), 12345);
//! engine.begin_game();
//! engine.new_shape();
//!
//! engine.move_shape_left();
//! engine.drop_shape();
//! engine.let_shape_fall();
//!
//! let events: Vec<GameEvent> = engine.drain_events().collect();
//! assert_eq!(events.first(), Some(&GameEvent::GameDidBegin));
//! assert_eq!(events.last(), Some(&GameEvent::GameShapeDidLand));
//! assert_eq!(engine.grid().occupied_count(), 4);
//! ```

pub mod config;
pub mod engine;
pub mod grid;
pub mod observe;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod shape;

pub use blocktris_types as types;

// Re-export commonly used types for convenience
pub use config::{ConfigError, EngineConfig};
pub use engine::{Engine, LineClear, Phase};
pub use grid::Grid;
pub use observe::{EventLog, GameEvent, GameListener};
pub use pieces::{block_offsets, bottom_block_indices};
pub use rng::{Randomizer, SequenceRandomizer, SimpleRng};
pub use scoring::{calculate_line_score, level_after_score, tick_length_after_level_up};
pub use session::{Session, SessionUpdate};
pub use shape::Shape;
