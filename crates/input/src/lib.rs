//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. Holding a
//! key relies on the terminal's own key repeat; there is no release
//! tracking.

pub mod map;

pub use blocktris_types as types;

pub use map::{map_key, should_quit};
