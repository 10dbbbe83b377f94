//! Terminal "game renderer" module.
//!
//! Renders an engine into a plain framebuffer of styled characters and
//! flushes it to the terminal with crossterm. No widget toolkit is involved;
//! board cells are drawn two characters wide to keep them roughly square.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blocktris_core as core;
pub use blocktris_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
