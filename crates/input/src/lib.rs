//! Terminal input module.
//!
//! Maps `crossterm` key events (or plain characters) into
//! [`crate::types::GameAction`]. Only WASD moves and `q` quits; every other key
//! maps to nothing and the game loop carries on.

pub mod map;

pub use grid_drive_types as types;

pub use map::{action_from_char, handle_key_event, is_quit_char, should_quit};
