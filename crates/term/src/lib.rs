//! Terminal rendering module.
//!
//! Renders a [`core::GameSnapshot`] into a simple framebuffer, then flushes that
//! framebuffer to the terminal with crossterm.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep the view pure so layout can be checked without a terminal
//! - Clear and redraw the whole screen every frame

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use grid_drive_core as core;
pub use grid_drive_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_frame_into, TerminalRenderer};
