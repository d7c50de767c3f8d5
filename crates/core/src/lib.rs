//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the world model and the collision rules. It has
//! **zero dependencies** on terminal, input, or process I/O, making it:
//!
//! - **Deterministic**: The world is rebuilt identically on every run
//! - **Testable**: Every rule is reachable from plain unit tests
//! - **Portable**: Can run in any environment (terminal, headless, benches)
//!
//! # Module Structure
//!
//! - [`layout`]: fixed coordinates of buildings, trees and fuel stations
//! - [`entity`]: entity arena and stable ids
//! - [`world`]: the grid, placement and move/collision resolution
//! - [`game`]: session controller (game over, last message, snapshots)
//! - [`snapshot`]: render-ready copy of the board
//!
//! # Game Rules
//!
//! - The car (`C`) moves one cell per action, never off the board
//! - Driving into a tree (`T`) or fuel station (`F`) only prints a message
//! - Driving into a building (`B`) ends the game
//! - Obstacles never move and are never removed
//!
//! # Example
//!
//! ```
//! use grid_drive_core::{GameState, MoveOutcome};
//! use grid_drive_types::{GameAction, Position};
//!
//! let mut game = GameState::new();
//! assert_eq!(game.player_position(), Some(Position::new(1, 1)));
//!
//! let outcome = game.apply_action(GameAction::MoveRight);
//! assert_eq!(
//!     outcome,
//!     MoveOutcome::Moved { from: Position::new(1, 1), to: Position::new(1, 2) }
//! );
//!
//! // Top edge: nothing happens.
//! game.apply_action(GameAction::MoveUp);
//! assert_eq!(game.apply_action(GameAction::MoveUp), MoveOutcome::OutOfBounds);
//! assert_eq!(game.player_position(), Some(Position::new(0, 2)));
//! ```

pub mod entity;
pub mod game;
pub mod layout;
pub mod snapshot;
pub mod world;

pub use grid_drive_types as types;

pub use entity::{Entities, Entity, EntityId};
pub use game::{GameState, GameStatus};
pub use layout::{generate as generate_layout, Layout};
pub use snapshot::GameSnapshot;
pub use world::{MoveOutcome, World};
