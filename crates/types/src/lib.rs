//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (world logic, terminal rendering, input mapping).
//!
//! # Coordinates
//!
//! A [`Position`] is `(x, y)` where `x` is the **row** (top to bottom) and `y` is
//! the **column** (left to right). Moving "up" is `(-1, 0)`.
//!
//! # World Dimensions
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `GRID_ROWS` | 30 | Rows in the standard world |
//! | `GRID_COLS` | 30 | Columns in the standard world |
//! | `PLAYER_START` | (1, 1) | Where the car spawns |
//!
//! # Entity Symbols
//!
//! | Kind | Symbol | Collision effect |
//! |------|--------|------------------|
//! | Player | `C` | blocked (never hit in practice) |
//! | FuelStation | `F` | refuel message |
//! | Tree | `T` | damage message |
//! | Building | `B` | game over |
//!
//! # Examples
//!
//! ```
//! use grid_drive_types::{CollisionEffect, EntityKind, GameAction, Position};
//!
//! let mut pos = Position::new(1, 1);
//! pos.set(2, 3);
//! assert_eq!(pos, Position::new(2, 3));
//!
//! let (dx, dy) = GameAction::MoveUp.delta();
//! assert_eq!(pos.offset(dx, dy), Position::new(1, 3));
//!
//! assert_eq!(EntityKind::Building.symbol(), 'B');
//! assert_eq!(EntityKind::Building.collision_effect(), CollisionEffect::GameOver);
//! assert!(CollisionEffect::GameOver.is_fatal());
//! ```

/// Rows in the standard world.
pub const GRID_ROWS: usize = 30;

/// Columns in the standard world.
pub const GRID_COLS: usize = 30;

/// Player spawn position in the standard world.
pub const PLAYER_START: Position = Position::new(1, 1);

/// Fill character for cells with no occupant.
pub const EMPTY_SYMBOL: char = '.';

/// Prompt printed under the board every frame.
pub const PROMPT: &str = "Moving using WASD keys (Q to quit): ";

/// A 2D integer coordinate.
///
/// No validation is done here; bounds belong to whoever owns the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    /// Row.
    pub x: i32,
    /// Column.
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Overwrite both coordinates in place.
    pub fn set(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }

    /// Position shifted by `(dx, dy)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use grid_drive_types::Position;
    ///
    /// assert_eq!(Position::new(0, 0).offset(-1, 0), Position::new(-1, 0));
    /// assert_eq!(Position::new(4, 5).offset(1, 0), Position::new(5, 5));
    /// ```
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// The closed set of things that can occupy a cell.
///
/// The kind is fixed when an entity is created; it is never re-classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Player,
    FuelStation,
    Tree,
    Building,
}

impl EntityKind {
    /// Character drawn for this kind.
    pub fn symbol(&self) -> char {
        match self {
            EntityKind::Player => 'C',
            EntityKind::FuelStation => 'F',
            EntityKind::Tree => 'T',
            EntityKind::Building => 'B',
        }
    }

    /// What happens when the player drives into this kind.
    pub fn collision_effect(&self) -> CollisionEffect {
        match self {
            EntityKind::Player => CollisionEffect::Blocked,
            EntityKind::FuelStation => CollisionEffect::Refuel,
            EntityKind::Tree => CollisionEffect::Damage,
            EntityKind::Building => CollisionEffect::GameOver,
        }
    }

    /// Obstacles block movement and are never moved themselves.
    pub fn is_obstacle(&self) -> bool {
        matches!(self, EntityKind::Tree | EntityKind::Building)
    }

    /// Parse a kind from its display symbol (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use grid_drive_types::EntityKind;
    ///
    /// assert_eq!(EntityKind::from_symbol('t'), Some(EntityKind::Tree));
    /// assert_eq!(EntityKind::from_symbol('C'), Some(EntityKind::Player));
    /// assert_eq!(EntityKind::from_symbol('.'), None);
    /// ```
    pub fn from_symbol(ch: char) -> Option<Self> {
        match ch.to_ascii_uppercase() {
            'C' => Some(EntityKind::Player),
            'F' => Some(EntityKind::FuelStation),
            'T' => Some(EntityKind::Tree),
            'B' => Some(EntityKind::Building),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Player => "player",
            EntityKind::FuelStation => "fuelStation",
            EntityKind::Tree => "tree",
            EntityKind::Building => "building",
        }
    }
}

/// Reaction to the player driving into an occupied cell.
///
/// None of these relocate or remove the occupant. Only [`CollisionEffect::GameOver`]
/// changes game state: it ends the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollisionEffect {
    /// Generic blocked move (the player itself as a target).
    Blocked,
    /// Fuel station: informational.
    Refuel,
    /// Tree: informational.
    Damage,
    /// Building: the game ends.
    GameOver,
}

impl CollisionEffect {
    /// Message shown to the player.
    pub fn message(&self) -> &'static str {
        match self {
            CollisionEffect::Blocked => "Collision with an obstacle!",
            CollisionEffect::Refuel => "Fuel station collision-refueling",
            CollisionEffect::Damage => "Tree collision-damage!",
            CollisionEffect::GameOver => "Building collision-game over!",
        }
    }

    pub fn is_fatal(&self) -> bool {
        matches!(self, CollisionEffect::GameOver)
    }
}

/// Player moves, shared by keyboard input and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// One row up: `(-1, 0)`
    MoveUp,
    /// One column left: `(0, -1)`
    MoveLeft,
    /// One row down: `(1, 0)`
    MoveDown,
    /// One column right: `(0, 1)`
    MoveRight,
}

impl GameAction {
    /// Row/column delta applied to the player position.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            GameAction::MoveUp => (-1, 0),
            GameAction::MoveLeft => (0, -1),
            GameAction::MoveDown => (1, 0),
            GameAction::MoveRight => (0, 1),
        }
    }

    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use grid_drive_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveUp"), Some(GameAction::MoveUp));
    /// assert_eq!(GameAction::from_str("MOVERIGHT"), Some(GameAction::MoveRight));
    /// assert_eq!(GameAction::from_str("hardDrop"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveup" => Some(GameAction::MoveUp),
            "moveleft" => Some(GameAction::MoveLeft),
            "movedown" => Some(GameAction::MoveDown),
            "moveright" => Some(GameAction::MoveRight),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveUp => "moveUp",
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveDown => "moveDown",
            GameAction::MoveRight => "moveRight",
        }
    }
}
