//! Game controller
//!
//! Builds the world from the layout, forwards moves to it, and owns the one
//! piece of session state the world does not: whether the game is over and
//! which collision message to show.
//!
//! A building collision does not end the process here. It moves the game into
//! [`GameStatus::Over`]; every later move returns [`MoveOutcome::Halted`] and
//! callers decide what to do (the binary exits, tests inspect the state).

use tracing::{debug, info};

use crate::layout::{self, Layout};
use crate::snapshot::GameSnapshot;
use crate::types::{GameAction, Position, GRID_COLS, GRID_ROWS, PLAYER_START};
use crate::world::{MoveOutcome, World};

// The standard start must be on the standard board.
const _: () = assert!(
    PLAYER_START.x >= 0
        && PLAYER_START.y >= 0
        && (PLAYER_START.x as usize) < GRID_ROWS
        && (PLAYER_START.y as usize) < GRID_COLS
);

/// Session lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    /// Terminal: a fatal collision happened.
    Over,
}

/// Complete game session.
#[derive(Debug, Clone)]
pub struct GameState {
    world: World,
    layout: Layout,
    status: GameStatus,
    message: Option<&'static str>,
    moves: u32,
}

impl GameState {
    /// Standard 30x30 game with the player at (1, 1).
    pub fn new() -> Self {
        Self::build(GRID_ROWS, GRID_COLS, PLAYER_START)
    }

    /// Standard layout on a grid of any size. Layout cells outside the grid
    /// are skipped.
    ///
    /// Returns `None` when `player_start` is outside the grid: a game always
    /// has exactly one player.
    pub fn with_size(rows: usize, cols: usize, player_start: Position) -> Option<Self> {
        if !World::within(rows, cols, player_start) {
            debug!(rows, cols, ?player_start, "player start outside grid");
            return None;
        }
        Some(Self::build(rows, cols, player_start))
    }

    /// `player_start` must be inside `rows x cols`.
    fn build(rows: usize, cols: usize, player_start: Position) -> Self {
        let layout = layout::generate();
        let mut world = World::with_capacity(rows, cols, layout.len() + 1);

        for (pos, kind) in layout.placements() {
            world.place(pos, kind);
        }
        world.spawn_player(player_start);

        debug!(
            rows,
            cols,
            occupied = world.occupied_count(),
            "world built"
        );

        Self {
            world,
            layout,
            status: GameStatus::Running,
            message: None,
            moves: 0,
        }
    }

    pub fn apply_action(&mut self, action: GameAction) -> MoveOutcome {
        let (dx, dy) = action.delta();
        self.move_player(dx, dy)
    }

    /// Move the player by `(dx, dy)` unless the game is over.
    pub fn move_player(&mut self, dx: i32, dy: i32) -> MoveOutcome {
        if self.status == GameStatus::Over {
            return MoveOutcome::Halted;
        }

        let outcome = self.world.move_player(dx, dy);
        match outcome {
            MoveOutcome::Moved { .. } => {
                self.moves = self.moves.saturating_add(1);
                self.message = None;
            }
            MoveOutcome::Collision { kind, effect } => {
                self.message = Some(effect.message());
                if effect.is_fatal() {
                    self.status = GameStatus::Over;
                    info!(
                        kind = kind.as_str(),
                        moves = self.moves,
                        "game over"
                    );
                }
            }
            MoveOutcome::OutOfBounds | MoveOutcome::NoPlayer | MoveOutcome::Halted => {}
        }
        outcome
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_game_over(&self) -> bool {
        self.status == GameStatus::Over
    }

    /// Message of the most recent collision, cleared by the next successful move.
    pub fn last_message(&self) -> Option<&'static str> {
        self.message
    }

    pub fn player_position(&self) -> Option<Position> {
        self.world.player_position()
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Accepted moves so far.
    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    /// Fill an existing snapshot, reusing its cell buffer.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.rows = self.world.rows();
        out.cols = self.world.cols();
        self.world.render_into(&mut out.cells);
        out.player = self.world.player_position();
        out.message = self.message;
        out.game_over = self.is_game_over();
        out.moves = self.moves;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
