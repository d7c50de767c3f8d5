//! World module - the grid and collision resolution
//!
//! The world is a `rows x cols` grid where each cell is empty or holds the id of
//! one entity. Uses a flat vector, row-major (`x * cols + y`), with the entity
//! arena next to it.
//!
//! Policies:
//! - Placing outside the grid is a silent no-op.
//! - Placing inside the grid overwrites the occupant (last writer wins), except
//!   that obstacles never overwrite the player.
//! - Moving outside the grid is a silent no-op.
//! - Moving into an occupied cell reports the occupant's collision effect and
//!   leaves both the player and the occupant where they are.

use tracing::{debug, trace};

use crate::entity::{Entities, Entity, EntityId};
use crate::types::{CollisionEffect, EntityKind, Position, EMPTY_SYMBOL};

/// Result of asking the player to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The player now occupies `to`; `from` is empty.
    Moved { from: Position, to: Position },
    /// Target is outside the grid; nothing changed.
    OutOfBounds,
    /// Target is occupied; nothing moved.
    Collision {
        kind: EntityKind,
        effect: CollisionEffect,
    },
    /// The world has no player yet.
    NoPlayer,
    /// The game already ended; the world was not consulted.
    Halted,
}

impl MoveOutcome {
    pub fn is_fatal(&self) -> bool {
        matches!(self, MoveOutcome::Collision { effect, .. } if effect.is_fatal())
    }
}

/// The 2D spatial index of every entity.
#[derive(Debug, Clone)]
pub struct World {
    rows: usize,
    cols: usize,
    cells: Vec<Option<EntityId>>,
    entities: Entities,
    player: Option<EntityId>,
}

impl World {
    /// Create an empty `rows x cols` world.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self::with_capacity(rows, cols, 0)
    }

    /// Empty world with room for `entities` placements before the arena grows.
    pub fn with_capacity(rows: usize, cols: usize, entities: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![None; rows * cols],
            entities: Entities::with_capacity(entities),
            player: None,
        }
    }

    /// Whether `pos` lies inside a `rows x cols` grid.
    pub fn within(rows: usize, cols: usize, pos: Position) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < rows && (pos.y as usize) < cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline(always)]
    fn index(&self, pos: Position) -> Option<usize> {
        if !Self::within(self.rows, self.cols, pos) {
            return None;
        }
        Some(pos.x as usize * self.cols + pos.y as usize)
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        self.index(pos).is_some()
    }

    /// Place a new entity of `kind` at `pos`.
    ///
    /// Returns the id of the placed entity, or `None` when the placement was
    /// skipped (out of bounds, or an obstacle aimed at the player's cell).
    /// `EntityKind::Player` goes through [`World::spawn_player`].
    pub fn place(&mut self, pos: Position, kind: EntityKind) -> Option<EntityId> {
        if kind == EntityKind::Player {
            return self.spawn_player(pos);
        }

        let Some(idx) = self.index(pos) else {
            trace!(?pos, kind = kind.as_str(), "placement out of bounds, skipped");
            return None;
        };

        if self.cells[idx].is_some() && self.cells[idx] == self.player {
            trace!(?pos, kind = kind.as_str(), "placement on player cell, skipped");
            return None;
        }

        let id = self.entities.insert(kind, pos);
        self.cells[idx] = Some(id);
        Some(id)
    }

    /// Put the single player at `pos`, creating it on first use.
    ///
    /// An existing player is moved (its old cell is cleared). Whatever occupied
    /// `pos` is overwritten.
    pub fn spawn_player(&mut self, pos: Position) -> Option<EntityId> {
        let Some(idx) = self.index(pos) else {
            trace!(?pos, "player placement out of bounds, skipped");
            return None;
        };

        let id = match self.player {
            Some(id) => {
                if let Some(old) = self.entities.get(id).map(|e| e.position) {
                    if let Some(old_idx) = self.index(old) {
                        self.cells[old_idx] = None;
                    }
                }
                if let Some(player) = self.entities.get_mut(id) {
                    player.position = pos;
                }
                id
            }
            None => {
                let id = self.entities.insert(EntityKind::Player, pos);
                self.player = Some(id);
                id
            }
        };

        self.cells[idx] = Some(id);
        Some(id)
    }

    /// Id of the occupant at `pos`, `None` if empty or out of bounds.
    pub fn occupant_at(&self, pos: Position) -> Option<EntityId> {
        self.index(pos).and_then(|idx| self.cells[idx])
    }

    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(id)
    }

    /// Kind of the occupant at `pos`.
    pub fn kind_at(&self, pos: Position) -> Option<EntityKind> {
        self.occupant_at(pos)
            .and_then(|id| self.entities.get(id))
            .map(|e| e.kind)
    }

    pub fn player(&self) -> Option<&Entity> {
        self.player.and_then(|id| self.entities.get(id))
    }

    pub fn player_position(&self) -> Option<Position> {
        self.player().map(|p| p.position)
    }

    pub fn entities(&self) -> &Entities {
        &self.entities
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Try to move the player by `(dx, dy)`.
    pub fn move_player(&mut self, dx: i32, dy: i32) -> MoveOutcome {
        let Some(id) = self.player else {
            return MoveOutcome::NoPlayer;
        };
        let Some(from) = self.entities.get(id).map(|e| e.position) else {
            return MoveOutcome::NoPlayer;
        };

        let to = from.offset(dx, dy);
        let Some(to_idx) = self.index(to) else {
            trace!(?from, ?to, "move out of bounds ignored");
            return MoveOutcome::OutOfBounds;
        };

        if let Some(occupant) = self.cells[to_idx].and_then(|oid| self.entities.get(oid)) {
            let effect = occupant.collision_effect();
            debug!(
                ?to,
                kind = occupant.kind.as_str(),
                effect = effect.message(),
                "collision"
            );
            return MoveOutcome::Collision {
                kind: occupant.kind,
                effect,
            };
        }

        if let Some(from_idx) = self.index(from) {
            self.cells[from_idx] = None;
        }
        if let Some(player) = self.entities.get_mut(id) {
            player.position.set(to.x, to.y);
        }
        self.cells[to_idx] = Some(id);

        debug!(?from, ?to, "player moved");
        MoveOutcome::Moved { from, to }
    }

    #[inline]
    fn symbol_at_index(&self, idx: usize) -> char {
        self.cells[idx]
            .and_then(|id| self.entities.get(id))
            .map(|e| e.symbol())
            .unwrap_or(EMPTY_SYMBOL)
    }

    /// Render into a flat row-major buffer, reusing its allocation.
    pub fn render_into(&self, out: &mut Vec<char>) {
        out.clear();
        out.extend((0..self.cells.len()).map(|idx| self.symbol_at_index(idx)));
    }

    /// One `Vec<char>` per row: entity symbol, or `.` for empty cells.
    pub fn render(&self) -> Vec<Vec<char>> {
        (0..self.rows)
            .map(|x| {
                (0..self.cols)
                    .map(|y| self.symbol_at_index(x * self.cols + y))
                    .collect()
            })
            .collect()
    }
}
